// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameterized query modules, one per table.

pub mod departments;
pub mod employees;
