// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delete path resolution: `7` deletes one employee, `3-5-9` deletes several.

use std::str::FromStr;

use crate::error::ApiError;

const BATCH_SEPARATOR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    One(i64),
    Many(Vec<i64>),
}

impl FromStr for DeleteTarget {
    type Err = ApiError;

    /// Every segment must be an integer, otherwise the whole token is
    /// rejected and nothing is deleted.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || ApiError::MalformedIdentifier(raw.to_string());
        if raw.contains(BATCH_SEPARATOR) {
            let ids = raw
                .split(BATCH_SEPARATOR)
                .map(|segment| segment.parse::<i64>().map_err(|_| malformed()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(DeleteTarget::Many(ids))
        } else {
            raw.parse::<i64>().map(DeleteTarget::One).map_err(|_| malformed())
        }
    }
}
