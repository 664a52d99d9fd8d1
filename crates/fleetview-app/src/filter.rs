// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::TableRecord;
use crate::schema::TableSchema;

/// Equality filter on a table's status-like field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => f.write_str(value),
        }
    }
}

/// Search plus status filter over the schema's searchable and status
/// fields. A missing field never matches.
pub fn matches<R: TableRecord>(
    record: &R,
    schema: &TableSchema,
    search_text: &str,
    status_filter: &StatusFilter,
) -> bool {
    matches_fields(
        record,
        schema.searchable.as_slice(),
        &schema.status_field,
        search_text,
        status_filter,
    )
}

pub fn matches_fields<R: TableRecord, S: AsRef<str>>(
    record: &R,
    searchable: &[S],
    status_field: &str,
    search_text: &str,
    status_filter: &StatusFilter,
) -> bool {
    matches_search(record, searchable, search_text)
        && matches_status(record, status_field, status_filter)
}

pub fn matches_search<R: TableRecord, S: AsRef<str>>(
    record: &R,
    searchable: &[S],
    search_text: &str,
) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    searchable.iter().any(|field| {
        let cell = record.cell(field.as_ref());
        !cell.is_missing() && cell.as_text().to_lowercase().contains(&needle)
    })
}

pub fn matches_status<R: TableRecord>(
    record: &R,
    status_field: &str,
    status_filter: &StatusFilter,
) -> bool {
    let StatusFilter::Only(expected) = status_filter else {
        return true;
    };
    let cell = record.cell(status_field);
    !cell.is_missing() && cell.as_text() == *expected
}
