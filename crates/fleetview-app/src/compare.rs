// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Per-column comparison rules.
//!
//! None of these fail: malformed values fall back to a fixed position
//! (numbers last, unknown ranks last) or compare equal (dates). The pairwise
//! rules for dates and ids are not total orders, so [`sort_keyed`] orders
//! rows with a merge sort that tolerates that, and leaves rows whose date
//! does not parse in their original slots.

use std::cmp::Ordering;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::SortDirection;
use crate::record::Cell;

/// Rank given to values missing from a [`RankTable`].
pub const UNKNOWN_RANK: u32 = 99;

/// Explicit ordering for a small set of enum-like strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    entries: Vec<(String, u32)>,
}

impl RankTable {
    /// Ranks values by their position in `values`.
    pub fn ordered(values: &[&str]) -> Self {
        Self {
            entries: values
                .iter()
                .zip(0_u32..)
                .map(|(value, rank)| ((*value).to_owned(), rank))
                .collect(),
        }
    }

    pub fn rank(&self, value: &str) -> u32 {
        self.entries
            .iter()
            .find(|(known, _)| known == value)
            .map(|(_, rank)| *rank)
            .unwrap_or(UNKNOWN_RANK)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Numeric,
    Date,
    EnumRank(RankTable),
    IdNumericSuffix,
}

impl ColumnKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Numeric => "numeric",
            Self::Date => "date",
            Self::EnumRank(_) => "enum-rank",
            Self::IdNumericSuffix => "id-numeric-suffix",
        }
    }

    pub fn compare(&self, left: &Cell, right: &Cell) -> Ordering {
        match self {
            Self::Text => compare_text(&left.as_text(), &right.as_text()),
            Self::Numeric => compare_numeric(left.as_number(), right.as_number()),
            Self::Date => compare_date(&left.as_text(), &right.as_text()),
            Self::EnumRank(table) => {
                table.rank(&left.as_text()).cmp(&table.rank(&right.as_text()))
            }
            Self::IdNumericSuffix => compare_id_suffix(&left.as_text(), &right.as_text()),
        }
    }

    pub fn compare_directed(
        &self,
        left: &Cell,
        right: &Cell,
        direction: SortDirection,
    ) -> Ordering {
        match direction {
            SortDirection::Asc => self.compare(left, right),
            SortDirection::Desc => self.compare(left, right).reverse(),
        }
    }
}

/// Case-insensitive compare. Case variants are equal; callers keep order
/// with a stable sort. Folding is per char, not locale collation, so
/// accented letters sort after their base letters.
pub fn compare_text(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

/// `None` stands for a non-numeric value and sorts as `+inf`.
pub fn compare_numeric(left: Option<f64>, right: Option<f64>) -> Ordering {
    let left = left.unwrap_or(f64::INFINITY);
    let right = right.unwrap_or(f64::INFINITY);
    left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}

pub fn compare_date(left: &str, right: &str) -> Ordering {
    match (parse_timestamp(left), parse_timestamp(right)) {
        (Some(left), Some(right)) => left.cmp(&right),
        _ => Ordering::Equal,
    }
}

pub fn compare_id_suffix(left: &str, right: &str) -> Ordering {
    match (numeric_suffix(left), numeric_suffix(right)) {
        (Some(left), Some(right)) => left.cmp(&right),
        _ => compare_text(left, right),
    }
}

/// Trailing run of ASCII digits, e.g. `"M014"` -> `14`.
pub fn numeric_suffix(value: &str) -> Option<u64> {
    let digits = value
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    value[value.len() - digits..].parse().ok()
}

/// Stable ordering of `(cell, item)` pairs by `kind`. Never panics, even
/// where the pairwise rule is not transitive.
pub fn sort_keyed<T>(
    items: Vec<(Cell, T)>,
    kind: &ColumnKind,
    direction: SortDirection,
) -> Vec<T> {
    match kind {
        ColumnKind::Date => sort_dated(items, direction),
        _ => merge_sort_by(items, |(left, _), (right, _)| {
            kind.compare_directed(left, right, direction)
        })
        .into_iter()
        .map(|(_, item)| item)
        .collect(),
    }
}

/// Sorts the rows whose date parses among themselves. Rows with an
/// unparsable date keep their slot.
fn sort_dated<T>(items: Vec<(Cell, T)>, direction: SortDirection) -> Vec<T> {
    let mut slots = Vec::new();
    let mut dated = Vec::new();
    let mut placed: Vec<Option<T>> = Vec::with_capacity(items.len());
    for (index, (cell, item)) in items.into_iter().enumerate() {
        match parse_timestamp(&cell.as_text()) {
            Some(stamp) => {
                slots.push(index);
                dated.push((stamp, item));
                placed.push(None);
            }
            None => placed.push(Some(item)),
        }
    }

    dated.sort_by(|(left, _), (right, _)| match direction {
        SortDirection::Asc => left.cmp(right),
        SortDirection::Desc => right.cmp(left),
    });
    for (slot, (_, item)) in slots.into_iter().zip(dated) {
        placed[slot] = Some(item);
    }
    placed.into_iter().flatten().collect()
}

/// Top-down stable merge sort. Ties keep the left item first.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_with(items, &mut compare)
}

fn merge_sort_with<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_with(items, compare);
    let right = merge_sort_with(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Nanoseconds since the epoch for `YYYY-MM-DD`, a naive
/// `YYYY-MM-DDTHH:MM:SS` (read as UTC) or an RFC 3339 timestamp.
pub fn parse_timestamp(raw: &str) -> Option<i128> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) {
        return Some(date.midnight().assume_utc().unix_timestamp_nanos());
    }
    if let Ok(datetime) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(datetime.unix_timestamp_nanos());
    }
    PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .ok()
    .map(|datetime| datetime.assume_utc().unix_timestamp_nanos())
}
