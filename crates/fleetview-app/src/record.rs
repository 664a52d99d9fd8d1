// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single typed field value as seen by the table engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Display form used for substring search, status equality and output.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => format_number(*value),
            Self::Bool(value) => value.to_string(),
            Self::Missing => String::new(),
        }
    }

    /// Numeric reading of the cell. Numeric strings count; `NaN` does not.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(value) => value.trim().parse::<f64>().ok()?,
            Self::Bool(_) | Self::Missing => return None,
        };
        if value.is_nan() { None } else { Some(value) }
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    value.to_string()
}

/// Anything the table engine can filter, sort and page.
pub trait TableRecord {
    /// Value of `field`, or [`Cell::Missing`] for unknown fields.
    fn cell(&self, field: &str) -> Cell;
}

impl<T: TableRecord + ?Sized> TableRecord for &T {
    fn cell(&self, field: &str) -> Cell {
        (**self).cell(field)
    }
}

/// Untyped record that keeps every field exactly as received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, Cell>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: Cell) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: Cell) {
        self.fields.insert(field.to_owned(), value);
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TableRecord for RawRecord {
    fn cell(&self, field: &str) -> Cell {
        self.fields.get(field).cloned().unwrap_or(Cell::Missing)
    }
}
