// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::SortDirection;

/// Column sort state. Repeatedly activating one column cycles
/// asc -> desc -> unsorted; activating another column restarts at asc.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending(String),
    Descending(String),
}

impl SortState {
    pub fn activate(&self, column: &str) -> Self {
        match self {
            Self::Ascending(current) if current == column => Self::Descending(column.to_owned()),
            Self::Descending(current) if current == column => Self::Unsorted,
            _ => Self::Ascending(column.to_owned()),
        }
    }

    pub fn clear(&self) -> Self {
        Self::Unsorted
    }

    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Unsorted => None,
            Self::Ascending(column) | Self::Descending(column) => Some(column),
        }
    }

    /// Direction to apply. `Asc` while unsorted.
    pub const fn direction(&self) -> SortDirection {
        match self {
            Self::Descending(_) => SortDirection::Desc,
            Self::Unsorted | Self::Ascending(_) => SortDirection::Asc,
        }
    }

    pub fn key(&self) -> (Option<&str>, SortDirection) {
        (self.column(), self.direction())
    }

    pub fn status(&self) -> SortStatus {
        match self {
            Self::Unsorted => SortStatus::Cleared,
            Self::Ascending(column) => SortStatus::Asc(column.clone()),
            Self::Descending(column) => SortStatus::Desc(column.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortStatus {
    Asc(String),
    Desc(String),
    Cleared,
}

impl SortStatus {
    pub fn message(&self) -> String {
        match self {
            Self::Asc(column) => format!("sort {column} asc"),
            Self::Desc(column) => format!("sort {column} desc"),
            Self::Cleared => "sort cleared".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SortState, SortStatus};
    use crate::SortDirection;

    #[test]
    fn same_column_cycles_through_three_states() {
        let first = SortState::Unsorted.activate("risk");
        assert_eq!(first, SortState::Ascending("risk".to_owned()));

        let second = first.activate("risk");
        assert_eq!(second.key(), (Some("risk"), SortDirection::Desc));

        let third = second.activate("risk");
        assert_eq!(third, SortState::Unsorted);
        assert_eq!(third.column(), None);

        assert_eq!(third.activate("risk"), first);
    }

    #[test]
    fn clear_resets_any_state() {
        assert_eq!(SortState::Descending("eta".to_owned()).clear(), SortState::Unsorted);
        assert_eq!(SortState::Unsorted.clear().status(), SortStatus::Cleared);
    }

    #[test]
    fn switching_columns_restarts_at_ascending() {
        let descending = SortState::Descending("name".to_owned());
        assert_eq!(
            descending.activate("id"),
            SortState::Ascending("id".to_owned())
        );
        assert_eq!(
            SortState::Ascending("name".to_owned()).activate("id"),
            SortState::Ascending("id".to_owned())
        );
    }

    #[test]
    fn unsorted_reports_ascending_direction() {
        assert_eq!(SortState::Unsorted.key(), (None, SortDirection::Asc));
    }

    #[test]
    fn status_messages() {
        assert_eq!(
            SortState::Ascending("risk".to_owned()).status(),
            SortStatus::Asc("risk".to_owned())
        );
        assert_eq!(SortStatus::Desc("id".to_owned()).message(), "sort id desc");
        assert_eq!(SortStatus::Cleared.message(), "sort cleared");
    }
}
