// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::SortDirection;
use crate::compare::sort_keyed;
use crate::filter::{StatusFilter, matches};
use crate::paginate::{DEFAULT_PAGE_SIZE, paginate};
use crate::record::{Cell, TableRecord};
use crate::schema::TableSchema;
use crate::sort::SortState;

/// User-chosen search, filter, sort and page parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub search_text: String,
    pub status_filter: StatusFilter,
    pub sort: SortState,
    pub page: usize,
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl Query {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            status_filter: StatusFilter::All,
            sort: SortState::Unsorted,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn sort_column(&self) -> Option<&str> {
        self.sort.column()
    }

    pub const fn sort_direction(&self) -> SortDirection {
        self.sort.direction()
    }
}

/// Ready-to-render page of records plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResult<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

impl<R> ViewResult<'_, R> {
    /// Footer text such as `"11-20 of 26"`.
    pub fn range_label(&self) -> String {
        if self.total_count == 0 {
            return "No results".to_owned();
        }
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_count);
        format!("{}-{} of {}", start + 1, end, self.total_count)
    }

    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub const fn has_next(&self) -> bool {
        self.total_count > 0 && self.page < self.total_pages
    }
}

/// Filter, stable-sort and page `records`. Pure: identical inputs give
/// identical output.
pub fn compute_view<'a, R: TableRecord>(
    records: &'a [R],
    schema: &TableSchema,
    query: &Query,
) -> ViewResult<'a, R> {
    let mut filtered: Vec<&'a R> = records
        .iter()
        .filter(|record| matches(*record, schema, &query.search_text, &query.status_filter))
        .collect();

    if let Some(column) = query.sort_column() {
        let kind = schema.kind_for(column);
        let direction = query.sort_direction();
        let keyed: Vec<(Cell, &'a R)> = filtered
            .into_iter()
            .map(|record| (record.cell(column), record))
            .collect();
        filtered = sort_keyed(keyed, kind, direction);
    }

    let page_size = query.page_size.max(1);
    let page = paginate(&filtered, query.page, page_size);
    debug!(
        table = %schema.title,
        total = records.len(),
        filtered = filtered.len(),
        sort = ?query.sort.key(),
        sort_kind = ?query.sort_column().map(|column| schema.kind_for(column).label()),
        requested_page = query.page,
        page = page.page,
        total_pages = page.total_pages,
        "computed table view"
    );

    ViewResult {
        rows: page.rows.to_vec(),
        total_count: filtered.len(),
        page: page.page,
        total_pages: page.total_pages,
        page_size,
    }
}
