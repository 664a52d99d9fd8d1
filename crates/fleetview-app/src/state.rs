// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::debug;

use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::record::TableRecord;
use crate::schema::TableSchema;
use crate::sort::SortStatus;
use crate::view::{Query, ViewResult, compute_view};
use crate::StatusFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    SetSearch(String),
    SetStatusFilter(StatusFilter),
    ActivateSort(String),
    ClearSort,
    NextPage,
    PrevPage,
    GoToPage(usize),
    SetPageSize(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    SearchChanged(String),
    StatusFilterChanged(StatusFilter),
    SortChanged(SortStatus),
    PageChanged(usize),
    PageSizeChanged(usize),
    StatusUpdated(String),
}

/// Owns the query for one table and applies user commands to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    query: Query,
    last_total_pages: Option<usize>,
    status_line: Option<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: Query::with_page_size(page_size),
            last_total_pages: None,
            status_line: None,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn status_line(&self) -> Option<&str> {
        self.status_line.as_deref()
    }

    pub fn dispatch(&mut self, command: TableCommand) -> Vec<TableEvent> {
        match command {
            TableCommand::SetSearch(text) => {
                self.query.search_text = text.clone();
                self.last_total_pages = None;
                let mut events = vec![TableEvent::SearchChanged(text)];
                events.extend(self.set_page(1));
                events
            }
            TableCommand::SetStatusFilter(filter) => {
                self.query.status_filter = filter.clone();
                self.last_total_pages = None;
                let message = format!("status {filter}");
                let mut events = vec![
                    TableEvent::StatusFilterChanged(filter),
                    self.set_status(message),
                ];
                events.extend(self.set_page(1));
                events
            }
            TableCommand::ActivateSort(column) => {
                self.query.sort = self.query.sort.activate(&column);
                self.sort_events()
            }
            TableCommand::ClearSort => {
                self.query.sort = self.query.sort.clear();
                self.sort_events()
            }
            TableCommand::NextPage => {
                let next = self.query.page.saturating_add(1);
                let next = match self.last_total_pages {
                    Some(total_pages) => next.min(total_pages),
                    None => next,
                };
                self.set_page(next)
            }
            TableCommand::PrevPage => self.set_page(self.query.page.saturating_sub(1).max(1)),
            TableCommand::GoToPage(page) => self.set_page(page.max(1)),
            TableCommand::SetPageSize(size) => {
                let size = size.max(1);
                self.query.page_size = size;
                self.last_total_pages = None;
                let mut events = vec![TableEvent::PageSizeChanged(size)];
                events.extend(self.set_page(1));
                events
            }
        }
    }

    /// Computes the view and writes the clamped page back into the query.
    pub fn view<'a, R: TableRecord>(
        &mut self,
        records: &'a [R],
        schema: &TableSchema,
    ) -> ViewResult<'a, R> {
        let view = compute_view(records, schema, &self.query);
        if view.page != self.query.page {
            debug!(
                requested = self.query.page,
                clamped = view.page,
                "clamping table page"
            );
            self.query.page = view.page;
        }
        self.last_total_pages = Some(view.total_pages);
        view
    }

    fn sort_events(&mut self) -> Vec<TableEvent> {
        let status = self.query.sort.status();
        let message = status.message();
        vec![TableEvent::SortChanged(status), self.set_status(message)]
    }

    fn set_page(&mut self, page: usize) -> Vec<TableEvent> {
        if self.query.page == page {
            return Vec::new();
        }
        self.query.page = page;
        vec![TableEvent::PageChanged(page)]
    }

    fn set_status(&mut self, message: String) -> TableEvent {
        self.status_line = Some(message.clone());
        TableEvent::StatusUpdated(message)
    }
}
