// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod compare;
pub mod decode;
pub mod demo;
pub mod filter;
pub mod ids;
pub mod model;
pub mod paginate;
pub mod record;
pub mod schema;
pub mod sort;
pub mod state;
pub mod view;

pub use compare::{ColumnKind, RankTable};
pub use filter::StatusFilter;
pub use ids::*;
pub use model::*;
pub use paginate::{DEFAULT_PAGE_SIZE, Page, paginate};
pub use record::{Cell, RawRecord, TableRecord};
pub use schema::{ColumnSpec, TableSchema, alert_schema, fleet_schema, ticket_schema};
pub use sort::{SortState, SortStatus};
pub use state::{TableCommand, TableEvent, TableState};
pub use view::{Query, ViewResult, compute_view};
