//! Table-state engine for the waitlist dashboard.
//!
//! Owns everything the table renders from: the column registry, the row
//! store, the search query, the sort configuration, the pagination cursor,
//! and the selection set. The presentation shell renders derived views of
//! this state and reports user intents back through the operations on
//! [`TableState`]; nothing outside this crate mutates the state directly.

pub mod columns;
pub mod drawer;
pub mod model;
pub mod selection;
pub mod view;

mod table;

pub use table::*;

pub mod prelude {
    pub use crate::TableState;
    pub use crate::LoadPhase;
    pub use crate::columns::{Column, ColumnSet};
    pub use crate::drawer::{DrawerState, NavTab};
    pub use crate::model::{FieldError, Record, Value};
    pub use crate::selection::Selection;
    pub use crate::view::{PAGE_SIZE, SortConfig, SortDirection};
}
