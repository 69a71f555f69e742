//! Headless logic behind the `ui_kit` input and table primitives.
//!
//! Nothing here touches the DOM. The crate owns the letter/number sequence
//! stepping used by number inputs and the search/pagination view over table
//! rows, so both can be exercised without a rendering runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod data_view;
mod error;
pub mod sequence;

pub use data_view::{
    cell_text, normalize_search_text, rows_from_json, Cell, CellRender, Column, DataView,
    DataViewConfig, Row, ViewState, PAGE_SIZE,
};
pub use error::ConfigError;
pub use sequence::{
    decrement_alpha, decrement_alphanumeric, format_decimal, increment_alpha,
    increment_alphanumeric, SequenceField, SequenceFieldConfig, SequenceMode,
    DEFAULT_MAX_DECIMALS,
};
