//! Tabular frame data model.
//!
//! # Key Types
//!
//! - [`Frame`]: ordered named columns with uniform row count
//! - [`Column`]: a named, homogeneously-typed value sequence
//! - [`ColumnData`]: closed tagged storage enum (the column's declared kind)
//! - [`IntWidth`] / [`FloatWidth`]: the candidate storage-width ladders
//!
//! # Storage Layout
//!
//! Columns own their values contiguously (`Vec<T>` per column), so a width
//! rewrite replaces the whole vector. Float columns use NaN as the
//! missing-value marker; string columns use `None`.

mod column;
#[allow(clippy::module_inception)]
mod frame;

pub use column::{Column, ColumnData, ColumnKind, FloatWidth, IntWidth};
pub use frame::{Frame, FrameError};
