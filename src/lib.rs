//! slimframe: shrink tabular datasets to minimal numeric widths.
//!
//! One linear pipeline: load a CSV into a typed [`Frame`], rewrite each
//! numeric column to the narrowest storage width that holds its observed
//! value range, and persist the result as a columnar Arrow IPC (Feather)
//! file for fast typed reloads.
//!
//! # Key Types
//!
//! - [`Frame`] / [`Column`] - the tabular data model
//! - [`reduce`] / [`ReduceReport`] - the width-reduction pass
//! - [`io::read_csv`] / [`io::write_ipc`] / [`io::read_ipc`] - the loader
//!   and writer collaborators
//!
//! # Example
//!
//! ```no_run
//! use slimframe::{io, reduce};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut frame = io::read_csv("data/train.csv")?;
//! let report = reduce::reduce(&mut frame);
//! println!("{report}");
//! io::write_ipc(&frame, "data/train.feather")?;
//! # Ok(())
//! # }
//! ```

pub mod frame;
pub mod io;
pub mod reduce;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use frame::{Column, ColumnData, ColumnKind, FloatWidth, Frame, FrameError, IntWidth};
pub use reduce::{reduce, ReduceReport};
