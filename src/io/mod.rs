//! Frame I/O: the loader and writer collaborators around the reducer.
//!
//! - [`csv::read_csv`]: row-oriented delimited text → [`Frame`] with
//!   inferred per-column kinds
//! - [`ipc::write_ipc`] / [`ipc::read_ipc`]: [`Frame`] ↔ columnar Arrow IPC
//!   (Feather) files
//!
//! [`Frame`]: crate::frame::Frame

pub mod csv;
mod error;
pub mod ipc;

pub use csv::read_csv;
pub use error::{FrameLoadError, FrameWriteError};
pub use ipc::{read_ipc, write_ipc};
