//! Numeric width reduction.
//!
//! [`reduce`] rewrites each numeric column of a [`Frame`] to the narrowest
//! storage width that holds its observed value range, and reports the byte
//! footprint before and after. This is the only decision logic in the
//! pipeline; loading and persisting live in [`crate::io`].
//!
//! Integer narrowing is exact: every value round-trips. Float narrowing is
//! explicitly lossy: a column drops from `f64` to `f32` whenever no finite
//! value overflows to infinity at the narrower width, accepting precision
//! loss up to `f32` round-off (2⁻²⁴ relative). NaN missing-value markers
//! survive the conversion.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::frame::{ColumnData, Frame, IntWidth};

/// Byte footprint before and after a reduction pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ReduceReport {
    /// Total column bytes before reduction.
    pub bytes_before: usize,

    /// Total column bytes after reduction.
    pub bytes_after: usize,
}

impl ReduceReport {
    /// Footprint after reduction, in mebibytes.
    pub fn size_after_mb(&self) -> f64 {
        self.bytes_after as f64 / (1024.0 * 1024.0)
    }

    /// Percentage of bytes shed. Zero for an empty frame.
    pub fn reduction_pct(&self) -> f64 {
        if self.bytes_before == 0 {
            return 0.0;
        }
        100.0 * (self.bytes_before - self.bytes_after) as f64 / self.bytes_before as f64
    }
}

impl fmt::Display for ReduceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mem. usage decreased to {:.2} Mb ({:.1}% reduction)",
            self.size_after_mb(),
            self.reduction_pct()
        )
    }
}

/// Rewrite every numeric column of `frame` to its minimal storage width.
///
/// Columns are visited in frame order. Signed-integer columns narrow to the
/// first [`IntWidth`] covering their observed `[min, max]`; empty integer
/// columns carry no sizing information and are left unchanged.
/// Floating-point columns narrow from `f64` to `f32` unless a finite value
/// would overflow to infinity. Non-numeric columns pass through untouched.
///
/// Running `reduce` on an already-reduced frame is a no-op: the minimal
/// width of a column is stable under re-selection.
pub fn reduce(frame: &mut Frame) -> ReduceReport {
    let bytes_before = frame.byte_size();
    for col in frame.columns_mut() {
        let name = col.name().to_string();
        reduce_column(&name, col.data_mut());
    }
    let bytes_after = frame.byte_size();
    ReduceReport {
        bytes_before,
        bytes_after,
    }
}

fn reduce_column(name: &str, data: &mut ColumnData) {
    match data {
        ColumnData::I8(_) | ColumnData::I16(_) | ColumnData::I32(_) | ColumnData::I64(_) => {
            reduce_int(name, data)
        }
        ColumnData::F64(values) => {
            if f64_fits_f32(values) {
                let narrow: Vec<f32> = values.iter().map(|&v| v as f32).collect();
                debug!("{name}: F64 -> F32");
                *data = ColumnData::F32(narrow);
            }
        }
        // f32 is already the narrowest non-trivial float width.
        ColumnData::F32(_) => {}
        ColumnData::Bool(_) | ColumnData::Str(_) => {}
    }
}

fn reduce_int(name: &str, data: &mut ColumnData) {
    let Some((min, max)) = int_range(data) else {
        // Empty column: nothing to size against.
        return;
    };
    let current = match data.int_width() {
        Some(w) => w,
        None => return,
    };
    let target = IntWidth::fitting(min, max);
    if target >= current {
        return;
    }
    debug!("{name}: {current:?} -> {target:?}");
    let narrowed = match (target, &*data) {
        (IntWidth::I8, ColumnData::I16(v)) => ColumnData::I8(v.iter().map(|&x| x as i8).collect()),
        (IntWidth::I8, ColumnData::I32(v)) => ColumnData::I8(v.iter().map(|&x| x as i8).collect()),
        (IntWidth::I8, ColumnData::I64(v)) => ColumnData::I8(v.iter().map(|&x| x as i8).collect()),
        (IntWidth::I16, ColumnData::I32(v)) => {
            ColumnData::I16(v.iter().map(|&x| x as i16).collect())
        }
        (IntWidth::I16, ColumnData::I64(v)) => {
            ColumnData::I16(v.iter().map(|&x| x as i16).collect())
        }
        (IntWidth::I32, ColumnData::I64(v)) => {
            ColumnData::I32(v.iter().map(|&x| x as i32).collect())
        }
        // target >= current was ruled out above.
        (_, other) => other.clone(),
    };
    *data = narrowed;
}

/// Observed `[min, max]` of an integer column, `None` when empty.
fn int_range(data: &ColumnData) -> Option<(i64, i64)> {
    fn range<T: Copy + Into<i64>>(values: &[T]) -> Option<(i64, i64)> {
        let mut iter = values.iter().map(|&v| v.into());
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for v in iter {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
    match data {
        ColumnData::I8(v) => range(v),
        ColumnData::I16(v) => range(v),
        ColumnData::I32(v) => range(v),
        ColumnData::I64(v) => range(v),
        _ => None,
    }
}

/// True when every finite value stays finite after narrowing to `f32`.
///
/// NaN markers are excluded from the check; they narrow to NaN and remain
/// missing. Infinities present in the source stay infinite either way.
fn f64_fits_f32(values: &[f64]) -> bool {
    values
        .iter()
        .filter(|v| v.is_finite())
        .all(|&v| (v as f32).is_finite())
}
