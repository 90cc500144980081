//! Column storage and the numeric width ladders.
//!
//! A [`Column`] pairs a name with a [`ColumnData`] payload. `ColumnData` is a
//! closed tagged enum: the column's kind is fixed by its variant at load time
//! and never re-derived from a type-name string.

use std::mem;

/// Logical column kinds, as seen by the reducer.
///
/// Only [`ColumnKind::SignedInt`] and [`ColumnKind::Float`] columns are
/// candidates for width reduction; everything else passes through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Signed integer storage (`i8` through `i64`).
    SignedInt,

    /// Floating-point storage (`f32` or `f64`).
    ///
    /// Missing values: NaN.
    Float,

    /// Boolean, string, or other non-numeric storage.
    Other,
}

impl ColumnKind {
    /// Returns true if columns of this kind are subject to width reduction.
    #[inline]
    pub fn is_reducible(&self) -> bool {
        matches!(self, ColumnKind::SignedInt | ColumnKind::Float)
    }
}

/// Integer storage widths, narrowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
}

impl IntWidth {
    /// The integer width ladder, in ascending width order.
    pub const LADDER: [IntWidth; 4] = [IntWidth::I8, IntWidth::I16, IntWidth::I32, IntWidth::I64];

    /// Smallest representable value at this width.
    #[inline]
    pub fn min_value(&self) -> i64 {
        match self {
            IntWidth::I8 => i8::MIN as i64,
            IntWidth::I16 => i16::MIN as i64,
            IntWidth::I32 => i32::MIN as i64,
            IntWidth::I64 => i64::MIN,
        }
    }

    /// Largest representable value at this width.
    #[inline]
    pub fn max_value(&self) -> i64 {
        match self {
            IntWidth::I8 => i8::MAX as i64,
            IntWidth::I16 => i16::MAX as i64,
            IntWidth::I32 => i32::MAX as i64,
            IntWidth::I64 => i64::MAX,
        }
    }

    /// Storage bytes per value.
    #[inline]
    pub fn n_bytes(&self) -> usize {
        match self {
            IntWidth::I8 => 1,
            IntWidth::I16 => 2,
            IntWidth::I32 => 4,
            IntWidth::I64 => 8,
        }
    }

    /// The narrowest width whose range covers `[min, max]`.
    ///
    /// Always succeeds: `I64` covers every `i64` range.
    pub fn fitting(min: i64, max: i64) -> IntWidth {
        for width in Self::LADDER {
            if min >= width.min_value() && max <= width.max_value() {
                return width;
            }
        }
        IntWidth::I64
    }
}

/// Floating-point storage widths, narrowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FloatWidth {
    F32,
    F64,
}

impl FloatWidth {
    /// Storage bytes per value.
    #[inline]
    pub fn n_bytes(&self) -> usize {
        match self {
            FloatWidth::F32 => 4,
            FloatWidth::F64 => 8,
        }
    }
}

/// Typed column storage.
///
/// The variant is the column's declared kind: resolved once when the column
/// is built (by the CSV loader or the IPC reader) and carried through the
/// pipeline. Float columns use NaN as the missing-value marker; string
/// columns use `None`.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    Bool(Vec<bool>),
    Str(Vec<Option<String>>),
}

impl ColumnData {
    /// The logical kind of this storage.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::I8(_) | ColumnData::I16(_) | ColumnData::I32(_) | ColumnData::I64(_) => {
                ColumnKind::SignedInt
            }
            ColumnData::F32(_) | ColumnData::F64(_) => ColumnKind::Float,
            ColumnData::Bool(_) | ColumnData::Str(_) => ColumnKind::Other,
        }
    }

    /// Number of values (rows) stored.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::I8(v) => v.len(),
            ColumnData::I16(v) => v.len(),
            ColumnData::I32(v) => v.len(),
            ColumnData::I64(v) => v.len(),
            ColumnData::F32(v) => v.len(),
            ColumnData::F64(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// In-memory byte footprint of the stored values.
    ///
    /// Strings count their slot plus heap bytes; this only feeds the
    /// reduction report, where non-numeric columns contribute equally to
    /// both sides.
    pub fn byte_size(&self) -> usize {
        match self {
            ColumnData::I8(v) => v.len() * IntWidth::I8.n_bytes(),
            ColumnData::I16(v) => v.len() * IntWidth::I16.n_bytes(),
            ColumnData::I32(v) => v.len() * IntWidth::I32.n_bytes(),
            ColumnData::I64(v) => v.len() * IntWidth::I64.n_bytes(),
            ColumnData::F32(v) => v.len() * FloatWidth::F32.n_bytes(),
            ColumnData::F64(v) => v.len() * FloatWidth::F64.n_bytes(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::Str(v) => {
                let heap: usize = v.iter().flatten().map(|s| s.len()).sum();
                v.len() * mem::size_of::<Option<String>>() + heap
            }
        }
    }

    /// The integer width of this storage, if it is a signed-integer column.
    pub fn int_width(&self) -> Option<IntWidth> {
        match self {
            ColumnData::I8(_) => Some(IntWidth::I8),
            ColumnData::I16(_) => Some(IntWidth::I16),
            ColumnData::I32(_) => Some(IntWidth::I32),
            ColumnData::I64(_) => Some(IntWidth::I64),
            _ => None,
        }
    }

    /// The float width of this storage, if it is a floating-point column.
    pub fn float_width(&self) -> Option<FloatWidth> {
        match self {
            ColumnData::F32(_) => Some(FloatWidth::F32),
            ColumnData::F64(_) => Some(FloatWidth::F64),
            _ => None,
        }
    }
}

/// A named, homogeneously-typed column.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Create a column from a name and typed storage.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Create an `i64` column.
    pub fn i64(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self::new(name, ColumnData::I64(values))
    }

    /// Create an `f64` column. NaN values are missing-value markers.
    pub fn f64(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, ColumnData::F64(values))
    }

    /// Create a string column. `None` values are missing.
    pub fn str(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self::new(name, ColumnData::Str(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut ColumnData {
        &mut self.data
    }

    /// The logical kind of this column.
    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// In-memory byte footprint of the column values.
    pub fn byte_size(&self) -> usize {
        self.data.byte_size()
    }
}
