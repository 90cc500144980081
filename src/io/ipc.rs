//! Arrow IPC (Feather) writer and reader.
//!
//! Each frame column becomes one Arrow field (`Int8`..`Int64`, `Float32`,
//! `Float64`, `Boolean`, `Utf8`) in a single record batch, so a reduced
//! frame persists at exactly its reduced width and reloads fully typed.
//! The writer performs no further downcasting.
//!
//! Float NaN markers are stored as NaN values, not Arrow nulls; only
//! string columns carry a validity bitmap. On read, any Arrow type outside
//! the closed set (or nulls in a non-nullable column) is rejected rather
//! than guessed at.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int16Array, Int32Array, Int64Array,
    Int8Array, PrimitiveArray, StringArray,
};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Field, Int16Type, Int32Type, Int64Type, Int8Type, Schema,
};
use arrow::ipc::reader::FileReader;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::{RecordBatch, RecordBatchOptions};

use crate::frame::{Column, ColumnData, Frame};
use crate::io::error::{FrameLoadError, FrameWriteError};

// =============================================================================
// Writer
// =============================================================================

/// Persist a [`Frame`] as an Arrow IPC file at `path`.
///
/// Column names, kinds, and values are written exactly as present in
/// memory. A zero-column frame writes a valid empty file.
pub fn write_ipc(frame: &Frame, path: impl AsRef<Path>) -> Result<(), FrameWriteError> {
    let fields: Vec<Field> = frame.columns().iter().map(column_field).collect();
    let schema = Arc::new(Schema::new(fields));
    let arrays: Vec<ArrayRef> = frame.columns().iter().map(column_array).collect();

    // Row count must be explicit to support zero-column frames.
    let options = RecordBatchOptions::new().with_row_count(Some(frame.n_rows()));
    let batch = RecordBatch::try_new_with_options(Arc::clone(&schema), arrays, &options)?;

    let file = File::create(path.as_ref())?;
    let mut writer = FileWriter::try_new(file, &schema)?;
    writer.write(&batch)?;
    writer.finish()?;
    Ok(())
}

fn column_field(col: &Column) -> Field {
    let (data_type, nullable) = match col.data() {
        ColumnData::I8(_) => (DataType::Int8, false),
        ColumnData::I16(_) => (DataType::Int16, false),
        ColumnData::I32(_) => (DataType::Int32, false),
        ColumnData::I64(_) => (DataType::Int64, false),
        ColumnData::F32(_) => (DataType::Float32, false),
        ColumnData::F64(_) => (DataType::Float64, false),
        ColumnData::Bool(_) => (DataType::Boolean, false),
        ColumnData::Str(_) => (DataType::Utf8, true),
    };
    Field::new(col.name(), data_type, nullable)
}

fn column_array(col: &Column) -> ArrayRef {
    match col.data() {
        ColumnData::I8(v) => Arc::new(Int8Array::from(v.clone())),
        ColumnData::I16(v) => Arc::new(Int16Array::from(v.clone())),
        ColumnData::I32(v) => Arc::new(Int32Array::from(v.clone())),
        ColumnData::I64(v) => Arc::new(Int64Array::from(v.clone())),
        ColumnData::F32(v) => Arc::new(Float32Array::from(v.clone())),
        ColumnData::F64(v) => Arc::new(Float64Array::from(v.clone())),
        ColumnData::Bool(v) => Arc::new(BooleanArray::from(v.clone())),
        ColumnData::Str(v) => Arc::new(StringArray::from(v.clone())),
    }
}

// =============================================================================
// Reader
// =============================================================================

/// Load an Arrow IPC file written by [`write_ipc`] back into a [`Frame`].
///
/// Any field whose Arrow type falls outside the closed
/// signed-integer / floating-point / boolean / string set surfaces as
/// [`FrameLoadError::UnsupportedType`].
pub fn read_ipc(path: impl AsRef<Path>) -> Result<Frame, FrameLoadError> {
    let file = File::open(path.as_ref())?;
    let reader = FileReader::try_new(BufReader::new(file), None)?;
    let schema = reader.schema();
    let batches: Vec<RecordBatch> = reader.collect::<Result<_, _>>()?;

    let mut columns = Vec::with_capacity(schema.fields().len());
    for (index, field) in schema.fields().iter().enumerate() {
        let data = read_column(&batches, index, field.name(), field.data_type())?;
        columns.push(Column::new(field.name().clone(), data));
    }
    Ok(Frame::new(columns)?)
}

fn read_column(
    batches: &[RecordBatch],
    index: usize,
    name: &str,
    data_type: &DataType,
) -> Result<ColumnData, FrameLoadError> {
    match data_type {
        DataType::Int8 => Ok(ColumnData::I8(int_values::<Int8Type>(batches, index, name)?)),
        DataType::Int16 => Ok(ColumnData::I16(int_values::<Int16Type>(
            batches, index, name,
        )?)),
        DataType::Int32 => Ok(ColumnData::I32(int_values::<Int32Type>(
            batches, index, name,
        )?)),
        DataType::Int64 => Ok(ColumnData::I64(int_values::<Int64Type>(
            batches, index, name,
        )?)),
        DataType::Float32 => Ok(ColumnData::F32(float32_values(batches, index, name)?)),
        DataType::Float64 => Ok(ColumnData::F64(float64_values(batches, index, name)?)),
        DataType::Boolean => Ok(ColumnData::Bool(bool_values(batches, index, name)?)),
        DataType::Utf8 => Ok(ColumnData::Str(str_values(batches, index, name)?)),
        other => Err(type_error(
            name,
            "Int8..Int64, Float32/64, Boolean, or Utf8",
            other,
        )),
    }
}

/// Extract a non-nullable primitive integer column across batches.
fn int_values<T: ArrowPrimitiveType>(
    batches: &[RecordBatch],
    index: usize,
    name: &str,
) -> Result<Vec<T::Native>, FrameLoadError> {
    let mut values = Vec::new();
    for batch in batches {
        let col = batch.column(index);
        let arr = col
            .as_any()
            .downcast_ref::<PrimitiveArray<T>>()
            .ok_or_else(|| type_error(name, "primitive integer array", col.data_type()))?;
        if arr.null_count() > 0 {
            return Err(type_error(name, "non-nullable integers", col.data_type()));
        }
        values.extend_from_slice(arr.values());
    }
    Ok(values)
}

fn float32_values(
    batches: &[RecordBatch],
    index: usize,
    name: &str,
) -> Result<Vec<f32>, FrameLoadError> {
    let mut values = Vec::new();
    for batch in batches {
        let col = batch.column(index);
        let arr = col
            .as_any()
            .downcast_ref::<Float32Array>()
            .ok_or_else(|| type_error(name, "Float32", col.data_type()))?;
        values.extend(arr.iter().map(|v| v.unwrap_or(f32::NAN)));
    }
    Ok(values)
}

fn float64_values(
    batches: &[RecordBatch],
    index: usize,
    name: &str,
) -> Result<Vec<f64>, FrameLoadError> {
    let mut values = Vec::new();
    for batch in batches {
        let col = batch.column(index);
        let arr = col
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or_else(|| type_error(name, "Float64", col.data_type()))?;
        values.extend(arr.iter().map(|v| v.unwrap_or(f64::NAN)));
    }
    Ok(values)
}

fn bool_values(
    batches: &[RecordBatch],
    index: usize,
    name: &str,
) -> Result<Vec<bool>, FrameLoadError> {
    let mut values = Vec::new();
    for batch in batches {
        let col = batch.column(index);
        let arr = col
            .as_any()
            .downcast_ref::<BooleanArray>()
            .ok_or_else(|| type_error(name, "Boolean", col.data_type()))?;
        if arr.null_count() > 0 {
            return Err(type_error(name, "non-nullable booleans", col.data_type()));
        }
        values.extend((0..arr.len()).map(|i| arr.value(i)));
    }
    Ok(values)
}

fn str_values(
    batches: &[RecordBatch],
    index: usize,
    name: &str,
) -> Result<Vec<Option<String>>, FrameLoadError> {
    let mut values = Vec::new();
    for batch in batches {
        let col = batch.column(index);
        let arr = col
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| type_error(name, "Utf8", col.data_type()))?;
        values.extend(arr.iter().map(|v| v.map(str::to_string)));
    }
    Ok(values)
}

fn type_error(name: &str, expected: &str, got: &DataType) -> FrameLoadError {
    FrameLoadError::UnsupportedType {
        column: name.to_string(),
        expected: expected.to_string(),
        got: format!("{got:?}"),
    }
}
