//! CSV frame loader.
//!
//! Reads a header-bearing delimited text file and infers one of the closed
//! column kinds per column, mirroring how dataframe libraries type-infer on
//! read:
//!
//! - every cell parses as `i64`, no blanks → signed integer (`I64`)
//! - every cell parses as `f64`, blanks and `NaN` become NaN → float (`F64`)
//! - every cell is `true`/`false` (case-insensitive) → boolean
//! - anything else → string, blanks become `None`
//!
//! A numeric column containing blanks therefore loads as float with NaN
//! markers, never as integer. Inference scans the whole file; streaming is
//! out of scope.

use std::fs::File;
use std::path::Path;

use crate::frame::{Column, ColumnData, Frame};
use crate::io::error::FrameLoadError;

/// Load a CSV file into a [`Frame`].
///
/// The first record is the header row and supplies column names. A missing
/// file surfaces as [`FrameLoadError::Io`]; ragged records surface as
/// [`FrameLoadError::Csv`].
pub fn read_csv(path: impl AsRef<Path>) -> Result<Frame, FrameLoadError> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (col, cell) in cells.iter_mut().zip(record.iter()) {
            col.push(cell.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, infer_column(&cells)))
        .collect();
    Ok(Frame::new(columns)?)
}

/// Infer the typed storage for one column from its raw cells.
fn infer_column(cells: &[String]) -> ColumnData {
    if let Some(values) = parse_all_int(cells) {
        return ColumnData::I64(values);
    }
    if let Some(values) = parse_all_float(cells) {
        return ColumnData::F64(values);
    }
    if let Some(values) = parse_all_bool(cells) {
        return ColumnData::Bool(values);
    }
    let values = cells
        .iter()
        .map(|c| (!c.is_empty()).then(|| c.clone()))
        .collect();
    ColumnData::Str(values)
}

fn parse_all_int(cells: &[String]) -> Option<Vec<i64>> {
    cells.iter().map(|c| c.trim().parse::<i64>().ok()).collect()
}

fn parse_all_float(cells: &[String]) -> Option<Vec<f64>> {
    cells
        .iter()
        .map(|c| {
            let c = c.trim();
            if c.is_empty() {
                return Some(f64::NAN);
            }
            c.parse::<f64>().ok()
        })
        .collect()
}

fn parse_all_bool(cells: &[String]) -> Option<Vec<bool>> {
    cells
        .iter()
        .map(|c| {
            let c = c.trim();
            if c.eq_ignore_ascii_case("true") {
                Some(true)
            } else if c.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ColumnKind;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn infers_int_float_bool_string() {
        let file = write_csv("id,score,flag,label\n1,0.5,true,a\n2,1.5,false,b\n3,,True,\n");
        let frame = read_csv(file.path()).unwrap();
        assert_eq!(frame.n_rows(), 3);

        assert_eq!(frame.column("id").unwrap().kind(), ColumnKind::SignedInt);
        match frame.column("score").unwrap().data() {
            ColumnData::F64(v) => {
                assert_eq!(v[0], 0.5);
                assert!(v[2].is_nan());
            }
            other => panic!("expected F64, got {other:?}"),
        }
        assert_eq!(
            frame.column("flag").unwrap().data(),
            &ColumnData::Bool(vec![true, false, true])
        );
        assert_eq!(
            frame.column("label").unwrap().data(),
            &ColumnData::Str(vec![Some("a".into()), Some("b".into()), None])
        );
    }

    #[test]
    fn blank_in_numeric_column_makes_it_float() {
        let file = write_csv("x\n1\n\n3\n");
        let frame = read_csv(file.path()).unwrap();
        match frame.column("x").unwrap().data() {
            ColumnData::F64(v) => {
                assert_eq!(v[0], 1.0);
                assert!(v[1].is_nan());
                assert_eq!(v[2], 3.0);
            }
            other => panic!("expected F64, got {other:?}"),
        }
    }

    #[test]
    fn nan_literal_parses_as_missing_float() {
        let file = write_csv("x\n1.0\nNaN\n");
        let frame = read_csv(file.path()).unwrap();
        match frame.column("x").unwrap().data() {
            ColumnData::F64(v) => assert!(v[1].is_nan()),
            other => panic!("expected F64, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_yields_zero_rows() {
        let file = write_csv("a,b\n");
        let frame = read_csv(file.path()).unwrap();
        assert_eq!(frame.n_columns(), 2);
        assert_eq!(frame.n_rows(), 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_csv("/nonexistent/train.csv").unwrap_err();
        assert!(matches!(err, FrameLoadError::Io(_)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let file = write_csv("a,b\n1,2\n3\n");
        let err = read_csv(file.path()).unwrap_err();
        assert!(matches!(err, FrameLoadError::Csv(_)));
    }
}
