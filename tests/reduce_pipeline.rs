//! End-to-end pipeline tests: CSV → reduce → Feather → reload.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::PathBuf;

use proptest::prelude::*;

use slimframe::io::{read_csv, read_ipc, write_ipc};
use slimframe::reduce::reduce;
use slimframe::{Column, ColumnData, Frame, IntWidth};

fn csv_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::File::create(&path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
    path
}

#[test]
fn csv_to_feather_narrows_int64_to_int16() {
    let dir = tempfile::tempdir().unwrap();

    let mut content = String::from("id,name\n");
    for i in 0..=300 {
        writeln!(content, "{i},row{i}").unwrap();
    }
    let src = csv_file(&dir, "train.csv", &content);
    let dst = dir.path().join("train.feather");

    let mut frame = read_csv(&src).unwrap();
    assert_eq!(
        frame.column("id").unwrap().data().int_width(),
        Some(IntWidth::I64)
    );

    let report = reduce(&mut frame);
    assert_eq!(
        frame.column("id").unwrap().data().int_width(),
        Some(IntWidth::I16)
    );
    assert!(report.bytes_after < report.bytes_before);

    write_ipc(&frame, &dst).unwrap();
    let reloaded = read_ipc(&dst).unwrap();
    assert_eq!(
        reloaded.column("id").unwrap().data().int_width(),
        Some(IntWidth::I16)
    );
    match reloaded.column("id").unwrap().data() {
        ColumnData::I16(v) => {
            let expected: Vec<i16> = (0..=300).collect();
            assert_eq!(v, &expected);
        }
        other => panic!("expected I16, got {other:?}"),
    }
    // Non-numeric column survives byte-for-byte.
    assert_eq!(
        reloaded.column("name").unwrap().data(),
        frame.column("name").unwrap().data()
    );
}

#[test]
fn small_int_column_narrows_to_int8() {
    let dir = tempfile::tempdir().unwrap();
    let src = csv_file(&dir, "small.csv", "v\n-5\n10\n127\n");

    let mut frame = read_csv(&src).unwrap();
    reduce(&mut frame);
    assert_eq!(
        frame.column("v").unwrap().data(),
        &ColumnData::I8(vec![-5, 10, 127])
    );
}

#[test]
fn float_column_with_missing_values_keeps_them_missing() {
    let dir = tempfile::tempdir().unwrap();
    let src = csv_file(&dir, "f.csv", "x\n0.5\n\n2.25\n");
    let dst = dir.path().join("f.feather");

    let mut frame = read_csv(&src).unwrap();
    reduce(&mut frame);
    write_ipc(&frame, &dst).unwrap();
    let reloaded = read_ipc(&dst).unwrap();

    match reloaded.column("x").unwrap().data() {
        ColumnData::F32(v) => {
            assert_eq!(v[0], 0.5);
            assert!(v[1].is_nan());
            assert_eq!(v[2], 2.25);
        }
        other => panic!("expected F32, got {other:?}"),
    }
}

#[test]
fn zero_row_dataset_reports_zero_reduction() {
    let dir = tempfile::tempdir().unwrap();
    let src = csv_file(&dir, "empty.csv", "a,b\n");
    let dst = dir.path().join("empty.feather");

    let mut frame = read_csv(&src).unwrap();
    assert_eq!(frame.n_columns(), 2);
    assert_eq!(frame.n_rows(), 0);

    let report = reduce(&mut frame);
    assert_eq!(report.reduction_pct(), 0.0);

    write_ipc(&frame, &dst).unwrap();
    let reloaded = read_ipc(&dst).unwrap();
    assert_eq!(reloaded.n_columns(), 2);
    assert_eq!(reloaded.n_rows(), 0);
}

#[test]
fn reduction_is_idempotent_across_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let src = csv_file(&dir, "t.csv", "a,b\n1,1.5\n200,2.5\n");
    let dst = dir.path().join("t.feather");

    let mut frame = read_csv(&src).unwrap();
    reduce(&mut frame);
    write_ipc(&frame, &dst).unwrap();

    let mut reloaded = read_ipc(&dst).unwrap();
    let report = reduce(&mut reloaded);
    assert_eq!(report.bytes_before, report.bytes_after);
}

fn int_values() -> impl Strategy<Value = Vec<i64>> {
    prop_oneof![
        proptest::collection::vec(-300i64..300, 1..64),
        proptest::collection::vec(any::<i64>(), 1..64),
    ]
}

proptest! {
    // The chosen width is the minimal sufficient one: it covers the observed
    // range, one step narrower does not, and every value round-trips.
    #[test]
    fn chosen_int_width_is_minimal_and_lossless(values in int_values()) {
        let (min, max) = (
            *values.iter().min().unwrap(),
            *values.iter().max().unwrap(),
        );
        let mut frame = Frame::new(vec![Column::i64("v", values.clone())]).unwrap();
        reduce(&mut frame);

        let data = frame.column("v").unwrap().data();
        let width = data.int_width().unwrap();
        prop_assert!(min >= width.min_value() && max <= width.max_value());

        let pos = IntWidth::LADDER.iter().position(|w| *w == width).unwrap();
        if pos > 0 {
            let narrower = IntWidth::LADDER[pos - 1];
            prop_assert!(min < narrower.min_value() || max > narrower.max_value());
        }

        let back: Vec<i64> = match data {
            ColumnData::I8(v) => v.iter().map(|&x| x as i64).collect(),
            ColumnData::I16(v) => v.iter().map(|&x| x as i64).collect(),
            ColumnData::I32(v) => v.iter().map(|&x| x as i64).collect(),
            ColumnData::I64(v) => v.clone(),
            other => panic!("expected integer storage, got {other:?}"),
        };
        prop_assert_eq!(back, values);
    }
}
