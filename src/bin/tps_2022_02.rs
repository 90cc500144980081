//! Convert the February 2022 Tabular Playground CSVs to Feather.
//!
//! Reads `data/train.csv` and `data/test.csv`, reduces each numeric column
//! to its minimal storage width, and writes `data/train.feather` and
//! `data/test.feather`. No flags; any failure propagates and exits non-zero.
//!
//! Usage:
//!   cargo run --release --bin tps_2022_02

use std::error::Error;
use std::time::Instant;

use slimframe::io::{read_csv, write_ipc};
use slimframe::reduce::reduce;

const DATASETS: [(&str, &str); 2] = [
    ("data/train.csv", "data/train.feather"),
    ("data/test.csv", "data/test.feather"),
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start = Instant::now();

    for (src, dst) in DATASETS {
        let mut frame = read_csv(src)?;
        let report = reduce(&mut frame);
        println!("{report}");
        write_ipc(&frame, dst)?;
    }

    println!("Done in {:.2}s.", start.elapsed().as_secs_f64());
    Ok(())
}
