//! Convert the May 2022 Tabular Playground CSVs to Feather.
//!
//! Same pipeline as `tps_2022_02`, but the dataset lives under the absolute
//! `/data` mount used by that competition's containers.
//!
//! Usage:
//!   cargo run --release --bin tps_2022_05

use std::error::Error;
use std::time::Instant;

use slimframe::io::{read_csv, write_ipc};
use slimframe::reduce::reduce;

const DATASETS: [(&str, &str); 2] = [
    ("/data/train.csv", "/data/train.feather"),
    ("/data/test.csv", "/data/test.feather"),
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
