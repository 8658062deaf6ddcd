use anyhow::Result;
use std::env;

use energy_overview::consumption::chart::{series, DATA_SOURCE, DATA_SOURCE_URL, PAGE_SUBTITLE, PAGE_TITLE};
use energy_overview::consumption::datasets::Dataset;
use energy_overview::consumption::TableLayout;
use energy_overview::data::{self, DataError};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: cargo run -- <monthly|annual> <input_file>");
        std::process::exit(1);
    }

    let dataset: Dataset = args[1].parse().map_err(DataError::from)?;
    let records = data::load_dataset(&args[2], dataset)?;

    log::info!("{}: {}", PAGE_TITLE, PAGE_SUBTITLE);
    log::info!("data source: {} <{}>", DATA_SOURCE, DATA_SOURCE_URL);

    let chart = dataset.chart();
    log::info!("{}: {}", chart.title, chart.description);
    data::export_series(&series(&records, chart), chart, std::io::stdout())?;

    Ok(())
}
