use std::fs;
use std::io::Write;

use log::{debug, info};
use thiserror::Error;

use crate::consumption::chart::{ChartSpec, Point};
use crate::consumption::datasets::Dataset;
use crate::consumption::record::Record;
use crate::consumption::DatasetError;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}, err={source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    UnknownDataset(#[from] DatasetError),
    #[error("failed to write csv, err={0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush output, err={0}")]
    Io(#[from] std::io::Error),
}

/// Reads a dataset export from disk and parses it.
pub fn load_dataset(file_path: &str, dataset: Dataset) -> Result<Vec<Record>, DataError> {
    let text = fs::read_to_string(file_path).map_err(|source| DataError::Read {
        path: file_path.to_string(),
        source,
    })?;

    let records = dataset.parse(&text);
    if records.is_empty() {
        debug!("no {} records found in {}", dataset, file_path);
    }
    info!("loaded {} {} records from {}", records.len(), dataset, file_path);

    Ok(records)
}

/// Writes a chart series as `x_key,series_key` CSV. Gaps are empty cells.
pub fn export_series<W: Write>(points: &[Point], chart: &ChartSpec, writer: W) -> Result<(), DataError> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record([chart.x_key, chart.series_key])?;

    for point in points {
        csv_writer.serialize(point)?;
    }

    csv_writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::consumption::chart::{ANNUAL_CHART, MONTHLY_CHART};
    use crate::consumption::datasets::Monthly;

    #[test]
    fn test_export_series() -> Result<()> {
        let points = vec![Point::new("1949", Some(dec!(31.9))), Point::new("1950", None)];
        let mut output = Vec::new();
        export_series(&points, &ANNUAL_CHART, &mut output)?;

        assert_eq!(
            String::from_utf8(output)?,
            "Year,Total Primary Energy Consumption\n1949,31.9\n1950,\n"
        );

        Ok(())
    }

    #[test]
    fn test_export_quotes_labels_with_commas() -> Result<()> {
        let points = vec![Point::new("1973, January", Some(dec!(1)))];
        let mut output = Vec::new();
        export_series(&points, &MONTHLY_CHART, &mut output)?;

        assert_eq!(
            String::from_utf8(output)?,
            "Month,Total Primary Energy Consumption\n\"1973, January\",1\n"
        );

        Ok(())
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let result = load_dataset("/nonexistent/Monthly Data-Table 1.csv", Monthly.into());

        match result {
            Err(DataError::Read { path, .. }) => assert_eq!(path, "/nonexistent/Monthly Data-Table 1.csv"),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_dataset() -> Result<()> {
        let path = std::env::temp_dir().join(format!("energy-overview-monthly-{}.csv", std::process::id()));
        fs::write(&path, "Month,Total Primary Energy Consumption\n(Units),(Quadrillion Btu)\n1973 January,34.5\n")?;

        let records = load_dataset(&path.to_string_lossy(), Monthly.into())?;
        fs::remove_file(&path)?;

        assert_eq!(records.len(), 1);

        Ok(())
    }
}
