use getset::Getters;
use rust_decimal::Decimal;
use serde::Serialize;

use super::record::Record;

pub const PAGE_TITLE: &str = "U.S. Primary Energy Overview";
pub const PAGE_SUBTITLE: &str =
    "Monthly and annual primary energy consumption in the United States, measured in quadrillion Btu.";
pub const DATA_SOURCE: &str = "U.S. Energy Information Administration - Energy Consumption (Data.gov)";
pub const DATA_SOURCE_URL: &str = "https://catalog.data.gov/dataset/monthly-and-annual-energy-consumption-by-sector/resource/521de5ae-b112-405b-8474-4214ddd5675b";

const TOTAL_PRIMARY_ENERGY: &str = "Total Primary Energy Consumption";

/// A line chart over parsed records: `x_key` on the x axis, `series_key` as the line.
#[derive(Debug, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub x_key: &'static str,
    pub series_key: &'static str,
}

pub const MONTHLY_CHART: ChartSpec = ChartSpec {
    title: "Monthly total primary energy consumption",
    description: "Quadrillion Btu, by month, beginning in 1973.",
    x_key: "Month",
    series_key: TOTAL_PRIMARY_ENERGY,
};

pub const ANNUAL_CHART: ChartSpec = ChartSpec {
    title: "Annual total primary energy consumption",
    description: "Quadrillion Btu, annual totals from 1949 onward.",
    x_key: "Year",
    series_key: TOTAL_PRIMARY_ENERGY,
};

#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[getset(get = "pub")]
pub struct Point {
    label: String,
    // `None` is a gap in the line.
    value: Option<Decimal>,
}

impl Point {
    pub fn new(label: &str, value: Option<Decimal>) -> Point {
        Point {
            label: label.to_string(),
            value,
        }
    }
}

/// Projects records onto one series, keeping record order and gaps.
pub fn series(records: &[Record], chart: &ChartSpec) -> Vec<Point> {
    records
        .iter()
        .map(|record| Point {
            label: record
                .get(chart.x_key)
                .and_then(|value| value.as_label())
                .unwrap_or_default()
                .to_string(),
            value: record.get(chart.series_key).and_then(|value| value.as_number()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::consumption::record::Value;

    fn record(label: &str, total: Value) -> Record {
        let mut record = Record::new();
        record.insert("Year", Value::Label(label.to_string()));
        record.insert(TOTAL_PRIMARY_ENERGY, total);
        record
    }

    #[test]
    fn test_series_keeps_gaps() {
        let records = vec![
            record("1949", Value::Number(dec!(31.9))),
            record("1950", Value::Null),
            record("1951", Value::Number(dec!(36.0))),
        ];

        let points = series(&records, &ANNUAL_CHART);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].label(), "1949");
        assert_eq!(points[0].value(), &Some(dec!(31.9)));
        assert_eq!(points[1].value(), &None);
        assert_eq!(points[2].label(), "1951");
    }

    #[test]
    fn test_page_heading() {
        assert_eq!(PAGE_TITLE, "U.S. Primary Energy Overview");
        assert!(PAGE_SUBTITLE.ends_with("measured in quadrillion Btu."));
        assert!(DATA_SOURCE_URL.starts_with("https://catalog.data.gov/"));
    }

    #[test]
    fn test_series_missing_columns() {
        let records = vec![record("1949", Value::Number(dec!(31.9)))];

        let points = series(&records, &MONTHLY_CHART);

        assert_eq!(points[0].label(), "");
        assert_eq!(points[0].value(), &Some(dec!(31.9)));
    }
}
