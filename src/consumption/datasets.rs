use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

use super::chart::{ChartSpec, ANNUAL_CHART, MONTHLY_CHART};
use super::parser::parse_table;
use super::record::Record;
use super::{DatasetError, TableLayout};

#[enum_dispatch(TableLayout)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dataset {
    Monthly,
    Annual,
}

impl Dataset {
    pub fn parse(&self, text: &str) -> Vec<Record> {
        parse_table(text, self.header_prefix(), self.label_source(), self.label_key())
    }
}

impl FromStr for Dataset {
    type Err = DatasetError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Dataset::Monthly(Monthly)),
            "annual" => Ok(Dataset::Annual(Annual)),
            _ => Err(DatasetError::UnknownDataset(name.to_string())),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Monthly(_) => write!(f, "monthly"),
            Dataset::Annual(_) => write!(f, "annual"),
        }
    }
}

/// Monthly consumption table, labelled by `"<year> <MonthName>"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monthly;

impl TableLayout for Monthly {
    fn header_prefix(&self) -> &'static str {
        "Month,"
    }

    fn label_source(&self) -> &'static str {
        "Month"
    }

    fn label_key(&self) -> &'static str {
        "Month"
    }

    fn chart(&self) -> &'static ChartSpec {
        &MONTHLY_CHART
    }
}

/// Annual consumption table. The source calls its year column "Annual Total",
/// records expose it as "Year".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annual;

impl TableLayout for Annual {
    fn header_prefix(&self) -> &'static str {
        "Annual Total,"
    }

    fn label_source(&self) -> &'static str {
        "Annual Total"
    }

    fn label_key(&self) -> &'static str {
        "Year"
    }

    fn chart(&self) -> &'static ChartSpec {
        &ANNUAL_CHART
    }
}
