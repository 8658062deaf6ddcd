use enum_dispatch::enum_dispatch;
use thiserror::Error;

pub mod chart;
pub mod datasets;
pub mod parser;
pub mod record;


use chart::ChartSpec;
use datasets::{Annual, Dataset, Monthly};

/// Lines starting with this prefix after the header are citations, not data.
pub const FOOTNOTE_PREFIX: &str = "Table 1.1";

#[derive(Debug, PartialEq, Error)]
pub enum DatasetError {
    #[error("unknown dataset `{0}`, expected `monthly` or `annual`")]
    UnknownDataset(String),
}

/// Describes where a table's header lives and which column labels its rows.
#[enum_dispatch]
pub trait TableLayout {
    /// Literal prefix identifying the header line.
    fn header_prefix(&self) -> &'static str;
    /// Trimmed header name of the label column in the source file.
    fn label_source(&self) -> &'static str;
    /// Key the label is stored under in parsed records.
    fn label_key(&self) -> &'static str;

    fn chart(&self) -> &'static ChartSpec;
}
