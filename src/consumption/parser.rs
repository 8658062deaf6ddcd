use std::str::FromStr;

use log::{debug, trace};
use rust_decimal::Decimal;

use super::datasets::{Annual, Monthly};
use super::record::{Record, Value};
use super::{TableLayout, FOOTNOTE_PREFIX};

pub fn parse_monthly(text: &str) -> Vec<Record> {
    parse_table(text, Monthly.header_prefix(), Monthly.label_source(), Monthly.label_key())
}

pub fn parse_annual(text: &str) -> Vec<Record> {
    parse_table(text, Annual.header_prefix(), Annual.label_source(), Annual.label_key())
}

/// Parses a Table 1.1 style CSV export into records.
///
/// The header is the first line starting with `header_prefix`. The line after it
/// holds units and is always skipped. Later lines are trimmed; blank lines and
/// footnotes are dropped. The column named `label_source` is kept as text under
/// `label_key`, every other column becomes a number or null.
///
/// Never fails: text without a header yields no records.
pub fn parse_table(text: &str, header_prefix: &str, label_source: &str, label_key: &str) -> Vec<Record> {
    let lines: Vec<&str> = text.lines().collect();

    let Some(header_index) = lines.iter().position(|line| line.starts_with(header_prefix)) else {
        debug!("no header line starting with {:?}", header_prefix);
        return Vec::new();
    };

    let headers: Vec<&str> = lines[header_index].split(',').map(str::trim).collect();

    lines
        .iter()
        .skip(header_index + 2)
        .map(|line| line.trim())
        .filter(|line| {
            let keep = !line.is_empty() && !line.starts_with(FOOTNOTE_PREFIX);
            if !keep {
                trace!("dropping line {:?}", line);
            }
            keep
        })
        .map(|line| parse_row(line, &headers, label_source, label_key))
        .collect()
}

fn parse_row(line: &str, headers: &[&str], label_source: &str, label_key: &str) -> Record {
    let cells: Vec<&str> = line.split(',').collect();
    let mut record = Record::new();

    for (i, &header) in headers.iter().enumerate() {
        let cell = cells.get(i).map_or("", |cell| cell.trim());

        if header == label_source {
            record.insert(label_key, Value::Label(cell.to_string()));
        } else {
            record.insert(header, parse_number(cell).into());
        }
    }

    record
}

/// Converts a cell to a decimal.
///
/// Accepts an optional sign, digits with at most one decimal point and an
/// optional `e`/`E` exponent. Anything else, including the empty string, is `None`.
pub fn parse_number(cell: &str) -> Option<Decimal> {
    if !is_decimal_literal(cell) {
        return None;
    }

    if cell.contains(['e', 'E']) {
        Decimal::from_scientific(cell).ok()
    } else {
        Decimal::from_str(cell).ok()
    }
}

fn is_decimal_literal(cell: &str) -> bool {
    let (mantissa, exponent) = match cell.find(['e', 'E']) {
        Some(at) => (&cell[..at], Some(&cell[at + 1..])),
        None => (cell, None),
    };

    let unsigned = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let mut digits = 0;
    let mut points = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    if digits == 0 || points > 1 {
        return false;
    }

    match exponent {
        Some(exponent) => {
            let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !exponent.is_empty() && exponent.chars().all(|c| c.is_ascii_digit())
        },
        None => true,
    }
}
