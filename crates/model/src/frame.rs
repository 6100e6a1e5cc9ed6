//! Tabular container for CSV batch input.
//!
//! Holds the caller's original headers and rows as text; the model picks
//! out the columns it declares, and extra columns ride along untouched
//! into the output file.

use std::io::Read;

use crate::error::{ModelError, Result};

/// A parsed CSV table: headers plus string rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    /// Parse a CSV document with a header row.
    pub fn from_csv(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| ModelError::Csv(e.to_string()))?
            .iter()
            .map(String::from)
            .collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| ModelError::Csv(e.to_string()))?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Frame { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// A single cell, empty string if the row is ragged.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Append a column; the value count must match the row count.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.headers.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Serialize back to CSV, headers first, rows in original order.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.headers)
            .map_err(|e| ModelError::Csv(e.to_string()))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| ModelError::Csv(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ModelError::Csv(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ModelError::Csv(e.to_string()))
    }
}
