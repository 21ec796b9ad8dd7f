// Chameleon: Taming the transient while reconfiguring BGP
// Copyright (C) 2023 Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Module to load a time series table from a CSV file, whose columns are only known after reading
//! the header.

use std::{collections::HashSet, fs, io, path::Path};

/// Name of the column holding the time of each row.
pub const TIME_COLUMN: &str = "t";

/// Error type thrown while loading a `Table`.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// The header does not contain the time column `t`.
    #[error("The table has no time column \"t\"")]
    MissingTimeColumn,
    /// Two columns share the same name.
    #[error("The column {0:?} appears more than once")]
    DuplicateColumn(String),
    /// A field could not be parsed as a number.
    #[error("Invalid value {value:?} in column {column:?}, row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },
}

/// A single named numeric column of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Values of the time column. The column is numeric if every non-empty field is a number, and is
/// kept as text otherwise (e.g., `2023-05-02 10:00:00`), which plotly draws on a date axis.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeAxis {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl TimeAxis {
    fn from_fields(fields: Vec<String>) -> Self {
        let numeric: Option<Vec<f64>> = fields.iter().map(|f| parse_value(f)).collect();
        match numeric {
            Some(values) => Self::Numeric(values),
            None => Self::Text(fields),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Table of numeric columns that share the same row index, given by the time column `t`.
///
/// The header order is kept. All columns have the same length, and no two columns have the same
/// name.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    time: TimeAxis,
    columns: Vec<Column>,
}

impl Table {
    /// Read a table from a CSV file with a header row.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Read a table from comma-separated data with a header row. Empty fields are read as `NaN`.
    /// Header names are taken verbatim, only the fields are trimmed.
    pub fn from_reader(reader: impl io::Read) -> Result<Self, TableError> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Fields)
            .from_reader(reader);

        let mut seen = HashSet::new();
        let header = csv.headers()?.iter().map(String::from).collect::<Vec<_>>();
        for name in header.iter() {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }

        let time_idx = header
            .iter()
            .position(|name| name == TIME_COLUMN)
            .ok_or(TableError::MissingTimeColumn)?;

        let mut time = Vec::new();
        let mut columns = header
            .iter()
            .filter(|name| *name != TIME_COLUMN)
            .map(|name| Column {
                name: name.clone(),
                values: Vec::new(),
            })
            .collect::<Vec<_>>();

        // the reader is not flexible, so records with a different length than the header are
        // rejected as `csv::Error`.
        for (row, record) in csv.records().enumerate() {
            let record = record?;
            let mut columns_iter = columns.iter_mut();
            for (idx, field) in record.iter().enumerate() {
                if idx == time_idx {
                    time.push(field.to_string());
                    continue;
                }
                let Some(column) = columns_iter.next() else {
                    break;
                };
                let value = parse_value(field).ok_or_else(|| TableError::InvalidValue {
                    column: column.name.clone(),
                    row: row + 1,
                    value: field.to_string(),
                })?;
                column.values.push(value);
            }
        }

        let time = TimeAxis::from_fields(time);
        log::trace!(
            "Loaded table with {} columns and {} rows",
            header.len(),
            time.len()
        );

        Ok(Self {
            header,
            time,
            columns,
        })
    }

    /// Names of all columns, in the order of the header.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.header.iter().map(String::as_str)
    }

    /// Get a numeric column by its name. The time column is only available through `time`.
    pub fn column(&self, name: impl AsRef<str>) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name.as_ref())
    }

    /// Values of the time column `t`.
    pub fn time(&self) -> &TimeAxis {
        &self.time
    }

    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    pub fn num_rows(&self) -> usize {
        self.time.len()
    }
}

fn parse_value(field: &str) -> Option<f64> {
    if field.is_empty() {
        Some(f64::NAN)
    } else {
        field.parse().ok()
    }
}
