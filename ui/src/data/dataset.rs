//! Parsing of the state crime CSV into typed rows.

use csv::StringRecord;
use thiserror::Error;

pub const STATE_COLUMN: &str = "State";
pub const YEAR_COLUMN: &str = "Year";
pub const PROPERTY_RATE_COLUMN: &str = "Data.Rates.Property.All";
pub const VIOLENT_RATE_COLUMN: &str = "Data.Rates.Violent.All";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("column '{0}' not found")]
    MissingColumn(String),
    #[error("failed to fetch dataset: {0}")]
    Fetch(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One row of the dataset, reduced to the columns the story uses.
///
/// Rates that fail to parse are kept as `NaN` so the row still takes part in
/// filtering; aggregation skips them.
#[derive(Debug, Clone, PartialEq)]
pub struct CrimeRow {
    pub state: String,
    pub year: String,
    pub property_rate: f64,
    pub violent_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<CrimeRow>,
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    state: usize,
    year: usize,
    property: usize,
    violent: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            state: find(STATE_COLUMN)?,
            year: find(YEAR_COLUMN)?,
            property: find(PROPERTY_RATE_COLUMN)?,
            violent: find(VIOLENT_RATE_COLUMN)?,
        })
    }
}

impl Dataset {
    pub fn parse(text: &str) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let columns = ColumnIndex::resolve(reader.headers()?)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or_default().trim();

            rows.push(CrimeRow {
                state: field(columns.state).to_string(),
                year: field(columns.year).to_string(),
                property_rate: parse_rate(field(columns.property)),
                violent_rate: parse_rate(field(columns.violent)),
            });
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows_for_state<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a CrimeRow> {
        self.rows.iter().filter(move |row| row.state == state)
    }

    pub fn rows_for_year<'a>(&'a self, year: &'a str) -> impl Iterator<Item = &'a CrimeRow> {
        self.rows.iter().filter(move |row| row.year == year)
    }
}

fn parse_rate(raw: &str) -> f64 {
    if raw.is_empty() {
        return f64::NAN;
    }
    raw.parse::<f64>().unwrap_or(f64::NAN)
}
