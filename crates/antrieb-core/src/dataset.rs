// File: crates/antrieb-core/src/dataset.rs
// Summary: Year-indexed dataset built from CSV rows (first column = year, rest = series).

use std::io::Read;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::series::{parse_cell, Series};

#[derive(Clone, Debug)]
pub struct Dataset {
    /// Header of the first column (`jahr` in the published file).
    pub year_column: String,
    /// One date per row, in file order.
    pub dates: Vec<DateTime<Utc>>,
    /// One series per non-year column, in header order.
    pub series: Vec<Series>,
}

impl Dataset {
    /// Build from parts. Every series must have one value per date.
    pub fn new(year_column: impl Into<String>, dates: Vec<DateTime<Utc>>, series: Vec<Series>) -> Self {
        debug_assert!(series.iter().all(|s| s.len() == dates.len()));
        Self { year_column: year_column.into(), dates, series }
    }

    /// Parse CSV text with a header row. Row order is kept as-is.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let year_column = headers.get(0).filter(|h| !h.is_empty()).ok_or(ChartError::MissingYearColumn)?;
        let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        debug!(year_column, series = names.len(), "parsed CSV header");

        let mut dates = Vec::new();
        let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::new(); names.len()];

        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let raw_year = rec.get(0).unwrap_or("");
            let date = parse_year(raw_year)
                .ok_or_else(|| ChartError::InvalidYear { row, value: raw_year.to_string() })?;
            dates.push(date);
            for (col, values) in columns.iter_mut().enumerate() {
                values.push(rec.get(col + 1).and_then(parse_cell));
            }
        }

        if dates.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let series = names.into_iter().zip(columns).map(|(name, values)| Series::new(name, values)).collect();
        Ok(Self::new(year_column, dates, series))
    }

    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    pub fn series_index(&self, name: &str) -> Option<usize> {
        self.series.iter().position(|s| s.name == name)
    }

    /// Dates as milliseconds since the Unix epoch, the x scale's domain unit.
    pub fn date_keys(&self) -> Vec<f64> {
        self.dates.iter().map(date_key).collect()
    }

    /// Year of the row at `index`.
    pub fn year(&self, index: usize) -> Option<i32> {
        self.dates.get(index).map(|d| d.year())
    }

    /// First and last date by value (not by position).
    pub fn date_extent(&self) -> Option<(f64, f64)> {
        let mut it = self.dates.iter().map(date_key);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Min of series minima and max of series maxima over defined values.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        self.series.iter().filter_map(Series::extent).reduce(|(a, b), (c, d)| (a.min(c), b.max(d)))
    }
}

pub fn date_key(d: &DateTime<Utc>) -> f64 {
    d.timestamp_millis() as f64
}

/// `"2010"` → 2010-01-01T00:00:00Z.
pub fn parse_year(raw: &str) -> Option<DateTime<Utc>> {
    let year: i32 = raw.trim().parse().ok()?;
    year_start(year)
}

pub fn year_start(year: i32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
