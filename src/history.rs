//! Historical sleep records as served by `/api/sleep_data`, plus export.
//!
//! The endpoint returns parallel arrays (`dates`, `durations`, `qualities`).
//! The server fills unrecorded values with `0`, so a zero is treated as
//! "not recorded" when exporting or summarising. Ragged arrays are tolerated:
//! `dates` drives the row count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

pub const CSV_HEADER: &str = "Date,Duration,Quality";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepData {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub durations: Vec<f64>,
    #[serde(default)]
    pub qualities: Vec<f64>,
}

/// One night, with unrecorded values as `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: String,
    pub duration: Option<f64>,
    pub quality: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    pub nights: usize,
    pub average_duration: Option<f64>,
    pub average_quality: Option<f64>,
}

impl SleepData {
    /// Nothing to chart or export.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> Vec<SleepRecord> {
        self.dates
            .iter()
            .enumerate()
            .map(|(i, date)| SleepRecord {
                date: date.clone(),
                duration: recorded(self.durations.get(i)),
                quality: recorded(self.qualities.get(i)),
            })
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> SleepSummary {
        let records = self.records();
        SleepSummary {
            nights: records.len(),
            average_duration: mean(records.iter().filter_map(|r| r.duration)),
            average_quality: mean(records.iter().filter_map(|r| r.quality)),
        }
    }

    /// Delimited text with a `Date,Duration,Quality` header and `\n` row separators.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.dates.len() + 1);
        lines.push(CSV_HEADER.to_owned());
        for record in self.records() {
            lines.push(format!(
                "{},{},{}",
                csv_field(&record.date),
                record.duration.map(|v| v.to_string()).unwrap_or_default(),
                record.quality.map(|v| v.to_string()).unwrap_or_default(),
            ));
        }
        lines.join("\n")
    }

    /// Render the payload in the requested export format.
    ///
    /// # Errors
    ///
    /// Returns a JSON serialization error; CSV rendering cannot fail.
    pub fn export(&self, format: ExportFormat) -> Result<String, serde_json::Error> {
        match format {
            ExportFormat::Json => serde_json::to_string_pretty(self),
            ExportFormat::Csv => Ok(self.to_csv()),
        }
    }
}

fn recorded(value: Option<&f64>) -> Option<f64> {
    value.copied().filter(|v| v.is_finite() && *v != 0.0)
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Json => "sleep-data.json",
            Self::Csv => "sleep-data.csv",
        }
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format `{0}`; expected json or csv")]
pub struct UnknownExportFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownExportFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(UnknownExportFormat(other.to_owned())),
        }
    }
}
