//! Request data shapes and the reformatting from the device's export format
//! into the records the database stores.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ###################################
// ->   STRUCTS
// ###################################
/// One exported time series, the way the device ships it: two parallel
/// newline-delimited strings, index-aligned.
#[derive(Deserialize, Debug)]
pub struct HealthSample {
    pub values: String,
    pub timestamps: String,
}

/// One zipped value/timestamp pair.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct HealthMeasurement {
    pub value: i64,
    pub timestamp: String,
}

/// The normalized record written to the database, one per day.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntry {
    pub heart_rate: Vec<HealthMeasurement>,
    pub steps: Vec<HealthMeasurement>,
    pub date: String,
}

/// Subscribe request for the newsletter routes. The email is optional here so
/// that its absence maps to our own validation error rather than a
/// deserialization rejection.
#[derive(Deserialize, Debug)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Subscribe request for the blog route, where presence is not validated
/// locally.
#[derive(Deserialize, Debug)]
pub struct BlogSubscribeRequest {
    pub email: String,
}

// ###################################
// ->   IMPLS
// ###################################
impl HealthEntry {
    /// Builds the daily record: both series reformatted, `date` pinned to
    /// UTC midnight of the device-supplied `YYYY-MM-DD` string.
    pub fn build(
        heart: &HealthSample,
        steps: &HealthSample,
        date: &str,
    ) -> Result<Self, DataParsingError> {
        let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| DataParsingError::DateInvalid(date.to_string()))?;

        Ok(HealthEntry {
            heart_rate: format_health_sample(heart)?,
            steps: format_health_sample(steps)?,
            date: format!("{}T00:00:00.000Z", parsed_date.format("%Y-%m-%d")),
        })
    }
}

/// Formats a sample to a more friendly data structure: splits both series on
/// newlines, zips them by index and parses each pair.
///
/// Empty value tokens are filtered out, not treated as malformed. They happen
/// when a new day starts and no values have been recorded yet.
pub fn format_health_sample(
    sample: &HealthSample,
) -> Result<Vec<HealthMeasurement>, DataParsingError> {
    let timestamps: Vec<&str> = sample.timestamps.split('\n').collect();

    sample
        .values
        .split('\n')
        .enumerate()
        .filter(|(_, value)| !value.is_empty())
        .map(|(index, value)| {
            let value = value
                .parse()
                .map_err(|_| DataParsingError::ValueNotAnInteger(value.to_string()))?;

            let timestamp = timestamps
                .get(index)
                .copied()
                .filter(|ts| !ts.is_empty())
                .ok_or(DataParsingError::TimestampMissing(index))?;
            let timestamp = DateTime::parse_from_rfc3339(timestamp)
                .map_err(|_| DataParsingError::TimestampInvalid(timestamp.to_string()))?
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true);

            Ok(HealthMeasurement { value, timestamp })
        })
        .collect()
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("health sample value is not an integer: {0:?}")]
    ValueNotAnInteger(String),
    #[error("health sample timestamp missing at index {0}")]
    TimestampMissing(usize),
    #[error("health sample timestamp is not a valid date: {0:?}")]
    TimestampInvalid(String),
    #[error("entry date is not a valid YYYY-MM-DD date: {0:?}")]
    DateInvalid(String),
}
