//! Job record model.
//!
//! A [`JobRecord`] is one logged unit of field work as it arrives from the
//! persistence layer. Dates and times are kept in their raw upstream form
//! and parsed by the aggregation pipeline, so a single bad value never
//! prevents the record set from deserializing.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// A technician's job record, read-only input to the aggregation pipeline.
///
/// Field names accept both `snake_case` and the `camelCase` used by the
/// upstream backend. Values of the wrong JSON type are tolerated: a
/// non-string date or time is kept as its JSON text (and fails to parse
/// later), a missing or null date becomes empty, and a distance that is not
/// a decimal number is dropped with a warning.
///
/// # Example
///
/// ```
/// use hours_engine::models::JobRecord;
/// use rust_decimal::Decimal;
///
/// let record: JobRecord = serde_json::from_str(r#"{
///     "date": "2026-01-12",
///     "workOrder": "WO-1042",
///     "departTime": "07:00",
///     "endTime": "16:00:00",
///     "distanceOut": 12.5,
///     "distanceReturn": "12.5"
/// }"#).unwrap();
///
/// assert_eq!(record.work_order.as_deref(), Some("WO-1042"));
/// assert_eq!(record.total_distance(), Some(Decimal::from(25)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Identifier assigned by the persistence layer, if any.
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    /// The work day this record belongs to, in any supported date format.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: String,
    /// Work order reference.
    #[serde(default, alias = "workOrder", deserialize_with = "lenient_text")]
    pub work_order: Option<String>,
    /// Time the technician left for the job (`HH:MM` or `HH:MM:SS`).
    #[serde(default, alias = "departTime", deserialize_with = "lenient_text")]
    pub depart_time: Option<String>,
    /// Time the technician arrived on site. Informational only.
    #[serde(default, alias = "arrivalTime", deserialize_with = "lenient_text")]
    pub arrival_time: Option<String>,
    /// Time the job ended (`HH:MM` or `HH:MM:SS`).
    #[serde(default, alias = "endTime", deserialize_with = "lenient_text")]
    pub end_time: Option<String>,
    /// Distance driven to the site.
    #[serde(default, alias = "distanceOut", deserialize_with = "lenient_distance")]
    pub distance_out: Option<Decimal>,
    /// Distance driven back from the site.
    #[serde(default, alias = "distanceReturn", deserialize_with = "lenient_distance")]
    pub distance_return: Option<Decimal>,
}

impl JobRecord {
    /// Creates a record with a date and a depart/end window and no distances.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_engine::models::JobRecord;
    ///
    /// let record = JobRecord::new("2026-01-12", Some("07:00"), Some("16:00"));
    /// assert_eq!(record.depart_time.as_deref(), Some("07:00"));
    /// assert!(record.distance_out.is_none());
    /// ```
    pub fn new(date: &str, depart_time: Option<&str>, end_time: Option<&str>) -> Self {
        Self {
            date: date.to_string(),
            depart_time: depart_time.map(str::to_string),
            end_time: end_time.map(str::to_string),
            ..Self::default()
        }
    }

    /// Sets both distance legs, returning the record.
    pub fn with_distances(mut self, out: Option<Decimal>, back: Option<Decimal>) -> Self {
        self.distance_out = out;
        self.distance_return = back;
        self
    }

    /// Returns `true` if either distance leg is negative.
    pub fn has_negative_distance(&self) -> bool {
        [self.distance_out, self.distance_return]
            .iter()
            .flatten()
            .any(|d| *d < Decimal::ZERO)
    }

    /// Out and return distances combined. Absent or negative legs count as zero.
    ///
    /// Returns `None` if the sum does not fit in a [`Decimal`].
    pub fn total_distance(&self) -> Option<Decimal> {
        [self.distance_out, self.distance_return]
            .iter()
            .flatten()
            .try_fold(Decimal::ZERO, |sum, d| sum.checked_add((*d).max(Decimal::ZERO)))
    }

    /// A label for logs: the record id, or `"<unnamed>"`.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<unnamed>")
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_distance<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = match &value {
        Value::Null => return Ok(None),
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    };

    let distance = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok();
    if distance.is_none() {
        warn!(value = %value, "Unusable distance on job record counted as zero");
    }
    Ok(distance)
}
