//! Request types for the hours engine API.

use serde::{Deserialize, Serialize};

use crate::config::OvertimePolicy;
use crate::models::{DateRange, JobRecord};

/// Request body for the `/summary/weekly` and `/summary/daily` endpoints.
///
/// The caller fetches the records (typically one technician's, ordered by
/// date) and posts them here for aggregation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The job records to aggregate.
    pub records: Vec<JobRecord>,
    /// Optional policy override; the server's loaded policy is used otherwise.
    #[serde(default)]
    pub policy: Option<OvertimePolicy>,
    /// Optional inclusive date window applied before aggregation.
    #[serde(default)]
    pub range: Option<DateRange>,
}
