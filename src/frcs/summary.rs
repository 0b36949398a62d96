use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::units::{Length, UnitizedNumber};

/// A parsed FRCS trip summary file (`STAT_sum.txt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummaryFile {
    /// Indexed like [`crate::frcs::SurveyFile::trips`].
    pub trip_summaries: Vec<Option<TripSummary>>,
}

impl TripSummaryFile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, trip_index: usize) -> Option<&TripSummary> {
        self.trip_summaries.get(trip_index).and_then(Option::as_ref)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub trip_number: u32,
    #[serde(default)]
    pub trip_index: Option<usize>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub team: Option<Vec<String>>,
    #[serde(default)]
    pub footage: Option<UnitizedNumber<Length>>,
    #[serde(default)]
    pub excluded_footage: Option<UnitizedNumber<Length>>,
}
