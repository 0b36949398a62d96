use serde::{Deserialize, Serialize};

use crate::units::{Length, UnitizedNumber};

/// A parsed FRCS plot file (`FOR008`): computed station positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotFile {
    pub shots: Vec<PlotShot>,
}

impl PlotFile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Position of a shot's terminal station relative to the survey datum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotShot {
    #[serde(default)]
    pub from_name: Option<String>,
    pub to_name: String,
    pub northing: UnitizedNumber<Length>,
    pub easting: UnitizedNumber<Length>,
    pub elevation: UnitizedNumber<Length>,
}
