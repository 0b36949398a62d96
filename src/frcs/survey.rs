use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::units::{Angle, Length, UnitizedNumber};

/// A parsed FRCS survey file (`cdata.fr`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyFile {
    #[serde(default)]
    pub cave_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Trips by position. A `null` slot is a trip the parser could not
    /// produce; later trips keep their index.
    pub trips: Vec<Option<Trip>>,
}

impl SurveyFile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn shot_count(&self) -> usize {
        self.trips.iter().flatten().map(|t| t.shots.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub header: TripHeader,
    #[serde(default)]
    pub shots: Vec<Shot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripHeader {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub team: Option<Vec<String>>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub distance_unit: Length,
    pub azimuth_unit: Angle,
    pub inclination_unit: Angle,
    #[serde(default)]
    pub backsight_azimuth_corrected: bool,
    #[serde(default)]
    pub backsight_inclination_corrected: bool,
}

/// One line of instrument readings. A shot without `to` is a splay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub distance: Option<UnitizedNumber<Length>>,
    #[serde(default)]
    pub frontsight_azimuth: Option<UnitizedNumber<Angle>>,
    #[serde(default)]
    pub backsight_azimuth: Option<UnitizedNumber<Angle>>,
    #[serde(default)]
    pub frontsight_inclination: Option<UnitizedNumber<Angle>>,
    #[serde(default)]
    pub backsight_inclination: Option<UnitizedNumber<Angle>>,
    #[serde(default)]
    pub exclude_distance: bool,
    #[serde(default)]
    pub from_lruds: Option<Lruds>,
    #[serde(default)]
    pub to_lruds: Option<Lruds>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Shot {
    pub fn is_splay(&self) -> bool {
        self.to.is_none()
    }
}

/// Passage dimensions recorded at a station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Lruds {
    #[serde(default)]
    pub left: Option<UnitizedNumber<Length>>,
    #[serde(default)]
    pub right: Option<UnitizedNumber<Length>>,
    #[serde(default)]
    pub up: Option<UnitizedNumber<Length>>,
    #[serde(default)]
    pub down: Option<UnitizedNumber<Length>>,
}
