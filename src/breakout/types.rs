use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistanceUnit {
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "yd")]
    Yards,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AngleUnit {
    #[serde(rename = "deg")]
    Degrees,
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "sec")]
    Seconds,
    #[serde(rename = "grad")]
    Gradians,
    #[serde(rename = "mil")]
    Mils,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Fs,
    Bs,
}

/// One reading of a shot or splay. Absent fields were not measured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotMeasurement {
    pub dir: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inc: Option<String>,
}

impl ShotMeasurement {
    pub fn new(dir: Direction) -> Self {
        Self {
            dir,
            dist: None,
            azm: None,
            inc: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub station: String,
    /// Left, right, up, down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lrud: Option<[String; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splays: Option<Vec<ShotMeasurement>>,
}

impl Station {
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            lrud: None,
            splays: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub exclude_dist: bool,
    pub measurements: Vec<ShotMeasurement>,
}

/// Serializes as `{}`: the stations on either side are not connected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SurveyEntry {
    Station(Station),
    Shot(Shot),
    Empty(Empty),
}

impl SurveyEntry {
    pub fn as_station(&self) -> Option<&Station> {
        match self {
            SurveyEntry::Station(station) => Some(station),
            _ => None,
        }
    }

    pub fn as_shot(&self) -> Option<&Shot> {
        match self {
            SurveyEntry::Shot(shot) => Some(shot),
            _ => None,
        }
    }
}

/// FRCS records no surveyor roles, so every surveyor serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Surveyor {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub surveyors: BTreeMap<String, Surveyor>,
    pub dist_unit: DistanceUnit,
    pub angle_unit: AngleUnit,
    pub azm_fs_unit: AngleUnit,
    pub azm_bs_unit: AngleUnit,
    pub inc_fs_unit: AngleUnit,
    pub inc_bs_unit: AngleUnit,
    pub azm_backsights_corrected: bool,
    pub inc_backsights_corrected: bool,
    pub survey: Vec<SurveyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey_notes_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ellipsoid {
    #[serde(rename = "WGS84")]
    Wgs84,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Datum {
    #[serde(rename = "WGS84")]
    Wgs84,
}

/// UTM position of a station, as fixed-precision strings in `dist_unit`.
/// A coordinate that could not be computed is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedStation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub north: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub east: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elev: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedStations {
    pub dist_unit: DistanceUnit,
    pub ellipsoid: Ellipsoid,
    pub datum: Datum,
    pub utm_zone: i32,
    pub stations: BTreeMap<String, FixedStation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cave {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_stations: Option<Vec<FixedStations>>,
    /// Trips by position in the survey file; `None` keeps an absent trip's slot.
    pub trips: Vec<Option<Trip>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetacaveData {
    pub caves: BTreeMap<String, Cave>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn survey_entries_serialize_untagged() {
        let mut station = Station::new("AE20");
        station.lrud = Some(["1.00".into(), "3.00".into(), "0".into(), "2.00".into()]);
        let shot = Shot {
            exclude_dist: false,
            measurements: vec![ShotMeasurement {
                dir: Direction::Bs,
                dist: None,
                azm: Some("60.00".into()),
                inc: None,
            }],
        };
        let survey = vec![
            SurveyEntry::Station(station),
            SurveyEntry::Shot(shot),
            SurveyEntry::Empty(Empty {}),
        ];

        assert_eq!(
            serde_json::to_value(&survey).unwrap(),
            json!([
                { "station": "AE20", "lrud": ["1.00", "3.00", "0", "2.00"] },
                { "measurements": [{ "dir": "bs", "azm": "60.00" }] },
                {}
            ])
        );
    }

    #[test]
    fn exclude_dist_only_serialized_when_set() {
        let shot = Shot {
            exclude_dist: true,
            measurements: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&shot).unwrap(),
            json!({ "excludeDist": true, "measurements": [] })
        );
    }

    #[test]
    fn fixed_stations_use_wgs84_labels() {
        let group = FixedStations {
            dist_unit: DistanceUnit::Meters,
            ellipsoid: Ellipsoid::Wgs84,
            datum: Datum::Wgs84,
            utm_zone: 14,
            stations: BTreeMap::new(),
        };
        assert_eq!(
            serde_json::to_value(&group).unwrap(),
            json!({
                "distUnit": "m",
                "ellipsoid": "WGS84",
                "datum": "WGS84",
                "utmZone": 14,
                "stations": {}
            })
        );
    }

    #[test]
    fn missing_coordinates_are_omitted() {
        let station = FixedStation {
            north: None,
            east: Some("5.000".into()),
            elev: Some("5.000".into()),
        };
        assert_eq!(
            serde_json::to_value(&station).unwrap(),
            json!({ "east": "5.000", "elev": "5.000" })
        );
    }

    #[test]
    fn absent_trips_serialize_as_null() {
        let cave = Cave {
            fixed_stations: None,
            trips: vec![None],
        };
        assert_eq!(serde_json::to_value(&cave).unwrap(), json!({ "trips": [null] }));
    }
}
