use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::breakout::{AngleUnit, DistanceUnit, Surveyor, Trip};
use crate::frcs::{TripHeader, TripSummary};
use crate::units::{Angle, Length};

/// Units a trip's readings are extracted in. These always match the unit
/// labels written to the trip header: a unit the output format can't label
/// (yards, radians, ...) falls back to feet or degrees, and readings are
/// converted into that fallback unit rather than kept in the header's unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripUnits {
    pub distance: Length,
    pub azimuth: Angle,
    pub inclination: Angle,
}

impl TripUnits {
    pub fn resolve(header: &TripHeader) -> Self {
        Self {
            distance: distance_unit(header.distance_unit).1,
            azimuth: angle_unit(header.azimuth_unit).1,
            inclination: angle_unit(header.inclination_unit).1,
        }
    }
}

fn distance_unit(unit: Length) -> (DistanceUnit, Length) {
    match unit {
        Length::Feet => (DistanceUnit::Feet, Length::Feet),
        Length::Meters => (DistanceUnit::Meters, Length::Meters),
        other => {
            log::debug!("No trip distance unit for {}, using feet", other);
            (DistanceUnit::Feet, Length::Feet)
        }
    }
}

fn angle_unit(unit: Angle) -> (AngleUnit, Angle) {
    match unit {
        Angle::Degrees => (AngleUnit::Degrees, Angle::Degrees),
        Angle::Gradians => (AngleUnit::Gradians, Angle::Gradians),
        Angle::MilsNato => (AngleUnit::Mils, Angle::MilsNato),
        other => {
            log::debug!("No trip angle unit for {}, using degrees", other);
            (AngleUnit::Degrees, Angle::Degrees)
        }
    }
}

/// Builds a trip's metadata. The returned trip has an empty survey.
///
/// `trip_number` is the 1-based position of the trip in the survey file; a
/// summary's own trip number takes precedence over it.
pub fn convert_trip_header(
    trip_number: u32,
    header: &TripHeader,
    summary: Option<&TripSummary>,
    survey_notes_file_prefix: Option<&str>,
) -> Trip {
    let trip_number = summary.map_or(trip_number, |s| s.trip_number);

    let team = summary
        .and_then(|s| s.team.as_ref())
        .or(header.team.as_ref());
    let surveyors: BTreeMap<String, Surveyor> = team
        .into_iter()
        .flatten()
        .map(|name| (name.clone(), Surveyor::default()))
        .collect();

    let date = summary.and_then(|s| s.date).or(header.date);

    let (dist_unit, _) = distance_unit(header.distance_unit);
    let (azm_unit, _) = angle_unit(header.azimuth_unit);
    let (inc_unit, _) = angle_unit(header.inclination_unit);

    Trip {
        name: format!("{} {}", trip_number, header.name),
        date: date.map(|d| d.format("%Y-%m-%d").to_string()),
        surveyors,
        dist_unit,
        angle_unit: AngleUnit::Degrees,
        azm_fs_unit: azm_unit,
        azm_bs_unit: azm_unit,
        inc_fs_unit: inc_unit,
        inc_bs_unit: inc_unit,
        azm_backsights_corrected: header.backsight_azimuth_corrected,
        inc_backsights_corrected: header.backsight_inclination_corrected,
        survey: Vec::new(),
        survey_notes_file: survey_notes_file(survey_notes_file_prefix, trip_number, date),
    }
}

/// `<prefix>_<trip>_<month>-<day>-<year>.pdf`, without zero padding.
fn survey_notes_file(
    prefix: Option<&str>,
    trip_number: u32,
    date: Option<NaiveDate>,
) -> Option<String> {
    let prefix = prefix?;
    let date = date?;
    Some(format!(
        "{}_{}_{}-{}-{}.pdf",
        prefix,
        trip_number,
        date.month(),
        date.day(),
        date.year()
    ))
}
