//! The Breakout (metacave) document produced by the converter.

mod types;

pub use types::{
    AngleUnit, Cave, Datum, Direction, DistanceUnit, Ellipsoid, Empty, FixedStation,
    FixedStations, MetacaveData, Shot, ShotMeasurement, Station, Surveyor, SurveyEntry, Trip,
};
