use std::collections::BTreeMap;

use serde::Deserialize;

use crate::breakout::{Datum, DistanceUnit, Ellipsoid, FixedStation, FixedStations};
use crate::convert::format;
use crate::frcs::PlotFile;
use crate::units::{Length, UnitizedNumber};

/// Absolute UTM position of the plot file's origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ZeroReference {
    pub northing: UnitizedNumber<Length>,
    pub easting: UnitizedNumber<Length>,
    pub elevation: UnitizedNumber<Length>,
}

impl Default for ZeroReference {
    fn default() -> Self {
        let zero = UnitizedNumber::new(0.0, Length::Meters);
        Self {
            northing: zero,
            easting: zero,
            elevation: zero,
        }
    }
}

/// Places every plotted station in the UTM frame, in meters.
///
/// Stations are keyed by the shot's terminal station; when a station is
/// plotted more than once the last position wins. Non-finite coordinates
/// are left out of the station.
pub fn convert_plot(plot: &PlotFile, utm_zone: i32, zero: &ZeroReference) -> Vec<FixedStations> {
    let mut stations = BTreeMap::new();

    for shot in &plot.shots {
        let coordinate = |relative: UnitizedNumber<Length>, offset: UnitizedNumber<Length>| {
            format::coordinate((relative + offset).get(Length::Meters))
        };
        let station = FixedStation {
            north: coordinate(shot.northing, zero.northing),
            east: coordinate(shot.easting, zero.easting),
            elev: coordinate(shot.elevation, zero.elevation),
        };
        if station.north.is_none() || station.east.is_none() || station.elev.is_none() {
            log::warn!("Fixed station {} has a non-finite coordinate", shot.to_name);
        }

        let previous = stations.insert(shot.to_name.clone(), station);
        if previous.is_some() {
            log::debug!(
                "Fixed station {} plotted again, keeping the later position",
                shot.to_name
            );
        }
    }

    vec![FixedStations {
        dist_unit: DistanceUnit::Meters,
        ellipsoid: Ellipsoid::Wgs84,
        datum: Datum::Wgs84,
        utm_zone,
        stations,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frcs::PlotShot;

    fn m(value: f64) -> UnitizedNumber<Length> {
        UnitizedNumber::new(value, Length::Meters)
    }

    fn ft(value: f64) -> UnitizedNumber<Length> {
        UnitizedNumber::new(value, Length::Feet)
    }

    fn plot_shot(
        to: &str,
        northing: UnitizedNumber<Length>,
        easting: UnitizedNumber<Length>,
        elevation: UnitizedNumber<Length>,
    ) -> PlotShot {
        PlotShot {
            from_name: None,
            to_name: to.into(),
            northing,
            easting,
            elevation,
        }
    }

    fn station(north: &str, east: &str, elev: &str) -> FixedStation {
        FixedStation {
            north: Some(north.into()),
            east: Some(east.into()),
            elev: Some(elev.into()),
        }
    }

    #[test]
    fn origin_lands_on_zero_reference() {
        let plot = PlotFile {
            shots: vec![plot_shot("AE20", ft(0.0), ft(0.0), ft(0.0))],
        };
        let zero = ZeroReference {
            northing: m(10.0),
            easting: m(20.0),
            elevation: m(30.0),
        };

        let groups = convert_plot(&plot, 14, &zero);
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.dist_unit, DistanceUnit::Meters);
        assert_eq!(group.ellipsoid, Ellipsoid::Wgs84);
        assert_eq!(group.datum, Datum::Wgs84);
        assert_eq!(group.utm_zone, 14);
        assert_eq!(group.stations["AE20"], station("10.000", "20.000", "30.000"));
    }

    #[test]
    fn relative_feet_added_in_meters() {
        let plot = PlotFile {
            shots: vec![plot_shot("AE19", ft(10.0), ft(-10.0), ft(100.0))],
        };
        let groups = convert_plot(&plot, 16, &ZeroReference::default());
        assert_eq!(groups[0].stations["AE19"], station("3.048", "-3.048", "30.480"));
    }

    #[test]
    fn zero_reference_in_feet() {
        let plot = PlotFile {
            shots: vec![plot_shot("A", m(1.0), m(0.0), m(0.0))],
        };
        let zero = ZeroReference {
            northing: ft(10.0),
            easting: ft(0.0),
            elevation: ft(0.0),
        };
        let groups = convert_plot(&plot, 16, &zero);
        assert_eq!(groups[0].stations["A"], station("4.048", "0.000", "0.000"));
    }

    #[test]
    fn last_write_wins() {
        let plot = PlotFile {
            shots: vec![
                plot_shot("A", m(1.0), m(1.0), m(1.0)),
                plot_shot("B", m(2.0), m(2.0), m(2.0)),
                plot_shot("A", m(3.0), m(3.0), m(3.0)),
            ],
        };
        let groups = convert_plot(&plot, 16, &ZeroReference::default());
        let stations = &groups[0].stations;
        assert_eq!(stations.len(), 2);
        assert_eq!(stations["A"], station("3.000", "3.000", "3.000"));
    }

    #[test]
    fn non_finite_coordinate_left_out_of_later_position() {
        let plot = PlotFile {
            shots: vec![
                plot_shot("A", m(1.0), m(1.0), m(1.0)),
                plot_shot("A", m(f64::NAN), m(5.0), m(5.0)),
            ],
        };
        let groups = convert_plot(&plot, 16, &ZeroReference::default());
        assert_eq!(
            groups[0].stations["A"],
            FixedStation {
                north: None,
                east: Some("5.000".into()),
                elev: Some("5.000".into()),
            }
        );
    }

    #[test]
    fn empty_plot_still_yields_a_group() {
        let plot = PlotFile { shots: Vec::new() };
        let groups = convert_plot(&plot, 16, &ZeroReference::default());
        assert_eq!(groups.len(), 1);
        assert!(groups[0].stations.is_empty());
    }
}
