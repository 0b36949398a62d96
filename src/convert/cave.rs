use std::collections::BTreeMap;

use crate::breakout::{self, Cave, MetacaveData};
use crate::convert::header::{convert_trip_header, TripUnits};
use crate::convert::plot::{convert_plot, ZeroReference};
use crate::convert::survey::convert_survey;
use crate::frcs::{PlotFile, SurveyFile, Trip, TripSummary, TripSummaryFile};

/// Everything known about one cave.
#[derive(Debug, Clone, PartialEq)]
pub struct CaveInput {
    pub survey: SurveyFile,
    pub plot: Option<PlotFile>,
    pub summaries: Option<TripSummaryFile>,
    pub survey_notes_file_prefix: Option<String>,
    pub utm_zone: Option<i32>,
    /// Defaults to 0 m on every axis.
    pub zero_reference: Option<ZeroReference>,
}

impl CaveInput {
    pub fn new(survey: SurveyFile) -> Self {
        Self {
            survey,
            plot: None,
            summaries: None,
            survey_notes_file_prefix: None,
            utm_zone: None,
            zero_reference: None,
        }
    }
}

/// Converts every cave into one Breakout document.
pub fn convert_to_breakout(data: &BTreeMap<String, CaveInput>) -> MetacaveData {
    let caves = data
        .iter()
        .map(|(name, input)| {
            log::info!("Converting cave {}", name);
            (name.clone(), convert_cave(input))
        })
        .collect();

    MetacaveData { caves }
}

pub fn convert_cave(input: &CaveInput) -> Cave {
    let mut trips: Vec<Option<breakout::Trip>> = input
        .survey
        .trips
        .iter()
        .enumerate()
        .map(|(index, trip)| {
            let trip = trip.as_ref()?;
            let summary = input.summaries.as_ref().and_then(|s| s.get(index));
            Some(convert_trip(
                index as u32 + 1,
                trip,
                summary,
                input.survey_notes_file_prefix.as_deref(),
            ))
        })
        .collect();

    // Absent trips keep later trips in place but don't pad the end.
    while matches!(trips.last(), Some(None)) {
        trips.pop();
    }

    let fixed_stations = match (&input.plot, input.utm_zone) {
        (Some(plot), Some(utm_zone)) => {
            let zero = input.zero_reference.unwrap_or_default();
            Some(convert_plot(plot, utm_zone, &zero))
        }
        (Some(_), None) => {
            log::warn!("Plot supplied without a UTM zone, skipping fixed stations");
            None
        }
        _ => None,
    };

    Cave {
        fixed_stations,
        trips,
    }
}

pub fn convert_trip(
    trip_number: u32,
    trip: &Trip,
    summary: Option<&TripSummary>,
    survey_notes_file_prefix: Option<&str>,
) -> breakout::Trip {
    let mut result =
        convert_trip_header(trip_number, &trip.header, summary, survey_notes_file_prefix);
    result.survey = convert_survey(&trip.shots, TripUnits::resolve(&trip.header));
    log::debug!(
        "Trip {}: {} shots into {} survey entries",
        result.name,
        trip.shots.len(),
        result.survey.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frcs::{PlotShot, Shot, TripHeader};
    use crate::units::{Angle, Length, UnitizedNumber};

    fn trip(name: &str) -> Trip {
        Trip {
            header: TripHeader {
                name: name.into(),
                comment: None,
                section: None,
                team: None,
                date: None,
                distance_unit: Length::Feet,
                azimuth_unit: Angle::Degrees,
                inclination_unit: Angle::Degrees,
                backsight_azimuth_corrected: false,
                backsight_inclination_corrected: false,
            },
            shots: vec![Shot {
                from: "A".into(),
                to: Some("B".into()),
                distance: Some(UnitizedNumber::new(5.0, Length::Feet)),
                frontsight_azimuth: None,
                backsight_azimuth: None,
                frontsight_inclination: None,
                backsight_inclination: None,
                exclude_distance: false,
                from_lruds: None,
                to_lruds: None,
                comment: None,
            }],
        }
    }

    fn plot() -> PlotFile {
        let zero = UnitizedNumber::new(0.0, Length::Meters);
        PlotFile {
            shots: vec![PlotShot {
                from_name: None,
                to_name: "A".into(),
                northing: zero,
                easting: zero,
                elevation: zero,
            }],
        }
    }

    #[test]
    fn absent_trip_keeps_later_positions() {
        let survey = SurveyFile {
            cave_name: None,
            location: None,
            trips: vec![Some(trip("first")), None, Some(trip("third")), None],
        };
        let cave = convert_cave(&CaveInput::new(survey));

        assert_eq!(cave.trips.len(), 3);
        assert_eq!(cave.trips[0].as_ref().map(|t| t.name.as_str()), Some("1 first"));
        assert!(cave.trips[1].is_none());
        assert_eq!(cave.trips[2].as_ref().map(|t| t.name.as_str()), Some("3 third"));
        assert_eq!(cave.trips[2].as_ref().map(|t| t.survey.len()), Some(3));
    }

    #[test]
    fn summaries_matched_by_position() {
        let survey = SurveyFile {
            cave_name: None,
            location: None,
            trips: vec![Some(trip("first")), Some(trip("second"))],
        };
        let summaries = TripSummaryFile {
            trip_summaries: vec![
                None,
                Some(TripSummary {
                    trip_number: 20,
                    trip_index: Some(1),
                    date: None,
                    name: None,
                    team: None,
                    footage: None,
                    excluded_footage: None,
                }),
            ],
        };
        let cave = convert_cave(&CaveInput {
            summaries: Some(summaries),
            ..CaveInput::new(survey)
        });

        let names: Vec<_> = cave.trips.iter().flatten().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["1 first", "20 second"]);
    }

    #[test]
    fn fixed_stations_need_plot_and_zone() {
        let survey = SurveyFile {
            cave_name: None,
            location: None,
            trips: Vec::new(),
        };

        let without_zone = convert_cave(&CaveInput {
            plot: Some(plot()),
            ..CaveInput::new(survey.clone())
        });
        assert!(without_zone.fixed_stations.is_none());

        let without_plot = convert_cave(&CaveInput {
            utm_zone: Some(16),
            ..CaveInput::new(survey.clone())
        });
        assert!(without_plot.fixed_stations.is_none());

        let both = convert_cave(&CaveInput {
            plot: Some(plot()),
            utm_zone: Some(16),
            ..CaveInput::new(survey)
        });
        let groups = both.fixed_stations.unwrap();
        assert_eq!(groups[0].utm_zone, 16);
        assert_eq!(groups[0].stations["A"].north.as_deref(), Some("0.000"));
        assert!(both.trips.is_empty());
    }

    #[test]
    fn converts_every_cave() {
        let mut data = BTreeMap::new();
        for name in ["Fisher Ridge", "Hicks"] {
            let survey = SurveyFile {
                cave_name: Some(name.into()),
                location: None,
                trips: vec![Some(trip(name))],
            };
            data.insert(name.to_string(), CaveInput::new(survey));
        }

        let document = convert_to_breakout(&data);
        assert_eq!(document.caves.len(), 2);
        assert_eq!(document.caves["Hicks"].trips.len(), 1);
        assert_eq!(document, convert_to_breakout(&data));
    }
}
