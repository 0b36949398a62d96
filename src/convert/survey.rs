use std::collections::HashSet;

use crate::breakout::{Direction, Empty, Shot, ShotMeasurement, Station, SurveyEntry};
use crate::convert::format;
use crate::convert::header::TripUnits;
use crate::frcs::{self, Lruds};
use crate::units::{Length, UnitizedNumber};

/// Stitches a trip's shots, in order, into an alternating station/shot sequence.
pub fn convert_survey(shots: &[frcs::Shot], units: TripUnits) -> Vec<SurveyEntry> {
    let mut builder = SurveyBuilder::new(units);
    for shot in shots {
        builder.push(shot);
    }
    builder.finish()
}

/// Where a shot's readings go.
enum Target {
    Shot(usize),
    Splays(usize),
}

/// Accumulates one trip's sequence. The `last_*` fields index into `survey`.
struct SurveyBuilder {
    units: TripUnits,
    survey: Vec<SurveyEntry>,
    last_from: Option<usize>,
    last_shot: Option<usize>,
    last_to: Option<usize>,
    /// From station of the previous shot, when that shot was a splay.
    last_splay: Option<usize>,
    seen: HashSet<String>,
}

impl SurveyBuilder {
    fn new(units: TripUnits) -> Self {
        Self {
            units,
            survey: Vec::new(),
            last_from: None,
            last_shot: None,
            last_to: None,
            last_splay: None,
            seen: HashSet::new(),
        }
    }

    fn finish(self) -> Vec<SurveyEntry> {
        self.survey
    }

    fn push(&mut self, shot: &frcs::Shot) {
        let target = match self.repeat_target(shot) {
            Some(target) => target,
            None => self.start_leg(shot),
        };

        let readings = self.readings(shot);
        match target {
            Target::Shot(index) => {
                if let Some(SurveyEntry::Shot(record)) = self.survey.get_mut(index) {
                    record.measurements.extend(readings);
                }
            }
            Target::Splays(index) => {
                self.attach_lrud(index, shot.from_lruds.as_ref());
                if let Some(SurveyEntry::Station(station)) = self.survey.get_mut(index) {
                    station.splays.get_or_insert_with(Vec::new).extend(readings);
                }
            }
        }
    }

    /// Where `shot`'s readings go when it repeats the previous shot.
    fn repeat_target(&self, shot: &frcs::Shot) -> Option<Target> {
        if shot.is_splay() {
            let station = self.last_splay?;
            let same_station = self.station_id(station) == Some(shot.from.as_str());
            same_station.then_some(Target::Splays(station))
        } else {
            let shot_index = self.last_shot?;
            self.continues_leg(shot).then_some(Target::Shot(shot_index))
        }
    }

    /// Whether `shot` re-measures the leg added by the previous shot.
    fn continues_leg(&self, shot: &frcs::Shot) -> bool {
        let (Some(from), Some(to)) = (self.last_from, self.last_to) else {
            return false;
        };
        self.station_id(from) == Some(shot.from.as_str())
            && self.station_id(to) == shot.to.as_deref()
    }

    fn start_leg(&mut self, shot: &frcs::Shot) -> Target {
        let from = self.resolve_from(&shot.from);
        self.attach_lrud(from, shot.from_lruds.as_ref());

        let Some(to_id) = &shot.to else {
            // A splay ends no leg, so the previous leg's to station still chains.
            self.last_from = None;
            self.last_shot = None;
            self.last_splay = Some(from);
            return Target::Splays(from);
        };

        let shot_index = self.append(SurveyEntry::Shot(Shot {
            exclude_dist: shot.exclude_distance,
            measurements: Vec::new(),
        }));
        let to = self.append_station(to_id);
        self.attach_lrud(to, shot.to_lruds.as_ref());

        self.last_from = Some(from);
        self.last_shot = Some(shot_index);
        self.last_to = Some(to);
        self.last_splay = None;
        Target::Shot(shot_index)
    }

    /// Reuses the previous to station when the survey chains, otherwise
    /// inserts a break and a new station.
    fn resolve_from(&mut self, id: &str) -> usize {
        if let Some(index) = self.last_to {
            if self.station_id(index) == Some(id) {
                return index;
            }
        }
        if !self.survey.is_empty() {
            self.append(SurveyEntry::Empty(Empty {}));
        }
        self.append_station(id)
    }

    fn append(&mut self, entry: SurveyEntry) -> usize {
        self.survey.push(entry);
        self.survey.len() - 1
    }

    fn append_station(&mut self, id: &str) -> usize {
        if !self.seen.insert(id.to_string()) {
            log::debug!("Station {} appears again at entry {}", id, self.survey.len());
        }
        self.append(SurveyEntry::Station(Station::new(id)))
    }

    fn station_id(&self, index: usize) -> Option<&str> {
        self.survey
            .get(index)
            .and_then(SurveyEntry::as_station)
            .map(|s| s.station.as_str())
    }

    /// The first LRUDs recorded for a station win.
    fn attach_lrud(&mut self, index: usize, lruds: Option<&Lruds>) {
        let Some(lruds) = lruds else {
            return;
        };
        let unit = self.units.distance;
        if let Some(SurveyEntry::Station(station)) = self.survey.get_mut(index) {
            if station.lrud.is_none() {
                let get =
                    |v: Option<UnitizedNumber<Length>>| format::lrud(v.map(|v| v.get(unit)));
                station.lrud = Some([
                    get(lruds.left),
                    get(lruds.right),
                    get(lruds.up),
                    get(lruds.down),
                ]);
            }
        }
    }

    /// A frontsight reading, plus a backsight when one was taken.
    fn readings(&self, shot: &frcs::Shot) -> Vec<ShotMeasurement> {
        let TripUnits {
            distance,
            azimuth,
            inclination,
        } = self.units;

        let dist = shot.distance.map(|d| d.get(distance));
        let azm_fs = shot.frontsight_azimuth.map(|a| a.get(azimuth));
        let azm_bs = shot.backsight_azimuth.map(|a| a.get(azimuth));
        let mut inc_fs = shot.frontsight_inclination.map(|i| i.get(inclination));
        let mut inc_bs = shot.backsight_inclination.map(|i| i.get(inclination));

        // No inclination at all on a shot with an azimuth means it was level.
        if !is_finite(inc_fs) && !is_finite(inc_bs) {
            if is_finite(azm_fs) {
                inc_fs = Some(0.0);
            } else if is_finite(azm_bs) {
                inc_bs = Some(0.0);
            }
        }

        let mut readings = vec![ShotMeasurement {
            dist: format::measurement(dist),
            azm: format::measurement(azm_fs),
            inc: format::measurement(inc_fs),
            ..ShotMeasurement::new(Direction::Fs)
        }];

        if is_finite(azm_bs) || is_finite(inc_bs) {
            readings.push(ShotMeasurement {
                azm: format::measurement(azm_bs),
                inc: format::measurement(inc_bs),
                ..ShotMeasurement::new(Direction::Bs)
            });
        }

        readings
    }
}

fn is_finite(value: Option<f64>) -> bool {
    value.is_some_and(f64::is_finite)
}
