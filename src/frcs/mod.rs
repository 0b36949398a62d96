//! Parsed FRCS survey data.
//!
//! These types mirror the structured records produced by an FRCS file parser.
//! Reading the raw fixed-column text is out of scope; the converter accepts
//! the parsed records as JSON.

mod plot;
mod summary;
mod survey;

pub use plot::{PlotFile, PlotShot};
pub use summary::{TripSummary, TripSummaryFile};
pub use survey::{Lruds, Shot, SurveyFile, Trip, TripHeader};
