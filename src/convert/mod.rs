//! FRCS → Breakout conversion.
//!
//! Every function here is pure: the same input always produces the same
//! document, and unusable readings are dropped instead of failing the run.

mod cave;
pub mod format;
mod header;
mod plot;
mod survey;

pub use cave::{convert_cave, convert_to_breakout, convert_trip, CaveInput};
pub use header::{convert_trip_header, TripUnits};
pub use plot::{convert_plot, ZeroReference};
pub use survey::convert_survey;
