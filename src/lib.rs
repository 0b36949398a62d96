//! Converts parsed FRCS cave survey data into the Breakout survey format.

pub mod breakout;
pub mod config;
pub mod convert;
pub mod frcs;
pub mod units;

pub use convert::{convert_to_breakout, CaveInput};
