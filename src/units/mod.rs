mod types;

pub use types::{Angle, Length, Unit, UnitizedNumber};
