use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A unit of some physical dimension.
pub trait Unit: Copy + PartialEq {
    /// Size of one of this unit in the dimension's base unit.
    fn scale(self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Length {
    Inches,
    Feet,
    Yards,
    Meters,
    Kilometers,
    Miles,
}

impl Unit for Length {
    fn scale(self) -> f64 {
        match self {
            Length::Inches => 0.0254,
            Length::Feet => 0.3048,
            Length::Yards => 0.9144,
            Length::Meters => 1.0,
            Length::Kilometers => 1000.0,
            Length::Miles => 1609.344,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Angle {
    Degrees,
    Gradians,
    MilsNato,
    Radians,
}

impl Unit for Angle {
    fn scale(self) -> f64 {
        match self {
            Angle::Degrees => 1.0,
            Angle::Gradians => 0.9,
            Angle::MilsNato => 360.0 / 6400.0,
            Angle::Radians => 180.0 / std::f64::consts::PI,
        }
    }
}

/// A magnitude tagged with the unit it was measured in.
///
/// Values are immutable: conversion happens on read through [`UnitizedNumber::get`],
/// and addition produces a new value in the left operand's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitizedNumber<U> {
    value: f64,
    unit: U,
}

impl<U: Unit> UnitizedNumber<U> {
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// Magnitude expressed in `unit`.
    pub fn get(&self, unit: U) -> f64 {
        if unit == self.unit {
            return self.value;
        }
        self.value * self.unit.scale() / unit.scale()
    }
}

impl<U: Unit> Add for UnitizedNumber<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.get(self.unit), self.unit)
    }
}
