//! Angle helpers
//!
//! Trigonometry and range normalization for `Quantity<Angle>`. Normalized
//! results are expressed in radians.

use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use crate::family::Angle;
use crate::units::{DEGREES, RADIANS};
use crate::Quantity;

impl Quantity<Angle> {
    pub fn degrees(value: f64) -> Self {
        Quantity::new(value, DEGREES)
    }

    pub fn radians(value: f64) -> Self {
        Quantity::new(value, RADIANS)
    }

    pub fn zero() -> Self {
        Self::radians(0.0)
    }

    pub fn in_radians(&self) -> f64 {
        self.value_in(RADIANS)
    }

    pub fn in_degrees(&self) -> f64 {
        self.value_in(DEGREES)
    }

    pub fn sin(&self) -> f64 {
        self.in_radians().sin()
    }

    pub fn cos(&self) -> f64 {
        self.in_radians().cos()
    }

    pub fn tan(&self) -> f64 {
        self.in_radians().tan()
    }

    pub fn sinh(&self) -> f64 {
        self.in_radians().sinh()
    }

    pub fn cosh(&self) -> f64 {
        self.in_radians().cosh()
    }

    pub fn tanh(&self) -> f64 {
        self.in_radians().tanh()
    }

    pub fn asin(x: f64) -> Self {
        Self::radians(x.asin())
    }

    pub fn acos(x: f64) -> Self {
        Self::radians(x.acos())
    }

    pub fn atan(x: f64) -> Self {
        Self::radians(x.atan())
    }

    /// Order by angular size, regardless of unit
    pub fn compare(&self, other: &Self) -> Ordering {
        self.in_radians().total_cmp(&other.in_radians())
    }

    /// Wrap into `[0, 2π)`
    pub fn normalized_positive(&self) -> Self {
        if !self.value().is_normal() {
            return *self;
        }
        let wrapped = self.in_radians().rem_euclid(TAU);
        // rem_euclid can round up to TAU for tiny negative inputs
        Quantity::radians(if wrapped >= TAU { 0.0 } else { wrapped })
    }

    /// Wrap into `(-π, π]` when `include_180`, else `[-π, π)`
    pub fn normalized_signed(&self, include_180: bool) -> Self {
        if !self.value().is_normal() {
            return *self;
        }
        let positive = self.normalized_positive().value();
        let wraps = if include_180 { positive > PI } else { positive >= PI };
        Quantity::radians(if wraps { positive - TAU } else { positive })
    }

    /// Magnitude of [`Quantity::normalized_signed`], in `[0, π]`
    pub fn normalized_signed_abs(&self) -> Self {
        Quantity::radians(self.normalized_signed(true).in_radians().abs())
    }

    /// Wrap into `(-2π, 0]`
    pub fn normalized_negative(&self) -> Self {
        if !self.value().is_normal() {
            return *self;
        }
        let positive = self.normalized_positive().value();
        Quantity::radians(if positive > 0.0 { positive - TAU } else { positive })
    }
}
