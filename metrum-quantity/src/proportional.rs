//! Arithmetic for proportional families
//!
//! Same-unit operands combine raw values and keep the unit. Mixed units are
//! both normalized to the base unit and the result is in the base unit.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::family::{Proportional, UnitOf};
use crate::Quantity;

impl<F: Proportional> Quantity<F> {
    fn combine(self, other: Self, op: impl Fn(f64, f64) -> f64) -> Self {
        if self.unit() == other.unit() {
            Quantity::new(op(self.value(), other.value()), self.unit())
        } else {
            Quantity::new(op(self.base_value(), other.base_value()), UnitOf::base())
        }
    }

    pub fn add(self, other: Self) -> Self {
        self.combine(other, |a, b| a + b)
    }

    pub fn subtract(self, other: Self) -> Self {
        self.combine(other, |a, b| a - b)
    }

    /// Dimensionless ratio `self / other`
    pub fn ratio(&self, other: &Self) -> f64 {
        if self.unit() == other.unit() {
            return self.value() / other.value();
        }
        self.base_value() / other.base_value()
    }

    /// Truncating remainder of `self / other`, in this unit
    pub fn modulo(&self, other: &Self) -> Self {
        Quantity::new(self.value() % other.value_in(self.unit()), self.unit())
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Quantity::new(self.value() * factor, self.unit())
    }
}

impl<F: Proportional> Add for Quantity<F> {
    type Output = Quantity<F>;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<F: Proportional> Sub for Quantity<F> {
    type Output = Quantity<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<F: Proportional> Neg for Quantity<F> {
    type Output = Quantity<F>;

    fn neg(self) -> Self::Output {
        self.scaled(-1.0)
    }
}

impl<F: Proportional> Mul<f64> for Quantity<F> {
    type Output = Quantity<F>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}

impl<F: Proportional> Div<f64> for Quantity<F> {
    type Output = Quantity<F>;

    fn div(self, rhs: f64) -> Self::Output {
        Quantity::new(self.value() / rhs, self.unit())
    }
}
