//! Typed cross-dimension multiply/divide
//!
//! `Product` and `Quotient` impls mirror the core law table, so only the
//! pairings it defines type-check. Commuted products reuse the canonical law
//! with its operands swapped.

use std::ops::{Div, Mul};

use metrum_core::algebra::{self, Law};

use crate::family::*;
use crate::Quantity;

/// `Self × Rhs` is defined
pub trait Product<Rhs: Family>: Family {
    type Output: Family;
    const LAW: Law;
}

/// `Self ÷ Rhs` is defined
pub trait Quotient<Rhs: Family>: Family {
    type Output: Family;
    const LAW: Law;
}

fn evaluate<L: Family, R: Family, O: Family>(law: Law, lhs: &Quantity<L>, rhs: &Quantity<R>) -> Quantity<O> {
    let l = lhs.value_in(UnitOf::new_unchecked(law.lhs));
    let r = rhs.value_in(UnitOf::new_unchecked(law.rhs));
    Quantity::new(law.combine(l, r), UnitOf::new_unchecked(law.output))
}

impl<F: Family> Quantity<F> {
    pub fn multiply<R: Family>(&self, rhs: &Quantity<R>) -> Quantity<F::Output>
    where
        F: Product<R>,
    {
        evaluate(F::LAW, self, rhs)
    }

    pub fn divide<R: Family>(&self, rhs: &Quantity<R>) -> Quantity<F::Output>
    where
        F: Quotient<R>,
    {
        evaluate(F::LAW, self, rhs)
    }
}

impl<F: Product<R>, R: Family> Mul<Quantity<R>> for Quantity<F> {
    type Output = Quantity<F::Output>;

    fn mul(self, rhs: Quantity<R>) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<F: Quotient<R>, R: Family> Div<Quantity<R>> for Quantity<F> {
    type Output = Quantity<F::Output>;

    fn div(self, rhs: Quantity<R>) -> Self::Output {
        self.divide(&rhs)
    }
}

macro_rules! products {
    ($($lhs:ident * $rhs:ident => $output:ident = $law:expr;)*) => {
        $(
            impl Product<$rhs> for $lhs {
                type Output = $output;
                const LAW: Law = $law;
            }
        )*

        #[cfg(test)]
        fn check_all_products() {
            $(tests::check_product::<$lhs, $rhs>();)*
        }
    };
}

macro_rules! quotients {
    ($($lhs:ident / $rhs:ident => $output:ident = $law:expr;)*) => {
        $(
            impl Quotient<$rhs> for $lhs {
                type Output = $output;
                const LAW: Law = $law;
            }
        )*

        #[cfg(test)]
        fn check_all_quotients() {
            $(tests::check_quotient::<$lhs, $rhs>();)*
        }
    };
}

products! {
    Length * Length => Area = algebra::AREA_FROM_LENGTHS;
    Length * Area => Volume = algebra::VOLUME_FROM_LENGTH_AREA;
    Area * Length => Volume = algebra::VOLUME_FROM_LENGTH_AREA.commuted();
    Speed * Time => Length = algebra::LENGTH_FROM_SPEED;
    Time * Speed => Length = algebra::LENGTH_FROM_SPEED.commuted();
    Acceleration * Time => Speed = algebra::SPEED_FROM_ACCELERATION;
    Time * Acceleration => Speed = algebra::SPEED_FROM_ACCELERATION.commuted();
    Concentration * Volume => Mass = algebra::MASS_FROM_CONCENTRATION;
    Volume * Concentration => Mass = algebra::MASS_FROM_CONCENTRATION.commuted();
    Power * Time => Energy = algebra::ENERGY_FROM_POWER;
    Time * Power => Energy = algebra::ENERGY_FROM_POWER.commuted();
    ElectricCurrent * ElectricPotential => Power = algebra::POWER_FROM_CURRENT;
    ElectricPotential * ElectricCurrent => Power = algebra::POWER_FROM_CURRENT.commuted();
    ElectricResistance * ElectricCurrent => ElectricPotential = algebra::POTENTIAL_FROM_RESISTANCE;
    ElectricCurrent * ElectricResistance => ElectricPotential = algebra::POTENTIAL_FROM_RESISTANCE.commuted();
    ElectricChargeCapacity * ElectricPotential => Energy = algebra::ENERGY_FROM_CHARGE;
    ElectricPotential * ElectricChargeCapacity => Energy = algebra::ENERGY_FROM_CHARGE.commuted();
    AngularVelocity * Time => Angle = algebra::ANGLE_FROM_ANGULAR_VELOCITY;
    Time * AngularVelocity => Angle = algebra::ANGLE_FROM_ANGULAR_VELOCITY.commuted();
}

quotients! {
    Area / Length => Length = algebra::LENGTH_FROM_AREA;
    Volume / Area => Length = algebra::LENGTH_FROM_VOLUME;
    Volume / Length => Area = algebra::AREA_FROM_VOLUME;
    Length / Time => Speed = algebra::SPEED_FROM_LENGTH;
    Length / Speed => Time = algebra::TIME_FROM_LENGTH;
    Speed / Time => Acceleration = algebra::ACCELERATION_FROM_SPEED;
    Speed / Acceleration => Time = algebra::TIME_FROM_SPEED;
    Mass / Volume => Concentration = algebra::CONCENTRATION_FROM_MASS;
    Mass / Concentration => Volume = algebra::VOLUME_FROM_MASS;
    Energy / Time => Power = algebra::POWER_FROM_ENERGY;
    Energy / Power => Time = algebra::TIME_FROM_ENERGY;
    Power / ElectricCurrent => ElectricPotential = algebra::POTENTIAL_FROM_POWER;
    Power / ElectricPotential => ElectricCurrent = algebra::CURRENT_FROM_POWER;
    ElectricPotential / ElectricCurrent => ElectricResistance = algebra::RESISTANCE_FROM_POTENTIAL;
    ElectricPotential / ElectricResistance => ElectricCurrent = algebra::CURRENT_FROM_POTENTIAL;
    Energy / ElectricPotential => ElectricChargeCapacity = algebra::CHARGE_FROM_ENERGY;
    Energy / ElectricChargeCapacity => ElectricPotential = algebra::POTENTIAL_FROM_ENERGY;
    Angle / Time => AngularVelocity = algebra::ANGULAR_VELOCITY_FROM_ANGLE;
    Angle / AngularVelocity => Time = algebra::TIME_FROM_ANGLE;
}
