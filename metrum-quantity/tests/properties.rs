//! Cross-crate properties of conversion and quantity arithmetic

use metrum_core::{algebra, convert, Dimension, Measurement, Unit, UnitError};
use metrum_quantity::units::*;
use metrum_quantity::{Length, Quantity, Temperature, TemperatureDifference, UnitOf};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-10 * b.abs().max(1.0)
}

#[test]
fn round_trip_through_every_proportional_unit() {
    for dimension in Dimension::ALL.into_iter().filter(|d| d.is_proportional()) {
        let base = dimension.base_unit();
        for &unit in dimension.units() {
            let there = convert(42.0, base, unit).unwrap();
            let back = convert(there, unit, base).unwrap();
            assert!(close(back, 42.0), "{} -> {} -> {}", base, unit, back);
        }
    }
}

#[test]
fn temperature_round_trips() {
    for &from in Dimension::Temperature.units() {
        for &to in Dimension::Temperature.units() {
            let there = convert(-17.5, from, to).unwrap();
            assert!(close(convert(there, to, from).unwrap(), -17.5), "{} <-> {}", from, to);
        }
    }
}

#[test]
fn typed_and_untyped_conversions_agree() {
    for unit in UnitOf::<Length>::all() {
        let typed = Quantity::new(3.25, MILES).converted(unit).value();
        let untyped = Measurement::new(3.25, Unit::Miles).converted(unit.unit()).unwrap().value;
        assert_eq!(typed, untyped, "{}", unit);
    }
}

#[test]
fn every_cross_family_conversion_fails() {
    for &from in Unit::ALL.iter().step_by(7) {
        for &to in Unit::ALL.iter().step_by(5) {
            let result = convert(1.0, from, to);
            if from.dimension() == to.dimension() {
                assert!(result.is_ok());
            } else {
                assert_eq!(
                    result,
                    Err(UnitError::DimensionMismatch {
                        from: from.dimension(),
                        to: to.dimension(),
                    })
                );
            }
        }
    }
}

#[test]
fn typed_products_match_measurement_products() {
    let speed = Quantity::new(72.0, KILOMETERS_PER_HOUR);
    let time = Quantity::new(15.0, MINUTES);

    let typed = speed * time;
    let untyped = speed.to_measurement().multiplying(time.to_measurement()).unwrap();
    assert_eq!(typed.to_measurement(), untyped);
    assert_eq!(untyped.unit, Unit::Meters);
}

#[test]
fn commuted_products_are_equal() {
    for law in algebra::LAWS.iter().filter(|l| l.operator == metrum_core::Operator::Multiply) {
        let a = Measurement::new(3.0, law.lhs);
        let b = Measurement::new(7.0, law.rhs);
        assert_eq!(a.multiplying(b), b.multiplying(a), "{}", law);
    }
}

#[test]
fn temperature_difference_applies_in_matching_degrees() {
    let room: Quantity<Temperature> = Quantity::new(68.0, FAHRENHEIT);
    let delta: Quantity<TemperatureDifference> = Quantity::new(5.0, CELSIUS_DELTA);
    let warmer = room + delta;
    assert_eq!(warmer.unit(), FAHRENHEIT);
    assert!(close(warmer.value(), 77.0));

    let untyped = room.to_measurement().adding(delta.to_measurement()).unwrap();
    assert!(close(untyped.value, warmer.value()));
}

#[test]
fn fuel_efficiency_reciprocal_fixed_point() {
    let mpg = convert(100.0, Unit::LitersPer100Kilometers, Unit::MilesPerGallon).unwrap();
    assert!((mpg - 2.3521458333333).abs() < 1e-12);
    let back = Quantity::new(mpg, MILES_PER_GALLON).converted(LITERS_PER_100_KILOMETERS);
    assert!(close(back.value(), 100.0));
}

#[test]
fn quantities_deserialize_only_into_their_family() {
    let json = r#"{"value":3.0,"unit":"hours"}"#;
    let measurement: Measurement = serde_json::from_str(json).unwrap();
    assert_eq!(measurement, Measurement::new(3.0, Unit::Hours));
    assert!(serde_json::from_str::<Quantity<Length>>(json).is_err());
    assert!(serde_json::from_str::<Quantity<metrum_quantity::Time>>(json).is_ok());
}
