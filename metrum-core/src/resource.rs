//! Display-resource keys
//!
//! Units and dimensions do not carry display text. They expose keys of the
//! form `"<id>.<field>"` that a localization layer resolves through a
//! [`StringCatalog`].

use std::collections::HashMap;
use std::fmt;

use crate::{Dimension, Unit};

/// The display strings a picker or label can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Symbol,
    ShortName,
    LongName,
    DetailedIntroduction,
}

impl TextField {
    pub const ALL: [TextField; 4] = [
        TextField::Symbol,
        TextField::ShortName,
        TextField::LongName,
        TextField::DetailedIntroduction,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            TextField::Symbol => "symbol",
            TextField::ShortName => "shortName",
            TextField::LongName => "longName",
            TextField::DetailedIntroduction => "detailedIntroduction",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Source of localized strings keyed by resource key
pub trait StringCatalog {
    fn lookup(&self, key: &str) -> Option<String>;
}

impl StringCatalog for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Anything with a stable identifier that display text hangs off
pub trait Described {
    fn id(&self) -> &'static str;

    fn resource_key(&self, field: TextField) -> String {
        format!("{}.{}", self.id(), field.suffix())
    }

    /// Resolve a field through `catalog`, falling back to the key itself
    fn localized(&self, field: TextField, catalog: &dyn StringCatalog) -> String {
        let key = self.resource_key(field);
        catalog.lookup(&key).unwrap_or(key)
    }
}

impl Described for Unit {
    fn id(&self) -> &'static str {
        Unit::id(*self)
    }
}

impl Described for Dimension {
    fn id(&self) -> &'static str {
        Dimension::id(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_keys() {
        assert_eq!(Unit::NauticalMiles.resource_key(TextField::Symbol), "nauticalMiles.symbol");
        assert_eq!(Unit::Celsius.resource_key(TextField::ShortName), "celsius.shortName");
        assert_eq!(Unit::Liters.resource_key(TextField::LongName), "liters.longName");
        assert_eq!(
            Unit::Parsecs.resource_key(TextField::DetailedIntroduction),
            "parsecs.detailedIntroduction"
        );
    }

    #[test]
    fn test_dimension_keys() {
        assert_eq!(
            Dimension::FuelEfficiency.resource_key(TextField::LongName),
            "fuelEfficiency.longName"
        );
    }

    #[test]
    fn test_localized_falls_back_to_key() {
        let mut catalog = HashMap::new();
        catalog.insert("meters.symbol".to_string(), "m".to_string());
        assert_eq!(Unit::Meters.localized(TextField::Symbol, &catalog), "m");
        assert_eq!(Unit::Meters.localized(TextField::LongName, &catalog), "meters.longName");
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys = std::collections::HashSet::new();
        for unit in Unit::ALL {
            for field in TextField::ALL {
                assert!(keys.insert(unit.resource_key(field)));
            }
        }
    }
}
