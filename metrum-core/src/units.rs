//! Unit catalog - 220 units across 22 families
//!
//! Coefficients convert a value into its family's base unit. One listing
//! generates both the [`Unit`] enum and its catalog rows, so a unit's
//! discriminant indexes its row.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Dimension, UnitError};

/// Static attributes of one unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub unit: Unit,
    pub id: &'static str,
    pub dimension: Dimension,
    pub coefficient: f64,
    pub offset: f64,
}

macro_rules! units {
    (@offset) => { 0.0 };
    (@offset $offset:expr) => { $offset };
    ($($dimension:ident {
        $($unit:ident => $id:literal, $coefficient:expr $(, offset $offset:expr)?;)*
    })*) => {
        /// A concrete unit of measure, belonging to exactly one [`Dimension`]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum Unit {
            $($($unit,)*)*
        }

        impl Unit {
            /// Every unit in declaration order
            pub const ALL: [Unit; UNIT_COUNT] = [$($(Unit::$unit,)*)*];
        }

        const UNIT_COUNT: usize = [$($($id,)*)*].len();

        /// Every unit definition, indexed by `Unit as usize`
        pub static CATALOG: [UnitDef; UNIT_COUNT] = [$($(
            UnitDef {
                unit: Unit::$unit,
                id: $id,
                dimension: Dimension::$dimension,
                coefficient: $coefficient,
                offset: units!(@offset $($offset)?),
            },
        )*)*];
    };
}

units! {
    Length {
        Feet => "feet", 0.3048;
        NauticalMiles => "nauticalMiles", 1852.0;
        Meters => "meters", 1.0;
        Kilometers => "kilometers", 1000.0;
        Miles => "miles", 1609.344;
        Megameters => "megameters", 1.0e6;
        Hectometers => "hectometers", 100.0;
        Decameters => "decameters", 10.0;
        Decimeters => "decimeters", 0.1;
        Centimeters => "centimeters", 0.01;
        Millimeters => "millimeters", 0.001;
        Micrometers => "micrometers", 1.0e-6;
        Nanometers => "nanometers", 1.0e-9;
        Picometers => "picometers", 1.0e-12;
        Inches => "inches", 0.0254;
        Yards => "yards", 0.9144;
        ScandinavianMiles => "scandinavianMiles", 1.0e4;
        Lightyears => "lightyears", 9.4607304725808e15;
        Fathoms => "fathoms", 1.8288;
        Furlongs => "furlongs", 201.168;
        AstronomicalUnits => "astronomicalUnits", 1.495978707e11;
        Parsecs => "parsecs", 3.0856775814913673e16;
    }
    Speed {
        Knots => "knots", 0.514444;
        MetersPerSecond => "metersPerSecond", 1.0;
        FeetPerMinute => "feetPerMinute", 0.00508;
        KilometersPerHour => "kilometersPerHour", 0.277778;
        FeetPerSecond => "feetPerSecond", 0.3048;
        MilesPerHour => "milesPerHour", 0.44704;
        InchesPerSecond => "inchesPerSecond", 0.0254;
        YardsPerSecond => "yardsPerSecond", 0.9144;
    }
    Pressure {
        Hectopascals => "hectopascals", 100.0;
        InchesOfMercury => "inchesOfMercury", 3386.389;
        MillimetersOfMercury => "millimetersOfMercury", 133.322;
        NewtonsPerMetersSquared => "newtonsPerMetersSquared", 1.0;
        Gigapascals => "gigapascals", 1.0e9;
        Megapascals => "megapascals", 1.0e6;
        Kilopascals => "kilopascals", 1000.0;
        Bars => "bars", 1.0e5;
        Millibars => "millibars", 100.0;
        PoundsForcePerSquareInch => "poundsForcePerSquareInch", 6894.757;
    }
    Temperature {
        Kelvin => "kelvin", 1.0;
        Celsius => "celsius", 1.0, offset 273.15;
        Fahrenheit => "fahrenheit", 5.0 / 9.0, offset 459.67;
        Rankine => "rankine", 5.0 / 9.0;
    }
    TemperatureDifference {
        CelsiusDelta => "celsiusDelta", 1.0;
        FahrenheitDelta => "fahrenheitDelta", 5.0 / 9.0;
    }
    Mass {
        MetricTons => "metricTons", 1.0e6;
        Kilograms => "kilograms", 1000.0;
        Kilopounds => "kilopounds", 4.5359237e5;
        Pounds => "pounds", 453.59237;
        Ounces => "ounces", 28.349523125;
        Grams => "grams", 1.0;
        Decigrams => "decigrams", 0.1;
        Centigrams => "centigrams", 0.01;
        Milligrams => "milligrams", 0.001;
        Micrograms => "micrograms", 1.0e-6;
        Nanograms => "nanograms", 1.0e-9;
        Picograms => "picograms", 1.0e-12;
        ShortTons => "shortTons", 907184.74;
        Stones => "stones", 6350.29318;
        Carats => "carats", 0.2;
        OuncesTroy => "ouncesTroy", 31.1034768;
        Slugs => "slugs", 14593.9029372;
    }
    Volume {
        Liters => "liters", 1.0;
        Quarts => "quarts", 0.946352946;
        CubicMeters => "cubicMeters", 1000.0;
        CubicCentimeters => "cubicCentimeters", 0.001;
        Gallons => "gallons", 3.785411784;
        Megaliters => "megaliters", 1.0e6;
        Kiloliters => "kiloliters", 1000.0;
        Deciliters => "deciliters", 0.1;
        Centiliters => "centiliters", 0.01;
        Milliliters => "milliliters", 0.001;
        CubicKilometers => "cubicKilometers", 1.0e12;
        CubicDecimeters => "cubicDecimeters", 1.0;
        CubicMillimeters => "cubicMillimeters", 1.0e-6;
        CubicInches => "cubicInches", 0.016387064;
        CubicFeet => "cubicFeet", 28.316846592;
        CubicYards => "cubicYards", 764.554857984;
        CubicMiles => "cubicMiles", 4.168181825440579584e12;
        AcreFeet => "acreFeet", 1233481.83754752;
        Bushels => "bushels", 35.23907016688;
        Teaspoons => "teaspoons", 0.00492892159375;
        Tablespoons => "tablespoons", 0.01478676478125;
        FluidOunces => "fluidOunces", 0.0295735295625;
        Cups => "cups", 0.24;
        Pints => "pints", 0.473176473;
        ImperialTeaspoons => "imperialTeaspoons", 0.00591938802083333;
        ImperialTablespoons => "imperialTablespoons", 0.0177581640625;
        ImperialFluidOunces => "imperialFluidOunces", 0.0284130625;
        ImperialPints => "imperialPints", 0.56826125;
        ImperialQuarts => "imperialQuarts", 1.1365225;
        ImperialGallons => "imperialGallons", 4.54609;
        MetricCups => "metricCups", 0.25;
    }
    Acceleration {
        MetersPerSecondSquared => "metersPerSecondSquared", 1.0;
        Gravity => "gravity", 9.80665;
    }
    Power {
        Terawatts => "terawatts", 1.0e12;
        Gigawatts => "gigawatts", 1.0e9;
        Megawatts => "megawatts", 1.0e6;
        Kilowatts => "kilowatts", 1000.0;
        Watts => "watts", 1.0;
        Milliwatts => "milliwatts", 0.001;
        Microwatts => "microwatts", 1.0e-6;
        Nanowatts => "nanowatts", 1.0e-9;
        Picowatts => "picowatts", 1.0e-12;
        Femtowatts => "femtowatts", 1.0e-15;
        Horsepower => "horsepower", 745.69987158227022;
    }
    Angle {
        Degrees => "degrees", 1.0;
        ArcMinutes => "arcMinutes", 1.0 / 60.0;
        ArcSeconds => "arcSeconds", 1.0 / 3600.0;
        Radians => "radians", 57.29577951308232;
        Gradians => "gradians", 0.9;
        Revolutions => "revolutions", 360.0;
    }
    AngularVelocity {
        RadiansPerSecond => "radiansPerSecond", 57.29577951308232;
        DegreesPerSecond => "degreesPerSecond", 1.0;
        RevolutionsPerMinute => "revolutionsPerMinute", 6.0;
        RevolutionsPerSecond => "revolutionsPerSecond", 360.0;
    }
    Area {
        SquareMegameters => "squareMegameters", 1.0e12;
        SquareKilometers => "squareKilometers", 1.0e6;
        SquareMeters => "squareMeters", 1.0;
        SquareCentimeters => "squareCentimeters", 0.0001;
        SquareMillimeters => "squareMillimeters", 1.0e-6;
        SquareMicrometers => "squareMicrometers", 1.0e-12;
        SquareNanometers => "squareNanometers", 1.0e-18;
        SquareInches => "squareInches", 0.00064516;
        SquareFeet => "squareFeet", 0.09290304;
        SquareYards => "squareYards", 0.83612736;
        SquareMiles => "squareMiles", 2.589988110336e6;
        Acres => "acres", 4046.8564224;
        Ares => "ares", 100.0;
        Hectares => "hectares", 10000.0;
    }
    Concentration {
        GramsPerLiter => "gramsPerLiter", 1.0;
        MilligramsPerDeciliter => "milligramsPerDeciliter", 0.01;
        PartsPerMillion => "partsPerMillion", 1.0e-6;
    }
    Time {
        Hours => "hours", 3600.0;
        Minutes => "minutes", 60.0;
        Seconds => "seconds", 1.0;
        Milliseconds => "milliseconds", 0.001;
        Microseconds => "microseconds", 1.0e-6;
        Nanoseconds => "nanoseconds", 1.0e-9;
        Picoseconds => "picoseconds", 1.0e-12;
        Days => "days", 86400.0;
        Weeks => "weeks", 604800.0;
        Years => "years", 3.15576e7;
        Decades => "decades", 3.15576e8;
        Centuries => "centuries", 3.15576e9;
    }
    ElectricChargeCapacity {
        MegaampereHours => "megaampereHours", 3.6e9;
        KiloampereHours => "kiloampereHours", 3.6e6;
        AmpereHours => "ampereHours", 3600.0;
        MilliampereHours => "milliampereHours", 3.6;
        MicroampereHours => "microampereHours", 0.0036;
        Coulombs => "coulombs", 1.0;
    }
    ElectricCurrent {
        Megaamperes => "megaamperes", 1.0e6;
        Kiloamperes => "kiloamperes", 1000.0;
        Amperes => "amperes", 1.0;
        Milliamperes => "milliamperes", 0.001;
        Microamperes => "microamperes", 1.0e-6;
    }
    ElectricPotential {
        Megavolts => "megavolts", 1.0e6;
        Kilovolts => "kilovolts", 1000.0;
        Volts => "volts", 1.0;
        Millivolts => "millivolts", 0.001;
        Microvolts => "microvolts", 1.0e-6;
    }
    ElectricResistance {
        Megaohms => "megaohms", 1.0e6;
        Kiloohms => "kiloohms", 1000.0;
        Ohms => "ohms", 1.0;
        Milliohms => "milliohms", 0.001;
        Microohms => "microohms", 1.0e-6;
    }
    Energy {
        Kilojoules => "kilojoules", 1000.0;
        Joules => "joules", 1.0;
        Kilocalories => "kilocalories", 4184.0;
        Calories => "calories", 4.184;
        KilowattHours => "kilowattHours", 3.6e6;
        WattHours => "wattHours", 3600.0;
    }
    Frequency {
        Terahertz => "terahertz", 1.0e12;
        Gigahertz => "gigahertz", 1.0e9;
        Megahertz => "megahertz", 1.0e6;
        Kilohertz => "kilohertz", 1000.0;
        Hertz => "hertz", 1.0;
        Millihertz => "millihertz", 0.001;
        Microhertz => "microhertz", 1.0e-6;
        Nanohertz => "nanohertz", 1.0e-9;
        FramesPerSecond => "framesPerSecond", 1.0;
    }
    FuelEfficiency {
        LitersPer100Kilometers => "litersPer100Kilometers", 1.0;
        MilesPerImperialGallon => "milesPerImperialGallon", 282.4809362796091;
        MilesPerGallon => "milesPerGallon", 235.2145833333333;
    }
    Data {
        Bytes => "bytes", 1.0;
        Bits => "bits", 0.125;
        Nibbles => "nibbles", 0.5;
        Yottabytes => "yottabytes", 1.0e24;
        Zettabytes => "zettabytes", 1.0e21;
        Exabytes => "exabytes", 1.0e18;
        Petabytes => "petabytes", 1.0e15;
        Terabytes => "terabytes", 1.0e12;
        Gigabytes => "gigabytes", 1.0e9;
        Megabytes => "megabytes", 1.0e6;
        Kilobytes => "kilobytes", 1000.0;
        Yottabits => "yottabits", 1.0e24 * 0.125;
        Zettabits => "zettabits", 1.0e21 * 0.125;
        Exabits => "exabits", 1.0e18 * 0.125;
        Petabits => "petabits", 1.0e15 * 0.125;
        Terabits => "terabits", 1.0e12 * 0.125;
        Gigabits => "gigabits", 1.0e9 * 0.125;
        Megabits => "megabits", 1.0e6 * 0.125;
        Kilobits => "kilobits", 125.0;
        Yobibytes => "yobibytes", 1.2089258196146292e24;
        Zebibytes => "zebibytes", 1.1805916207174113e21;
        Exbibytes => "exbibytes", 1.152921504606847e18;
        Pebibytes => "pebibytes", 1.125899906842624e15;
        Tebibytes => "tebibytes", 1.099511627776e12;
        Gibibytes => "gibibytes", 1.073741824e9;
        Mebibytes => "mebibytes", 1.048576e6;
        Kibibytes => "kibibytes", 1024.0;
        Yobibits => "yobibits", 1.2089258196146292e24 * 0.125;
        Zebibits => "zebibits", 1.1805916207174113e21 * 0.125;
        Exbibits => "exbibits", 1.152921504606847e18 * 0.125;
        Pebibits => "pebibits", 1.125899906842624e15 * 0.125;
        Tebibits => "tebibits", 1.099511627776e12 * 0.125;
        Gibibits => "gibibits", 1.073741824e9 * 0.125;
        Mebibits => "mebibits", 1.048576e6 * 0.125;
        Kibibits => "kibibits", 1024.0 * 0.125;
    }
}

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Lookup indexes over the catalog
pub struct UnitRegistry {
    by_id: HashMap<&'static str, Unit>,
    by_dimension: Vec<Vec<Unit>>,
}

impl UnitRegistry {
    fn new() -> Self {
        let mut registry = UnitRegistry {
            by_id: HashMap::with_capacity(CATALOG.len()),
            by_dimension: vec![Vec::new(); Dimension::ALL.len()],
        };
        for def in CATALOG.iter() {
            registry.register(def);
        }
        registry
    }

    fn register(&mut self, def: &UnitDef) {
        self.by_id.insert(def.id, def.unit);
        self.by_dimension[def.dimension as usize].push(def.unit);
    }

    /// Get a unit by its identifier
    pub fn get(&self, id: &str) -> Result<Unit, UnitError> {
        self.by_id.get(id).copied().ok_or_else(|| {
            debug!(id, "unknown unit identifier");
            UnitError::UnknownUnit(id.to_string())
        })
    }

    /// Units of one family, in declaration order
    pub fn units_of(&self, dimension: Dimension) -> &[Unit] {
        &self.by_dimension[dimension as usize]
    }

    /// All unit identifiers
    pub fn ids(&self) -> Vec<&'static str> {
        CATALOG.iter().map(|def| def.id).collect()
    }
}
