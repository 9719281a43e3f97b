//! Family-bound unit constants
//!
//! One constant per catalog unit, typed by its family, so quantities can be
//! built without a fallible lookup: `Quantity::new(5.0, KILOMETERS)`.

use metrum_core::Unit;

use crate::family::*;

macro_rules! typed_units {
    ($($family:ident { $($name:ident = $unit:ident,)* })*) => {
        $($(
            pub const $name: UnitOf<$family> = UnitOf::new_unchecked(Unit::$unit);
        )*)*

        #[cfg(test)]
        const DECLARED: &[(Unit, metrum_core::Dimension)] = &[
            $($((Unit::$unit, <$family as Family>::DIMENSION),)*)*
        ];
    };
}

typed_units! {
    Length {
        FEET = Feet,
        NAUTICAL_MILES = NauticalMiles,
        METERS = Meters,
        KILOMETERS = Kilometers,
        MILES = Miles,
        MEGAMETERS = Megameters,
        HECTOMETERS = Hectometers,
        DECAMETERS = Decameters,
        DECIMETERS = Decimeters,
        CENTIMETERS = Centimeters,
        MILLIMETERS = Millimeters,
        MICROMETERS = Micrometers,
        NANOMETERS = Nanometers,
        PICOMETERS = Picometers,
        INCHES = Inches,
        YARDS = Yards,
        SCANDINAVIAN_MILES = ScandinavianMiles,
        LIGHTYEARS = Lightyears,
        FATHOMS = Fathoms,
        FURLONGS = Furlongs,
        ASTRONOMICAL_UNITS = AstronomicalUnits,
        PARSECS = Parsecs,
    }
    Speed {
        KNOTS = Knots,
        METERS_PER_SECOND = MetersPerSecond,
        FEET_PER_MINUTE = FeetPerMinute,
        KILOMETERS_PER_HOUR = KilometersPerHour,
        FEET_PER_SECOND = FeetPerSecond,
        MILES_PER_HOUR = MilesPerHour,
        INCHES_PER_SECOND = InchesPerSecond,
        YARDS_PER_SECOND = YardsPerSecond,
    }
    Pressure {
        HECTOPASCALS = Hectopascals,
        INCHES_OF_MERCURY = InchesOfMercury,
        MILLIMETERS_OF_MERCURY = MillimetersOfMercury,
        NEWTONS_PER_METERS_SQUARED = NewtonsPerMetersSquared,
        GIGAPASCALS = Gigapascals,
        MEGAPASCALS = Megapascals,
        KILOPASCALS = Kilopascals,
        BARS = Bars,
        MILLIBARS = Millibars,
        POUNDS_FORCE_PER_SQUARE_INCH = PoundsForcePerSquareInch,
    }
    Temperature {
        KELVIN = Kelvin,
        CELSIUS = Celsius,
        FAHRENHEIT = Fahrenheit,
        RANKINE = Rankine,
    }
    TemperatureDifference {
        CELSIUS_DELTA = CelsiusDelta,
        FAHRENHEIT_DELTA = FahrenheitDelta,
    }
    Mass {
        METRIC_TONS = MetricTons,
        KILOGRAMS = Kilograms,
        KILOPOUNDS = Kilopounds,
        POUNDS = Pounds,
        OUNCES = Ounces,
        GRAMS = Grams,
        DECIGRAMS = Decigrams,
        CENTIGRAMS = Centigrams,
        MILLIGRAMS = Milligrams,
        MICROGRAMS = Micrograms,
        NANOGRAMS = Nanograms,
        PICOGRAMS = Picograms,
        SHORT_TONS = ShortTons,
        STONES = Stones,
        CARATS = Carats,
        OUNCES_TROY = OuncesTroy,
        SLUGS = Slugs,
    }
    Volume {
        LITERS = Liters,
        QUARTS = Quarts,
        CUBIC_METERS = CubicMeters,
        CUBIC_CENTIMETERS = CubicCentimeters,
        GALLONS = Gallons,
        MEGALITERS = Megaliters,
        KILOLITERS = Kiloliters,
        DECILITERS = Deciliters,
        CENTILITERS = Centiliters,
        MILLILITERS = Milliliters,
        CUBIC_KILOMETERS = CubicKilometers,
        CUBIC_DECIMETERS = CubicDecimeters,
        CUBIC_MILLIMETERS = CubicMillimeters,
        CUBIC_INCHES = CubicInches,
        CUBIC_FEET = CubicFeet,
        CUBIC_YARDS = CubicYards,
        CUBIC_MILES = CubicMiles,
        ACRE_FEET = AcreFeet,
        BUSHELS = Bushels,
        TEASPOONS = Teaspoons,
        TABLESPOONS = Tablespoons,
        FLUID_OUNCES = FluidOunces,
        CUPS = Cups,
        PINTS = Pints,
        IMPERIAL_TEASPOONS = ImperialTeaspoons,
        IMPERIAL_TABLESPOONS = ImperialTablespoons,
        IMPERIAL_FLUID_OUNCES = ImperialFluidOunces,
        IMPERIAL_PINTS = ImperialPints,
        IMPERIAL_QUARTS = ImperialQuarts,
        IMPERIAL_GALLONS = ImperialGallons,
        METRIC_CUPS = MetricCups,
    }
    Acceleration {
        METERS_PER_SECOND_SQUARED = MetersPerSecondSquared,
        GRAVITY = Gravity,
    }
    Power {
        TERAWATTS = Terawatts,
        GIGAWATTS = Gigawatts,
        MEGAWATTS = Megawatts,
        KILOWATTS = Kilowatts,
        WATTS = Watts,
        MILLIWATTS = Milliwatts,
        MICROWATTS = Microwatts,
        NANOWATTS = Nanowatts,
        PICOWATTS = Picowatts,
        FEMTOWATTS = Femtowatts,
        HORSEPOWER = Horsepower,
    }
    Angle {
        DEGREES = Degrees,
        ARC_MINUTES = ArcMinutes,
        ARC_SECONDS = ArcSeconds,
        RADIANS = Radians,
        GRADIANS = Gradians,
        REVOLUTIONS = Revolutions,
    }
    AngularVelocity {
        RADIANS_PER_SECOND = RadiansPerSecond,
        DEGREES_PER_SECOND = DegreesPerSecond,
        REVOLUTIONS_PER_MINUTE = RevolutionsPerMinute,
        REVOLUTIONS_PER_SECOND = RevolutionsPerSecond,
    }
    Area {
        SQUARE_MEGAMETERS = SquareMegameters,
        SQUARE_KILOMETERS = SquareKilometers,
        SQUARE_METERS = SquareMeters,
        SQUARE_CENTIMETERS = SquareCentimeters,
        SQUARE_MILLIMETERS = SquareMillimeters,
        SQUARE_MICROMETERS = SquareMicrometers,
        SQUARE_NANOMETERS = SquareNanometers,
        SQUARE_INCHES = SquareInches,
        SQUARE_FEET = SquareFeet,
        SQUARE_YARDS = SquareYards,
        SQUARE_MILES = SquareMiles,
        ACRES = Acres,
        ARES = Ares,
        HECTARES = Hectares,
    }
    Concentration {
        GRAMS_PER_LITER = GramsPerLiter,
        MILLIGRAMS_PER_DECILITER = MilligramsPerDeciliter,
        PARTS_PER_MILLION = PartsPerMillion,
    }
    Time {
        HOURS = Hours,
        MINUTES = Minutes,
        SECONDS = Seconds,
        MILLISECONDS = Milliseconds,
        MICROSECONDS = Microseconds,
        NANOSECONDS = Nanoseconds,
        PICOSECONDS = Picoseconds,
        DAYS = Days,
        WEEKS = Weeks,
        YEARS = Years,
        DECADES = Decades,
        CENTURIES = Centuries,
    }
    ElectricChargeCapacity {
        MEGAAMPERE_HOURS = MegaampereHours,
        KILOAMPERE_HOURS = KiloampereHours,
        AMPERE_HOURS = AmpereHours,
        MILLIAMPERE_HOURS = MilliampereHours,
        MICROAMPERE_HOURS = MicroampereHours,
        COULOMBS = Coulombs,
    }
    ElectricCurrent {
        MEGAAMPERES = Megaamperes,
        KILOAMPERES = Kiloamperes,
        AMPERES = Amperes,
        MILLIAMPERES = Milliamperes,
        MICROAMPERES = Microamperes,
    }
    ElectricPotential {
        MEGAVOLTS = Megavolts,
        KILOVOLTS = Kilovolts,
        VOLTS = Volts,
        MILLIVOLTS = Millivolts,
        MICROVOLTS = Microvolts,
    }
    ElectricResistance {
        MEGAOHMS = Megaohms,
        KILOOHMS = Kiloohms,
        OHMS = Ohms,
        MILLIOHMS = Milliohms,
        MICROOHMS = Microohms,
    }
    Energy {
        KILOJOULES = Kilojoules,
        JOULES = Joules,
        KILOCALORIES = Kilocalories,
        CALORIES = Calories,
        KILOWATT_HOURS = KilowattHours,
        WATT_HOURS = WattHours,
    }
    Frequency {
        TERAHERTZ = Terahertz,
        GIGAHERTZ = Gigahertz,
        MEGAHERTZ = Megahertz,
        KILOHERTZ = Kilohertz,
        HERTZ = Hertz,
        MILLIHERTZ = Millihertz,
        MICROHERTZ = Microhertz,
        NANOHERTZ = Nanohertz,
        FRAMES_PER_SECOND = FramesPerSecond,
    }
    FuelEfficiency {
        LITERS_PER_100_KILOMETERS = LitersPer100Kilometers,
        MILES_PER_IMPERIAL_GALLON = MilesPerImperialGallon,
        MILES_PER_GALLON = MilesPerGallon,
    }
    Data {
        BYTES = Bytes,
        BITS = Bits,
        NIBBLES = Nibbles,
        YOTTABYTES = Yottabytes,
        ZETTABYTES = Zettabytes,
        EXABYTES = Exabytes,
        PETABYTES = Petabytes,
        TERABYTES = Terabytes,
        GIGABYTES = Gigabytes,
        MEGABYTES = Megabytes,
        KILOBYTES = Kilobytes,
        YOTTABITS = Yottabits,
        ZETTABITS = Zettabits,
        EXABITS = Exabits,
        PETABITS = Petabits,
        TERABITS = Terabits,
        GIGABITS = Gigabits,
        MEGABITS = Megabits,
        KILOBITS = Kilobits,
        YOBIBYTES = Yobibytes,
        ZEBIBYTES = Zebibytes,
        EXBIBYTES = Exbibytes,
        PEBIBYTES = Pebibytes,
        TEBIBYTES = Tebibytes,
        GIBIBYTES = Gibibytes,
        MEBIBYTES = Mebibytes,
        KIBIBYTES = Kibibytes,
        YOBIBITS = Yobibits,
        ZEBIBITS = Zebibits,
        EXBIBITS = Exbibits,
        PEBIBITS = Pebibits,
        TEBIBITS = Tebibits,
        GIBIBITS = Gibibits,
        MEBIBITS = Mebibits,
        KIBIBITS = Kibibits,
    }
}
