//! Dimensions, unit identifiers, and the authoritative unit table.
//!
//! The table below is the single source of truth for every unit the core
//! supports: its stable id, display symbol, and conversion factor to the
//! base unit of its dimension. The `units!` macro expands it into the
//! [`UnitId`] enum and the registry lookup in one place, so the id, symbol,
//! and factor of a unit can never drift apart.
//!
//! ## Id scheme
//!
//! `id = dimension code * 10_000 + index`, e.g. `Meter = 10011`,
//! `Second = 20008`, `Radian = 30001`. Ids are append-only and never
//! renumbered; they cross every language boundary verbatim.
//!
//! ## Base units
//!
//! Meter, second, radian, kilogram, and watt carry factor `1.0` exactly.
//! All other factors are exact where the unit has an exact definition
//! (international foot, IAU 2012 astronomical unit, avoirdupois pound, …)
//! and the best available CODATA/IAU value otherwise; the expression used
//! is kept in the table rather than a pre-multiplied literal so the
//! provenance stays readable.

use core::f64::consts::{PI, TAU};

use crate::macros::units;

/// Physical dimension partitioning the unit space.
///
/// Two units are convertible iff they share a `Dimension`. Discriminants
/// are stable and appear as the leading digit of every [`UnitId`].
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Lengths; base unit meter.
    Length = 1,
    /// Times; base unit second.
    Time = 2,
    /// Angles; base unit radian.
    Angle = 3,
    /// Masses; base unit kilogram.
    Mass = 4,
    /// Powers; base unit watt.
    Power = 5,
}

impl Dimension {
    /// Resolves a raw dimension code crossing an ABI boundary.
    pub const fn from_u32(raw: u32) -> Option<Dimension> {
        match raw {
            1 => Some(Dimension::Length),
            2 => Some(Dimension::Time),
            3 => Some(Dimension::Angle),
            4 => Some(Dimension::Mass),
            5 => Some(Dimension::Power),
            _ => None,
        }
    }

    /// The canonical base unit of this dimension (registry factor `1.0`).
    pub const fn base_unit(self) -> UnitId {
        match self {
            Dimension::Length => UnitId::Meter,
            Dimension::Time => UnitId::Second,
            Dimension::Angle => UnitId::Radian,
            Dimension::Mass => UnitId::Kilogram,
            Dimension::Power => UnitId::Watt,
        }
    }
}

/// One row of the registry: everything the core knows about a unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    /// Dimension this unit belongs to.
    pub dimension: Dimension,
    /// Multiplicative factor converting 1 unit to the dimension's base
    /// unit. Always finite and strictly positive (tested over the whole
    /// table).
    pub factor: f64,
    /// Display symbol, e.g. `"km"`. Non-empty.
    pub symbol: &'static str,
    /// PascalCase name, e.g. `"Kilometer"`.
    pub name: &'static str,
}

// Shared defining constants. Derived factors below are written in terms of
// these so the defining relationship, not a rounded product, is what the
// table records.
const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_JULIAN_YEAR: f64 = 365.25 * SECONDS_PER_DAY;
const SECONDS_PER_TROPICAL_YEAR: f64 = 365.242_5 * SECONDS_PER_DAY;
/// Exact (IAU 2012): meters per astronomical unit.
const METERS_PER_AU: f64 = 149_597_870_700.0;
const METERS_PER_LIGHT_YEAR: f64 = SPEED_OF_LIGHT_M_PER_S * SECONDS_PER_JULIAN_YEAR;
/// Exact given the au: `pc = au * 648000 / π`.
const METERS_PER_PARSEC: f64 = METERS_PER_AU * (648_000.0 / PI);
/// Exact: international foot.
const METERS_PER_FOOT: f64 = 0.3048;
/// Exact: avoirdupois pound.
const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;
const RADIANS_PER_DEGREE: f64 = PI / 180.0;
const RADIANS_PER_ARCSECOND: f64 = RADIANS_PER_DEGREE / 3_600.0;

units! {
    Length {
        // Fundamental physics lengths (CODATA 2018).
        PlanckLength = 10000, "l_P", 1.616_255e-35;
        // SI ladder, yocto- through yotta-.
        Yoctometer = 10001, "ym", 1e-24;
        Zeptometer = 10002, "zm", 1e-21;
        Attometer = 10003, "am", 1e-18;
        Femtometer = 10004, "fm", 1e-15;
        Picometer = 10005, "pm", 1e-12;
        Nanometer = 10006, "nm", 1e-9;
        Micrometer = 10007, "µm", 1e-6;
        Millimeter = 10008, "mm", 1e-3;
        Centimeter = 10009, "cm", 1e-2;
        Decimeter = 10010, "dm", 1e-1;
        Meter = 10011, "m", 1.0;
        Decameter = 10012, "dam", 1e1;
        Hectometer = 10013, "hm", 1e2;
        Kilometer = 10014, "km", 1e3;
        Megameter = 10015, "Mm", 1e6;
        Gigameter = 10016, "Gm", 1e9;
        Terameter = 10017, "Tm", 1e12;
        Petameter = 10018, "Pm", 1e15;
        Exameter = 10019, "Em", 1e18;
        Zettameter = 10020, "Zm", 1e21;
        Yottameter = 10021, "Ym", 1e24;
        BohrRadius = 10022, "a₀", 5.291_772_109_03e-11;
        ClassicalElectronRadius = 10023, "r_e", 2.817_940_326_2e-15;
        ElectronReducedComptonWavelength = 10024, "λ̄_e", 3.861_592_679_6e-13;
        // Astronomical distances. The au is exact; the light-year is the
        // distance light travels in one Julian year; parsecs follow from
        // the au.
        AstronomicalUnit = 10025, "au", METERS_PER_AU;
        LightYear = 10026, "ly", METERS_PER_LIGHT_YEAR;
        Parsec = 10027, "pc", METERS_PER_PARSEC;
        Kiloparsec = 10028, "kpc", 1e3 * METERS_PER_PARSEC;
        Megaparsec = 10029, "Mpc", 1e6 * METERS_PER_PARSEC;
        Gigaparsec = 10030, "Gpc", 1e9 * METERS_PER_PARSEC;
        // International/imperial and surveying units, all exact.
        Inch = 10031, "in", 0.025_4;
        Foot = 10032, "ft", METERS_PER_FOOT;
        Yard = 10033, "yd", 3.0 * METERS_PER_FOOT;
        Mile = 10034, "mi", 5_280.0 * METERS_PER_FOOT;
        Link = 10035, "lk", 0.66 * METERS_PER_FOOT;
        Fathom = 10036, "ftm", 6.0 * METERS_PER_FOOT;
        Rod = 10037, "rd", 16.5 * METERS_PER_FOOT;
        Chain = 10038, "ch", 66.0 * METERS_PER_FOOT;
        NauticalMile = 10039, "nmi", 1_852.0;
        // Nominal radii and reference distances (conventionally rounded).
        NominalLunarRadius = 10040, "R_☾", 1_737_400.0;
        NominalLunarDistance = 10041, "LD", 384_400_000.0;
        NominalEarthPolarRadius = 10042, "R_⊕pol", 6_356_752.314_2;
        NominalEarthRadius = 10043, "R_⊕", 6_371_000.0;
        NominalEarthEquatorialRadius = 10044, "R_⊕eq", 6_378_137.0;
        EarthMeridionalCircumference = 10045, "C_mer", 40_007_863.0;
        EarthEquatorialCircumference = 10046, "C_eq", 40_075_017.0;
        NominalJupiterRadius = 10047, "R_♃", 71_492_000.0;
        NominalSolarRadius = 10048, "R_☉", 695_700_000.0;
        NominalSolarDiameter = 10049, "D_☉", 2.0 * 695_700_000.0;
    }

    Time {
        // SI ladder.
        Attosecond = 20000, "as", 1e-18;
        Femtosecond = 20001, "fs", 1e-15;
        Picosecond = 20002, "ps", 1e-12;
        Nanosecond = 20003, "ns", 1e-9;
        Microsecond = 20004, "µs", 1e-6;
        Millisecond = 20005, "ms", 1e-3;
        Centisecond = 20006, "cs", 1e-2;
        Decisecond = 20007, "ds", 1e-1;
        Second = 20008, "s", 1.0;
        Decasecond = 20009, "das", 1e1;
        Hectosecond = 20010, "hs", 1e2;
        Kilosecond = 20011, "ks", 1e3;
        Megasecond = 20012, "Ms", 1e6;
        Gigasecond = 20013, "Gs", 1e9;
        Terasecond = 20014, "Ts", 1e12;
        // Civil units; the day is the conventional mean solar day, leap
        // seconds ignored. The year is the mean tropical year, 365.2425 d.
        Minute = 20015, "min", 60.0;
        Hour = 20016, "h", 3_600.0;
        Day = 20017, "d", SECONDS_PER_DAY;
        Week = 20018, "wk", 7.0 * SECONDS_PER_DAY;
        Fortnight = 20019, "fn", 14.0 * SECONDS_PER_DAY;
        Year = 20020, "yr", SECONDS_PER_TROPICAL_YEAR;
        Decade = 20021, "dec", 10.0 * SECONDS_PER_TROPICAL_YEAR;
        Century = 20022, "c", 100.0 * SECONDS_PER_TROPICAL_YEAR;
        Millennium = 20023, "mill", 1e3 * SECONDS_PER_TROPICAL_YEAR;
        // Julian conventions (ephemerides) and mean astronomical periods.
        // The sidereal/synodic values are conventional means.
        JulianYear = 20024, "a", SECONDS_PER_JULIAN_YEAR;
        JulianCentury = 20025, "jc", 36_525.0 * SECONDS_PER_DAY;
        SiderealDay = 20026, "sd", 86_164.090_5;
        SynodicMonth = 20027, "mo_s", 29.530_588 * SECONDS_PER_DAY;
        SiderealYear = 20028, "yr_s", 365.256_363_004 * SECONDS_PER_DAY;
    }

    Angle {
        Milliradian = 30000, "mrad", 1e-3;
        Radian = 30001, "rad", 1.0;
        MicroArcsecond = 30002, "µas", RADIANS_PER_ARCSECOND / 1e6;
        MilliArcsecond = 30003, "mas", RADIANS_PER_ARCSECOND / 1e3;
        Arcsecond = 30004, "″", RADIANS_PER_ARCSECOND;
        Arcminute = 30005, "′", RADIANS_PER_DEGREE / 60.0;
        Degree = 30006, "°", RADIANS_PER_DEGREE;
        // Gon: 1/400 of a full turn. Hour angle: 1/24 of a full turn.
        Gradian = 30007, "gon", PI / 200.0;
        Turn = 30008, "tr", TAU;
        HourAngle = 30009, "ʰ", PI / 12.0;
    }

    Mass {
        // SI gram ladder, expressed in kilograms.
        Yoctogram = 40000, "yg", 1e-27;
        Zeptogram = 40001, "zg", 1e-24;
        Attogram = 40002, "ag", 1e-21;
        Femtogram = 40003, "fg", 1e-18;
        Picogram = 40004, "pg", 1e-15;
        Nanogram = 40005, "ng", 1e-12;
        Microgram = 40006, "µg", 1e-9;
        Milligram = 40007, "mg", 1e-6;
        Centigram = 40008, "cg", 1e-5;
        Decigram = 40009, "dg", 1e-4;
        Gram = 40010, "g", 1e-3;
        Decagram = 40011, "dag", 1e-2;
        Hectogram = 40012, "hg", 1e-1;
        Kilogram = 40013, "kg", 1.0;
        Megagram = 40014, "Mg", 1e3;
        Gigagram = 40015, "Gg", 1e6;
        Teragram = 40016, "Tg", 1e9;
        Petagram = 40017, "Pg", 1e12;
        Exagram = 40018, "Eg", 1e15;
        Zettagram = 40019, "Zg", 1e18;
        Yottagram = 40020, "Yg", 1e21;
        // Avoirdupois family: defined from the exact pound. The grain is
        // 1/7000 lb, the ounce 1/16 lb.
        Grain = 40021, "gr", KILOGRAMS_PER_POUND / 7_000.0;
        Ounce = 40022, "oz", KILOGRAMS_PER_POUND / 16.0;
        Pound = 40023, "lb", KILOGRAMS_PER_POUND;
        Stone = 40024, "st", 14.0 * KILOGRAMS_PER_POUND;
        ShortTon = 40025, "ton_us", 2_000.0 * KILOGRAMS_PER_POUND;
        LongTon = 40026, "ton_uk", 2_240.0 * KILOGRAMS_PER_POUND;
        // Carat: 0.2 g exactly. Tonne: 1000 kg exactly.
        Carat = 40027, "ct", 2e-4;
        Tonne = 40028, "t", 1e3;
        // Dalton (CODATA 2022) and the IAU 2015 nominal solar mass. The
        // latter is a conversion constant, not a best estimate of the
        // Sun's true mass.
        AtomicMassUnit = 40029, "u", 1.660_539_068_92e-27;
        SolarMass = 40030, "M☉", 1.988_416e30;
    }

    Power {
        // SI ladder.
        Yoctowatt = 50000, "yW", 1e-24;
        Zeptowatt = 50001, "zW", 1e-21;
        Attowatt = 50002, "aW", 1e-18;
        Femtowatt = 50003, "fW", 1e-15;
        Picowatt = 50004, "pW", 1e-12;
        Nanowatt = 50005, "nW", 1e-9;
        Microwatt = 50006, "µW", 1e-6;
        Milliwatt = 50007, "mW", 1e-3;
        Deciwatt = 50008, "dW", 1e-1;
        Watt = 50009, "W", 1.0;
        Decawatt = 50010, "daW", 1e1;
        Hectowatt = 50011, "hW", 1e2;
        Kilowatt = 50012, "kW", 1e3;
        Megawatt = 50013, "MW", 1e6;
        Gigawatt = 50014, "GW", 1e9;
        Terawatt = 50015, "TW", 1e12;
        Petawatt = 50016, "PW", 1e15;
        Exawatt = 50017, "EW", 1e18;
        Zettawatt = 50018, "ZW", 1e21;
        Yottawatt = 50019, "YW", 1e24;
        // 1 erg = 1e-7 J exactly. Both horsepowers are exact definitions;
        // the solar luminosity is the IAU nominal constant.
        ErgPerSecond = 50020, "erg/s", 1e-7;
        HorsepowerMetric = 50021, "PS", 735.498_75;
        HorsepowerElectric = 50022, "hp_e", 746.0;
        SolarLuminosity = 50023, "L☉", 3.828e26;
    }
}
