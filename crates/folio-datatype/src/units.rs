//! Measurement units accepted by the expression language.
//!
//! Unit names are matched case-sensitively: `Hz` is a frequency unit,
//! `hz` is not a unit at all. An identifier immediately following a
//! number that is not one of these names is a lexical error.

use core::fmt;
use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Absolute length units ([XSL 1.1 § 5.9.6 Absolute
/// Numerics](https://www.w3.org/TR/xsl11/)).
///
/// These carry unit power 1 in the length dimension. Conversion between
/// them (e.g. 1in = 72pt) is a consumer concern; arithmetic in this
/// crate demands matching units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum AbsoluteUnit {
    /// Centimeters.
    #[strum(serialize = "cm")]
    Cm,
    /// Millimeters.
    #[strum(serialize = "mm")]
    Mm,
    /// Inches.
    #[strum(serialize = "in")]
    In,
    /// Points, 1/72 of an inch.
    #[strum(serialize = "pt")]
    Pt,
    /// Picas, 12 points.
    #[strum(serialize = "pc")]
    Pc,
    /// Pixels.
    #[strum(serialize = "px")]
    Px,
}

/// Time units, used by aural properties such as `pause-before`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum TimeUnit {
    /// Seconds.
    #[strum(serialize = "s")]
    Seconds,
    /// Milliseconds.
    #[strum(serialize = "ms")]
    Milliseconds,
}

/// Frequency units, used by aural properties such as `pitch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum FrequencyUnit {
    /// Hertz.
    #[strum(serialize = "Hz")]
    Hertz,
    /// Kilohertz.
    #[strum(serialize = "kHz")]
    Kilohertz,
}

/// Any unit name the tokenizer recognizes after a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    /// The font-relative length unit, resolved against the current font
    /// size at parse time.
    Em,
    /// An absolute length unit.
    Absolute(AbsoluteUnit),
    /// A time unit.
    Time(TimeUnit),
    /// A frequency unit.
    Frequency(FrequencyUnit),
}

impl Unit {
    /// Look up a unit by its exact (case-sensitive) name.
    ///
    /// Returns `None` for anything outside the unit vocabulary,
    /// including angle units, which the lexical layer does not accept.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "em" {
            return Some(Self::Em);
        }
        if let Ok(unit) = name.parse::<AbsoluteUnit>() {
            return Some(Self::Absolute(unit));
        }
        if let Ok(unit) = name.parse::<TimeUnit>() {
            return Some(Self::Time(unit));
        }
        name.parse::<FrequencyUnit>().ok().map(Self::Frequency)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Em => write!(f, "em"),
            Self::Absolute(unit) => unit.fmt(f),
            Self::Time(unit) => unit.fmt(f),
            Self::Frequency(unit) => unit.fmt(f),
        }
    }
}
