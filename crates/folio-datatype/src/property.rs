//! The evaluated property value model.
//!
//! Evaluating a property value expression
//! ([XSL 1.1 § 5.9 Expressions](https://www.w3.org/TR/xsl11/)) yields
//! exactly one [`Property`]. Multi-valued properties such as
//! `font-family` yield a flat [`Property::List`]; a lone sub-expression
//! never wraps itself in a one-element list.

use core::fmt;
use serde::Serialize;

use crate::color::ColorValue;
use crate::numeric::{Dimension, Numeric};
use crate::units::{AbsoluteUnit, FrequencyUnit, TimeUnit};

/// The base a percentage resolves against, declared by the consumer
/// before parsing begins.
///
/// A dimension-0 base resolves the percentage to a plain number at
/// parse time. A dimension-1 (length) base defers resolution: the
/// parser produces a [`Length::Percent`] carrying the factor and this
/// base. Any other dimension is rejected when a percentage is seen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentBase {
    /// The dimension of the base value.
    pub dimension: Dimension,
    /// The base magnitude a resolved percentage multiplies.
    pub value: f64,
}

/// A length value: either fixed in an absolute unit, or a deferred
/// percentage awaiting base resolution by the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Length {
    /// A magnitude in one absolute unit. No conversion between units
    /// happens here; `10pt` stays ten points.
    Fixed {
        /// The magnitude in `unit`.
        magnitude: f64,
        /// The unit the magnitude is expressed in.
        unit: AbsoluteUnit,
    },
    /// A percentage of a length base, e.g. `50%` with factor 0.5.
    Percent {
        /// The percentage divided by 100.
        factor: f64,
        /// The declared base the factor will multiply.
        base: PercentBase,
    },
}

/// An evaluated property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Property {
    /// A dimensionless number. Integer and float literals both land
    /// here.
    Number(f64),
    /// A length, fixed or deferred-percentage.
    Length(Length),
    /// A time value, e.g. `250ms`.
    Time {
        /// The magnitude in `unit`.
        value: f64,
        /// Seconds or milliseconds.
        unit: TimeUnit,
    },
    /// A frequency value, e.g. `50Hz`.
    Frequency {
        /// The magnitude in `unit`.
        value: f64,
        /// Hertz or kilohertz.
        unit: FrequencyUnit,
    },
    /// A color, from a hex spec or a color function.
    Color(ColorValue),
    /// A quoted string literal.
    String(String),
    /// An unquoted name, including the `inherit`, `auto`, and `none`
    /// keywords, whose meaning is property-specific.
    Identifier(String),
    /// A boolean literal.
    Boolean(bool),
    /// A URI from the `url(...)` form.
    Uri(String),
    /// A mime type from the `content-type:` form.
    MimeType(String),
    /// Two or more top-level sub-expression values, flattened. Never
    /// holds fewer than two elements.
    List(Vec<Property>),
}

impl Property {
    /// The numeric capability of this value, if it has one.
    ///
    /// Numbers, lengths, times, and frequencies are numeric; for a
    /// deferred percentage the magnitude is its factor.
    #[must_use]
    pub fn as_numeric(&self) -> Option<Numeric> {
        match self {
            Self::Number(n) => Some(Numeric::new(Dimension::Scalar, *n)),
            Self::Length(Length::Fixed { magnitude, .. }) => {
                Some(Numeric::new(Dimension::Length, *magnitude))
            }
            Self::Length(Length::Percent { factor, .. }) => {
                Some(Numeric::new(Dimension::Length, *factor))
            }
            Self::Time { value, .. } => Some(Numeric::new(Dimension::Time, *value)),
            Self::Frequency { value, .. } => Some(Numeric::new(Dimension::Frequency, *value)),
            _ => None,
        }
    }

    /// The value as a plain number, if it is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a name: the text of an identifier or string.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) | Self::String(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Property {
    /// Render the value in a form the expression parser accepts back.
    ///
    /// For numbers and fixed lengths the rendering round-trips to an
    /// equal value; a deferred percentage renders as its percentage but
    /// loses the captured base.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Length(Length::Fixed { magnitude, unit }) => write!(f, "{magnitude}{unit}"),
            Self::Length(Length::Percent { factor, .. }) => write!(f, "{}%", factor * 100.0),
            Self::Time { value, unit } => write!(f, "{value}{unit}"),
            Self::Frequency { value, unit } => write!(f, "{value}{unit}"),
            Self::Color(color) => color.fmt(f),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Identifier(name) => f.write_str(name),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Uri(uri) => write!(f, "url({uri})"),
            Self::MimeType(mime) => write!(f, "content-type:{mime}"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}
