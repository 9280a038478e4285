//! Dimension-checked arithmetic over property values.
//!
//! [XSL 1.1 § 5.9.6 Absolute Numerics](https://www.w3.org/TR/xsl11/)
//! models a numeric as a value together with unit powers: a number has
//! power 0, a length power 1 in the length dimension, and so on.
//! Addition and subtraction demand operands with equal powers;
//! multiplication and division demand a dimensionless operand, since
//! values with powers outside {0, 1} (an area, say) are not expressible
//! as property values; modulo is defined on numbers only.

use serde::Serialize;
use strum_macros::Display;

use crate::error::PropertyError;
use crate::property::{Length, Property};

/// The dimension a numeric value carries its unit power in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Dimension {
    /// A plain number, unit power 0 everywhere.
    #[strum(serialize = "scalar")]
    Scalar,
    /// A length (fixed or deferred percentage).
    #[strum(serialize = "length")]
    Length,
    /// A time, as in aural pause properties.
    #[strum(serialize = "time")]
    Time,
    /// A frequency, as in aural pitch properties.
    #[strum(serialize = "frequency")]
    Frequency,
    /// An angle. No angle unit is lexed, but a percent base may declare
    /// this dimension, which evaluation rejects.
    #[strum(serialize = "angle")]
    Angle,
}

/// The numeric capability of a property value: its dimension and
/// magnitude.
///
/// For a deferred percentage length the magnitude is the percentage
/// factor; the base is applied later by the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Numeric {
    dimension: Dimension,
    magnitude: f64,
}

impl Numeric {
    /// Create a numeric view.
    #[must_use]
    pub const fn new(dimension: Dimension, magnitude: f64) -> Self {
        Self {
            dimension,
            magnitude,
        }
    }

    /// The dimension the unit power lives in.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The magnitude in the value's own unit.
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

/// Add two numeric property values.
///
/// # Errors
///
/// Rejects non-numeric operands, operands of different dimensions or
/// units, and unresolved percentages.
pub fn add(lhs: Property, rhs: Property) -> Result<Property, PropertyError> {
    combine("addition", lhs, rhs, |a, b| a + b)
}

/// Subtract the right numeric property value from the left.
///
/// # Errors
///
/// Same legality rules as [`add`].
pub fn subtract(lhs: Property, rhs: Property) -> Result<Property, PropertyError> {
    combine("subtraction", lhs, rhs, |a, b| a - b)
}

/// Multiply two numeric property values.
///
/// At least one operand must be dimensionless; the result keeps the
/// other operand's unit. Two dimensioned operands would yield unit
/// power 2, which no property value can carry.
///
/// # Errors
///
/// Rejects non-numeric operands and two dimensioned operands.
pub fn multiply(lhs: Property, rhs: Property) -> Result<Property, PropertyError> {
    ensure_numeric("multiplication", &lhs)?;
    ensure_numeric("multiplication", &rhs)?;
    match (lhs, rhs) {
        (Property::Number(a), Property::Number(b)) => Ok(Property::Number(a * b)),
        (Property::Number(a), rhs) => Ok(scaled(rhs, a)),
        (lhs, Property::Number(b)) => Ok(scaled(lhs, b)),
        _ => Err(PropertyError::new(
            "cannot multiply two dimensioned operands",
        )),
    }
}

/// Divide the left numeric property value by the right.
///
/// The divisor must be dimensionless unless both operands are numbers.
/// Division by zero follows IEEE 754, as the original doubles did.
///
/// # Errors
///
/// Rejects non-numeric operands and dimensioned divisors.
pub fn divide(lhs: Property, rhs: Property) -> Result<Property, PropertyError> {
    ensure_numeric("division", &lhs)?;
    ensure_numeric("division", &rhs)?;
    match (lhs, rhs) {
        (Property::Number(a), Property::Number(b)) => Ok(Property::Number(a / b)),
        (lhs, Property::Number(b)) => Ok(divided(lhs, b)),
        _ => Err(PropertyError::new("cannot divide by a dimensioned operand")),
    }
}

/// Take the remainder of the left numeric value divided by the right.
///
/// Defined on dimensionless numbers only. The result takes the sign of
/// the dividend, matching the original implementation's `%`.
///
/// # Errors
///
/// Rejects non-numeric and dimensioned operands.
pub fn modulo(lhs: Property, rhs: Property) -> Result<Property, PropertyError> {
    ensure_numeric("modulo", &lhs)?;
    ensure_numeric("modulo", &rhs)?;
    match (lhs, rhs) {
        (Property::Number(a), Property::Number(b)) => Ok(Property::Number(a % b)),
        _ => Err(PropertyError::new("modulo requires dimensionless operands")),
    }
}

/// Negate a numeric property value, preserving its unit.
///
/// # Errors
///
/// Rejects non-numeric operands.
pub fn negate(operand: Property) -> Result<Property, PropertyError> {
    ensure_numeric("negation", &operand)?;
    Ok(map_magnitude(operand, |n| -n))
}

/// Absolute value, preserving the unit.
///
/// # Errors
///
/// Rejects non-numeric operands.
pub fn abs(operand: Property) -> Result<Property, PropertyError> {
    ensure_numeric("abs", &operand)?;
    Ok(map_magnitude(operand, f64::abs))
}

/// Largest integer magnitude not greater than the operand's, preserving
/// the unit.
///
/// # Errors
///
/// Rejects non-numeric operands and unresolved percentages.
pub fn floor(operand: Property) -> Result<Property, PropertyError> {
    rounded("floor", operand, f64::floor)
}

/// Smallest integer magnitude not less than the operand's, preserving
/// the unit.
///
/// # Errors
///
/// Rejects non-numeric operands and unresolved percentages.
pub fn ceiling(operand: Property) -> Result<Property, PropertyError> {
    rounded("ceiling", operand, f64::ceil)
}

/// Nearest integer magnitude, half-way cases rounding up, preserving
/// the unit.
///
/// Half-up means `round(-2.5)` is -2, as `Math.round` had it, not the
/// -3 that round-half-away-from-zero would give.
///
/// # Errors
///
/// Rejects non-numeric operands and unresolved percentages.
pub fn round(operand: Property) -> Result<Property, PropertyError> {
    rounded("round", operand, |n| (n + 0.5).floor())
}

/// The operand of lesser magnitude, returned unchanged.
///
/// # Errors
///
/// Rejects non-numeric operands and operands of different dimensions
/// or units.
pub fn min(lhs: Property, rhs: Property) -> Result<Property, PropertyError> {
    extreme("min", lhs, rhs, true)
}

/// The operand of greater magnitude, returned unchanged.
///
/// # Errors
///
/// Same legality rules as [`min`].
pub fn max(lhs: Property, rhs: Property) -> Result<Property, PropertyError> {
    extreme("max", lhs, rhs, false)
}

fn ensure_numeric(op: &str, operand: &Property) -> Result<(), PropertyError> {
    if operand.as_numeric().is_none() {
        return Err(PropertyError::new(format!("non numeric operand in {op}")));
    }
    Ok(())
}

fn combine(
    op: &str,
    lhs: Property,
    rhs: Property,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Property, PropertyError> {
    ensure_numeric(op, &lhs)?;
    ensure_numeric(op, &rhs)?;
    match (lhs, rhs) {
        (Property::Number(a), Property::Number(b)) => Ok(Property::Number(f(a, b))),
        (
            Property::Length(Length::Fixed {
                magnitude: a,
                unit: ua,
            }),
            Property::Length(Length::Fixed {
                magnitude: b,
                unit: ub,
            }),
        ) => {
            if ua == ub {
                Ok(Property::Length(Length::Fixed {
                    magnitude: f(a, b),
                    unit: ua,
                }))
            } else {
                Err(PropertyError::new(format!(
                    "operands to {op} have different units"
                )))
            }
        }
        (Property::Time { value: a, unit: ua }, Property::Time { value: b, unit: ub }) => {
            if ua == ub {
                Ok(Property::Time {
                    value: f(a, b),
                    unit: ua,
                })
            } else {
                Err(PropertyError::new(format!(
                    "operands to {op} have different units"
                )))
            }
        }
        (
            Property::Frequency { value: a, unit: ua },
            Property::Frequency { value: b, unit: ub },
        ) => {
            if ua == ub {
                Ok(Property::Frequency {
                    value: f(a, b),
                    unit: ua,
                })
            } else {
                Err(PropertyError::new(format!(
                    "operands to {op} have different units"
                )))
            }
        }
        (lhs, rhs) => {
            if matches!(lhs, Property::Length(Length::Percent { .. }))
                || matches!(rhs, Property::Length(Length::Percent { .. }))
            {
                Err(PropertyError::new(format!(
                    "cannot use an unresolved percentage in {op}"
                )))
            } else {
                Err(PropertyError::new(format!(
                    "operands to {op} have different dimensions"
                )))
            }
        }
    }
}

/// Scale a numeric operand by a dimensionless factor, keeping its unit.
/// Non-numeric operands pass through unchanged; callers check first.
fn scaled(operand: Property, factor: f64) -> Property {
    map_magnitude(operand, |n| n * factor)
}

fn divided(operand: Property, divisor: f64) -> Property {
    map_magnitude(operand, |n| n / divisor)
}

fn map_magnitude(operand: Property, f: impl Fn(f64) -> f64) -> Property {
    match operand {
        Property::Number(n) => Property::Number(f(n)),
        Property::Length(Length::Fixed { magnitude, unit }) => Property::Length(Length::Fixed {
            magnitude: f(magnitude),
            unit,
        }),
        Property::Length(Length::Percent { factor, base }) => Property::Length(Length::Percent {
            factor: f(factor),
            base,
        }),
        Property::Time { value, unit } => Property::Time {
            value: f(value),
            unit,
        },
        Property::Frequency { value, unit } => Property::Frequency {
            value: f(value),
            unit,
        },
        other => other,
    }
}

fn rounded(
    op: &str,
    operand: Property,
    f: impl Fn(f64) -> f64,
) -> Result<Property, PropertyError> {
    ensure_numeric(op, &operand)?;
    if matches!(operand, Property::Length(Length::Percent { .. })) {
        return Err(PropertyError::new(format!(
            "cannot use an unresolved percentage in {op}"
        )));
    }
    Ok(map_magnitude(operand, f))
}

fn extreme(
    name: &str,
    lhs: Property,
    rhs: Property,
    want_lesser: bool,
) -> Result<Property, PropertyError> {
    ensure_numeric(&format!("{name}()"), &lhs)?;
    ensure_numeric(&format!("{name}()"), &rhs)?;
    let comparable = match (&lhs, &rhs) {
        (Property::Number(a), Property::Number(b)) => Some((*a, *b)),
        (
            Property::Length(Length::Fixed {
                magnitude: a,
                unit: ua,
            }),
            Property::Length(Length::Fixed {
                magnitude: b,
                unit: ub,
            }),
        ) if ua == ub => Some((*a, *b)),
        (
            Property::Length(Length::Percent { factor: a, .. }),
            Property::Length(Length::Percent { factor: b, .. }),
        ) => Some((*a, *b)),
        (Property::Time { value: a, unit: ua }, Property::Time { value: b, unit: ub })
            if ua == ub =>
        {
            Some((*a, *b))
        }
        (
            Property::Frequency { value: a, unit: ua },
            Property::Frequency { value: b, unit: ub },
        ) if ua == ub => Some((*a, *b)),
        _ => None,
    };
    let Some((a, b)) = comparable else {
        return Err(PropertyError::new(format!(
            "arguments to {name}() must have the same dimension"
        )));
    };
    let keep_lhs = if want_lesser { a <= b } else { a >= b };
    Ok(if keep_lhs { lhs } else { rhs })
}
