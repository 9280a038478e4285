//! The expression parser/evaluator.

use folio_datatype::{
    ColorValue, Dimension, Length, Property, PropertyError, Unit, numeric,
};

use crate::context::EvaluationContext;
use crate::function::FunctionRegistry;
use crate::tokenizer::{ExprToken, ExpressionTokenizer};

/// Parse and evaluate a property value expression
/// ([XSL 1.1 § 5.9 Expressions](https://www.w3.org/TR/xsl11/)).
///
/// The grammar, evaluated eagerly in a single pass:
///
/// ```text
/// Value := Add (Add)*           commas between values are skipped
/// Add   := Mul (('+'|'-') Mul)*
/// Mul   := Unary (('*'|div|mod) Unary)*
/// Unary := '-' Unary | Primary
/// ```
///
/// Two or more top-level values yield a flat [`Property::List`]; a
/// single value is returned bare; empty input yields an empty string
/// value.
///
/// # Errors
///
/// Returns the first tokenizer or evaluation error encountered;
/// `syntax error` where no primary can start and `expected )` for an
/// unclosed group or call.
pub fn parse(
    expression: &str,
    context: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    ExpressionParser::new(expression, context)?.parse_value()
}

/// Single-pass evaluator with one token of lookahead, pulling tokens
/// from its own tokenizer.
pub struct ExpressionParser<'ctx> {
    tokenizer: ExpressionTokenizer,
    /// The lookahead token.
    current: ExprToken,
    context: &'ctx mut dyn EvaluationContext,
}

impl<'ctx> ExpressionParser<'ctx> {
    /// Create a parser over an expression, priming the lookahead.
    ///
    /// # Errors
    ///
    /// Returns an error when the first token is malformed.
    pub fn new(
        expression: &str,
        context: &'ctx mut dyn EvaluationContext,
    ) -> Result<Self, PropertyError> {
        let mut tokenizer = ExpressionTokenizer::new(expression);
        let current = tokenizer.next_token()?;
        Ok(Self {
            tokenizer,
            current,
            context,
        })
    }

    /// Evaluate the whole expression to a single property value.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse_value(mut self) -> Result<Property, PropertyError> {
        if self.current.is_eof() {
            return Ok(Property::String(String::new()));
        }
        let first = self.parse_additive()?;
        if self.current.is_eof() {
            return Ok(first);
        }
        let mut values = vec![first];
        while !self.current.is_eof() {
            values.push(self.parse_additive()?);
        }
        Ok(Property::List(values))
    }

    fn parse_additive(&mut self) -> Result<Property, PropertyError> {
        let mut value = self.parse_multiplicative()?;
        loop {
            match self.current {
                ExprToken::Plus => {
                    self.advance()?;
                    let rhs = self.parse_multiplicative()?;
                    value = numeric::add(value, rhs)?;
                }
                ExprToken::Minus => {
                    self.advance()?;
                    let rhs = self.parse_multiplicative()?;
                    value = numeric::subtract(value, rhs)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Property, PropertyError> {
        let mut value = self.parse_unary()?;
        loop {
            match self.current {
                ExprToken::Multiply => {
                    self.advance()?;
                    let rhs = self.parse_unary()?;
                    value = numeric::multiply(value, rhs)?;
                }
                ExprToken::Div => {
                    self.advance()?;
                    let rhs = self.parse_unary()?;
                    value = numeric::divide(value, rhs)?;
                }
                ExprToken::Mod => {
                    self.advance()?;
                    let rhs = self.parse_unary()?;
                    value = numeric::modulo(value, rhs)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_unary(&mut self) -> Result<Property, PropertyError> {
        if matches!(self.current, ExprToken::Minus) {
            self.advance()?;
            let operand = self.parse_unary()?;
            return numeric::negate(operand);
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Property, PropertyError> {
        let value = match &self.current {
            #[allow(clippy::cast_precision_loss)]
            ExprToken::Integer(n) => Property::Number(*n as f64),
            ExprToken::Float(n) => Property::Number(*n),
            ExprToken::Percentage(n) => self.percentage_value(*n / 100.0)?,
            ExprToken::Dimension { value, unit } => self.dimension_value(*value, *unit)?,
            ExprToken::Color(spec) => Property::Color(ColorValue::from_hex(spec)?),
            ExprToken::Boolean(b) => Property::Boolean(*b),
            ExprToken::Literal(text) => Property::String(text.clone()),
            ExprToken::Ident(name) => Property::Identifier(name.clone()),
            // The keywords evaluate to themselves; their meaning is
            // property-specific and resolved by the consumer.
            ExprToken::Inherit => Property::Identifier("inherit".to_string()),
            ExprToken::Auto => Property::Identifier("auto".to_string()),
            ExprToken::None => Property::Identifier("none".to_string()),
            ExprToken::Uri(uri) => Property::Uri(uri.clone()),
            ExprToken::MimeType(mime) => Property::MimeType(mime.clone()),
            // A comma where a value should start separates top-level
            // values (or call arguments) and is silently skipped.
            ExprToken::Comma => {
                self.advance()?;
                return self.parse_primary();
            }
            ExprToken::LeftParen => {
                self.advance()?;
                let value = self.parse_additive()?;
                self.expect_right_paren()?;
                return Ok(value);
            }
            ExprToken::Function(name) => {
                let name = name.clone();
                return self.function_call(&name);
            }
            _ => return Err(PropertyError::new("syntax error")),
        };
        self.advance()?;
        Ok(value)
    }

    /// Dispatch a function call: look up the descriptor, evaluate the
    /// arguments with the descriptor pushed on the context's function
    /// stack, pad and check arity, then run the body.
    fn function_call(&mut self, name: &str) -> Result<Property, PropertyError> {
        let Some(def) = FunctionRegistry::global().lookup(name) else {
            return Err(PropertyError::new(format!("no such function: {name}")));
        };
        self.advance()?; // onto the first argument

        // The pop must happen even when an argument fails.
        self.context.push_function(def);
        let parsed = self.parse_arguments();
        self.context.pop_function();
        let mut args = parsed?;

        if def.pads_property_name && args.len() + 1 == def.arity {
            args.push(Property::Identifier(
                self.context.current_property_name().to_string(),
            ));
        }
        if args.len() != def.arity {
            return Err(PropertyError::new(format!(
                "expected {}, but got {} args for function",
                def.arity,
                args.len()
            )));
        }
        (def.eval)(&args, &mut *self.context)
    }

    /// Evaluate a comma-separated argument list up to the closing
    /// paren. Arity is not checked here.
    fn parse_arguments(&mut self) -> Result<Vec<Property>, PropertyError> {
        let mut args = Vec::new();
        if matches!(self.current, ExprToken::RightParen) {
            self.advance()?;
            return Ok(args);
        }
        loop {
            args.push(self.parse_additive()?);
            if !matches!(self.current, ExprToken::Comma) {
                break;
            }
            self.advance()?;
        }
        self.expect_right_paren()?;
        Ok(args)
    }

    /// Resolve a percentage factor against the declared percent base.
    fn percentage_value(&self, factor: f64) -> Result<Property, PropertyError> {
        match self.context.percent_base() {
            None => Ok(Property::Number(factor)),
            Some(base) => match base.dimension {
                Dimension::Scalar => Ok(Property::Number(factor * base.value)),
                Dimension::Length => Ok(Property::Length(Length::Percent { factor, base })),
                other => Err(PropertyError::new(format!(
                    "percentage base has unsupported dimension: {other}"
                ))),
            },
        }
    }

    /// Turn a number-with-unit into a value; `em` resolves against the
    /// current font size immediately.
    fn dimension_value(&self, value: f64, unit: Unit) -> Result<Property, PropertyError> {
        match unit {
            Unit::Em => numeric::multiply(Property::Number(value), self.context.current_font_size()),
            Unit::Absolute(unit) => Ok(Property::Length(Length::Fixed {
                magnitude: value,
                unit,
            })),
            Unit::Time(unit) => Ok(Property::Time { value, unit }),
            Unit::Frequency(unit) => Ok(Property::Frequency { value, unit }),
        }
    }

    fn expect_right_paren(&mut self) -> Result<(), PropertyError> {
        if !matches!(self.current, ExprToken::RightParen) {
            return Err(PropertyError::new("expected )"));
        }
        self.advance()
    }

    fn advance(&mut self) -> Result<(), PropertyError> {
        self.current = self.tokenizer.next_token()?;
        Ok(())
    }
}
