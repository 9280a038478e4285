//! The pull-based expression tokenizer.

use folio_datatype::{PropertyError, Unit};

use super::token::ExprToken;

/// Tokenizer for property value expressions
/// ([XSL 1.1 § 5.9 Expressions](https://www.w3.org/TR/xsl11/)).
///
/// The parser pulls tokens on demand with [`next_token`]; after end of
/// input it keeps returning [`ExprToken::Eof`].
///
/// [`next_token`]: ExpressionTokenizer::next_token
pub struct ExpressionTokenizer {
    /// The input expression being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
}

impl ExpressionTokenizer {
    /// Create a tokenizer over an expression.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Scan and return the next token.
    ///
    /// # Errors
    ///
    /// Returns an error for an unterminated string (`missing quote`),
    /// a malformed color spec, an unknown unit name after a number
    /// (`NCName following a number is not a UnitName`), a malformed
    /// `url(...)` or `content-type:` form, or any character outside
    /// the token vocabulary (`illegal character 'c'`).
    pub fn next_token(&mut self) -> Result<ExprToken, PropertyError> {
        loop {
            let Some(c) = self.consume() else {
                return Ok(ExprToken::Eof);
            };

            return match c {
                ' ' | '\t' | '\r' | '\n' => continue,
                ',' => Ok(ExprToken::Comma),
                '+' => Ok(ExprToken::Plus),
                // Always an operator; signs are never part of a number.
                '-' => Ok(ExprToken::Minus),
                '(' => Ok(ExprToken::LeftParen),
                ')' => Ok(ExprToken::RightParen),
                '*' => Ok(ExprToken::Multiply),
                '/' => Ok(ExprToken::Slash),
                '"' | '\'' => self.consume_literal(c),
                '0'..='9' => {
                    self.reconsume();
                    self.consume_numeric(false)
                }
                '.' => {
                    if self.peek().is_some_and(|next| next.is_ascii_digit()) {
                        self.reconsume();
                        self.consume_numeric(true)
                    } else {
                        Err(PropertyError::new("illegal character '.'"))
                    }
                }
                '#' => self.consume_color(),
                c if is_name_start_char(c) => {
                    self.reconsume();
                    self.consume_name_token()
                }
                other => Err(PropertyError::new(format!("illegal character '{other}'"))),
            };
        }
    }

    /// Scan a quoted literal. There are no escape sequences; the
    /// literal runs to the next occurrence of the opening quote.
    fn consume_literal(&mut self, quote: char) -> Result<ExprToken, PropertyError> {
        let start = self.position;
        while let Some(c) = self.consume() {
            if c == quote {
                return Ok(ExprToken::Literal(self.slice(start, self.position - 1)));
            }
        }
        Err(PropertyError::new("missing quote"))
    }

    /// Scan a number and classify it as integer, float, percentage, or
    /// dimension depending on what immediately follows the digits.
    fn consume_numeric(&mut self, leading_dot: bool) -> Result<ExprToken, PropertyError> {
        let start = self.position;
        let mut is_float = leading_dot;
        if leading_dot {
            self.advance(); // the '.'
            self.consume_digits();
        } else {
            self.consume_digits();
            if self.peek() == Some('.') {
                is_float = true;
                self.advance();
                self.consume_digits();
            }
        }
        let number_end = self.position;

        if self.peek() == Some('%') {
            self.advance();
            return Ok(ExprToken::Percentage(self.parse_float(start, number_end)?));
        }

        let unit_name = self.consume_name();
        if !unit_name.is_empty() {
            let Some(unit) = Unit::from_name(&unit_name) else {
                return Err(PropertyError::new(
                    "NCName following a number is not a UnitName",
                ));
            };
            return Ok(ExprToken::Dimension {
                value: self.parse_float(start, number_end)?,
                unit,
            });
        }

        if is_float {
            Ok(ExprToken::Float(self.parse_float(start, number_end)?))
        } else {
            let text = self.slice(start, number_end);
            text.parse::<i64>()
                .map(ExprToken::Integer)
                .map_err(|_| PropertyError::new(format!("number out of range: {text}")))
        }
    }

    /// Scan the hex digits of a color spec; the `#` is already
    /// consumed. Only the 3- and 6-digit forms are colors.
    fn consume_color(&mut self) -> Result<ExprToken, PropertyError> {
        let start = self.position - 1; // include the '#'
        let digits_start = self.position;
        while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.advance();
        }
        match self.position - digits_start {
            0 => Err(PropertyError::new("illegal character '#'")),
            3 | 6 => Ok(ExprToken::Color(self.slice(start, self.position))),
            _ => Err(PropertyError::new("color not 3 or 6 hex digits")),
        }
    }

    /// Scan a name and re-classify reserved words, `url(`,
    /// `content-type:`, `namespace-prefix:`, and function calls.
    fn consume_name_token(&mut self) -> Result<ExprToken, PropertyError> {
        let name = self.consume_name();
        match name.as_str() {
            "mod" => Ok(ExprToken::Mod),
            "div" => Ok(ExprToken::Div),
            "inherit" => Ok(ExprToken::Inherit),
            "auto" => Ok(ExprToken::Auto),
            "none" => Ok(ExprToken::None),
            "true" => Ok(ExprToken::Boolean(true)),
            "false" => Ok(ExprToken::Boolean(false)),
            // The paren must follow immediately; `url (` is an
            // ordinary function-style name.
            "url" if self.peek() == Some('(') => self.consume_uri(),
            "content-type" if self.peek() == Some(':') => {
                self.advance();
                self.consume_mime_type()
            }
            // The prefix after the colon may be empty.
            "namespace-prefix" if self.peek() == Some(':') => {
                self.advance();
                Ok(ExprToken::Ident(self.consume_name()))
            }
            _ => {
                if self.following_paren() {
                    Ok(ExprToken::Function(name))
                } else {
                    Ok(ExprToken::Ident(name))
                }
            }
        }
    }

    /// Scan the body of `url(...)`. The URL is assumed to be the sole
    /// remaining content: everything up to a trailing `)` is captured
    /// and the tokenizer ends up at end of input.
    fn consume_uri(&mut self) -> Result<ExprToken, PropertyError> {
        self.advance(); // the '('
        let rest = self.slice(self.position, self.input.len());
        self.position = self.input.len();

        let trimmed = rest.trim();
        let Some(body) = trimmed.strip_suffix(')') else {
            return Err(PropertyError::new(format!(
                "Invalid url expression: url({rest}"
            )));
        };

        let mut body = body.trim();
        if body.len() >= 2 {
            let first = body.chars().next();
            let last = body.chars().last();
            if (first == Some('"') && last == Some('"'))
                || (first == Some('\'') && last == Some('\''))
            {
                body = &body[1..body.len() - 1];
            }
        }
        Ok(ExprToken::Uri(body.trim().to_string()))
    }

    /// Scan the `name/name` part of a `content-type:` form; the colon
    /// is already consumed.
    fn consume_mime_type(&mut self) -> Result<ExprToken, PropertyError> {
        let start = self.position;
        let primary = self.consume_name();
        if primary.is_empty() || self.peek() != Some('/') {
            return Err(PropertyError::new(format!(
                "Mime type expected; found:{}",
                self.slice(start, self.input.len())
            )));
        }
        self.advance(); // the '/'
        let subtype = self.consume_name();
        if subtype.is_empty() {
            return Err(PropertyError::new(format!(
                "Mime type expected; found:{}",
                self.slice(start, self.input.len())
            )));
        }
        Ok(ExprToken::MimeType(self.slice(start, self.position)))
    }

    /// Check for a `(` after optional whitespace. On success the paren
    /// (and the whitespace) is consumed; on failure nothing is.
    fn following_paren(&mut self) -> bool {
        let mut pos = self.position;
        while let Some(&c) = self.input.get(pos) {
            match c {
                '(' => {
                    self.position = pos + 1;
                    return true;
                }
                ' ' | '\t' | '\r' | '\n' => pos += 1,
                _ => return false,
            }
        }
        false
    }

    /// Scan a name run. Returns the empty string when the next
    /// character cannot start a name.
    fn consume_name(&mut self) -> String {
        let start = self.position;
        if self.peek().is_some_and(is_name_start_char) {
            self.advance();
            while self.peek().is_some_and(is_name_char) {
                self.advance();
            }
        }
        self.slice(start, self.position)
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn parse_float(&self, start: usize, end: usize) -> Result<f64, PropertyError> {
        let text = self.slice(start, end);
        text.parse::<f64>()
            .map_err(|_| PropertyError::new(format!("invalid number: {text}")))
    }

    /// Consume and return the next character, if any.
    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    /// Push the last consumed character back.
    fn reconsume(&mut self) {
        self.position -= 1;
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Look at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().collect()
    }
}

/// A name may start with a letter, underscore, or any character
/// outside ASCII.
const fn is_name_start_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || (c as u32) >= 0x80
}

/// Name continuation additionally allows digits, `.`, and `-`.
const fn is_name_char(c: char) -> bool {
    is_name_start_char(c) || c.is_ascii_digit() || c == '.' || c == '-'
}
