//! Token types for property value expressions
//! ([XSL 1.1 § 5.9 Expressions](https://www.w3.org/TR/xsl11/)).
//!
//! The `div` and `mod` operators are spelled as names and are
//! re-classified from identifiers during the name scan, as are the
//! `inherit`/`auto`/`none` keywords and the boolean literals.

use core::fmt;

use folio_datatype::Unit;

/// A single token of a property value expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprToken {
    /// End of input.
    Eof,

    /// An unquoted name whose meaning is property-specific, e.g.
    /// `solid` or `sans-serif`.
    Ident(String),

    /// A name immediately (or whitespace-separated) followed by `(`,
    /// with the paren consumed.
    Function(String),

    /// A quoted string literal, quotes stripped. No escape sequences
    /// exist; a literal cannot contain its own quote character.
    Literal(String),

    /// An integer literal.
    Integer(i64),

    /// A float literal, including the `.5` and `5.` forms.
    Float(f64),

    /// A number immediately followed by `%`. Carries the literal value;
    /// division by 100 happens at evaluation.
    Percentage(f64),

    /// A number immediately followed by a unit name.
    Dimension {
        /// The literal numeric value.
        value: f64,
        /// The recognized unit.
        unit: Unit,
    },

    /// A hex color spec including the leading `#`, validated to hold
    /// 3 or 6 hex digits.
    Color(String),

    /// A `true` or `false` literal.
    Boolean(bool),

    /// The body of a `url(...)` form, trimmed, with one surrounding
    /// quote pair stripped.
    Uri(String),

    /// A `content-type:name/name` mime type, the part after the colon.
    MimeType(String),

    /// `,`
    Comma,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// The `div` operator name.
    Div,
    /// The `mod` operator name.
    Mod,
    /// `/`
    Slash,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,

    /// The `inherit` keyword.
    Inherit,
    /// The `auto` keyword.
    Auto,
    /// The `none` keyword.
    None,
}

impl ExprToken {
    /// Create an identifier token.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// Create a function token.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(name.into())
    }

    /// Create a literal string token.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Create a dimension token.
    #[must_use]
    pub const fn dimension(value: f64, unit: Unit) -> Self {
        Self::Dimension { value, unit }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

impl fmt::Display for ExprToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => write!(f, "<eof>"),
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::Literal(v) => write!(f, "<literal:\"{v}\">"),
            Self::Integer(v) => write!(f, "<integer:{v}>"),
            Self::Float(v) => write!(f, "<float:{v}>"),
            Self::Percentage(v) => write!(f, "<percentage:{v}%>"),
            Self::Dimension { value, unit } => write!(f, "<dimension:{value}{unit}>"),
            Self::Color(v) => write!(f, "<color:{v}>"),
            Self::Boolean(v) => write!(f, "<boolean:{v}>"),
            Self::Uri(v) => write!(f, "<uri:{v}>"),
            Self::MimeType(v) => write!(f, "<mime-type:{v}>"),
            Self::Comma => write!(f, "<comma>"),
            Self::Plus => write!(f, "<plus>"),
            Self::Minus => write!(f, "<minus>"),
            Self::Multiply => write!(f, "<multiply>"),
            Self::Div => write!(f, "<div>"),
            Self::Mod => write!(f, "<mod>"),
            Self::Slash => write!(f, "<slash>"),
            Self::LeftParen => write!(f, "<(>"),
            Self::RightParen => write!(f, "<)>"),
            Self::Inherit => write!(f, "<inherit>"),
            Self::Auto => write!(f, "<auto>"),
            Self::None => write!(f, "<none>"),
        }
    }
}
