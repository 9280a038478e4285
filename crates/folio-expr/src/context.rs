//! The evaluation context collaborator.
//!
//! The parser evaluates eagerly, so everything environment-dependent
//! (the percent base, the current font size, property values on the
//! surrounding tree) is supplied up front through this trait
//! ([XSL 1.1 § 5.10.4 Property Value Functions](https://www.w3.org/TR/xsl11/)).

use std::collections::HashMap;

use folio_datatype::{AbsoluteUnit, Length, PercentBase, Property, PropertyError};

use crate::function::FunctionDef;

/// Environment an expression is evaluated against.
pub trait EvaluationContext {
    /// The declared base for percentages in this property, if any.
    ///
    /// With no base a percentage evaluates to a plain number; a
    /// dimension-0 base resolves it immediately; a length base defers
    /// it as a percent length.
    fn percent_base(&self) -> Option<PercentBase>;

    /// The current font size, a length, used to resolve `em` values at
    /// parse time.
    fn current_font_size(&self) -> Property;

    /// Resolve a property value by name on the current node, used by
    /// the by-name and parent/ancestor lookup functions. Which function
    /// is asking can be read off [`current_function`].
    ///
    /// # Errors
    ///
    /// Returns an error when no value is known for the name.
    ///
    /// [`current_function`]: EvaluationContext::current_function
    fn resolve_property_by_name(&self, name: &str) -> Result<Property, PropertyError>;

    /// The name of the property whose expression is being evaluated,
    /// used to pad the trailing argument of the lookup functions.
    fn current_property_name(&self) -> &str;

    /// Enter a function call: pushed before its arguments are
    /// evaluated.
    fn push_function(&mut self, function: &'static FunctionDef);

    /// Leave a function call: popped unconditionally once argument
    /// evaluation completes or fails.
    fn pop_function(&mut self);

    /// The innermost function whose arguments are being evaluated.
    fn current_function(&self) -> Option<&'static FunctionDef>;
}

/// A map-backed [`EvaluationContext`] with everything declared up
/// front. Suitable for property makers that know their environment
/// before parsing, and for tests.
pub struct StaticContext {
    property_name: String,
    percent_base: Option<PercentBase>,
    font_size: Property,
    properties: HashMap<String, Property>,
    function_stack: Vec<&'static FunctionDef>,
}

impl StaticContext {
    /// The font size assumed when none is declared: 12 points.
    pub const DEFAULT_FONT_SIZE: Property = Property::Length(Length::Fixed {
        magnitude: 12.0,
        unit: AbsoluteUnit::Pt,
    });

    /// Create a context for the named property, with no percent base
    /// and the default font size.
    #[must_use]
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            percent_base: None,
            font_size: Self::DEFAULT_FONT_SIZE,
            properties: HashMap::new(),
            function_stack: Vec::new(),
        }
    }

    /// Declare the percent base.
    #[must_use]
    pub fn with_percent_base(mut self, base: PercentBase) -> Self {
        self.percent_base = Some(base);
        self
    }

    /// Declare the current font size (a length).
    #[must_use]
    pub fn with_font_size(mut self, font_size: Property) -> Self {
        self.font_size = font_size;
        self
    }

    /// Make a property value resolvable by name.
    pub fn insert_property(&mut self, name: impl Into<String>, value: Property) {
        let _ = self.properties.insert(name.into(), value);
    }
}

impl Default for StaticContext {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl EvaluationContext for StaticContext {
    fn percent_base(&self) -> Option<PercentBase> {
        self.percent_base
    }

    fn current_font_size(&self) -> Property {
        self.font_size.clone()
    }

    fn resolve_property_by_name(&self, name: &str) -> Result<Property, PropertyError> {
        self.properties
            .get(name)
            .cloned()
            .ok_or_else(|| PropertyError::new(format!("no property value for {name}")))
    }

    fn current_property_name(&self) -> &str {
        &self.property_name
    }

    fn push_function(&mut self, function: &'static FunctionDef) {
        self.function_stack.push(function);
    }

    fn pop_function(&mut self) {
        let _ = self.function_stack.pop();
    }

    fn current_function(&self) -> Option<&'static FunctionDef> {
        self.function_stack.last().copied()
    }
}
