//! Integration tests for the built-in function library.

use folio_datatype::{AbsoluteUnit, ColorValue, Length, PercentBase, Property, PropertyError};
use folio_expr::{EvaluationContext, FunctionDef, StaticContext, parse};

fn evaluate(input: &str) -> Property {
    let mut ctx = StaticContext::new("test-property");
    parse(input, &mut ctx).expect("expression should evaluate")
}

fn evaluate_err(input: &str) -> String {
    let mut ctx = StaticContext::new("test-property");
    parse(input, &mut ctx)
        .expect_err("expression should fail")
        .to_string()
}

fn pt(magnitude: f64) -> Property {
    Property::Length(Length::Fixed {
        magnitude,
        unit: AbsoluteUnit::Pt,
    })
}

#[test]
fn test_min_max() {
    assert_eq!(evaluate("max(3, 7)"), Property::Number(7.0));
    assert_eq!(evaluate("min(3pt, 7pt)"), pt(3.0));
}

#[test]
fn test_rounding_functions() {
    assert_eq!(evaluate("abs(-4)"), Property::Number(4.0));
    assert_eq!(evaluate("ceiling(2.2)"), Property::Number(3.0));
    assert_eq!(evaluate("floor(2.8)"), Property::Number(2.0));
    assert_eq!(evaluate("round(2.5)"), Property::Number(3.0));
    assert_eq!(evaluate("round(-2.5)"), Property::Number(-2.0));
    assert_eq!(evaluate("round(3.2pt)"), pt(3.0));
}

#[test]
fn test_function_arguments_are_expressions() {
    assert_eq!(evaluate("max(2 + 1, 10 div 5)"), Property::Number(3.0));
}

#[test]
fn test_unknown_function() {
    assert_eq!(evaluate_err("bogus(1)"), "no such function: bogus");
}

#[test]
fn test_arity_mismatch() {
    assert_eq!(
        evaluate_err("max(3)"),
        "expected 2, but got 1 args for function"
    );
    assert_eq!(
        evaluate_err("max(1, 2, 3)"),
        "expected 2, but got 3 args for function"
    );
}

#[test]
fn test_rgb() {
    assert_eq!(
        evaluate("rgb(255, 0, 0)"),
        Property::Color(ColorValue::new(255, 0, 0))
    );
    // Components clamp to the 0-255 range.
    assert_eq!(
        evaluate("rgb(300, -20, 12)"),
        Property::Color(ColorValue::new(255, 0, 12))
    );
    assert_eq!(
        evaluate_err("rgb(solid, 0, 0)"),
        "non numeric operand to rgb()"
    );
}

#[test]
fn test_system_color() {
    assert_eq!(
        evaluate("system-color(teal)"),
        Property::Color(ColorValue::new(0, 128, 128))
    );
    assert_eq!(
        evaluate_err("system-color(chartreuse)"),
        "unknown system color: chartreuse"
    );
}

#[test]
fn test_lookup_function_with_explicit_name() {
    let mut ctx = StaticContext::new("border-color");
    ctx.insert_property("color", Property::Color(ColorValue::BLACK));
    assert_eq!(
        parse("from-parent(color)", &mut ctx),
        Ok(Property::Color(ColorValue::BLACK))
    );
}

#[test]
fn test_lookup_function_pads_the_property_name() {
    // A call one argument short receives the current property's name.
    let mut ctx = StaticContext::new("color");
    ctx.insert_property("color", Property::Color(ColorValue::new(255, 0, 0)));
    assert_eq!(
        parse("inherited-property-value()", &mut ctx),
        Ok(Property::Color(ColorValue::new(255, 0, 0)))
    );
    assert_eq!(
        parse("from-nearest-specified-value()", &mut ctx),
        Ok(Property::Color(ColorValue::new(255, 0, 0)))
    );
}

#[test]
fn test_lookup_of_unknown_property() {
    let err = evaluate_err("from-parent(nonesuch)");
    assert_eq!(err, "no property value for nonesuch");
}

#[test]
fn test_internal_by_name_function_does_not_pad() {
    let mut ctx = StaticContext::new("background-color");
    ctx.insert_property("color", Property::Color(ColorValue::BLACK));
    assert_eq!(
        parse("_property-value(color)", &mut ctx),
        Ok(Property::Color(ColorValue::BLACK))
    );

    let err = parse("_property-value()", &mut ctx).expect_err("no padding here");
    assert_eq!(err.message(), "expected 1, but got 0 args for function");
}

#[test]
fn test_layout_dependent_functions_are_unsupported() {
    assert_eq!(
        evaluate_err("from-table-column()"),
        "from-table-column function is not supported"
    );
    assert_eq!(
        evaluate_err("proportional-column-width(1)"),
        "proportional-column-width function is not supported"
    );
    assert_eq!(
        evaluate_err("label-end()"),
        "label-end function is not supported"
    );
    assert_eq!(
        evaluate_err("body-start()"),
        "body-start function is not supported"
    );
    assert_eq!(
        evaluate_err("merge-property-values()"),
        "merge-property-values function is not supported"
    );
}

/// Context that records function stack traffic, to check that every
/// push is matched by a pop even when an argument fails.
struct CountingContext {
    inner: StaticContext,
    pushes: usize,
    pops: usize,
    max_depth: usize,
    depth: usize,
}

impl CountingContext {
    fn new() -> Self {
        Self {
            inner: StaticContext::new("test-property"),
            pushes: 0,
            pops: 0,
            max_depth: 0,
            depth: 0,
        }
    }
}

impl EvaluationContext for CountingContext {
    fn percent_base(&self) -> Option<PercentBase> {
        self.inner.percent_base()
    }

    fn current_font_size(&self) -> Property {
        self.inner.current_font_size()
    }

    fn resolve_property_by_name(&self, name: &str) -> Result<Property, PropertyError> {
        self.inner.resolve_property_by_name(name)
    }

    fn current_property_name(&self) -> &str {
        self.inner.current_property_name()
    }

    fn push_function(&mut self, function: &'static FunctionDef) {
        self.pushes += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.inner.push_function(function);
    }

    fn pop_function(&mut self) {
        self.pops += 1;
        self.depth -= 1;
        self.inner.pop_function();
    }

    fn current_function(&self) -> Option<&'static FunctionDef> {
        self.inner.current_function()
    }
}

#[test]
fn test_function_stack_nests_during_arguments() {
    let mut ctx = CountingContext::new();
    assert_eq!(parse("max(3, min(4, 5))", &mut ctx), Ok(Property::Number(4.0)));
    assert_eq!(ctx.pushes, 2);
    assert_eq!(ctx.pops, 2);
    assert_eq!(ctx.max_depth, 2);
}

#[test]
fn test_function_stack_is_popped_on_error() {
    let mut ctx = CountingContext::new();
    let err = parse("max(3, bogus(1))", &mut ctx).expect_err("inner call is unknown");
    assert_eq!(err.message(), "no such function: bogus");
    assert_eq!(ctx.pushes, ctx.pops);
    assert_eq!(ctx.depth, 0);
}
