//! Integration tests for the expression parser/evaluator.

use folio_datatype::{AbsoluteUnit, ColorValue, Dimension, Length, PercentBase, Property};
use folio_expr::{StaticContext, parse};

/// Helper to evaluate an expression under a bare context
fn evaluate(input: &str) -> Property {
    let mut ctx = StaticContext::new("test-property");
    parse(input, &mut ctx).expect("expression should evaluate")
}

/// Helper to evaluate and return the diagnostic message
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
fn test_length_literal() {
    assert_eq!(evaluate("12pt"), pt(12.0));
}

#[test]
fn test_addition() {
    assert_eq!(evaluate("3 + 4"), Property::Number(7.0));
    assert_eq!(evaluate("10pt + 5pt"), pt(15.0));
}

#[test]
fn test_addition_dimension_mismatch() {
    assert_eq!(
        evaluate_err("10pt + 5"),
        "operands to addition have different dimensions"
    );
}

#[test]
fn test_addition_non_numeric_operand() {
    assert_eq!(
        evaluate_err("solid + 5"),
        "non numeric operand in addition"
    );
}

#[test]
fn test_precedence() {
    assert_eq!(evaluate("2 + 3 * 4"), Property::Number(14.0));
    assert_eq!(evaluate("(2 + 3) * 4"), Property::Number(20.0));
}

#[test]
fn test_div_and_mod_keywords() {
    assert_eq!(evaluate("8 div 2"), Property::Number(4.0));
    assert_eq!(evaluate("7 mod 3"), Property::Number(1.0));
}

#[test]
fn test_unary_minus() {
    assert_eq!(evaluate("- -5"), Property::Number(5.0));
    assert_eq!(evaluate("-3 * -2"), Property::Number(6.0));
    assert_eq!(evaluate("-4pt"), pt(-4.0));
}

#[test]
fn test_percentage_with_scalar_base() {
    let mut ctx = StaticContext::new("line-height").with_percent_base(PercentBase {
        dimension: Dimension::Scalar,
        value: 200.0,
    });
    assert_eq!(parse("50%", &mut ctx), Ok(Property::Number(100.0)));
}

#[test]
fn test_percentage_without_base_is_a_fraction() {
    assert_eq!(evaluate("50%"), Property::Number(0.5));
}

#[test]
fn test_percentage_with_length_base_is_deferred() {
    let base = PercentBase {
        dimension: Dimension::Length,
        value: 400.0,
    };
    let mut ctx = StaticContext::new("width").with_percent_base(base);
    assert_eq!(
        parse("50%", &mut ctx),
        Ok(Property::Length(Length::Percent { factor: 0.5, base }))
    );
}

#[test]
fn test_percentage_with_unsupported_base_dimension() {
    let mut ctx = StaticContext::new("azimuth").with_percent_base(PercentBase {
        dimension: Dimension::Angle,
        value: 90.0,
    });
    let err = parse("50%", &mut ctx).expect_err("angle base is not supported");
    assert_eq!(
        err.message(),
        "percentage base has unsupported dimension: angle"
    );
}

#[test]
fn test_em_resolves_against_font_size() {
    // The default font size is 12pt.
    assert_eq!(evaluate("1.5em"), pt(18.0));

    let mut ctx = StaticContext::new("text-indent").with_font_size(pt(10.0));
    assert_eq!(parse("2em", &mut ctx), Ok(pt(20.0)));
}

#[test]
fn test_comma_separated_list() {
    assert_eq!(
        evaluate("Arial, sans-serif"),
        Property::List(vec![
            Property::Identifier("Arial".to_string()),
            Property::Identifier("sans-serif".to_string()),
        ])
    );
}

#[test]
fn test_space_separated_list() {
    assert_eq!(evaluate("12pt 6pt"), Property::List(vec![pt(12.0), pt(6.0)]));
}

#[test]
fn test_single_value_is_not_wrapped() {
    assert_eq!(evaluate("solid"), Property::Identifier("solid".to_string()));
}

#[test]
fn test_empty_input_is_an_empty_string() {
    assert_eq!(evaluate(""), Property::String(String::new()));
    assert_eq!(evaluate("   "), Property::String(String::new()));
}

#[test]
fn test_keywords_evaluate_to_identifiers() {
    assert_eq!(evaluate("inherit"), Property::Identifier("inherit".to_string()));
    assert_eq!(evaluate("auto"), Property::Identifier("auto".to_string()));
    assert_eq!(evaluate("none"), Property::Identifier("none".to_string()));
}

#[test]
fn test_simple_values() {
    assert_eq!(evaluate("\"hello\""), Property::String("hello".to_string()));
    assert_eq!(evaluate("true"), Property::Boolean(true));
    assert_eq!(
        evaluate("#ff0000"),
        Property::Color(ColorValue::new(255, 0, 0))
    );
    assert_eq!(evaluate("#fff"), Property::Color(ColorValue::WHITE));
    assert_eq!(
        evaluate("url(http://example.com/a.png)"),
        Property::Uri("http://example.com/a.png".to_string())
    );
    assert_eq!(
        evaluate("content-type:image/png"),
        Property::MimeType("image/png".to_string())
    );
}

#[test]
fn test_unclosed_group() {
    assert_eq!(evaluate_err("(3"), "expected )");
    assert_eq!(evaluate_err("max(3, 7"), "expected )");
}

#[test]
fn test_syntax_errors() {
    assert_eq!(evaluate_err(")"), "syntax error");
    assert_eq!(evaluate_err("3 + *"), "syntax error");
    // A trailing comma promises another value that never comes.
    assert_eq!(evaluate_err("solid,"), "syntax error");
}

#[test]
fn test_lexer_errors_surface_through_parse() {
    assert_eq!(evaluate_err("\"abc"), "missing quote");
    assert_eq!(evaluate_err("#ff"), "color not 3 or 6 hex digits");
}

#[test]
fn test_canonical_rendering_round_trips() {
    for input in ["7", "3.5", "12pt", "1.25in", "-4"] {
        let value = evaluate(input);
        assert_eq!(evaluate(&value.to_string()), value, "for input {input}");
    }
}

#[test]
fn test_list_rendering() {
    assert_eq!(evaluate("Arial, sans-serif").to_string(), "Arial, sans-serif");
}
