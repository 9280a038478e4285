//! The built-in function registry
//! ([XSL 1.1 § 5.10 Core Function Library](https://www.w3.org/TR/xsl11/)).
//!
//! The registry is built once and never changes; per-evaluation state
//! (the function call stack) lives on the evaluation context instead.
//! The parser checks arity and applies property-name padding before a
//! body runs, so bodies may index their argument slice directly.

use std::collections::HashMap;
use std::sync::LazyLock;

use folio_datatype::{ColorValue, Property, PropertyError, numeric};

use crate::context::EvaluationContext;

/// Signature of a built-in function body. Arguments arrive already
/// evaluated and arity-checked.
pub type FunctionEval =
    fn(&[Property], &mut dyn EvaluationContext) -> Result<Property, PropertyError>;

/// A built-in function descriptor.
#[derive(Debug)]
pub struct FunctionDef {
    /// The name the function is called by.
    pub name: &'static str,
    /// The exact number of arguments the body receives.
    pub arity: usize,
    /// Whether a call one argument short is padded with the name of
    /// the property being evaluated, as the property lookup functions
    /// are ([XSL 1.1 § 5.10.4 Property Value
    /// Functions](https://www.w3.org/TR/xsl11/)).
    pub pads_property_name: bool,
    /// The function body.
    pub eval: FunctionEval,
}

static REGISTRY: LazyLock<FunctionRegistry> = LazyLock::new(FunctionRegistry::build);

/// The immutable table of built-in functions, keyed by name.
pub struct FunctionRegistry {
    table: HashMap<&'static str, FunctionDef>,
}

impl FunctionRegistry {
    /// The process-wide registry, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Look up a function by name.
    #[must_use]
    pub fn lookup(&'static self, name: &str) -> Option<&'static FunctionDef> {
        self.table.get(name)
    }

    fn build() -> Self {
        let defs = [
            FunctionDef {
                name: "ceiling",
                arity: 1,
                pads_property_name: false,
                eval: eval_ceiling,
            },
            FunctionDef {
                name: "floor",
                arity: 1,
                pads_property_name: false,
                eval: eval_floor,
            },
            FunctionDef {
                name: "round",
                arity: 1,
                pads_property_name: false,
                eval: eval_round,
            },
            FunctionDef {
                name: "abs",
                arity: 1,
                pads_property_name: false,
                eval: eval_abs,
            },
            FunctionDef {
                name: "min",
                arity: 2,
                pads_property_name: false,
                eval: eval_min,
            },
            FunctionDef {
                name: "max",
                arity: 2,
                pads_property_name: false,
                eval: eval_max,
            },
            FunctionDef {
                name: "rgb",
                arity: 3,
                pads_property_name: false,
                eval: eval_rgb,
            },
            FunctionDef {
                name: "system-color",
                arity: 1,
                pads_property_name: false,
                eval: eval_system_color,
            },
            FunctionDef {
                name: "inherited-property-value",
                arity: 1,
                pads_property_name: true,
                eval: eval_resolve_by_name,
            },
            FunctionDef {
                name: "from-parent",
                arity: 1,
                pads_property_name: true,
                eval: eval_resolve_by_name,
            },
            FunctionDef {
                name: "from-nearest-specified-value",
                arity: 1,
                pads_property_name: true,
                eval: eval_resolve_by_name,
            },
            FunctionDef {
                name: "from-table-column",
                arity: 1,
                pads_property_name: true,
                eval: eval_from_table_column,
            },
            FunctionDef {
                name: "merge-property-values",
                arity: 1,
                pads_property_name: true,
                eval: eval_merge_property_values,
            },
            FunctionDef {
                name: "proportional-column-width",
                arity: 1,
                pads_property_name: false,
                eval: eval_proportional_column_width,
            },
            FunctionDef {
                name: "label-end",
                arity: 0,
                pads_property_name: false,
                eval: eval_label_end,
            },
            FunctionDef {
                name: "body-start",
                arity: 0,
                pads_property_name: false,
                eval: eval_body_start,
            },
            // Internal: fetches a property value by name on the current
            // node, used by generated default-value expressions.
            FunctionDef {
                name: "_property-value",
                arity: 1,
                pads_property_name: false,
                eval: eval_resolve_by_name,
            },
        ];

        let mut table = HashMap::new();
        for def in defs {
            let _ = table.insert(def.name, def);
        }
        Self { table }
    }
}

fn eval_ceiling(
    args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    numeric::ceiling(args[0].clone())
}

fn eval_floor(
    args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    numeric::floor(args[0].clone())
}

fn eval_round(
    args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    numeric::round(args[0].clone())
}

fn eval_abs(
    args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    numeric::abs(args[0].clone())
}

fn eval_min(
    args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    numeric::min(args[0].clone(), args[1].clone())
}

fn eval_max(
    args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    numeric::max(args[0].clone(), args[1].clone())
}

/// Components are on the 0-255 scale and clamped into range.
fn eval_rgb(
    args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    let component = |arg: &Property| {
        arg.as_number()
            .ok_or_else(|| PropertyError::new("non numeric operand to rgb()"))
    };
    Ok(Property::Color(ColorValue::from_components(
        component(&args[0])?,
        component(&args[1])?,
        component(&args[2])?,
    )))
}

fn eval_system_color(
    args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    let name = args[0]
        .as_name()
        .ok_or_else(|| PropertyError::new("system-color() expects a color name"))?;
    ColorValue::from_named(name)
        .map(Property::Color)
        .ok_or_else(|| PropertyError::new(format!("unknown system color: {name}")))
}

/// Body shared by the lookup functions; the context can tell callers
/// apart through its function stack.
fn eval_resolve_by_name(
    args: &[Property],
    ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    let name = args[0]
        .as_name()
        .ok_or_else(|| PropertyError::new("expected a property name argument"))?;
    ctx.resolve_property_by_name(name)
}

fn eval_from_table_column(
    _args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    Err(unsupported("from-table-column"))
}

fn eval_merge_property_values(
    _args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    Err(unsupported("merge-property-values"))
}

fn eval_proportional_column_width(
    _args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    Err(unsupported("proportional-column-width"))
}

fn eval_label_end(
    _args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    Err(unsupported("label-end"))
}

fn eval_body_start(
    _args: &[Property],
    _ctx: &mut dyn EvaluationContext,
) -> Result<Property, PropertyError> {
    Err(unsupported("body-start"))
}

/// The layout-dependent functions parse and dispatch, but their values
/// depend on machinery outside this crate.
fn unsupported(name: &str) -> PropertyError {
    PropertyError::new(format!("{name} function is not supported"))
}
