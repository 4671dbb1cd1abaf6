//! Type inference
//!
//! Derives a Java static type plus a human-readable justification for a
//! Python expression. Purely structural: each expression is classified on
//! its own shape and literal value, with no symbol table and no flow
//! analysis. Unrecognized shapes fall back to `Object`.

use rustpython_parser::ast;

use crate::exprs::format_float;
use crate::types::JavaType;

/// An inferred Java type with the reasoning behind it
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    pub ty: JavaType,
    pub reason: String,
}

impl Inference {
    fn new(ty: JavaType, reason: impl Into<String>) -> Self {
        Self {
            ty,
            reason: reason.into(),
        }
    }
}

/// Infer the Java type of a Python expression. Total; never fails.
pub fn infer_type(expr: &ast::Expr) -> Inference {
    match expr {
        ast::Expr::Constant(constant) => infer_constant(&constant.value),
        // The parser wraps negative literals in a unary minus; fold it so
        // the int/long boundary holds on both signs.
        ast::Expr::UnaryOp(unary) if matches!(unary.op, ast::UnaryOp::USub) => {
            if let ast::Expr::Constant(constant) = unary.operand.as_ref() {
                match &constant.value {
                    ast::Constant::Int(value) => classify_int(&format!("-{value}")),
                    ast::Constant::Float(value) => Inference::new(
                        JavaType::Double,
                        format!("Float literal `-{}` → `double`", format_float(*value)),
                    ),
                    _ => fallback(),
                }
            } else {
                fallback()
            }
        }
        ast::Expr::List(_) => Inference::new(JavaType::List, "List literal → `ArrayList<Object>`"),
        ast::Expr::Dict(_) => Inference::new(
            JavaType::Map,
            "Dictionary literal → `HashMap<Object, Object>`",
        ),
        ast::Expr::BinOp(_) => Inference::new(
            JavaType::Object,
            "Binary operation result → `Object` (type depends on operands)",
        ),
        _ => fallback(),
    }
}

fn infer_constant(value: &ast::Constant) -> Inference {
    match value {
        ast::Constant::Bool(b) => Inference::new(
            JavaType::Boolean,
            format!(
                "Boolean literal `{}` → `boolean`",
                if *b { "True" } else { "False" }
            ),
        ),
        ast::Constant::Int(value) => classify_int(&value.to_string()),
        ast::Constant::Float(value) => Inference::new(
            JavaType::Double,
            format!("Float literal `{}` → `double`", format_float(*value)),
        ),
        ast::Constant::Str(_) => Inference::new(JavaType::Str, "String literal → `String`"),
        ast::Constant::None => Inference::new(
            JavaType::Object,
            "`None` → `null`, using `Object` type",
        ),
        _ => fallback(),
    }
}

/// int if the literal fits in 32 bits (inclusive both bounds), long otherwise
fn classify_int(text: &str) -> Inference {
    match text.parse::<i64>() {
        Ok(v) if v >= i32::MIN as i64 && v <= i32::MAX as i64 => Inference::new(
            JavaType::Int,
            format!("Integer literal `{text}` fits in int range → `int`"),
        ),
        _ => Inference::new(
            JavaType::Long,
            format!("Integer literal `{text}` requires long → `long`"),
        ),
    }
}

fn fallback() -> Inference {
    Inference::new(JavaType::Object, "Complex expression → defaulting to `Object`")
}
