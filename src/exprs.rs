//! Expression translation
//!
//! Renders Python expressions as Java expression text. Every function here
//! is total: unrecognized shapes degrade to an inline comment carrying a
//! dump of the offending node.

use rustpython_parser::ast;

use crate::builtins::{self, BuiltinKind};

/// Render a Python expression as Java expression text
pub fn expr_to_java(expr: &ast::Expr) -> String {
    match expr {
        ast::Expr::Constant(constant) => constant_to_java(constant),
        ast::Expr::Name(name) => name.id.as_str().to_string(),
        ast::Expr::UnaryOp(unary)
            if matches!(unary.op, ast::UnaryOp::USub) && is_numeric_literal(&unary.operand) =>
        {
            format!("-{}", expr_to_java(&unary.operand))
        }
        ast::Expr::BinOp(binop) => binop_to_java(binop),
        ast::Expr::Compare(compare) => compare_to_java(compare),
        ast::Expr::Call(call) => call_to_java(call),
        ast::Expr::List(list) => {
            let elements: Vec<String> = list.elts.iter().map(expr_to_java).collect();
            format!("Arrays.asList({})", elements.join(", "))
        }
        ast::Expr::Subscript(subscript) => format!(
            "{}.get({})",
            expr_to_java(&subscript.value),
            expr_to_java(&subscript.slice)
        ),
        other => format!("/* Unsupported expression: {other:?} */"),
    }
}

fn constant_to_java(constant: &ast::ExprConstant) -> String {
    match &constant.value {
        ast::Constant::Str(value) => format!("\"{value}\""),
        ast::Constant::Bool(value) => if *value { "true" } else { "false" }.to_string(),
        ast::Constant::None => "null".to_string(),
        ast::Constant::Int(value) => value.to_string(),
        ast::Constant::Float(value) => format_float(*value),
        other => format!("/* Unsupported expression: {other:?} */"),
    }
}

/// Decimal text for a float literal; integral values keep one decimal digit
pub(crate) fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn binop_to_java(binop: &ast::ExprBinOp) -> String {
    let left = expr_to_java(&binop.left);
    let right = expr_to_java(&binop.right);
    let op = match binop.op {
        // Java has no exponent operator.
        ast::Operator::Pow => return format!("Math.pow({left}, {right})"),
        ast::Operator::Add => "+",
        ast::Operator::Sub => "-",
        ast::Operator::Mult => "*",
        ast::Operator::Div => "/",
        ast::Operator::Mod => "%",
        // Floor division degrades to plain division.
        ast::Operator::FloorDiv => "/",
        ast::Operator::MatMult
        | ast::Operator::LShift
        | ast::Operator::RShift
        | ast::Operator::BitOr
        | ast::Operator::BitXor
        | ast::Operator::BitAnd => "?",
    };
    format!("({left} {op} {right})")
}

fn compare_to_java(compare: &ast::ExprCompare) -> String {
    let left = expr_to_java(&compare.left);
    let (Some(op), Some(comparator)) = (compare.ops.first(), compare.comparators.first()) else {
        return left;
    };
    let right = expr_to_java(comparator);
    match op {
        ast::CmpOp::In => format!("{right}.contains({left})"),
        // Negation applies to the whole contains() call.
        ast::CmpOp::NotIn => format!("!{right}.contains({left})"),
        other => {
            let op = match other {
                ast::CmpOp::Eq => "==",
                ast::CmpOp::NotEq => "!=",
                ast::CmpOp::Lt => "<",
                ast::CmpOp::LtE => "<=",
                ast::CmpOp::Gt => ">",
                ast::CmpOp::GtE => ">=",
                ast::CmpOp::Is
                | ast::CmpOp::IsNot
                | ast::CmpOp::In
                | ast::CmpOp::NotIn => "==",
            };
            format!("{left} {op} {right}")
        }
    }
}

/// Render a function call. Only bare-name callees are handled; known
/// built-ins are rewritten through the table in [`crate::builtins`], any
/// other name becomes a direct call to a same-named Java method.
pub fn call_to_java(call: &ast::ExprCall) -> String {
    let ast::Expr::Name(func) = call.func.as_ref() else {
        return "/* Unsupported function call */".to_string();
    };
    let args: Vec<String> = call.args.iter().map(expr_to_java).collect();
    match builtins::lookup(func.id.as_str()) {
        Some(spec) => expand_builtin(&spec.kind, &args),
        None => format!("{}({})", func.id.as_str(), args.join(", ")),
    }
}

fn expand_builtin(kind: &BuiltinKind, args: &[String]) -> String {
    match kind {
        BuiltinKind::Print => format!("System.out.println({})", args.join(", ")),
        BuiltinKind::Method { method, empty } => match args.first() {
            Some(receiver) => format!("{receiver}.{method}()"),
            None => (*empty).to_string(),
        },
        BuiltinKind::StaticWrap { target, empty } => match args.first() {
            Some(arg) => format!("{target}({arg})"),
            None => (*empty).to_string(),
        },
        BuiltinKind::Reduce { target } => match args {
            [] => "0".to_string(),
            // Single-argument max/min pass the value through unchanged.
            [only] => only.clone(),
            many => format!("{target}({})", many.join(", ")),
        },
    }
}

/// The three parts of a counted Java loop derived from `range(...)` arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: String,
    pub stop: String,
    pub step: String,
}

/// Derive loop bounds from `range(...)` arguments by arity. Never fails;
/// unexpected arities fall back to 0..10 step 1.
pub fn range_triple(args: &[ast::Expr]) -> RangeSpec {
    match args {
        [stop] => RangeSpec {
            start: "0".to_string(),
            stop: expr_to_java(stop),
            step: "1".to_string(),
        },
        [start, stop] => RangeSpec {
            start: expr_to_java(start),
            stop: expr_to_java(stop),
            step: "1".to_string(),
        },
        [start, stop, step] => RangeSpec {
            start: expr_to_java(start),
            stop: expr_to_java(stop),
            step: expr_to_java(step),
        },
        _ => RangeSpec {
            start: "0".to_string(),
            stop: "10".to_string(),
            step: "1".to_string(),
        },
    }
}

impl RangeSpec {
    /// Three-part loop header fragment for loop variable `var`
    pub fn to_loop_header(&self, var: &str) -> String {
        let increment = if self.step == "1" {
            format!("{var}++")
        } else {
            format!("{var} += {}", self.step)
        };
        format!(
            "int {var} = {}; {var} < {}; {increment}",
            self.start, self.stop
        )
    }
}

fn is_numeric_literal(expr: &ast::Expr) -> bool {
    matches!(
        expr,
        ast::Expr::Constant(c) if matches!(c.value, ast::Constant::Int(_) | ast::Constant::Float(_))
    )
}
