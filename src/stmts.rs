//! Statement translation
//!
//! One case per Python statement kind, recursing into nested bodies with an
//! explicit depth counter. Every statement is rendered behind a containment
//! boundary: a failure inside one statement becomes a placeholder comment
//! and translation of its siblings continues.

use rustpython_parser::ast;

use crate::emit::Line;
use crate::error::{PyjamaError, Result};
use crate::exprs::{call_to_java, expr_to_java, range_triple};
use crate::infer::infer_type;

/// Rendered lines and explanation entries for one statement
#[derive(Debug, Clone, Default)]
pub struct StmtOutput {
    pub lines: Vec<Line>,
    pub explanations: Vec<String>,
}

impl StmtOutput {
    fn single(depth: usize, text: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            lines: vec![Line::new(depth, text)],
            explanations: vec![explanation.into()],
        }
    }
}

/// Render one statement. The containment boundary: a rendering failure is
/// substituted with a placeholder comment instead of propagating.
pub fn convert_stmt(stmt: &ast::Stmt, depth: usize) -> StmtOutput {
    match try_convert_stmt(stmt, depth) {
        Ok(output) => output,
        Err(err) => {
            let kind = stmt_kind_name(stmt);
            StmtOutput::single(
                depth,
                format!("/* Error converting {kind}: {err} */"),
                format!("Error processing {kind}: {err}"),
            )
        }
    }
}

fn try_convert_stmt(stmt: &ast::Stmt, depth: usize) -> Result<StmtOutput> {
    match stmt {
        ast::Stmt::Assign(assign) => {
            if let [ast::Expr::Name(target)] = assign.targets.as_slice() {
                let name = target.id.as_str();
                let inference = infer_type(&assign.value);
                let value = expr_to_java(&assign.value);
                Ok(StmtOutput::single(
                    depth,
                    format!("{} {name} = {value};", inference.ty),
                    format!("Variable assignment: `{name}` → {}", inference.reason),
                ))
            } else {
                // Multiple or non-name targets are out of the supported subset.
                Ok(unsupported(stmt, depth))
            }
        }
        ast::Stmt::AugAssign(aug) => {
            if let ast::Expr::Name(target) = aug.target.as_ref() {
                let name = target.id.as_str();
                let op = aug_op_to_java(&aug.op);
                let value = expr_to_java(&aug.value);
                Ok(StmtOutput::single(
                    depth,
                    format!("{name} {op} {value};"),
                    format!("Augmented assignment: `{name} {op} {value}`"),
                ))
            } else {
                Ok(unsupported(stmt, depth))
            }
        }
        ast::Stmt::Expr(stmt_expr) => match stmt_expr.value.as_ref() {
            ast::Expr::Call(call) => Ok(StmtOutput::single(
                depth,
                format!("{};", call_to_java(call)),
                "Function call converted",
            )),
            other => Ok(StmtOutput::single(
                depth,
                format!("{};", expr_to_java(other)),
                "Expression statement",
            )),
        },
        ast::Stmt::If(if_stmt) => {
            let mut output = StmtOutput::single(
                depth,
                format!("if ({}) {{", expr_to_java(&if_stmt.test)),
                "Conditional statement: `if/else` → Java if/else block",
            );
            convert_body(&if_stmt.body, depth + 1, &mut output);
            if !if_stmt.orelse.is_empty() {
                output.lines.push(Line::new(depth, "} else {"));
                convert_body(&if_stmt.orelse, depth + 1, &mut output);
            }
            output.lines.push(Line::new(depth, "}"));
            Ok(output)
        }
        ast::Stmt::For(for_stmt) => {
            let var = loop_var(&for_stmt.target)?;
            let mut output = if let Some(range_args) = as_range_call(&for_stmt.iter) {
                StmtOutput::single(
                    depth,
                    format!("for ({}) {{", range_triple(range_args).to_loop_header(var)),
                    "For loop with range() → Java for loop",
                )
            } else {
                StmtOutput::single(
                    depth,
                    format!(
                        "for (Object {var} : {}) {{",
                        expr_to_java(&for_stmt.iter)
                    ),
                    "For-each loop → Java enhanced for loop",
                )
            };
            convert_body(&for_stmt.body, depth + 1, &mut output);
            output.lines.push(Line::new(depth, "}"));
            Ok(output)
        }
        ast::Stmt::While(while_stmt) => {
            let mut output = StmtOutput::single(
                depth,
                format!("while ({}) {{", expr_to_java(&while_stmt.test)),
                "While loop → Java while loop",
            );
            convert_body(&while_stmt.body, depth + 1, &mut output);
            output.lines.push(Line::new(depth, "}"));
            Ok(output)
        }
        ast::Stmt::FunctionDef(func) => {
            let name = func.name.as_str();
            // No parameter type inference; every parameter is an Object.
            let params: Vec<String> = func
                .args
                .args
                .iter()
                .map(|param| format!("Object {}", param.def.arg.as_str()))
                .collect();
            let mut output = StmtOutput::single(
                depth,
                format!("public static void {name}({}) {{", params.join(", ")),
                format!("Function definition: `def {name}()` → Java static method"),
            );
            convert_body(&func.body, depth + 1, &mut output);
            output.lines.push(Line::new(depth, "}"));
            Ok(output)
        }
        ast::Stmt::Return(ret) => Ok(match &ret.value {
            Some(value) => StmtOutput::single(
                depth,
                format!("return {};", expr_to_java(value)),
                "Return statement",
            ),
            None => StmtOutput::single(depth, "return;", "Return statement"),
        }),
        ast::Stmt::Break(_) => Ok(StmtOutput::single(depth, "break;", "Break statement")),
        ast::Stmt::Continue(_) => Ok(StmtOutput::single(depth, "continue;", "Continue statement")),
        other => Ok(unsupported(other, depth)),
    }
}

/// Render a nested body, each child behind its own containment boundary
fn convert_body(body: &[ast::Stmt], depth: usize, output: &mut StmtOutput) {
    for stmt in body {
        let child = convert_stmt(stmt, depth);
        output.lines.extend(child.lines);
        output.explanations.extend(child.explanations);
    }
}

fn unsupported(stmt: &ast::Stmt, depth: usize) -> StmtOutput {
    let kind = stmt_kind_name(stmt);
    StmtOutput::single(
        depth,
        format!("/* Unsupported: {kind} */"),
        format!("Unsupported Python node: {kind}"),
    )
}

fn aug_op_to_java(op: &ast::Operator) -> &'static str {
    match op {
        ast::Operator::Add => "+=",
        ast::Operator::Sub => "-=",
        ast::Operator::Mult => "*=",
        ast::Operator::Div => "/=",
        ast::Operator::Mod
        | ast::Operator::Pow
        | ast::Operator::MatMult
        | ast::Operator::LShift
        | ast::Operator::RShift
        | ast::Operator::BitOr
        | ast::Operator::BitXor
        | ast::Operator::BitAnd
        | ast::Operator::FloorDiv => "=",
    }
}

fn loop_var(target: &ast::Expr) -> Result<&str> {
    match target {
        ast::Expr::Name(name) => Ok(name.id.as_str()),
        _ => Err(PyjamaError::render("loop target is not a simple name")),
    }
}

fn as_range_call(iter: &ast::Expr) -> Option<&[ast::Expr]> {
    if let ast::Expr::Call(call) = iter {
        if let ast::Expr::Name(func) = call.func.as_ref() {
            if func.id.as_str() == "range" {
                return Some(&call.args);
            }
        }
    }
    None
}

/// Python `ast` class name for a statement. Exhaustive on purpose: a parser
/// upgrade that adds a statement kind must be acknowledged here.
pub fn stmt_kind_name(stmt: &ast::Stmt) -> &'static str {
    match stmt {
        ast::Stmt::FunctionDef(_) => "FunctionDef",
        ast::Stmt::AsyncFunctionDef(_) => "AsyncFunctionDef",
        ast::Stmt::ClassDef(_) => "ClassDef",
        ast::Stmt::Return(_) => "Return",
        ast::Stmt::Delete(_) => "Delete",
        ast::Stmt::Assign(_) => "Assign",
        ast::Stmt::TypeAlias(_) => "TypeAlias",
        ast::Stmt::AugAssign(_) => "AugAssign",
        ast::Stmt::AnnAssign(_) => "AnnAssign",
        ast::Stmt::For(_) => "For",
        ast::Stmt::AsyncFor(_) => "AsyncFor",
        ast::Stmt::While(_) => "While",
        ast::Stmt::If(_) => "If",
        ast::Stmt::With(_) => "With",
        ast::Stmt::AsyncWith(_) => "AsyncWith",
        ast::Stmt::Match(_) => "Match",
        ast::Stmt::Raise(_) => "Raise",
        ast::Stmt::Try(_) => "Try",
        ast::Stmt::TryStar(_) => "TryStar",
        ast::Stmt::Assert(_) => "Assert",
        ast::Stmt::Import(_) => "Import",
        ast::Stmt::ImportFrom(_) => "ImportFrom",
        ast::Stmt::Global(_) => "Global",
        ast::Stmt::Nonlocal(_) => "Nonlocal",
        ast::Stmt::Expr(_) => "Expr",
        ast::Stmt::Pass(_) => "Pass",
        ast::Stmt::Break(_) => "Break",
        ast::Stmt::Continue(_) => "Continue",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_one(src: &str) -> ast::Stmt {
        let stmts = crate::parser::parse(src).expect("test source should parse");
        stmts.into_iter().next().expect("one statement")
    }

    fn lines_of(src: &str, depth: usize) -> Vec<(usize, String)> {
        convert_stmt(&parse_one(src), depth)
            .lines
            .into_iter()
            .map(|line| (line.depth, line.text))
            .collect()
    }

    #[test]
    fn test_assignment_with_inference() {
        assert_eq!(lines_of("x = 5", 0), vec![(0, "int x = 5;".to_string())]);
        assert_eq!(
            lines_of("s = \"hi\"", 0),
            vec![(0, "String s = \"hi\";".to_string())]
        );
        assert_eq!(
            lines_of("big = 2147483648", 0),
            vec![(0, "long big = 2147483648;".to_string())]
        );
    }

    #[test]
    fn test_assignment_explanation() {
        let output = convert_stmt(&parse_one("x = 5"), 0);
        assert_eq!(output.explanations.len(), 1);
        assert!(output.explanations[0].starts_with("Variable assignment: `x`"));
        assert!(output.explanations[0].contains("fits in int range"));
    }

    #[test]
    fn test_multi_target_assignment_is_unsupported() {
        assert_eq!(
            lines_of("a = b = 5", 0),
            vec![(0, "/* Unsupported: Assign */".to_string())]
        );
    }

    #[test]
    fn test_augmented_assignment() {
        assert_eq!(lines_of("x += 1", 0), vec![(0, "x += 1;".to_string())]);
        assert_eq!(lines_of("x *= 2", 0), vec![(0, "x *= 2;".to_string())]);
        // Unsupported augmented ops degrade to plain assignment.
        assert_eq!(lines_of("x //= 2", 0), vec![(0, "x = 2;".to_string())]);
    }

    #[test]
    fn test_expression_statements() {
        assert_eq!(
            lines_of("print(x)", 0),
            vec![(0, "System.out.println(x);".to_string())]
        );
        assert_eq!(lines_of("x + 1", 0), vec![(0, "(x + 1);".to_string())]);
    }

    #[test]
    fn test_if_else_block() {
        let src = "if x > 0:\n    y = 1\nelse:\n    y = 0\n";
        assert_eq!(
            lines_of(src, 1),
            vec![
                (1, "if (x > 0) {".to_string()),
                (2, "int y = 1;".to_string()),
                (1, "} else {".to_string()),
                (2, "int y = 0;".to_string()),
                (1, "}".to_string()),
            ]
        );
    }

    #[test]
    fn test_if_explanation_precedes_children() {
        let output = convert_stmt(&parse_one("if x > 0:\n    y = 1\n"), 0);
        assert!(output.explanations[0].starts_with("Conditional statement"));
        assert!(output.explanations[1].starts_with("Variable assignment"));
    }

    #[test]
    fn test_for_range_loop() {
        let src = "for i in range(5):\n    print(i)\n";
        assert_eq!(
            lines_of(src, 0),
            vec![
                (0, "for (int i = 0; i < 5; i++) {".to_string()),
                (1, "System.out.println(i);".to_string()),
                (0, "}".to_string()),
            ]
        );
    }

    #[test]
    fn test_for_each_loop() {
        let src = "for item in items:\n    print(item)\n";
        assert_eq!(
            lines_of(src, 0)[0],
            (0, "for (Object item : items) {".to_string())
        );
    }

    #[test]
    fn test_for_with_tuple_target_is_contained() {
        let src = "for a, b in pairs:\n    print(a)\n";
        let output = convert_stmt(&parse_one(src), 0);
        assert_eq!(output.lines.len(), 1);
        assert_eq!(
            output.lines[0].text,
            "/* Error converting For: loop target is not a simple name */"
        );
        assert!(output.explanations[0].starts_with("Error processing For:"));
    }

    #[test]
    fn test_while_loop() {
        let src = "while x < 10:\n    x += 1\n";
        assert_eq!(
            lines_of(src, 0),
            vec![
                (0, "while (x < 10) {".to_string()),
                (1, "x += 1;".to_string()),
                (0, "}".to_string()),
            ]
        );
    }

    #[test]
    fn test_function_definition() {
        let src = "def greet(name, times):\n    print(name)\n";
        let output = convert_stmt(&parse_one(src), 1);
        assert_eq!(
            output.lines[0].text,
            "public static void greet(Object name, Object times) {"
        );
        assert_eq!(output.lines[1].depth, 2);
        assert!(output.explanations[0].contains("`def greet()`"));
    }

    #[test]
    fn test_return_break_continue() {
        let src = "def f():\n    return 1\n";
        let output = convert_stmt(&parse_one(src), 0);
        assert_eq!(output.lines[1].text, "return 1;");

        let src = "while True:\n    break\n";
        let output = convert_stmt(&parse_one(src), 0);
        assert_eq!(output.lines[1].text, "break;");

        let src = "while True:\n    continue\n";
        let output = convert_stmt(&parse_one(src), 0);
        assert_eq!(output.lines[1].text, "continue;");
    }

    #[test]
    fn test_bare_return() {
        let src = "def f():\n    return\n";
        let output = convert_stmt(&parse_one(src), 0);
        assert_eq!(output.lines[1].text, "return;");
    }

    #[test]
    fn test_unsupported_statement_placeholder() {
        assert_eq!(
            lines_of("import os", 0),
            vec![(0, "/* Unsupported: Import */".to_string())]
        );
        let output = convert_stmt(&parse_one("import os"), 0);
        assert_eq!(output.explanations[0], "Unsupported Python node: Import");
    }

    #[test]
    fn test_unsupported_sibling_does_not_abort_block() {
        let src = "if x:\n    import os\n    y = 1\n";
        let output = convert_stmt(&parse_one(src), 0);
        let texts: Vec<&str> = output.lines.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"/* Unsupported: Import */"));
        assert!(texts.contains(&"int y = 1;"));
    }
}
