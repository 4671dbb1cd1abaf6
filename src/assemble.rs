//! Program assembly
//!
//! Top-level orchestration: parses the source, splits function definitions
//! from entry-point statements, synthesizes the class frame and main-method
//! wrapper, and joins the explanation entries.

use rustpython_parser::ast;
use serde::Serialize;

use crate::config::ConvertConfig;
use crate::diagnostics;
use crate::emit::{render, Line};
use crate::parser;
use crate::stmts::convert_stmt;

/// Import block prepended when `add_imports` is on
const IMPORTS: [&str; 3] = [
    "import java.util.*;",
    "import java.io.*;",
    "import java.math.*;",
];

/// Result pair of one conversion. Always fully populated; a parse failure
/// puts the same diagnostic in both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub java_code: String,
    pub explanation: String,
}

/// Convert a Python program to Java source plus explanations
pub fn convert_program(source: &str, config: &ConvertConfig) -> Conversion {
    let statements = match parser::parse(source) {
        Ok(statements) => statements,
        Err(err) => {
            let diag = diagnostics::from_error(&err);
            return Conversion {
                java_code: diag.to_comment(),
                explanation: diag.to_text(),
            };
        }
    };

    let mut lines: Vec<Line> = Vec::new();
    let mut explanations: Vec<String> = Vec::new();

    if config.add_imports {
        lines.extend(IMPORTS.iter().map(|import| Line::new(0, *import)));
        lines.push(Line::blank());
        explanations.push("Added common Java imports".to_string());
    }

    lines.push(Line::new(
        0,
        format!("public class {} {{", config.class_name()),
    ));

    // Function definitions become static members; every other top-level
    // statement feeds the entry-point body. Source order is kept within
    // each bucket, and explanations keep full source order across both.
    let mut main_body: Vec<Line> = Vec::new();
    let mut methods: Vec<Line> = Vec::new();
    for stmt in &statements {
        let is_function = matches!(stmt, ast::Stmt::FunctionDef(_));
        let output = convert_stmt(stmt, if is_function { 1 } else { 2 });
        if is_function {
            methods.extend(output.lines);
        } else {
            main_body.extend(output.lines);
        }
        explanations.extend(output.explanations);
    }

    if config.add_main && !main_body.is_empty() {
        lines.push(Line::new(1, "public static void main(String[] args) {"));
        lines.extend(main_body);
        lines.push(Line::new(1, "}"));
        explanations.push("Wrapped main code in main() method".to_string());
    }

    if !methods.is_empty() {
        lines.push(Line::blank());
        lines.extend(methods);
    }

    lines.push(Line::new(0, "}"));

    Conversion {
        java_code: render(&lines),
        explanation: explanations.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_assignment_full_output() {
        let result = convert_program("x = 5", &ConvertConfig::default());
        assert_eq!(
            result.java_code,
            "import java.util.*;\n\
             import java.io.*;\n\
             import java.math.*;\n\
             \n\
             public class Main {\n\
             \x20   public static void main(String[] args) {\n\
             \x20       int x = 5;\n\
             \x20   }\n\
             }"
        );
    }

    #[test]
    fn test_explanation_order() {
        let result = convert_program("x = 5", &ConvertConfig::default());
        let entries: Vec<&str> = result.explanation.lines().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], "Added common Java imports");
        assert!(entries[1].starts_with("Variable assignment: `x`"));
        assert_eq!(entries[2], "Wrapped main code in main() method");
    }

    #[test]
    fn test_custom_class_name() {
        let config = ConvertConfig {
            class_name: "Calculator".to_string(),
            ..Default::default()
        };
        let result = convert_program("x = 5", &config);
        assert!(result.java_code.contains("public class Calculator {"));
    }

    #[test]
    fn test_no_imports_removes_exactly_the_import_block() {
        let with = convert_program("x = 5", &ConvertConfig::default());
        let without = convert_program(
            "x = 5",
            &ConvertConfig {
                add_imports: false,
                ..Default::default()
            },
        );
        let with_lines: Vec<&str> = with.java_code.lines().collect();
        let without_lines: Vec<&str> = without.java_code.lines().collect();
        assert_eq!(
            with_lines[..4],
            [
                "import java.util.*;",
                "import java.io.*;",
                "import java.math.*;",
                ""
            ]
        );
        assert_eq!(with_lines[4..], without_lines[..]);
    }

    #[test]
    fn test_no_main_drops_entry_point_body() {
        let config = ConvertConfig {
            add_main: false,
            ..Default::default()
        };
        let result = convert_program("x = 5", &config);
        assert!(!result.java_code.contains("int x = 5;"));
        assert!(!result.java_code.contains("public static void main"));
        assert!(result.java_code.contains("public class Main {"));
    }

    #[test]
    fn test_functions_render_after_main() {
        let src = "def add(a, b):\n    return a\n\nx = 5\n";
        let result = convert_program(src, &ConvertConfig::default());
        let main_pos = result.java_code.find("public static void main").unwrap();
        let func_pos = result
            .java_code
            .find("public static void add(Object a, Object b) {")
            .unwrap();
        assert!(main_pos < func_pos);
    }

    #[test]
    fn test_function_only_program_has_no_main() {
        let src = "def f():\n    return\n";
        let result = convert_program(src, &ConvertConfig::default());
        assert!(!result.java_code.contains("public static void main"));
        assert!(result.java_code.contains("public static void f() {"));
    }

    #[test]
    fn test_parse_failure_produces_diagnostic_pair() {
        let result = convert_program("x = (5", &ConvertConfig::default());
        assert!(result.java_code.starts_with("/* Python syntax error at line "));
        assert!(result.java_code.ends_with("*/"));
        assert!(result.explanation.starts_with("Python syntax error at line "));
        assert_eq!(result.java_code, format!("/* {} */", result.explanation));
    }

    #[test]
    fn test_empty_source_still_frames_class() {
        let result = convert_program("", &ConvertConfig::default());
        assert!(result.java_code.contains("public class Main {"));
        assert!(result.java_code.trim_end().ends_with('}'));
    }
}
