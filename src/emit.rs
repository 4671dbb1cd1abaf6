//! Java source layout
//!
//! Rendered statements are collected as (depth, text) pairs and indented
//! once, at the very end. Nesting depth is threaded through the statement
//! translator as an explicit integer, never recovered from the text.

/// Four spaces per nesting level, matching the generated Java style
const INDENT: &str = "    ";

/// One line of generated Java at a given nesting depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub depth: usize,
    pub text: String,
}

impl Line {
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }

    /// A separator line; rendered without indentation
    pub fn blank() -> Self {
        Self {
            depth: 0,
            text: String::new(),
        }
    }
}

/// Render collected lines into final Java source text
pub fn render(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| {
            if line.text.is_empty() {
                String::new()
            } else {
                format!("{}{}", INDENT.repeat(line.depth), line.text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_indents_by_depth() {
        let lines = vec![
            Line::new(0, "public class Main {"),
            Line::new(1, "int x = 5;"),
            Line::new(0, "}"),
        ];
        assert_eq!(
            render(&lines),
            "public class Main {\n    int x = 5;\n}"
        );
    }

    #[test]
    fn test_blank_lines_stay_unindented() {
        let lines = vec![Line::new(2, "a;"), Line::blank(), Line::new(2, "b;")];
        assert_eq!(render(&lines), "        a;\n\n        b;");
    }
}
