//! Parser facade
//!
//! Parsing proper is delegated to `rustpython-parser`; this module only maps
//! its errors into [`PyjamaError::Parse`] with a 1-based line number.

use rustpython_parser::{ast, Parse};

use crate::error::{PyjamaError, Result};

/// Parse Python source code into a list of top-level statements
pub fn parse(source: &str) -> Result<Vec<ast::Stmt>> {
    ast::Suite::parse(source, "<input>").map_err(|err| {
        let offset = u32::from(err.offset) as usize;
        PyjamaError::Parse {
            line: line_of_offset(source, offset),
            message: err.error.to_string(),
        }
    })
}

/// 1-based line number of a byte offset into `source`
fn line_of_offset(source: &str, offset: usize) -> usize {
    let end = offset.min(source.len());
    source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_assignment() {
        let stmts = parse("x = 5").unwrap();
        assert_eq!(stmts.len(), 1);
        assert!(matches!(stmts[0], ast::Stmt::Assign(_)));
    }

    #[test]
    fn test_parse_error_carries_line_number() {
        let err = parse("x = 1\ny = (2\n").unwrap_err();
        match err {
            PyjamaError::Parse { line, .. } => assert!(line >= 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_line_of_offset() {
        let source = "a\nbb\nccc";
        assert_eq!(line_of_offset(source, 0), 1);
        assert_eq!(line_of_offset(source, 2), 2);
        assert_eq!(line_of_offset(source, 5), 3);
        // Offsets past the end clamp to the last line.
        assert_eq!(line_of_offset(source, 100), 3);
    }
}
