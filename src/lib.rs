//! Pyjama - Python to Java Converter
//!
//! # Overview
//! Converts a restricted subset of Python into Java source text, paired
//! with a human-readable explanation for every structural decision. The
//! converter is a pure function of (source text, config); it never panics
//! on malformed input and degrades to inline placeholder comments.

pub mod assemble;
pub mod builtins;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod exprs;
pub mod infer;
pub mod parser;
pub mod stmts;
pub mod types;

use std::path::Path;

use anyhow::Result;

pub use assemble::Conversion;
pub use config::ConvertConfig;
pub use error::PyjamaError;

/// Convert Python source code to Java with default options
pub fn convert(source: &str) -> Conversion {
    assemble::convert_program(source, &ConvertConfig::default())
}

/// Convert Python source code to Java with explicit options
pub fn convert_with_config(source: &str, config: &ConvertConfig) -> Conversion {
    assemble::convert_program(source, config)
}

/// Check that Python source parses, without generating output
pub fn validate(source: &str) -> error::Result<()> {
    parser::parse(source).map(|_| ())
}

/// Convert a Python file to a Java file, writing the explanation alongside
/// the generated code when `explain` is given
pub fn convert_file(
    input: &Path,
    output: &Path,
    explain: Option<&Path>,
    config: &ConvertConfig,
) -> Result<()> {
    let source = std::fs::read_to_string(input)?;
    let result = assemble::convert_program(&source, config);
    std::fs::write(output, &result.java_code)?;
    if let Some(path) = explain {
        std::fs::write(path, &result.explanation)?;
    }
    Ok(())
}
