//! Pyjama CLI - Python to Java Converter

use anyhow::Result;
use clap::Parser;
use pyjama::{convert_with_config, diagnostics, ConvertConfig};
use std::path::PathBuf;

/// Pyjama - Python to Java Converter
#[derive(Parser, Debug)]
#[command(name = "pjm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert Python code to Java", long_about = None)]
struct Cli {
    /// Input Python file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output Java file (default: <INPUT>.java)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Write the explanation text to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    explain: Option<PathBuf>,

    /// Name of the generated class
    #[arg(long, value_name = "NAME", default_value = "Main")]
    class_name: String,

    /// Do not wrap top-level statements in a main method
    #[arg(long)]
    no_main: bool,

    /// Do not emit the common Java import block
    #[arg(long)]
    no_imports: bool,

    /// Check only (validate the Python input, don't generate output)
    #[arg(short, long)]
    check: bool,

    /// Print the full conversion result as JSON and exit
    #[arg(long)]
    json: bool,

    /// Emit a JSON diagnostic to stderr (on failure only)
    #[arg(long)]
    diag_json: bool,

    /// Suppress the explanation on stdout
    #[arg(short, long)]
    quiet: bool,

    /// Show debug information
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        println!("[DEBUG] Input: {:?}", cli.input);
        println!("[DEBUG] Output: {:?}", cli.output);
    }

    let source = std::fs::read_to_string(&cli.input)?;

    if cli.debug {
        println!("[DEBUG] Source length: {} bytes", source.len());
    }

    // Check mode
    if cli.check {
        match pyjama::validate(&source) {
            Ok(()) => {
                println!("✅ Python syntax is valid!");
                return Ok(());
            }
            Err(err) => {
                let diag = diagnostics::from_error(&err);
                println!("{}", diag.to_text());
                if cli.diag_json {
                    eprintln!("{}", diag.to_json());
                }
                std::process::exit(1);
            }
        }
    }

    // A parse failure still yields a framed result pair, but the CLI
    // reports it and exits nonzero instead of writing a comment-only file.
    if let Err(err) = pyjama::validate(&source) {
        let diag = diagnostics::from_error(&err);
        println!("{}", diag.to_text());
        if cli.diag_json {
            eprintln!("{}", diag.to_json());
        }
        std::process::exit(1);
    }

    let config = ConvertConfig {
        add_main: !cli.no_main,
        add_imports: !cli.no_imports,
        class_name: cli.class_name.clone(),
    };
    let result = convert_with_config(&source, &config);

    if cli.debug {
        println!("[DEBUG] Generated Java code:");
        println!("{}", result.java_code);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let output_path = cli.output.unwrap_or_else(|| {
        // Default: output to current directory with same filename.java
        let mut p = cli.input.clone();
        p.set_extension("java");
        if let Some(filename) = p.file_name() {
            PathBuf::from(filename)
        } else {
            p
        }
    });

    std::fs::write(&output_path, &result.java_code)?;
    println!("✅ Converted to: {output_path:?}");

    if let Some(path) = &cli.explain {
        std::fs::write(path, &result.explanation)?;
    } else if !cli.quiet {
        println!("{}", result.explanation);
    }

    Ok(())
}
