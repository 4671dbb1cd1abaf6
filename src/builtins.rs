//! Declarative table of Python built-in call rewrites
//!
//! Defines how intercepted Python built-ins are rewritten into Java idioms.
//! Table-driven so new built-ins are a one-line addition.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Expansion shape of a rewritten built-in
#[derive(Debug, Clone, Copy)]
pub enum BuiltinKind {
    /// `System.out.println(args...)`, all arguments comma-joined
    Print,
    /// Method call on the first argument: `args[0].method()`
    Method {
        method: &'static str,
        /// Rendered when the call has no arguments
        empty: &'static str,
    },
    /// Static single-argument wrapper: `target(args[0])`
    StaticWrap {
        target: &'static str,
        /// Rendered when the call has no arguments
        empty: &'static str,
    },
    /// Variadic math reduction: `target(args...)` with two or more
    /// arguments. Exactly one argument is returned unchanged; zero
    /// arguments render the neutral `0`.
    Reduce { target: &'static str },
}

/// One intercepted Python built-in
pub struct BuiltinSpec {
    pub name: &'static str,
    pub kind: BuiltinKind,
}

/// Registered built-in rewrites
pub const BUILTIN_SPECS: &[BuiltinSpec] = &[
    BuiltinSpec {
        name: "print",
        kind: BuiltinKind::Print,
    },
    BuiltinSpec {
        name: "len",
        kind: BuiltinKind::Method {
            method: "size",
            empty: "0",
        },
    },
    BuiltinSpec {
        name: "str",
        kind: BuiltinKind::StaticWrap {
            target: "String.valueOf",
            empty: "\"\"",
        },
    },
    BuiltinSpec {
        name: "int",
        kind: BuiltinKind::StaticWrap {
            target: "Integer.parseInt",
            empty: "0",
        },
    },
    BuiltinSpec {
        name: "float",
        kind: BuiltinKind::StaticWrap {
            target: "Double.parseDouble",
            empty: "0.0",
        },
    },
    BuiltinSpec {
        name: "abs",
        kind: BuiltinKind::StaticWrap {
            target: "Math.abs",
            empty: "0",
        },
    },
    BuiltinSpec {
        name: "max",
        kind: BuiltinKind::Reduce { target: "Math.max" },
    },
    BuiltinSpec {
        name: "min",
        kind: BuiltinKind::Reduce { target: "Math.min" },
    },
];

static BUILTIN_INDEX: Lazy<HashMap<&'static str, &'static BuiltinSpec>> = Lazy::new(|| {
    BUILTIN_SPECS
        .iter()
        .map(|spec| (spec.name, spec))
        .collect()
});

/// Look up a built-in rewrite by Python function name
pub fn lookup(name: &str) -> Option<&'static BuiltinSpec> {
    BUILTIN_INDEX.get(name).copied()
}
