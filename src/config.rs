//! Conversion options
//!
//! Every conversion entry point takes the config by reference; nothing is
//! read from shared state between calls.

use serde::{Deserialize, Serialize};

/// Per-call conversion options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Wrap top-level statements in a `public static void main` method
    pub add_main: bool,
    /// Prepend the common Java import block
    pub add_imports: bool,
    /// Name of the generated class ("Main" if blank)
    pub class_name: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            add_main: true,
            add_imports: true,
            class_name: "Main".to_string(),
        }
    }
}

impl ConvertConfig {
    /// Class name with the blank fallback applied
    pub fn class_name(&self) -> &str {
        if self.class_name.trim().is_empty() {
            "Main"
        } else {
            &self.class_name
        }
    }
}
