//! Java type definitions
use serde::{Deserialize, Serialize};

/// Java types the converter can infer for a Python value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JavaType {
    Boolean,
    Int,
    Long,
    Double,
    Str,
    Object,
    /// ArrayList<Object>
    List,
    /// HashMap<Object, Object>
    Map,
}

impl JavaType {
    /// Java source spelling of this type
    pub fn as_java(&self) -> &'static str {
        match self {
            JavaType::Boolean => "boolean",
            JavaType::Int => "int",
            JavaType::Long => "long",
            JavaType::Double => "double",
            JavaType::Str => "String",
            JavaType::Object => "Object",
            JavaType::List => "ArrayList<Object>",
            JavaType::Map => "HashMap<Object, Object>",
        }
    }
}

impl std::fmt::Display for JavaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_java())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_java() {
        assert_eq!(JavaType::Int.as_java(), "int");
        assert_eq!(JavaType::Long.as_java(), "long");
        assert_eq!(JavaType::List.as_java(), "ArrayList<Object>");
        assert_eq!(JavaType::Map.as_java(), "HashMap<Object, Object>");
    }

    #[test]
    fn test_display_matches_as_java() {
        assert_eq!(format!("{}", JavaType::Str), "String");
    }
}
