use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// One entry of the class model: a user-facing API class together with the
/// concrete implementation classes discovered for it.
///
/// Descriptors are produced by the upstream interface parser and consumed
/// verbatim here; generation never inspects the fields, it only exposes them
/// to templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiClassDescriptor {
    pub api_class: ClassInfo,
    #[serde(default)]
    pub impls: Vec<ClassInfo>,
}

impl ApiClassDescriptor {
    /// Helper for tests: a descriptor with no implementation classes.
    #[doc(hidden)]
    pub fn new_for_test(name: impl Into<String>) -> Self {
        Self {
            api_class: ClassInfo::named(name),
            impls: vec![],
        }
    }
}

/// A single class as seen by the upstream parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

impl ClassInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<ParameterInfo>,
    #[serde(default)]
    pub is_const: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub param_type: String,
}

/// Load a class model from the JSON hand-off file written by the upstream
/// parser stage.
pub fn load_class_model<P: AsRef<Path>>(path: P) -> Result<Vec<ApiClassDescriptor>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::ClassModel(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_descriptor_deserializes_without_impls() {
        let json = r#"{"api_class": {"name": "Int"}}"#;
        let descriptor: ApiClassDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.api_class.name, "Int");
        assert!(descriptor.impls.is_empty());
        assert!(descriptor.api_class.methods.is_empty());
    }

    #[test]
    fn test_descriptor_roundtrip_keeps_method_order() {
        let json = r#"
        {
            "api_class": {
                "name": "Shape",
                "methods": [
                    {"name": "area", "return_type": "double", "is_const": true},
                    {"name": "name", "return_type": "const char*"}
                ]
            },
            "impls": [{"name": "Circle"}, {"name": "Square"}]
        }"#;
        let descriptor: ApiClassDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.api_class.methods[0].name, "area");
        assert!(descriptor.api_class.methods[0].is_const);
        assert_eq!(descriptor.api_class.methods[1].name, "name");
        assert_eq!(descriptor.impls.len(), 2);
        assert_eq!(descriptor.impls[0].name, "Circle");
    }

    #[test]
    fn test_load_class_model_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classes.json");
        fs::write(
            &path,
            r#"[{"api_class": {"name": "Int"}, "impls": [{"name": "Int"}]}]"#,
        )
        .unwrap();

        let model = load_class_model(&path).unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model[0].api_class.name, "Int");
        assert_eq!(model[0].impls[0].name, "Int");
    }

    #[test]
    fn test_load_class_model_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classes.json");
        fs::write(&path, "not json").unwrap();

        let err = load_class_model(&path).unwrap_err();
        assert!(matches!(err, crate::Error::ClassModel(_)));
    }

    #[test]
    fn test_load_class_model_missing_file_is_io_error() {
        let err = load_class_model("/nonexistent/classes.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
