#![allow(dead_code)]
/// Common test utilities and helpers
use apigen::{ApiClassDescriptor, ClassInfo, GenerateConfig, MethodInfo, ParameterInfo};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch workspace with a template directory, an output directory, and
/// a class-model file.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("templates")).unwrap();
        Self { temp_dir }
    }

    pub fn template_dir(&self) -> PathBuf {
        self.temp_dir.path().join("templates")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.temp_dir.path().join("generated")
    }

    /// Write a template file into the workspace's template directory.
    pub fn write_template(&self, name: &str, body: &str) -> &Self {
        let path = self.template_dir().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, body).unwrap();
        self
    }

    /// Serialize `classes` to the workspace's class-model file.
    pub fn write_class_model(&self, classes: &[ApiClassDescriptor]) -> PathBuf {
        let path = self.temp_dir.path().join("classes.json");
        fs::write(&path, serde_json::to_string_pretty(classes).unwrap()).unwrap();
        path
    }

    /// A configuration pointing at this workspace.
    pub fn config(&self, module_name: &str, bindings: &[&str]) -> GenerateConfig {
        GenerateConfig {
            module_name: module_name.to_string(),
            class_model_path: self
                .write_class_model(&[int_class()])
                .to_string_lossy()
                .to_string(),
            template_dir: self.template_dir().to_string_lossy().to_string(),
            output_dir: self.output_dir().to_string_lossy().to_string(),
            bindings: bindings.iter().map(|b| b.to_string()).collect(),
            verbose: Some(false),
        }
    }

    pub fn read_output(&self, file_name: &str) -> String {
        fs::read_to_string(self.output_dir().join(file_name)).unwrap()
    }
}

/// Descriptor mirroring the sandbox `Int` class: one API class with a
/// matching implementation class.
pub fn int_class() -> ApiClassDescriptor {
    let class = ClassInfo {
        name: "Int".to_string(),
        methods: vec![
            MethodInfo {
                name: "plus".to_string(),
                return_type: "Int".to_string(),
                parameters: vec![ParameterInfo {
                    name: "i".to_string(),
                    param_type: "Int".to_string(),
                }],
                is_const: true,
            },
            MethodInfo {
                name: "value".to_string(),
                return_type: "int".to_string(),
                parameters: vec![],
                is_const: true,
            },
        ],
    };
    ApiClassDescriptor {
        api_class: class.clone(),
        impls: vec![class],
    }
}

pub fn named_class(name: &str) -> ApiClassDescriptor {
    ApiClassDescriptor {
        api_class: ClassInfo::named(name),
        impls: vec![],
    }
}
