use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateConfig {
    /// Base name composed into every output file name.
    #[serde(default)]
    pub module_name: String,

    /// Path to the class-model JSON written by the upstream parser stage.
    #[serde(default = "default_class_model_path")]
    pub class_model_path: String,

    /// Directory holding the `*.tmpl` templates.
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// Directory generated bindings are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Bindings to generate, in request order.
    #[serde(default)]
    pub bindings: Vec<String>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: Option<bool>,
}

fn default_class_model_path() -> String {
    "./classes.json".to_string()
}

fn default_template_dir() -> String {
    "./templates".to_string()
}

fn default_output_dir() -> String {
    "./generated".to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            module_name: String::new(),
            class_model_path: default_class_model_path(),
            template_dir: default_template_dir(),
            output_dir: default_output_dir(),
            bindings: vec![],
            verbose: Some(false),
        }
    }
}

impl GenerateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration before any generation starts.
    pub fn validate(&self) -> Result<()> {
        if self.module_name.is_empty() {
            return Err(Error::InvalidConfig("module name is empty".to_string()));
        }
        if self.module_name.contains(['/', '\\']) {
            return Err(Error::InvalidConfig(format!(
                "module name '{}' must not contain path separators",
                self.module_name
            )));
        }
        if self.bindings.is_empty() {
            return Err(Error::InvalidConfig(
                "no bindings requested".to_string(),
            ));
        }
        if !Path::new(&self.template_dir).is_dir() {
            return Err(Error::InvalidConfig(format!(
                "template directory does not exist: {}",
                self.template_dir
            )));
        }
        Ok(())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}
