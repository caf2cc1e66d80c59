use crate::interface::config::GenerateConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apigen")]
#[command(version, about = "Generate multi-language API bindings from a parsed class model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate bindings for one or more targets
    Generate {
        /// Module base name composed into every output file name
        #[arg(short = 'm', long = "module-name", default_value = "")]
        module_name: String,

        /// Path to the class-model JSON produced by the parser stage
        #[arg(short = 'i', long = "class-model", default_value = "./classes.json")]
        class_model: PathBuf,

        /// Directory holding the *.tmpl templates
        #[arg(short = 't', long = "template-dir", default_value = "./templates")]
        template_dir: PathBuf,

        /// Output directory for generated bindings
        #[arg(short = 'o', long = "output-dir", default_value = "./generated")]
        output_dir: PathBuf,

        /// Binding to generate; repeat the flag for multiple targets
        #[arg(short = 'b', long = "binding")]
        bindings: Vec<String>,

        /// Configuration file path; overrides the other flags when present
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,
    },
}

impl From<&Commands> for GenerateConfig {
    fn from(cmd: &Commands) -> Self {
        match cmd {
            Commands::Generate {
                module_name,
                class_model,
                template_dir,
                output_dir,
                bindings,
                verbose,
                ..
            } => GenerateConfig {
                module_name: module_name.clone(),
                class_model_path: class_model.to_string_lossy().to_string(),
                template_dir: template_dir.to_string_lossy().to_string(),
                output_dir: output_dir.to_string_lossy().to_string(),
                bindings: bindings.clone(),
                verbose: Some(*verbose),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_config_from_cli() {
        let cmd = Commands::Generate {
            module_name: "MyModule".to_string(),
            class_model: PathBuf::from("./model.json"),
            template_dir: PathBuf::from("./tmpl"),
            output_dir: PathBuf::from("./out"),
            bindings: vec!["Foo.h.tmpl".to_string(), "py.py.tmpl".to_string()],
            config_file: None,
            verbose: true,
        };

        let config = GenerateConfig::from(&cmd);
        assert_eq!(config.module_name, "MyModule");
        assert_eq!(config.class_model_path, "./model.json");
        assert_eq!(config.template_dir, "./tmpl");
        assert_eq!(config.output_dir, "./out");
        assert_eq!(
            config.bindings,
            vec!["Foo.h.tmpl".to_string(), "py.py.tmpl".to_string()]
        );
        assert!(config.is_verbose());
    }

    #[test]
    fn test_cli_parses_repeated_bindings() {
        let cli = Cli::try_parse_from([
            "apigen", "generate", "-m", "M", "-b", "Foo.h.tmpl", "-b", "py.py.tmpl",
        ])
        .unwrap();

        let Commands::Generate { bindings, .. } = &cli.command;
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["apigen", "generate", "-m", "M"]).unwrap();
        let config = GenerateConfig::from(&cli.command);
        assert_eq!(config.class_model_path, "./classes.json");
        assert_eq!(config.template_dir, "./templates");
        assert_eq!(config.output_dir, "./generated");
        assert!(!config.is_verbose());
    }
}
