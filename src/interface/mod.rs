pub mod cli;
pub mod config;
pub mod output;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::generators::GeneratorRegistry;
use crate::models::load_class_model;
use crate::plugins::{self, Plugin, PluginLoader};
use crate::templates::TeraEngine;

pub use cli::*;
pub use config::*;
pub use output::*;

/// Generate every requested binding using the compiled-in plugin manifest.
pub fn generate_from_config(config: &config::GenerateConfig) -> Result<Vec<PathBuf>> {
    generate_with_plugins(config, &plugins::builtin())
}

/// Generate every requested binding, activating `plugins` on top of the
/// default pipeline.
///
/// This is the whole run: validate, load the class model, build the
/// template engine, populate the registry (startup phase, fatal on error),
/// then dispatch one `generate` per binding. The returned paths are the
/// written output files, in request order.
pub fn generate_with_plugins(
    config: &config::GenerateConfig,
    plugins: &[Box<dyn Plugin>],
) -> Result<Vec<PathBuf>> {
    let logger = output::Logger::new(config.is_verbose());

    config.validate()?;

    let classes = load_class_model(&config.class_model_path)?;
    logger.verbose(&format!(
        "Loaded {} API classes from {}",
        classes.len(),
        config.class_model_path
    ));

    let engine = TeraEngine::from_dir(Path::new(&config.template_dir))?;

    let mut registry = GeneratorRegistry::new(logger.clone());
    PluginLoader::new(logger.clone()).load(&mut registry, plugins)?;
    if !registry.bindings().is_empty() {
        logger.verbose(&format!(
            "Custom generators registered for: {}",
            registry.bindings().join(", ")
        ));
    }

    let output_dir = Path::new(&config.output_dir);
    let mut reporter = output::ProgressReporter::new(logger.clone(), config.bindings.len());
    let mut written = Vec::with_capacity(config.bindings.len());
    for binding in &config.bindings {
        reporter.start_step(&format!("Generating {}", binding));
        let path = registry.generate(binding, &classes, &engine, config, output_dir)?;
        logger.verbose(&format!("  wrote {}", path.display()));
        written.push(path);
    }
    reporter.finish(&format!(
        "Generated {} binding file{} in {}",
        written.len(),
        if written.len() == 1 { "" } else { "s" },
        config.output_dir
    ));

    Ok(written)
}
