//! # apigen
//!
//! Dispatch core of a multi-target binding-generation front end.
//!
//! Given a logical *binding* name and a class model (the API classes an
//! upstream parser extracted from annotated source interfaces), `apigen`
//! decides which generator routine produces the output files. Bindings with
//! no custom routine go through the built-in default pipeline: resolve the
//! binding's template, render it once per API class, and write the
//! concatenated result to a single file in the output directory.
//!
//! ## Quick Start
//!
//! ### As a CLI Tool
//!
//! ```bash
//! apigen generate -m MyModule -i classes.json -t templates/ -o generated/ \
//!     -b Foo.h.tmpl -b py.py.tmpl
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use apigen::{generate_from_config, GenerateConfig};
//!
//! let config = GenerateConfig {
//!     module_name: "MyModule".to_string(),
//!     class_model_path: "./classes.json".to_string(),
//!     template_dir: "./templates".to_string(),
//!     output_dir: "./generated".to_string(),
//!     bindings: vec!["Foo.h.tmpl".to_string()],
//!     ..Default::default()
//! };
//!
//! let written = generate_from_config(&config)?;
//! # Ok::<(), apigen::Error>(())
//! ```
//!
//! ## Custom generators
//!
//! A binding that needs more than one output file, or a different layout
//! altogether, registers its own routine through a [`Plugin`]:
//!
//! ```rust,no_run
//! use apigen::{
//!     ApiClassDescriptor, GenerateConfig, Generator, GeneratorRegistry, Plugin,
//!     TemplateEngine,
//! };
//! use std::path::{Path, PathBuf};
//! use std::sync::Arc;
//!
//! struct PackageRoutine;
//!
//! impl Generator for PackageRoutine {
//!     fn generate(
//!         &self,
//!         binding: &str,
//!         classes: &[ApiClassDescriptor],
//!         engine: &dyn TemplateEngine,
//!         config: &GenerateConfig,
//!         output_dir: &Path,
//!     ) -> apigen::Result<PathBuf> {
//!         // write a package layout instead of a single file
//!         # let _ = (binding, classes, engine, config);
//!         Ok(output_dir.to_path_buf())
//!     }
//! }
//!
//! struct PackagePlugin;
//!
//! impl Plugin for PackagePlugin {
//!     fn name(&self) -> &str {
//!         "package"
//!     }
//!
//!     fn setup(&self, registry: &mut GeneratorRegistry) -> apigen::Result<()> {
//!         registry.register(Arc::new(PackageRoutine), ["py.py.tmpl"]);
//!         Ok(())
//!     }
//! }
//! ```
//!
//! Plugins form an explicit, ordered manifest; when two plugins claim the
//! same binding, the later registration wins.

pub mod generators;
pub mod interface;
pub mod models;
pub mod plugins;
pub mod templates;

mod error;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use generators::{DefaultGenerator, Generator, GeneratorRegistry};
pub use interface::config::GenerateConfig;
pub use interface::output::{Logger, ProgressReporter};
pub use interface::{generate_from_config, generate_with_plugins};
pub use plugins::{Plugin, PluginLoader};
pub use templates::{class_context, TemplateEngine, TeraEngine};
