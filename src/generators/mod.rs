pub mod default;
pub mod registry;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::interface::config::GenerateConfig;
use crate::models::ApiClassDescriptor;
use crate::templates::TemplateEngine;

pub use default::DefaultGenerator;
pub use registry::GeneratorRegistry;

/// A generator routine: everything that can turn a binding name plus a class
/// model into output files.
///
/// Implemented by [`DefaultGenerator`] and by any routine a plugin registers.
/// Routines receive the whole configuration object but by convention only
/// depend on `module_name`; the engine handle is how they reach templates.
/// The returned path is the routine's primary output file.
pub trait Generator: Send + Sync {
    fn generate(
        &self,
        binding: &str,
        classes: &[ApiClassDescriptor],
        engine: &dyn TemplateEngine,
        config: &GenerateConfig,
        output_dir: &Path,
    ) -> Result<PathBuf>;
}
