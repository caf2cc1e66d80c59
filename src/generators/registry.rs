use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;
use crate::generators::{DefaultGenerator, Generator};
use crate::interface::config::GenerateConfig;
use crate::interface::output::Logger;
use crate::models::ApiClassDescriptor;
use crate::templates::TemplateEngine;

/// Maps binding names to the routine that generates them.
///
/// One registry is constructed per run and threaded by reference: plugins
/// write to it during the loading phase, generation reads from it afterward.
/// Bindings with no registered routine fall back to [`DefaultGenerator`].
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn Generator>>,
    logger: Logger,
}

impl GeneratorRegistry {
    pub fn new(logger: Logger) -> Self {
        Self {
            generators: HashMap::new(),
            logger,
        }
    }

    /// Associate `routine` with every binding in `bindings`.
    ///
    /// A later registration for a binding replaces the earlier one; the
    /// override is logged as a warning since it usually means two plugins
    /// claim the same binding.
    pub fn register<I, S>(&mut self, routine: Arc<dyn Generator>, bindings: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for binding in bindings {
            let binding = binding.into();
            if self
                .generators
                .insert(binding.clone(), Arc::clone(&routine))
                .is_some()
            {
                self.logger.warning(&format!(
                    "Overriding previously registered generator for binding '{}'",
                    binding
                ));
            }
        }
    }

    /// Generate the named binding, dispatching to the registered routine or
    /// to the default pipeline. Errors from the selected routine propagate
    /// unchanged.
    pub fn generate(
        &self,
        binding: &str,
        classes: &[ApiClassDescriptor],
        engine: &dyn TemplateEngine,
        config: &GenerateConfig,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        self.logger
            .verbose(&format!("Finding generator for {}", binding));
        match self.generators.get(binding) {
            Some(routine) => {
                self.logger.verbose("  found a registered routine");
                routine.generate(binding, classes, engine, config, output_dir)
            }
            None => {
                self.logger.verbose("  using the default pipeline");
                DefaultGenerator.generate(binding, classes, engine, config, output_dir)
            }
        }
    }

    /// Whether a custom routine is registered for `binding`.
    pub fn contains(&self, binding: &str) -> bool {
        self.generators.contains_key(binding)
    }

    /// All bindings with a custom routine, for diagnostics.
    pub fn bindings(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new(Logger::default())
    }
}
