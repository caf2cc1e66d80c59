use crate::error::{Error, Result};
use crate::generators::GeneratorRegistry;
use crate::interface::output::Logger;

/// A generator plugin: a compiled-in unit that claims one or more bindings.
///
/// Plugins are collected in an explicit, ordered manifest rather than
/// discovered at runtime. When two plugins claim the same binding, the one
/// later in the manifest wins.
pub trait Plugin: Send + Sync {
    /// Stable identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Registration hook: expected to call
    /// [`GeneratorRegistry::register`] zero or more times.
    fn setup(&self, registry: &mut GeneratorRegistry) -> Result<()>;
}

/// Activates every plugin of a manifest against the run's registry.
pub struct PluginLoader {
    logger: Logger,
}

impl PluginLoader {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Invoke each plugin's registration hook in manifest order.
    ///
    /// Any hook failure is fatal: loading stops at the first error and the
    /// registry must not be used for generation afterwards. There is no
    /// partial activation.
    pub fn load(&self, registry: &mut GeneratorRegistry, plugins: &[Box<dyn Plugin>]) -> Result<()> {
        for plugin in plugins {
            self.logger
                .verbose(&format!("Activating plugin {}", plugin.name()));
            plugin
                .setup(registry)
                .map_err(|e| Error::Plugin(format!("{}: {}", plugin.name(), e)))?;
        }
        Ok(())
    }
}

/// The compiled-in plugin manifest.
///
/// Every stock binding is a single-file template served by the default
/// pipeline, so nothing ships here; embedding front ends append their own
/// plugins before calling [`PluginLoader::load`].
pub fn builtin() -> Vec<Box<dyn Plugin>> {
    Vec::new()
}
