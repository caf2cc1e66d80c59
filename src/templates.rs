use std::path::Path;
use tera::{Context, Tera};

use crate::error::{Error, Result};
use crate::models::ApiClassDescriptor;

/// Template lookup and rendering as the generation core consumes it.
///
/// Generator routines receive an engine handle and never touch the concrete
/// engine type, so tests (and embedding front ends) can substitute their own
/// template source.
pub trait TemplateEngine {
    /// Whether `name` resolves to a known template.
    fn has_template(&self, name: &str) -> bool;

    /// Render the template called `name` against `context`.
    fn render(&self, name: &str, context: &Context) -> Result<String>;
}

/// The stock engine, backed by [`tera`].
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    /// Load every `*.tmpl` template under `dir`.
    ///
    /// Template names are paths relative to `dir`, so a binding name like
    /// `Foo.h.tmpl` addresses `dir/Foo.h.tmpl`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let glob = format!("{}/**/*.tmpl", dir.as_ref().display());
        let tera = Tera::new(&glob)?;
        Ok(Self { tera })
    }

    /// Wrap a preconfigured engine (templates registered by hand).
    pub fn new(tera: Tera) -> Self {
        Self { tera }
    }
}

impl TemplateEngine for TeraEngine {
    fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    fn render(&self, name: &str, context: &Context) -> Result<String> {
        if !self.has_template(name) {
            return Err(Error::TemplateNotFound(name.to_string()));
        }
        Ok(self.tera.render(name, context)?)
    }
}

/// Build the render context for one descriptor.
///
/// Templates see the API class as `class` and its implementation classes as
/// `impl_classes`; this shape is the contract with every shipped template.
pub fn class_context(descriptor: &ApiClassDescriptor) -> Context {
    let mut context = Context::new();
    context.insert("class", &descriptor.api_class);
    context.insert("impl_classes", &descriptor.impls);
    context
}
