use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::generators::Generator;
use crate::interface::config::GenerateConfig;
use crate::models::ApiClassDescriptor;
use crate::templates::{class_context, TemplateEngine};

/// Marker suffix that identifies template files; stripped when deriving the
/// output file name.
const TEMPLATE_SUFFIX: &str = ".tmpl";

/// The generator routine used when no plugin claims a binding.
///
/// Appropriate for simple bindings that produce a single output file: the
/// binding name is the template name, every class renders through the same
/// template, and the concatenated text lands in one file under the output
/// directory.
pub struct DefaultGenerator;

impl DefaultGenerator {
    /// Render the template once per descriptor and concatenate in input
    /// order. Templates supply their own boundaries; nothing is inserted
    /// between renders.
    fn render_api_classes(
        binding: &str,
        classes: &[ApiClassDescriptor],
        engine: &dyn TemplateEngine,
    ) -> Result<String> {
        let mut output = String::new();
        for descriptor in classes {
            output.push_str(&engine.render(binding, &class_context(descriptor))?);
        }
        Ok(output)
    }
}

impl Generator for DefaultGenerator {
    fn generate(
        &self,
        binding: &str,
        classes: &[ApiClassDescriptor],
        engine: &dyn TemplateEngine,
        config: &GenerateConfig,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        // Resolve before rendering anything: a missing template must fail
        // without creating an output file, even for an empty class model.
        if !engine.has_template(binding) {
            return Err(Error::TemplateNotFound(binding.to_string()));
        }

        let output = Self::render_api_classes(binding, classes, engine)?;

        let file_name = output_file_name(&config.module_name, &template_name(binding));
        fs::create_dir_all(output_dir)?;
        let output_path = output_dir.join(file_name);
        fs::write(&output_path, output)?;

        Ok(output_path)
    }
}

/// Template short name for a binding: basename with the `.tmpl` marker
/// stripped.
pub(crate) fn template_name(binding: &str) -> String {
    let base = Path::new(binding)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| binding.to_string());
    base.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(&base).to_string()
}

/// Output file name for a template short name: the short name splits on its
/// last `.` into `{middle, extension}` and composes as
/// `{module_name}{middle}.{extension}`, so `Foo.h` plus module `MyModule`
/// becomes `MyModuleFoo.h`.
pub(crate) fn output_file_name(module_name: &str, template_name: &str) -> String {
    match template_name.rsplit_once('.') {
        Some((middle, extension)) => format!("{}{}.{}", module_name, middle, extension),
        None => format!("{}.{}", module_name, template_name),
    }
}
