pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template rendering failed: {0}")]
    Template(#[from] tera::Error),

    #[error("Code generation failed: {0}")]
    Generation(String),

    #[error("Plugin activation failed: {0}")]
    Plugin(String),

    #[error("Invalid class model: {0}")]
    ClassModel(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
