use thiserror::Error;

/// Failures while loading the embedded Fluent resources.
#[derive(Error, Debug)]
pub enum LocaleError {
    /// A resource has Fluent syntax errors.
    #[error("Failed to parse locale resource {file}: {errors}")]
    Parse {
        /// Resource path relative to `locales/`
        file: String,
        errors: String,
    },

    /// A resource could not be added to its bundle, usually a duplicate message id.
    #[error("Failed to add locale resource {file}: {errors}")]
    Resource { file: String, errors: String },
}
