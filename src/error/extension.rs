use thiserror::Error;

/// Reasons an extension refuses to load.
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// A command with the same name was already registered by an earlier extension.
    #[error("Command '{command}' is already registered by extension '{owner}'")]
    DuplicateCommand {
        /// Name of the clashing command
        command: String,
        /// Extension that registered the command first
        owner: String,
    },

    /// The extension needs a setting that is not configured.
    #[error("Extension requires setting {0}")]
    MissingSetting(String),
}
