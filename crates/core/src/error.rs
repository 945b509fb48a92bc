use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Raised by the sufficiency check; the message is shown to the user verbatim.
    #[error("{}", .0)]
    InsufficientOptions(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No commands were found in the command definition YAML. Is `{}` empty?", .path)]
    EmptyCommandDefinition { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Found a non-unique command name: `{}`", .0)]
    NonUniqueCommandName(String),

    #[error("Found a non-unique parameter name on command {}: `{}`", .0, .1)]
    NonUniqueParameterName(String, String),

    #[error("Invalid name: name may not be empty")]
    EmptyName,

    #[error("Invalid name `{}`: name may not contain spaces", .0)]
    NameWithSpace(String),

    #[error("Command not found: `{}`", .0)]
    CommandNotFound(String),

    #[error("Invalid option `{}`: expected the format key=value", .0)]
    ParameterFormat(String),
}

impl Error {
    pub fn empty_command_definition(path: String) -> Self {
        Self::EmptyCommandDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
