use thiserror::Error;

/// A location handle that could not be mapped to a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("unsupported '{scheme}' resource url: {url}")]
    UnsupportedScheme { scheme: String, url: String },

    #[error("could not determine code source for '{name}' from url {url}")]
    UnknownCodeSource { name: String, url: String },
}
