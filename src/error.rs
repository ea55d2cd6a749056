//! Error types for Glint UI
//!
//! Rendering itself never fails. Errors only come from element registration
//! and from reading or writing the theme file.

use snafu::Snafu;

/// Main error type for the library
#[derive(Debug, Snafu)]
pub enum Error {
    /// Tag name is not a valid custom element name
    #[snafu(display("Invalid tag name: {tag}"))]
    InvalidTagName { tag: String },

    /// Tag name was already registered
    #[snafu(display("Element already defined: {tag}"))]
    AlreadyDefined { tag: String },

    /// Factory builds an element whose own tag differs from the defined one
    #[snafu(display("Element defined as {tag} reports tag {actual}"))]
    TagMismatch { tag: String, actual: String },

    /// No factory registered for the tag
    #[snafu(display("Unknown element: {tag}"))]
    UnknownTag { tag: String },

    /// Could not determine a configuration directory
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (theme file access)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
