// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No host surface is attached to render banners into.
    ///
    /// This is a programmer error: the host must attach a surface before
    /// presenting anything.
    NoHostSurface,
    Io(String),
    Config(String),
}

impl Error {
    /// Returns the message key used when this error is surfaced to the user.
    pub fn message_key(&self) -> &'static str {
        match self {
            Error::NoHostSurface => "snack-error-no-host-surface",
            Error::Io(_) => "snack-error-io",
            Error::Config(_) => "snack-error-config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoHostSurface => write!(f, "No host surface available to present banners"),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn no_host_surface_mentions_surface() {
        let message = Error::NoHostSurface.to_string();
        assert!(message.contains("host surface"));
    }

    #[test]
    fn message_keys_are_distinct() {
        assert_ne!(
            Error::NoHostSurface.message_key(),
            Error::Io(String::new()).message_key()
        );
        assert_ne!(
            Error::Io(String::new()).message_key(),
            Error::Config(String::new()).message_key()
        );
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
