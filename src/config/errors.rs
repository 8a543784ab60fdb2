use std::{error::Error, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not read config file {}: {source}", path.display())
            }
            Self::Parse(source) => write!(f, "config file is not valid TOML: {source}"),
            Self::Invalid { field, reason } => write!(f, "invalid config value `{field}`: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(source) => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(source: toml::de::Error) -> Self {
        Self::Parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_names_field_and_reason() {
        let error = ConfigError::Invalid {
            field: "zoom.zoom_in_factor",
            reason: "must be between 0 and 1",
        };

        assert_eq!(
            error.to_string(),
            "invalid config value `zoom.zoom_in_factor`: must be between 0 and 1"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn io_error_keeps_source() {
        let error = ConfigError::Io {
            path: PathBuf::from("missing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        assert!(error.to_string().starts_with("could not read config file missing.toml"));
        assert!(error.source().is_some());
    }
}
