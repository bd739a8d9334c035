use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Missing form relay access key (set FOLIO_ACCESS_KEY or access_key in folio.toml)")]
    MissingAccessKey,

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Task join error: {0}")]
    TaskJoin(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", Error::NoHomeDir), "No home directory");
        assert_eq!(
            format!("{}", Error::InvalidTheme("blue".to_string())),
            "Invalid theme: blue"
        );
    }

    #[test]
    fn test_missing_access_key_mentions_env_var() {
        assert!(Error::MissingAccessKey.to_string().contains("FOLIO_ACCESS_KEY"));
    }
}
