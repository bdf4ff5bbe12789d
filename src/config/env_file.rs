use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Read from the working directory only; parent directories are not searched.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Loads `KEY=VALUE` pairs into the process environment. Variables that are
/// already set keep their value. A missing or malformed file is an error even
/// when every setting is also given on the command line.
pub fn load(path: Option<&Path>) -> Result<PathBuf> {
    let loaded = path.unwrap_or_else(|| Path::new(DEFAULT_ENV_FILE));
    dotenvy::from_path(loaded)?;

    tracing::debug!("Loaded environment from {}", loaded.display());
    Ok(loaded.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::QuoteError;
    use std::io::Write;

    #[test]
    fn test_load_exports_variables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DISCORD_QUOTES_ENV_FILE_TEST=from-file").unwrap();

        let loaded = load(Some(file.path())).unwrap();

        assert_eq!(loaded, file.path());
        assert_eq!(
            std::env::var("DISCORD_QUOTES_ENV_FILE_TEST").unwrap(),
            "from-file"
        );
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("absent.env"))).unwrap_err();
        assert!(matches!(err, QuoteError::EnvironmentLoadError(_)));
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NOT A VALID LINE").unwrap();

        let err = load(Some(file.path())).unwrap_err();
        assert!(matches!(err, QuoteError::EnvironmentLoadError(_)));
    }
}
