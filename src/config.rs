use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OriError, Result};
use crate::genome::window::BoundaryPolicy;

/// Parameters of one oriC search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Motif length
    pub k: usize,
    /// Substitutions allowed per motif occurrence
    pub max_mismatches: usize,
    /// Window extracted around each skew minimum
    pub window_length: usize,
    pub boundary: BoundaryPolicy,
    /// Score candidates on the Rayon pool
    pub parallel: bool,
    /// Abort on the first failing window instead of skipping it
    pub fail_fast: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        // DnaA boxes are 9-mers; 500 bp covers a typical oriC
        Self {
            k: 9,
            max_mismatches: 1,
            window_length: 500,
            boundary: BoundaryPolicy::default(),
            parallel: true,
            fail_fast: false,
        }
    }
}

impl FinderConfig {
    /// Load a JSON config; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: FinderConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(OriError::InvalidParameters(
                "k-mer length must be positive".to_string(),
            ));
        }
        if self.window_length == 0 {
            return Err(OriError::InvalidParameters(
                "window length must be positive".to_string(),
            ));
        }
        if self.k > self.window_length {
            return Err(OriError::InvalidParameters(format!(
                "k-mer length {} exceeds window length {}",
                self.k, self.window_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FinderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_k() {
        let config = FinderConfig { k: 0, ..Default::default() };
        assert!(config.validate().unwrap_err().is_parameter_error());

        let config = FinderConfig { k: 20, window_length: 10, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FinderConfig =
            serde_json::from_str(r#"{"k": 5, "boundary": "wrap"}"#).unwrap();
        assert_eq!(config.k, 5);
        assert_eq!(config.boundary, BoundaryPolicy::Wrap);
        assert_eq!(config.window_length, 500);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{"k": 4, "max_mismatches": 0, "window_length": 40}"#).unwrap();
        let config = FinderConfig::from_json_file(file.path()).unwrap();
        assert_eq!((config.k, config.max_mismatches, config.window_length), (4, 0, 40));
        assert!(config.parallel);
    }

    #[test]
    fn test_from_json_file_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{"k": 0}"#).unwrap();
        assert!(FinderConfig::from_json_file(file.path()).is_err());
    }
}
