use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::pointer::PointerType;
use crate::target::OutputTarget;
use crate::transform::TransformChain;

/// Configuration file looked up in the project root when none is given
pub const DEFAULT_CONFIG_FILE: &str = "pointer-tokens.toml";

/// Build configuration, fixed before the build starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Token sources, merged in order
    pub source: Vec<PathBuf>,

    /// Directory receiving `<type>.css`
    pub build_path: PathBuf,

    /// Emit `var(--ref)` for referencing tokens instead of resolved values
    pub output_references: bool,

    /// Emit the generated-file header comment
    pub file_header: bool,

    /// Optional prefix for every generated custom-property name
    pub prefix: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: vec![
                PathBuf::from("tokens/size.json"),
                PathBuf::from("tokens/size-core.json"),
            ],
            build_path: PathBuf::from("build"),
            output_references: true,
            file_header: true,
            prefix: None,
        }
    }
}

impl BuildConfig {
    /// Load from a JSON or TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| BuildError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, path)
    }

    /// Parse JSON first, then TOML. `origin` only feeds error messages.
    pub fn from_bytes(bytes: &[u8], origin: &Path) -> Result<Self> {
        let parse_error = |message: String| BuildError::ConfigParse {
            path: origin.to_path_buf(),
            message,
        };

        let config = match serde_json::from_slice::<Self>(bytes) {
            Ok(config) => config,
            Err(json_err) => {
                let utf8 = std::str::from_utf8(bytes)
                    .map_err(|err| parse_error(format!("{json_err}; {err}")))?;
                toml::from_str::<Self>(utf8).map_err(|toml_err| {
                    parse_error(format!(
                        "not valid JSON ({json_err}); TOML parse error: {toml_err}"
                    ))
                })?
            }
        };
        config.validate().map_err(BuildError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.source.is_empty() {
            return Err("source must list at least one token file".to_string());
        }
        if self.build_path.as_os_str().is_empty() {
            return Err("build_path must not be empty".to_string());
        }
        if self.prefix.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err("prefix must not be blank".to_string());
        }
        Ok(())
    }

    /// Same configuration with relative paths anchored at `root`
    #[must_use]
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.source = self.source.iter().map(|p| root.join(p)).collect();
        self.build_path = root.join(&self.build_path);
        self
    }

    /// One target per pointer type
    #[must_use]
    pub fn targets(&self) -> Vec<OutputTarget> {
        PointerType::ALL
            .into_iter()
            .map(|pointer| {
                OutputTarget::for_pointer(
                    &self.build_path,
                    pointer,
                    self.output_references,
                    self.file_header,
                )
            })
            .collect()
    }

    #[must_use]
    pub fn transforms(&self) -> TransformChain {
        TransformChain::pointer_media(self.prefix.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<BuildConfig> {
        BuildConfig::from_bytes(text.as_bytes(), Path::new("pointer-tokens.toml"))
    }

    #[test]
    fn test_default_config_valid() {
        assert!(BuildConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_toml_with_defaults_for_missing_keys() {
        let config = parse("source = [\"a.json\"]\noutput_references = false\n").unwrap();
        assert_eq!(config.source, vec![PathBuf::from("a.json")]);
        assert!(!config.output_references);
        assert_eq!(config.build_path, PathBuf::from("build"));
        assert!(config.file_header);
    }

    #[test]
    fn parses_json() {
        let config = parse(r#"{ "build_path": "dist/css", "prefix": "ds" }"#).unwrap();
        assert_eq!(config.build_path, PathBuf::from("dist/css"));
        assert_eq!(config.prefix.as_deref(), Some("ds"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = parse("pointers = [\"hover\"]\n").unwrap_err();
        assert!(matches!(err, BuildError::ConfigParse { .. }));
    }

    #[test]
    fn rejects_empty_sources() {
        let err = parse("source = []\n").unwrap_err();
        assert!(matches!(err, BuildError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = BuildConfig::default();

        config.build_path = PathBuf::new();
        assert!(config.validate().is_err());

        config.build_path = PathBuf::from("build");
        config.prefix = Some("  ".to_string());
        assert!(config.validate().is_err());

        config.prefix = Some("ds".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn targets_cover_every_pointer_type() {
        let config = BuildConfig::default().rooted_at(Path::new("/project"));
        let destinations: Vec<_> = config.targets().into_iter().map(|t| t.destination).collect();
        assert_eq!(
            destinations,
            vec![
                PathBuf::from("/project/build/coarse.css"),
                PathBuf::from("/project/build/fine.css"),
            ]
        );
        assert_eq!(config.source[0], PathBuf::from("/project/tokens/size.json"));
    }
}
