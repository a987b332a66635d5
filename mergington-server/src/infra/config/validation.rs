use axum::http::HeaderValue;
use thiserror::Error;

use super::models::{Config, CorsConfig};

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("CORS wildcard origins are not allowed when DEV_MODE is false")]
    DangerousCorsWildcard,
    #[error("invalid CORS origin `{origin}`")]
    InvalidCorsOrigin { origin: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if !config.dev_mode && config.cors.is_wildcard_included() {
        return Err(ConfigGuardRailError::DangerousCorsWildcard);
    }

    validate_cors(&config.cors)?;

    if config.cors.allow_credentials && config.cors.is_wildcard_included() {
        warnings.push(
            "CORS credentials allowed alongside wildcard origin; browsers will reject such configuration",
        );
    }

    if !config.static_dir().is_dir() {
        warnings.push_with_hint(
            format!(
                "static directory {} does not exist; the landing page will return 404",
                config.static_dir().display()
            ),
            "Set STATIC_DIR or static_files.dir to the frontend directory",
        );
    }

    Ok(warnings)
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    for origin in &cors.allowed_origins {
        if origin.trim() == "*" {
            continue;
        }
        HeaderValue::from_str(origin).map_err(|_| {
            ConfigGuardRailError::InvalidCorsOrigin {
                origin: origin.clone(),
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::models::StaticFilesConfig;

    fn config_with_static(dir: &std::path::Path) -> Config {
        Config {
            static_files: StaticFilesConfig {
                dir: dir.to_path_buf(),
            },
            ..Config::default()
        }
    }

    #[test]
    fn wildcard_rejected_outside_dev_mode() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config_with_static(tmp.path());
        config.cors.allowed_origins = vec!["*".into()];

        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::DangerousCorsWildcard)
        ));

        config.dev_mode = true;
        assert!(apply_guard_rails(&config).is_ok());
    }

    #[test]
    fn invalid_origin_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config_with_static(tmp.path());
        config.cors.allowed_origins = vec!["http://bad\norigin".into()];

        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvalidCorsOrigin { .. })
        ));
    }

    #[test]
    fn missing_static_dir_is_a_warning() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_static(&tmp.path().join("absent"));

        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].message.contains("static directory"));
        assert!(warnings.items[0].hint.is_some());
    }

    #[test]
    fn existing_static_dir_has_no_warnings() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_static(tmp.path());
        assert!(apply_guard_rails(&config).unwrap().is_empty());
    }
}
