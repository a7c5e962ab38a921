//! Environment configuration, read once at cold start

use std::env;
use std::time::Duration;

use gallery_atoms::GallerySettings;
use thiserror::Error;

pub const GROUPS_TABLE: &str = "GROUPS_TABLE";
pub const IMAGES_TABLE: &str = "IMAGES_TABLE";
pub const IMAGES_S3_BUCKET: &str = "IMAGES_S3_BUCKET";
pub const SIGNED_URL_EXPIRATION: &str = "SIGNED_URL_EXPIRATION";

/// S3 refuses to presign for longer than seven days
pub const MAX_URL_EXPIRATION_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("SIGNED_URL_EXPIRATION must be a whole number of seconds, got {0:?}")]
    InvalidExpiration(String),

    #[error(
        "SIGNED_URL_EXPIRATION must be between 1 and {max} seconds, got {0}",
        max = MAX_URL_EXPIRATION_SECS
    )]
    ExpirationOutOfRange(u64),
}

/// Load settings from the process environment
///
/// # Errors
///
/// Returns `ConfigError` if a variable is missing or the expiration is invalid
pub fn load_settings() -> Result<GallerySettings, ConfigError> {
    settings_from(|name| env::var(name).ok())
}

/// Build settings from any variable lookup
///
/// # Errors
///
/// Returns `ConfigError` if a variable is missing or the expiration is invalid
pub fn settings_from<F>(lookup: F) -> Result<GallerySettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &'static str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(name))
    };

    let raw_expiration = required(SIGNED_URL_EXPIRATION)?;

    Ok(GallerySettings {
        groups_table: required(GROUPS_TABLE)?,
        images_table: required(IMAGES_TABLE)?,
        bucket_name: required(IMAGES_S3_BUCKET)?,
        url_expiration: parse_expiration(&raw_expiration)?,
    })
}

fn parse_expiration(raw: &str) -> Result<Duration, ConfigError> {
    let secs = raw
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidExpiration(raw.to_string()))?;

    if secs == 0 || secs > MAX_URL_EXPIRATION_SECS {
        return Err(ConfigError::ExpirationOutOfRange(secs));
    }

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn complete() -> HashMap<String, String> {
        vars(&[
            (GROUPS_TABLE, "Groups-dev"),
            (IMAGES_TABLE, "Images-dev"),
            (IMAGES_S3_BUCKET, "gallery-images-dev"),
            (SIGNED_URL_EXPIRATION, "300"),
        ])
    }

    #[test]
    fn test_settings_from_complete_env() {
        let env = complete();
        let settings = settings_from(|k| env.get(k).cloned()).unwrap();

        assert_eq!(
            settings,
            GallerySettings {
                groups_table: "Groups-dev".into(),
                images_table: "Images-dev".into(),
                bucket_name: "gallery-images-dev".into(),
                url_expiration: Duration::from_secs(300),
            }
        );
    }

    #[test]
    fn test_missing_variables() {
        for name in [GROUPS_TABLE, IMAGES_TABLE, IMAGES_S3_BUCKET, SIGNED_URL_EXPIRATION] {
            let mut env = complete();
            env.remove(name);
            assert_eq!(
                settings_from(|k| env.get(k).cloned()),
                Err(ConfigError::Missing(name))
            );
        }
    }

    #[test]
    fn test_blank_variable_is_missing() {
        let mut env = complete();
        env.insert(IMAGES_S3_BUCKET.into(), "  ".into());

        assert_eq!(
            settings_from(|k| env.get(k).cloned()),
            Err(ConfigError::Missing(IMAGES_S3_BUCKET))
        );
    }

    #[test]
    fn test_non_numeric_expiration() {
        let mut env = complete();
        env.insert(SIGNED_URL_EXPIRATION.into(), "five minutes".into());

        assert_eq!(
            settings_from(|k| env.get(k).cloned()),
            Err(ConfigError::InvalidExpiration("five minutes".into()))
        );
    }

    #[test]
    fn test_expiration_bounds() {
        assert_eq!(parse_expiration("0"), Err(ConfigError::ExpirationOutOfRange(0)));
        assert_eq!(
            parse_expiration("604801"),
            Err(ConfigError::ExpirationOutOfRange(604_801))
        );
        assert_eq!(parse_expiration("604800"), Ok(Duration::from_secs(604_800)));
        assert_eq!(parse_expiration("1"), Ok(Duration::from_secs(1)));
        assert!(matches!(
            parse_expiration("-5"),
            Err(ConfigError::InvalidExpiration(_))
        ));
    }
}
