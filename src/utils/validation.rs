use crate::domain::model::BadgeTemplate;
use crate::utils::error::{BadgeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BadgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BadgeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BadgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BadgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BadgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BadgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BadgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Target ids become file names, so path separators are refused.
pub fn validate_target(field_name: &str, target: &str) -> Result<()> {
    validate_non_empty_string(field_name, target)?;
    if target.contains(['/', '\\']) || target.contains("..") {
        return Err(BadgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: target.to_string(),
            reason: "Target id cannot contain path separators".to_string(),
        });
    }
    Ok(())
}

pub fn validate_badges(field_name: &str, badges: &[BadgeTemplate]) -> Result<()> {
    if badges.is_empty() {
        return Err(BadgeError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one badge column is required".to_string(),
        });
    }

    for badge in badges {
        validate_non_empty_string(&format!("{}.name", field_name), &badge.name)?;
        if !badge.image.contains("{branch}") {
            return Err(BadgeError::InvalidConfigValueError {
                field: format!("{}.{}.image", field_name, badge.name),
                value: badge.image.clone(),
                reason: "Image template must contain the {branch} placeholder".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::default_badges;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://api.github.com/repos/a/b/branches").is_ok());
        assert!(validate_url("endpoint", "http://example.com").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("success_status", 201u16, 100, 599).is_ok());
        assert!(validate_range("success_status", 99u16, 100, 599).is_err());
        assert!(validate_range("success_status", 600u16, 100, 599).is_err());
    }

    #[test]
    fn test_validate_target() {
        assert!(validate_target("target", "dashboard_table").is_ok());
        assert!(validate_target("target", "  ").is_err());
        assert!(validate_target("target", "../etc").is_err());
        assert!(validate_target("target", "a/b").is_err());
    }

    #[test]
    fn test_validate_badges() {
        assert!(validate_badges("badges", &default_badges()).is_ok());
        assert!(validate_badges("badges", &[]).is_err());

        let mut badges = default_badges();
        badges[0].image = "https://ci.example.com/status.svg".to_string();
        let err = validate_badges("badges", &badges).unwrap_err();
        assert!(err.to_string().contains("badges.travis.image"));
    }
}
