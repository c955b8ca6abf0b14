//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.
//!
//! Bare `$VAR` is left alone so URLs containing `$` survive untouched.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// `field` is the dotted config key, used in the error message when a
/// referenced variable is unset and has no default.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_literal_passes_through() {
        let result = expand_env("https://pictogrammers.com", "site.base_url").unwrap();
        assert_eq!(result, "https://pictogrammers.com");
    }

    #[test]
    fn test_bare_dollar_untouched() {
        let result = expand_env("https://example.com/$path", "site.base_url").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }

    #[test]
    fn test_expands_set_variable() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("PGDOCS_TEST_REPO", "Pictogrammers/pictogrammers.com");
        }
        let result = expand_env("${PGDOCS_TEST_REPO}", "github.repository").unwrap();
        assert_eq!(result, "Pictogrammers/pictogrammers.com");
        unsafe {
            std::env::remove_var("PGDOCS_TEST_REPO");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("PGDOCS_TEST_UNSET_HOST");
        }
        let result = expand_env(
            "https://${PGDOCS_TEST_UNSET_HOST:-pictogrammers.com}",
            "site.base_url",
        )
        .unwrap();
        assert_eq!(result, "https://pictogrammers.com");
    }

    #[test]
    fn test_missing_variable_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("PGDOCS_TEST_MISSING");
        }
        let err = expand_env("${PGDOCS_TEST_MISSING}", "ads.carbon_serve").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("PGDOCS_TEST_MISSING"));
        assert!(msg.contains("ads.carbon_serve"));
    }
}
