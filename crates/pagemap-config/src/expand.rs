//! Environment variable expansion for string config values.
//!
//! Supported grammar:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand every `${...}` expression in a config value.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] for an unterminated expression or a
/// referenced variable that is unset and has no default.
pub(crate) fn expand_value(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        expanded.push_str(&rest[..start]);
        let expression = &rest[start + 2..];
        let Some(end) = expression.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: "unterminated ${ expression".to_owned(),
            });
        };

        let (name, default) = match expression[..end].split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (&expression[..end], None),
        };

        match std::env::var(name) {
            Ok(resolved) => expanded.push_str(&resolved),
            Err(_) => match default {
                Some(default) => expanded.push_str(default),
                None => {
                    return Err(ConfigError::EnvVar {
                        field: field.to_owned(),
                        message: format!("${{{name}}} not set"),
                    });
                }
            },
        }

        rest = &expression[end + 1..];
    }

    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand an optional field in place.
pub(crate) fn expand_field(value: &mut String, field: &str) -> Result<(), ConfigError> {
    *value = expand_value(value, field)?;
    Ok(())
}
