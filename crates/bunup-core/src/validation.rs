use once_cell::sync::Lazy;
use regex::Regex;

// npm package name, optionally scoped (`@scope/name`).
static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:@(?:[a-z0-9\-*~][a-z0-9\-*._~]*)?/[a-z0-9\-._~])|[a-z0-9\-~])[a-z0-9\-._~]*$")
        .expect("package name pattern is valid")
});

static REPOSITORY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9\-]+/[a-zA-Z0-9\-_.]+$").expect("repository pattern is valid")
});

/// Validates the project / package name prompt.
///
/// # Errors
/// Returns the message shown under the prompt when the name is empty or not a
/// valid npm package name.
pub fn validate_package_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name is required".into());
    }
    check_package_name(name)
}

/// Same as [`validate_package_name`] with the wording used for the first
/// package of a monorepo.
///
/// # Errors
/// See [`validate_package_name`].
pub fn validate_first_package_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Package name is required".into());
    }
    check_package_name(name)
}

fn check_package_name(name: &str) -> Result<(), String> {
    if !PACKAGE_NAME.is_match(name) {
        return Err("Invalid package name format".into());
    }
    Ok(())
}

/// Validates the `username/repo` prompt.
///
/// # Errors
/// Returns the message shown under the prompt when the value is empty or not
/// of the form `username/repo-name`.
pub fn validate_repository(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Repository info is required".into());
    }
    if !REPOSITORY.is_match(value) {
        return Err("Invalid format. Use: username/repo-name".into());
    }
    Ok(())
}

/// Splits a validated `username/repo` value.
pub fn split_repository(value: &str) -> Option<(&str, &str)> {
    value.split_once('/')
}
