//! Common validation utilities

/// Whether an optional form field was supplied with a non-empty value
///
/// Whitespace is kept as-is: only a missing or zero-length value counts as absent.
pub fn is_present(value: Option<&str>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

/// Whether every listed form field was supplied with a non-empty value
pub fn all_present(values: &[Option<&str>]) -> bool {
    values.iter().all(|v| is_present(*v))
}

/// Check if an email address is plausibly valid (local@domain.tld, no spaces)
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// Mask an email address for logging, keeping the first character and the domain
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
