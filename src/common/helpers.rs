// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => "***@***.***".to_string(),
        },
        None => "***@***.***".to_string(),
    }
}

/// Masks a login identifier for logging: emails are masked like
/// safe_email_log, bare usernames pass through unchanged
pub fn safe_identifier_log(identifier: &str) -> String {
    if identifier.contains('@') {
        safe_email_log(identifier)
    } else {
        identifier.to_string()
    }
}
