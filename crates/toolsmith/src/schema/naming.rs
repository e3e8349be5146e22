/// Names an object reached through nested arrays under an empty key.
pub(crate) const FALLBACK_NAME: &str = "Item";

/// Reduces `name` to a valid identifier.
///
/// Characters outside `[A-Za-z0-9_$]` are dropped. An empty result or one that
/// starts with a digit gets a leading `_`.
///
/// ```
/// use toolsmith::schema::sanitize_name;
///
/// assert_eq!(sanitize_name("user-name"), "username");
/// assert_eq!(sanitize_name("2fa"), "_2fa");
/// assert_eq!(sanitize_name("ünï"), "n");
/// assert_eq!(sanitize_name(""), "_");
/// ```
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$'))
        .collect();
    match kept.chars().next() {
        None => String::from("_"),
        Some(c) if c.is_ascii_digit() => format!("_{kept}"),
        Some(_) => kept,
    }
}

/// Sanitizes `name` and upper-cases its first letter.
///
/// ```
/// use toolsmith::schema::type_name;
///
/// assert_eq!(type_name("order_items"), "Order_items");
/// assert_eq!(type_name("$ref"), "$ref");
/// ```
#[must_use]
pub fn type_name(name: &str) -> String {
    let mut sanitized = sanitize_name(name);
    if let Some(first) = sanitized.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    sanitized
}

/// Sanitizes an object key for use as a property name. Case is preserved.
#[must_use]
pub fn property_name(key: &str) -> String {
    sanitize_name(key)
}
