/// The four HTTP method classes policies reason about.
///
/// Methods outside these classes are unhandled and fail closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MethodClass {
    /// Creates a resource: POST
    Create,
    /// Reads without side effects: GET, HEAD, OPTIONS
    Read,
    /// Updates a resource: PUT
    Update,
    /// Deletes a resource: DELETE
    Delete,
}

/// Classifies an HTTP method string, case-insensitively.
///
/// # Returns
/// * `Some(class)` for the methods listed on [`MethodClass`], `None` otherwise
pub fn classify_method(method: &str) -> Option<MethodClass> {
    match method.to_lowercase().as_str() {
        "post" => Some(MethodClass::Create),
        "get" | "head" | "options" => Some(MethodClass::Read),
        "put" => Some(MethodClass::Update),
        "delete" => Some(MethodClass::Delete),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_method() {
        // Each class, lowercase and uppercase
        assert_eq!(classify_method("post"), Some(MethodClass::Create));
        assert_eq!(classify_method("POST"), Some(MethodClass::Create));
        assert_eq!(classify_method("get"), Some(MethodClass::Read));
        assert_eq!(classify_method("Head"), Some(MethodClass::Read));
        assert_eq!(classify_method("OPTIONS"), Some(MethodClass::Read));
        assert_eq!(classify_method("put"), Some(MethodClass::Update));
        assert_eq!(classify_method("DELETE"), Some(MethodClass::Delete));

        // Unhandled methods
        assert_eq!(classify_method("patch"), None);
        assert_eq!(classify_method("TRACE"), None);
        assert_eq!(classify_method(""), None);
    }
}
