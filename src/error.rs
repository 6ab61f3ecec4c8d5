//! Strict-mode classification failure.

/// Returned by the strict (`try_*`, `from_id`) entry points when input
/// cannot be resolved to a known value.
///
/// Carries the dimension that failed and the offending input, so callers
/// that refuse to proceed on an unknown platform can report exactly what
/// was rejected. The lenient entry points never construct this; they
/// return the unknown sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {aspect}: {value:?}")]
pub struct UnsupportedPlatformError {
    aspect: &'static str,
    value: String,
}

impl UnsupportedPlatformError {
    pub(crate) fn new(aspect: &'static str, value: impl Into<String>) -> Self {
        Self { aspect, value: value.into() }
    }

    /// The dimension that could not be classified, e.g. `"architecture"`.
    pub fn aspect(&self) -> &'static str {
        self.aspect
    }

    /// The input that was rejected, verbatim.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_aspect_and_input() {
        let err = UnsupportedPlatformError::new("operating system", "beos");
        assert_eq!(err.to_string(), "unknown operating system: \"beos\"");
        assert_eq!(err.aspect(), "operating system");
        assert_eq!(err.value(), "beos");
    }
}
