use std::fmt;

/// Opaque key credential passed to the service.
///
/// The key is stored exactly as given. An empty key is valid and means the endpoint
/// is unauthenticated (local test servers); no auth header is sent in that case.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct KeyCredential(String);

impl KeyCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for KeyCredential {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for KeyCredential {
    fn from(key: String) -> Self {
        Self(key)
    }
}

// Never print the key itself.
impl fmt::Debug for KeyCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("KeyCredential(<empty>)")
        } else {
            f.write_str("KeyCredential(<redacted>)")
        }
    }
}
