//! Auth data models.

use std::fmt;

use jiff::Timestamp;
use zeroize::Zeroizing;

/// An authenticated storefront user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub logged_in_at: Timestamp,
}

/// Login credentials. The password is wiped from memory on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_password() {
        let credentials = Credentials::new("maria", "s3cret");

        let debug = format!("{credentials:?}");

        assert!(debug.contains("maria"));
        assert!(!debug.contains("s3cret"));
    }
}
