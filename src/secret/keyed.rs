//! Opt-in adapter that lets secrets act as `HashMap` / `HashSet` keys.
//!
//! The wrappers deliberately lack `Eq` and `Hash`. `SecretKey` supplies both
//! from the explicit operations: hashing writes the precomputed content hash
//! and equality delegates to [`Concealed::content_eq`].

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Concealed;

pub struct SecretKey<S: Concealed>(S);

impl<S: Concealed> SecretKey<S> {
    pub fn new(secret: S) -> Self {
        Self(secret)
    }

    pub fn get(&self) -> &S {
        &self.0
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: Concealed> PartialEq for SecretKey<S> {
    fn eq(&self, other: &Self) -> bool {
        self.0.content_eq(&other.0)
    }
}

impl<S: Concealed> Eq for SecretKey<S> {}

impl<S: Concealed> Hash for SecretKey<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.0.content_hash());
    }
}

impl<S: Concealed + Clone> Clone for SecretKey<S> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<S: Concealed + fmt::Display> fmt::Display for SecretKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<S: Concealed + fmt::Debug> fmt::Debug for SecretKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretKey").field(&self.0).finish()
    }
}

impl<S: Concealed> From<S> for SecretKey<S> {
    fn from(secret: S) -> Self {
        Self(secret)
    }
}
