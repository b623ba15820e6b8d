//! Conditional class-token composition used by every component.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered, space-separated list of class tokens.
///
/// Empty tokens are skipped so optional caller classes can be pushed unconditionally.
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Starts a list with a single base class.
    pub fn new(base: impl Into<String>) -> Self {
        Self::default().with(base)
    }

    /// Appends `token` unless it is empty.
    pub fn with(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.trim().is_empty() {
            self.tokens.push(token);
        }
        self
    }

    /// Appends `token` only when `enabled` is true.
    pub fn with_if(self, enabled: bool, token: impl Into<String>) -> Self {
        if enabled {
            self.with(token)
        } else {
            self
        }
    }

    /// Appends an optional caller-supplied class.
    pub fn with_optional(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.with(token),
            None => self,
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<ClassList> for String {
    fn from(value: ClassList) -> Self {
        value.to_string()
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
