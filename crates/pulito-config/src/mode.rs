//! Build mode selection.

use std::fmt;

/// Environment variable that selects the build mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Which kind of configuration to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Minified build, no demo discovery
    Production,
    /// Demo pages discovered and wired in
    #[default]
    Development,
}

impl Mode {
    /// Interpret the value of [`MODE_ENV_VAR`].
    ///
    /// Only the exact value `production` selects production; anything else,
    /// including an unset variable, is development.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Read the mode from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MODE_ENV_VAR).ok().as_deref())
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Development => f.write_str("development"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_production_selects_production() {
        assert_eq!(Mode::from_env_value(Some("production")), Mode::Production);
        assert_eq!(Mode::from_env_value(Some("Production")), Mode::Development);
        assert_eq!(Mode::from_env_value(Some("development")), Mode::Development);
        assert_eq!(Mode::from_env_value(Some("")), Mode::Development);
        assert_eq!(Mode::from_env_value(None), Mode::Development);
    }
}
