use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which generated constructors return `(*S, error)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorScope {
    /// Every constructor is fallible once any registered constructor is.
    #[default]
    Global,
    /// Only constructors whose own fields call a fallible constructor.
    PerStruct,
}

impl ErrorScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::PerStruct => "per-struct",
        }
    }
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "per-struct" | "per_struct" => Ok(Self::PerStruct),
            _ => Err(format!(
                "unknown error scope '{}', expected 'global' or 'per-struct'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("global".parse::<ErrorScope>(), Ok(ErrorScope::Global));
        assert_eq!("Per-Struct".parse::<ErrorScope>(), Ok(ErrorScope::PerStruct));
        assert_eq!("per_struct".parse::<ErrorScope>(), Ok(ErrorScope::PerStruct));
        assert!("local".parse::<ErrorScope>().is_err());
    }
}
