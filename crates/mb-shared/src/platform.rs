//! Target Platforms
//!
//! The mini-program hosts templates are generated for. The only property
//! the core cares about is whether a host follows the alipay event naming
//! convention (`onXxx`) instead of the default one (`bindxxx`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mini-program host platform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// WeChat mini-program (default dialect)
    #[default]
    Weapp,
    /// Alipay mini-program
    Alipay,
    /// Baidu smart program
    Swan,
    /// ByteDance mini-program
    Tt,
    /// QQ mini-program
    Qq,
    /// JD mini-program
    Jd,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Weapp,
        Platform::Alipay,
        Platform::Swan,
        Platform::Tt,
        Platform::Qq,
        Platform::Jd,
    ];
    
    /// Lower-case platform name as used in build configuration
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weapp => "weapp",
            Self::Alipay => "alipay",
            Self::Swan => "swan",
            Self::Tt => "tt",
            Self::Qq => "qq",
            Self::Jd => "jd",
        }
    }
    
    /// Does this host use `onXxx` event attributes?
    #[inline]
    pub const fn is_alipay_like(self) -> bool {
        matches!(self, Self::Alipay)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| PlatformError::Unknown(s.to_string()))
    }
}

/// Platform configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("unknown target platform `{0}`")]
    Unknown(String),
}
