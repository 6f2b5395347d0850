use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, health records and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Gold spot price in USD per troy ounce.
    Price,
    /// Free-text chat reply.
    Chat,
    /// Recent gold news headlines used as chat context.
    News,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Chat => "chat",
            Self::News => "news",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
