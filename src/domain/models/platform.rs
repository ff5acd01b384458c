use std::fmt;

use serde::{Deserialize, Serialize};

/// Remote platform a client handle talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Social-content platform (Reddit API)
    Reddit,
    /// Video platform (YouTube Data API)
    Youtube,
}

impl Platform {
    /// All supported platforms in display order
    pub const ALL: [Self; 2] = [Self::Reddit, Self::Youtube];

    /// Lowercase identifier used in config keys and output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reddit => "reddit",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which platforms a command should operate on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlatformSelection {
    /// Only the Reddit client
    Reddit,
    /// Only the YouTube client
    Youtube,
    /// Both clients
    #[default]
    All,
}

impl PlatformSelection {
    /// Expand the selection into concrete platforms
    pub fn platforms(self) -> Vec<Platform> {
        match self {
            Self::Reddit => vec![Platform::Reddit],
            Self::Youtube => vec![Platform::Youtube],
            Self::All => Platform::ALL.to_vec(),
        }
    }
}
