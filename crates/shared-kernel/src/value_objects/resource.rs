// crates/shared-kernel/src/value_objects/resource.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Collection endpoints exposed by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Albums,
    Photos,
    Users,
    Posts,
}

impl Resource {
    pub const ALL: [Self; 4] = [Self::Albums, Self::Photos, Self::Users, Self::Posts];

    /// Path segment of the endpoint, without a leading slash.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Albums => "albums",
            Self::Photos => "photos",
            Self::Users => "users",
            Self::Posts => "posts",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.path().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown resource '{s}'"))
    }
}
