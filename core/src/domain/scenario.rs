//! Which cascades a run triggers.

use serde::{Deserialize, Serialize};

/// A top-level invocation selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    /// Service -> Repository.
    Client,
    /// Http -> Authenticator.
    Http,
    /// Queue -> Worker -> Authenticator, Database.
    Pipeline,
    /// Every cascade, in the order above.
    #[default]
    All,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Client,
        Scenario::Http,
        Scenario::Pipeline,
        Scenario::All,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Client => "client",
            Scenario::Http => "http",
            Scenario::Pipeline => "pipeline",
            Scenario::All => "all",
        }
    }

    pub fn includes(&self, other: Scenario) -> bool {
        *self == Scenario::All || *self == other
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown scenario '{s}'"))
    }
}
