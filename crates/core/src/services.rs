//! The fixed set of services a client can ask for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A service offered on the onboarding form.
///
/// Declaration order is the display order on the page and the order in
/// which a selection serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl ServiceKind {
    /// Every service, in display order.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::UiUx,
        ServiceKind::Branding,
        ServiceKind::WebDev,
        ServiceKind::MobileApp,
    ];

    /// The wire and display name.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::UiUx => "UI/UX",
            ServiceKind::Branding => "Branding",
            ServiceKind::WebDev => "Web Dev",
            ServiceKind::MobileApp => "Mobile App",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = CoreError;

    /// Exact, case-sensitive match against the display names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownService(s.to_string()))
    }
}
