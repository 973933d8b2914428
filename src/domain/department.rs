use std::fmt;

use serde::{Deserialize, Serialize};

/// Internal team a classified document is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Finance,
    Procurement,
    Legal,
    Operations,
    General,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Self::Finance,
        Self::Procurement,
        Self::Legal,
        Self::Operations,
        Self::General,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.as_str() == normalized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Procurement => "procurement",
            Self::Legal => "legal",
            Self::Operations => "operations",
            Self::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Finance => "Finance Department",
            Self::Procurement => "Procurement Department",
            Self::Legal => "Legal Department",
            Self::Operations => "Operations Department",
            Self::General => "General Administration",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
