use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of business document the classifier can recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Invoice,
    PurchaseOrder,
    Contract,
    Receipt,
    Proposal,
    Agreement,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 7] = [
        Self::Invoice,
        Self::PurchaseOrder,
        Self::Contract,
        Self::Receipt,
        Self::Proposal,
        Self::Agreement,
        Self::Other,
    ];

    /// Case-insensitive lookup of a label such as `"Purchase_Order"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == normalized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoice => "invoice",
            Self::PurchaseOrder => "purchase_order",
            Self::Contract => "contract",
            Self::Receipt => "receipt",
            Self::Proposal => "proposal",
            Self::Agreement => "agreement",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
