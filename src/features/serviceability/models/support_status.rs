use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// Tri-state serviceability flag matching database enum
///
/// `Unknown` means "never resolved" and is never returned to API callers;
/// it only appears on stored rows that still need a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "support_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SupportStatus {
    Unknown,
    Supported,
    Unsupported,
}

impl SupportStatus {
    /// Definite answer carried by this flag, if any
    pub fn as_bool(self) -> Option<bool> {
        match self {
            SupportStatus::Unknown => None,
            SupportStatus::Supported => Some(true),
            SupportStatus::Unsupported => Some(false),
        }
    }

}

impl std::fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupportStatus::Unknown => write!(f, "unknown"),
            SupportStatus::Supported => write!(f, "supported"),
            SupportStatus::Unsupported => write!(f, "unsupported"),
        }
    }
}
