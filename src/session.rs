//! Usage session context for metered conversions.
//!
//! The session is an explicit value owned by the caller, who loads it from and saves it
//! to whatever record store backs it. Nothing here touches storage.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Conversions allowed before a free user must upgrade.
pub const FREE_CONVERSION_LIMIT: u32 = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSession {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub conversions_used: u32,
    #[serde(default)]
    pub is_pro: bool,
}

/// What the paywall needs to know before a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionStatus {
    pub can_convert: bool,
    pub conversions_used: u32,
    /// Ask for an email once the first free conversion has been spent.
    pub needs_email: bool,
    pub is_pro: bool,
}

impl UsageSession {
    pub fn new(user_id: impl Into<String>) -> Self {
        UsageSession {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn status(&self) -> ConversionStatus {
        ConversionStatus {
            can_convert: self.is_pro || self.conversions_used < FREE_CONVERSION_LIMIT,
            conversions_used: self.conversions_used,
            needs_email: self.conversions_used >= 1 && self.email.is_none(),
            is_pro: self.is_pro,
        }
    }

    /// Count one conversion. Returns the new total.
    pub fn record_conversion(&mut self) -> u32 {
        self.conversions_used = self.conversions_used.saturating_add(1);
        debug!(user_id = %self.user_id, used = self.conversions_used, "conversion recorded");
        self.conversions_used
    }

    /// Attach an email if the session does not have one yet. Blank input is ignored.
    pub fn attach_email(&mut self, email: &str) -> bool {
        let email = email.trim();
        if email.is_empty() || self.email.is_some() {
            return false;
        }
        self.email = Some(email.to_string());
        true
    }
}
