//! Setlist timing: an ordered service plan with `m:ss` durations and a running total.

use serde::{Deserialize, Serialize};

use crate::error::ChordKitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemKind {
    #[default]
    Worship,
    Announcement,
    Sermon,
    Offering,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetlistItem {
    pub title: String,
    /// `m:ss`
    pub duration: String,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
}

impl SetlistItem {
    /// Build an item, checking the duration and trimming the title.
    pub fn new(title: &str, duration: &str, kind: ItemKind) -> Result<Self, ChordKitError> {
        parse_duration(duration)?;
        Ok(SetlistItem {
            title: title.trim().to_string(),
            duration: duration.trim().to_string(),
            kind,
        })
    }

    pub fn seconds(&self) -> Result<u32, ChordKitError> {
        parse_duration(&self.duration)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Setlist {
    pub items: Vec<SetlistItem>,
}

impl Setlist {
    pub fn from_json(json: &str) -> Result<Self, ChordKitError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ChordKitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Append an item. Items with a blank title are ignored.
    pub fn push(&mut self, item: SetlistItem) -> bool {
        if item.title.trim().is_empty() {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<SetlistItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Move the item at `from` so it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    pub fn total_seconds(&self) -> Result<u32, ChordKitError> {
        sum_seconds(self.items.iter())
    }

    /// Total for one kind of item, e.g. how much of the service is music.
    pub fn seconds_for(&self, kind: ItemKind) -> Result<u32, ChordKitError> {
        sum_seconds(self.items.iter().filter(|item| item.kind == kind))
    }

    pub fn total_formatted(&self) -> Result<String, ChordKitError> {
        Ok(format_duration(self.total_seconds()?))
    }
}

fn sum_seconds<'a>(mut items: impl Iterator<Item = &'a SetlistItem>) -> Result<u32, ChordKitError> {
    items.try_fold(0u32, |total, item| {
        total
            .checked_add(item.seconds()?)
            .ok_or(ChordKitError::DurationOverflow)
    })
}

/// Parse `m:ss` into seconds. Minutes may have any number of digits; seconds must be
/// below 60.
pub fn parse_duration(s: &str) -> Result<u32, ChordKitError> {
    let invalid = || ChordKitError::InvalidDuration(s.to_string());
    let (minutes, seconds) = s.trim().split_once(':').ok_or_else(invalid)?;
    if minutes.is_empty() || seconds.len() != 2 {
        return Err(invalid());
    }
    if !minutes.bytes().chain(seconds.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u32 = seconds.parse().map_err(|_| invalid())?;
    if seconds >= 60 {
        return Err(invalid());
    }
    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(invalid)
}

/// Format seconds as `m:ss`.
pub fn format_duration(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
