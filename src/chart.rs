//! # Chord Charts
//!
//! A chord chart is an annotated body with an optional YAML frontmatter block at the top:
//!
//! ```text
//! ---
//! title: Amazing Grace
//! artist: John Newton
//! key: G
//! capo: 2
//! ---
//! Verse 1:
//! [G]Amazing [G7]grace, how [C]sweet the [G]sound
//! ```
//!
//! Frontmatter keys are kebab-case. All of them are optional.
//!
//! ## Transposition
//! [`ChordChart::transposed`] moves every chord in the body and the `key` field together.
//! If the chart has no `key` but has at least one chord with a recognizable root, the
//! detected key is filled in first so the result records where it ended up.
//! [`ChordChart::transposed_to`] picks the shorter offset to a target key and records the
//! target as written, so `--to Db` gives `key: Db` rather than `C#`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chord::{split_root, transpose_chord};
use crate::error::ChordKitError;
use crate::key::{detect_key, semitone_difference};
use crate::text::{parse_chords, transpose_text};

/// Chart frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ChartMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capo: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<u16>,
}

impl ChartMetadata {
    pub fn is_empty(&self) -> bool {
        *self == ChartMetadata::default()
    }
}

/// A parsed chord chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChordChart {
    pub metadata: ChartMetadata,
    /// Annotated text after the frontmatter, verbatim.
    pub body: String,
}

impl ChordChart {
    /// Parse a chart, splitting off frontmatter if the first line is `---`.
    pub fn parse(source: &str) -> Result<Self, ChordKitError> {
        let (frontmatter, body) = split_frontmatter(source);

        let metadata: ChartMetadata = match frontmatter {
            Some(content) if !content.trim().is_empty() => serde_yaml::from_str(content)
                .map_err(|e| ChordKitError::Metadata(e.to_string()))?,
            _ => ChartMetadata::default(),
        };

        Ok(ChordChart {
            metadata,
            body: body.to_string(),
        })
    }

    /// Chords in the body, in order.
    pub fn chords(&self) -> Vec<String> {
        parse_chords(&self.body)
    }

    /// The `key` field, or the key detected from the body. `None` when neither exists,
    /// i.e. no field and no chord in the body has a note root.
    pub fn key(&self) -> Option<String> {
        match &self.metadata.key {
            Some(key) => Some(key.clone()),
            None if self.has_chord_roots() => Some(detect_key(&self.body)),
            None => None,
        }
    }

    fn has_chord_roots(&self) -> bool {
        self.chords().iter().any(|chord| split_root(chord).is_some())
    }

    /// A copy of the chart with the body and key moved by `semitones`.
    pub fn transposed(&self, semitones: i32) -> Self {
        if semitones == 0 {
            return self.clone();
        }

        let key = self.key().map(|k| transpose_chord(&k, semitones));
        debug!(semitones, key = key.as_deref(), "transposing chart");

        ChordChart {
            metadata: ChartMetadata {
                key,
                ..self.metadata.clone()
            },
            body: transpose_text(&self.body, semitones),
        }
    }

    /// Move the chart to `target` by the shorter way round, keeping the target's spelling
    /// in the `key` field.
    pub fn transposed_to(&self, target: &str) -> Result<Self, ChordKitError> {
        let target = target.trim();
        let from = self
            .key()
            .ok_or_else(|| ChordKitError::UnknownKey("(none)".to_string()))?;
        let up = semitone_difference(&from, target)
            .ok_or_else(|| ChordKitError::UnknownKey(target.to_string()))?;
        let up = i32::from(up);
        let semitones = if up > 6 { up - 12 } else { up };

        let mut chart = self.transposed(semitones);
        chart.metadata.key = Some(target.to_string());
        Ok(chart)
    }

    /// Write the chart back out. Frontmatter is omitted when no field is set, unless the
    /// body itself would read as frontmatter, in which case an empty block is written.
    pub fn render(&self) -> Result<String, ChordKitError> {
        if self.metadata.is_empty() {
            if split_frontmatter(&self.body).0.is_some() {
                return Ok(format!("---\n---\n{}", self.body));
            }
            return Ok(self.body.clone());
        }
        let yaml = serde_yaml::to_string(&self.metadata)
            .map_err(|e| ChordKitError::Metadata(e.to_string()))?;
        Ok(format!("---\n{}---\n{}", yaml, self.body))
    }
}

/// Split `---` delimited frontmatter from the top of a chart.
///
/// Returns (frontmatter_content, body). The body is a slice of the source so line
/// endings inside it are kept. An unterminated block is treated as body text.
fn split_frontmatter(source: &str) -> (Option<&str>, &str) {
    let mut lines = source.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, source);
    };
    if first.trim() != "---" {
        return (None, source);
    }

    let content_start = first.len();
    let mut offset = content_start;
    for line in lines {
        if line.trim() == "---" {
            let content = &source[content_start..offset];
            let body = &source[offset + line.len()..];
            return (Some(content), body);
        }
        offset += line.len();
    }

    (None, source)
}
