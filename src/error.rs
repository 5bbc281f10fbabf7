//! # Error Types
//!
//! Errors raised at the edges of the crate: chart frontmatter, request validation,
//! vocal ranges and setlist durations.
//!
//! Transposition itself never fails. Unrecognized chords and notes are passed through
//! unchanged, so nothing in [`crate::note`], [`crate::chord`], [`crate::text`] or
//! [`crate::key`] returns a `Result`.
//!
//! ## Usage
//! ```rust
//! use chordkit::{ChordChart, ChordKitError};
//!
//! match ChordChart::parse("---\ncapo: [oops\n---\n[G]Amazing") {
//!     Ok(chart) => println!("{}", chart.body),
//!     Err(ChordKitError::Metadata(message)) => eprintln!("bad frontmatter: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordKitError {
    /// Invalid YAML frontmatter in a chord chart.
    ///
    /// # Example
    /// ```
    /// # use chordkit::ChordKitError;
    /// let err = ChordKitError::Metadata("capo must be a number".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: capo must be a number");
    /// ```
    #[error("Invalid metadata: {0}")]
    Metadata(String),

    /// A transpose request asked for more than an octave in either direction.
    ///
    /// # Example
    /// ```
    /// # use chordkit::ChordKitError;
    /// let err = ChordKitError::SemitonesOutOfRange(13);
    /// assert_eq!(err.to_string(), "Semitones must be between -12 and 12, got 13");
    /// ```
    #[error("Semitones must be between -12 and 12, got {0}")]
    SemitonesOutOfRange(i32),

    /// A key name that could not be read as a note.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// A vocal range whose bounds are unknown pitches or out of order.
    #[error("Invalid vocal range: {low} to {high}")]
    InvalidRange { low: String, high: String },

    /// A setlist duration that is not in `m:ss` form.
    #[error("Invalid duration '{0}', expected m:ss")]
    InvalidDuration(String),

    /// Setlist durations that add up past what a `u32` of seconds can hold.
    #[error("Total setlist duration is too long")]
    DurationOverflow,

    /// Malformed JSON at the request or setlist boundary.
    #[error("Invalid JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ChordKitError {
    fn from(e: serde_json::Error) -> Self {
        ChordKitError::Json(e.to_string())
    }
}
