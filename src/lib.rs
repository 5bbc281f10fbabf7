//! # chordkit
//!
//! Chord transposition and key detection for inline chord charts, where chords sit in
//! square brackets inside the lyrics:
//!
//! ```text
//! [G]Amazing [G7]grace, how [C]sweet the [G]sound
//! ```
//!
//! ## Pipeline
//! - [`note`] - pitch classes and single-note transposition
//! - [`chord`] - root/quality split and chord transposition
//! - [`text`] - chord token scanning and text transposition
//! - [`key`] - key detection, key distances and key tables
//!
//! Around the core sit [`chart`] (frontmatter + body documents), [`api`] (JSON
//! request boundary), [`vocal`] (singer key finder), [`setlist`] (service timing) and
//! [`session`] (usage metering state).
//!
//! Every transposition function is pure. Tokens that are not chords are left as they
//! are instead of raising errors.
//!
//! ## Example
//! ```rust
//! use chordkit::{detect_key, transpose_text};
//!
//! let chart = "[G]Amazing [G7]grace, how [C]sweet the [G]sound";
//! assert_eq!(detect_key(chart), "G");
//! assert_eq!(
//!     transpose_text(chart, 2),
//!     "[A]Amazing [A7]grace, how [D]sweet the [A]sound"
//! );
//! ```

pub mod api;
pub mod chart;
pub mod chord;
pub mod error;
pub mod key;
pub mod note;
pub mod session;
pub mod setlist;
pub mod text;
pub mod vocal;

pub use api::{handle_transpose, TransposeRequest, TransposeResponse};
pub use chart::{ChartMetadata, ChordChart};
pub use chord::{chord_tones, split_root, transpose_chord};
pub use error::*;
pub use key::{
    all_keys, detect_key, detect_key_first_chord, detect_key_from_chords, key_signature,
    semitone_difference, transposed_key_name, KeyOption,
};
pub use note::{transpose_note, Note, Spelling};
pub use session::{ConversionStatus, UsageSession};
pub use setlist::{format_duration, parse_duration, ItemKind, Setlist, SetlistItem};
pub use text::{parse_chords, tokenize, transpose_text, Segment};
pub use vocal::{find_keys, Difficulty, KeyFit, Pitch};
