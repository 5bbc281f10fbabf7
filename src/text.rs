//! # Annotated Text
//!
//! Chord charts are plain text with chords written inline in square brackets:
//!
//! ```text
//! [G]Amazing [G7]grace, how [C]sweet the [G]sound
//! ```
//!
//! A chord token is `[` + one or more characters that are not `]` + `]`. Everything
//! outside tokens is lyric payload and is never inspected or rewritten.
//!
//! ## Pipeline
//! 1. [`tokenize`] splits text into [`Segment`]s in document order
//! 2. [`transpose_text`] rewrites each chord segment with [`crate::transpose_chord`]
//! 3. Joining the segments back gives the output text
//!
//! Joining untouched segments reproduces the input byte for byte.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::chord::transpose_chord;

static CHORD_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

const CHORD_TOKEN_PATTERN: &str = r"\[([^\]]+)\]";

fn chord_token_regex() -> &'static Regex {
    CHORD_TOKEN_REGEX.get_or_init(|| Regex::new(CHORD_TOKEN_PATTERN).expect("invalid regex pattern"))
}

/// A piece of annotated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text between chord tokens, verbatim.
    Lyric(&'a str),
    /// A bracketed chord token.
    Chord {
        /// The whole token including brackets, as written.
        raw: &'a str,
        /// The inner content with surrounding whitespace trimmed.
        chord: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// The source text this segment was cut from.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Lyric(text) => text,
            Segment::Chord { raw, .. } => raw,
        }
    }
}

/// Split annotated text into lyric and chord segments, in order.
///
/// Empty lyric runs between adjacent tokens are not emitted.
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in chord_token_regex().captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last_end {
            segments.push(Segment::Lyric(&text[last_end..whole.start()]));
        }
        segments.push(Segment::Chord {
            raw: whole.as_str(),
            chord: inner.as_str().trim(),
        });
        last_end = whole.end();
    }

    if last_end < text.len() {
        segments.push(Segment::Lyric(&text[last_end..]));
    }

    segments
}

/// Join segments back into text without changing anything.
pub fn join(segments: &[Segment<'_>]) -> String {
    segments.iter().map(Segment::as_str).collect()
}

/// Extract every chord in document order, trimmed, without transposing.
///
/// # Examples
/// ```
/// use chordkit::parse_chords;
///
/// assert_eq!(parse_chords("We [Bb]worship [Gm7]God"), vec!["Bb", "Gm7"]);
/// assert!(parse_chords("no chords here").is_empty());
/// ```
pub fn parse_chords(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Chord { chord, .. } => Some(chord.to_string()),
            Segment::Lyric(_) => None,
        })
        .collect()
}

/// Transpose every chord token in `text` by `semitones`.
///
/// With an offset of zero the text is returned exactly as given. Otherwise each token's
/// content is trimmed and transposed, and lyric text is copied through untouched.
///
/// # Examples
/// ```
/// use chordkit::transpose_text;
///
/// assert_eq!(
///     transpose_text("[C]Amaz[F]ing [G]grace", 2),
///     "[D]Amaz[G]ing [A]grace"
/// );
/// ```
pub fn transpose_text(text: &str, semitones: i32) -> String {
    if semitones == 0 {
        return text.to_string();
    }

    let segments = tokenize(text);
    debug!(
        semitones,
        tokens = segments
            .iter()
            .filter(|s| matches!(s, Segment::Chord { .. }))
            .count(),
        "transposing text"
    );

    let mut out = String::with_capacity(text.len());
    for segment in segments {
        match segment {
            Segment::Lyric(lyric) => out.push_str(lyric),
            Segment::Chord { chord, .. } => {
                out.push('[');
                out.push_str(&transpose_chord(chord, semitones));
                out.push(']');
            }
        }
    }
    out
}
