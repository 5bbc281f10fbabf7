//! Chord symbol transposition.
//!
//! A chord symbol is a root note followed by an opaque quality suffix (`m`, `7`, `maj7`,
//! `sus4`, ...), optionally with a slash bass (`G/B`). Only roots are ever rewritten; the
//! suffix is carried over byte for byte.

use tracing::trace;

use crate::note::{transpose_note, Note, SHARP_SCALE};

/// Split a chord symbol into its root and quality suffix.
///
/// The root is `[A-G]` plus an optional `#` or `b`. Returns `None` if the chord does
/// not start with a note letter. This is the one place chord roots are recognized;
/// transposition and key detection both go through it.
///
/// # Examples
/// ```
/// use chordkit::split_root;
///
/// assert_eq!(split_root("F#m7"), Some(("F#", "m7")));
/// assert_eq!(split_root("Bbsus4"), Some(("Bb", "sus4")));
/// assert_eq!(split_root("N.C."), None);
/// ```
pub fn split_root(chord: &str) -> Option<(&str, &str)> {
    let bytes = chord.as_bytes();
    match bytes.first() {
        Some(b'A'..=b'G') => {}
        _ => return None,
    }
    let root_len = match bytes.get(1) {
        Some(b'#') | Some(b'b') => 2,
        _ => 1,
    };
    Some(chord.split_at(root_len))
}

/// Transpose a chord symbol by `semitones`.
///
/// Slash chords are split on the first `/` and each side is transposed on its own, so
/// `A/B/C` becomes `A` and `B/C`, and `B/C` splits again. Chords without a recognizable
/// root come back unchanged.
///
/// # Examples
/// ```
/// use chordkit::transpose_chord;
///
/// assert_eq!(transpose_chord("F#m7", -2), "Em7");
/// assert_eq!(transpose_chord("G/B", 2), "A/C#");
/// assert_eq!(transpose_chord("Bb/D", 2), "C/E");
/// ```
pub fn transpose_chord(chord: &str, semitones: i32) -> String {
    if semitones == 0 || chord.is_empty() {
        return chord.to_string();
    }

    if let Some((upper, bass)) = chord.split_once('/') {
        return format!(
            "{}/{}",
            transpose_chord(upper, semitones),
            transpose_chord(bass, semitones)
        );
    }

    match split_root(chord) {
        Some((root, quality)) => format!("{}{}", transpose_note(root, semitones), quality),
        None => {
            trace!(chord, "no root note, leaving chord unchanged");
            chord.to_string()
        }
    }
}

/// Spell out the tones of a chord, sharp-spelled, root first.
///
/// The quality is matched by containment in this order: `maj7`/`M7`, `dim`, `aug`, `m7`,
/// `7`, `m`, and anything else is treated as a major triad. Slash basses are not
/// included. Returns an empty list when the root is not a recognized note.
///
/// # Examples
/// ```
/// use chordkit::chord_tones;
///
/// assert_eq!(chord_tones("Am7"), vec!["A", "C", "E", "G"]);
/// assert_eq!(chord_tones("Bb"), vec!["A#", "D", "F"]);
/// ```
pub fn chord_tones(chord: &str) -> Vec<String> {
    let Some((root, quality)) = split_root(chord) else {
        return vec![];
    };
    let Some(root) = Note::parse(root) else {
        return vec![];
    };
    // Slash basses are not chord tones.
    let quality = quality.split('/').next().unwrap_or_default();

    // Intervals above the root in semitones:
    // minor 3rd = 3, major 3rd = 4, diminished 5th = 6, perfect 5th = 7,
    // augmented 5th = 8, minor 7th = 10, major 7th = 11
    let intervals: &[u8] = if quality.contains("maj7") || quality.contains("M7") {
        &[4, 7, 11]
    } else if quality.contains("dim") {
        &[3, 6]
    } else if quality.contains("aug") {
        &[4, 8]
    } else if quality.contains("m7") {
        &[3, 7, 10]
    } else if quality.contains('7') {
        &[4, 7, 10]
    } else if quality.contains('m') {
        &[3, 7]
    } else {
        &[4, 7]
    };

    let root_index = root.pitch_class();
    std::iter::once(0)
        .chain(intervals.iter().copied())
        .map(|interval| SHARP_SCALE[((root_index + interval) % 12) as usize].to_string())
        .collect()
}
