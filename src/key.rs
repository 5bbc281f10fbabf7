//! # Keys
//!
//! Key detection and the small lookup tables used when choosing a target key.
//!
//! A key here is just a root note used as the song's tonal center for display. There is
//! no mode or scale analysis.
//!
//! ## Detection Policies
//! - [`detect_key`] (default): the most frequent chord root in the text. Ties go to the
//!   root that appears first. Robust against intros and pickup chords.
//! - [`detect_key_first_chord`]: the root of the first chord in the text. Cheap and
//!   usable on a stream.
//!
//! Both return `"C"` when there is nothing to go on.

use serde::Serialize;
use tracing::debug;

use crate::chord::split_root;
use crate::note::{Note, SHARP_SCALE};
use crate::text::{tokenize, Segment};

/// The key reported when no chord root can be found.
pub const DEFAULT_KEY: &str = "C";

/// Most frequent chord root in annotated text, or `"C"`.
///
/// # Examples
/// ```
/// use chordkit::detect_key;
///
/// assert_eq!(detect_key("[D]Here I [G]am to [D]worship"), "D");
/// assert_eq!(detect_key("no chords here"), "C");
/// ```
pub fn detect_key(text: &str) -> String {
    let chords: Vec<&str> = tokenize(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Chord { chord, .. } => Some(chord),
            Segment::Lyric(_) => None,
        })
        .collect();
    detect_key_from_chords(&chords)
}

/// Most frequent root across a list of chord symbols, or `"C"`.
///
/// Chords without a root are skipped. Ties are broken by first appearance.
pub fn detect_key_from_chords<S: AsRef<str>>(chords: &[S]) -> String {
    // (root, count) in first-seen order; a chart has a handful of distinct roots.
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for chord in chords {
        let Some((root, _)) = split_root(chord.as_ref().trim()) else {
            continue;
        };
        match tally.iter_mut().find(|(seen, _)| *seen == root) {
            Some((_, count)) => *count += 1,
            None => tally.push((root, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(root, count) in &tally {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((root, count));
        }
    }

    match best {
        Some((root, count)) => {
            debug!(root, count, distinct = tally.len(), "detected key by root frequency");
            root.to_string()
        }
        None => DEFAULT_KEY.to_string(),
    }
}

/// Root of the first chord token in the text, or `"C"`.
///
/// # Examples
/// ```
/// use chordkit::detect_key_first_chord;
///
/// assert_eq!(detect_key_first_chord("[Em]Oh [G]come [G]all"), "E");
/// ```
pub fn detect_key_first_chord(text: &str) -> String {
    let first = tokenize(text).into_iter().find_map(|segment| match segment {
        Segment::Chord { chord, .. } => Some(chord),
        Segment::Lyric(_) => None,
    });

    first
        .and_then(split_root)
        .map(|(root, _)| root.to_string())
        .unwrap_or_else(|| DEFAULT_KEY.to_string())
}

/// Semitones upward from one key to another, in `0..=11`.
///
/// Both keys are compared by root only, so `"Am"` counts as `A`. Returns `None` if either
/// root is not a recognized note. Callers wanting the shorter direction subtract 12 when
/// the result is above 6.
///
/// # Examples
/// ```
/// use chordkit::semitone_difference;
///
/// assert_eq!(semitone_difference("C", "G"), Some(7));
/// assert_eq!(semitone_difference("G", "C"), Some(5));
/// assert_eq!(semitone_difference("C#", "Db"), Some(0));
/// ```
pub fn semitone_difference(from_key: &str, to_key: &str) -> Option<u8> {
    let from = key_root(from_key)?;
    let to = key_root(to_key)?;
    Some(from.semitones_to(&to))
}

/// The key name after moving `semitones`, sharp-spelled.
///
/// Unknown keys come back unchanged.
pub fn transposed_key_name(key: &str, semitones: i32) -> String {
    match key_root(key) {
        Some(root) => SHARP_SCALE[root.transpose(semitones).pitch_class() as usize].to_string(),
        None => key.to_string(),
    }
}

fn key_root(key: &str) -> Option<Note> {
    split_root(key.trim()).and_then(|(root, _)| Note::parse(root))
}

/// A selectable key for a key picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyOption {
    pub value: &'static str,
    pub label: &'static str,
}

static ALL_KEYS: [KeyOption; 17] = [
    KeyOption { value: "C", label: "C" },
    KeyOption { value: "C#", label: "C# / Db" },
    KeyOption { value: "Db", label: "C# / Db" },
    KeyOption { value: "D", label: "D" },
    KeyOption { value: "D#", label: "D# / Eb" },
    KeyOption { value: "Eb", label: "D# / Eb" },
    KeyOption { value: "E", label: "E" },
    KeyOption { value: "F", label: "F" },
    KeyOption { value: "F#", label: "F# / Gb" },
    KeyOption { value: "Gb", label: "F# / Gb" },
    KeyOption { value: "G", label: "G" },
    KeyOption { value: "G#", label: "G# / Ab" },
    KeyOption { value: "Ab", label: "G# / Ab" },
    KeyOption { value: "A", label: "A" },
    KeyOption { value: "A#", label: "A# / Bb" },
    KeyOption { value: "Bb", label: "A# / Bb" },
    KeyOption { value: "B", label: "B" },
];

/// Every key spelling in chromatic order. Enharmonic pairs appear once per spelling
/// with a shared label.
pub fn all_keys() -> &'static [KeyOption] {
    &ALL_KEYS
}

/// The sharps or flats in a major key signature, in circle-of-fifths order.
///
/// Unknown keys have no accidentals.
///
/// # Examples
/// ```
/// use chordkit::key_signature;
///
/// assert_eq!(key_signature("D"), ["F#", "C#"]);
/// assert_eq!(key_signature("Bb"), ["Bb", "Eb"]);
/// assert!(key_signature("H").is_empty());
/// ```
pub fn key_signature(key: &str) -> &'static [&'static str] {
    static SHARPS: [&str; 7] = ["F#", "C#", "G#", "D#", "A#", "E#", "B#"];
    static FLATS: [&str; 7] = ["Bb", "Eb", "Ab", "Db", "Gb", "Cb", "Fb"];

    match key {
        "C" => &[],
        "G" => &SHARPS[..1],
        "D" => &SHARPS[..2],
        "A" => &SHARPS[..3],
        "E" => &SHARPS[..4],
        "B" => &SHARPS[..5],
        "F#" => &SHARPS[..6],
        "C#" => &SHARPS[..7],
        "F" => &FLATS[..1],
        "Bb" => &FLATS[..2],
        "Eb" => &FLATS[..3],
        "Ab" => &FLATS[..4],
        "Db" => &FLATS[..5],
        "Gb" => &FLATS[..6],
        "Cb" => &FLATS[..7],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_key_default() {
        assert_eq!(detect_key(""), "C");
        assert_eq!(detect_key("no chords here"), "C");
        assert_eq!(detect_key("[N.C.] [Intro]"), "C");
    }

    #[test]
    fn test_detect_key_most_frequent() {
        let text = "[A]Intro [E]pickup [G]Verse [C]line [G]two [D]and [G]end";
        assert_eq!(detect_key(text), "G");
    }

    #[test]
    fn test_detect_key_counts_roots_not_chords() {
        // G, G7 and G/B all have root G.
        assert_eq!(detect_key_from_chords(&["Em", "G", "G7", "G/B", "Em7"]), "G");
    }

    #[test]
    fn test_detect_key_tie_goes_to_first_seen() {
        assert_eq!(detect_key_from_chords(&["D", "A", "A", "D"]), "D");
        assert_eq!(detect_key_from_chords(&["A", "D", "D", "A"]), "A");
    }

    #[test]
    fn test_detect_key_keeps_flat_spelling() {
        assert_eq!(detect_key("[Bb]We [Eb]worship [Bb]God"), "Bb");
    }

    #[test]
    fn test_detect_key_from_chords_empty() {
        let none: [&str; 0] = [];
        assert_eq!(detect_key_from_chords(&none), "C");
        assert_eq!(detect_key_from_chords(&["", "x"]), "C");
        assert_eq!(detect_key_from_chords(&[String::from(" F ")]), "F");
    }

    #[test]
    fn test_detect_key_first_chord() {
        assert_eq!(detect_key_first_chord("[Em]Oh [G]come [G]all"), "E");
        assert_eq!(detect_key_first_chord("no chords"), "C");
        assert_eq!(detect_key_first_chord("[N.C.] then [D]"), "C");
        assert_eq!(detect_key_first_chord("[ F#m7 ]x"), "F#");
    }

    #[test]
    fn test_semitone_difference() {
        assert_eq!(semitone_difference("C", "G"), Some(7));
        assert_eq!(semitone_difference("G", "C"), Some(5));
        assert_eq!(semitone_difference("Bb", "A#"), Some(0));
        assert_eq!(semitone_difference("Am", "C"), Some(3));
        assert_eq!(semitone_difference("B", "C"), Some(1));
        assert_eq!(semitone_difference("C", "B"), Some(11));
        assert_eq!(semitone_difference("H", "C"), None);
        assert_eq!(semitone_difference("C", ""), None);
    }

    #[test]
    fn test_transposed_key_name() {
        assert_eq!(transposed_key_name("G", 2), "A");
        assert_eq!(transposed_key_name("Bb", 1), "B");
        assert_eq!(transposed_key_name("Eb", 1), "E");
        assert_eq!(transposed_key_name("C", -1), "B");
        assert_eq!(transposed_key_name("?", 3), "?");
    }

    #[test]
    fn test_all_keys_table() {
        let keys = all_keys();
        assert_eq!(keys.len(), 17);
        assert_eq!(keys[0], KeyOption { value: "C", label: "C" });
        assert_eq!(keys[1].label, keys[2].label);
        // Every value is a recognized note and every pitch class is present.
        let mut seen = [false; 12];
        for key in keys {
            let note = Note::parse(key.value).unwrap();
            seen[note.pitch_class() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_key_signature_table() {
        assert!(key_signature("C").is_empty());
        assert_eq!(key_signature("G"), ["F#"]);
        assert_eq!(key_signature("E"), ["F#", "C#", "G#", "D#"]);
        assert_eq!(key_signature("C#").len(), 7);
        assert_eq!(key_signature("F"), ["Bb"]);
        assert_eq!(key_signature("Ab"), ["Bb", "Eb", "Ab", "Db"]);
        assert_eq!(key_signature("Cb").last(), Some(&"Fb"));
        assert!(key_signature("Am").is_empty());
    }
}
