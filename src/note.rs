//! # Notes and Pitch Classes
//!
//! A [`Note`] is one of the twelve pitch classes, stored as an index into the sharp-spelled
//! chromatic scale `C C# D D# E F F# G G# A A# B`, plus the [`Spelling`] it was written with.
//!
//! Spelling is presentation only: `C#` and `Db` compare as different values (different
//! spelling) but share a [`Note::pitch_class`]. Transposing a note keeps its spelling, so a
//! flat-spelled root stays flat-spelled and a sharp or natural root comes out sharp.
//!
//! ## Recognized Names
//! Only the twelve sharp names and the five flat aliases (`Db Eb Gb Ab Bb`) are notes.
//! `Cb`, `Fb`, `E#` and `B#` are not recognized and pass through transposition untouched.

use std::fmt;

/// The canonical chromatic scale, indexed by pitch class.
pub const SHARP_SCALE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings of the same pitch classes.
pub const FLAT_SCALE: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// How accidentals are written when a note is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

/// A pitch class with a display spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pitch_class: u8,
    spelling: Spelling,
}

impl Note {
    /// Build a note from a pitch class (reduced mod 12).
    pub fn new(pitch_class: u8, spelling: Spelling) -> Self {
        Note {
            pitch_class: pitch_class % 12,
            spelling,
        }
    }

    /// Parse a bare note name like `"G"`, `"F#"` or `"Bb"`.
    ///
    /// Returns `None` for anything else, including chord suffixes (`"Gm"`) and
    /// surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(index) = SHARP_SCALE.iter().position(|n| *n == name) {
            return Some(Note::new(index as u8, Spelling::Sharp));
        }
        FLAT_SCALE
            .iter()
            .position(|n| *n == name)
            .map(|index| Note::new(index as u8, Spelling::Flat))
    }

    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Same pitch class, different spelling.
    pub fn respelled(self, spelling: Spelling) -> Self {
        Note { spelling, ..self }
    }

    /// Move the note by any number of semitones, keeping its spelling.
    pub fn transpose(self, semitones: i32) -> Self {
        // Reduce the offset first so extreme values cannot overflow.
        let shift = semitones.rem_euclid(12) as u8;
        Note::new((self.pitch_class + shift) % 12, self.spelling)
    }

    /// The display name under this note's spelling.
    pub fn name(&self) -> &'static str {
        match self.spelling {
            Spelling::Sharp => SHARP_SCALE[self.pitch_class as usize],
            Spelling::Flat => FLAT_SCALE[self.pitch_class as usize],
        }
    }

    /// Semitones upward from `self` to `other`, in `0..12`.
    pub fn semitones_to(&self, other: &Note) -> u8 {
        (other.pitch_class + 12 - self.pitch_class) % 12
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transpose a single note name by `semitones`.
///
/// Flat input gives flat output, sharp or natural input gives sharp output.
/// Unrecognized names are returned unchanged.
///
/// # Examples
/// ```
/// use chordkit::transpose_note;
///
/// assert_eq!(transpose_note("C", 1), "C#");
/// assert_eq!(transpose_note("Bb", 2), "C");
/// assert_eq!(transpose_note("Eb", -2), "Db");
/// assert_eq!(transpose_note("H", 3), "H");
/// ```
pub fn transpose_note(note: &str, semitones: i32) -> String {
    match Note::parse(note) {
        Some(parsed) => parsed.transpose(semitones).name().to_string(),
        None => note.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sharp_and_flat_names() {
        let c_sharp = Note::parse("C#").unwrap();
        let d_flat = Note::parse("Db").unwrap();
        assert_eq!(c_sharp.pitch_class(), 1);
        assert_eq!(d_flat.pitch_class(), 1);
        assert_eq!(c_sharp.spelling(), Spelling::Sharp);
        assert_eq!(d_flat.spelling(), Spelling::Flat);
        assert_ne!(c_sharp, d_flat);
        assert_eq!(d_flat.respelled(Spelling::Sharp), c_sharp);
    }

    #[test]
    fn test_parse_rejects_non_notes() {
        for name in ["", "H", "c", "Gm", " G", "Cb", "E#", "B#", "Fb", "C##"] {
            assert_eq!(Note::parse(name), None, "{:?} should not parse", name);
        }
    }

    #[test]
    fn test_transpose_up_and_down() {
        assert_eq!(transpose_note("C", 2), "D");
        assert_eq!(transpose_note("B", 1), "C");
        assert_eq!(transpose_note("C", -1), "B");
        assert_eq!(transpose_note("A", 3), "C");
        assert_eq!(transpose_note("F#", -2), "E");
    }

    #[test]
    fn test_transpose_keeps_spelling() {
        assert_eq!(transpose_note("Bb", 1), "B");
        assert_eq!(transpose_note("Bb", 3), "Db");
        assert_eq!(transpose_note("A", 1), "A#");
        assert_eq!(transpose_note("G#", 2), "A#");
        assert_eq!(transpose_note("Ab", 2), "Bb");
    }

    #[test]
    fn test_spelling_defaults_and_respelling() {
        assert_eq!(Spelling::default(), Spelling::Sharp);
        assert_eq!(Note::parse("E").unwrap().spelling(), Spelling::Sharp);
        let b_flat = Note::parse("A#").unwrap().respelled(Spelling::Flat);
        assert_eq!(b_flat.name(), "Bb");
        assert_eq!(b_flat.transpose(2).name(), "C");
        assert_eq!(b_flat.transpose(4).name(), "D");
        assert_eq!(b_flat.transpose(1).respelled(Spelling::Sharp).name(), "B");
    }

    #[test]
    fn test_transpose_large_offsets() {
        assert_eq!(transpose_note("C", 12), "C");
        assert_eq!(transpose_note("C", 25), "C#");
        assert_eq!(transpose_note("C", -13), "B");
        assert_eq!(transpose_note("C", i32::MAX), transpose_note("C", i32::MAX % 12));
        assert_eq!(transpose_note("D", i32::MIN), transpose_note("D", i32::MIN.rem_euclid(12)));
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(transpose_note("H", 3), "H");
        assert_eq!(transpose_note("", 3), "");
        assert_eq!(transpose_note("Cb", 1), "Cb");
    }

    #[test]
    fn test_semitones_to() {
        let c = Note::parse("C").unwrap();
        let g = Note::parse("G").unwrap();
        assert_eq!(c.semitones_to(&g), 7);
        assert_eq!(g.semitones_to(&c), 5);
        assert_eq!(c.semitones_to(&c), 0);
    }
}
