//! # Vocal Key Finder
//!
//! Ranks the keys a song could be moved to for a singer, given the lowest and highest
//! notes the song currently asks of them.
//!
//! Each offset from -6 to +6 semitones is tried. Notes pushed below the comfortable low
//! or above the comfortable high count as strained, and the strain decides the
//! difficulty. Each option also carries the guitar capo position that reaches it.
//!
//! ## Pitch Range
//! Pitches are written with an octave number, `C2` through `C6`, sharps or flats.

use std::fmt;

use serde::Serialize;

use crate::error::ChordKitError;
use crate::note::{Note, SHARP_SCALE};

/// Lowest octave number a pitch may use.
pub const LOWEST_OCTAVE: u8 = 2;
/// Number of semitones from `C2` up to `C6`.
pub const PITCH_SPAN: u8 = 48;

/// An octave-qualified pitch in `C2..=C6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pitch {
    /// Semitones above `C2`.
    index: u8,
}

impl Pitch {
    /// Parse `"C#3"`, `"Bb4"`, `"C6"`.
    pub fn parse(s: &str) -> Option<Self> {
        let split = s.find(|c: char| c.is_ascii_digit())?;
        let (name, octave) = s.split_at(split);
        let note = Note::parse(name)?;
        let octave: u8 = octave.parse().ok()?;
        let index = octave
            .checked_sub(LOWEST_OCTAVE)?
            .checked_mul(12)?
            .checked_add(note.pitch_class())?;
        (index <= PITCH_SPAN).then_some(Pitch { index })
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// Move by `semitones`, or `None` if the result leaves the range.
    pub fn shifted(self, semitones: i32) -> Option<Self> {
        let index = i32::from(self.index) + semitones;
        if (0..=i32::from(PITCH_SPAN)).contains(&index) {
            Some(Pitch { index: index as u8 })
        } else {
            None
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = SHARP_SCALE[(self.index % 12) as usize];
        let octave = self.index / 12 + LOWEST_OCTAVE;
        write!(f, "{}{}", name, octave)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    fn from_strain(strained_notes: u8) -> Self {
        match strained_notes {
            0 => Difficulty::Easy,
            1..=2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

/// One candidate key for the singer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyFit {
    pub key: String,
    pub semitones: i32,
    pub capo: u8,
    pub difficulty: Difficulty,
    pub strained_notes: u8,
    pub low: String,
    pub high: String,
}

/// Rank every key within a tritone of `original_key` for a singer whose comfortable
/// range is `low..=high`.
///
/// Offsets that would push either bound outside `C2..=C6` are skipped. Results are
/// sorted by difficulty, then by number of strained notes, then by offset.
pub fn find_keys(low: &str, high: &str, original_key: &str) -> Result<Vec<KeyFit>, ChordKitError> {
    let invalid_range = || ChordKitError::InvalidRange {
        low: low.to_string(),
        high: high.to_string(),
    };
    let low_pitch = Pitch::parse(low).ok_or_else(invalid_range)?;
    let high_pitch = Pitch::parse(high).ok_or_else(invalid_range)?;
    if low_pitch >= high_pitch {
        return Err(invalid_range());
    }
    let key = Note::parse(original_key.trim())
        .ok_or_else(|| ChordKitError::UnknownKey(original_key.to_string()))?;

    let mut fits = Vec::new();
    for semitones in -6..=6 {
        let (Some(new_low), Some(new_high)) =
            (low_pitch.shifted(semitones), high_pitch.shifted(semitones))
        else {
            continue;
        };

        let mut strained_notes = 0;
        if new_low < low_pitch {
            strained_notes += low_pitch.index() - new_low.index();
        }
        if new_high > high_pitch {
            strained_notes += new_high.index() - high_pitch.index();
        }

        fits.push(KeyFit {
            key: SHARP_SCALE[key.transpose(semitones).pitch_class() as usize].to_string(),
            semitones,
            capo: semitones.rem_euclid(12) as u8,
            difficulty: Difficulty::from_strain(strained_notes),
            strained_notes,
            low: new_low.to_string(),
            high: new_high.to_string(),
        });
    }

    fits.sort_by_key(|fit| (fit.difficulty, fit.strained_notes));
    Ok(fits)
}
