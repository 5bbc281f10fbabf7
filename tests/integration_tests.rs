//! Integration tests for chordkit
//!
//! Exercises the public API end to end: chart text in, transposed chart text out.

use chordkit::{
    detect_key, detect_key_first_chord, handle_transpose, parse_chords, semitone_difference,
    transpose_chord, transpose_note, transpose_text, ChordChart,
};
use pretty_assertions::assert_eq;

const HOW_GREAT: &str = r#"---
title: How Great Thou Art
key: Bb
tempo: 72
---
Verse 1:
O Lord my [Bb]God, when I in awesome [Eb]wonder
Consider [Bb]all the worlds Thy hands have [F]made
Chorus:
Then sings my [Bb]soul, my [Eb/G]Saviour God, to [Bb]thee
How great Thou [F]art, how great Thou [Bb]art
"#;

#[test]
fn test_documented_scenarios() {
    assert_eq!(
        transpose_text("[C]Amaz[F]ing [G]grace", 2),
        "[D]Amaz[G]ing [A]grace"
    );
    assert_eq!(transpose_chord("F#m7", -2), "Em7");
    assert_eq!(transpose_chord("G/B", 2), "A/C#");
    assert_eq!(transpose_note("H", 3), "H");
    assert_eq!(parse_chords("We [Bb]worship [Gm7]God"), vec!["Bb", "Gm7"]);
    assert_eq!(detect_key("no chords here"), "C");
    assert_eq!(semitone_difference("C", "G"), Some(7));
    assert_eq!(semitone_difference("G", "C"), Some(5));
}

#[test]
fn test_chart_transpose_to_target_key() {
    let chart = ChordChart::parse(HOW_GREAT).unwrap();
    assert_eq!(chart.key().as_deref(), Some("Bb"));
    assert_eq!(detect_key(&chart.body), "Bb");
    assert_eq!(detect_key_first_chord(&chart.body), "Bb");

    let up = semitone_difference(chart.key().as_deref().unwrap(), "C").unwrap();
    assert_eq!(up, 2);
    let transposed = chart.transposed(i32::from(up));

    let expected = r#"---
title: How Great Thou Art
key: C
tempo: 72
---
Verse 1:
O Lord my [C]God, when I in awesome [F]wonder
Consider [C]all the worlds Thy hands have [G]made
Chorus:
Then sings my [C]soul, my [F/A]Saviour God, to [C]thee
How great Thou [G]art, how great Thou [C]art
"#;
    assert_eq!(transposed.render().unwrap(), expected);
    assert_eq!(chart.transposed_to("C").unwrap(), transposed);
}

#[test]
fn test_chart_transpose_keeps_flat_spelling() {
    let chart = ChordChart::parse(HOW_GREAT).unwrap().transposed(1);
    assert_eq!(chart.metadata.key.as_deref(), Some("B"));
    assert_eq!(
        chart.chords(),
        vec!["B", "E", "B", "F#", "B", "E/G#", "B", "F#", "B"]
    );
}

#[test]
fn test_chart_up_and_back_down() {
    let chart = ChordChart::parse(HOW_GREAT).unwrap();
    let there_and_back = chart.transposed(5).transposed(-5);
    assert_eq!(there_and_back, chart);
}

#[test]
fn test_noisy_extraction_output_survives() {
    // Text-extraction output can carry tokens that are not chords. Token content is
    // trimmed, so a blank token collapses to `[]`.
    let noisy = "[Intro] [G] [?] [x4]\n[Verse 1]\n[G]Amazing [  ]grace [N.C.]";
    let transposed = transpose_text(noisy, 3);
    assert_eq!(
        transposed,
        "[Intro] [A#] [?] [x4]\n[Verse 1]\n[A#]Amazing []grace [N.C.]"
    );
}

#[test]
fn test_transpose_endpoint() {
    let response = handle_transpose(r#"{"text":"[D]Here I [A/C#]am","semitones":-2}"#);
    assert!(response.success);
    assert_eq!(response.text.as_deref(), Some("[C]Here I [G/B]am"));
    assert_eq!(response.error, None);
}
