//! Proptest strategies for generating pasted share text.

use proptest::prelude::*;

/// Pieces that real pastes are made of, plus stray text and `\r`.
fn fragment() -> impl Strategy<Value = String> {
    let known = prop::sample::select(vec![
        "🟩",
        "🟨",
        "🟡",
        "🟠",
        "🟩🟩🟩🟩",
        "I solved the daily ",
        "Clues by Sam",
        "Clues By Sam",
        "#CluesBySam",
        "https://cluesbysam.com",
        "altforsam.com",
        "\r",
        " ",
    ])
    .prop_map(str::to_string);

    prop_oneof![3 => known, 1 => "[a-zA-Z0-9 ,()#]{0,8}"]
}

/// A single line, possibly blank.
pub fn share_line() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..6).prop_map(|parts| parts.concat())
}

/// A whole paste: lines joined with `\n`, blank lines included.
pub fn share_text() -> impl Strategy<Value = String> {
    prop::collection::vec(share_line(), 0..12).prop_map(|lines| lines.join("\n"))
}
