//! Line classification for pasted share text.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::outcome::{OutcomeKind, Tally};

/// The puzzle site itself.
pub const SOURCE_LINK: &str = "https://cluesbysam.com";

/// The site hosting this summary generator.
pub const GENERATOR_LINK: &str = "https://altforsam.com";

const IGNORED_DOMAINS: [&str; 2] = ["cluesbysam.com", "altforsam.com"];

/// Matches:
/// * "I solved the daily Clues by Sam, Nov 17th 2025 (Easy), in 02:50"
/// * "Clues By Sam (Nov 14th 2025) in less than 17 minutes"
/// * "#CluesBySam Nov 1st 2025"
static PREAMBLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:I solved the daily )?#?Clues ?[Bb]y ?Sam").expect("valid regex"));

/// Four people per row, one glyph each.
static STRICT_ROW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[🟩🟨🟡🟠]{4}").expect("valid regex"));

/// How result rows are recognised.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RowDetection {
    /// A contiguous run of at least four outcome glyphs.
    #[default]
    Strict,
    /// Any outcome glyph anywhere on the line.
    Permissive,
}

impl FromStr for RowDetection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(RowDetection::Strict),
            "permissive" => Ok(RowDetection::Permissive),
            other => Err(format!("unknown detection mode: {other}")),
        }
    }
}

impl fmt::Display for RowDetection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowDetection::Strict => f.write_str("strict"),
            RowDetection::Permissive => f.write_str("permissive"),
        }
    }
}

/// Category of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    Preamble,
    /// Glyph counts found on this line only.
    ResultRow(Tally),
    IgnoredLink,
    Unknown,
    Blank,
}

pub fn is_preamble(line: &str) -> bool {
    PREAMBLE_REGEX.is_match(line)
}

pub fn is_ignored_link(line: &str) -> bool {
    IGNORED_DOMAINS.iter().any(|domain| line.contains(domain))
}

pub fn is_result_row(line: &str, detection: RowDetection) -> bool {
    match detection {
        RowDetection::Strict => STRICT_ROW_REGEX.is_match(line),
        RowDetection::Permissive => line.chars().any(|c| OutcomeKind::try_from(c).is_ok()),
    }
}

/// Count every outcome glyph on the line, skipping anything else.
pub fn count_glyphs(line: &str) -> Tally {
    line.chars()
        .filter_map(|c| OutcomeKind::try_from(c).ok())
        .collect()
}

/// Classifies lines in fixed priority order: preamble, result row,
/// ignored link, then unknown or blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier {
    detection: RowDetection,
}

impl LineClassifier {
    pub fn new(detection: RowDetection) -> Self {
        Self { detection }
    }

    pub fn detection(&self) -> RowDetection {
        self.detection
    }

    pub fn classify(&self, line: &str) -> ClassifiedLine {
        let classified = if is_preamble(line) {
            ClassifiedLine::Preamble
        } else if is_result_row(line, self.detection) {
            ClassifiedLine::ResultRow(count_glyphs(line))
        } else if is_ignored_link(line) {
            ClassifiedLine::IgnoredLink
        } else if line.trim().is_empty() {
            ClassifiedLine::Blank
        } else {
            ClassifiedLine::Unknown
        };

        trace!("classified {:?} as {:?}", line, classified);
        classified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> LineClassifier {
        LineClassifier::new(RowDetection::Strict)
    }

    #[test]
    fn test_preamble_variants() {
        let lines = [
            "I solved the daily Clues by Sam, Nov 17th 2025 (Easy), in 02:50",
            "I solved the daily Clues by Sam (Nov 14th 2025) in less than 17 minutes",
            "Clues by Sam, Nov 1st 2025",
            "Clues By Sam - Nov 2nd 2025 (Hard)",
            "#CluesBySam Nov 3rd 2025",
            "#Clues by Sam",
        ];

        for line in lines {
            assert_eq!(strict().classify(line), ClassifiedLine::Preamble, "{line}");
        }
    }

    #[test]
    fn test_preamble_must_start_line() {
        assert!(!is_preamble("Yesterday I solved Clues by Sam"));
        assert!(!is_preamble("  Clues by Sam"));
    }

    #[test]
    fn test_result_row_counts() {
        let classified = strict().classify("🟩🟨🟡🟠");
        let ClassifiedLine::ResultRow(tally) = classified else {
            panic!("expected result row, got {classified:?}");
        };

        for kind in OutcomeKind::ALL {
            assert_eq!(tally.get(kind), 1);
        }
    }

    #[test]
    fn test_result_row_tolerates_surrounding_text() {
        let classified = strict().classify("  🟩🟩🟩🟡  ");
        let ClassifiedLine::ResultRow(tally) = classified else {
            panic!("expected result row, got {classified:?}");
        };

        assert_eq!(tally.get(OutcomeKind::Correct), 3);
        assert_eq!(tally.get(OutcomeKind::Hint), 1);
    }

    #[test]
    fn test_interspersed_characters_are_skipped() {
        let tally = count_glyphs("🟩 x 🟨🟨🟨🟨 ⬛ 🟠");
        assert_eq!(tally.get(OutcomeKind::Correct), 1);
        assert_eq!(tally.get(OutcomeKind::Mistake), 4);
        assert_eq!(tally.get(OutcomeKind::DoubleHint), 1);
        assert_eq!(tally.total(), 6);
    }

    #[test]
    fn test_strict_needs_a_run_of_four() {
        assert!(!is_result_row("🟩🟩🟩", RowDetection::Strict));
        assert!(!is_result_row("🟩 🟩 🟩 🟩", RowDetection::Strict));
        assert!(is_result_row("🟩🟩🟩🟩🟩", RowDetection::Strict));
    }

    #[test]
    fn test_permissive_accepts_any_glyph() {
        let classifier = LineClassifier::new(RowDetection::Permissive);
        let classified = classifier.classify("🟩 🟩 🟩");
        let ClassifiedLine::ResultRow(tally) = classified else {
            panic!("expected result row, got {classified:?}");
        };
        assert_eq!(tally.get(OutcomeKind::Correct), 3);

        assert_eq!(strict().classify("🟩 🟩 🟩"), ClassifiedLine::Unknown);
    }

    #[test]
    fn test_ignored_links() {
        assert_eq!(strict().classify("https://cluesbysam.com"), ClassifiedLine::IgnoredLink);
        assert_eq!(
            strict().classify("Play at https://cluesbysam.com/today"),
            ClassifiedLine::IgnoredLink
        );
        assert_eq!(strict().classify(GENERATOR_LINK), ClassifiedLine::IgnoredLink);
    }

    #[test]
    fn test_priority_order() {
        // Preamble beats glyphs and links on the same line.
        assert_eq!(
            strict().classify("Clues by Sam 🟩🟩🟩🟩 https://cluesbysam.com"),
            ClassifiedLine::Preamble
        );
        // Result row beats link.
        assert!(matches!(
            strict().classify("🟩🟩🟩🟩 https://cluesbysam.com"),
            ClassifiedLine::ResultRow(_)
        ));
    }

    #[test]
    fn test_blank_and_unknown() {
        assert_eq!(strict().classify(""), ClassifiedLine::Blank);
        assert_eq!(strict().classify("   \t"), ClassifiedLine::Blank);
        assert_eq!(strict().classify("foo"), ClassifiedLine::Unknown);
    }

    #[test]
    fn test_classification_is_repeatable() {
        let line = "🟩🟨🟩🟩";
        assert_eq!(strict().classify(line), strict().classify(line));
    }

    #[test]
    fn test_detection_from_str() {
        assert_eq!("strict".parse::<RowDetection>(), Ok(RowDetection::Strict));
        assert_eq!("Permissive".parse::<RowDetection>(), Ok(RowDetection::Permissive));
        assert!("loose".parse::<RowDetection>().is_err());
        assert_eq!(RowDetection::default(), RowDetection::Strict);
    }

    mod properties {
        use super::*;
        use crate::test_support::share_line;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_classification_is_repeatable(line in share_line()) {
                for classifier in [strict(), LineClassifier::new(RowDetection::Permissive)] {
                    prop_assert_eq!(classifier.classify(&line), classifier.classify(&line));
                }
            }

            #[test]
            fn prop_row_counts_every_glyph(line in share_line()) {
                if let ClassifiedLine::ResultRow(tally) = strict().classify(&line) {
                    let glyphs = line
                        .chars()
                        .filter(|&c| OutcomeKind::try_from(c).is_ok())
                        .count() as u32;
                    prop_assert_eq!(tally.total(), glyphs);
                }
            }

            #[test]
            fn prop_blank_only_when_whitespace(line in share_line()) {
                let is_blank = strict().classify(&line) == ClassifiedLine::Blank;
                prop_assert_eq!(is_blank, line.trim().is_empty());
            }
        }
    }
}
