use std::{convert::TryFrom, fmt};

/// Number of people in a full day's puzzle (5 rows of 4).
pub const CLEAN_SWEEP_CORRECT: u32 = 20;

pub const CLEAN_SWEEP_MESSAGE: &str = "Clean sweep! All correct with no mistakes or hints.";

/// How a single person in the grid was identified.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Correct,
    Mistake,
    Hint,
    DoubleHint,
}

impl OutcomeKind {
    /// Rendering order for the summary body.
    pub const ALL: [OutcomeKind; 4] = [
        OutcomeKind::Correct,
        OutcomeKind::Mistake,
        OutcomeKind::Hint,
        OutcomeKind::DoubleHint,
    ];

    pub fn glyph(self) -> char {
        match self {
            OutcomeKind::Correct => '🟩',
            OutcomeKind::Mistake => '🟨',
            OutcomeKind::Hint => '🟡',
            OutcomeKind::DoubleHint => '🟠',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutcomeKind::Correct => "correct guess",
            OutcomeKind::Mistake => "mistake",
            OutcomeKind::Hint => "hint",
            OutcomeKind::DoubleHint => "double hint",
        }
    }

    pub fn plural_suffix(self) -> &'static str {
        match self {
            OutcomeKind::Correct => "es",
            _ => "s",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for OutcomeKind {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '🟩' => Ok(OutcomeKind::Correct),
            '🟨' => Ok(OutcomeKind::Mistake),
            '🟡' => Ok(OutcomeKind::Hint),
            '🟠' => Ok(OutcomeKind::DoubleHint),
            _ => Err(value),
        }
    }
}

/// Append `suffix` to `noun` unless `count` is exactly one.
pub fn pluralise(count: u32, noun: &str, suffix: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}{suffix}")
    }
}

/// Per-kind counts of outcome glyphs. Only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u32; 4],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: OutcomeKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn record(&mut self, kind: OutcomeKind) {
        self.counts[kind.index()] += 1;
    }

    /// Key-wise sum of `other` into `self`.
    pub fn merge(&mut self, other: &Tally) {
        for (total, count) in self.counts.iter_mut().zip(other.counts) {
            *total += count;
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero counts in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (OutcomeKind, u32)> + '_ {
        OutcomeKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|&(_, count)| count > 0)
    }

    /// Human readable prose for the tally, e.g. "18 correct guesses. 2 hints."
    pub fn describe(&self) -> String {
        if self.get(OutcomeKind::Correct) == CLEAN_SWEEP_CORRECT {
            return CLEAN_SWEEP_MESSAGE.to_string();
        }

        let mut body = String::new();
        for (kind, count) in self.iter() {
            body.push_str(&format!(
                "{} {}. ",
                count,
                pluralise(count, kind.label(), kind.plural_suffix())
            ));
        }

        body.trim_end().to_string()
    }
}

impl FromIterator<OutcomeKind> for Tally {
    fn from_iter<I: IntoIterator<Item = OutcomeKind>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for kind in iter {
            tally.record(kind);
        }
        tally
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
