//! Day-of-operation decoding.
//!
//! The days field of a schedule row uses several overlapping grammars
//! (`Mo-Fr`, `Mo,Th`, `SaSu`, `We`, `2356`, plus free-form tokens such as `irr`).
//! Each grammar is a pure matcher; [`decode`] tries them in a fixed order and the
//! first hit wins. Bitmaps are indexed Monday-first but rendered Sunday-first.

use chrono::Weekday;
use log::{debug, trace, warn};
use regex::Regex;
use std::sync::LazyLock;

/// Display width of the days column.
pub const DAYS_WIDTH: usize = 7;
/// Placeholder for a day the broadcast is off.
pub const BLANK_DAY: char = '.';
/// Shown instead of a bitmap for inactive entries.
pub const INACTIVE_DAYS: &str = "inactiv";

/// Monday-first, matching the ISO digits used by the digit grammar.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Render order. The week starts on Sunday on screen.
const DISPLAY_ORDER: [(Weekday, char); 7] = [
    (Weekday::Sun, 'S'),
    (Weekday::Mon, 'M'),
    (Weekday::Tue, 'T'),
    (Weekday::Wed, 'W'),
    (Weekday::Thu, 'T'),
    (Weekday::Fri, 'F'),
    (Weekday::Sat, 'S'),
];

/// Tokens that describe irregular or seasonal operation rather than a weekly pattern.
const NON_WEEKLY_TOKENS: &[&str] = &[
    "Ram", "Haj", "HBF", "Xmas", "sum", "win", "alt", "irr", "tent", "plan", "Tests",
];

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]{2})-([A-Za-z]{2})$").unwrap());
static LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}(,[A-Za-z]{2})+$").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-7]+$").unwrap());

/// Seven on/off slots, slot 0 = Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekMask([bool; 7]);

impl WeekMask {
    pub fn all() -> Self {
        WeekMask([true; 7])
    }

    pub fn mark(&mut self, day: Weekday) {
        self.0[day.num_days_from_monday() as usize] = true;
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0[day.num_days_from_monday() as usize]
    }

    /// Days in Monday-first order.
    pub fn days(&self) -> Vec<Weekday> {
        WEEK.iter().copied().filter(|d| self.contains(*d)).collect()
    }

    /// `SMTWTFS`-style string, Sunday first, blanks as `.`.
    pub fn render(&self) -> String {
        DISPLAY_ORDER
            .iter()
            .map(|(day, letter)| if self.contains(*day) { *letter } else { BLANK_DAY })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayPattern {
    /// A regular weekly schedule.
    Weekly(WeekMask),
    /// A known irregular/seasonal token (`irr`, `Ram`, `Xmas`, ...). No weekly bitmap
    /// is derived; only the fact that the entry is non-weekly survives decoding.
    NonWeekly(String),
    /// Text that no grammar accepts.
    Literal(String),
}

impl DayPattern {
    pub fn bitmap(&self) -> Option<&WeekMask> {
        match self {
            DayPattern::Weekly(mask) => Some(mask),
            _ => None,
        }
    }

    pub fn is_non_weekly(&self) -> bool {
        matches!(self, DayPattern::NonWeekly(_))
    }

    /// Fixed-width display string.
    pub fn render(&self) -> String {
        match self {
            DayPattern::Weekly(mask) => mask.render(),
            DayPattern::NonWeekly(raw) | DayPattern::Literal(raw) => pad_literal(raw),
        }
    }
}

fn pad_literal(raw: &str) -> String {
    let mut s = raw.to_string();
    let len = s.chars().count();
    if len < DAYS_WIDTH {
        s.extend(std::iter::repeat_n(BLANK_DAY, DAYS_WIDTH - len));
    }
    s
}

pub fn weekday_from_abbrev(s: &str) -> Option<Weekday> {
    match s {
        "Mo" => Some(Weekday::Mon),
        "Tu" => Some(Weekday::Tue),
        "We" => Some(Weekday::Wed),
        "Th" => Some(Weekday::Thu),
        "Fr" => Some(Weekday::Fri),
        "Sa" => Some(Weekday::Sat),
        "Su" => Some(Weekday::Sun),
        _ => None,
    }
}

type Matcher = fn(&str) -> Option<DayPattern>;

/// Priority order matters: `Mo-Fr` and `Mo,Fr` must be claimed before the
/// fixed-length pair and single-day forms look at them.
const GRAMMARS: &[(&str, Matcher)] = &[
    ("range", match_range),
    ("list", match_list),
    ("pair", match_pair),
    ("single", match_single),
    ("digits", match_digits),
    ("non-weekly", match_non_weekly),
    ("continuation", match_continuation),
];

/// Decodes a raw days field. An empty field means every day.
pub fn decode(raw: &str) -> DayPattern {
    if raw.is_empty() {
        return DayPattern::Weekly(WeekMask::all());
    }
    for (name, matcher) in GRAMMARS {
        if let Some(pattern) = matcher(raw) {
            trace!("days {:?} matched {} -> {:?}", raw, name, pattern);
            return pattern;
        }
    }
    debug!("Unparsed day string: {}", raw);
    DayPattern::Literal(raw.to_string())
}

/// `Fr-We`: every day from the first through the second, wrapping past Sunday.
/// Identical endpoints cover the whole week.
fn match_range(raw: &str) -> Option<DayPattern> {
    let caps = RANGE_RE.captures(raw)?;
    let (first, last) = match (weekday_from_abbrev(&caps[1]), weekday_from_abbrev(&caps[2])) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            warn!("Error parsing hyphenated day range: {}", raw);
            return Some(DayPattern::Literal(raw.to_string()));
        }
    };

    let start = first.num_days_from_monday() as usize;
    let end = last.num_days_from_monday() as usize;
    let span = match (end + 7 - start) % 7 {
        0 => 6,
        n => n,
    };
    let mut mask = WeekMask::default();
    for offset in 0..=span {
        mask.mark(WEEK[(start + offset) % 7]);
    }
    Some(DayPattern::Weekly(mask))
}

fn match_list(raw: &str) -> Option<DayPattern> {
    if !LIST_RE.is_match(raw) {
        return None;
    }
    let mut mask = WeekMask::default();
    for abbrev in raw.split(',') {
        mask.mark(weekday_from_abbrev(abbrev)?);
    }
    Some(DayPattern::Weekly(mask))
}

fn match_pair(raw: &str) -> Option<DayPattern> {
    if raw.len() != 4 {
        return None;
    }
    let first = weekday_from_abbrev(raw.get(0..2)?)?;
    let second = weekday_from_abbrev(raw.get(2..4)?)?;
    let mut mask = WeekMask::default();
    mask.mark(first);
    mask.mark(second);
    Some(DayPattern::Weekly(mask))
}

fn match_single(raw: &str) -> Option<DayPattern> {
    let day = weekday_from_abbrev(raw)?;
    let mut mask = WeekMask::default();
    mask.mark(day);
    Some(DayPattern::Weekly(mask))
}

/// `2356`: ISO weekday digits, 1 = Monday .. 7 = Sunday.
fn match_digits(raw: &str) -> Option<DayPattern> {
    if !DIGITS_RE.is_match(raw) {
        return None;
    }
    let mut mask = WeekMask::default();
    for b in raw.bytes() {
        mask.mark(WEEK[(b - b'1') as usize]);
    }
    Some(DayPattern::Weekly(mask))
}

fn match_non_weekly(raw: &str) -> Option<DayPattern> {
    if NON_WEEKLY_TOKENS.contains(&raw) {
        debug!("non-weekly day token: {}", raw);
        return Some(DayPattern::NonWeekly(raw.to_string()));
    }
    None
}

/// `+-50` and friends continue a previous entry; shown as-is.
fn match_continuation(raw: &str) -> Option<DayPattern> {
    if raw.starts_with("+-") && raw.len() > 2 {
        return Some(DayPattern::Literal(raw.to_string()));
    }
    None
}
