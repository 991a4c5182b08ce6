use crate::days::{DayPattern, INACTIVE_DAYS};
use serde::Serialize;

/// Content/modulation category of a broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BroadcastFlag {
    Analog,
    Digital,
    Numbers,
    Fax,
    Music,
    News,
    Morse,
    Religious,
    Time,
    Volmet,
    Weather,
    Navtex,
}

impl BroadcastFlag {
    pub const ALL: [BroadcastFlag; 12] = [
        BroadcastFlag::Analog,
        BroadcastFlag::Digital,
        BroadcastFlag::Numbers,
        BroadcastFlag::Fax,
        BroadcastFlag::Music,
        BroadcastFlag::News,
        BroadcastFlag::Morse,
        BroadcastFlag::Religious,
        BroadcastFlag::Time,
        BroadcastFlag::Volmet,
        BroadcastFlag::Weather,
        BroadcastFlag::Navtex,
    ];

    pub fn as_char(self) -> char {
        match self {
            BroadcastFlag::Analog => 'a',
            BroadcastFlag::Digital => 'd',
            BroadcastFlag::Numbers => 'e',
            BroadcastFlag::Fax => 'f',
            BroadcastFlag::Music => 'm',
            BroadcastFlag::News => 'n',
            BroadcastFlag::Morse => 'o',
            BroadcastFlag::Religious => 'r',
            BroadcastFlag::Time => 't',
            BroadcastFlag::Volmet => 'v',
            BroadcastFlag::Weather => 'w',
            BroadcastFlag::Navtex => 'x',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_char() == c)
    }
}

impl std::str::FromStr for BroadcastFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c)
                .ok_or_else(|| format!("Unknown flag '{s}'. Use one of: adefmnortvwx")),
            _ => Err(format!("Flag must be a single character, got '{s}'")),
        }
    }
}

/// Flag characters known for a record. Empty means "unknown", not "none of these".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagSet(String);

impl FlagSet {
    pub fn append(&mut self, flag: BroadcastFlag) {
        if !self.contains(flag) {
            self.0.push(flag.as_char());
        }
    }

    pub fn contains(&self, flag: BroadcastFlag) -> bool {
        self.0.contains(flag.as_char())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One normalized schedule row.
#[derive(Clone, Debug)]
pub struct BroadcastRecord {
    pub frequency_khz: u32,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
    /// Raw days field; not kept for inactive entries.
    pub raw_days: Option<String>,
    /// Decoded days; `None` for inactive entries.
    pub days: Option<DayPattern>,
    pub origin: String,
    pub broadcaster: String,
    pub language_codes: Vec<String>,
    /// Language codes with known names expanded, comma-joined.
    pub languages: String,
    pub target_region: String,
    pub inactive: bool,
    pub flags: FlagSet,
}

impl BroadcastRecord {
    pub fn start_minutes(&self) -> i32 {
        (self.start_hour * 60 + self.start_minute) as i32
    }

    pub fn end_minutes(&self) -> i32 {
        (self.end_hour * 60 + self.end_minute) as i32
    }

    /// Seven-character days column.
    pub fn days_printable(&self) -> String {
        if self.inactive {
            return INACTIVE_DAYS.to_string();
        }
        self.days.as_ref().map(DayPattern::render).unwrap_or_default()
    }
}

/// Flat view of a record for CSV/JSON export.
#[derive(Debug, Serialize)]
pub struct RecordRow<'a> {
    pub frequency_khz: u32,
    pub start: String,
    pub end: String,
    pub days: String,
    /// Operating days, Monday first; empty unless the days decoded to a weekly bitmap.
    pub weekdays: String,
    pub non_weekly: bool,
    pub broadcaster: &'a str,
    pub origin: &'a str,
    pub languages: &'a str,
    pub language_codes: String,
    pub target_region: &'a str,
    pub inactive: bool,
    pub flags: &'a str,
}

impl<'a> From<&'a BroadcastRecord> for RecordRow<'a> {
    fn from(r: &'a BroadcastRecord) -> Self {
        RecordRow {
            frequency_khz: r.frequency_khz,
            start: format!("{:02}{:02}", r.start_hour, r.start_minute),
            end: format!("{:02}{:02}", r.end_hour, r.end_minute),
            days: r.days_printable(),
            weekdays: r
                .days
                .as_ref()
                .and_then(DayPattern::bitmap)
                .map(|m| m.days().iter().map(|d| d.to_string()).collect::<Vec<_>>().join(","))
                .unwrap_or_default(),
            non_weekly: r.days.as_ref().is_some_and(DayPattern::is_non_weekly),
            broadcaster: &r.broadcaster,
            origin: &r.origin,
            languages: &r.languages,
            language_codes: r.language_codes.join(","),
            target_region: &r.target_region,
            inactive: r.inactive,
            flags: r.flags.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_flag_dedups() {
        let mut flags = FlagSet::default();
        assert!(flags.is_empty());
        flags.append(BroadcastFlag::Analog);
        flags.append(BroadcastFlag::Time);
        flags.append(BroadcastFlag::Analog);
        assert_eq!(flags.as_str(), "at");
        flags.append(BroadcastFlag::Morse);
        assert!(flags.contains(BroadcastFlag::Morse));
        assert!(!flags.contains(BroadcastFlag::News));
    }

    #[test]
    fn test_flag_fromstr() {
        assert_eq!("o".parse::<BroadcastFlag>().unwrap(), BroadcastFlag::Morse);
        assert_eq!("x".parse::<BroadcastFlag>().unwrap(), BroadcastFlag::Navtex);
        assert!("z".parse::<BroadcastFlag>().is_err());
        assert!("ab".parse::<BroadcastFlag>().is_err());
        assert!("".parse::<BroadcastFlag>().is_err());
    }
}
