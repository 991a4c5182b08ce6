use crate::bands::MeterBand;
use crate::model::{BroadcastFlag, BroadcastRecord};
use log::trace;

/// Slack applied to both ends of a broadcast when filtering by time of day.
pub const TIME_TOLERANCE_MINUTES: i32 = 30;

/// Active filters for one query. `None` leaves a filter open.
#[derive(Clone, Debug, Default)]
pub struct FilterConfig {
    pub frequency_khz: Option<u32>,
    pub frequency_tolerance_khz: Option<u32>,
    pub band: Option<MeterBand>,
    pub band_tolerance_khz: Option<u32>,
    pub region: Option<String>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub broadcaster: Option<String>,
    pub language: Option<String>,
    pub flag: Option<BroadcastFlag>,
    pub show_inactive: bool,
}

impl FilterConfig {
    pub fn accept(&self, r: &BroadcastRecord) -> bool {
        matches_frequency(r, self.frequency_khz, self.frequency_tolerance_khz)
            && matches_band(r, self.band.as_ref(), self.band_tolerance_khz)
            && matches_region(r, self.region.as_deref())
            && matches_time(r, self.hour, self.minute)
            && matches_broadcaster(r, self.broadcaster.as_deref())
            && matches_language(r, self.language.as_deref())
            && matches_flag(r, self.flag)
            && matches_inactive(r, self.show_inactive)
    }

    pub fn apply<'a>(&self, records: &'a [BroadcastRecord]) -> Vec<&'a BroadcastRecord> {
        records.iter().filter(|r| self.accept(r)).collect()
    }
}

/// Exact match, or within `[target - tol, target + tol]` when a tolerance is given.
pub fn matches_frequency(r: &BroadcastRecord, target: Option<u32>, tolerance: Option<u32>) -> bool {
    match (target, tolerance) {
        (None, _) => true,
        (Some(t), None) => r.frequency_khz == t,
        (Some(t), Some(tol)) => (t.saturating_sub(tol)..=t.saturating_add(tol)).contains(&r.frequency_khz),
    }
}

pub fn matches_band(r: &BroadcastRecord, band: Option<&MeterBand>, tolerance: Option<u32>) -> bool {
    match band {
        None => true,
        Some(b) => {
            trace!("{} in {}m?", r.frequency_khz, b.meters);
            b.contains(r.frequency_khz, tolerance.unwrap_or(0))
        }
    }
}

/// Sub-regions included when a continental code is requested.
pub fn region_members(region: &str) -> Option<&'static [&'static str]> {
    let members: &'static [&'static str] = match region {
        "NAm" => &["NAm", "WNA", "ENA", "CNA", "Am", "USA"],
        "CAm" => &["CAm", "Car", "LAm"],
        "SAm" => &["SAm", "LAm"],
        "Eu" => &["NEu", "WEu", "SEu", "EEu", "CEu", "SEE", "Eu"],
        "Af" => &["NAf", "WAf", "SAf", "EAf", "CAf", "Af", "WIO"],
        "As" => &["SAs", "CAs", "As", "SEA", "FE", "Tib"],
        "Oc" => &["NOc", "WOc", "SOc", "EOc", "Oc"],
        _ => return None,
    };
    Some(members)
}

pub fn matches_region(r: &BroadcastRecord, required: Option<&str>) -> bool {
    match required {
        None => true,
        Some(req) => match region_members(req) {
            Some(members) => members.contains(&r.target_region.as_str()),
            None => r.target_region == req,
        },
    }
}

/// Is the query time within the broadcast, give or take 30 minutes?
///
/// A broadcast whose end is earlier than its start runs past 0000 UTC. For those the
/// test flips: the query must fall outside the open off-air gap `(end + 30, start - 30)`,
/// so both tolerance edges still match.
pub fn matches_time(r: &BroadcastRecord, hour: Option<u32>, minute: Option<u32>) -> bool {
    let (Some(h), Some(m)) = (hour, minute) else {
        return true;
    };
    let start = r.start_minutes();
    let end = r.end_minutes();
    let query = (h * 60 + m) as i32;

    if end < start {
        trace!("inverted time range");
        let gap_start = end + TIME_TOLERANCE_MINUTES;
        let gap_end = start - TIME_TOLERANCE_MINUTES;
        let in_gap = gap_start < query && query < gap_end;
        !in_gap
    } else {
        let low = start - TIME_TOLERANCE_MINUTES;
        let high = end + TIME_TOLERANCE_MINUTES;
        low <= query && query <= high
    }
}

/// Case-sensitive substring match on the station name.
pub fn matches_broadcaster(r: &BroadcastRecord, required: Option<&str>) -> bool {
    required.is_none_or(|s| r.broadcaster.contains(s))
}

pub fn matches_language(r: &BroadcastRecord, code: Option<&str>) -> bool {
    code.is_none_or(|c| r.language_codes.iter().any(|l| l == c))
}

/// A record with no known flags never satisfies a flag filter.
pub fn matches_flag(r: &BroadcastRecord, flag: Option<BroadcastFlag>) -> bool {
    flag.is_none_or(|f| r.flags.contains(f))
}

pub fn matches_inactive(r: &BroadcastRecord, show_inactive: bool) -> bool {
    !r.inactive || show_inactive
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FlagSet;
    use crate::parser::parse_row;

    fn record(time: &str, region: &str) -> BroadcastRecord {
        parse_row(&format!("6080;{time};;CUB;Radio Havana Cuba;E,S;{region};;;;")).unwrap()
    }

    #[test]
    fn test_frequency_exact() {
        let r = record("1355-1710", "NAm");
        assert!(!matches_frequency(&r, Some(6079), None));
        assert!(matches_frequency(&r, Some(6080), None));
        assert!(!matches_frequency(&r, Some(6081), None));
        assert!(matches_frequency(&r, None, None));
        assert!(matches_frequency(&r, Some(6080), Some(0)));
    }

    #[test]
    fn test_frequency_tolerance() {
        let r = record("1355-1710", "NAm");
        let tol = 25;
        assert!(!matches_frequency(&r, Some(6080 - tol - 1), Some(tol)));
        assert!(matches_frequency(&r, Some(6080 - tol), Some(tol)));
        assert!(matches_frequency(&r, Some(6080 + tol), Some(tol)));
        assert!(!matches_frequency(&r, Some(6080 + tol + 1), Some(tol)));
    }

    #[test]
    fn test_band() {
        let r = record("1355-1710", "NAm");
        let b49 = MeterBand::from_meters(49).unwrap();
        let b31 = MeterBand::from_meters(31).unwrap();
        assert!(matches_band(&r, Some(&b49), None));
        assert!(!matches_band(&r, Some(&b31), None));
        assert!(matches_band(&r, None, None));
    }

    #[test]
    fn test_region_expansion() {
        assert!(matches_region(&record("0000-0100", "WEu"), Some("Eu")));
        assert!(matches_region(&record("0000-0100", "Eu"), Some("Eu")));
        assert!(!matches_region(&record("0000-0100", "NAm"), Some("Eu")));
        assert!(matches_region(&record("0000-0100", "USA"), Some("NAm")));
        assert!(matches_region(&record("0000-0100", "LAm"), Some("SAm")));
    }

    #[test]
    fn test_region_exact_fallback() {
        assert!(matches_region(&record("0000-0100", "WEu"), Some("WEu")));
        assert!(!matches_region(&record("0000-0100", "NEu"), Some("WEu")));
        assert!(matches_region(&record("0000-0100", "NEu"), None));
    }

    #[test]
    fn test_time_within_day() {
        let r = record("1355-1710", "NAm");
        assert!(!matches_time(&r, Some(12), Some(55)));
        assert!(!matches_time(&r, Some(13), Some(24)));
        assert!(matches_time(&r, Some(13), Some(25)));
        assert!(matches_time(&r, Some(13), Some(55)));
        assert!(matches_time(&r, Some(17), Some(10)));
        assert!(matches_time(&r, Some(17), Some(40)));
        assert!(!matches_time(&r, Some(17), Some(41)));
        assert!(!matches_time(&r, Some(18), Some(10)));
    }

    #[test]
    fn test_time_wraps_midnight() {
        let r = record("2230-0600", "NAm");
        assert!(matches_time(&r, Some(23), Some(0)));
        assert!(matches_time(&r, Some(5), Some(30)));
        assert!(!matches_time(&r, Some(12), Some(0)));

        assert!(!matches_time(&r, Some(20), Some(30)));
        assert!(!matches_time(&r, Some(21), Some(30)));
        // tolerance edges match, one minute further does not
        assert!(matches_time(&r, Some(22), Some(0)));
        assert!(!matches_time(&r, Some(21), Some(59)));
        assert!(matches_time(&r, Some(6), Some(30)));
        assert!(!matches_time(&r, Some(6), Some(31)));
        assert!(!matches_time(&r, Some(7), Some(0)));
        assert!(matches_time(&r, Some(4), Some(0)));
        assert!(matches_time(&r, Some(0), Some(0)));
    }

    #[test]
    fn test_time_open_when_partial() {
        let r = record("1355-1710", "NAm");
        assert!(matches_time(&r, Some(5), None));
        assert!(matches_time(&r, None, Some(2)));
        assert!(matches_time(&r, None, None));
    }

    #[test]
    fn test_broadcaster_substring() {
        let r = record("1355-1710", "NAm");
        assert!(matches_broadcaster(&r, Some("Radio")));
        assert!(matches_broadcaster(&r, Some("Havana")));
        assert!(!matches_broadcaster(&r, Some("havana")));
        assert!(!matches_broadcaster(&r, Some("Voice of")));
        assert!(matches_broadcaster(&r, None));
    }

    #[test]
    fn test_language_exact_code() {
        let r = record("1355-1710", "NAm");
        assert!(matches_language(&r, Some("E")));
        assert!(matches_language(&r, Some("S")));
        assert!(!matches_language(&r, Some("English")));
        assert!(!matches_language(&r, Some("F")));
        assert!(matches_language(&r, None));
    }

    #[test]
    fn test_flags() {
        let mut r = record("1355-1710", "NAm");
        assert!(!matches_flag(&r, Some(BroadcastFlag::News)));
        assert!(!matches_flag(&r, Some(BroadcastFlag::Analog)));
        assert!(matches_flag(&r, None));
        r.flags = FlagSet::default();
        r.flags.append(BroadcastFlag::Religious);
        assert!(matches_flag(&r, Some(BroadcastFlag::Religious)));
        assert!(!matches_flag(&r, Some(BroadcastFlag::Numbers)));
    }

    #[test]
    fn test_inactive() {
        let mut r = record("1355-1710", "NAm");
        assert!(matches_inactive(&r, false));
        assert!(matches_inactive(&r, true));
        r.inactive = true;
        assert!(!matches_inactive(&r, false));
        assert!(matches_inactive(&r, true));
    }

    #[test]
    fn test_accept_combines_filters() {
        let records = vec![
            record("1355-1710", "NAm"),
            record("1355-1710", "WEu"),
            parse_row("9420;1900-2000;;GRC;Voice of Greece;GR;Eu;;;;").unwrap(),
        ];
        let cfg = FilterConfig {
            region: Some("Eu".into()),
            ..Default::default()
        };
        assert_eq!(cfg.apply(&records).len(), 2);

        let cfg = FilterConfig {
            region: Some("Eu".into()),
            band: Some(MeterBand::from_meters(49).unwrap()),
            hour: Some(14),
            minute: Some(0),
            ..Default::default()
        };
        let hits = cfg.apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].target_region, "WEu");

        assert_eq!(FilterConfig::default().apply(&records).len(), 3);
    }
}
