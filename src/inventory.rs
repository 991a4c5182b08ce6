//! Summary of a loaded schedule, for spotting day encodings and language codes
//! the decoders do not know yet.

use crate::filter::region_members;
use crate::model::BroadcastRecord;
use log::{debug, log_enabled, trace, Level};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
pub struct Inventory {
    pub broadcasters: BTreeSet<String>,
    pub regions: BTreeSet<String>,
    pub language_counts: BTreeMap<String, usize>,
    /// Distinct raw days fields; inactive rows carry none.
    pub raw_days: BTreeSet<String>,
    pub english: usize,
    pub north_america: usize,
    pub flagged: usize,
}

impl Inventory {
    pub fn from_records(records: &[BroadcastRecord]) -> Self {
        let north_america = region_members("NAm").unwrap_or(&[]);
        let mut inv = Inventory::default();
        for r in records {
            inv.broadcasters.insert(r.broadcaster.clone());
            inv.regions.insert(r.target_region.clone());
            for code in &r.language_codes {
                *inv.language_counts.entry(code.clone()).or_default() += 1;
            }
            if let Some(days) = &r.raw_days {
                inv.raw_days.insert(days.clone());
            }
            if r.language_codes.iter().any(|c| c == "E") {
                inv.english += 1;
            }
            if north_america.contains(&r.target_region.as_str()) {
                inv.north_america += 1;
            }
            if !r.flags.is_empty() {
                inv.flagged += 1;
            }
        }
        inv
    }
}

/// Counts at debug; the full listings only at trace.
pub fn log_inventory(records: &[BroadcastRecord]) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    let inv = Inventory::from_records(records);
    debug!(
        "{} English broadcasts / {} North America broadcasts / {} with flags",
        inv.english, inv.north_america, inv.flagged
    );
    debug!(
        "{} broadcasters, {} regions, {} language codes, {} day strings",
        inv.broadcasters.len(),
        inv.regions.len(),
        inv.language_counts.len(),
        inv.raw_days.len()
    );
    for b in &inv.broadcasters {
        trace!("broadcaster: {}", b);
    }
    for (code, count) in &inv.language_counts {
        trace!("{} => {}    languagecount", count, code);
    }
    for region in &inv.regions {
        trace!("region: {}", region);
    }
    for days in &inv.raw_days {
        trace!("day: {}", days);
    }
}
