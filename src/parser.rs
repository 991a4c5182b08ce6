use crate::days;
use crate::errors::AppError;
use crate::languages;
use crate::model::{BroadcastFlag, BroadcastRecord, FlagSet};
use log::{debug, trace, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const FIELD_DELIMITER: char = ';';
/// Every row carries exactly ten delimiters.
pub const FIELD_COUNT: usize = 11;
pub const MIN_FREQUENCY_KHZ: u32 = 1711;
pub const MAX_FREQUENCY_KHZ: u32 = 30000;
/// Persistence code marking an entry inactive.
const INACTIVE_CODE: &str = "8";

// first two lines of a schedule file:
//   kHz:75;Time(UTC):93;Days:59;ITU:49;Station:201;Lng:49;Target:62;Remarks:135;P:35;Start:60;Stop:60;
//   16.4;0000-2400;;NOR;JXN Marine Norway;;NEu;no;1;;

pub fn parse_file(path: &Path) -> Result<Vec<BroadcastRecord>, AppError> {
    let f = File::open(path).map_err(|e| AppError::IO(format!("open {}: {}", path.display(), e)))?;
    parse_reader(BufReader::new(f))
}

/// Parses a whole schedule file. The first line is a header. Bytes are ISO-8859-1.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Vec<BroadcastRecord>, AppError> {
    let mut out = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut line_no = 0usize;
    let mut rejected = 0usize;

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 { break; }
        line_no += 1;
        if line_no == 1 {
            trace!("header: {}", latin1(trim_eol(&buf)));
            continue;
        }
        let line = latin1(trim_eol(&buf));
        match parse_row(&line) {
            Some(r) => out.push(r),
            None => rejected += 1,
        }
    }

    debug!("parsed {} records, rejected {} rows", out.len(), rejected);
    if out.is_empty() {
        warn!("parser produced 0 records; enable --log trace to see per-row decisions");
    }
    Ok(out)
}

fn trim_eol(mut b: &[u8]) -> &[u8] {
    if let Some(rest) = b.strip_suffix(b"\n") { b = rest; }
    if let Some(rest) = b.strip_suffix(b"\r") { b = rest; }
    b
}

fn latin1(b: &[u8]) -> String {
    b.iter().map(|&c| c as char).collect()
}

/// Leading decimal digits as a number; anything else yields 0.
fn leading_digits(s: &str) -> u32 {
    s.trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add((d - b'0') as u32))
}

/// Two characters at a fixed offset of the `HHMM-HHMM` field; out-of-range reads as 0.
fn time_part(field: &str, offset: usize) -> u32 {
    let end = (offset + 2).min(field.len());
    field.get(offset..end).map(leading_digits).unwrap_or(0)
}

fn flags_from_languages(codes: &[String]) -> FlagSet {
    let mut flags = FlagSet::default();
    for code in codes {
        match code.as_str() {
            "-CW" => flags.append(BroadcastFlag::Morse),
            "-MX" => flags.append(BroadcastFlag::Music),
            "-TS" => flags.append(BroadcastFlag::Time),
            _ => {}
        }
    }
    flags
}

/// Turns one data row into a record, or `None` when the row is rejected.
///
/// Rejections: any field count other than eleven, or a frequency outside
/// 1711..=30000 kHz. Time digits are read positionally and malformed parts
/// become zero instead of rejecting the row.
pub fn parse_row(line: &str) -> Option<BroadcastRecord> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        trace!("rejecting row with {} fields: {:?}", fields.len(), line);
        return None;
    }

    let frequency_khz = leading_digits(fields[0]);
    if !(MIN_FREQUENCY_KHZ..=MAX_FREQUENCY_KHZ).contains(&frequency_khz) {
        trace!("Disregarding entry for {} kHz", frequency_khz);
        return None;
    }

    let inactive = fields[8] == INACTIVE_CODE;
    if inactive {
        trace!("inactive: {}", line);
    }

    let time = fields[1];
    let (raw_days, days) = if inactive {
        (None, None)
    } else {
        (Some(fields[2].to_string()), Some(days::decode(fields[2])))
    };

    let language_codes = languages::split_codes(fields[5]);
    let languages = languages::expand_languages(&language_codes);
    let flags = flags_from_languages(&language_codes);

    let record = BroadcastRecord {
        frequency_khz,
        start_hour: time_part(time, 0),
        start_minute: time_part(time, 2),
        end_hour: time_part(time, 5),
        end_minute: time_part(time, 7),
        raw_days,
        days,
        origin: fields[3].to_string(),
        broadcaster: fields[4].to_string(),
        language_codes,
        languages,
        target_region: fields[6].to_string(),
        inactive,
        flags,
    };
    trace!("record: {:?}", record);
    Some(record)
}
