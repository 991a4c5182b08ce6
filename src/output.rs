use crate::errors::AppError;
use crate::model::{BroadcastRecord, RecordRow};
use csv::Writer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!("unknown output format '{other}' (text|csv|json)"))),
        }
    }
}

/// ` 9420 kHz : [1900-2000 .MTWTF.] : Voice of Greece : Greek to Eu`
pub fn format_line(r: &BroadcastRecord) -> String {
    format!(
        "{:>5} kHz : [{:02}{:02}-{:02}{:02} {}] : {} : {} to {}",
        r.frequency_khz,
        r.start_hour,
        r.start_minute,
        r.end_hour,
        r.end_minute,
        r.days_printable(),
        r.broadcaster,
        r.languages,
        r.target_region
    )
}

pub fn write_text<W: Write>(records: &[&BroadcastRecord], mut out: W) -> Result<(), AppError> {
    for r in records {
        writeln!(out, "{}", format_line(r))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(records: &[&BroadcastRecord], out: W) -> Result<(), AppError> {
    let mut wtr = Writer::from_writer(out);
    for r in records {
        wtr.serialize(RecordRow::from(*r))
            .map_err(|e| AppError::IO(format!("csv write row: {}", e)))?;
    }
    wtr.flush().map_err(|e| AppError::IO(format!("csv flush: {}", e)))?;
    Ok(())
}

/// One JSON object per line.
pub fn write_json_lines<W: Write>(records: &[&BroadcastRecord], mut out: W) -> Result<(), AppError> {
    for r in records {
        serde_json::to_writer(&mut out, &RecordRow::from(*r))
            .map_err(|e| AppError::IO(format!("json write row: {}", e)))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Writes `records` in `format` to `out_path`, or stdout when no path is given.
pub fn render(records: &[&BroadcastRecord], format: OutputFormat, out_path: Option<&Path>) -> Result<(), AppError> {
    let sink: Box<dyn Write> = match out_path {
        Some(p) => {
            let f = File::create(p).map_err(|e| AppError::IO(format!("create {}: {}", p.display(), e)))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(io::stdout().lock()),
    };
    match format {
        OutputFormat::Text => write_text(records, sink),
        OutputFormat::Csv => write_csv(records, sink),
        OutputFormat::Json => write_json_lines(records, sink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_row;

    fn sample() -> Vec<BroadcastRecord> {
        vec![
            parse_row("9420;1900-2000;Mo-Fr;GRC;Voice of Greece;GR;Eu;;;;").unwrap(),
            parse_row("4625;0000-2400;;RUS;UVB-76;-CW;Eu;;;;").unwrap(),
        ]
    }

    #[test]
    fn test_format_line() {
        let records = sample();
        assert_eq!(
            format_line(&records[0]),
            " 9420 kHz : [1900-2000 .MTWTF.] : Voice of Greece : Greek to Eu"
        );
        let r = parse_row("15770;0005-0100;;USA;WRMI;E;NAm;;;;").unwrap();
        assert_eq!(format_line(&r), "15770 kHz : [0005-0100 SMTWTFS] : WRMI : English to NAm");
    }

    #[test]
    fn test_format_line_inactive() {
        let r = parse_row("5025;0400-0700;Mo;;Radio Rebelde;S;CAm;;8;;").unwrap();
        assert!(format_line(&r).contains("[0400-0700 inactiv]"));
    }

    #[test]
    fn test_write_text() {
        let records = sample();
        let refs: Vec<&BroadcastRecord> = records.iter().collect();
        let mut buf = Vec::new();
        write_text(&refs, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("UVB-76 : Morse to Eu\n"));
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let records = sample();
        let refs: Vec<&BroadcastRecord> = records.iter().collect();
        let mut buf = Vec::new();
        write_csv(&refs, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "frequency_khz,start,end,days,weekdays,non_weekly,broadcaster,origin,languages,language_codes,target_region,inactive,flags"
        );
        assert_eq!(
            lines.next().unwrap(),
            "9420,1900,2000,.MTWTF.,\"Mon,Tue,Wed,Thu,Fri\",false,Voice of Greece,GRC,Greek,GR,Eu,false,"
        );
        assert_eq!(lines.next().unwrap(), "4625,0000,2400,SMTWTFS,\"Mon,Tue,Wed,Thu,Fri,Sat,Sun\",false,UVB-76,RUS,Morse,-CW,Eu,false,o");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_json_lines() {
        let records = sample();
        let refs: Vec<&BroadcastRecord> = records.iter().collect();
        let mut buf = Vec::new();
        write_json_lines(&refs, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let rows: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["frequency_khz"], 9420);
        assert_eq!(rows[0]["days"], ".MTWTF.");
        assert_eq!(rows[0]["weekdays"], "Mon,Tue,Wed,Thu,Fri");
        assert_eq!(rows[1]["flags"], "o");
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = sample();
        let refs: Vec<&BroadcastRecord> = records.iter().collect();
        render(&refs, OutputFormat::Csv, Some(&path)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_format_fromstr() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
