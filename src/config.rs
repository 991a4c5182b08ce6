use crate::bands::MeterBand;
use crate::cli::CliArgs;
use crate::errors::AppError;
use crate::filter::FilterConfig;
use crate::loader::LoaderConfig;
use crate::model::BroadcastFlag;
use crate::output::OutputFormat;
use crate::season::SeasonCode;
use chrono::{DateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Duration;

pub const STORAGE_DIR_NAME: &str = ".swl-tool";

/// Everything a run needs, settled once at startup.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub filter: FilterConfig,
    pub loader: LoaderConfig,
    /// Forced season; `None` means current, then previous.
    pub season: Option<SeasonCode>,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
    pub list_cached: bool,
    pub fetch_timeout: Duration,
}

impl RunConfig {
    pub fn from_args(args: &CliArgs, now: DateTime<Utc>) -> Result<Self, AppError> {
        if args.freq_tol.is_some() && args.freq.is_none() {
            return Err(AppError::Config("--freq-tol requires --freq".into()));
        }
        if args.meter_tol.is_some() && args.meter.is_none() {
            return Err(AppError::Config("--meter-tol requires --meter".into()));
        }
        let band = args.meter.map(MeterBand::from_meters).transpose()?;

        let season = match args.schedule.as_deref() {
            Some(s) => {
                let code: SeasonCode = s.parse()?;
                if !code.is_supported() {
                    return Err(AppError::Config(format!(
                        "unrecognized schedule code: {code} (oldest is a06)"
                    )));
                }
                Some(code)
            }
            None => None,
        };

        let flag = args
            .flag
            .as_deref()
            .map(str::parse::<BroadcastFlag>)
            .transpose()
            .map_err(AppError::Config)?;

        let query_time = if args.any_time {
            None
        } else if let Some(t) = args.time.as_deref() {
            let (h, m) = parse_hhmm(t)?;
            Some(match args.tz.as_deref() {
                Some(tz) => local_to_utc(h, m, tz, now)?,
                None => (h, m),
            })
        } else if season.is_some() && !args.time_now {
            debug!("schedule forced; not filtering by time");
            None
        } else {
            Some((now.hour(), now.minute()))
        };
        let (hour, minute) = query_time.unzip();

        let filter = FilterConfig {
            frequency_khz: args.freq,
            frequency_tolerance_khz: args.freq_tol,
            band,
            band_tolerance_khz: args.meter_tol,
            region: args.region.clone(),
            hour,
            minute,
            broadcaster: args.broadcaster.clone(),
            language: args.language.clone(),
            flag,
            show_inactive: args.show_inactive,
        };

        let storage_dir = match &args.data_dir {
            Some(d) => d.clone(),
            None => default_storage_dir()?,
        };

        Ok(Self {
            filter,
            loader: LoaderConfig::new(storage_dir),
            season,
            format: args.format.parse()?,
            out: args.out.clone(),
            list_cached: args.list_cached,
            fetch_timeout: Duration::from_secs(args.timeout_secs),
        })
    }
}

fn default_storage_dir() -> Result<PathBuf, AppError> {
    let home = std::env::var_os("HOME")
        .ok_or_else(|| AppError::Config("HOME is not set; use --data-dir".into()))?;
    Ok(PathBuf::from(home).join(STORAGE_DIR_NAME))
}

/// `hhmm`, 24-hour.
pub fn parse_hhmm(s: &str) -> Result<(u32, u32), AppError> {
    let bad = || AppError::Config(format!("time must be in the format hhmm, got '{s}'"));
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let h: u32 = s[..2].parse().map_err(|_| bad())?;
    let m: u32 = s[2..].parse().map_err(|_| bad())?;
    if h > 23 || m > 59 {
        return Err(bad());
    }
    Ok((h, m))
}

/// Local wall-clock `h:m` on today's date in `tz_name`, as UTC hour and minute.
/// An unknown zone falls back to treating the time as UTC.
fn local_to_utc(h: u32, m: u32, tz_name: &str, now: DateTime<Utc>) -> Result<(u32, u32), AppError> {
    let tz = match tz_name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            warn!("Timezone parse failed; treating --time as UTC");
            return Ok((h, m));
        }
    };
    let local_date = now.with_timezone(&tz).date_naive();
    let naive_time = NaiveTime::from_hms_opt(h, m, 0)
        .ok_or_else(|| AppError::Config(format!("invalid time {h:02}{m:02}")))?;
    let local = tz
        .from_local_datetime(&local_date.and_time(naive_time))
        .earliest()
        .ok_or_else(|| AppError::Config(format!("{h:02}{m:02} does not exist in {tz_name} today")))?;
    let utc = local.with_timezone(&Utc);
    debug!("{:02}{:02} {} is {:02}{:02} UTC", h, m, tz_name, utc.hour(), utc.minute());
    Ok((utc.hour(), utc.minute()))
}
