use crate::errors::AppError;
use crate::fetch::Fetcher;
use crate::model::BroadcastRecord;
use crate::parser;
use crate::season::SeasonCode;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::{debug, info, warn};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

pub const DX_BASE_URL: &str = "http://www.eibispace.de/dx/";
pub const ARCHIVE_BASE_URL: &str = "http://www.eibispace.de/archive/";
/// Seasons from this year on are also published under the current (`dx`) path.
pub const FIRST_DX_YEAR: u8 = 16;
pub const MAX_CACHE_AGE_DAYS: i64 = 7;

static CACHED_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sked-([abAB]\d{2})\.csv$").unwrap());

#[derive(Clone, Debug)]
pub struct LoaderConfig {
    pub storage_dir: PathBuf,
    pub dx_base_url: String,
    pub archive_base_url: String,
    pub max_age: Duration,
}

impl LoaderConfig {
    pub fn new(storage_dir: PathBuf) -> Self {
        Self {
            storage_dir,
            dx_base_url: DX_BASE_URL.into(),
            archive_base_url: ARCHIVE_BASE_URL.into(),
            max_age: Duration::days(MAX_CACHE_AGE_DAYS),
        }
    }
}

#[derive(Debug)]
pub struct LoadedSchedule {
    pub season: SeasonCode,
    pub records: Vec<BroadcastRecord>,
}

/// Seasons to try, in order: the forced one alone, else current then previous.
pub fn candidate_seasons(forced: Option<SeasonCode>, today: NaiveDate) -> Result<Vec<SeasonCode>, AppError> {
    match forced {
        Some(code) => Ok(vec![code]),
        None => {
            let current = SeasonCode::current(&today)?;
            Ok(vec![current, current.previous()])
        }
    }
}

pub fn ensure_storage_dir(dir: &Path) -> Result<(), AppError> {
    if !dir.exists() {
        info!("Creating directory for files: {}", dir.display());
        fs::create_dir_all(dir)
            .map_err(|e| AppError::IO(format!("create {}: {}", dir.display(), e)))?;
    }
    Ok(())
}

/// Season files present in the storage directory, oldest season first.
pub fn list_cached(dir: &Path) -> Result<Vec<(SeasonCode, PathBuf)>, AppError> {
    let mut found = Vec::new();
    if !dir.exists() {
        return Ok(found);
    }
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let e = entry.map_err(|e| AppError::IO(format!("walkdir: {}", e)))?;
        if !e.file_type().is_file() { continue; }
        let fname = e.file_name().to_string_lossy().to_string();
        if let Some(caps) = CACHED_FILE.captures(&fname) {
            let code: SeasonCode = caps[1].parse()?;
            found.push((code, e.path().to_path_buf()));
        }
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

/// Gets a schedule file onto disk (reusing a fresh cached copy) and parses it.
pub struct ScheduleLoader<'a> {
    config: &'a LoaderConfig,
    fetcher: &'a dyn Fetcher,
}

impl<'a> ScheduleLoader<'a> {
    pub fn new(config: &'a LoaderConfig, fetcher: &'a dyn Fetcher) -> Self {
        Self { config, fetcher }
    }

    pub fn cache_path(&self, season: SeasonCode) -> PathBuf {
        self.config.storage_dir.join(season.filename())
    }

    /// Current path first when the season has one, archive always.
    pub fn urls_for(&self, season: SeasonCode) -> Vec<String> {
        let filename = season.filename();
        let mut urls = Vec::with_capacity(2);
        if season.year >= FIRST_DX_YEAR {
            urls.push(format!("{}{}", self.config.dx_base_url, filename));
        }
        urls.push(format!("{}{}", self.config.archive_base_url, filename));
        urls
    }

    /// Missing, or older than the cache age limit.
    pub fn is_fetch_needed(&self, season: SeasonCode, now: DateTime<Utc>) -> Result<bool, AppError> {
        let path = self.cache_path(season);
        if !path.exists() {
            info!("schedule file {} not found; fetching", path.display());
            return Ok(true);
        }
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| AppError::IO(format!("stat {}: {}", path.display(), e)))?;
        let mtime: DateTime<Utc> = modified.into();
        if mtime < now - self.config.max_age {
            info!("schedule file {} too old; fetching", path.display());
            return Ok(true);
        }
        Ok(false)
    }

    /// Tries each URL for `season` until one succeeds; the body replaces the cached file.
    /// `Ok(false)` when every URL failed.
    pub fn fetch_season(&self, season: SeasonCode) -> Result<bool, AppError> {
        for url in self.urls_for(season) {
            info!("Trying {} ...", url);
            match self.fetcher.fetch(&url) {
                Ok(body) => {
                    let path = self.cache_path(season);
                    fs::write(&path, &body)
                        .map_err(|e| AppError::IO(format!("write {}: {}", path.display(), e)))?;
                    debug!("saved {} bytes to {}", body.len(), path.display());
                    return Ok(true);
                }
                Err(e) => debug!("{}", e),
            }
        }
        Ok(false)
    }

    /// First season in `seasons` whose file is cached or fetchable, parsed.
    pub fn load(&self, seasons: &[SeasonCode], now: DateTime<Utc>) -> Result<LoadedSchedule, AppError> {
        for &season in seasons {
            debug!("checking schedule {}", season);
            if !season.is_supported() {
                warn!("schedule {} predates the oldest available (a06); skipping", season);
                continue;
            }
            let available = if self.is_fetch_needed(season, now)? {
                self.fetch_season(season)?
            } else {
                true
            };
            if !available {
                debug!("no source for schedule {}", season);
                continue;
            }

            let path = self.cache_path(season);
            debug!("parsing {}", path.display());
            let records = parser::parse_file(&path)?;
            info!("Loaded {} schedule entries from {}", records.len(), season);
            return Ok(LoadedSchedule { season, records });
        }

        let tried: Vec<String> = seasons.iter().map(|s| s.to_string()).collect();
        Err(AppError::Unavailable(format!(
            "could not load schedule {} into {}",
            tried.join(" or "),
            self.config.storage_dir.display()
        )))
    }
}
