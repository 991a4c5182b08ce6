use argparse::{ArgumentParser, Store, StoreConst, StoreOption, StoreTrue};
use std::path::PathBuf;

pub struct CliArgs {
    pub broadcaster: Option<String>,
    pub freq: Option<u32>,
    pub freq_tol: Option<u32>,
    pub language: Option<String>,
    pub meter: Option<u32>,
    pub meter_tol: Option<u32>,
    pub region: Option<String>,
    pub schedule: Option<String>,
    pub time: Option<String>,
    pub any_time: bool,
    pub time_now: bool,
    pub tz: Option<String>,
    pub flag: Option<String>,
    pub show_inactive: bool,
    pub format: String,
    pub out: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub list_cached: bool,
    pub timeout_secs: u64,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            broadcaster: None,
            freq: None,
            freq_tol: None,
            language: None,
            meter: None,
            meter_tol: None,
            region: None,
            schedule: None,
            time: None,
            any_time: false,
            time_now: false,
            tz: None,
            flag: None,
            show_inactive: false,
            format: "text".into(),
            out: None,
            data_dir: None,
            list_cached: false,
            timeout_secs: 30,
            log_level: "essential".into(),
        }
    }
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Shortwave broadcast schedule lookup (EiBi data)");
        ap.refer(&mut args.broadcaster)
            .add_option(&["-b", "--broadcaster"], StoreOption, "Broadcasts by this broadcaster (substring, case-sensitive)");
        ap.refer(&mut args.freq)
            .add_option(&["-f", "--freq"], StoreOption, "Broadcasts on this frequency in kHz");
        ap.refer(&mut args.freq_tol)
            .add_option(&["--ft", "--freq-tol"], StoreOption, "+/- kHz tolerance for --freq");
        ap.refer(&mut args.language)
            .add_option(&["-l", "--language"], StoreOption, "Broadcasts in this language (EiBi code)")
            .add_option(&["--le"], StoreConst(Some("E".into())), "Shortcut for -l E (English)")
            .add_option(&["--lk"], StoreConst(Some("K".into())), "Shortcut for -l K (Korean)")
            .add_option(&["--ls"], StoreConst(Some("S".into())), "Shortcut for -l S (Spanish)");
        ap.refer(&mut args.meter)
            .add_option(&["-m", "--meter"], StoreOption, "Broadcasts within this meter band");
        ap.refer(&mut args.meter_tol)
            .add_option(&["--mt", "--meter-tol"], StoreOption, "+/- kHz tolerance for --meter");
        ap.refer(&mut args.region)
            .add_option(&["-r", "--region"], StoreOption, "Broadcasts targeting this region")
            .add_option(&["--rna"], StoreConst(Some("NAm".into())), "Shortcut for -r NAm")
            .add_option(&["--rsa"], StoreConst(Some("SAm".into())), "Shortcut for -r SAm")
            .add_option(&["--reu"], StoreConst(Some("Eu".into())), "Shortcut for -r Eu")
            .add_option(&["--raf"], StoreConst(Some("Af".into())), "Shortcut for -r Af")
            .add_option(&["--ras"], StoreConst(Some("As".into())), "Shortcut for -r As")
            .add_option(&["--roc"], StoreConst(Some("Oc".into())), "Shortcut for -r Oc");
        ap.refer(&mut args.schedule)
            .add_option(&["-s", "--schedule"], StoreOption, "Force this schedule code (e.g. a17) instead of the current one");
        ap.refer(&mut args.time)
            .add_option(&["-t", "--time"], StoreOption, "Broadcasts around this time, hhmm (UTC unless --tz)");
        ap.refer(&mut args.any_time)
            .add_option(&["--ta"], StoreTrue, "Broadcasts at any time");
        ap.refer(&mut args.time_now)
            .add_option(&["--tn"], StoreTrue, "Broadcasts around now [default]");
        ap.refer(&mut args.tz)
            .add_option(&["--tz"], StoreOption, "Timezone of --time (IANA name)");
        ap.refer(&mut args.flag)
            .add_option(&["--flag"], StoreOption, "Broadcasts carrying this flag (adefmnortvwx)");
        ap.refer(&mut args.show_inactive)
            .add_option(&["--inactive"], StoreTrue, "Include inactive broadcasts");
        ap.refer(&mut args.format)
            .add_option(&["--format"], Store, "Output format: text|csv|json");
        ap.refer(&mut args.out)
            .add_option(&["--out"], StoreOption, "Write output to this path instead of stdout");
        ap.refer(&mut args.data_dir)
            .add_option(&["--data-dir"], StoreOption, "Schedule cache directory (default ~/.swl-tool)");
        ap.refer(&mut args.list_cached)
            .add_option(&["--list-cached"], StoreTrue, "List cached schedule files and exit");
        ap.refer(&mut args.timeout_secs)
            .add_option(&["--timeout"], Store, "HTTP timeout in seconds");
        ap.refer(&mut args.log_level)
            .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)")
            .add_option(&["-d"], StoreConst("debug".into()), "Shortcut for --log debug")
            .add_option(&["--dd"], StoreConst("trace".into()), "Shortcut for --log trace");
        ap.parse_args_or_exit();
    }
    args
}
