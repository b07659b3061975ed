use chrono::Local;
use std::path::PathBuf;
use std::sync::Once;

const LEVEL_VAR: &str = "IBAN_DEMO_LOG_LEVEL";
const DIR_VAR: &str = "IBAN_DEMO_LOG_DIR";

static INIT: Once = Once::new();

/// Where log lines go and how much of them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: log::LevelFilter,
    dir: Option<PathBuf>,
}

impl LogSettings {
    fn from_env() -> Self {
        Self::from_values(
            std::env::var(LEVEL_VAR).ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var(DIR_VAR).ok().as_deref(),
        )
    }

    /// The app-specific level wins over `RUST_LOG`; neither means `info`.
    fn from_values(level: Option<&str>, rust_log: Option<&str>, dir: Option<&str>) -> Self {
        let level = level
            .or(rust_log)
            .map(parse_level)
            .unwrap_or(log::LevelFilter::Info);
        Self {
            level,
            dir: resolve_log_dir(dir),
        }
    }

    fn log_file(&self, app_name: &str) -> Option<PathBuf> {
        let date = Local::now().format("%Y_%m_%d");
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{app_name}-{date}.log")))
    }
}

/// Installs the global logger once; later calls are no-ops.
pub fn init_logging(app_name: &str) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        init_result = apply(&LogSettings::from_env(), app_name);
    });
    init_result
}

fn apply(settings: &LogSettings, app_name: &str) -> Result<(), String> {
    // Stdout carries command output, so the console sink is stderr.
    let mut dispatch = fern::Dispatch::new()
        .level(settings.level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let (Some(dir), Some(file_path)) = (settings.dir.as_ref(), settings.log_file(app_name)) {
        std::fs::create_dir_all(dir).map_err(|err| err.to_string())?;
        dispatch = dispatch.chain(fern::log_file(file_path).map_err(|err| err.to_string())?);
    }

    dispatch.apply().map_err(|err| err.to_string())
}

fn parse_level(value: &str) -> log::LevelFilter {
    value
        .trim()
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info)
}

// Unset means console only.
fn resolve_log_dir(value: Option<&str>) -> Option<PathBuf> {
    match value.map(str::trim) {
        Some("off") | Some("none") | Some("") | None => None,
        Some(path) => Some(PathBuf::from(path)),
    }
}
