use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event as ct;
use zdock::app::{Shell, ShellConfig};
use zdock::core::EventResult;
use zdock::dock::{ReorderPolicy, UnknownPolicy};
use zdock::settings::{self, Settings};
use zdock::tui::crossterm::into_input_event;
use zdock::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use zdock::ui::backend::terminal::RatatuiTerminal;
use zdock::ui::core::color_support::detect_terminal_color_support;

mod logging;

/// Poll timeout while something is animating (~60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll timeout when idle. Bounds how long a pending termination signal goes unnoticed.
const IDLE_POLL: Duration = Duration::from_millis(250);

const USAGE: &str = "\
Usage: zdock [OPTIONS]

Options:
  --reorder=<move|swap>  How a dropped icon rearranges the dock
  --no-animation         Disable slide and tile transitions
  --settings=<PATH>      Read settings from PATH instead of the default location
  -h, --help             Print this help
";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    reorder: Option<ReorderPolicy>,
    no_animation: bool,
    settings: Option<PathBuf>,
    help: bool,
}

impl CliOptions {
    /// Flags win over the settings file.
    fn apply(&self, mut config: ShellConfig) -> ShellConfig {
        if let Some(policy) = self.reorder {
            config.dock.policy = policy;
        }
        if self.no_animation {
            config = config.without_animation();
        }
        config
    }
}

#[derive(Debug, PartialEq, Eq)]
enum CliError {
    UnknownArgument(String),
    MissingValue(&'static str),
    Reorder(UnknownPolicy),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            CliError::MissingValue(flag) => write!(f, "{flag} requires a value"),
            CliError::Reorder(err) => write!(f, "--reorder: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Reorder(err) => Some(err),
            _ => None,
        }
    }
}

/// Accepts both `--flag=value` and `--flag value`.
fn parse_args<I>(args: I) -> Result<CliOptions, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        match flag.as_str() {
            "-h" | "--help" => opts.help = true,
            "--no-animation" if inline.is_none() => opts.no_animation = true,
            "--reorder" => {
                let value = inline
                    .or_else(|| args.next())
                    .ok_or(CliError::MissingValue("--reorder"))?;
                opts.reorder = Some(value.parse().map_err(CliError::Reorder)?);
            }
            "--settings" => {
                let value = inline
                    .or_else(|| args.next())
                    .filter(|v| !v.is_empty())
                    .ok_or(CliError::MissingValue("--settings"))?;
                opts.settings = Some(PathBuf::from(value));
            }
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }
    Ok(opts)
}

/// An explicit path is read as-is; the default location is created with defaults first.
fn resolve_settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let path = settings::default_settings_path()?;
    if let Err(err) = settings::ensure_settings_file(&path) {
        tracing::warn!(path = %path.display(), error = %err, "cannot create settings file");
    }
    Some(path)
}

fn load_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    match Settings::load(path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "settings loaded");
            settings
        }
        Err(err) => {
            tracing::warn!(error = %err, "using default settings");
            Settings::default()
        }
    }
}

fn main() -> io::Result<()> {
    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("zdock: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if opts.help {
        print!("{USAGE}");
        return Ok(());
    }

    let _logging = logging::init();

    let settings_path = resolve_settings_path(opts.settings.as_deref());
    let settings = load_settings(settings_path.as_deref());
    let config = opts.apply(ShellConfig::from_settings(&settings));
    tracing::info!(policy = %config.dock.policy, "starting");

    run(config)
}

fn run(config: ShellConfig) -> io::Result<()> {
    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    if let Err(err) =
        zdock::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)
    {
        tracing::warn!(error = %err, "signal handling unavailable");
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout(), detect_terminal_color_support())?;
    let mut shell = Shell::new(config);
    let mut dirty = true;

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            let code = signal.exit_code();
            drop(terminal);
            drop(guard);
            std::process::exit(code);
        }

        let now = Instant::now();
        if dirty || shell.is_animating(now) {
            terminal.draw(|backend, area| shell.render(backend, area, now))?;
            dirty = false;
        }

        let timeout = if shell.is_animating(Instant::now()) {
            FRAME_INTERVAL
        } else {
            IDLE_POLL
        };
        if !ct::poll(timeout)? {
            continue;
        }

        // Drain queued input so a fast drag costs one frame, not one per event.
        loop {
            if let Some(event) = into_input_event(ct::read()?) {
                match shell.handle_input(&event, Instant::now()) {
                    EventResult::Quit => {
                        tracing::info!("quit");
                        return Ok(());
                    }
                    EventResult::Consumed => dirty = true,
                    EventResult::Ignored => {}
                }
            }
            if !ct::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
