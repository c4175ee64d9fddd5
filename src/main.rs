use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use todolist::app::TodoApp;
use todolist::core::View;
use todolist::services::load_settings_or_default;
use todolist::tui::crossterm::into_input_event;
use todolist::tui::terminal_guard::{install_panic_restore, TerminalGuard, TerminationSignal};
use todolist::ui::backend::terminal::TerminalBackend;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

const USAGE: &str = "\
Usage: todolist [--settings <path>]

Options:
  --settings <path>  read settings from <path> instead of the cache dir
  -h, --help         print this help
  -V, --version      print the version";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    settings: Option<PathBuf>,
    help: bool,
    version: bool,
}

fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => out.help = true,
            "-V" | "--version" => out.version = true,
            "--settings" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--settings needs a path".to_string())?;
                out.settings = Some(PathBuf::from(path));
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--settings=") {
                    if path.is_empty() {
                        return Err("--settings needs a path".to_string());
                    }
                    out.settings = Some(PathBuf::from(path));
                } else {
                    return Err(format!("unexpected argument '{arg}'"));
                }
            }
        }
    }
    Ok(out)
}

fn main() -> io::Result<()> {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("todolist: {msg}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    if args.version {
        println!("todolist {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let logging_guard = logging::init();
    let settings = load_settings_or_default(args.settings.as_deref());
    let mut app = TodoApp::from_settings(&settings);

    let guard = TerminalGuard::new()?;
    install_panic_restore(guard.restorer());

    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signal_thread =
        todolist::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let result = TerminalBackend::new(io::stdout())
        .and_then(|mut terminal| run(&mut app, &mut terminal, &signal_rx));
    drop(guard);

    match result {
        Ok(Some(signal)) => {
            drop(logging_guard);
            std::process::exit(signal.exit_code());
        }
        Ok(None) => {
            tracing::info!(tasks = app.state().tasks().len(), "exit");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "terminal error");
            if let Some(guard) = &logging_guard {
                eprintln!("todolist: logs in {}", guard.log_dir().display());
            }
            Err(err)
        }
    }
}

/// Draws when dirty, then waits up to `POLL_INTERVAL` for input. Returns the
/// signal that stopped the loop, if any.
fn run(
    app: &mut TodoApp,
    terminal: &mut TerminalBackend,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    loop {
        if let Ok(signal) = signals.try_recv() {
            return Ok(Some(signal));
        }

        if app.needs_redraw() {
            terminal.draw(|backend, area| app.render(backend, area))?;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let event = into_input_event(crossterm::event::read()?);
        if app.handle_input(&event).is_quit() {
            return Ok(None);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
