use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use ratatui::Terminal;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use urnote::app::{UiTheme, Workbench};
use urnote::kernel::services::adapters::{
    ensure_settings_file, load_settings, FileService, KeybindingService, SystemHost,
};
use urnote::kernel::services::ports::{Host, Settings};
use urnote::kernel::{AppState, Session};
use urnote::tui::crossterm::translate;
use urnote::tui::terminal_guard::{install_panic_restore, TerminalGuard, TerminationSignal};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

const USAGE: &str = "Usage: urnote [PATH]\n\n\
PATH  folder to browse for this session (the saved root folder is not changed)";

/// Root folder for this run: an explicit `PATH` wins over the saved one.
fn resolve_startup_root(
    cwd: &Path,
    arg: Option<&str>,
    settings_root: Option<PathBuf>,
) -> io::Result<Option<PathBuf>> {
    let Some(raw) = arg else {
        return Ok(settings_root);
    };

    let path = Path::new(raw);
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let meta = std::fs::metadata(&path).map_err(|err| {
        io::Error::new(err.kind(), format!("{}: {err}", path.display()))
    })?;
    if !meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("not a directory: {}", path.display()),
        ));
    }

    Ok(Some(path.canonicalize().unwrap_or(path)))
}

fn main() -> io::Result<()> {
    let arg = std::env::args().nth(1);
    match arg.as_deref() {
        Some("-h" | "--help") => {
            println!("{USAGE}");
            return Ok(());
        }
        Some("-V" | "--version") => {
            println!("urnote {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let _logging = logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "urnote starting");

    let settings_path = match ensure_settings_file() {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::warn!(error = %err, "settings file unavailable");
            None
        }
    };
    let settings = load_settings().unwrap_or_default();

    let cwd = std::env::current_dir()?;
    let root = resolve_startup_root(&cwd, arg.as_deref(), settings.root_folder.clone())?;

    let workbench = build_workbench(root, &settings, SystemHost::new(settings_path));
    run(workbench)
}

fn build_workbench<H: Host>(
    root: Option<PathBuf>,
    settings: &Settings,
    host: H,
) -> Workbench<H> {
    let mut keybindings = KeybindingService::new();
    keybindings.apply_rules(&settings.keybindings);
    let theme = UiTheme::from_settings(&settings.theme);

    let state = AppState::new(root, settings.explorer.normalized_extension());
    let session = Session::new(state, FileService::new(), host);
    Workbench::new(session, keybindings, theme)
}

fn run<H: Host>(mut workbench: Workbench<H>) -> io::Result<()> {
    let guard = TerminalGuard::new()?;
    install_panic_restore(guard.restorer());

    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    {
        let installed =
            urnote::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx);
        if let Err(err) = installed {
            tracing::warn!(error = %err, "failed to install signal handlers");
        }
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    workbench.start();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
                if let Some((x, y)) = workbench.cursor_position() {
                    frame.set_cursor_position(Position::new(x, y));
                }
            })?;
            // The tree height is known only after a draw.
            dirty = workbench.flush_post_render_sync();
        }

        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(signal = ?signal, "shutting down");
            break;
        }
        if workbench.should_quit() {
            break;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Some(input) = translate(event::read()?) else {
            continue;
        };
        workbench.handle_input(&input);
        dirty = true;
    }

    drop(terminal);
    drop(guard);
    tracing::info!("urnote stopped");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod tests;
