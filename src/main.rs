use anyhow::{bail, Context};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

use storefront::app::App;
use storefront::kernel::services::adapters::{
    ensure_settings_file, ensure_settings_file_at, load_settings_from, InMemoryMarket,
    SettingsError,
};
use storefront::kernel::services::ports::Settings;
use storefront::tui::crossterm::poll_input;
use storefront::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use storefront::ui::backend::terminal::RatatuiTerminal;

mod logging;

const TICK: Duration = Duration::from_millis(100);
const USAGE: &str = "usage: storefront [--settings PATH]";

#[derive(Debug, Default)]
struct Args {
    settings: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<Args>> {
    let mut out = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--settings" => {
                let Some(path) = args.next() else {
                    bail!("--settings needs a path\n{USAGE}");
                };
                out.settings = Some(PathBuf::from(path));
            }
            other => bail!("unexpected argument `{other}`\n{USAGE}"),
        }
    }
    Ok(Some(out))
}

fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match path {
        Some(path) => {
            ensure_settings_file_at(path)?;
            path.to_path_buf()
        }
        None => ensure_settings_file()?,
    };
    load_settings_from(&path)
}

fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    // Settings are read before logging so the filter can come from them; the failure is
    // reported once the subscriber is up.
    let (settings, settings_err) = match load_settings(args.settings.as_deref()) {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    let _logging = logging::init(settings.log_filter.as_deref());
    if let Some(err) = settings_err {
        tracing::warn!(error = %err, "using default settings");
    }

    let api = Arc::new(InMemoryMarket::seeded().with_settings(&settings.market));
    let mut app = App::new(&settings, api).context("failed to start the async runtime")?;

    let guard = TerminalGuard::new().context("failed to set up the terminal")?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signals = storefront::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
    )
    .context("failed to install signal handlers")?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal =
        RatatuiTerminal::new(io::stdout()).context("failed to open the terminal backend")?;

    app.start();
    let result = run(&mut app, &mut terminal, &signal_rx);
    drop(guard);
    tracing::info!("storefront exited");
    result
}

fn run(
    app: &mut App,
    terminal: &mut RatatuiTerminal,
    signals: &Receiver<TerminationSignal>,
) -> anyhow::Result<()> {
    loop {
        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "terminating on signal");
            return Ok(());
        }

        app.tick(Instant::now());
        if app.needs_redraw() {
            terminal
                .draw(|backend, area| app.render(backend, area))
                .context("failed to draw frame")?;
        }

        if let Some(event) = poll_input(TICK).context("failed to read terminal input")? {
            if app.handle_input(&event, Instant::now()).is_quit() {
                return Ok(());
            }
        }
    }
}
