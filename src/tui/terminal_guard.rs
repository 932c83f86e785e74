use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Puts the terminal into and out of the full-screen interactive mode.
pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::EnableMouseCapture,
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::DisableMouseCapture,
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Every step runs even if an earlier one fails; the first error is reported.
        let steps = [
            disable_raw_mode(),
            execute!(io::stdout(), LeaveAlternateScreen),
            execute!(io::stdout(), DisableMouseCapture),
            execute!(io::stdout(), cursor::Show),
        ];
        steps.into_iter().collect()
    }
}

/// Cloneable, idempotent restore handle. Shared with the signal thread so whichever side
/// gets there first restores the terminal exactly once.
#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }

    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    /// Runs `ops.setup()`. A setup that fails halfway is rolled back before the error is
    /// returned, so the caller never has to restore a terminal it does not own.
    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        if let Err(err) = ops.setup() {
            if let Err(restore_err) = ops.restore() {
                tracing::warn!(error = %restore_err, "terminal restore after failed setup");
            }
            return Err(err);
        }
        tracing::debug!("terminal entered interactive mode");
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    #[cfg(unix)]
    fn from_raw(raw: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        match raw {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }

    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to the UI loop. If the loop has not exited within the grace period,
/// the terminal is restored from the signal thread and the process exits.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    const GRACE: std::time::Duration = std::time::Duration::from_secs(2);

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("storefront-signals".to_string())
        .spawn(move || {
            let Some(signal) = signals.forever().find_map(TerminationSignal::from_raw) else {
                return;
            };
            tracing::info!(?signal, "termination signal received");
            if tx.send(signal).is_err() {
                tracing::debug!("UI loop already gone");
            }

            std::thread::sleep(GRACE);
            if let Err(err) = restorer.restore() {
                tracing::warn!(error = %err, "terminal restore from signal thread");
            }
            std::process::exit(signal.exit_code());
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
