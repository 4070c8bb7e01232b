use std::{
    io,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing_subscriber::fmt::{writer::EitherWriter, MakeWriter};

static MUTE_GUARDS: AtomicUsize = AtomicUsize::new(0);

/// Stderr writer which turns into a sink while a [`LoggingGuard`] is alive.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SwitchableStderr;

impl<'a> MakeWriter<'a> for SwitchableStderr {
    type Writer = EitherWriter<io::Stderr, io::Sink>;

    fn make_writer(&'a self) -> Self::Writer {
        if is_logging_muted() {
            EitherWriter::B(io::sink())
        } else {
            EitherWriter::A(io::stderr())
        }
    }
}

/// Keeps log output muted until dropped.
#[must_use = "logging is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LoggingGuard {
    _private: (),
}

impl Drop for LoggingGuard {
    fn drop(&mut self) {
        MUTE_GUARDS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Mute log output, e.g. while a terminal UI owns the screen.
pub fn temporarily_disable_logging() -> LoggingGuard {
    MUTE_GUARDS.fetch_add(1, Ordering::SeqCst);
    LoggingGuard { _private: () }
}

/// Check if log output is currently muted.
pub fn is_logging_muted() -> bool {
    MUTE_GUARDS.load(Ordering::SeqCst) > 0
}
