//! Session diagnostics.
//!
//! `--perf` times every message applied to the model and reports it at INFO
//! under the [`TARGET`] log target. The render debug log is a separate opt-in
//! file recording frames, input events and the outcome of task operations.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Log target for update timings.
pub const TARGET: &str = "tasklist::perf";

static ENABLED: AtomicBool = AtomicBool::new(false);
static TRACE_FILE: Mutex<Option<TraceFile>> = Mutex::new(None);

/// Open render debug log and the instant it was started.
#[derive(Debug)]
struct TraceFile {
    start: Instant,
    writer: BufWriter<File>,
}

/// Times one update step and reports it when dropped.
#[derive(Debug)]
#[must_use = "the timing is reported when the timer is dropped"]
pub struct UpdateTimer {
    step: &'static str,
    start: Instant,
}

impl Drop for UpdateTimer {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(target: TARGET, step = self.step, elapsed_ms, "update timed");
        log_event(self.step, format!("{elapsed_ms:.3} ms"));
    }
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Start timing an update step, usually named by [`Message::kind`].
///
/// [`Message::kind`]: crate::app::Message::kind
pub fn time_update(step: &'static str) -> UpdateTimer {
    UpdateTimer {
        step,
        start: Instant::now(),
    }
}

/// Let update timings through `base` when `--perf` is on.
///
/// # Errors
///
/// Returns an error if the perf directive cannot be parsed.
pub fn log_filter(base: EnvFilter, perf: bool) -> Result<EnvFilter, ParseError> {
    if !perf {
        return Ok(base);
    }
    Ok(base.add_directive(format!("{TARGET}=info").parse()?))
}

// Poisoning is recovered rather than propagated.
fn trace_file() -> MutexGuard<'static, Option<TraceFile>> {
    TRACE_FILE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Start (or stop, with `None`) writing the render debug log.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or written.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut trace = trace_file();
    *trace = None;
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "tasklist render debug log start")?;
        writer.flush()?;
        *trace = Some(TraceFile {
            start: Instant::now(),
            writer,
        });
    }
    Ok(())
}

pub fn is_debug_log_enabled() -> bool {
    trace_file().is_some()
}

/// Append one line to the render debug log, if it is open.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    let mut trace = trace_file();
    let Some(trace) = trace.as_mut() else {
        return;
    };
    let elapsed_ms = trace.start.elapsed().as_secs_f64() * 1000.0;
    let _ = writeln!(
        trace.writer,
        "[{elapsed_ms:>10.3} ms] {name}: {}",
        detail.as_ref()
    );
    let _ = trace.writer.flush();
}
