//! # Logger
//!
//! Where finished EMF lines and emission failures end up

use std::io::Write;
use std::sync::Arc;
use tracing::{error, info};

/// Sink for EMF lines
///
/// `info` receives one complete JSON document without a trailing newline. `error` receives a
/// static message and the [kind](crate::Error::kind) of the failure, never payload content.
pub trait MetricsLogger: Send + Sync {
    fn info(&self, line: &str);
    fn error(&self, message: &str, kind: &'static str);
}

impl<L: MetricsLogger + ?Sized> MetricsLogger for Arc<L> {
    fn info(&self, line: &str) {
        (**self).info(line)
    }

    fn error(&self, message: &str, kind: &'static str) {
        (**self).error(message, kind)
    }
}

impl<L: MetricsLogger + ?Sized> MetricsLogger for Box<L> {
    fn info(&self, line: &str) {
        (**self).info(line)
    }

    fn error(&self, message: &str, kind: &'static str) {
        (**self).error(message, kind)
    }
}

/// Writes EMF lines to stdout unadorned, which is what the CloudWatch agent and the Lambda
/// runtime pick up. Failures go to [tracing].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutLogger;

impl MetricsLogger for StdoutLogger {
    fn info(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if writeln!(stdout, "{line}").is_err() {
            error!("Failed to write EMF line to stdout");
        }
    }

    fn error(&self, message: &str, kind: &'static str) {
        error!(error_kind = kind, "{message}");
    }
}

/// Routes both EMF lines and failures through [tracing]
///
/// Pair with a subscriber that prints the bare message (e.g. a fmt layer without time,
/// level or target) or the lines will not parse as EMF.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl MetricsLogger for TracingLogger {
    fn info(&self, line: &str) {
        info!(target: "emf", "{line}");
    }

    fn error(&self, message: &str, kind: &'static str) {
        error!(target: "emf", error_kind = kind, "{message}");
    }
}
