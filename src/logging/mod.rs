//! Structured Logging & Tracing
//!
//! Library code only emits `tracing` events; this module installs the
//! subscriber for binaries and tests:
//! - Level-based filtering with per-module overrides
//! - `RUST_LOG` takes precedence over the configured filter
//! - Spans for operation timing
//! - Idempotent initialization

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Log level for the run graph core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Verbosity count (e.g. repeated `-v` flags) to level
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    pub default_level: LogLevel,
    pub module_filters: Vec<(String, LogLevel)>,
    pub show_targets: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Info,
            module_filters: vec![
                ("run_graph::generation".to_string(), LogLevel::Info),
                ("run_graph::graph".to_string(), LogLevel::Info),
                ("run_graph::balance".to_string(), LogLevel::Info),
            ],
            show_targets: true,
        }
    }
}

impl TracingConfig {
    /// Same filters, different default level
    pub fn with_level(level: LogLevel) -> Self {
        Self {
            default_level: level,
            module_filters: Self::default()
                .module_filters
                .into_iter()
                .map(|(module, _)| (module, level))
                .collect(),
            ..Self::default()
        }
    }

    pub fn to_env_filter_string(&self) -> String {
        let mut parts = vec![self.default_level.as_str().to_string()];
        for (module, level) in &self.module_filters {
            parts.push(format!("{}={}", module, level.as_str()));
        }
        parts.join(",")
    }
}

/// Whether `init_tracing` managed to install its subscriber; set by the first call
static SUBSCRIBER_INSTALLED: OnceLock<bool> = OnceLock::new();

/// Filter for `config`, unless `RUST_LOG` is set and parses
pub fn env_filter(config: &TracingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.to_env_filter_string()))
}

/// Install the stderr subscriber with default settings
pub fn init_tracing_default() -> bool {
    init_tracing(&TracingConfig::default())
}

/// Install the stderr subscriber. Only the first call configures anything;
/// later calls report the outcome of that first one. Returns `false` when
/// another global subscriber was already in place.
pub fn init_tracing(config: &TracingConfig) -> bool {
    *SUBSCRIBER_INSTALLED.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(config))
            .with_target(config.show_targets)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok()
    })
}

/// Enters a `run_graph_op` span and logs the elapsed time when dropped
pub struct TimingSpan {
    op: &'static str,
    started: Instant,
    _entered: tracing::span::EnteredSpan,
}

impl TimingSpan {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            started: Instant::now(),
            _entered: tracing::debug_span!("run_graph_op", op).entered(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for TimingSpan {
    fn drop(&mut self) {
        tracing::debug!(
            op = self.op,
            elapsed_ms = self.elapsed().as_secs_f64() * 1000.0,
            "finished"
        );
    }
}
