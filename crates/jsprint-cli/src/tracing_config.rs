//! Tracing configuration.
//!
//! Output format is chosen by `JSPRINT_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: hierarchical output via `tracing-tree`
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! # Which node kinds were rendered, nested under the print span
//! JSPRINT_LOG=trace JSPRINT_LOG_FORMAT=tree jsprint tree.json
//!
//! # Only failures
//! JSPRINT_LOG=jsprint_emitter=debug jsprint tree.json
//! ```
//!
//! Nothing is installed unless `JSPRINT_LOG` or `RUST_LOG` is set. All output
//! goes to stderr; stdout carries only the printed source.

use std::io;

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const LOG_VAR: &str = "JSPRINT_LOG";
const FORMAT_VAR: &str = "JSPRINT_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `JSPRINT_LOG_FORMAT` value. Unknown values mean `Text`.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(FORMAT_VAR).unwrap_or_default())
    }
}

/// The filter to install, or `None` when logging was not requested.
/// `JSPRINT_LOG` wins over `RUST_LOG` when both are set.
fn requested_filter() -> Option<EnvFilter> {
    if let Some(directives) = std::env::var_os(LOG_VAR) {
        return Some(EnvFilter::builder().parse_lossy(directives.to_string_lossy()));
    }
    std::env::var_os("RUST_LOG").map(|_| EnvFilter::from_default_env())
}

/// Output layer for `format`. Everything goes to stderr.
pub(crate) fn output_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Tree => tracing_tree::HierarchicalLayer::new(2)
            .with_indent_lines(true)
            .with_targets(true)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(io::stderr).boxed(),
        LogFormat::Text => fmt::layer().with_writer(io::stderr).boxed(),
    }
}

/// Install the global subscriber if logging was requested.
///
/// Fails only when a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let Some(filter) = requested_filter() else {
        return Ok(());
    };
    let layer = output_layer(LogFormat::from_env()).with_filter(filter);
    Registry::default().with(layer).try_init()
}
