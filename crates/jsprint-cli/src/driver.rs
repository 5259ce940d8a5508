//! Reads the input tree, resolves printer options, and renders.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info_span};

use jsprint_emitter::{PrintOptions, print_json_with_options};

use crate::args::CliArgs;

/// Render the tree named by `args`, reading `stdin` when no file is given.
///
/// The returned text has no trailing newline.
pub fn run(args: &CliArgs, stdin: impl Read) -> Result<String> {
    let _span = info_span!("run").entered();
    let options = resolve_options(args)?;
    let (source, name) = match args.input_path() {
        Some(path) => (read_file(path)?, path.display().to_string()),
        None => (read_stdin(stdin)?, "<stdin>".to_string()),
    };
    debug!(input = %name, bytes = source.len(), "read input");
    print_json_with_options(&source, options).with_context(|| format!("failed to print {name}"))
}

/// Options from `--options`, then `--indent` on top.
pub fn resolve_options(args: &CliArgs) -> Result<PrintOptions> {
    let mut options = match &args.options {
        Some(path) => load_options(path)?,
        None => PrintOptions::default(),
    };
    if let Some(width) = args.indent {
        options = options.with_indent_width(usize::from(width));
    }
    Ok(options)
}

/// Parse a printer options file.
pub fn load_options(path: &Path) -> Result<PrintOptions> {
    let text = read_file(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse options file {}", path.display()))
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_stdin(mut stdin: impl Read) -> Result<String> {
    let mut source = String::new();
    stdin
        .read_to_string(&mut source)
        .context("failed to read standard input")?;
    Ok(source)
}
