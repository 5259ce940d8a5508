use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the jsprint binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsprint",
    version,
    about = "Print an ESTree JSON syntax tree back as JavaScript source"
)]
pub struct CliArgs {
    /// ESTree JSON file to print. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// JSON file with printer options (`indentUnit`, `continuationIndent`).
    #[arg(long, value_name = "PATH")]
    pub options: Option<PathBuf>,

    /// Indent width in spaces. Overrides the options file.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=16))]
    pub indent: Option<u8>,
}

impl CliArgs {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.file
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}
