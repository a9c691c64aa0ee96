use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "mermaid2drawio",
    version,
    about = "CLI to convert Mermaid line charts to Draw.io XML"
)]
pub struct Cli {
    /// Path to input mermaid file (use `-` for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to output xml file (use `-` for stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Emit debug diagnostics
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    #[inline]
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        is_dash(&self.input)
    }

    #[inline]
    #[must_use]
    pub fn writes_stdout(&self) -> bool {
        is_dash(&self.output)
    }
}

fn is_dash(p: &std::path::Path) -> bool {
    p.as_os_str() == "-"
}
