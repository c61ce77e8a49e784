use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fixit",
    version,
    about = "Rule-based minimal patch generator",
    after_help = r#"Examples:
  fixit fix --file report.json
  cat report.json | fixit fix
  fixit signatures
  fixit schema
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read a bug report and print a unified diff, or a refusal.
    Fix {
        /// Read the JSON report from PATH instead of stdin.
        #[arg(long, short = 'f', value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// List the recognized defect signatures.
    Signatures,
    /// Print the JSON Schema of the bug report payload.
    Schema,
}
