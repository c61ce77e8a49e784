use anyhow::Result;
use clap::Parser;
use fixit::model::FixResult;
use fixit::{cli, report, signature};
use schemars::schema_for;
use serde_json::json;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    match args.command {
        cli::Command::Fix { file } => {
            let raw = report::read_report_text(file.as_deref())?;
            let Some(parsed) = report::parse_report(&raw) else {
                println!("{}", report::INPUT_NOT_JSON);
                std::process::exit(1);
            };
            match signature::generate_fix(&parsed) {
                FixResult::Patch { diff } => {
                    print!("{diff}");
                    Ok(())
                }
                FixResult::Refusal { reason } => {
                    println!("{reason}");
                    std::process::exit(1);
                }
            }
        }
        cli::Command::Signatures => {
            let specs = signature::signature_specs();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "signatures": specs }))?
            );
            Ok(())
        }
        cli::Command::Schema => {
            let schema = schema_for!(fixit::model::BugReport);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}
