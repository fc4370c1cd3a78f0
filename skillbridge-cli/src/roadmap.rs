use std::{fs, path::PathBuf};

use colored::Colorize;
use skillbridge_lib::{TargetRole, career::roadmap};
use sysexits::ExitCode;

#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// Target role
    #[arg(short, long, value_enum)]
    role: TargetRole,

    /// Write the plain-text roadmap here instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn handle(args: &Args) -> ExitCode {
    let report = roadmap::render_text(args.role, args.role.roadmap());

    match &args.output {
        Some(path) => match fs::write(path, &report) {
            Ok(()) => {
                println!("Roadmap saved to {}", path.display().to_string().bold());
                ExitCode::Ok
            }
            Err(err) => {
                eprintln!("{} {}: {err}", "error:".red().bold(), path.display());
                ExitCode::CantCreat
            }
        },
        None => {
            print!("{report}");
            ExitCode::Ok
        }
    }
}
