use std::{fs, path::PathBuf};

use colored::Colorize;
use skillbridge_lib::{SkillSet, TargetRole, analyze};
use sysexits::ExitCode;
use tracing::debug;

#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// Target role to analyze against
    #[arg(short, long, value_enum)]
    role: TargetRole,

    /// Skill to include (repeatable)
    #[arg(short, long = "skill")]
    skills: Vec<String>,

    /// File with one skill per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Emit the analysis as JSON
    #[arg(long)]
    json: bool,
}

pub fn handle(args: &Args) -> ExitCode {
    let mut skills = SkillSet::default();
    for skill in &args.skills {
        skills.add(skill);
    }

    if let Some(path) = &args.file {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("{} {}: {err}", "error:".red().bold(), path.display());
                return ExitCode::NoInput;
            }
        };

        // Blank lines fall out through the skill set's trimming
        for line in contents.lines() {
            skills.add(line);
        }
    }

    if skills.is_empty() {
        eprintln!(
            "{} no skills given; use --skill or --file",
            "error:".red().bold()
        );
        return ExitCode::Usage;
    }

    debug!("analyzing {} skills against {}", skills.len(), args.role);
    let analysis = analyze(&skills, args.role);

    if args.json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                return ExitCode::Software;
            }
        }
        return ExitCode::Ok;
    }

    println!(
        "Readiness for {}: {}",
        args.role.to_string().bold(),
        format!("{:.0}%", analysis.readiness).cyan().bold()
    );
    println!();
    println!("Skills you have ({}):", analysis.matched.len());
    for skill in &analysis.matched {
        println!("  {} {skill}", "✓".green());
    }
    println!();
    println!("Skills to develop ({}):", analysis.missing.len());
    for skill in &analysis.missing {
        println!("  {} {skill}", "✗".red());
    }

    ExitCode::Ok
}
