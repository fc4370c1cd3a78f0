use clap::{Parser, Subcommand};
use sysexits::ExitCode;

mod analyze;
mod roadmap;
mod roles;

#[derive(Parser, Debug)]
#[command(name = "skillbridge")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List the role catalog and each role's required skills
    Roles,
    /// Run the skills gap analysis for a target role
    Analyze(analyze::Args),
    /// Print or export the learning roadmap for a target role
    Roadmap(roadmap::Args),
}

fn main() -> ExitCode {
    human_panic::setup_panic!();
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Roles => roles::handle(),
        Command::Analyze(args) => analyze::handle(args),
        Command::Roadmap(args) => roadmap::handle(args),
    }
}
