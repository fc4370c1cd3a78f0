use colored::Colorize;
use skillbridge_lib::TargetRole;
use strum::IntoEnumIterator;
use sysexits::ExitCode;

pub fn handle() -> ExitCode {
    for role in TargetRole::iter() {
        println!("{}", role.to_string().bold());
        println!("  requires: {}", role.required_skills().join(", "));
    }

    ExitCode::Ok
}
