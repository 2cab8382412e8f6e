use legacyping_frame::Variant;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("legacyping {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: legacyping");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("LEGACYPING_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    let protocols = Variant::ALL
        .iter()
        .map(|v| format!("{}={}", v.id(), v.name()))
        .collect::<Vec<_>>()
        .join(", ");
    println!("protocols: {protocols}");

    Ok(SUCCESS)
}
