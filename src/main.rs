use anyhow::{bail, Result};
use env_logger::Env;
use log::debug;
use std::env;

use person_accounts::demo;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("demo");
    debug!("person-accounts {} mode={}", person_accounts::VERSION, mode);

    let lines = match mode {
        "demo" => demo::run(),
        "possessions" => demo::run_possessions(),
        other => {
            eprintln!("❌ Unknown mode: {}", other);
            eprintln!("   Usage: person-accounts [demo|possessions]");
            bail!("unknown mode '{}'", other);
        }
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
