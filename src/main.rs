// src/main.rs

use bundlewatch::types::ExitStatus;
use bundlewatch::{Outcome, cli, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("bundlewatch error: {err:#}");
        std::process::exit(ExitStatus::RuntimeFailure.code());
    }

    match run(args).await {
        Ok(Outcome::Rebuild(signal)) => {
            println!("{signal}");
            std::process::exit(ExitStatus::Rebuild.code());
        }
        Ok(Outcome::DryRun) => {}
        Err(err) => {
            // `#` lets a wrapped anyhow error print its whole context chain.
            eprintln!("bundlewatch error: {err:#}");
            std::process::exit(err.exit_status().code());
        }
    }
}
