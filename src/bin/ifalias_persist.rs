//! ifalias-persist: net-snmp pass_persist handler for IF-MIB::ifAlias.
//!
//! Configure snmpd with:
//!
//! ```text
//! pass_persist .1.3.6.1.2.1.31.1.1.1.18 /usr/local/bin/ifalias-persist
//! ```

use clap::Parser;
use ifalias_persist::cli::args::Args;
use ifalias_persist::directory::SysfsDirectory;
use ifalias_persist::handler::Engine;
use std::process::ExitCode;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    args.log.init_tracing();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "pass_persist loop terminated");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> ifalias_persist::Result<()> {
    let directory = SysfsDirectory::open(&args.sysfs_root).await?;
    tracing::info!(
        iface.root = %directory.root().display(),
        "serving ifAlias over pass_persist"
    );

    // The engine owns the directory; both are released when run returns.
    let engine = Engine::new(directory);
    engine
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
