//! Command-line arguments for the `ifalias-persist` binary.

use clap::Parser;
use std::path::PathBuf;

use crate::directory::DEFAULT_SYSFS_ROOT;

/// Serve IF-MIB::ifAlias to snmpd over the pass_persist protocol.
///
/// Reads commands on stdin and answers on stdout. Logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "ifalias-persist", version, about)]
pub struct Args {
    /// Directory holding one subdirectory per network interface.
    #[arg(long = "sysfs-root", value_name = "PATH", default_value = DEFAULT_SYSFS_ROOT)]
    pub sysfs_root: PathBuf,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Logging control arguments.
#[derive(Debug, Parser)]
pub struct LogArgs {
    /// Enable debug logging (ifalias_persist=debug).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Enable trace logging (ifalias_persist=trace).
    #[arg(short = 'D', long = "trace")]
    pub trace: bool,
}

impl LogArgs {
    /// Log filter directive selected by the flags.
    pub fn filter(&self) -> &'static str {
        if self.trace {
            "ifalias_persist=trace"
        } else if self.debug {
            "ifalias_persist=debug"
        } else {
            "ifalias_persist=warn"
        }
    }

    /// Initialize tracing based on debug/trace flags.
    ///
    /// `RUST_LOG` takes precedence over the flags when set. Output always goes
    /// to stderr, since stdout carries the protocol.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.filter()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ifalias-persist"]).unwrap();
        assert_eq!(args.sysfs_root, PathBuf::from("/sys/class/net"));
        assert_eq!(args.log.filter(), "ifalias_persist=warn");
    }

    #[test]
    fn test_flags() {
        let args =
            Args::try_parse_from(["ifalias-persist", "--sysfs-root", "/tmp/net", "-d"]).unwrap();
        assert_eq!(args.sysfs_root, PathBuf::from("/tmp/net"));
        assert_eq!(args.log.filter(), "ifalias_persist=debug");

        let args = Args::try_parse_from(["ifalias-persist", "-d", "--trace"]).unwrap();
        assert_eq!(args.log.filter(), "ifalias_persist=trace");
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Args::try_parse_from(["ifalias-persist", "extra"]).is_err());
    }
}
