//! Common types and utilities shared across commands

use clap::Parser;
use plugin_readme_logger as logger;
use std::path::PathBuf;

/// Global CLI options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    #[arg(short, long, global = true, help = "Only show errors")]
    pub quiet: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug, -vv for trace)")]
    pub verbose: u8,

    #[arg(long, global = true, value_name = "PATH", help = "Append all log messages to this file")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOpts {
    /// Get the effective verbosity level
    /// - 0: quiet, errors only
    /// - 1: progress messages (default)
    /// - 2: debug (-v)
    /// - 3: trace (-vv)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            logger::QUIET
        } else {
            logger::NORMAL.saturating_add(self.verbose)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_overrides_verbose() {
        let opts = GlobalOpts {
            quiet: true,
            verbose: 2,
            log_file: None,
        };
        assert_eq!(opts.verbosity_level(), logger::QUIET);
    }

    #[test]
    fn test_verbose_levels() {
        let mut opts = GlobalOpts::default();
        assert_eq!(opts.verbosity_level(), logger::NORMAL);
        opts.verbose = 1;
        assert_eq!(opts.verbosity_level(), logger::DEBUG);
        opts.verbose = 2;
        assert_eq!(opts.verbosity_level(), logger::TRACE);
    }
}
