use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v error .. -vvvvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    pub timestamps: bool,
}

impl LogArgs {
    /// The effective log level; `-v` flags override `default`.
    fn log_level(
        &self,
        default: u8,
    ) -> LogLevelNum {
        let level = if self.verbose > 0 {
            self.verbose
        } else {
            default
        };

        match level {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger for this binary and the library.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .module(env!("CARGO_CRATE_NAME"))
            .module("tokencraft")
            .quiet(self.quiet)
            .verbosity(self.log_level(default))
            .timestamp(if self.timestamps {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
