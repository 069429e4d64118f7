// CLI for running the sequence scans over integers

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use patterns::logger::{DEFAULT_LOG_PATH, LogSink, Logger, LoggerConfig};
use seqscan::array;

/// Token standing for an absent slot or target.
const ABSENT: &str = "_";

#[derive(Parser)]
#[command(name = "seqscan")]
#[command(about = "Find the maximum, runner-up, or position of a value in a sequence", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Where results are reported [default: tee with --log-file, else console]
    #[arg(long, value_enum, global = true)]
    sink: Option<SinkArg>,

    /// Append results to this file as well as printing them
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolve the sink and path flags into a logger configuration.
    ///
    /// `--log-file` alone selects the tee sink. An explicit `--sink` wins,
    /// and the file sinks fall back to the default log path.
    fn logger_config(&self) -> LoggerConfig {
        let sink = match (self.sink, &self.log_file) {
            (Some(sink), _) => sink.into(),
            (None, Some(_)) => LogSink::Tee,
            (None, None) => LogSink::Console,
        };
        let path = self
            .log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));
        return LoggerConfig { path, sink };
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Report the greatest value
    Max {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Report the largest value strictly below the maximum
    SecondMax {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Report the index of the first slot equal to the target, or -1
    IndexOf {
        /// Value to look for; omit or pass `_` to find the first absent slot
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<String>,

        /// Slots to search; `_` marks an absent slot
        #[arg(allow_negative_numbers = true)]
        slots: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SinkArg {
    Console,
    File,
    Tee,
}

impl From<SinkArg> for LogSink {
    fn from(arg: SinkArg) -> LogSink {
        return match arg {
            SinkArg::Console => LogSink::Console,
            SinkArg::File => LogSink::File,
            SinkArg::Tee => LogSink::Tee,
        };
    }
}

/// Parse a slot token, mapping `_` to an absent slot.
fn parse_slot(token: &str) -> anyhow::Result<Option<i64>> {
    if token == ABSENT {
        return Ok(None);
    }
    let value = token
        .parse::<i64>()
        .with_context(|| format!("invalid slot {:?}, expected an integer or `{}`", token, ABSENT))?;
    return Ok(Some(value));
}

fn describe(value: Option<&i64>) -> String {
    return match value {
        Some(value) => value.to_string(),
        None => String::from("none"),
    };
}

/// Run one command and return the line to report.
fn run(command: &Commands) -> anyhow::Result<String> {
    return match command {
        Commands::Max { values } => Ok(format!("maximum: {}", describe(array::maximum(values)))),
        Commands::SecondMax { values } => Ok(format!(
            "second maximum: {}",
            describe(array::second_maximum(values))
        )),
        Commands::IndexOf { target, slots } => {
            let slots = slots
                .iter()
                .map(|token| parse_slot(token))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let target = match target {
                Some(token) => parse_slot(token)?,
                None => None,
            };
            tracing::debug!(slots = slots.len(), ?target, "searching");

            // Misses print as -1.
            let index = array::index_of(&slots, target.as_ref())
                .map(|i| i as i64)
                .unwrap_or(-1);
            Ok(format!("index: {}", index))
        }
    };
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.logger_config();
    let logger: Box<dyn Logger> = config.build().context("failed to set up logger")?;
    tracing::debug!(?config, "logger ready");

    match run(&cli.command) {
        Ok(line) => logger.info(&line),
        Err(err) => {
            logger.error(&format!("{:#}", err));
            return Err(err);
        }
    }

    return Ok(());
}
