use atty::Stream;
use clap::Parser;
use env_logger::fmt::Formatter;
use env_logger::{Builder, Env};
use human_panic::setup_panic;
use log::Record;
use std::io::Write;

mod lookup;

/// Resolve the numeric exit statuses reported by the suite's tools and
/// agents to their symbolic names.
#[derive(Debug, Parser)]
#[command(name = "exitstatus", version, about)]
pub struct BaseArgs {
    /// Exit status codes to resolve. When none are given, codes are read
    /// from stdin, one or more per line.
    #[arg(allow_negative_numbers = true)]
    pub codes: Vec<i32>,

    /// Print the full status table instead of resolving codes
    #[arg(short, long, conflicts_with = "codes")]
    pub list: bool,

    /// Toggle verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Toggle JSON output for stdout
    #[arg(long)]
    pub json: bool,
}

fn main() {
    // Use human panic to give nicer error logs in the case of a runtime panic
    setup_panic!();

    let base_args: BaseArgs = BaseArgs::parse();
    setup_logger(base_args.verbose);
    let status = lookup::run(base_args);
    std::process::exit(status.into());
}

fn setup_logger(verbose_logging: bool) {
    let env = Env::new()
        .filter_or("EXITSTATUS_LOG", "INFO")
        .write_style("EXITSTATUS_LOG_STYLE");
    let mut builder = Builder::from_env(env);

    let log_formatter = |buf: &mut Formatter, record: &Record| {
        // If stderr is being piped elsewhere, add timestamps and remove colors
        if atty::isnt(Stream::Stderr) {
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{} {}] {}",
                timestamp,
                record.metadata().level(),
                record.args()
            )
        } else {
            writeln!(
                buf,
                "[{}] {}",
                buf.default_styled_level(record.metadata().level()),
                record.args()
            )
        }
    };

    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if verbose_logging {
        builder.filter(None, log::LevelFilter::Debug);
    } else {
        builder.filter(None, log::LevelFilter::Info);
    }
    builder.format(log_formatter).init();
}
