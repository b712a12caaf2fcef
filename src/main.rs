mod app;
mod calendar;
mod config;
mod help;
mod theme;
use crate::app::App;
use crate::calendar::RangePicker;
use crate::config::PickerConfig;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::{Path, PathBuf};
use time::{Date, OffsetDateTime};

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        config: PickerConfig,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut config = PickerConfig::new();
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("month") => {
                    // Accepted as 1-12 on the command line
                    let month: i64 = parser.value()?.parse()?;
                    config = config.starting_month(month.saturating_sub(1));
                }
                Arg::Long("year") => config = config.starting_year(parser.value()?.parse()?),
                Arg::Long("backward") => {
                    config = config.backward_months(parser.value()?.parse()?);
                }
                Arg::Long("forward") => config = config.forward_months(parser.value()?.parse()?),
                Arg::Long("monday") => config = config.use_monday(true),
                Arg::Long("min") => config = config.min_select_date(parser.value()?.string()?),
                Arg::Long("max") => config = config.max_select_date(parser.value()?.string()?),
                Arg::Long("weekly") => {
                    config = config.weekly_select_range(parser.value()?.parse()?);
                }
                Arg::Long("monthly") => {
                    config = config.monthly_select_range(parser.value()?.parse()?);
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { config, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { config, log_file } => {
                // Logging to the terminal would garble the UI, so only log
                // when given a file
                let _logger = log_file.as_deref().map(init_logging).transpose()?;
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let settings = config.resolve(today);
                log::debug!("Resolved settings: {settings:?}");
                let cursor = Date::from_calendar_date(settings.base_year, settings.base_month, 1)
                    .context("failed to construct starting date")?;
                let picker = RangePicker::new(&settings).context("failed to build calendar")?;
                let picker = with_terminal(|terminal| Ok(App::new(picker, cursor).run(terminal)?))?;
                match (picker.committed().anchor(), picker.committed().end()) {
                    (Some(start), Some(end)) => println!("{start} {end}"),
                    (Some(start), None) => println!("{start}"),
                    (None, _) => (),
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: rangecal [<options>]");
                println!();
                println!("Terminal multi-month date range picker with weekly and monthly snapping");
                println!();
                println!("The applied range is printed as YYYY-MM-DD on exit.");
                println!();
                println!("Options:");
                println!("  --month <1-12>       Month to show first [default: current month]");
                println!("  --year <YEAR>        Year to show first [default: current year]");
                println!("  --backward <1-6>     Also show this many months before");
                println!("  --forward <1-6>      Also show this many months after");
                println!("  --monday             Start weeks on Monday");
                println!("  --min <M/D/YYYY>     Only dates after this one can be picked");
                println!("  --max <M/D/YYYY>     Only dates before this one can be picked");
                println!("  --weekly <DAYS>      Snap ranges longer than this to whole weeks");
                println!("  --monthly <DAYS>     Snap ranges longer than this to whole months");
                println!("  --log-file <PATH>    Write logs to the given file");
                println!("  -h, --help           Display this help message and exit");
                println!("  -V, --version        Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(path: &Path) -> anyhow::Result<LoggerHandle> {
    Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?
        .log_to_file(FileSpec::try_from(path)?)
        .print_message()
        .start()
        .context("failed to start logger")
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
