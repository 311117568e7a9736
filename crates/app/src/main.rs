use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use learn_core::assess;
use learn_core::model::{Catalog, DayNumber};
use services::{DEFAULT_LOCALE, Narrator, SilentNarrator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, WebSpeechNarrator, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDay { raw: String },
    DayOutOfRange { day: u32, task_count: usize },
    InvalidLocale { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDay { raw } => write!(f, "invalid --day value: {raw}"),
            ArgsError::DayOutOfRange { day, task_count } => {
                write!(f, "--day {day} is outside 1..={task_count}")
            }
            ArgsError::InvalidLocale { raw } => write!(f, "invalid --locale value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [ui] [--locale <tag>] [--mute]");
    eprintln!("  app catalog");
    eprintln!("  app check --day <n> <answer...>");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --locale {DEFAULT_LOCALE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SURVIVAL_LOCALE, SURVIVAL_MUTE=1, RUST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui,
    Catalog,
    Check { day: u32, answer: String },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AppConfig {
    command: Command,
    locale: String,
    mute: bool,
}

impl AppConfig {
    fn parse(
        argv: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut locale = env("SURVIVAL_LOCALE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let mut mute = env("SURVIVAL_MUTE").is_some_and(|value| is_truthy(&value));

        let mut args = argv.into_iter().peekable();
        let mut command = match args.peek().map(String::as_str) {
            None => Command::Ui,
            Some(first) if first.starts_with('-') => Command::Ui,
            Some("ui") => {
                args.next();
                Command::Ui
            }
            Some("catalog") => {
                args.next();
                Command::Catalog
            }
            Some("check") => {
                args.next();
                Command::Check {
                    day: 1,
                    answer: String::new(),
                }
            }
            Some(other) => return Err(ArgsError::UnknownCommand(other.to_string())),
        };

        let mut words = Vec::new();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--locale" => {
                    let value = require_value(&mut args, "--locale")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLocale { raw: value });
                    }
                    locale = value;
                }
                "--mute" => mute = true,
                "--day" if matches!(command, Command::Check { .. }) => {
                    let value = require_value(&mut args, "--day")?;
                    let parsed: u32 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDay { raw: value.clone() })?;
                    if let Command::Check { day, .. } = &mut command {
                        *day = parsed;
                    }
                }
                "--help" | "-h" => return Ok(Self::help()),
                _ if matches!(command, Command::Check { .. }) && !arg.starts_with("--") => {
                    words.push(arg);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if let Command::Check { answer, .. } = &mut command {
            *answer = words.join(" ");
        }

        Ok(Self {
            command,
            locale,
            mute,
        })
    }

    fn help() -> Self {
        Self {
            command: Command::Help,
            locale: DEFAULT_LOCALE.to_string(),
            mute: true,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    narrator: Arc<dyn Narrator>,
    locale: String,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn narrator(&self) -> Arc<dyn Narrator> {
        Arc::clone(&self.narrator)
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Evaluate one answer without opening a window.
fn check_answer(catalog: &Catalog, day: u32, answer: &str) -> Result<String, ArgsError> {
    let index = usize::try_from(day)
        .ok()
        .and_then(|day| day.checked_sub(1))
        .filter(|index| *index < catalog.task_count())
        .ok_or(ArgsError::DayOutOfRange {
            day,
            task_count: catalog.task_count(),
        })?;
    let task = &catalog.tasks()[index];
    let assessment = assess(answer, task);
    Ok(format!(
        "Day {} ({}): +{} points\n{}",
        DayNumber::from_index(index),
        task.tense(),
        assessment.award,
        assessment.message
    ))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    init_logging();

    let catalog = Arc::new(Catalog::english_survival());
    if let Err(err) = catalog.validate() {
        warn!(error = %err, "catalog has inconsistent synonyms");
    }

    match config.command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Catalog => {
            println!("{}", serde_json::to_string_pretty(catalog.as_ref())?);
            Ok(())
        }
        Command::Check { day, answer } => {
            println!("{}", check_answer(&catalog, day, &answer)?);
            Ok(())
        }
        Command::Ui => {
            let narrator: Arc<dyn Narrator> = if config.mute {
                Arc::new(SilentNarrator)
            } else {
                Arc::new(WebSpeechNarrator)
            };
            info!(
                locale = %config.locale,
                muted = config.mute,
                tasks = catalog.task_count(),
                "launching practice window"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                catalog,
                narrator,
                locale: config.locale,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("English Survival")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
