use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "weekplan-cli", version, about = "Weekly planner CLI")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Week grid with compiled blocks and day loads
    Week(commands::week::WeekArgs),
    /// Compiled blocks for one day of the week
    Day(commands::day::DayArgs),
    /// Tasks of the week, day by day
    Tasks(commands::tasks::TasksArgs),
    /// School timetable per day
    Timetable(commands::timetable::TimetableArgs),
    /// Subjects with their revision colours
    Subjects,
    /// Subjects to revise on a date
    Revisions(commands::revisions::RevisionsArgs),
    /// Month calendar
    Calendar(commands::calendar::CalendarArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Fixture data location and export
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Interactive in-memory editing session
    Shell,
    /// Print a shell completion script
    Completions(commands::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("WEEKPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Week(args) => commands::week::run(args),
        Commands::Day(args) => commands::day::run(args),
        Commands::Tasks(args) => commands::tasks::run(args),
        Commands::Timetable(args) => commands::timetable::run(args),
        Commands::Subjects => commands::subjects::run(),
        Commands::Revisions(args) => commands::revisions::run(args),
        Commands::Calendar(args) => commands::calendar::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Data { action } => commands::data::run(action),
        Commands::Shell => commands::shell::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
