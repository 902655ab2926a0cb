mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod report;
mod ui;

use anyhow::Result;
use app::AppState;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::DateKey;
use persistence::{ensure_planner_dir, init_local_dir, log_file, FileBlobStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// How long the event loop waits for input before redrawing
const TICK_RATE: Duration = Duration::from_millis(500);

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(about = "A terminal weekly planner for tasks, habits and shopping lists", long_about = None)]
struct Cli {
    /// Data directory (overrides WEEKPLAN_DIR and the .weekplan lookup)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .weekplan directory in the current directory
    Init,
    /// Generate a weekly report with spending statistics
    Report {
        /// Any date in the week to report on (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/report-week-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let dir = init_local_dir()?;
            println!("Initialized planner directory: {}", dir.display());
            println!();
            println!("weekplan will now use this local directory for its data.");
            println!("Run 'weekplan' to start planning.");
            Ok(())
        }
        Some(Commands::Report { date, output }) => {
            logging::init_stderr_logging();

            let report_date = match date {
                Some(date_str) => Some(DateKey::parse(&date_str)?.date()),
                None => None,
            };
            let output_path = output.map(PathBuf::from);

            let report_path =
                report::generate_report(cli.dir.as_deref(), report_date, output_path)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(cli.dir),
    }
}

fn run_tui(dir: Option<PathBuf>) -> Result<()> {
    let data_dir = ensure_planner_dir(dir.as_deref())?;
    logging::init_file_logging(&log_file(&data_dir))?;
    info!(dir = %data_dir.display(), "starting");
    eprintln!("Using planner directory: {}", data_dir.display());

    let mut app = AppState::load(Box::new(FileBlobStore::new(&data_dir)), local_today());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.needs_save {
        app.save();
    }

    if let Err(err) = &result {
        error!(error = %err, "exited with error");
        eprintln!("Error: {}", err);
    }

    info!("stopped");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.refresh_today(local_today());

        // Write-through after every handled event
        if app.needs_save {
            app.save();
        }
    }
}

/// The calendar day in the local timezone
fn local_today() -> NaiveDate {
    DateKey::from_datetime(&Local::now()).date()
}
