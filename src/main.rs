mod app;
mod clipboard;
mod config;
mod generator;
mod history;
mod logging;
mod models;
mod ui;

use anyhow::Result;
use app::App;
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};
use clipboard::ArboardClipboard;
use crate::config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use generator::IdeaGenerator;
use models::IdeaSeeds;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "studio-pulse")]
#[command(version)]
#[command(about = "Shuffle creative prompts for curiosity-driven teams", long_about = None)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "\
{name} {version}
{about-section}
{usage-heading} {usage}

{all-args}
")]
struct Cli {
    /// Seed the idea generator for a repeatable sequence
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of ideas to print with --print (1 to 50)
    #[arg(short, long, default_value_t = 1, requires = "print",
          value_parser = RangedU64ValueParser::<usize>::new().range(1..=50))]
    count: usize,

    /// Print ideas to stdout instead of opening the interface
    #[arg(short, long, default_value_t = false, help_heading = "Flags")]
    print: bool,

    /// With --print, emit ideas as JSON
    #[arg(short, long, default_value_t = false, requires = "print", help_heading = "Flags")]
    json: bool,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = "Flags")]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'V', long, action = ArgAction::Version, help_heading = "Flags")]
    version: Option<bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let seeds = IdeaSeeds::embedded()?;
    let generator = IdeaGenerator::new(seeds);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.print {
        return print_ideas(&generator, rng, cli.count, cli.json);
    }

    let _log_guard = logging::init()
        .map_err(|e| eprintln!("Warning: file logging disabled. Error: {:#}", e))
        .ok();

    let app_config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config, using defaults. Error: {}",
            e
        );
        AppConfig::default()
    });

    let mut app = App::new(generator, rng, Box::new(ArboardClipboard::new()), app_config.theme);
    info!(seed = ?cli.seed, "starting studio pulse");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn print_ideas(generator: &IdeaGenerator, mut rng: StdRng, count: usize, json: bool) -> Result<()> {
    let ideas: Vec<_> = (0..count).map(|_| generator.generate(&mut rng)).collect();
    let mut out = io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &ideas)?;
        writeln!(out)?;
        return Ok(());
    }

    for (i, idea) in ideas.iter().enumerate() {
        if i > 0 {
            writeln!(out, "\n---\n")?;
        }
        writeln!(out, "{}", generator::share_text(idea))?;
    }
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.poll_background();
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(std::time::Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => app.quit(),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.quit()
                        }
                        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Tab => app.shuffle(),
                        KeyCode::Char('c') | KeyCode::Char('y') => app.copy(),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
