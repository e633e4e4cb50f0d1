//! lifetrace: lifespan progress in the terminal
//!
//! Run: cargo run -p lifetrace-terminal --bin lifetrace -- --birth-date 1993-09-22

use std::io::{self, Write};
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, ClearType},
};

use lifetrace_core::{ConfigError, LifePlan};
use lifetrace_terminal::{AnsiRenderer, App, AppConfig, ColorMode, FrameBuffer, Theme, TuiError};

/// Lifespan progress calculator and day-grid display
#[derive(Parser)]
#[command(name = "lifetrace", version, about, long_about = None)]
struct Cli {
    /// Birth date (YYYY-MM-DD); overrides the config file
    #[arg(short, long, value_name = "DATE")]
    birth_date: Option<NaiveDate>,

    /// Expected lifespan in years (fractional allowed)
    #[arg(short, long, value_name = "YEARS")]
    lifespan: Option<f64>,

    /// Refresh interval in milliseconds
    #[arg(short, long, value_name = "MS")]
    refresh: Option<u64>,

    /// Theme name (tokyo_night, dracula, nord)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Disable colors (use plain text)
    #[arg(long)]
    no_color: bool,

    /// Render once to stdout and exit (for scripting/testing)
    #[arg(long)]
    render_once: bool,

    /// Terminal width for render-once mode
    #[arg(long, default_value = "100")]
    width: u16,

    /// Terminal height for render-once mode
    #[arg(long, default_value = "30")]
    height: u16,

    /// Path to custom config file (YAML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<std::path::PathBuf>,

    /// Dump default configuration to stdout and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<(), TuiError> {
    let cli = Cli::parse();

    if cli.dump_config {
        println!("{}", AppConfig::default_yaml());
        return Ok(());
    }

    let mut config = if let Some(ref path) = cli.config {
        AppConfig::load_from_file(path).unwrap_or_else(|| {
            eprintln!("[lifetrace] warning: could not load config from {path:?}, using defaults");
            AppConfig::default()
        })
    } else {
        AppConfig::load()
    };

    // CLI flags override anything loaded from the config file
    if let Some(date) = cli.birth_date {
        config.birth_date = Some(date);
    }
    if let Some(years) = cli.lifespan {
        config.expected_lifespan_years = years;
    }
    if let Some(ms) = cli.refresh {
        config.refresh_ms = ms;
    }
    if let Some(ref name) = cli.theme {
        config.theme = name.clone();
    }

    let birth_date = config.birth_date.ok_or(ConfigError::MissingBirthDate)?;

    let now = Local::now().naive_local();
    let plan = LifePlan::new(birth_date, config.expected_lifespan_years, now.date())?;

    let theme = Theme::by_name(&config.theme).unwrap_or_else(|| {
        eprintln!(
            "[lifetrace] warning: unknown theme {:?}, using tokyo_night",
            config.theme
        );
        Theme::default()
    });

    let mut app = App::new(plan, config.cells_per_row, theme, now);

    if cli.render_once {
        return render_once(&app, cli.width, cli.height);
    }

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All)
    )?;

    let color_mode = if cli.no_color {
        ColorMode::Mono
    } else {
        ColorMode::detect()
    };

    let result = run_app(&mut stdout, &mut app, config.refresh_ms, color_mode);

    // Cleanup
    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

/// Draw a single frame and dump it as plain text.
fn render_once(app: &App, width: u16, height: u16) -> Result<(), TuiError> {
    let mut buffer = FrameBuffer::new(width, height);
    app.draw(&mut buffer);

    let mut stdout = io::stdout();
    write!(stdout, "{}", buffer.plain_text())?;
    stdout.flush()?;
    Ok(())
}

/// Single-threaded tick loop: input is polled with a short timeout, the
/// report refreshes on its own interval, and only dirty cells are rewritten.
fn run_app(
    stdout: &mut io::Stdout,
    app: &mut App,
    refresh_ms: u64,
    color_mode: ColorMode,
) -> Result<(), TuiError> {
    let (width, height) = terminal::size()?;
    let mut buffer = FrameBuffer::new(width, height);
    let mut renderer = AnsiRenderer::new(color_mode);

    app.draw(&mut buffer);
    renderer.render_full(&mut buffer, stdout)?;

    let tick = Duration::from_millis(refresh_ms.max(16));
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code, key.modifiers) {
                        return Ok(());
                    }
                    app.draw(&mut buffer);
                    renderer.render_dirty(&mut buffer, stdout)?;
                }
                Event::Resize(w, h) => {
                    buffer = FrameBuffer::new(w, h);
                    renderer.reset();
                    execute!(stdout, terminal::Clear(ClearType::All))?;
                    app.draw(&mut buffer);
                    renderer.render_full(&mut buffer, stdout)?;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            app.refresh(Local::now().naive_local());
            app.draw(&mut buffer);
            renderer.render_dirty(&mut buffer, stdout)?;
            last_tick = Instant::now();
        }
    }
}
