use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};

use byewind::app::App;
use byewind::core::{Theme, ViewId};
use byewind::store::OrderStore;
use byewind::{config, input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "byewind",
    version,
    about = "ByeWind: a terminal admin dashboard for orders and eCommerce stats"
)]
struct Args {
    /// Config file (defaults to $XDG_CONFIG_HOME/byewind/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting view: default or ecommerce
    #[arg(long)]
    view: Option<String>,

    /// Color theme: light or dark
    #[arg(long)]
    theme: Option<String>,

    /// Log file (defaults to the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level for the byewind target, overridden by RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    // Read the file first for its log level, but report a broken one only
    // once the subscriber is installed
    let loaded = config::try_load(args.config.as_deref());
    let config_level = loaded.as_ref().ok().and_then(|c| c.log_level.clone());

    let log_level = args.log_level.as_deref().or(config_level.as_deref());
    if let Some(log_file) = args.log_file.clone().or_else(config::log_path) {
        if let Err(err) = logging::init(&log_file, log_level) {
            eprintln!("logging disabled: {err}");
        }
    }
    let config = config::or_default(loaded);

    let mut nav = config.initial_nav();
    if let Some(view) = args.view.as_deref() {
        nav.view = ViewId::parse(view);
    }
    if let Some(theme) = args.theme.as_deref().and_then(Theme::parse) {
        nav.theme = theme;
    }
    info!(view = nav.view.title(), theme = nav.theme.label(), "starting");

    let app = App::new(OrderStore::sample()?, nav).with_export_dir(config.export_dir.clone());
    let tick_rate = Duration::from_millis(config.tick_rate_ms());

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            info!("quit");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
