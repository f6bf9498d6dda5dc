use cortex_map::{actions, app, config, event, io, logging, outline, ui};

use anyhow::{Context, Result};
use app::AppState;
use clap::Parser;
use config::{load_config, CliArgs};
use log::{error, info, warn};
use ratatui::Terminal;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let log_dir = config.log_dir.clone().or_else(logging::default_log_dir);
    match log_dir {
        Some(dir) => logging::init_logging(&config.log_level, &dir)?,
        None => eprintln!("No data directory available; logging disabled"),
    }

    // Load the map, or start from the seed map when the file does not exist yet
    let mut app = match config.default_file.clone() {
        Some(path) if path.exists() => {
            let map = io::load_map_json(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let mut app = AppState::with_map(config, map);
            app.filename = Some(path);
            app
        }
        Some(path) => {
            info!("{} does not exist yet; starting a new map", path.display());
            let mut app = AppState::new(config);
            app.filename = Some(path);
            app
        }
        None => AppState::new(config),
    };

    if args.outline {
        println!("{}", outline::render_outline(&app.map));
        return Ok(());
    }

    if args.export {
        let dir = std::env::current_dir()?;
        let path = io::export_to_dir(&app.map, &dir)?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut terminal = ui::setup_terminal()?;
    terminal.clear()?;

    let res = run_app(&mut terminal, &mut app);

    ui::restore_terminal(&mut terminal)?;

    if let Err(err) = res {
        error!("main loop failed: {:#}", err);
        eprintln!("Error: {}", err);
    }
    info!("event=app_exit dirty={}", app.is_dirty);

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(action) = event::handle_events(app)? {
            app.clear_message();
            // Failed saves and exports already report on the status line
            if let Err(e) = actions::execute_action(action, app) {
                warn!("action failed: {:#}", e);
            }
        }

        if let Err(e) = actions::auto_save_if_due(app) {
            app.set_message(format!("Auto-save failed: {}", e));
        }
    }

    Ok(())
}
