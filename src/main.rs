//! mazegrid - tile map editor for maze games
//!
//! Paint typed tiles on a rectangular grid, pan/zoom the view, and load or
//! save maps as comma-separated text.

mod config;
mod editor;
mod input;
mod ui;
mod world;

use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use macroquad::prelude::*;
use config::{EditorConfig, TileSetConfig};
use editor::{
    action_for_id, build_context, create_editor_actions, draw_editor, grid_view_rect, pick_open_path,
    pick_save_path, DialogOutcome, EditorAction, EditorSession, NewMapDialog, TileSprites, STATUS_SECS,
};
use input::InputState;
use ui::{Rect, UiContext};
use world::{limits, TileSetPreset};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TileSetArg {
    Maze,
    Coins,
}

impl From<TileSetArg> for TileSetPreset {
    fn from(arg: TileSetArg) -> Self {
        match arg {
            TileSetArg::Maze => TileSetPreset::Maze,
            TileSetArg::Coins => TileSetPreset::Coins,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "mazegrid", version, about = "Tile map editor for maze games")]
struct Cli {
    /// Map file to open at startup
    map: Option<PathBuf>,

    /// Config file (default: <config dir>/mazegrid/config.ron)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tile kinds to paint with, overrides the config
    #[arg(long, value_enum)]
    tileset: Option<TileSetArg>,

    /// Rows of the startup blank grid
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=limits::MAX_DIMENSION as i64))]
    rows: Option<u16>,

    /// Columns of the startup blank grid
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=limits::MAX_DIMENSION as i64))]
    cols: Option<u16>,

    /// Print the effective config as RON and exit
    #[arg(long)]
    print_config: bool,
}

/// Config file (or defaults) with command-line overrides applied
fn load_config(cli: &Cli) -> EditorConfig {
    let path = cli.config.clone().or_else(EditorConfig::default_path);
    let mut config = match path {
        Some(path) => match EditorConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Using default config: {}", e);
                EditorConfig::default()
            }
        },
        None => EditorConfig::default(),
    };

    if let Some(tileset) = cli.tileset {
        config.tileset = TileSetConfig::Preset(tileset.into());
    }
    if let Some(rows) = cli.rows {
        config.default_rows = rows as usize;
    }
    if let Some(cols) = cli.cols {
        config.default_cols = cols as usize;
    }
    config
}

fn window_conf() -> Conf {
    Conf {
        window_title: format!("mazegrid v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let cli = Cli::parse();
    let config = load_config(&cli);

    if cli.print_config {
        match config.to_ron() {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("{}", e),
        }
        return;
    }

    let mut session = match EditorSession::new(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Invalid config, using defaults: {}", e);
            match EditorSession::new(EditorConfig::default()) {
                Ok(session) => session,
                Err(e) => {
                    eprintln!("Cannot start editor: {}", e);
                    return;
                }
            }
        }
    };
    println!(
        "Tile set: {} kinds, grid {}x{}",
        session.tiles.len(),
        session.grid.rows(),
        session.grid.cols()
    );

    if let Some(path) = &cli.map {
        if let Err(e) = session.open(path) {
            session.report_error("Load failed", &e);
        }
    }

    let actions = match create_editor_actions() {
        Ok(actions) => actions,
        Err(e) => {
            eprintln!("Cannot register editor actions: {}", e);
            return;
        }
    };

    let sprites = TileSprites::load(&session.tiles).await;
    let mut ui_ctx = UiContext::new();
    let mut new_map_dialog = NewMapDialog::new();
    let mut last_mouse = Vec2::from(mouse_position());

    loop {
        let input = InputState::capture(last_mouse);
        last_mouse = input.mouse;
        ui_ctx.begin_frame(input.mouse_state());

        let screen = Rect::screen(screen_width(), screen_height());
        let modal = new_map_dialog.is_open();

        let mut triggered: Vec<EditorAction> = Vec::new();
        if !modal {
            session.update(&input, grid_view_rect(screen));
        }
        let ctx = build_context(&session, modal);
        triggered.extend(actions.process_triggers(&ctx, &input).into_iter().filter_map(action_for_id));

        clear_background(ui::theme::BG_COLOR);
        let menu_action = draw_editor(&mut ui_ctx, screen, &session, &sprites, &actions, &ctx);
        if !modal {
            triggered.push(menu_action);
        }

        match new_map_dialog.draw(&mut ui_ctx, screen, &input) {
            DialogOutcome::Confirmed { rows, cols } => match session.new_map(rows as i64, cols as i64) {
                Ok(()) => session.set_status(&format!("New map {}x{}", rows, cols), STATUS_SECS),
                Err(e) => session.report_error("New map failed", &e),
            },
            DialogOutcome::Cancelled | DialogOutcome::Pending => {}
        }

        for action in triggered {
            handle_action(action, &mut session, &mut new_map_dialog);
        }

        next_frame().await
    }
}

fn handle_action(action: EditorAction, session: &mut EditorSession, new_map_dialog: &mut NewMapDialog) {
    match action {
        EditorAction::None => {}
        EditorAction::New => new_map_dialog.open(session.grid.rows(), session.grid.cols()),
        EditorAction::Open => open_map(session),
        EditorAction::Save => match session.save() {
            Ok(true) => saved(session),
            Ok(false) => save_map_as(session),
            Err(e) => session.report_error("Save failed", &e),
        },
        EditorAction::SaveAs => save_map_as(session),
        EditorAction::NextKind => session.next_kind(),
        EditorAction::PrevKind => session.prev_kind(),
        EditorAction::SelectKind(kind) => {
            session.select_kind(kind);
        }
        EditorAction::ResetCamera => session.reset_camera(),
    }
}

fn saved(session: &mut EditorSession) {
    let message = format!("Saved {}", session.title());
    session.set_status(&message, STATUS_SECS);
}

fn open_map(session: &mut EditorSession) {
    if cfg!(target_arch = "wasm32") {
        session.set_status("File dialogs are not available in the browser", STATUS_SECS);
        return;
    }
    let directory = session.config.map_directory.clone();
    // Cancelled dialog: nothing to do
    let Some(path) = pick_open_path(directory.as_deref()) else {
        return;
    };
    match session.open(&path) {
        Ok(()) => {
            let message = format!("Opened {}", session.title());
            session.set_status(&message, STATUS_SECS);
        }
        Err(e) => session.report_error("Load failed", &e),
    }
}

fn save_map_as(session: &mut EditorSession) {
    if cfg!(target_arch = "wasm32") {
        session.set_status("File dialogs are not available in the browser", STATUS_SECS);
        return;
    }
    let directory = session.config.map_directory.clone();
    let current = session.current_file().map(|p| p.to_path_buf());
    let Some(path) = pick_save_path(directory.as_deref(), current.as_deref()) else {
        return;
    };
    match session.save_as(&path) {
        Ok(()) => saved(session),
        Err(e) => session.report_error("Save failed", &e),
    }
}
