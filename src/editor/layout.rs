//! Editor layout: menu bar, grid view, status bar

use macroquad::prelude::*;
use crate::ui::{draw_tooltip, theme, ActionContext, ActionRegistry, Rect, Toolbar, UiContext};
use crate::world::TileKind;
use super::actions::action_for_id;
use super::grid_view::{draw_grid_view, kind_color, TileSprites};
use super::EditorSession;

pub const MENU_HEIGHT: f32 = 28.0;
pub const STATUS_HEIGHT: f32 = 22.0;

/// Commands raised by menu buttons or shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    New,
    Open,
    Save,
    SaveAs,
    NextKind,
    PrevKind,
    SelectKind(TileKind),
    ResetCamera,
}

/// Screen area of the grid view between the menu and status bars
pub fn grid_view_rect(screen: Rect) -> Rect {
    screen
        .remaining_after_top(MENU_HEIGHT)
        .remaining_after_bottom(STATUS_HEIGHT)
}

/// Draw the complete editor UI, returns the clicked menu command
pub fn draw_editor(
    ctx: &mut UiContext,
    screen: Rect,
    session: &EditorSession,
    sprites: &TileSprites,
    actions: &ActionRegistry,
    action_ctx: &ActionContext,
) -> EditorAction {
    let menu_rect = screen.slice_top(MENU_HEIGHT);
    let status_rect = screen.remaining_after_top(MENU_HEIGHT).slice_bottom(STATUS_HEIGHT);

    // Grid first so tiles panned under the bars get covered
    draw_grid_view(grid_view_rect(screen), session, sprites);
    let action = draw_menu_bar(ctx, menu_rect, session, actions, action_ctx);
    draw_status_bar(status_rect, session);

    if let Some((text, x, y)) = ctx.take_tooltip() {
        draw_tooltip(&text, x, y);
    }
    action
}

fn draw_menu_bar(
    ctx: &mut UiContext,
    rect: Rect,
    session: &EditorSession,
    actions: &ActionRegistry,
    action_ctx: &ActionContext,
) -> EditorAction {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::HEADER_COLOR);

    let mut action = EditorAction::None;
    let mut toolbar = Toolbar::new(rect);

    for category in ["File", "View"] {
        for item in actions.actions_in_category(category) {
            let enabled = actions.is_enabled(item.id, action_ctx);
            if toolbar.button(ctx, item.label, &actions.tooltip(item.id), enabled) {
                action = action_for_id(item.id).unwrap_or(EditorAction::None);
            }
        }
        toolbar.separator();
    }

    // Palette strip
    for def in session.tiles.paintable() {
        let kind = TileKind(def.ordinal);
        let tooltip = if def.ordinal <= 9 {
            format!("{} ({})", def.name, def.ordinal)
        } else {
            def.name.clone()
        };
        let active = session.paint.selected() == kind;
        if toolbar.swatch(ctx, kind_color(&session.tiles, kind), &tooltip, active) {
            action = EditorAction::SelectKind(kind);
        }
    }
    toolbar.label(session.tiles.name(session.paint.selected()));

    action
}

fn draw_status_bar(rect: Rect, session: &EditorSession) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::HEADER_COLOR);
    draw_text(&status_text(session), rect.x + 8.0, rect.y + 15.0, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);
}

/// Status bar line: file, size, zoom, hovered cell, selected kind (with its
/// last placement for special kinds) and any pending message
fn status_text(session: &EditorSession) -> String {
    let hovered = session
        .hovered()
        .map_or_else(|| "-".to_string(), |c| format!("{},{}", c.row, c.col));
    let selected = session.paint.selected();
    let mut status = format!(
        "{} | {}x{} | Zoom: {:.2}x | Cell: {} | Tile: {}",
        session.title(),
        session.grid.rows(),
        session.grid.cols(),
        session.camera.zoom(),
        hovered,
        session.tiles.name(selected),
    );
    if let Some(pos) = session.grid.special_location(selected) {
        status.push_str(&format!(" @ {},{}", pos.row, pos.col));
    }
    if let Some(message) = session.status() {
        status.push_str(" | ");
        status.push_str(message);
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_shows_special_placement() {
        let mut session = EditorSession::new(crate::config::EditorConfig::default()).unwrap();
        assert_eq!(status_text(&session), "untitled | 20x20 | Zoom: 1.00x | Cell: - | Tile: Wall");

        session.select_kind(TileKind(2));
        session.grid.set(4, 7, TileKind(2)).unwrap();
        session.set_status("Saved", 1.0);
        assert_eq!(
            status_text(&session),
            "untitled | 20x20 | Zoom: 1.00x | Cell: - | Tile: PlayerSpawn @ 4,7 | Saved"
        );
    }

    #[test]
    fn test_grid_view_between_bars() {
        let view = grid_view_rect(Rect::screen(800.0, 600.0));
        assert_eq!(view, Rect::new(0.0, MENU_HEIGHT, 800.0, 600.0 - MENU_HEIGHT - STATUS_HEIGHT));
    }
}
