//! Editor action definitions
//!
//! Every keyboard command of the editor with its shortcut and enable
//! condition. Menu buttons reuse the labels and tooltips registered here.

use macroquad::prelude::KeyCode;
use crate::ui::{Action, ActionContext, ActionRegistry, Shortcut};
use crate::world::TileKind;
use super::{EditorAction, EditorSession};

/// Number-key selection: (action id, key, kind ordinal)
const SELECT_KEYS: [(&str, KeyCode, u8); 9] = [
    ("tile.select_1", KeyCode::Key1, 1),
    ("tile.select_2", KeyCode::Key2, 2),
    ("tile.select_3", KeyCode::Key3, 3),
    ("tile.select_4", KeyCode::Key4, 4),
    ("tile.select_5", KeyCode::Key5, 5),
    ("tile.select_6", KeyCode::Key6, 6),
    ("tile.select_7", KeyCode::Key7, 7),
    ("tile.select_8", KeyCode::Key8, 8),
    ("tile.select_9", KeyCode::Key9, 9),
];

/// Create the action registry for the editor
pub fn create_editor_actions() -> Result<ActionRegistry, String> {
    let mut registry = ActionRegistry::new();

    // ========================================================================
    // File Actions
    // ========================================================================
    registry.register(
        Action::new("file.new")
            .label("New...")
            .shortcut(Shortcut::ctrl(KeyCode::N))
            .status_tip("Create a blank map")
            .category("File"),
    )?;

    registry.register(
        Action::new("file.open")
            .label("Open...")
            .shortcut(Shortcut::ctrl(KeyCode::O))
            .status_tip("Open a map file")
            .category("File"),
    )?;

    registry.register(
        Action::new("file.save")
            .label("Save")
            .shortcut(Shortcut::ctrl(KeyCode::S))
            .status_tip("Save the current map")
            .category("File")
            .enabled_when(|ctx| ctx.is_dirty || ctx.has_file),
    )?;

    registry.register(
        Action::new("file.save_as")
            .label("Save As...")
            .shortcut(Shortcut::ctrl_shift(KeyCode::S))
            .status_tip("Save to a new file")
            .category("File"),
    )?;

    // ========================================================================
    // Tile Actions
    // ========================================================================
    registry.register(
        Action::new("tile.next")
            .label("Next Tile")
            .shortcut(Shortcut::key(KeyCode::E))
            .status_tip("Select the next tile kind")
            .category("Tile")
            .enabled_when(|ctx| ctx.paintable_kinds > 1),
    )?;

    registry.register(
        Action::new("tile.prev")
            .label("Previous Tile")
            .shortcut(Shortcut::key(KeyCode::Q))
            .status_tip("Select the previous tile kind")
            .category("Tile")
            .enabled_when(|ctx| ctx.paintable_kinds > 1),
    )?;

    for (id, key, _) in SELECT_KEYS {
        registry.register(
            Action::new(id)
                .label("Select Tile")
                .shortcut(Shortcut::key(key))
                .category("Tile"),
        )?;
    }

    // ========================================================================
    // View Actions
    // ========================================================================
    registry.register(
        Action::new("view.reset_camera")
            .label("Reset View")
            .shortcut(Shortcut::key(KeyCode::Home))
            .status_tip("Return to the origin at default zoom")
            .category("View"),
    )?;

    Ok(registry)
}

/// Build an ActionContext from the current editor state
pub fn build_context(session: &EditorSession, text_editing: bool) -> ActionContext {
    ActionContext {
        text_editing,
        is_dirty: session.is_dirty(),
        has_file: session.current_file().is_some(),
        paintable_kinds: session.tiles.paintable().count(),
    }
}

/// Editor command for a triggered action id
pub fn action_for_id(id: &str) -> Option<EditorAction> {
    let action = match id {
        "file.new" => EditorAction::New,
        "file.open" => EditorAction::Open,
        "file.save" => EditorAction::Save,
        "file.save_as" => EditorAction::SaveAs,
        "tile.next" => EditorAction::NextKind,
        "tile.prev" => EditorAction::PrevKind,
        "view.reset_camera" => EditorAction::ResetCamera,
        _ => {
            let (_, _, ordinal) = SELECT_KEYS.iter().find(|(select_id, _, _)| *select_id == id)?;
            EditorAction::SelectKind(TileKind(*ordinal))
        }
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::input::{InputState, ModifierKeys};
    use crate::ui::Rect;
    use crate::world::CellPos;
    use macroquad::math::vec2;

    #[test]
    fn test_editor_actions_registered() {
        let registry = create_editor_actions().unwrap();
        for id in ["file.new", "file.open", "file.save", "file.save_as", "tile.next", "tile.prev", "view.reset_camera"] {
            assert!(registry.get(id).is_some(), "{} missing", id);
            assert!(action_for_id(id).is_some());
        }
        assert_eq!(registry.actions_in_category("Tile").len(), 11);
    }

    #[test]
    fn test_save_needs_changes_or_file() {
        let registry = create_editor_actions().unwrap();
        let mut session = EditorSession::new(EditorConfig::default()).unwrap();
        assert!(!registry.is_enabled("file.save", &build_context(&session, false)));
        assert!(registry.is_enabled("file.save_as", &build_context(&session, false)));

        let view = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mouse = session.mapper(view).cell_to_screen(&session.camera, CellPos::new(0, 0)) + vec2(2.0, 2.0);
        session.update(&InputState { mouse, left_down: true, left_pressed: true, ..Default::default() }, view);
        assert!(session.is_dirty());
        assert!(registry.is_enabled("file.save", &build_context(&session, false)));
        assert!(!registry.is_enabled("file.save", &build_context(&session, true)));
    }

    #[test]
    fn test_menu_categories_in_registration_order() {
        let registry = create_editor_actions().unwrap();
        let file: Vec<_> = registry.actions_in_category("File").iter().map(|a| a.id).collect();
        assert_eq!(file, vec!["file.new", "file.open", "file.save", "file.save_as"]);
        let view: Vec<_> = registry.actions_in_category("View").iter().map(|a| a.id).collect();
        assert_eq!(view, vec!["view.reset_camera"]);
    }

    #[test]
    fn test_number_keys_map_to_kinds() {
        assert_eq!(action_for_id("tile.select_1"), Some(EditorAction::SelectKind(TileKind(1))));
        assert_eq!(action_for_id("tile.select_9"), Some(EditorAction::SelectKind(TileKind(9))));
        assert_eq!(action_for_id("tile.select_0"), None);
        assert_eq!(action_for_id("nope"), None);
    }

    #[test]
    fn test_save_as_chord_does_not_also_save() {
        let registry = create_editor_actions().unwrap();
        let session = EditorSession::new(EditorConfig::default()).unwrap();
        let mut input = InputState {
            modifiers: ModifierKeys { ctrl: true, shift: true, alt: false },
            ..Default::default()
        };
        input.pressed_keys.insert(KeyCode::S);
        let fired = registry.process_triggers(&build_context(&session, false), &input);
        assert_eq!(fired, vec!["file.save_as"]);
    }

    #[test]
    fn test_dialog_focus_blocks_number_keys() {
        let registry = create_editor_actions().unwrap();
        let session = EditorSession::new(EditorConfig::default()).unwrap();
        let mut input = InputState::default();
        input.pressed_keys.insert(KeyCode::Key3);

        let ctx = build_context(&session, false);
        assert_eq!(registry.process_triggers(&ctx, &input), vec!["tile.select_3"]);
        let ctx = build_context(&session, true);
        assert!(registry.process_triggers(&ctx, &input).is_empty());
    }
}
