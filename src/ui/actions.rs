//! Keyboard shortcuts and the action registry
//!
//! Every command the editor exposes (menu button or key chord) is registered
//! once with an id, a label and an optional shortcut. Each frame the registry
//! is asked which shortcuts fired against that frame's [`InputState`], so the
//! same lookup works from tests without a window.
//!
//! ```ignore
//! let mut registry = ActionRegistry::new();
//! registry.register(Action::new("file.save")
//!     .label("Save")
//!     .shortcut(Shortcut::ctrl(KeyCode::S)));
//!
//! for id in registry.process_triggers(&ctx, &input) {
//!     // dispatch on id
//! }
//! ```

use macroquad::prelude::KeyCode;
use crate::input::{InputState, ModifierKeys};

/// A key plus the exact modifiers that must be held with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub key: KeyCode,
    pub ctrl: bool, // Cmd on Mac
    pub shift: bool,
    pub alt: bool,
}

impl Shortcut {
    /// Bare key, no modifiers
    pub fn key(key: KeyCode) -> Self {
        Self { key, ctrl: false, shift: false, alt: false }
    }

    /// Ctrl/Cmd + key
    pub fn ctrl(key: KeyCode) -> Self {
        Self { ctrl: true, ..Self::key(key) }
    }

    /// Ctrl/Cmd + Shift + key
    pub fn ctrl_shift(key: KeyCode) -> Self {
        Self { ctrl: true, shift: true, ..Self::key(key) }
    }

    /// Key went down this frame with exactly these modifiers held.
    /// Ctrl+S must not fire Ctrl+Shift+S and vice versa.
    pub fn matches(&self, key_pressed: bool, modifiers: ModifierKeys) -> bool {
        key_pressed
            && self.ctrl == modifiers.ctrl
            && self.shift == modifiers.shift
            && self.alt == modifiers.alt
    }

    pub fn is_pressed(&self, input: &InputState) -> bool {
        self.matches(input.key_pressed(self.key), input.modifiers)
    }

    /// Format for tooltips (e.g. "Ctrl+Shift+S", "⌘⇧S")
    pub fn display(&self) -> String {
        let mut text = String::new();

        #[cfg(target_os = "macos")]
        {
            if self.ctrl { text.push('⌘'); }
            if self.shift { text.push('⇧'); }
            if self.alt { text.push('⌥'); }
        }

        #[cfg(not(target_os = "macos"))]
        {
            if self.ctrl { text.push_str("Ctrl+"); }
            if self.shift { text.push_str("Shift+"); }
            if self.alt { text.push_str("Alt+"); }
        }

        text.push_str(key_name(self.key));
        text
    }
}

/// Human-readable name for the keys the editor binds
fn key_name(key: KeyCode) -> &'static str {
    match key {
        KeyCode::E => "E",
        KeyCode::N => "N",
        KeyCode::O => "O",
        KeyCode::Q => "Q",
        KeyCode::S => "S",
        KeyCode::Key1 => "1",
        KeyCode::Key2 => "2",
        KeyCode::Key3 => "3",
        KeyCode::Key4 => "4",
        KeyCode::Key5 => "5",
        KeyCode::Key6 => "6",
        KeyCode::Key7 => "7",
        KeyCode::Key8 => "8",
        KeyCode::Key9 => "9",
        KeyCode::Home => "Home",
        KeyCode::Escape => "Esc",
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        _ => "?",
    }
}

/// Editor facts that decide whether an action may run
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// A text field has focus; all shortcuts are blocked
    pub text_editing: bool,
    /// Grid has unsaved changes
    pub is_dirty: bool,
    /// Grid is backed by a file on disk
    pub has_file: bool,
    /// Number of paintable kinds in the active tile set
    pub paintable_kinds: usize,
}

type EnableFn = fn(&ActionContext) -> bool;

fn always_enabled(_: &ActionContext) -> bool {
    true
}

/// A registered action
#[derive(Clone)]
pub struct Action {
    /// Unique identifier (e.g. "file.save")
    pub id: &'static str,
    pub label: &'static str,
    pub shortcut: Option<Shortcut>,
    /// Status bar tip / tooltip
    pub status_tip: &'static str,
    /// Grouping for menus
    pub category: &'static str,
    enabled_fn: EnableFn,
}

impl Action {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            label: "",
            shortcut: None,
            status_tip: "",
            category: "General",
            enabled_fn: always_enabled,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn status_tip(mut self, tip: &'static str) -> Self {
        self.status_tip = tip;
        self
    }

    pub fn category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }

    pub fn enabled_when(mut self, f: EnableFn) -> Self {
        self.enabled_fn = f;
        self
    }

    pub fn is_enabled(&self, ctx: &ActionContext) -> bool {
        !ctx.text_editing && (self.enabled_fn)(ctx)
    }

    /// Shortcut pressed this frame and action enabled
    pub fn is_triggered(&self, ctx: &ActionContext, input: &InputState) -> bool {
        self.is_enabled(ctx) && self.shortcut.is_some_and(|s| s.is_pressed(input))
    }

    /// Tooltip with shortcut hint
    pub fn tooltip(&self) -> String {
        let text = if self.status_tip.is_empty() { self.label } else { self.status_tip };
        match self.shortcut {
            Some(shortcut) => format!("{} ({})", text, shortcut.display()),
            None => text.to_string(),
        }
    }
}

/// All actions, kept in registration order
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: Vec<Action>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action. Fails if the id or the shortcut is already taken.
    pub fn register(&mut self, action: Action) -> Result<(), String> {
        if self.get(action.id).is_some() {
            return Err(format!("action '{}' registered twice", action.id));
        }
        if let Some(shortcut) = action.shortcut {
            if let Some(existing) = self.actions.iter().find(|a| a.shortcut == Some(shortcut)) {
                return Err(format!(
                    "shortcut {} of '{}' already used by '{}'",
                    shortcut.display(),
                    action.id,
                    existing.id
                ));
            }
        }
        self.actions.push(action);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn is_enabled(&self, id: &str, ctx: &ActionContext) -> bool {
        self.get(id).is_some_and(|a| a.is_enabled(ctx))
    }

    pub fn tooltip(&self, id: &str) -> String {
        self.get(id).map_or_else(String::new, |a| a.tooltip())
    }

    pub fn actions_in_category(&self, category: &str) -> Vec<&Action> {
        self.actions.iter().filter(|a| a.category == category).collect()
    }

    /// IDs of every action whose shortcut fired this frame, in registration order
    pub fn process_triggers(&self, ctx: &ActionContext, input: &InputState) -> Vec<&'static str> {
        self.actions
            .iter()
            .filter(|a| a.is_triggered(ctx, input))
            .map(|a| a.id)
            .collect()
    }
}
