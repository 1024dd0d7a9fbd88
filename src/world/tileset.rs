//! Tile kinds and the sets they come in
//!
//! A map file stores each cell as the ordinal of its kind, so the kind set is
//! a configuration constant shared by the loader, the painter and the renderer.
//! Two sets ship with the editor:
//! - Maze: walls, the player spawn and four coloured ghost spawns
//! - Coins: walls, the player spawn and collectible coins

use serde::{Deserialize, Serialize};

/// Ordinal of a tile kind within the active [`TileSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileKind(pub u8);

impl TileKind {
    /// Blank cell. Always ordinal 0 in every set.
    pub const EMPTY: TileKind = TileKind(0);
    /// Solid wall. Ordinal 1 in both presets.
    pub const WALL: TileKind = TileKind(1);

    pub fn ordinal(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

/// Definition of one kind: how it is written, named and drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileKindDef {
    pub ordinal: u8,
    pub name: String,
    /// RGBA fill colour for the debug renderer
    pub color: [u8; 4],
    /// Special kinds also record their last placed location on the grid
    #[serde(default)]
    pub special: bool,
    /// Optional sprite texture path, drawn instead of the fill colour
    #[serde(default)]
    pub sprite: Option<String>,
}

impl TileKindDef {
    pub fn new(ordinal: u8, name: &str, color: [u8; 4]) -> Self {
        Self {
            ordinal,
            name: name.to_string(),
            color,
            special: false,
            sprite: None,
        }
    }

    pub fn special(mut self) -> Self {
        self.special = true;
        self
    }
}

/// Built-in kind sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TileSetPreset {
    #[default]
    Maze,
    Coins,
}

/// Why a list of definitions cannot form a tile set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileSetError {
    #[error("a tile set needs at least an empty kind and one paintable kind, got {0}")]
    TooFewKinds(usize),
    #[error("kind at position {index} has ordinal {ordinal}; ordinals must be 0, 1, 2, ... in order")]
    NonDenseOrdinal { index: usize, ordinal: u8 },
    #[error("kind name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("a tile set holds at most 256 kinds, got {0}")]
    TooManyKinds(usize),
}

/// An ordered, dense list of tile kinds. Kind `i` lives at index `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet {
    kinds: Vec<TileKindDef>,
}

impl TileSet {
    /// Build a set from definitions, checking that ordinals are dense from 0
    pub fn from_defs(kinds: Vec<TileKindDef>) -> Result<Self, TileSetError> {
        if kinds.len() < 2 {
            return Err(TileSetError::TooFewKinds(kinds.len()));
        }
        if kinds.len() > 256 {
            return Err(TileSetError::TooManyKinds(kinds.len()));
        }
        for (index, def) in kinds.iter().enumerate() {
            if def.ordinal as usize != index {
                return Err(TileSetError::NonDenseOrdinal { index, ordinal: def.ordinal });
            }
            if kinds[..index].iter().any(|other| other.name == def.name) {
                return Err(TileSetError::DuplicateName(def.name.clone()));
            }
        }
        Ok(Self { kinds })
    }

    pub fn preset(preset: TileSetPreset) -> Self {
        match preset {
            TileSetPreset::Maze => Self::maze(),
            TileSetPreset::Coins => Self::coins(),
        }
    }

    /// Empty, Wall, PlayerSpawn and the four ghost spawns
    pub fn maze() -> Self {
        Self {
            kinds: vec![
                TileKindDef::new(0, "Empty", [0, 0, 0, 255]),
                TileKindDef::new(1, "Wall", [255, 255, 255, 255]),
                TileKindDef::new(2, "PlayerSpawn", [0, 255, 0, 255]).special(),
                TileKindDef::new(3, "RedSpawn", [255, 0, 0, 255]).special(),
                TileKindDef::new(4, "BlueSpawn", [0, 0, 255, 255]).special(),
                TileKindDef::new(5, "OrangeSpawn", [255, 255, 0, 255]).special(),
                TileKindDef::new(6, "PinkSpawn", [255, 0, 255, 255]).special(),
            ],
        }
    }

    /// Empty, Wall, PlayerSpawn and Coin
    pub fn coins() -> Self {
        Self {
            kinds: vec![
                TileKindDef::new(0, "Empty", [0, 0, 0, 255]),
                TileKindDef::new(1, "Wall", [255, 255, 255, 255]),
                TileKindDef::new(2, "PlayerSpawn", [0, 255, 0, 255]).special(),
                TileKindDef::new(3, "Coin", [255, 200, 40, 255]).special(),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Highest valid kind
    pub fn max_kind(&self) -> TileKind {
        TileKind((self.kinds.len() - 1) as u8)
    }

    /// Whether a raw ordinal read from a file names a kind of this set
    pub fn is_valid(&self, ordinal: i64) -> bool {
        ordinal >= 0 && (ordinal as u64) < self.kinds.len() as u64
    }

    pub fn contains(&self, kind: TileKind) -> bool {
        (kind.0 as usize) < self.kinds.len()
    }

    pub fn get(&self, kind: TileKind) -> Option<&TileKindDef> {
        self.kinds.get(kind.0 as usize)
    }

    pub fn is_special(&self, kind: TileKind) -> bool {
        self.get(kind).is_some_and(|def| def.special)
    }

    /// Display name, or "?" for a kind outside the set
    pub fn name(&self, kind: TileKind) -> &str {
        self.get(kind).map_or("?", |def| def.name.as_str())
    }

    /// Fill colour, falling back to the Empty colour for unknown kinds
    pub fn color(&self, kind: TileKind) -> [u8; 4] {
        self.get(kind).unwrap_or(&self.kinds[0]).color
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileKindDef> {
        self.kinds.iter()
    }

    /// Kinds a user can paint with the brush (everything except Empty)
    pub fn paintable(&self) -> impl Iterator<Item = &TileKindDef> {
        self.kinds.iter().skip(1)
    }
}

impl Default for TileSet {
    fn default() -> Self {
        Self::maze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_dense() {
        for preset in [TileSetPreset::Maze, TileSetPreset::Coins] {
            let set = TileSet::preset(preset);
            assert!(TileSet::from_defs(set.iter().cloned().collect()).is_ok());
        }
        assert_eq!(TileSet::maze().len(), 7);
        assert_eq!(TileSet::coins().len(), 4);
    }

    #[test]
    fn test_special_rule_matches_ordinal() {
        let set = TileSet::maze();
        assert!(!set.is_special(TileKind::EMPTY));
        assert!(!set.is_special(TileKind::WALL));
        for ordinal in 2..7 {
            assert!(set.is_special(TileKind(ordinal)));
        }
        assert!(TileSet::coins().is_special(TileKind(3)));
    }

    #[test]
    fn test_validity_range() {
        let set = TileSet::maze();
        assert!(set.is_valid(0));
        assert!(set.is_valid(6));
        assert!(!set.is_valid(7));
        assert!(!set.is_valid(9));
        assert!(!set.is_valid(-1));
        assert_eq!(set.max_kind(), TileKind(6));
    }

    #[test]
    fn test_lookup_names() {
        let set = TileSet::coins();
        assert_eq!(set.name(TileKind(2)), "PlayerSpawn");
        assert_eq!(set.name(TileKind(42)), "?");
    }

    #[test]
    fn test_from_defs_rejects_gaps_and_duplicates() {
        let gap = vec![
            TileKindDef::new(0, "Empty", [0, 0, 0, 255]),
            TileKindDef::new(2, "Wall", [255, 255, 255, 255]),
        ];
        assert_eq!(
            TileSet::from_defs(gap),
            Err(TileSetError::NonDenseOrdinal { index: 1, ordinal: 2 })
        );

        let dup = vec![
            TileKindDef::new(0, "Empty", [0, 0, 0, 255]),
            TileKindDef::new(1, "Empty", [255, 255, 255, 255]),
        ];
        assert!(matches!(TileSet::from_defs(dup), Err(TileSetError::DuplicateName(_))));

        let lonely = vec![TileKindDef::new(0, "Empty", [0, 0, 0, 255])];
        assert_eq!(TileSet::from_defs(lonely), Err(TileSetError::TooFewKinds(1)));
    }

    #[test]
    fn test_paintable_skips_empty() {
        let names: Vec<_> = TileSet::coins().paintable().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["Wall", "PlayerSpawn", "Coin"]);
    }
}
