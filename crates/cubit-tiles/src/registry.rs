use std::collections::HashMap;
use std::fs;
use std::ops::Index;
use std::path::Path;

use crate::config::{TileDef, TilesConfig};
use crate::defaults::default_tiles;
use crate::error::TileConfigError;
use crate::tile::{Tile, TileKind};
use crate::types::{TextureSlot, TileId};

/// Number of registry slots; every `TileId` indexes one.
pub const TILE_CAPACITY: usize = 256;

/// Fixed slot table mapping a tile id to its kind. Registering a second kind
/// under an occupied id replaces the first.
#[derive(Clone, Debug)]
pub struct TileRegistry {
    slots: Vec<Option<Tile>>,
    by_name: HashMap<String, TileId>,
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TileRegistry {
    pub fn new() -> Self {
        Self {
            slots: vec![None; TILE_CAPACITY],
            by_name: HashMap::new(),
        }
    }

    pub fn with_default_tiles() -> Self {
        let mut reg = Self::new();
        for tile in default_tiles() {
            reg.register(tile);
        }
        reg
    }

    /// Stores `tile` in slot `tile.id`, returning the kind it displaced.
    ///
    /// Names need not be unique. A name resolves to the last slot registered
    /// under it; when that slot is replaced it falls back to any other slot
    /// still carrying the name.
    pub fn register(&mut self, tile: Tile) -> Option<Tile> {
        let id = tile.id;
        let name = tile.name.clone();
        let prev = self.slots[id.index()].replace(tile);
        if let Some(old) = &prev {
            log::debug!("tile {} `{}` replaced by `{}`", id, old.name, name);
            if self.by_name.get(&old.name) == Some(&id) {
                self.by_name.remove(&old.name);
                let survivor = self
                    .iter()
                    .find(|t| t.id != id && t.name == old.name)
                    .map(|t| t.id);
                if let Some(other) = survivor {
                    self.by_name.insert(old.name.clone(), other);
                }
            }
        }
        self.by_name.insert(name, id);
        prev
    }

    #[inline]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.slots[id.index()].as_ref()
    }

    pub fn id_by_name(&self, name: &str) -> Option<TileId> {
        self.by_name.get(name).copied()
    }

    /// Solidity of whatever occupies a cell; empty slots (air) are not solid.
    #[inline]
    pub fn is_solid(&self, id: TileId) -> bool {
        self.get(id).is_some_and(Tile::is_solid)
    }

    #[inline]
    pub fn blocks_light(&self, id: TileId) -> bool {
        self.get(id).is_some_and(Tile::blocks_light)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, TileConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, TileConfigError> {
        let cfg: TilesConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: TilesConfig) -> Result<Self, TileConfigError> {
        // Names are resolved against the whole file so definitions may refer forward.
        let mut names: HashMap<String, TileId> = HashMap::new();
        names.insert("air".to_string(), TileId::AIR);
        for def in &cfg.tiles {
            names.insert(def.name.clone(), compile_id(def)?);
        }
        let mut reg = Self::new();
        for def in &cfg.tiles {
            reg.register(compile_tile(def, &names)?);
        }
        log::debug!("loaded {} tile definitions", cfg.tiles.len());
        Ok(reg)
    }
}

impl Index<TileId> for TileRegistry {
    type Output = Tile;

    /// Panics when no kind is registered for `id`; resolving a cell to an
    /// unregistered id is a caller bug.
    fn index(&self, id: TileId) -> &Tile {
        match self.get(id) {
            Some(tile) => tile,
            None => panic!("no tile registered for id {}", id),
        }
    }
}

fn compile_id(def: &TileDef) -> Result<TileId, TileConfigError> {
    match u8::try_from(def.id) {
        Ok(0) => Err(TileConfigError::ReservedAir {
            name: def.name.clone(),
        }),
        Ok(id) => Ok(TileId(id)),
        Err(_) => Err(TileConfigError::IdOutOfRange {
            name: def.name.clone(),
            id: def.id,
        }),
    }
}

fn compile_slot(def: &TileDef, slot: u16) -> Result<TextureSlot, TileConfigError> {
    u8::try_from(slot)
        .map(TextureSlot)
        .map_err(|_| TileConfigError::SlotOutOfRange {
            name: def.name.clone(),
            slot,
        })
}

fn resolve_name(
    def: &TileDef,
    names: &HashMap<String, TileId>,
    target: &str,
) -> Result<TileId, TileConfigError> {
    names
        .get(target)
        .copied()
        .ok_or_else(|| TileConfigError::UnknownTile {
            name: def.name.clone(),
            target: target.to_string(),
        })
}

fn required<T: Clone>(
    def: &TileDef,
    value: &Option<T>,
    kind: &'static str,
    field: &'static str,
) -> Result<T, TileConfigError> {
    value.clone().ok_or_else(|| TileConfigError::MissingField {
        name: def.name.clone(),
        kind,
        field,
    })
}

fn compile_tile(def: &TileDef, names: &HashMap<String, TileId>) -> Result<Tile, TileConfigError> {
    let id = compile_id(def)?;
    let texture = compile_slot(def, def.texture)?;
    let kind = match def.kind.as_deref().unwrap_or("cube") {
        "cube" => TileKind::Cube,
        "grass" => {
            let top = compile_slot(def, required(def, &def.top, "grass", "top")?)?;
            let bottom = compile_slot(def, required(def, &def.bottom, "grass", "bottom")?)?;
            let decays_to = required(def, &def.decays_to, "grass", "decays_to")?;
            TileKind::Grass {
                top,
                bottom,
                decays_to: resolve_name(def, names, &decays_to)?,
            }
        }
        "bush" => {
            let soil = def
                .soil
                .iter()
                .flatten()
                .map(|n| resolve_name(def, names, n))
                .collect::<Result<Vec<_>, _>>()?;
            TileKind::Bush { soil }
        }
        other => {
            return Err(TileConfigError::UnknownKind {
                name: def.name.clone(),
                kind: other.to_string(),
            });
        }
    };
    Ok(Tile {
        id,
        name: def.name.clone(),
        texture,
        kind,
    })
}
