use serde::Deserialize;

// Top-level tiles file: a list of `[[tiles]]` tables
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TilesConfig {
    #[serde(default)]
    pub tiles: Vec<TileDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TileDef {
    pub name: String,
    // Wider than the registry so out-of-range ids are reported, not truncated
    pub id: u16,
    pub texture: u16,

    // "cube" (default), "grass" or "bush"
    #[serde(default)]
    pub kind: Option<String>,

    // Grass: texture of the top and bottom faces; sides use `texture`
    #[serde(default)]
    pub top: Option<u16>,
    #[serde(default)]
    pub bottom: Option<u16>,
    // Grass: tile it reverts to in darkness and spreads onto when lit
    #[serde(default)]
    pub decays_to: Option<String>,

    // Bush: tiles it can stand on
    #[serde(default)]
    pub soil: Option<Vec<String>>,
}

impl TileDef {
    /// A plain cube definition; the other fields are left unset.
    pub fn cube(name: impl Into<String>, id: u16, texture: u16) -> Self {
        TileDef {
            name: name.into(),
            id,
            texture,
            kind: None,
            top: None,
            bottom: None,
            decays_to: None,
            soil: None,
        }
    }
}
