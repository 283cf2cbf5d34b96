use thiserror::Error;

/// Failures while turning tile definitions into a registry.
#[derive(Debug, Error)]
pub enum TileConfigError {
    #[error("failed to read tile definitions: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tile definitions: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("tile `{name}`: id {id} does not fit the 256-slot registry")]
    IdOutOfRange { name: String, id: u16 },
    #[error("tile `{name}`: id 0 is reserved for air")]
    ReservedAir { name: String },
    #[error("tile `{name}`: texture slot {slot} is outside the 16x16 atlas")]
    SlotOutOfRange { name: String, slot: u16 },
    #[error("tile `{name}`: unknown kind `{kind}`")]
    UnknownKind { name: String, kind: String },
    #[error("tile `{name}`: kind `{kind}` requires `{field}`")]
    MissingField {
        name: String,
        kind: &'static str,
        field: &'static str,
    },
    #[error("tile `{name}`: references unknown tile `{target}`")]
    UnknownTile { name: String, target: String },
}
