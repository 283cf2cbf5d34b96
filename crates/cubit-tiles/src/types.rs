use std::fmt;

use cubit_geom::{BlockPos, Vec3};

/// Index of a tile kind in the registry. `TileId::AIR` is never bound to a kind.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct TileId(pub u8);

impl TileId {
    pub const AIR: TileId = TileId(0);

    #[inline]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cell index into the 16x16 texture atlas (row-major, 16 cells per row).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct TextureSlot(pub u8);

impl TextureSlot {
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 16
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 16
    }
}

/// The six faces of a unit cube. Discriminants are the face indices used by
/// texture selection and by the emission table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Bottom = 0,
    Top = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl Face {
    /// All faces in index order; also the order in which a cube is rendered.
    pub const ALL: [Face; 6] = [
        Face::Bottom,
        Face::Top,
        Face::North,
        Face::South,
        Face::West,
        Face::East,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    /// Integer step from a cell to the neighbour behind this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::Bottom => (0, -1, 0),
            Face::Top => (0, 1, 0),
            Face::North => (0, 0, -1),
            Face::South => (0, 0, 1),
            Face::West => (-1, 0, 0),
            Face::East => (1, 0, 0),
        }
    }

    #[inline]
    pub fn neighbor(self, pos: BlockPos) -> BlockPos {
        let (dx, dy, dz) = self.delta();
        pos.offset(dx, dy, dz)
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    #[inline]
    pub fn role(self) -> FaceRole {
        match self {
            Face::Top => FaceRole::Top,
            Face::Bottom => FaceRole::Bottom,
            _ => FaceRole::Side,
        }
    }
}

/// Texture role of a face; directional tiles pick a texture per role.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FaceRole {
    Top,
    Bottom,
    Side,
}
