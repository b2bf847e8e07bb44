//! Per-tile collision mask backed by claim counts.

use grid::{blob, ByteGrid, GridResult};

/// The blocked/unblocked bitmap for a map, one cell per tile.
///
/// Each cell stores the number of outstanding collision claims on that
/// tile; a tile is blocked iff its count is non-zero. Counting claims
/// instead of storing a plain flag means two objects with overlapping
/// footprints can each release their own claim without clearing a tile
/// the other still occupies.
///
/// The wire form is a Base64 string of the raw count bytes (non-zero byte
/// = blocked, as the remote service expects). Encoding happens only at
/// the serialization boundary; mutations touch the in-memory grid alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    cells: ByteGrid,
}

impl CollisionMask {
    /// Creates an all-clear mask of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: ByteGrid::new(width, height),
        }
    }

    /// Decodes a mask from its wire encoding.
    ///
    /// The decoded buffer must hold exactly `width * height` bytes;
    /// anything else is a [`grid::GridError::DimensionMismatch`]. Bytes
    /// decoded from the wire seed the claim counts directly, so a mask
    /// that is never mutated re-encodes to the exact string it came from.
    pub fn from_encoded(encoded: &str, width: u32, height: u32) -> GridResult<Self> {
        let expected = width as usize * height as usize;
        let bytes = blob::decode_exact(encoded, expected)?;
        Ok(Self {
            cells: ByteGrid::from_cells(width, height, bytes)?,
        })
    }

    /// Returns the mask width in tiles.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.cells.width()
    }

    /// Returns the mask height in tiles.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.cells.height()
    }

    /// Returns `true` if the tile at `(x, y)` is blocked.
    pub fn get(&self, x: i64, y: i64) -> GridResult<bool> {
        Ok(self.cells.get(x, y)? != 0)
    }

    /// Claims (`blocked = true`) or releases (`blocked = false`) the tile
    /// at `(x, y)`.
    ///
    /// Releasing an unclaimed tile leaves it at zero rather than wrapping.
    pub fn set(&mut self, x: i64, y: i64, blocked: bool) -> GridResult<()> {
        if blocked {
            self.cells.saturating_increment(x, y)
        } else {
            self.cells.saturating_decrement(x, y)
        }
    }

    /// Validates that a footprint rectangle lies entirely inside the mask.
    pub fn check_rect(&self, x: i64, y: i64, w: u32, h: u32) -> GridResult<()> {
        self.cells.check_rect(x, y, w, h)
    }

    /// Claims or releases every tile in the half-open rectangle
    /// `[x, x+w) x [y, y+h)`, row-major.
    ///
    /// A partially out-of-range rectangle fails without touching any tile.
    pub fn set_rect(&mut self, x: i64, y: i64, w: u32, h: u32, blocked: bool) -> GridResult<()> {
        if blocked {
            self.cells.increment_rect(x, y, w, h)
        } else {
            self.cells.decrement_rect(x, y, w, h)
        }
    }

    /// Returns the raw claim-count bytes.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        self.cells.cells()
    }

    /// Encodes the mask into its wire form.
    #[must_use]
    pub fn to_encoded(&self) -> String {
        blob::encode(self.cells.cells())
    }
}
