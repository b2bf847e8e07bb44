//! Placed map objects and their collision footprints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mask::CollisionMask;
use crate::wire::ObjectRecord;
use grid::GridResult;

/// Ambient sound attached to an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundProperties {
    pub volume: f64,
    pub max_distance: f64,
    pub src: String,
    #[serde(rename = "loop")]
    pub looping: bool,
}

/// An object placed on a map: a named, positioned rectangle of tiles plus
/// its visual and audio references.
///
/// Position and footprint are private because they must only change
/// through [`MapObject::move_to`] and friends, which keep the collision
/// mask in step. The collision flag is local state, never serialized: a
/// freshly deserialized object always starts with `has_collision` false,
/// even when its footprint happens to already be blocked in the mask.
///
/// Mutators take the owning map's [`CollisionMask`] explicitly; the
/// [`MapModel`](crate::MapModel) splits its field borrows to provide it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapObject {
    pub name: String,
    pub scale: f64,
    x: i64,
    y: i64,
    height: u32,
    width: u32,
    pub normal: String,
    pub highlighted: String,
    pub kind: i64,
    pub properties: Map<String, Value>,
    pub sound: Option<SoundProperties>,
    has_collision: bool,
}

impl MapObject {
    /// Creates a standalone object with an empty property bag and no
    /// visuals or sound. Attach it to a map with
    /// [`MapModel::add_object`](crate::MapModel::add_object).
    ///
    /// Footprints are at least 1x1 tile; the map rejects a zero `width`
    /// or `height` on attach.
    #[must_use]
    pub fn new(name: impl Into<String>, x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            scale: 1.0,
            x,
            y,
            height,
            width,
            normal: String::new(),
            highlighted: String::new(),
            kind: 0,
            properties: Map::new(),
            sound: None,
            has_collision: false,
        }
    }

    /// Builds an object from its wire record.
    ///
    /// The collision flag is not part of the wire format, so the object
    /// starts without collision regardless of the mask's contents.
    #[must_use]
    pub fn from_record(record: ObjectRecord) -> Self {
        Self {
            name: record.name,
            scale: record.scale,
            x: record.x,
            y: record.y,
            height: record.height,
            width: record.width,
            normal: record.normal,
            highlighted: record.highlighted,
            kind: record.kind,
            properties: record.properties,
            sound: record.sound,
            has_collision: false,
        }
    }

    /// Writes the object back into its wire record form.
    #[must_use]
    pub fn to_record(&self) -> ObjectRecord {
        ObjectRecord {
            name: self.name.clone(),
            scale: self.scale,
            x: self.x,
            y: self.y,
            height: self.height,
            width: self.width,
            normal: self.normal.clone(),
            highlighted: self.highlighted.clone(),
            kind: self.kind,
            properties: self.properties.clone(),
            sound: self.sound.clone(),
        }
    }

    /// Returns the x coordinate of the top-left tile.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Returns the y coordinate of the top-left tile.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Returns the footprint width in tiles.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the footprint height in tiles.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` if this object currently holds collision claims.
    #[must_use]
    pub const fn has_collision(&self) -> bool {
        self.has_collision
    }

    /// Enables or disables collision for this object's footprint.
    ///
    /// When the flag already matches, nothing happens, so repeated calls
    /// claim each tile exactly once. On a mask error the flag is left
    /// unchanged and no tile is touched.
    pub fn set_collision(&mut self, mask: &mut CollisionMask, enabled: bool) -> GridResult<()> {
        if self.has_collision == enabled {
            return Ok(());
        }
        mask.set_rect(self.x, self.y, self.width, self.height, enabled)?;
        self.has_collision = enabled;
        Ok(())
    }

    /// Moves the object to an absolute position.
    ///
    /// With collision enabled, the destination footprint is validated
    /// before anything mutates; then the current footprint is released,
    /// the position updated, and the new footprint claimed. Clearing
    /// before the position change is what keeps the released rectangle
    /// pointing at the tiles actually held. Without collision only the
    /// position changes.
    pub fn move_to(&mut self, mask: &mut CollisionMask, x: i64, y: i64) -> GridResult<()> {
        if self.has_collision {
            mask.check_rect(x, y, self.width, self.height)?;
            mask.set_rect(self.x, self.y, self.width, self.height, false)?;
            self.x = x;
            self.y = y;
            mask.set_rect(self.x, self.y, self.width, self.height, true)?;
        } else {
            self.x = x;
            self.y = y;
        }
        Ok(())
    }

    /// Moves the object by a relative offset.
    pub fn move_by(&mut self, mask: &mut CollisionMask, dx: i64, dy: i64) -> GridResult<()> {
        self.move_to(mask, self.x + dx, self.y + dy)
    }

    /// Moves the object `step` tiles left.
    pub fn move_left(&mut self, mask: &mut CollisionMask, step: i64) -> GridResult<()> {
        self.move_by(mask, -step, 0)
    }

    /// Moves the object `step` tiles right.
    pub fn move_right(&mut self, mask: &mut CollisionMask, step: i64) -> GridResult<()> {
        self.move_by(mask, step, 0)
    }

    /// Moves the object `step` tiles up.
    pub fn move_up(&mut self, mask: &mut CollisionMask, step: i64) -> GridResult<()> {
        self.move_by(mask, 0, -step)
    }

    /// Moves the object `step` tiles down.
    pub fn move_down(&mut self, mask: &mut CollisionMask, step: i64) -> GridResult<()> {
        self.move_by(mask, 0, step)
    }
}
