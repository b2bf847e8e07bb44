//! The aggregate map model.

use serde_json::{Map, Value};

use crate::error::{ModelError, ModelResult};
use crate::mask::CollisionMask;
use crate::object::MapObject;
use crate::wire::MapRecord;

/// Map-level fields the model carries but never interprets.
///
/// Everything here is opaque pass-through: it is read from the wire
/// record, held unchanged, and written back on serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapMeta {
    pub background_image_path: Value,
    pub assets: Value,
    pub announcer: Value,
    pub use_drawn_bg: Value,
    pub spaces: Value,
    pub portals: Value,
    pub spawns: Value,
    pub floors: Map<String, Value>,
    pub walls: Map<String, Value>,
}

/// A map: dimensions, collision mask, placed objects and opaque metadata.
///
/// The model owns its [`CollisionMask`] and its objects; object mutations
/// that touch the mask go through the model, which hands both halves of
/// the borrow to the object. Object order is insertion order and is
/// preserved on serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct MapModel {
    id: String,
    collision: CollisionMask,
    objects: Vec<MapObject>,
    pub meta: MapMeta,
}

impl MapModel {
    /// Creates an empty map with an all-clear collision mask.
    #[must_use]
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            collision: CollisionMask::new(width, height),
            objects: Vec::new(),
            meta: MapMeta::default(),
        }
    }

    /// Builds a model from a wire record, decoding the collision field.
    ///
    /// Fails when the collision string is not valid Base64 or its decoded
    /// length does not match `width * height`. Objects come back with
    /// their collision flags off; the wire format does not carry them.
    pub fn from_record(record: MapRecord) -> ModelResult<Self> {
        let [width, height] = record.dimensions;
        let collision = CollisionMask::from_encoded(&record.collisions, width, height)?;
        let objects: Vec<MapObject> = record
            .objects
            .into_iter()
            .map(MapObject::from_record)
            .collect();
        for obj in &objects {
            check_footprint(obj)?;
        }
        Ok(Self {
            id: record.id,
            collision,
            objects,
            meta: MapMeta {
                background_image_path: record.background_image_path,
                assets: record.assets,
                announcer: record.announcer,
                use_drawn_bg: record.use_drawn_bg,
                spaces: record.spaces,
                portals: record.portals,
                spawns: record.spawns,
                floors: record.floors,
                walls: record.walls,
            },
        })
    }

    /// Serializes the model back into a wire record, re-encoding the
    /// collision mask.
    #[must_use]
    pub fn to_record(&self) -> MapRecord {
        MapRecord {
            id: self.id.clone(),
            dimensions: [self.collision.width(), self.collision.height()],
            collisions: self.collision.to_encoded(),
            objects: self.objects.iter().map(MapObject::to_record).collect(),
            floors: self.meta.floors.clone(),
            walls: self.meta.walls.clone(),
            background_image_path: self.meta.background_image_path.clone(),
            assets: self.meta.assets.clone(),
            announcer: self.meta.announcer.clone(),
            use_drawn_bg: self.meta.use_drawn_bg.clone(),
            spaces: self.meta.spaces.clone(),
            portals: self.meta.portals.clone(),
            spawns: self.meta.spawns.clone(),
        }
    }

    /// Parses a model from wire JSON.
    pub fn from_json(input: &str) -> ModelResult<Self> {
        let record: MapRecord = serde_json::from_str(input)?;
        Self::from_record(record)
    }

    /// Writes the model as wire JSON.
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Returns the map identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `(width, height)` in tiles.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.collision.width(), self.collision.height())
    }

    /// Returns the collision mask.
    #[must_use]
    pub const fn collision(&self) -> &CollisionMask {
        &self.collision
    }

    /// Returns the collision mask mutably, for direct tile edits that are
    /// not tied to any object (walls, map borders).
    pub fn collision_mut(&mut self) -> &mut CollisionMask {
        &mut self.collision
    }

    /// Returns the placed objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    /// Returns the object at `index`, if any.
    #[must_use]
    pub fn object(&self, index: usize) -> Option<&MapObject> {
        self.objects.get(index)
    }

    /// Returns the index of the first object with the given name.
    ///
    /// Names are not unique; this is first-match-in-insertion-order.
    /// Callers that need strict identity should hold indices instead.
    #[must_use]
    pub fn find_object(&self, name: &str) -> Option<usize> {
        self.objects.iter().position(|obj| obj.name == name)
    }

    /// Returns the object at `index` together with the collision mask,
    /// ready for [`MapObject::move_to`] and [`MapObject::set_collision`].
    pub fn object_and_mask_mut(
        &mut self,
        index: usize,
    ) -> Option<(&mut MapObject, &mut CollisionMask)> {
        let obj = self.objects.get_mut(index)?;
        Some((obj, &mut self.collision))
    }

    /// Appends an object to the map.
    ///
    /// An object carrying an active collision flag holds claims in some
    /// other map's mask and is rejected with [`ModelError::ForeignObject`];
    /// a zero-sized footprint is rejected with
    /// [`ModelError::EmptyFootprint`]. Collision is never enabled
    /// automatically; call [`Self::set_object_collision`] afterwards if
    /// wanted.
    pub fn add_object(&mut self, obj: MapObject) -> ModelResult<()> {
        check_footprint(&obj)?;
        if obj.has_collision() {
            return Err(ModelError::ForeignObject { name: obj.name });
        }
        self.objects.push(obj);
        Ok(())
    }

    /// Removes the first object with the given name, releasing its
    /// collision footprint first when it has one.
    ///
    /// A name with no match is a no-op and returns `Ok(None)`; permissive
    /// by design, matching the service's lookup semantics.
    pub fn remove_object(&mut self, name: &str) -> ModelResult<Option<MapObject>> {
        match self.find_object(name) {
            Some(index) => self.remove_object_at(index),
            None => Ok(None),
        }
    }

    /// Removes the object at `index`, releasing its collision footprint
    /// first when it has one. An index past the end returns `Ok(None)`.
    pub fn remove_object_at(&mut self, index: usize) -> ModelResult<Option<MapObject>> {
        if index >= self.objects.len() {
            return Ok(None);
        }
        self.objects[index].set_collision(&mut self.collision, false)?;
        Ok(Some(self.objects.remove(index)))
    }

    /// Enables or disables collision for the object at `index`.
    pub fn set_object_collision(&mut self, index: usize, enabled: bool) -> ModelResult<()> {
        let (obj, mask) = self
            .object_and_mask_mut(index)
            .ok_or(ModelError::NoSuchObject { index })?;
        obj.set_collision(mask, enabled)?;
        Ok(())
    }

    /// Moves the object at `index` to an absolute position.
    pub fn move_object(&mut self, index: usize, x: i64, y: i64) -> ModelResult<()> {
        let (obj, mask) = self
            .object_and_mask_mut(index)
            .ok_or(ModelError::NoSuchObject { index })?;
        obj.move_to(mask, x, y)?;
        Ok(())
    }

    /// Moves the object at `index` by a relative offset.
    pub fn move_object_by(&mut self, index: usize, dx: i64, dy: i64) -> ModelResult<()> {
        let (obj, mask) = self
            .object_and_mask_mut(index)
            .ok_or(ModelError::NoSuchObject { index })?;
        obj.move_by(mask, dx, dy)?;
        Ok(())
    }
}

// Footprints are at least one tile in each direction; a zero extent would
// make collision toggles silent no-ops that still flip the object's flag.
fn check_footprint(obj: &MapObject) -> ModelResult<()> {
    if obj.width() == 0 || obj.height() == 0 {
        return Err(ModelError::EmptyFootprint {
            name: obj.name.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid::blob;

    fn empty_map(width: u32, height: u32) -> MapModel {
        MapModel::new("test-map", width, height)
    }

    #[test]
    fn new_map_has_clear_mask_and_no_objects() {
        let map = empty_map(4, 4);
        assert_eq!(map.dimensions(), (4, 4));
        assert!(map.objects().is_empty());
        assert!(map.collision().cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn add_object_does_not_claim_tiles() {
        let mut map = empty_map(8, 8);
        map.add_object(MapObject::new("desk", 1, 1, 2, 2)).unwrap();
        assert_eq!(map.objects().len(), 1);
        assert!(map.collision().cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn add_object_rejects_zero_sized_footprint() {
        let mut map = empty_map(8, 8);
        let err = map.add_object(MapObject::new("sliver", 1, 1, 0, 2)).unwrap_err();
        assert_eq!(
            err,
            ModelError::EmptyFootprint {
                name: "sliver".to_string(),
            }
        );
        let err = map.add_object(MapObject::new("line", 1, 1, 2, 0)).unwrap_err();
        assert!(matches!(err, ModelError::EmptyFootprint { .. }));
        assert!(map.objects().is_empty());
    }

    #[test]
    fn add_object_rejects_foreign_collision_holder() {
        let mut first = empty_map(8, 8);
        first.add_object(MapObject::new("desk", 1, 1, 2, 2)).unwrap();
        first.set_object_collision(0, true).unwrap();
        let moved = first.remove_object_at(0); // releases claims, fine
        assert!(moved.unwrap().is_some());

        // An object whose flag is still set cannot be attached elsewhere.
        let mut donor = empty_map(8, 8);
        donor.add_object(MapObject::new("desk", 1, 1, 2, 2)).unwrap();
        donor.set_object_collision(0, true).unwrap();
        let (obj, _) = donor.object_and_mask_mut(0).unwrap();
        let stolen = obj.clone();

        let mut second = empty_map(8, 8);
        let err = second.add_object(stolen).unwrap_err();
        assert!(matches!(err, ModelError::ForeignObject { .. }));
    }

    #[test]
    fn set_object_collision_claims_and_releases() {
        let mut map = empty_map(8, 8);
        map.add_object(MapObject::new("desk", 2, 2, 3, 2)).unwrap();
        map.set_object_collision(0, true).unwrap();
        assert!(map.collision().get(2, 2).unwrap());
        assert!(map.collision().get(4, 3).unwrap());
        map.set_object_collision(0, false).unwrap();
        assert!(map.collision().cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn set_object_collision_bad_index_fails() {
        let mut map = empty_map(4, 4);
        let err = map.set_object_collision(3, true).unwrap_err();
        assert_eq!(err, ModelError::NoSuchObject { index: 3 });
    }

    #[test]
    fn remove_object_clears_footprint() {
        let mut map = empty_map(8, 8);
        map.add_object(MapObject::new("desk", 1, 1, 2, 2)).unwrap();
        map.set_object_collision(0, true).unwrap();

        let removed = map.remove_object("desk").unwrap().unwrap();
        assert_eq!(removed.name, "desk");
        assert!(map.objects().is_empty());
        assert!(map.collision().cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn remove_object_missing_name_is_a_no_op() {
        let mut map = empty_map(4, 4);
        map.add_object(MapObject::new("desk", 0, 0, 1, 1)).unwrap();
        let removed = map.remove_object("sofa").unwrap();
        assert!(removed.is_none());
        assert_eq!(map.objects().len(), 1);
    }

    #[test]
    fn remove_object_takes_first_match_in_insertion_order() {
        let mut map = empty_map(8, 8);
        map.add_object(MapObject::new("chair", 0, 0, 1, 1)).unwrap();
        map.add_object(MapObject::new("chair", 5, 5, 1, 1)).unwrap();
        let removed = map.remove_object("chair").unwrap().unwrap();
        assert_eq!(removed.x(), 0, "first inserted goes first");
        assert_eq!(map.objects()[0].x(), 5);
    }

    #[test]
    fn overlapping_objects_keep_shared_tiles_blocked() {
        let mut map = empty_map(8, 8);
        map.add_object(MapObject::new("rug", 1, 1, 3, 3)).unwrap();
        map.add_object(MapObject::new("table", 2, 2, 3, 3)).unwrap();
        map.set_object_collision(0, true).unwrap();
        map.set_object_collision(1, true).unwrap();

        map.remove_object("rug").unwrap();
        assert!(
            map.collision().get(2, 2).unwrap(),
            "tile shared with the table must stay blocked"
        );
        map.remove_object("table").unwrap();
        assert!(!map.collision().get(2, 2).unwrap());
    }

    #[test]
    fn move_object_through_model() {
        let mut map = empty_map(16, 8);
        map.add_object(MapObject::new("couch", 5, 5, 3, 2)).unwrap();
        map.set_object_collision(0, true).unwrap();
        map.move_object(0, 10, 5).unwrap();

        for x in 5..8 {
            assert!(!map.collision().get(x, 5).unwrap());
        }
        for x in 10..13 {
            assert!(map.collision().get(x, 5).unwrap());
            assert!(map.collision().get(x, 6).unwrap());
        }
    }

    #[test]
    fn from_record_decodes_collision_field() {
        let cells = vec![0, 1, 0, 0, 1, 0];
        let record = MapRecord {
            id: "m".to_string(),
            dimensions: [3, 2],
            collisions: blob::encode(&cells),
            objects: Vec::new(),
            floors: Map::new(),
            walls: Map::new(),
            background_image_path: Value::Null,
            assets: Value::Null,
            announcer: Value::Null,
            use_drawn_bg: Value::Null,
            spaces: Value::Null,
            portals: Value::Null,
            spawns: Value::Null,
        };
        let map = MapModel::from_record(record).unwrap();
        assert!(map.collision().get(1, 0).unwrap());
        assert!(map.collision().get(1, 1).unwrap());
        assert!(!map.collision().get(0, 0).unwrap());
    }

    #[test]
    fn from_record_rejects_zero_sized_object() {
        let record = MapRecord {
            id: "m".to_string(),
            dimensions: [2, 2],
            collisions: blob::encode(&[0, 0, 0, 0]),
            objects: vec![crate::ObjectRecord {
                name: "sliver".to_string(),
                scale: 1.0,
                x: 0,
                y: 0,
                height: 0,
                width: 1,
                normal: String::new(),
                highlighted: String::new(),
                kind: 0,
                properties: Map::new(),
                sound: None,
            }],
            floors: Map::new(),
            walls: Map::new(),
            background_image_path: Value::Null,
            assets: Value::Null,
            announcer: Value::Null,
            use_drawn_bg: Value::Null,
            spaces: Value::Null,
            portals: Value::Null,
            spawns: Value::Null,
        };
        let err = MapModel::from_record(record).unwrap_err();
        assert_eq!(
            err,
            ModelError::EmptyFootprint {
                name: "sliver".to_string(),
            }
        );
    }

    #[test]
    fn from_record_rejects_length_mismatch() {
        let record = MapRecord {
            id: "m".to_string(),
            dimensions: [3, 2],
            collisions: blob::encode(&[0, 1]),
            objects: Vec::new(),
            floors: Map::new(),
            walls: Map::new(),
            background_image_path: Value::Null,
            assets: Value::Null,
            announcer: Value::Null,
            use_drawn_bg: Value::Null,
            spaces: Value::Null,
            portals: Value::Null,
            spawns: Value::Null,
        };
        let err = MapModel::from_record(record).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Grid(grid::GridError::DimensionMismatch { .. })
        ));
    }
}
