//! # Scene Registry
//!
//! Insertion-ordered entity arena standing in for an engine-owned scene.
//!
//! A fresh registry is seeded with the three entities every scene starts
//! with: the main camera, a directional light, and the console's own host
//! entity. Queries like "first light" walk insertion order, so results are
//! deterministic and survive serialization round trips.

use crate::{Color, EntityId, PrimitiveKind, Vec3, WorldsmithError, WorldsmithResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a scene entity is, with the per-kind state that goes with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// A built-in shape spawned by a create command
    Primitive(PrimitiveKind),
    /// The rendering camera; holds the clear color
    Camera { background: Color },
    /// A light source
    Light { color: Color, intensity: f32 },
    /// A behavior-only entity with no visual, such as the console host
    Script,
}

/// One entity in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntity {
    pub id: EntityId,
    pub name: String,
    pub kind: EntityKind,
    pub position: Vec3,
    pub scale: Vec3,
    pub color: Option<Color>,
}

impl SceneEntity {
    fn new(name: impl Into<String>, kind: EntityKind, position: Vec3) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            kind,
            position,
            scale: Vec3::new(1.0, 1.0, 1.0),
            color: None,
        }
    }

    /// Whether this entity is a light source.
    pub fn is_light(&self) -> bool {
        matches!(self.kind, EntityKind::Light { .. })
    }

    /// Whether this entity is a camera.
    pub fn is_camera(&self) -> bool {
        matches!(self.kind, EntityKind::Camera { .. })
    }
}

/// The scene: all entities, indexed by handle, enumerated in creation order.
///
/// # Examples
///
/// ```
/// use worldsmith::{PrimitiveKind, SceneRegistry, Vec3};
///
/// let mut scene = SceneRegistry::new();
/// let id = scene.spawn_primitive(PrimitiveKind::Cube, "Cube", Vec3::new(0.0, 1.0, 0.0));
/// assert!(scene.contains(id));
/// assert_eq!(scene.get(id).unwrap().position, Vec3::new(0.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneRegistry {
    /// All live entities, indexed by ID
    entities: HashMap<EntityId, SceneEntity>,
    /// Insertion order; the source of truth for enumeration and
    /// first-of-type queries
    order: Vec<EntityId>,
    /// The console's own host entity, protected from `delete all`
    host_id: EntityId,
}

impl SceneRegistry {
    /// Creates a scene seeded with the main camera, a directional light,
    /// and the console host entity.
    pub fn new() -> Self {
        let mut registry = Self {
            entities: HashMap::new(),
            order: Vec::new(),
            host_id: EntityId::default(),
        };

        registry.insert(SceneEntity::new(
            "Main Camera",
            EntityKind::Camera {
                background: Color::new(0.19, 0.3, 0.47),
            },
            Vec3::new(0.0, 1.0, -10.0),
        ));
        registry.insert(SceneEntity::new(
            "Directional Light",
            EntityKind::Light {
                color: Color::WHITE,
                intensity: 1.0,
            },
            Vec3::new(0.0, 3.0, 0.0),
        ));
        let host = registry.insert(SceneEntity::new(
            "Command Console",
            EntityKind::Script,
            Vec3::ZERO,
        ));
        registry.host_id = host;

        registry
    }

    fn insert(&mut self, entity: SceneEntity) -> EntityId {
        let id = entity.id;
        self.order.push(id);
        self.entities.insert(id, entity);
        id
    }

    /// Spawns a primitive entity and returns its handle.
    pub fn spawn_primitive(
        &mut self,
        kind: PrimitiveKind,
        name: impl Into<String>,
        position: Vec3,
    ) -> EntityId {
        let entity = SceneEntity::new(name, EntityKind::Primitive(kind), position);
        debug!("Spawned {} '{}' at {}", kind, entity.name, position);
        self.insert(entity)
    }

    /// Removes an entity from the scene. Returns false if the handle was
    /// already dead.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        if self.entities.remove(&id).is_some() {
            self.order.retain(|other| *other != id);
            true
        } else {
            false
        }
    }

    /// Whether the handle refers to a live entity.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&SceneEntity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut SceneEntity> {
        self.entities.get_mut(&id)
    }

    /// Number of live entities, defaults included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handles of all live entities in creation order.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.order.clone()
    }

    /// The console's own host entity.
    pub fn host_id(&self) -> EntityId {
        self.host_id
    }

    /// The first light in creation order, if any exists.
    pub fn find_first_light(&self) -> Option<EntityId> {
        self.find_first(SceneEntity::is_light)
    }

    /// The main camera: the first camera in creation order.
    pub fn main_camera(&self) -> Option<EntityId> {
        self.find_first(SceneEntity::is_camera)
    }

    fn find_first(&self, predicate: impl Fn(&SceneEntity) -> bool) -> Option<EntityId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.entities.get(id).is_some_and(&predicate))
    }

    /// Translates a live entity by the given offset.
    pub fn translate(&mut self, id: EntityId, offset: Vec3) -> WorldsmithResult<()> {
        let entity = self
            .get_mut(id)
            .ok_or_else(|| WorldsmithError::MissingDependency(format!("entity {id}")))?;
        entity.position += offset;
        Ok(())
    }

    /// Sets the color and intensity of a light entity.
    pub fn set_light_settings(
        &mut self,
        id: EntityId,
        color: Color,
        intensity: f32,
    ) -> WorldsmithResult<()> {
        let entity = self
            .get_mut(id)
            .ok_or_else(|| WorldsmithError::MissingDependency(format!("entity {id}")))?;
        match &mut entity.kind {
            EntityKind::Light {
                color: light_color,
                intensity: light_intensity,
            } => {
                *light_color = color;
                *light_intensity = intensity;
                Ok(())
            }
            _ => Err(WorldsmithError::InvalidCommand(format!(
                "entity '{}' is not a light",
                entity.name
            ))),
        }
    }

    /// Sets the main camera's background color.
    pub fn set_background_color(&mut self, color: Color) -> WorldsmithResult<()> {
        let camera_id = self
            .main_camera()
            .ok_or_else(|| WorldsmithError::MissingDependency("main camera".to_string()))?;
        if let Some(SceneEntity {
            kind: EntityKind::Camera { background },
            ..
        }) = self.get_mut(camera_id)
        {
            *background = color;
        }
        Ok(())
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}
