//! # Scene Module
//!
//! Math types and the entity registry that stand in for an engine scene.
//!
//! The registry is an explicit, insertion-ordered arena: "find the first
//! light" and "the main camera" are deterministic lookups rather than engine
//! reflection, and destroying an entity invalidates its handle in a way the
//! rest of the sandbox can actually check.

pub mod registry;

pub use registry::*;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point or offset in 3D scene space.
///
/// # Examples
///
/// ```
/// use worldsmith::Vec3;
///
/// let pos = Vec3::new(0.0, 1.0, 0.0);
/// let moved = pos + Vec3::new(0.0, 1.0, 0.0);
/// assert_eq!(moved, Vec3::new(0.0, 2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The origin.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Creates a new vector with the given components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// An RGB color with components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);

    /// Creates a new color from RGB components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Draws a uniformly random color from the given RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use worldsmith::Color;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let a = Color::random(&mut rng);
    /// assert!((0.0..=1.0).contains(&a.r));
    /// ```
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>())
    }
}

/// Built-in primitive shapes instantiable with one registry call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Cube,
    Sphere,
    Cylinder,
    Plane,
    Capsule,
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrimitiveKind::Cube => "Cube",
            PrimitiveKind::Sphere => "Sphere",
            PrimitiveKind::Cylinder => "Cylinder",
            PrimitiveKind::Plane => "Plane",
            PrimitiveKind::Capsule => "Capsule",
        };
        write!(f, "{}", name)
    }
}

/// Stable handle to a scene entity.
///
/// Handles stay unique for the life of the registry; using a handle after
/// its entity was destroyed is a checked error, not undefined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generates a fresh unique handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
