//! # Worldsmith Sandbox Console
//!
//! A command-driven sandbox for building and mutating a toy 3D scene.
//!
//! ## Architecture Overview
//!
//! Worldsmith takes short text commands, typed into an interactive console
//! or dropped into a polled command file, and turns them into scene
//! mutations: spawning primitive entities, recoloring the light, randomizing
//! the camera background, moving the most recently created entity, and
//! resetting the scene. The core pieces are:
//!
//! - **Scene Registry**: An explicit, insertion-ordered entity arena that
//!   stands in for an engine-owned scene graph. "First light" and "main
//!   camera" are registry lookups, not engine reflection.
//! - **Command Console**: A flat dispatcher over a closed, case-insensitive
//!   command set. Semicolon-separated batches run left to right; failures
//!   are logged and never abort the batch.
//! - **Game Systems**: Toy combat counters plus log-only inventory, quest,
//!   and save/load stubs, driven by a secondary "verb target" parser.
//! - **Sandbox**: The host loop. UI input and the file watcher share one
//!   thread; the host calls `Sandbox::tick` once per iteration.
//!
//! ## Determinism
//!
//! All randomness (background colors, spawn positions, damage rolls) flows
//! through a single seeded RNG owned by the `Sandbox`, so any session can be
//! replayed exactly by reusing its seed.

pub mod console;
pub mod sandbox;
pub mod scene;
pub mod systems;

// Core module re-exports
pub use console::*;
pub use sandbox::*;
pub use scene::*;
pub use systems::*;

/// Core error type for the Worldsmith sandbox.
#[derive(thiserror::Error, Debug)]
pub enum WorldsmithError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Command label is not in the dispatch table
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A collaborator the action needs is absent (light, camera, entity)
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// Command is recognizable but its argument is unusable
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type used throughout the Worldsmith codebase.
pub type WorldsmithResult<T> = Result<T, WorldsmithError>;

/// Version information for the sandbox.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sandbox configuration constants.
pub mod config {
    use crate::scene::Vec3;

    /// Maximum player health; heals clamp here
    pub const MAX_PLAYER_HEALTH: i32 = 100;

    /// Player health at sandbox start
    pub const STARTING_PLAYER_HEALTH: i32 = 100;

    /// Enemy health at sandbox start
    pub const STARTING_ENEMY_HEALTH: i32 = 50;

    /// Offset applied by the `move object` command
    pub const MOVE_OBJECT_STEP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Intensity set by the `change light` command
    pub const LIGHT_INTENSITY: f32 = 3.0;

    /// Default RNG seed when none is supplied
    pub const DEFAULT_SEED: u64 = 12345;
}
