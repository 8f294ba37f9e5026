//! # Console Module
//!
//! The command console: a flat dispatcher from text labels to scene actions.
//!
//! Input arrives either as a submitted line (the UI path) or through the
//! polled command file in [`watcher`]. A line may carry several commands
//! separated by `;`; they run left to right, and a failing command is
//! logged and skipped without aborting the rest of the batch. The console
//! keeps exactly two pieces of state: the pending input line and a handle
//! to the most recently created entity, which only `move object` reads.

pub mod commands;
pub mod watcher;

pub use commands::*;
pub use watcher::*;

use crate::{
    config, Color, EntityId, PrimitiveKind, SceneRegistry, Vec3, WorldsmithError, WorldsmithResult,
};
use log::{error, info, warn};
use rand::Rng;

const CUBE_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const SPHERE_SPAWN: Vec3 = Vec3::new(2.0, 1.0, 0.0);
const CYLINDER_SPAWN: Vec3 = Vec3::new(-2.0, 1.0, 0.0);
const PLANE_SPAWN: Vec3 = Vec3::ZERO;

/// Dispatches console commands against a scene.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use worldsmith::{CommandConsole, SceneRegistry};
///
/// let mut scene = SceneRegistry::new();
/// let mut console = CommandConsole::new();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// console.submit("create cube; move object");
/// console.process_input(&mut scene, &mut rng);
/// assert!(console.last_created().is_some());
/// ```
#[derive(Debug, Default)]
pub struct CommandConsole {
    /// Pending input line, cleared after processing
    input: String,
    /// Handle to the most recently created entity
    last_created: Option<EntityId>,
}

impl CommandConsole {
    /// Creates a console with an empty input buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a line of input for the next [`process_input`] call.
    ///
    /// [`process_input`]: CommandConsole::process_input
    pub fn submit(&mut self, line: &str) {
        self.input = line.to_string();
    }

    /// The pending input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Handle to the most recently created entity, if any.
    pub fn last_created(&self) -> Option<EntityId> {
        self.last_created
    }

    /// Processes the pending input line and clears it.
    ///
    /// The line is split on `;`; each fragment is trimmed and executed in
    /// order. Failures are logged and skipped. Returns the number of
    /// commands that executed successfully. Re-invoking without a fresh
    /// [`submit`] is a no-op.
    ///
    /// [`submit`]: CommandConsole::submit
    pub fn process_input(&mut self, scene: &mut SceneRegistry, rng: &mut impl Rng) -> usize {
        let line = std::mem::take(&mut self.input);
        if line.trim().is_empty() {
            warn!("No command entered.");
            return 0;
        }

        let mut executed = 0;
        for fragment in line.split(';') {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            info!("Processing command: {}", fragment);
            if self.execute(fragment, scene, rng).is_ok() {
                executed += 1;
            }
        }
        executed
    }

    /// Executes a single command. Errors are logged here so both the UI
    /// batch and the file watcher report failures the same way.
    pub fn execute(
        &mut self,
        text: &str,
        scene: &mut SceneRegistry,
        rng: &mut impl Rng,
    ) -> WorldsmithResult<()> {
        let result = match Command::parse(text) {
            Some(command) => self.run(command, scene, rng),
            None => Err(WorldsmithError::UnknownCommand(text.trim().to_string())),
        };
        if let Err(error) = &result {
            error!("{}", error);
        }
        result
    }

    fn run(
        &mut self,
        command: Command,
        scene: &mut SceneRegistry,
        rng: &mut impl Rng,
    ) -> WorldsmithResult<()> {
        match command {
            Command::CreateCube => self.create_primitive(scene, PrimitiveKind::Cube, CUBE_SPAWN),
            Command::CreateSphere => {
                self.create_primitive(scene, PrimitiveKind::Sphere, SPHERE_SPAWN)
            }
            Command::CreateCylinder => {
                self.create_primitive(scene, PrimitiveKind::Cylinder, CYLINDER_SPAWN)
            }
            Command::CreatePlane => self.create_primitive(scene, PrimitiveKind::Plane, PLANE_SPAWN),
            Command::ChangeLight => self.change_light(scene),
            Command::ChangeBackground => self.change_background(scene, rng),
            Command::MoveObject => self.move_last_created(scene),
            Command::DeleteAll => self.delete_all(scene),
            Command::QuickStart => self.quick_start(scene, rng),
        }
    }

    fn create_primitive(
        &mut self,
        scene: &mut SceneRegistry,
        kind: PrimitiveKind,
        position: Vec3,
    ) -> WorldsmithResult<()> {
        let id = scene.spawn_primitive(kind, kind.to_string(), position);
        self.last_created = Some(id);
        info!("{} created at position {}.", kind, position);
        Ok(())
    }

    fn change_light(&mut self, scene: &mut SceneRegistry) -> WorldsmithResult<()> {
        let light = scene.find_first_light().ok_or_else(|| {
            WorldsmithError::MissingDependency("no light in the scene".to_string())
        })?;
        scene.set_light_settings(light, Color::BLUE, config::LIGHT_INTENSITY)?;
        info!(
            "Light color changed to blue and intensity set to {}.",
            config::LIGHT_INTENSITY
        );
        Ok(())
    }

    fn change_background(
        &mut self,
        scene: &mut SceneRegistry,
        rng: &mut impl Rng,
    ) -> WorldsmithResult<()> {
        scene.set_background_color(Color::random(rng))?;
        info!("Background color changed to a random color.");
        Ok(())
    }

    fn move_last_created(&mut self, scene: &mut SceneRegistry) -> WorldsmithResult<()> {
        let id = self
            .last_created
            .filter(|id| scene.contains(*id))
            .ok_or_else(|| WorldsmithError::MissingDependency("no object to move".to_string()))?;
        scene.translate(id, config::MOVE_OBJECT_STEP)?;
        info!("Moved last created object up by 1 unit.");
        Ok(())
    }

    fn delete_all(&mut self, scene: &mut SceneRegistry) -> WorldsmithResult<()> {
        let protected = [
            scene.main_camera(),
            scene.find_first_light(),
            Some(scene.host_id()),
        ];
        for id in scene.entity_ids() {
            if !protected.contains(&Some(id)) {
                scene.destroy(id);
            }
        }
        info!("Deleted all objects except default ones.");
        Ok(())
    }

    fn quick_start(
        &mut self,
        scene: &mut SceneRegistry,
        _rng: &mut impl Rng,
    ) -> WorldsmithResult<()> {
        info!("Quick Start initiated: Setting up the basic world...");
        self.create_primitive(scene, PrimitiveKind::Plane, PLANE_SPAWN)?;
        self.create_primitive(scene, PrimitiveKind::Cube, CUBE_SPAWN)?;
        self.create_primitive(scene, PrimitiveKind::Sphere, SPHERE_SPAWN)?;
        info!("Quick Start completed.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityKind;
    use rand::{rngs::StdRng, SeedableRng};

    fn fixture() -> (SceneRegistry, CommandConsole, StdRng) {
        (
            SceneRegistry::new(),
            CommandConsole::new(),
            StdRng::seed_from_u64(config::DEFAULT_SEED),
        )
    }

    #[test]
    fn batch_runs_left_to_right() {
        let (mut scene, mut console, mut rng) = fixture();
        console.submit("create plane; create cube; create sphere");
        assert_eq!(console.process_input(&mut scene, &mut rng), 3);

        let created: Vec<_> = scene
            .entity_ids()
            .into_iter()
            .skip(3) // defaults come first
            .map(|id| scene.get(id).unwrap().kind.clone())
            .collect();
        assert_eq!(
            created,
            vec![
                EntityKind::Primitive(PrimitiveKind::Plane),
                EntityKind::Primitive(PrimitiveKind::Cube),
                EntityKind::Primitive(PrimitiveKind::Sphere),
            ]
        );
    }

    #[test]
    fn empty_input_runs_nothing() {
        let (mut scene, mut console, mut rng) = fixture();
        console.submit("   \t  ");
        assert_eq!(console.process_input(&mut scene, &mut rng), 0);
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn unknown_command_does_not_abort_batch() {
        let (mut scene, mut console, mut rng) = fixture();
        console.submit("create cube; fly to the moon; create sphere");
        assert_eq!(console.process_input(&mut scene, &mut rng), 2);
        assert_eq!(scene.len(), 5);
    }

    #[test]
    fn input_is_cleared_after_processing() {
        let (mut scene, mut console, mut rng) = fixture();
        console.submit("create cube");
        console.process_input(&mut scene, &mut rng);
        assert_eq!(console.input(), "");
        assert_eq!(console.process_input(&mut scene, &mut rng), 0);
        assert_eq!(scene.len(), 4);
    }

    #[test]
    fn move_before_create_is_an_error() {
        let (mut scene, mut console, mut rng) = fixture();
        assert!(matches!(
            console.execute("move object", &mut scene, &mut rng),
            Err(WorldsmithError::MissingDependency(_))
        ));
    }

    #[test]
    fn move_after_create_raises_by_one_unit() {
        let (mut scene, mut console, mut rng) = fixture();
        console.execute("create cube", &mut scene, &mut rng).unwrap();
        console.execute("move object", &mut scene, &mut rng).unwrap();

        let cube = console.last_created().unwrap();
        assert_eq!(scene.get(cube).unwrap().position, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn move_after_external_destroy_is_an_error() {
        let (mut scene, mut console, mut rng) = fixture();
        console.execute("create cube", &mut scene, &mut rng).unwrap();
        scene.destroy(console.last_created().unwrap());
        assert!(console.execute("move object", &mut scene, &mut rng).is_err());
    }

    #[test]
    fn every_create_updates_last_created() {
        let (mut scene, mut console, mut rng) = fixture();
        console.execute("create cube", &mut scene, &mut rng).unwrap();
        let cube = console.last_created().unwrap();
        console
            .execute("create plane", &mut scene, &mut rng)
            .unwrap();
        assert_ne!(console.last_created(), Some(cube));
    }

    #[test]
    fn delete_all_spares_defaults() {
        let (mut scene, mut console, mut rng) = fixture();
        let camera = scene.main_camera().unwrap();
        let light = scene.find_first_light().unwrap();
        let host = scene.host_id();

        console.submit("quick start; create cylinder");
        console.process_input(&mut scene, &mut rng);
        assert_eq!(scene.len(), 7);

        console.execute("delete all", &mut scene, &mut rng).unwrap();
        assert_eq!(scene.len(), 3);
        assert!(scene.contains(camera));
        assert!(scene.contains(light));
        assert!(scene.contains(host));
    }

    #[test]
    fn change_light_without_a_light_is_an_error() {
        let (mut scene, mut console, mut rng) = fixture();
        let light = scene.find_first_light().unwrap();
        scene.destroy(light);
        assert!(matches!(
            console.execute("change light", &mut scene, &mut rng),
            Err(WorldsmithError::MissingDependency(_))
        ));
    }

    #[test]
    fn change_background_is_seed_deterministic() {
        let (mut scene_a, mut console_a, mut rng_a) = fixture();
        let (mut scene_b, mut console_b, mut rng_b) = fixture();
        console_a
            .execute("change background", &mut scene_a, &mut rng_a)
            .unwrap();
        console_b
            .execute("change background", &mut scene_b, &mut rng_b)
            .unwrap();

        let background = |scene: &SceneRegistry| match &scene
            .get(scene.main_camera().unwrap())
            .unwrap()
            .kind
        {
            EntityKind::Camera { background } => *background,
            _ => panic!("main camera is not a camera"),
        };
        assert_eq!(background(&scene_a), background(&scene_b));
    }
}
