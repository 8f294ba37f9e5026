//! # Game Systems Module
//!
//! Toy game systems driven by a secondary "verb target" command parser.
//!
//! Combat is the only system with real state (two clamped health counters
//! in [`combat`]). Inventory, quests, and save/load are deliberately
//! log-only stubs: they announce what a full implementation would do and
//! mutate nothing.

pub mod combat;

pub use combat::*;

use crate::{
    Color, PrimitiveKind, SceneRegistry, Vec3, WorldsmithError, WorldsmithResult,
};
use log::{error, info};
use rand::Rng;

/// The game systems facade: combat state plus the action dispatcher.
#[derive(Debug, Clone, Default)]
pub struct GameSystems {
    pub combat: CombatState,
}

impl GameSystems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a "verb target" action line, e.g. `spawn npc` or `damage 25`.
    ///
    /// The line is split on whitespace; the first token picks the action
    /// and the second, when present, is its target. Failures are logged and
    /// returned; nothing aborts the session.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use worldsmith::{GameSystems, SceneRegistry};
    ///
    /// let mut systems = GameSystems::new();
    /// let mut scene = SceneRegistry::new();
    /// let mut rng = StdRng::seed_from_u64(2);
    ///
    /// systems.run_action("damage 25", &mut scene, &mut rng).unwrap();
    /// assert_eq!(systems.combat.player_health(), 75);
    /// ```
    pub fn run_action(
        &mut self,
        input: &str,
        scene: &mut SceneRegistry,
        rng: &mut impl Rng,
    ) -> WorldsmithResult<()> {
        let mut parts = input.split_whitespace();
        let verb = parts.next().unwrap_or("");
        let target = parts.next();

        let result = self.execute_action(verb, target, scene, rng);
        if let Err(error) = &result {
            error!("{}", error);
        }
        result
    }

    fn execute_action(
        &mut self,
        verb: &str,
        target: Option<&str>,
        scene: &mut SceneRegistry,
        rng: &mut impl Rng,
    ) -> WorldsmithResult<()> {
        match verb.to_lowercase().as_str() {
            "attack" => {
                self.combat.attack_enemy(rng);
                Ok(())
            }
            "heal" => {
                self.combat.heal_player_random(rng);
                Ok(())
            }
            "damage" => {
                let damage = target
                    .and_then(|value| value.parse::<i32>().ok())
                    .ok_or_else(|| {
                        WorldsmithError::InvalidCommand("invalid damage value".to_string())
                    })?;
                self.combat.take_damage(damage);
                Ok(())
            }
            "loot" => {
                self.add_item(target.unwrap_or("Unknown Item"));
                Ok(())
            }
            "spawn" => match target.map(str::to_lowercase).as_deref() {
                Some("npc") => {
                    self.spawn_npc(scene, rng);
                    Ok(())
                }
                Some("enemy") => {
                    self.spawn_enemy(scene, rng);
                    Ok(())
                }
                other => Err(WorldsmithError::InvalidCommand(format!(
                    "unknown spawn target: {}",
                    other.unwrap_or("<none>")
                ))),
            },
            "" => Err(WorldsmithError::InvalidCommand(
                "invalid command format".to_string(),
            )),
            unknown => Err(WorldsmithError::UnknownCommand(format!(
                "action type: {}",
                unknown
            ))),
        }
    }

    /// Spawns a blue NPC capsule at a random position on the ground.
    pub fn spawn_npc(&mut self, scene: &mut SceneRegistry, rng: &mut impl Rng) {
        let position = Vec3::new(
            rng.gen_range(-10..10) as f32,
            0.0,
            rng.gen_range(-10..10) as f32,
        );
        let id = scene.spawn_primitive(PrimitiveKind::Capsule, "NPC", position);
        if let Some(npc) = scene.get_mut(id) {
            npc.color = Some(Color::BLUE);
        }
        info!("NPC created at position {}.", position);
    }

    /// Spawns a red enemy cylinder at a random position on the ground.
    pub fn spawn_enemy(&mut self, scene: &mut SceneRegistry, rng: &mut impl Rng) {
        let position = Vec3::new(
            rng.gen_range(-20..20) as f32,
            0.0,
            rng.gen_range(-20..20) as f32,
        );
        let id = scene.spawn_primitive(PrimitiveKind::Cylinder, "Enemy", position);
        if let Some(enemy) = scene.get_mut(id) {
            enemy.color = Some(Color::RED);
            enemy.scale = Vec3::new(1.0, 2.0, 1.0);
        }
        info!("Enemy spawned at position {}.", position);
    }

    // The features below are stubs on purpose: they log what a real system
    // would do and keep no state.

    pub fn add_item(&mut self, item_name: &str) {
        info!("Item '{}' added to inventory.", item_name);
    }

    pub fn remove_item(&mut self, item_name: &str) {
        info!("Item '{}' removed from inventory.", item_name);
    }

    pub fn start_quest(&mut self, quest_name: &str) {
        info!("Quest '{}' started.", quest_name);
    }

    pub fn complete_quest(&mut self, quest_name: &str) {
        info!("Quest '{}' completed.", quest_name);
    }

    pub fn save_game(&self) {
        info!("Game saved. Extend with actual save logic.");
    }

    pub fn load_game(&mut self) {
        info!("Game loaded. Extend with actual load logic.");
    }

    /// Dumps the current game state to the log.
    pub fn log_state(&self) {
        info!("Logging current game state...");
        info!(
            "Player Health: {}/{}",
            self.combat.player_health(),
            crate::config::MAX_PLAYER_HEALTH
        );
        info!("Enemy Health: {}", self.combat.enemy_health());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn fixture() -> (GameSystems, SceneRegistry, StdRng) {
        (
            GameSystems::new(),
            SceneRegistry::new(),
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn damage_action_parses_its_argument() {
        let (mut systems, mut scene, mut rng) = fixture();
        systems.run_action("damage 40", &mut scene, &mut rng).unwrap();
        assert_eq!(systems.combat.player_health(), 60);

        assert!(matches!(
            systems.run_action("damage lots", &mut scene, &mut rng),
            Err(WorldsmithError::InvalidCommand(_))
        ));
        assert_eq!(systems.combat.player_health(), 60);
    }

    #[test]
    fn spawn_actions_add_scene_entities() {
        let (mut systems, mut scene, mut rng) = fixture();
        systems.run_action("spawn npc", &mut scene, &mut rng).unwrap();
        systems
            .run_action("spawn enemy", &mut scene, &mut rng)
            .unwrap();
        assert_eq!(scene.len(), 5);

        assert!(systems.run_action("spawn dragon", &mut scene, &mut rng).is_err());
        assert_eq!(scene.len(), 5);
    }

    #[test]
    fn verbs_are_case_insensitive() {
        let (mut systems, mut scene, mut rng) = fixture();
        systems.run_action("DAMAGE 10", &mut scene, &mut rng).unwrap();
        assert_eq!(systems.combat.player_health(), 90);
    }

    #[test]
    fn unknown_verbs_are_rejected() {
        let (mut systems, mut scene, mut rng) = fixture();
        assert!(matches!(
            systems.run_action("dance", &mut scene, &mut rng),
            Err(WorldsmithError::UnknownCommand(_))
        ));
        assert!(systems.run_action("   ", &mut scene, &mut rng).is_err());
    }

    #[test]
    fn attack_and_heal_use_the_injected_rng() {
        let (mut systems_a, mut scene_a, mut rng_a) = fixture();
        let (mut systems_b, mut scene_b, mut rng_b) = fixture();

        systems_a.run_action("attack", &mut scene_a, &mut rng_a).unwrap();
        systems_b.run_action("attack", &mut scene_b, &mut rng_b).unwrap();
        assert_eq!(
            systems_a.combat.enemy_health(),
            systems_b.combat.enemy_health()
        );
    }
}
