//! # Combat State
//!
//! Two health counters and the clamping rules around them.
//!
//! Player health lives in `[0, MAX_PLAYER_HEALTH]`; enemy health never goes
//! below zero. There is one player and one enemy, no respawns, and nothing
//! persists across sessions.

use crate::config;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Damage rolls (attack and heal amounts) are drawn from this range.
const DAMAGE_RANGE: std::ops::Range<i32> = 10..20;

/// Player and enemy health counters.
///
/// # Examples
///
/// ```
/// use worldsmith::CombatState;
///
/// let mut combat = CombatState::new();
/// combat.take_damage(150);
/// assert_eq!(combat.player_health(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    player_health: i32,
    enemy_health: i32,
}

impl CombatState {
    /// Creates combat state at the starting health values.
    pub fn new() -> Self {
        Self {
            player_health: config::STARTING_PLAYER_HEALTH,
            enemy_health: config::STARTING_ENEMY_HEALTH,
        }
    }

    pub fn player_health(&self) -> i32 {
        self.player_health
    }

    pub fn enemy_health(&self) -> i32 {
        self.enemy_health
    }

    pub fn is_player_alive(&self) -> bool {
        self.player_health > 0
    }

    pub fn is_enemy_alive(&self) -> bool {
        self.enemy_health > 0
    }

    /// Rolls damage against the enemy. Returns the damage dealt, or `None`
    /// when there is no enemy left to attack.
    pub fn attack_enemy(&mut self, rng: &mut impl Rng) -> Option<i32> {
        if !self.is_enemy_alive() {
            info!("No enemy to attack or enemy already defeated.");
            return None;
        }

        let damage = rng.gen_range(DAMAGE_RANGE);
        self.enemy_health = (self.enemy_health - damage).max(0);
        info!(
            "Enemy attacked! Dealt {} damage. Remaining health: {}",
            damage, self.enemy_health
        );
        if !self.is_enemy_alive() {
            info!("Enemy defeated!");
        }
        Some(damage)
    }

    /// Applies damage to the player, clamped so health never goes negative.
    pub fn take_damage(&mut self, damage: i32) {
        self.player_health = (self.player_health - damage).clamp(0, config::MAX_PLAYER_HEALTH);
        info!(
            "Player took {} damage. Remaining health: {}",
            damage, self.player_health
        );
        if !self.is_player_alive() {
            info!("Player has died!");
        }
    }

    /// Heals the player, clamped to the health cap.
    pub fn heal_player(&mut self, amount: i32) {
        self.player_health = (self.player_health + amount).clamp(0, config::MAX_PLAYER_HEALTH);
        info!(
            "Player healed by {}. Current health: {}",
            amount, self.player_health
        );
    }

    /// Rolls a random heal amount, same range as a damage roll.
    pub fn heal_player_random(&mut self, rng: &mut impl Rng) {
        let amount = rng.gen_range(DAMAGE_RANGE);
        self.heal_player(amount);
    }
}

impl Default for CombatState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn overkill_damage_clamps_to_zero() {
        let mut combat = CombatState::new();
        combat.take_damage(150);
        assert_eq!(combat.player_health(), 0);
        assert!(!combat.is_player_alive());
    }

    #[test]
    fn heal_clamps_at_the_cap() {
        let mut combat = CombatState::new();
        combat.take_damage(30);
        combat.heal_player(1000);
        assert_eq!(combat.player_health(), config::MAX_PLAYER_HEALTH);
    }

    #[test]
    fn attacks_eventually_defeat_the_enemy() {
        let mut combat = CombatState::new();
        let mut rng = StdRng::seed_from_u64(3);

        let mut swings = 0;
        while combat.is_enemy_alive() {
            let damage = combat.attack_enemy(&mut rng).unwrap();
            assert!(DAMAGE_RANGE.contains(&damage));
            swings += 1;
        }
        assert_eq!(combat.enemy_health(), 0);
        // 50 health, at least 10 damage per swing
        assert!(swings <= 5);
    }

    #[test]
    fn attacking_a_defeated_enemy_is_a_no_op() {
        let mut combat = CombatState::new();
        let mut rng = StdRng::seed_from_u64(3);
        while combat.is_enemy_alive() {
            combat.attack_enemy(&mut rng);
        }
        assert_eq!(combat.attack_enemy(&mut rng), None);
        assert_eq!(combat.enemy_health(), 0);
    }
}
