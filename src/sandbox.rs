//! # Sandbox Host
//!
//! The externally driven host loop that replaces an engine's per-frame
//! callback. The embedding program calls [`Sandbox::tick`] at whatever
//! cadence it likes; UI input goes through [`Sandbox::submit_line`]. Both
//! entry points run on the caller's thread, one after the other, so no
//! state here needs locking.

use crate::{CommandConsole, CommandFileWatcher, GameSystems, SceneRegistry, WorldsmithResult};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// The whole sandbox: scene, console, game systems, and the seeded RNG
/// every random decision draws from.
///
/// # Examples
///
/// ```
/// use worldsmith::Sandbox;
///
/// let mut sandbox = Sandbox::new(12345);
/// sandbox.submit_line("quick start");
/// assert_eq!(sandbox.scene.len(), 6);
/// ```
pub struct Sandbox {
    pub scene: SceneRegistry,
    pub console: CommandConsole,
    pub systems: GameSystems,
    watcher: Option<CommandFileWatcher>,
    rng: StdRng,
    seed: u64,
    tick_count: u64,
}

impl Sandbox {
    /// Creates a sandbox with the given RNG seed and no command file.
    pub fn new(seed: u64) -> Self {
        info!("Sandbox starting with seed {}", seed);
        Self {
            scene: SceneRegistry::new(),
            console: CommandConsole::new(),
            systems: GameSystems::new(),
            watcher: None,
            rng: StdRng::seed_from_u64(seed),
            seed,
            tick_count: 0,
        }
    }

    /// Attaches a polled command file.
    pub fn with_command_file(mut self, path: impl Into<PathBuf>) -> Self {
        let watcher = CommandFileWatcher::new(path);
        info!("Watching command file {}", watcher.path().display());
        self.watcher = Some(watcher);
        self
    }

    /// The seed this sandbox was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ticks taken so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// UI entry point: submits a line to the console and processes it.
    /// Returns the number of commands that executed successfully.
    pub fn submit_line(&mut self, line: &str) -> usize {
        self.console.submit(line);
        self.console.process_input(&mut self.scene, &mut self.rng)
    }

    /// Runs a "verb target" game-system action line.
    pub fn run_action(&mut self, line: &str) -> WorldsmithResult<()> {
        self.systems.run_action(line, &mut self.scene, &mut self.rng)
    }

    /// One host-loop step: polls the command file, if one is attached.
    /// Returns true when the poll dispatched a command.
    pub fn tick(&mut self) -> bool {
        self.tick_count += 1;
        match &self.watcher {
            Some(watcher) => watcher.poll(&mut self.console, &mut self.scene, &mut self.rng),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn same_seed_replays_the_same_session() {
        let mut a = Sandbox::new(77);
        let mut b = Sandbox::new(77);
        for sandbox in [&mut a, &mut b] {
            sandbox.submit_line("change background");
            sandbox.run_action("attack").unwrap();
        }
        assert_eq!(a.systems.combat.enemy_health(), b.systems.combat.enemy_health());
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn tick_without_a_watcher_is_quiet() {
        let mut sandbox = Sandbox::new(config::DEFAULT_SEED);
        assert!(!sandbox.tick());
        assert_eq!(sandbox.tick_count(), 1);
        assert_eq!(sandbox.scene.len(), 3);
    }
}
