//! Game engine — per-frame orchestration of the simulation.
//!
//! `GameEngine` owns the entity world, the seeded RNG, and the frame
//! clock, and runs the systems in a fixed order each frame. It is
//! completely headless: callers feed it elapsed time and key state
//! (directly or via a [`PresentationPort`]) and fold the returned
//! counts into score and lives.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use invaders_core::constants::{HUD_HEIGHT, SPRITE_SIZE};
use invaders_core::state::WorldSnapshot;
use invaders_core::types::{KeyState, KindCounts};

use crate::port::PresentationPort;
use crate::systems;
use crate::systems::player_control::FireState;
use crate::world::EntityWorld;

/// Configuration for starting a new game.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Window width in pixels.
    pub width: f32,
    /// Window height in pixels. The playfield ends `HUD_HEIGHT` above
    /// the bottom.
    pub height: f32,
    /// RNG seed for determinism. Same seed + same inputs = same game.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            seed: 42,
        }
    }
}

/// Per-frame outcome for the shell to aggregate.
///
/// Score is `hit_counts` over the alien kinds; a life is lost per
/// `hit_counts[Player]`; a non-zero alien entry in `cull_counts` means
/// an alien reached the bottom of the playfield.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameReport {
    pub hit_counts: KindCounts,
    pub cull_counts: KindCounts,
}

/// The simulation engine. Owns the world and all per-game state.
pub struct GameEngine {
    world: EntityWorld,
    config: SimConfig,
    rng: ChaCha8Rng,
    last_time: f32,
    floor_last_time: i32,
    fire: FireState,
}

impl GameEngine {
    /// Create an engine with the player and the first alien wave in
    /// place, clock at zero.
    pub fn new(config: SimConfig) -> Self {
        let mut world = EntityWorld::new();
        systems::spawner::spawn_player(&mut world, config.width, config.height);
        systems::spawner::spawn_wave(&mut world, config.width);

        Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            last_time: 0.0,
            floor_last_time: 0,
            fire: FireState::default(),
            config,
        }
    }

    /// Advance one frame. `now_secs` comes from the shell's monotonic
    /// clock and must be non-decreasing across calls.
    pub fn step(&mut self, now_secs: f32, keys: KeyState) -> FrameReport {
        let dt = now_secs - self.last_time;
        let floor_now = now_secs.floor() as i32;
        self.last_time = now_secs;

        systems::movement::run(&mut self.world, dt);

        // Formation AI: bounce off the screen edges, then the periodic
        // random bomb drop. The clamp keeps a reversed wave a strip
        // inside the playfield so the culler does not eat it.
        if self.world.aliens_remain() {
            if let Some(bbox) = systems::formation::bounding_box(&self.world) {
                if bbox.left <= 0.0 || bbox.right >= self.config.width {
                    systems::formation::reverse_and_descend(
                        &mut self.world,
                        0.0,
                        self.config.width - SPRITE_SIZE - 1.0,
                    );
                }
            }
        }
        systems::formation::random_fire(
            &mut self.world,
            &mut self.rng,
            self.floor_last_time,
            floor_now,
        );

        let cull_counts = systems::cull::run(
            &mut self.world,
            self.config.width,
            self.config.height - HUD_HEIGHT,
        );
        systems::animation::run(&mut self.world, floor_now);
        let hit_counts = systems::collision::run(&mut self.world);

        systems::player_control::run(
            &mut self.world,
            keys,
            dt,
            now_secs,
            &mut self.fire,
            self.config.width,
        );

        // The wave respawn check rides on the sort invariant: aliens,
        // if any, sit immediately after the player.
        if !self.world.is_empty() && !self.world.aliens_remain() {
            systems::spawner::spawn_wave(&mut self.world, self.config.width);
        }

        self.floor_last_time = floor_now;
        FrameReport {
            hit_counts,
            cull_counts,
        }
    }

    /// Run one full frame against the port: poll time and input, step,
    /// draw. Returns the step's report.
    pub fn frame(&mut self, port: &mut dyn PresentationPort) -> FrameReport {
        let now_secs = port.elapsed_seconds();
        let keys = port.poll_input();
        let report = self.step(now_secs, keys);
        self.draw(port);
        report
    }

    /// Draw the current world state through the port.
    pub fn draw(&self, port: &mut dyn PresentationPort) {
        systems::render::run(&self.world, port);
    }

    /// Serializable view of the current frame.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            elapsed_secs: self.last_time,
            entities: self.world.entities().to_vec(),
        }
    }

    pub fn world(&self) -> &EntityWorld {
        &self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Game-over teardown: empty the world. The shell calls this once
    /// lives run out; stepping a cleared engine is a no-op frame.
    pub fn clear(&mut self) {
        self.world.clear();
    }

    /// Mutable world access for test setups.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut EntityWorld {
        &mut self.world
    }
}
