//! Simulation engine.
//!
//! `Game` owns the `World` exclusively. The host calls `advance()` once per
//! tick and routes player input through `handle_input` (see `input.rs`);
//! renderers only ever see `&World`. The injected RNG picks alien sprites
//! and nothing else, so tests can seed it and forget about it.

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{GameStatus, World};
use crate::error::ConfigError;
use crate::geometry::intersects;
use crate::wave::{create_wave, random_sprite, FormationGrid};

/// Points per alien destroyed. Also the per-alien wave-clear bonus.
pub const ALIEN_POINTS: u32 = 100;

/// Stateful wrapper over the pure layer: the rules themselves are plain
/// functions such as `wave::create_wave` and `geometry::intersects`, and
/// `Game` only sequences them over the `World` it owns.
pub struct Game<R: Rng> {
    pub(crate) config: GameConfig,
    pub(crate) world: World,
    rng: R,
}

// ── Constructors ─────────────────────────────────────────────────────────────

impl<R: Rng> Game<R> {
    /// Validate `config` and start a game at base difficulty.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = fresh_world(&config, &mut rng);
        debug!(
            "game created: board {}x{} px, {} Hz",
            config.board_width(),
            config.board_height(),
            config.tick_rate_hz
        );
        Ok(Game { config, world, rng })
    }

    /// Validate `config` and resume from a prepared world. The alive count
    /// is rebuilt from the aliens themselves.
    pub fn from_world(config: GameConfig, mut world: World, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let live = world.aliens.iter().filter(|a| a.alive).count();
        if world.alive_alien_count != live {
            debug!(
                "alive count {} disagrees with {} live aliens, using the latter",
                world.alive_alien_count, live
            );
            world.alive_alien_count = live;
        }
        Ok(Game { config, world, rng })
    }

    // ── Read-only snapshot ───────────────────────────────────────────────────

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn status(&self) -> GameStatus {
        self.world.status
    }

    pub fn is_game_over(&self) -> bool {
        self.world.is_game_over()
    }

    // ── State transitions ────────────────────────────────────────────────────

    /// Throw the current world away and start over at base difficulty.
    pub fn reset(&mut self) {
        self.world = fresh_world(&self.config, &mut self.rng);
    }

    /// Advance the simulation by one tick. Does nothing once the game is over.
    pub fn advance(&mut self) {
        if self.world.is_game_over() {
            return;
        }
        self.sweep_aliens();
        self.sweep_projectiles();
        self.prune_projectiles();
        if self.world.alive_alien_count == 0 {
            self.next_wave();
        }
    }

    /// Move the formation one step, bouncing and descending at the walls.
    ///
    /// Each alien is moved and checked before the next one moves, so a
    /// bounce triggered by alien N reverses the direction used for every
    /// alien after it and drops the whole formation immediately.
    fn sweep_aliens(&mut self) {
        let board_width = self.config.board_width();
        let step = self.config.alien_step;
        let row_height = self.config.alien_height();
        let world = &mut self.world;

        for i in 0..world.aliens.len() {
            if !world.aliens[i].alive {
                continue;
            }
            world.aliens[i].bounds.x += world.alien_direction * step;

            let bounds = world.aliens[i].bounds;
            if bounds.right() >= board_width || bounds.x <= 0 {
                world.alien_direction = -world.alien_direction;
                world.aliens[i].bounds.x += world.alien_direction * step * 2;
                for alien in world.aliens.iter_mut() {
                    alien.bounds.y += row_height;
                }
                debug!("formation bounced, direction now {}", world.alien_direction);
            }

            if world.aliens[i].bounds.y >= world.ship.bounds.y && !world.is_game_over() {
                world.status = GameStatus::GameOver;
                info!("game over, final score {}", world.score);
            }
        }
    }

    /// Move every projectile and resolve hits. A projectile destroys at most
    /// one alien; the first live alien in collection order wins.
    fn sweep_projectiles(&mut self) {
        let velocity = self.config.projectile_velocity;
        let World {
            aliens,
            projectiles,
            alive_alien_count,
            score,
            ..
        } = &mut self.world;

        for projectile in projectiles.iter_mut() {
            projectile.bounds.y += velocity;
            if projectile.spent {
                continue;
            }
            if let Some(alien) = aliens
                .iter_mut()
                .find(|a| a.alive && intersects(&projectile.bounds, &a.bounds))
            {
                projectile.spent = true;
                alien.alive = false;
                *alive_alien_count -= 1;
                *score += ALIEN_POINTS;
            }
        }
    }

    /// Drop expired projectiles from the front of the queue only. An expired
    /// projectile queued behind a live one stays until it reaches the front.
    fn prune_projectiles(&mut self) {
        let projectiles = &mut self.world.projectiles;
        let leading = projectiles
            .iter()
            .position(|p| !p.is_expired())
            .unwrap_or(projectiles.len());
        projectiles.drain(..leading);
    }

    /// Award the clear bonus, grow the formation up to its caps and deploy
    /// the next wave. Alien direction carries over.
    fn next_wave(&mut self) {
        let world = &mut self.world;
        world.score += (world.wave_columns * world.wave_rows) as u32 * ALIEN_POINTS;
        world.wave_columns = (world.wave_columns + 1).min(self.config.wave_column_cap());
        world.wave_rows = (world.wave_rows + 1).min(self.config.wave_row_cap());

        world.projectiles.clear();
        let rng = &mut self.rng;
        world.aliens = create_wave(
            world.wave_columns,
            world.wave_rows,
            &FormationGrid::from_config(&self.config),
            || random_sprite(&mut *rng),
        );
        world.alive_alien_count = world.aliens.len();
        info!(
            "wave cleared, next wave {}x{}, score {}",
            world.wave_columns, world.wave_rows, world.score
        );
    }
}

/// A playing world with a newly generated base wave.
fn fresh_world<R: Rng>(config: &GameConfig, rng: &mut R) -> World {
    let aliens = create_wave(
        config.initial_wave_columns,
        config.initial_wave_rows,
        &FormationGrid::from_config(config),
        || random_sprite(&mut *rng),
    );
    World::with_aliens(config, aliens)
}
