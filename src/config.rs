//! Construction-time game configuration.
//!
//! Every size is expressed in board pixels and derived from the tile size,
//! the same way the board itself is. Nothing here changes after a `Game`
//! has been built.

use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in tiles
    pub board_columns: i32,
    /// Board height in tiles
    pub board_rows: i32,
    /// Edge length of one tile in pixels
    pub tile_size: i32,

    /// Formation size at the start of a game (and after restart)
    pub initial_wave_columns: i32,
    pub initial_wave_rows: i32,

    /// Ship displacement per move input
    pub ship_step: i32,
    /// Formation displacement per tick
    pub alien_step: i32,
    /// Projectile y displacement per tick; negative is upward
    pub projectile_velocity: i32,

    /// Host tick rate
    pub tick_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let tile_size = 32;
        Self {
            board_columns: 16,
            board_rows: 16,
            tile_size,
            initial_wave_columns: 3,
            initial_wave_rows: 2,
            ship_step: tile_size,
            alien_step: 1,
            projectile_velocity: -10,
            tick_rate_hz: 60,
        }
    }
}

impl GameConfig {
    /// Reject shapes the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, i64); 8] = [
            ("board_columns", self.board_columns as i64),
            ("board_rows", self.board_rows as i64),
            ("tile_size", self.tile_size as i64),
            ("initial_wave_columns", self.initial_wave_columns as i64),
            ("initial_wave_rows", self.initial_wave_rows as i64),
            ("ship_step", self.ship_step as i64),
            ("alien_step", self.alien_step as i64),
            ("tick_rate_hz", self.tick_rate_hz as i64),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        // Everything below derives sizes from tile products; they must fit.
        for (axis, tiles) in [
            ("width", self.board_columns),
            ("height", self.board_rows),
            ("ship width", 2),
        ] {
            if self.tile_size.checked_mul(tiles).is_none() {
                return Err(ConfigError::BoardTooLarge {
                    axis,
                    tiles,
                    tile_size: self.tile_size,
                });
            }
        }
        // Projectiles are tile/8 wide; anything smaller would vanish.
        if self.projectile_width() <= 0 {
            return Err(ConfigError::NonPositive {
                field: "projectile_width",
                value: self.projectile_width() as i64,
            });
        }
        if self.projectile_velocity >= 0 {
            return Err(ConfigError::ProjectileNotUpward(self.projectile_velocity));
        }
        for (field, value, limit) in [
            ("ship_step", self.ship_step, self.board_width()),
            ("alien_step", self.alien_step, self.board_width()),
            ("projectile_velocity", self.projectile_velocity, self.board_height()),
        ] {
            if value.checked_abs().map_or(true, |v| v > limit) {
                return Err(ConfigError::StepExceedsBoard { field, value, limit });
            }
        }
        if self.ship_width() > self.board_width() {
            return Err(ConfigError::ShipWiderThanBoard {
                ship_width: self.ship_width(),
                board_width: self.board_width(),
            });
        }

        for (axis, initial, cap) in [
            ("columns", self.initial_wave_columns, self.wave_column_cap()),
            ("rows", self.initial_wave_rows, self.wave_row_cap()),
        ] {
            if cap < 1 {
                return Err(ConfigError::WaveCapTooSmall { axis, cap });
            }
            if initial > cap {
                return Err(ConfigError::InitialWaveExceedsCap { axis, initial, cap });
            }
        }
        Ok(())
    }

    // ── Board ────────────────────────────────────────────────────────────────

    pub fn board_width(&self) -> i32 {
        self.tile_size * self.board_columns
    }

    pub fn board_height(&self) -> i32 {
        self.tile_size * self.board_rows
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    // ── Ship ─────────────────────────────────────────────────────────────────

    pub fn ship_width(&self) -> i32 {
        self.tile_size * 2
    }

    pub fn ship_height(&self) -> i32 {
        self.tile_size
    }

    /// Centred horizontally, one tile above the bottom row.
    pub fn ship_start(&self) -> (i32, i32) {
        (
            self.tile_size * self.board_columns / 2 - self.tile_size,
            self.tile_size * self.board_rows - self.tile_size * 2,
        )
    }

    /// Horizontal offset of a new projectile from the ship's left edge.
    pub fn fire_offset(&self) -> i32 {
        (self.ship_width() as i64 * 15 / 32) as i32
    }

    // ── Aliens ───────────────────────────────────────────────────────────────

    pub fn alien_width(&self) -> i32 {
        self.tile_size * 2
    }

    pub fn alien_height(&self) -> i32 {
        self.tile_size
    }

    pub fn formation_origin(&self) -> (i32, i32) {
        (self.tile_size, self.tile_size)
    }

    pub fn wave_column_cap(&self) -> i32 {
        self.board_columns / 2 - 2
    }

    pub fn wave_row_cap(&self) -> i32 {
        self.board_rows - 6
    }

    // ── Projectiles ──────────────────────────────────────────────────────────

    pub fn projectile_width(&self) -> i32 {
        self.tile_size / 8
    }

    pub fn projectile_height(&self) -> i32 {
        self.tile_size / 2
    }
}
