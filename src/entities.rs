//! All game entity types — pure data, no rules.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Cosmetic alien variant, passed straight through to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlienSprite {
    White,
    Cyan,
    Magenta,
    Yellow,
}

impl AlienSprite {
    /// The fixed palette a wave picks from.
    pub const ALL: [AlienSprite; 4] = [
        AlienSprite::White,
        AlienSprite::Cyan,
        AlienSprite::Magenta,
        AlienSprite::Yellow,
    ];
}

// ── Shared shape ──────────────────────────────────────────────────────────────

/// Axis-aligned box in board pixels. Every entity is one of these plus
/// its role-specific flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Bounds { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

// ── Ship, aliens, projectiles ─────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub bounds: Bounds,
}

impl Ship {
    /// A ship parked at the configured start position.
    pub fn at_start(config: &GameConfig) -> Self {
        let (x, y) = config.ship_start();
        Ship {
            bounds: Bounds::new(x, y, config.ship_width(), config.ship_height()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub bounds: Bounds,
    pub alive: bool,
    pub sprite: AlienSprite,
}

impl Alien {
    pub fn new(bounds: Bounds, sprite: AlienSprite) -> Self {
        Alien {
            bounds,
            alive: true,
            sprite,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub bounds: Bounds,
    /// Set once the projectile has hit an alien.
    pub spent: bool,
}

impl Projectile {
    /// A fresh projectile with its top-left corner at `(x, y)`.
    pub fn new(x: i32, y: i32, config: &GameConfig) -> Self {
        Projectile {
            bounds: Bounds::new(x, y, config.projectile_width(), config.projectile_height()),
            spent: false,
        }
    }

    /// Eligible for pruning: it hit something or flew off the top edge.
    pub fn is_expired(&self) -> bool {
        self.spent || self.bounds.y < 0
    }
}

// ── World state ───────────────────────────────────────────────────────────────

/// Everything the engine mutates on a tick. Cloneable and comparable so
/// tests can snapshot it between ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub ship: Ship,
    /// Current wave, column-major. Dead aliens stay in place until the
    /// wave is replaced.
    pub aliens: Vec<Alien>,
    /// Insertion-ordered; pruned from the front only.
    pub projectiles: Vec<Projectile>,
    pub alive_alien_count: usize,
    /// +1 moving right, -1 moving left.
    pub alien_direction: i32,
    pub score: u32,
    pub status: GameStatus,
    pub wave_columns: i32,
    pub wave_rows: i32,
}

impl World {
    /// A playing world at base difficulty holding the given wave.
    pub fn with_aliens(config: &GameConfig, aliens: Vec<Alien>) -> Self {
        let alive_alien_count = aliens.iter().filter(|a| a.alive).count();
        World {
            ship: Ship::at_start(config),
            aliens,
            projectiles: Vec::new(),
            alive_alien_count,
            alien_direction: 1,
            score: 0,
            status: GameStatus::Playing,
            wave_columns: config.initial_wave_columns,
            wave_rows: config.initial_wave_rows,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn live_aliens(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter().filter(|a| a.alive)
    }

    /// Projectiles that should be drawn. Spent ones can linger behind a
    /// live projectile until they reach the front of the queue.
    pub fn visible_projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().filter(|p| !p.spent)
    }
}
