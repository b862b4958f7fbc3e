/// Rejected construction-time configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A size, step or rate that must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: i64 },

    /// A derived board size does not fit in board coordinates
    #[error("{axis} of {tiles} tiles at {tile_size} px overflows board coordinates")]
    BoardTooLarge {
        axis: &'static str,
        tiles: i32,
        tile_size: i32,
    },

    /// A per-tick or per-input displacement larger than the board itself
    #[error("{field} magnitude {value} exceeds board extent {limit}")]
    StepExceedsBoard {
        field: &'static str,
        value: i32,
        limit: i32,
    },

    /// Projectiles must travel upward (negative y)
    #[error("projectile velocity must be negative, got {0}")]
    ProjectileNotUpward(i32),

    /// The ship does not fit on the board
    #[error("ship width {ship_width} exceeds board width {board_width}")]
    ShipWiderThanBoard { ship_width: i32, board_width: i32 },

    /// The board is too small for waves to grow at all
    #[error("{axis} wave cap is {cap}, board too small")]
    WaveCapTooSmall { axis: &'static str, cap: i32 },

    /// The starting wave is already past its cap
    #[error("initial wave {axis} {initial} exceeds cap {cap}")]
    InitialWaveExceedsCap {
        axis: &'static str,
        initial: i32,
        cap: i32,
    },
}

/// Top-level error for the game binary.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
