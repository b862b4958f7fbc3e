//! Wave generation: lays out a fresh alien formation.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Alien, AlienSprite, Bounds};

/// Where a formation starts and how big each of its cells is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormationGrid {
    pub origin_x: i32,
    pub origin_y: i32,
    pub cell_width: i32,
    pub cell_height: i32,
}

impl FormationGrid {
    pub fn from_config(config: &GameConfig) -> Self {
        let (origin_x, origin_y) = config.formation_origin();
        FormationGrid {
            origin_x,
            origin_y,
            cell_width: config.alien_width(),
            cell_height: config.alien_height(),
        }
    }
}

/// Build `columns × rows` live aliens, column-major (every row of column 0,
/// then column 1, ...). `choose_sprite` is called once per alien.
pub fn create_wave<F>(columns: i32, rows: i32, grid: &FormationGrid, mut choose_sprite: F) -> Vec<Alien>
where
    F: FnMut() -> AlienSprite,
{
    let mut aliens = Vec::with_capacity((columns.max(0) * rows.max(0)) as usize);
    for col in 0..columns {
        for row in 0..rows {
            let bounds = Bounds::new(
                grid.origin_x + col * grid.cell_width,
                grid.origin_y + row * grid.cell_height,
                grid.cell_width,
                grid.cell_height,
            );
            aliens.push(Alien::new(bounds, choose_sprite()));
        }
    }
    aliens
}

/// Uniform pick from the sprite palette.
pub fn random_sprite(rng: &mut impl Rng) -> AlienSprite {
    AlienSprite::ALL[rng.gen_range(0..AlienSprite::ALL.len())]
}
