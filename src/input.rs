//! Input controller: discrete player events applied straight to the world.

use log::info;
use rand::Rng;

use crate::compute::Game;
use crate::entities::Projectile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    MoveLeft,
    MoveRight,
    Fire,
    /// Only honoured after game over.
    Restart,
}

impl<R: Rng> Game<R> {
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::MoveLeft => self.move_ship_left(),
            Input::MoveRight => self.move_ship_right(),
            Input::Fire => self.fire(),
            Input::Restart => self.restart(),
        }
    }

    /// Step left, unless that would cross the left wall.
    pub fn move_ship_left(&mut self) {
        if self.world.is_game_over() {
            return;
        }
        let ship = &mut self.world.ship.bounds;
        if ship.x - self.config.ship_step >= 0 {
            ship.x -= self.config.ship_step;
        }
    }

    /// Step right, unless that would cross the right wall.
    pub fn move_ship_right(&mut self) {
        if self.world.is_game_over() {
            return;
        }
        let ship = &mut self.world.ship.bounds;
        if ship.x + self.config.ship_step + ship.width <= self.config.board_width() {
            ship.x += self.config.ship_step;
        }
    }

    /// Launch one projectile from the ship. No cooldown.
    pub fn fire(&mut self) {
        if self.world.is_game_over() {
            return;
        }
        let ship = self.world.ship.bounds;
        let projectile = Projectile::new(ship.x + self.config.fire_offset(), ship.y, &self.config);
        self.world.projectiles.push(projectile);
    }

    pub fn restart(&mut self) {
        if !self.world.is_game_over() {
            return;
        }
        self.reset();
        info!("game restarted");
    }
}
