use invaders::entities::*;
use invaders::GameConfig;

fn alien(x: i32, y: i32) -> Alien {
    Alien::new(Bounds::new(x, y, 64, 32), AlienSprite::Cyan)
}

#[test]
fn bounds_edges() {
    let b = Bounds::new(10, 20, 30, 40);
    assert_eq!(b.right(), 40);
    assert_eq!(b.bottom(), 60);
}

#[test]
fn new_alien_is_alive() {
    let a = alien(0, 0);
    assert!(a.alive);
    assert_eq!(a.sprite, AlienSprite::Cyan);
}

#[test]
fn projectile_expiry() {
    let config = GameConfig::default();
    let mut p = Projectile::new(5, 0, &config);
    assert_eq!(p.bounds.width, 4);
    assert_eq!(p.bounds.height, 16);
    assert!(!p.is_expired()); // y == 0 is still on the board

    p.bounds.y = -1;
    assert!(p.is_expired());

    p.bounds.y = 100;
    p.spent = true;
    assert!(p.is_expired());
}

#[test]
fn world_with_aliens_counts_only_live_ones() {
    let config = GameConfig::default();
    let mut dead = alien(100, 32);
    dead.alive = false;
    let world = World::with_aliens(&config, vec![alien(32, 32), dead, alien(164, 32)]);

    assert_eq!(world.aliens.len(), 3);
    assert_eq!(world.alive_alien_count, 2);
    assert_eq!(world.live_aliens().count(), 2);
    assert_eq!(world.alien_direction, 1);
    assert_eq!(world.score, 0);
    assert_eq!(world.status, GameStatus::Playing);
    assert_eq!((world.wave_columns, world.wave_rows), (3, 2));
    assert_eq!(world.ship.bounds, Bounds::new(224, 448, 64, 32));
}

#[test]
fn visible_projectiles_skip_spent() {
    let config = GameConfig::default();
    let mut world = World::with_aliens(&config, Vec::new());
    let mut spent = Projectile::new(10, 10, &config);
    spent.spent = true;
    world.projectiles.push(Projectile::new(10, 300, &config));
    world.projectiles.push(spent);

    let visible: Vec<_> = world.visible_projectiles().collect();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].bounds.y, 300);
}

#[test]
fn world_clone_is_independent() {
    let config = GameConfig::default();
    let original = World::with_aliens(&config, vec![alien(32, 32)]);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ship.bounds.x = 99;
    cloned.score = 999;
    cloned.aliens[0].alive = false;

    assert_eq!(original.ship.bounds.x, 224);
    assert_eq!(original.score, 0);
    assert!(original.aliens[0].alive);
    assert_ne!(original, cloned);
}
