use heli_arcade::sim::combat::{
    Gun, Helicopter, BULLET_SPEED, FALL_SPEED, FIRE_DISPLAY_DURATION, GUN_H, HELI_H, HELI_W,
    MAX_FIRE_INTERVAL, MIN_FIRE_INTERVAL,
};
use heli_arcade::sim::{Aabb, Vec2, FIELD_H, FIELD_W};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn park_heli_out_of_the_way(heli: &mut Helicopter) {
    // Top-left corner, far from the muzzle column.
    heli.body.pos = Vec2::new(0.0, FIELD_H - HELI_H);
}

// ── fire timer ───────────────────────────────────────────────────────────────

#[test]
fn initial_fire_interval_in_range() {
    let mut rng = seeded_rng();
    let gun = Gun::emplace(FIELD_W, &mut rng);
    assert!(gun.next_fire_in >= MIN_FIRE_INTERVAL && gun.next_fire_in < MAX_FIRE_INTERVAL);
}

#[test]
fn fire_interval_redrawn_in_range_after_every_shot() {
    let mut rng = seeded_rng();
    let mut gun = Gun::emplace(FIELD_W, &mut rng);
    let mut shots = 0;
    let mut elapsed = 0.0;
    while shots < 20 && elapsed < 120.0 {
        let was_firing = gun.firing;
        gun.update_fire_timer(0.05, &mut rng);
        elapsed += 0.05;
        if gun.firing && !was_firing {
            shots += 1;
            assert!(
                gun.next_fire_in >= MIN_FIRE_INTERVAL && gun.next_fire_in < MAX_FIRE_INTERVAL,
                "interval {} out of range after shot {}",
                gun.next_fire_in,
                shots
            );
        }
    }
    assert_eq!(shots, 20, "gun should keep firing on its timer");
}

#[test]
fn firing_flag_clears_after_display_duration() {
    let mut rng = seeded_rng();
    let mut gun = Gun::emplace(FIELD_W, &mut rng);
    gun.fire_timer = gun.next_fire_in; // due now
    gun.update_fire_timer(0.0, &mut rng);
    assert!(gun.firing);
    gun.update_fire_timer(FIRE_DISPLAY_DURATION, &mut rng);
    assert!(!gun.firing);
    assert_eq!(gun.fire_display_timer, 0.0);
}

#[test]
fn shot_spawns_bullet_at_muzzle_height() {
    let mut rng = seeded_rng();
    let mut gun = Gun::emplace(FIELD_W, &mut rng);
    gun.fire_timer = gun.next_fire_in;
    gun.update_fire_timer(0.0, &mut rng);
    assert!(gun.bullet_active);
    assert_eq!(gun.bullet_y, GUN_H);
}

// ── bullet flight ────────────────────────────────────────────────────────────

#[test]
fn bullet_climbs_at_fixed_speed() {
    let mut rng = seeded_rng();
    let mut gun = Gun::emplace(FIELD_W, &mut rng);
    let mut heli = Helicopter::spawn(FIELD_W, FIELD_H);
    park_heli_out_of_the_way(&mut heli);
    gun.bullet_active = true;
    gun.bullet_y = GUN_H;
    gun.update_bullet(0.1, FIELD_H, &mut heli, &mut rng);
    assert!((gun.bullet_y - (GUN_H + BULLET_SPEED * 0.1)).abs() < 1e-3);
    assert!(gun.bullet_active);
}

#[test]
fn bullet_dies_above_the_top_edge() {
    let mut rng = seeded_rng();
    let mut gun = Gun::emplace(FIELD_W, &mut rng);
    let mut heli = Helicopter::spawn(FIELD_W, FIELD_H);
    park_heli_out_of_the_way(&mut heli);
    gun.bullet_active = true;
    gun.bullet_y = FIELD_H - 10.0;
    gun.update_bullet(0.1, FIELD_H, &mut heli, &mut rng);
    assert!(!gun.bullet_active);
    assert!(!heli.exploded);
}

#[test]
fn bullet_reaching_the_body_band_downs_the_helicopter() {
    // The helicopter hovers horizontally aligned with the muzzle; the frame
    // that carries the bullet into its vertical band must end with the
    // helicopter exploded and falling.
    let mut rng = seeded_rng();
    let mut gun = Gun::emplace(FIELD_W, &mut rng);
    let mut heli = Helicopter::spawn(FIELD_W, FIELD_H);
    heli.body.pos = Vec2::new(gun.muzzle_x() - HELI_W / 2.0, 300.0);
    gun.bullet_active = true;
    gun.bullet_y = 295.0;
    gun.update_bullet(0.016, FIELD_H, &mut heli, &mut rng);
    assert!(heli.exploded);
    assert!(heli.falling);
    assert_eq!(heli.body.vel, Vec2::new(0.0, 0.0));
    assert!(!gun.bullet_active);
}

#[test]
fn bullet_misses_when_horizontally_clear() {
    let mut rng = seeded_rng();
    let mut gun = Gun::emplace(FIELD_W, &mut rng);
    let mut heli = Helicopter::spawn(FIELD_W, FIELD_H);
    heli.body.pos = Vec2::new(gun.muzzle_x() + HELI_W, 300.0); // fully to the side
    gun.bullet_active = true;
    gun.bullet_y = 295.0;
    gun.update_bullet(0.016, FIELD_H, &mut heli, &mut rng);
    assert!(!heli.exploded);
    assert!(gun.bullet_active);
}

#[test]
fn bullet_ignores_an_already_downed_helicopter() {
    let mut rng = seeded_rng();
    let mut gun = Gun::emplace(FIELD_W, &mut rng);
    let mut heli = Helicopter::spawn(FIELD_W, FIELD_H);
    heli.body.pos = Vec2::new(gun.muzzle_x() - HELI_W / 2.0, 300.0);
    heli.explode(&mut rng);
    let variant = heli.explosion_variant;
    gun.bullet_active = true;
    gun.bullet_y = 295.0;
    gun.update_bullet(0.016, FIELD_H, &mut heli, &mut rng);
    assert!(gun.bullet_active); // sailed through the wreck
    assert_eq!(heli.explosion_variant, variant);
}

// ── explosion & fall ─────────────────────────────────────────────────────────

#[test]
fn explode_zeroes_velocity_and_picks_a_variant() {
    let mut rng = seeded_rng();
    let mut heli = Helicopter::spawn(FIELD_W, FIELD_H);
    heli.explode(&mut rng);
    assert!(heli.exploded && heli.falling);
    assert_eq!(heli.body.vel, Vec2::new(0.0, 0.0));
    assert!(heli.explosion_variant < 2);
}

#[test]
fn fall_descends_at_fall_speed() {
    let mut rng = seeded_rng();
    let mut heli = Helicopter::spawn(FIELD_W, FIELD_H);
    heli.body.pos.y = 300.0;
    heli.explode(&mut rng);
    heli.fall(0.1);
    assert!((heli.body.pos.y - (300.0 - FALL_SPEED * 0.1)).abs() < 1e-3);
    assert!(heli.falling);
}

#[test]
fn fall_stops_on_the_floor_and_stays_terminal() {
    let mut rng = seeded_rng();
    let mut heli = Helicopter::spawn(FIELD_W, FIELD_H);
    heli.body.pos.y = 10.0;
    heli.explode(&mut rng);
    heli.fall(0.1); // more than enough to reach the floor
    assert_eq!(heli.body.pos.y, 0.0);
    assert!(!heli.falling);
    assert!(heli.exploded); // wreck stays until an explicit restart
}

// ── overlap policies ─────────────────────────────────────────────────────────

#[test]
fn aabb_intersects_is_strict_overlap() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(Aabb::new(5.0, 5.0, 10.0, 10.0)));
    assert!(!a.intersects(Aabb::new(10.0, 0.0, 10.0, 10.0))); // touching edges only
    assert!(!a.intersects(Aabb::new(20.0, 20.0, 5.0, 5.0)));
}

#[test]
fn aabb_overlap_area_measures_shared_area() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(a.overlap_area(Aabb::new(5.0, 5.0, 10.0, 10.0)), 25.0);
    assert_eq!(a.overlap_area(Aabb::new(30.0, 30.0, 10.0, 10.0)), 0.0);
}

#[test]
fn body_overlap_requires_half_the_helicopter_area() {
    let mut rng = seeded_rng();
    let gun = Gun::emplace(FIELD_W, &mut rng);
    let mut heli = Helicopter::spawn(FIELD_W, FIELD_H);

    // Hovering directly over the gun: the shared area is capped by the
    // gun's width, well under half the helicopter's footprint.
    heli.body.pos = Vec2::new(gun.muzzle_x() - HELI_W / 2.0, 30.0);
    assert!(!gun.body_overlap(&heli));

    // Far away: no overlap at all.
    park_heli_out_of_the_way(&mut heli);
    assert!(!gun.body_overlap(&heli));
}
