//! Pick spawn points with a refilling sampler, then lock on to the nearest targets.
//!
//! The spawn table is shorter than the wave, so the sampler cycles through it:
//! no point repeats until every point has been used once.

use erabu::math::{clamp_symmetric, point_along};
use erabu::{nearest_k_euclidean, PositionedItem, RefillPolicy, Sampler};
use glam::Vec3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spawn_points = ["north", "east", "south", "west", "roof"];

    let sampler = Sampler::new().with_seed(7);
    let wave = sampler.sample(&spawn_points, 12, Some(&["roof"][..]))?;
    println!("wave spawns (roof excluded): {wave:?}");

    let capped = sampler
        .with_policy(RefillPolicy::Cap)
        .sample(&spawn_points, 12, None)?;
    println!("one pass only:                {capped:?}");

    let targets = vec![
        PositionedItem::new("drone", Vec3::new(4.0, 0.0, 3.0)),
        PositionedItem::new("turret", Vec3::new(-1.0, 0.0, 1.0)),
        PositionedItem::new("crate", Vec3::new(10.0, 2.0, -7.0)),
        PositionedItem::new("sentry", Vec3::new(0.0, 1.0, -2.0)),
    ];
    let player = Vec3::ZERO;
    let locked = nearest_k_euclidean(&targets, &player, 2)?;
    println!("locked targets: {locked:?}");

    let aim = point_along(player, Vec3::new(1.0, 0.0, 1.0), 5.0);
    println!("aim point 5m ahead: {aim}");
    println!("recoil clamped: {}", clamp_symmetric(Vec3::new(0.4, -2.5, 1.2), 1.0));

    Ok(())
}
