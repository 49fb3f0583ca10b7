use std::io;

use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

use townroute::{
    RouteError, TownGrid, config, input,
    render::{render_grid, render_overlay, render_path},
    router::plan_route,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = config::parse()?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout().lock();

    let size = match cfg.size {
        Some(size) => size,
        None => input::read_grid_size(&mut reader, &mut writer)?,
    };

    let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());
    info!("generating {size}x{size} town with seed {seed}");
    let town = TownGrid::random(size, &mut StdRng::seed_from_u64(seed))?;

    let importance = match cfg.importance {
        Some(importance) => importance,
        None => input::read_importance(&mut reader, &mut writer)?,
    };
    drop(writer);

    println!("\nGenerated Town Layout:");
    print!("{}", render_grid(&town));

    match plan_route(&town, &importance) {
        Ok(Some(plan)) => {
            println!("\nBest Route to Most Important Location:");
            println!("{}", render_path(&plan.path));
            println!(
                "Destination: {} at {} (weight {}), total cost {}",
                plan.target.label, plan.target.cell, plan.target.weight, plan.cost
            );
            if cfg.overlay {
                println!("\nTown Grid with Bus Route:");
                print!("{}", render_overlay(&town, &plan.path));
            }
        }
        Ok(None) => println!("\nNo important location found."),
        Err(RouteError::Unreachable(cell)) => {
            println!("\nThe most important location at {cell} cannot be reached from the depot.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
