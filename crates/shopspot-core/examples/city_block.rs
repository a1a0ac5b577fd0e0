//! City block example: a handful of shops on a 6x5 grid, three walking
//! distances.
//!
//! Builds the simulator, runs every query, and prints each answer in the
//! 1-based form a user would read.
//!
//! Run with: `cargo run -p shopspot-core --example city_block`

use shopspot_core::position::GridPosition;
use shopspot_core::simulator::Simulator;

fn main() {
    // Shops are 0-based internally.
    let shops = [
        GridPosition::new(0, 0),
        GridPosition::new(2, 1),
        GridPosition::new(2, 1),
        GridPosition::new(5, 4),
        GridPosition::new(3, 3),
    ];
    let queries = vec![0, 1, 2, 4];

    let sim = match Simulator::new(6, 5, &shops, queries) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("invalid city: {e}");
            return;
        }
    };

    println!(
        "{}x{} city, {} shops, {} empty cells",
        sim.grid().width(),
        sim.grid().height(),
        sim.grid().shop_count(),
        sim.grid().eligible_count()
    );

    let one_based = GridPosition::new(1, 1);
    for (radius, best) in sim.queries().iter().zip(sim.run()) {
        println!(
            "walk {radius:>2}: {} shops reachable from {}",
            best.shop_count,
            best.position + one_based
        );
    }
}
