//! Solves the four-city reference instance and prints the tour.
//!
//! Run with `RUST_LOG=debug` to see solver progress.

use u_held_karp::distance::DistanceMatrix;
use u_held_karp::exact::held_karp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let labels = ['A', 'B', 'C', 'D'];
    let dm = DistanceMatrix::from_rows(&[
        [0, 10, 15, 20],
        [10, 0, 35, 25],
        [15, 35, 0, 30],
        [20, 25, 30, 0],
    ])?;

    let tour = held_karp(&dm)?;
    let named: Vec<String> = tour.path().iter().map(|&i| labels[i].to_string()).collect();

    println!("cost: {}", tour.cost());
    println!("tour: {}", named.join(" -> "));
    println!("{}", serde_json::to_string_pretty(&tour)?);
    Ok(())
}
