#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use startup_bust::{play_sweep, GameSession};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args.first().map_or("sim", String::as_str));
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new();
    session.set_up(&mut rng)?;

    let placements: serde_json::Map<String, serde_json::Value> = session
        .startups()
        .iter()
        .map(|s| (s.name().to_string(), json!(s.cells())))
        .collect();
    let summary = play_sweep(&mut session)?;

    let result = json!({
        "seed": seed,
        "placements": placements,
        "guesses": summary.guesses,
        "score": summary.score,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
