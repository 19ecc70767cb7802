use bbqsim::{BbqConfig, BbqSimulation, GrillEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger with timestamps
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("🍖 Starting Barbecue Simulation");

    let config = BbqConfig::default()
        .with_guest_count(4)
        .with_rounds(3)
        .with_turn_duration(5.0, 1.5);

    println!("Configuration:");
    println!("  Guests: {}", config.guest_count);
    println!("  Rounds: {}", config.rounds);
    println!(
        "  Turn duration: mean={:.1}ms, std_dev={:.1}ms",
        config.turn_duration_mean_ms, config.turn_duration_std_dev_ms
    );
    println!("  Random seed: {}", config.random_seed);
    println!();

    let simulation = BbqSimulation::new(config)?;
    println!("Turn rotation: {}", simulation.rotation().join(" -> "));

    let report = simulation.run()?;

    println!("\n✅ Barbecue finished!");
    println!("Turns taken: {}", report.turns_taken);
    println!("Collisions: {}", report.collisions);
    println!("Grill log:");
    for action in &report.history {
        let what = match action.event {
            GrillEvent::Approached => "approached the grill",
            GrillEvent::SteppedAway => "stepped away",
            GrillEvent::Designated => "is next in line",
        };
        println!("  {} {}", action.participant, what);
    }

    Ok(())
}
