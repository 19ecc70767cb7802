use bbqsim::{
    DeliveryOrder, Fleet, LiquidCargoTransporter, Location, RouteMap, TankTruck, Transporter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("🚚 Starting Supply Run");

    // The venue sits on the mainland, the campsite is an offshore island
    let mut map = RouteMap::new();
    map.add_location(Location::new("depot", 0.0, 0.0));
    map.add_location(Location::new("riverside_park", 12.0, 5.0));
    map.add_location(Location::new("ferry_terminal", 20.0, 0.0));
    map.add_location(Location::new("harbor_island", 28.0, 21.0));
    map.add_overland_route("depot", "riverside_park")?;
    map.add_overland_route("depot", "ferry_terminal")?;
    map.add_overland_route("riverside_park", "ferry_terminal")?;

    let mut fleet = Fleet::new();
    fleet.add(Box::new(TankTruck::new("truck-1", 5000, 2, 10000, "depot")));
    fleet.add(Box::new(TankTruck::new("truck-2", 3000, 1, 6000, "depot")));
    fleet.add(Box::new(LiquidCargoTransporter::new(
        "barge",
        12000,
        4,
        30000,
        "ferry_terminal",
    )));
    println!("Fleet size: {}", fleet.len());

    // A truck on its own cannot make the island trip
    let mut lone_truck = TankTruck::new("truck-3", 5000, 2, 10000, "depot");
    match lone_truck.go_to(&"harbor_island".to_string(), &map) {
        Ok(cost) => println!("truck-3 made it for {:.2}?!", cost),
        Err(e) => println!("As expected: {}", e),
    }

    for destination in ["riverside_park", "harbor_island"] {
        println!("\nQuotes for {}:", destination);
        for estimate in fleet.estimate(&map, &destination.to_string()) {
            match estimate.outcome {
                Ok(cost) => println!("  {}: {:.2}", estimate.transporter, cost),
                Err(e) => println!("  {}: {}", estimate.transporter, e),
            }
        }
    }

    let orders = vec![
        DeliveryOrder::new("riverside_park", 800, 1200), // lemonade for the guests
        DeliveryOrder::new("harbor_island", 400, 900),   // propane for the campsite grill
    ];

    println!();
    for order in &orders {
        match fleet.dispatch(&map, order) {
            Ok(receipt) => println!(
                "✅ {} -> {} by {} for {:.2}",
                receipt.order_id, order.destination, receipt.transporter, receipt.cost
            ),
            Err(e) => println!("❌ {} undeliverable: {}", order.id, e),
        }
    }

    Ok(())
}
