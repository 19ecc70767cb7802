use log::{info, warn};
use rayon::prelude::*;
use uuid::Uuid;

use super::error::TransportError;
use super::location::{LocationId, RouteMap};
use super::transporter::Transporter;

/// A delivery request against the fleet
#[derive(Debug, Clone)]
pub struct DeliveryOrder {
    pub id: Uuid,
    pub destination: LocationId,
    pub load_weight: u32,
    pub volume_litres: u32,
}

impl DeliveryOrder {
    pub fn new(destination: impl Into<LocationId>, load_weight: u32, volume_litres: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            destination: destination.into(),
            load_weight,
            volume_litres,
        }
    }
}

/// What one transporter would charge for a destination, or why it cannot go
#[derive(Debug)]
pub struct DeliveryEstimate {
    pub transporter: String,
    pub outcome: Result<f64, TransportError>,
}

/// Receipt for a dispatched delivery
#[derive(Debug)]
pub struct DispatchReceipt {
    pub order_id: Uuid,
    pub transporter: String,
    pub cost: f64,
}

/// The available transporters, dispatched cheapest-first
#[derive(Default)]
pub struct Fleet {
    transporters: Vec<Box<dyn Transporter>>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, transporter: Box<dyn Transporter>) {
        self.transporters.push(transporter);
    }

    pub fn len(&self) -> usize {
        self.transporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transporters.is_empty()
    }

    /// Quote the whole fleet against one destination, in parallel
    pub fn estimate(&self, map: &RouteMap, destination: &LocationId) -> Vec<DeliveryEstimate> {
        self.transporters
            .par_iter()
            .map(|transporter| DeliveryEstimate {
                transporter: transporter.name().to_string(),
                outcome: transporter.route_cost(destination, map),
            })
            .collect()
    }

    /// Send the cheapest transporter that can carry the order and reach the
    /// destination. Transporters that fail their own preconditions are
    /// skipped, not reported.
    pub fn dispatch(
        &mut self,
        map: &RouteMap,
        order: &DeliveryOrder,
    ) -> Result<DispatchReceipt, TransportError> {
        let mut best: Option<(usize, f64)> = None;
        for (index, transporter) in self.transporters.iter().enumerate() {
            if transporter.max_load_weight() < order.load_weight
                || transporter.tank_capacity_litres() < order.volume_litres
            {
                continue;
            }
            match transporter.route_cost(&order.destination, map) {
                Ok(cost) => {
                    if best.map_or(true, |(_, c)| cost < c) {
                        best = Some((index, cost));
                    }
                }
                Err(e) => warn!("{} skipped for order {}: {}", transporter.name(), order.id, e),
            }
        }

        let Some((index, _)) = best else {
            return Err(TransportError::NoTransporterAvailable {
                destination: order.destination.clone(),
                load_weight: order.load_weight,
            });
        };

        let transporter = &mut self.transporters[index];
        let cost = transporter.go_to(&order.destination, map)?;
        info!(
            "Order {} delivered by {} for {:.2}",
            order.id,
            transporter.name(),
            cost
        );

        Ok(DispatchReceipt {
            order_id: order.id,
            transporter: transporter.name().to_string(),
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::location::Location;
    use crate::transport::transporter::{LiquidCargoTransporter, TankTruck};

    fn harbor_map() -> RouteMap {
        let mut map = RouteMap::new();
        map.add_location(Location::new("depot", 0.0, 0.0));
        map.add_location(Location::new("venue", 30.0, 40.0));
        map.add_location(Location::new("island", 60.0, 80.0));
        map.add_overland_route("depot", "venue").unwrap();
        map
    }

    fn mixed_fleet() -> Fleet {
        let mut fleet = Fleet::new();
        fleet.add(Box::new(TankTruck::new("truck-1", 5000, 2, 10000, "depot")));
        fleet.add(Box::new(LiquidCargoTransporter::new(
            "barge", 8000, 3, 20000, "depot",
        )));
        fleet
    }

    #[test]
    fn test_estimate_covers_every_transporter() {
        let map = harbor_map();
        let fleet = mixed_fleet();
        let estimates = fleet.estimate(&map, &"island".to_string());
        assert_eq!(estimates.len(), 2);

        let truck = estimates.iter().find(|e| e.transporter == "truck-1").unwrap();
        assert!(truck.outcome.is_err());
        let barge = estimates.iter().find(|e| e.transporter == "barge").unwrap();
        assert!(barge.outcome.is_ok());
    }

    #[test]
    fn test_dispatch_picks_cheapest_capable_transporter() {
        let map = harbor_map();
        let mut fleet = mixed_fleet();
        // Both can reach the venue, the truck is cheaper per kilometre
        let receipt = fleet
            .dispatch(&map, &DeliveryOrder::new("venue", 1000, 2000))
            .unwrap();
        assert_eq!(receipt.transporter, "truck-1");
        assert_eq!(receipt.cost, 100.0);
    }

    #[test]
    fn test_dispatch_falls_back_to_barge_for_offshore_orders() {
        let map = harbor_map();
        let mut fleet = mixed_fleet();
        let receipt = fleet
            .dispatch(&map, &DeliveryOrder::new("island", 1000, 2000))
            .unwrap();
        assert_eq!(receipt.transporter, "barge");
    }

    #[test]
    fn test_dispatch_fails_when_nobody_can_deliver() {
        let map = harbor_map();
        let mut fleet = mixed_fleet();
        let result = fleet.dispatch(&map, &DeliveryOrder::new("venue", 50000, 2000));
        assert!(matches!(
            result,
            Err(TransportError::NoTransporterAvailable { .. })
        ));
    }
}
