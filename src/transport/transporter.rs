use log::info;

use super::error::TransportError;
use super::location::{LocationId, RouteMap};

/// A vehicle that moves liquid cargo between locations on the map
pub trait Transporter: Send + Sync {
    fn name(&self) -> &str;

    fn max_load_weight(&self) -> u32;

    fn cost_per_kilometre(&self) -> u32;

    fn tank_capacity_litres(&self) -> u32;

    fn current_location(&self) -> &LocationId;

    fn relocate(&mut self, destination: LocationId);

    /// What it would cost to travel to the destination, without moving.
    /// Mode-specific preconditions (overland reachability and the like)
    /// are checked here.
    fn route_cost(&self, destination: &LocationId, map: &RouteMap) -> Result<f64, TransportError>;

    /// Travel to the destination and return the cost of the trip
    fn go_to(&mut self, destination: &LocationId, map: &RouteMap) -> Result<f64, TransportError> {
        let cost = self.route_cost(destination, map)?;
        info!(
            "{} travels {} -> {} for {:.2}",
            self.name(),
            self.current_location(),
            destination,
            cost
        );
        self.relocate(destination.clone());
        Ok(cost)
    }
}

/// Base liquid cargo vehicle. Travels in a straight line and carries no
/// mode restriction, which also covers barges and the like.
pub struct LiquidCargoTransporter {
    name: String,
    max_load_weight: u32,
    cost_per_kilometre: u32,
    tank_capacity_litres: u32,
    current_location: LocationId,
}

impl LiquidCargoTransporter {
    pub fn new(
        name: impl Into<String>,
        max_load_weight: u32,
        cost_per_kilometre: u32,
        tank_capacity_litres: u32,
        current_location: impl Into<LocationId>,
    ) -> Self {
        Self {
            name: name.into(),
            max_load_weight,
            cost_per_kilometre,
            tank_capacity_litres,
            current_location: current_location.into(),
        }
    }
}

impl Transporter for LiquidCargoTransporter {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_load_weight(&self) -> u32 {
        self.max_load_weight
    }

    fn cost_per_kilometre(&self) -> u32 {
        self.cost_per_kilometre
    }

    fn tank_capacity_litres(&self) -> u32 {
        self.tank_capacity_litres
    }

    fn current_location(&self) -> &LocationId {
        &self.current_location
    }

    fn relocate(&mut self, destination: LocationId) {
        self.current_location = destination;
    }

    fn route_cost(&self, destination: &LocationId, map: &RouteMap) -> Result<f64, TransportError> {
        let from = map
            .location(&self.current_location)
            .ok_or_else(|| TransportError::UnknownLocation(self.current_location.clone()))?;
        let to = map
            .location(destination)
            .ok_or_else(|| TransportError::UnknownLocation(destination.clone()))?;
        Ok(from.distance_to(to) * f64::from(self.cost_per_kilometre))
    }
}

/// A truck carrying liquid cargo. Trucks only travel on roads, so the
/// destination must be reachable overland before the base vehicle gets to
/// move anywhere.
pub struct TankTruck {
    inner: LiquidCargoTransporter,
}

impl TankTruck {
    pub fn new(
        name: impl Into<String>,
        max_load_weight: u32,
        cost_per_kilometre: u32,
        tank_capacity_litres: u32,
        current_location: impl Into<LocationId>,
    ) -> Self {
        Self {
            inner: LiquidCargoTransporter::new(
                name,
                max_load_weight,
                cost_per_kilometre,
                tank_capacity_litres,
                current_location,
            ),
        }
    }
}

impl Transporter for TankTruck {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn max_load_weight(&self) -> u32 {
        self.inner.max_load_weight()
    }

    fn cost_per_kilometre(&self) -> u32 {
        self.inner.cost_per_kilometre()
    }

    fn tank_capacity_litres(&self) -> u32 {
        self.inner.tank_capacity_litres()
    }

    fn current_location(&self) -> &LocationId {
        self.inner.current_location()
    }

    fn relocate(&mut self, destination: LocationId) {
        self.inner.relocate(destination);
    }

    fn route_cost(&self, destination: &LocationId, map: &RouteMap) -> Result<f64, TransportError> {
        if !map.contains(destination) {
            return Err(TransportError::UnknownLocation(destination.clone()));
        }
        if !map.reachable_overland(self.inner.current_location(), destination) {
            return Err(TransportError::UnreachableByTransporter {
                reason: "Trucks cannot cross oceans".to_string(),
                transporter: self.name().to_string(),
                destination: destination.clone(),
            });
        }
        self.inner.route_cost(destination, map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::location::Location;

    fn coastal_map() -> RouteMap {
        let mut map = RouteMap::new();
        map.add_location(Location::new("depot", 0.0, 0.0));
        map.add_location(Location::new("town", 30.0, 40.0));
        map.add_location(Location::new("island", 5.0, 12.0));
        map.add_overland_route("depot", "town").unwrap();
        map
    }

    #[test]
    fn test_base_cost_is_distance_times_rate() {
        let map = coastal_map();
        let mut barge = LiquidCargoTransporter::new("barge", 8000, 3, 20000, "depot");
        let cost = barge.go_to(&"town".to_string(), &map).unwrap();
        assert_eq!(cost, 150.0);
        assert_eq!(barge.current_location(), "town");
    }

    #[test]
    fn test_truck_refuses_offshore_destination() {
        let map = coastal_map();
        let mut truck = TankTruck::new("truck-1", 5000, 2, 10000, "depot");
        let result = truck.go_to(&"island".to_string(), &map);
        assert!(matches!(
            result,
            Err(TransportError::UnreachableByTransporter { .. })
        ));
        // The precondition failed, so the truck must not have moved
        assert_eq!(truck.current_location(), "depot");
    }

    #[test]
    fn test_truck_reports_unknown_destination() {
        let map = coastal_map();
        let mut truck = TankTruck::new("truck-1", 5000, 2, 10000, "depot");
        let result = truck.go_to(&"atlantis".to_string(), &map);
        assert!(matches!(result, Err(TransportError::UnknownLocation(_))));
    }
}
