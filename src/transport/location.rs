use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

pub type LocationId = String;

/// A named point on the map, with planar coordinates in kilometres
#[derive(Debug, Clone)]
pub struct Location {
    pub id: LocationId,
    pub x_km: f64,
    pub y_km: f64,
}

impl Location {
    pub fn new(id: impl Into<LocationId>, x_km: f64, y_km: f64) -> Self {
        Self {
            id: id.into(),
            x_km,
            y_km,
        }
    }

    /// Straight-line distance to another location, in kilometres
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x_km - other.x_km;
        let dy = self.y_km - other.y_km;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Frontier entry for the reachability search, ordered by remaining
/// straight-line distance to the goal
#[derive(Debug)]
struct Candidate {
    distance_to_goal: f64,
    location: LocationId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other.distance_to_goal.total_cmp(&self.distance_to_goal)
    }
}

/// Registry of locations plus the overland road links between them
#[derive(Debug, Default)]
pub struct RouteMap {
    locations: HashMap<LocationId, Location>,
    overland: HashMap<LocationId, Vec<LocationId>>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_location(&mut self, location: Location) {
        self.locations.insert(location.id.clone(), location);
    }

    /// Register an overland road between two known locations (both directions)
    pub fn add_overland_route(&mut self, a: &str, b: &str) -> Result<(), String> {
        if !self.locations.contains_key(a) {
            return Err(format!("Location '{}' not found", a));
        }
        if !self.locations.contains_key(b) {
            return Err(format!("Location '{}' not found", b));
        }

        self.overland
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self.overland
            .entry(b.to_string())
            .or_default()
            .push(a.to_string());

        Ok(())
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Whether a road route exists between the two locations. Greedy
    /// best-first search: the frontier is a min-heap keyed on straight-line
    /// distance to the goal, already-seen locations are skipped.
    pub fn reachable_overland(&self, from: &str, to: &str) -> bool {
        let (Some(start), Some(goal)) = (self.locations.get(from), self.locations.get(to)) else {
            return false;
        };
        if from == to {
            return true;
        }

        let mut visited = HashSet::new();
        let mut frontier = BinaryHeap::new();
        visited.insert(from.to_string());
        frontier.push(Candidate {
            distance_to_goal: start.distance_to(goal),
            location: from.to_string(),
        });

        while let Some(candidate) = frontier.pop() {
            if candidate.location == to {
                return true;
            }
            for next in self.overland.get(&candidate.location).into_iter().flatten() {
                if visited.insert(next.clone()) {
                    if let Some(location) = self.locations.get(next) {
                        frontier.push(Candidate {
                            distance_to_goal: location.distance_to(goal),
                            location: next.clone(),
                        });
                    }
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_map() -> RouteMap {
        let mut map = RouteMap::new();
        map.add_location(Location::new("depot", 0.0, 0.0));
        map.add_location(Location::new("town", 30.0, 40.0));
        map.add_location(Location::new("farm", 10.0, 0.0));
        map.add_location(Location::new("island", 100.0, 100.0));
        map.add_overland_route("depot", "farm").unwrap();
        map.add_overland_route("farm", "town").unwrap();
        map
    }

    #[test]
    fn test_distance_is_straight_line() {
        let a = Location::new("a", 0.0, 0.0);
        let b = Location::new("b", 30.0, 40.0);
        assert_eq!(a.distance_to(&b), 50.0);
    }

    #[test]
    fn test_route_requires_known_locations() {
        let mut map = RouteMap::new();
        map.add_location(Location::new("depot", 0.0, 0.0));
        assert!(map.add_overland_route("depot", "atlantis").is_err());
    }

    #[test]
    fn test_directly_connected_locations_are_reachable() {
        let map = triangle_map();
        assert!(map.reachable_overland("depot", "farm"));
        assert!(map.reachable_overland("farm", "depot"));
    }

    #[test]
    fn test_reachability_is_transitive() {
        let map = triangle_map();
        assert!(map.reachable_overland("depot", "town"));
    }

    #[test]
    fn test_disconnected_location_is_unreachable() {
        let map = triangle_map();
        assert!(!map.reachable_overland("depot", "island"));
    }

    #[test]
    fn test_location_is_reachable_from_itself() {
        let map = triangle_map();
        assert!(map.reachable_overland("island", "island"));
    }

    #[test]
    fn test_unknown_locations_are_unreachable() {
        let map = triangle_map();
        assert!(!map.reachable_overland("depot", "atlantis"));
        assert!(!map.reachable_overland("atlantis", "depot"));
    }
}
