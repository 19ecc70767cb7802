pub mod barbecue;
pub mod transport;

// Re-export commonly used types
pub use crate::barbecue::config::BbqConfig;
pub use crate::barbecue::grill::{Barbecue, ChaoticGrill, GrillAction, GrillEvent, ParticipantId};
pub use crate::barbecue::ordered::OrderedGrill;
pub use crate::barbecue::simulation::{BbqReport, BbqSimulation};
pub use crate::transport::error::TransportError;
pub use crate::transport::fleet::{DeliveryEstimate, DeliveryOrder, DispatchReceipt, Fleet};
pub use crate::transport::location::{Location, LocationId, RouteMap};
pub use crate::transport::transporter::{LiquidCargoTransporter, TankTruck, Transporter};
