use thiserror::Error;

use super::location::LocationId;

/// Failure modes of the transport layer
#[derive(Debug, Error)]
pub enum TransportError {
    /// The destination cannot be reached with this transporter's mode of travel
    #[error("{reason}: {transporter} cannot reach '{destination}'")]
    UnreachableByTransporter {
        reason: String,
        transporter: String,
        destination: LocationId,
    },

    #[error("Unknown location '{0}'")]
    UnknownLocation(LocationId),

    #[error("No transporter in the fleet can deliver {load_weight} kg to '{destination}'")]
    NoTransporterAvailable {
        destination: LocationId,
        load_weight: u32,
    },
}
