pub mod error;
pub mod fleet;
pub mod location;
pub mod transporter;
