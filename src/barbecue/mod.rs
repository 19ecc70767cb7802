pub mod config;
pub mod grill;
pub mod ordered;
pub mod participant;
pub mod simulation;
