// Domain layer - Core data models
pub mod chart;
pub mod observation;
pub mod palette;
