// Application layer - Use cases over the loaded dataset
pub mod chart_service;
pub mod charts;
pub mod dataset;
