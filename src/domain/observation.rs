// Observation domain model - one row of the sustainable-energy dataset
use serde::Deserialize;

/// Columns the dashboard consumes. Loading fails if any of these is absent
/// from the input file; columns outside this list are ignored.
pub const EXPECTED_COLUMNS: &[&str] = &[
    "Entity",
    "Year",
    "Access to electricity (% of population)",
    "Access to clean fuels for cooking",
    "Electricity from fossil fuels (TWh)",
    "Electricity from nuclear (TWh)",
    "Electricity from renewables (TWh)",
    "Value_co2_emissions_kt_by_country",
    "gdp_per_capita",
    "Latitude",
    "Longitude",
];

/// One country-year observation. (Entity, Year) pairs are treated as the
/// natural grouping key but are not guaranteed unique; duplicate rows are
/// never merged.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Observation {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Access to electricity (% of population)")]
    pub access_to_electricity: Option<f64>,
    #[serde(rename = "Access to clean fuels for cooking")]
    pub access_to_clean_fuels: Option<f64>,
    #[serde(rename = "Electricity from fossil fuels (TWh)")]
    pub electricity_fossil: Option<f64>,
    #[serde(rename = "Electricity from nuclear (TWh)")]
    pub electricity_nuclear: Option<f64>,
    #[serde(rename = "Electricity from renewables (TWh)")]
    pub electricity_renewables: Option<f64>,
    #[serde(rename = "Value_co2_emissions_kt_by_country")]
    pub co2_emissions: Option<f64>,
    #[serde(rename = "gdp_per_capita")]
    pub gdp_per_capita: Option<f64>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
}
