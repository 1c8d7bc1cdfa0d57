// Chart service - Use case for rebuilding chart specifications per selector
use crate::application::charts;
use crate::application::dataset::DatasetStore;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// A chart rebuild failed for one request. The response for that request
/// fails; the process keeps serving. There is no retry.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode chart specification: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Both bar chart specifications, rebuilt together on the bar selector's
/// change.
#[derive(Debug, Clone, Serialize)]
pub struct AccessCharts {
    pub electricity: Value,
    pub clean_fuels: Value,
}

/// Runs the filter-then-build pipeline bound to each selector. Holds the
/// dataset behind `Arc`; every method is a pure function of the selected
/// year.
#[derive(Clone)]
pub struct ChartService {
    store: Arc<DatasetStore>,
}

impl ChartService {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    /// Bar selector pipeline: both access bar charts for one year.
    pub fn access_charts(&self, year: i32) -> Result<AccessCharts, RenderError> {
        let rows = self.store.filter_by_year(year);
        let colors = self.store.entity_colors();
        Ok(AccessCharts {
            electricity: serde_json::to_value(charts::electricity_access_chart(&rows, colors))?,
            clean_fuels: serde_json::to_value(charts::clean_fuels_chart(&rows, colors))?,
        })
    }

    /// Slider pipeline: the 3D generation-mix scatter for one year.
    pub fn generation_mix(&self, year: i32) -> Result<Value, RenderError> {
        let rows = self.store.filter_by_year(year);
        Ok(serde_json::to_value(charts::generation_mix_chart(
            &rows,
            self.store.entity_colors(),
        ))?)
    }

    /// Geo selector pipeline: the CO2/GDP bubble map for one year.
    pub fn emissions_map(&self, year: i32) -> Result<Value, RenderError> {
        let rows = self.store.filter_by_year(year);
        Ok(serde_json::to_value(charts::emissions_map(&rows, year))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::observation::Observation;

    fn service(rows: Vec<Observation>) -> ChartService {
        ChartService::new(Arc::new(DatasetStore::new(rows)))
    }

    #[test]
    fn test_bar_selector_end_to_end() {
        let svc = service(vec![
            Observation {
                entity: "A".to_string(),
                year: 2010,
                access_to_electricity: Some(50.0),
                ..Observation::default()
            },
            Observation {
                entity: "B".to_string(),
                year: 2010,
                access_to_electricity: Some(80.0),
                ..Observation::default()
            },
        ]);

        let charts = svc.access_charts(2010).unwrap();
        let traces = charts.electricity["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["x"], serde_json::json!(["A"]));
        assert_eq!(traces[0]["y"], serde_json::json!([50.0]));
        assert_eq!(traces[1]["x"], serde_json::json!(["B"]));
        assert_eq!(traces[1]["y"], serde_json::json!([80.0]));

        let empty = svc.access_charts(2011).unwrap();
        assert!(empty.electricity["data"].as_array().unwrap().is_empty());
        assert!(empty.clean_fuels["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_geo_selector_end_to_end() {
        let svc = service(vec![Observation {
            entity: "A".to_string(),
            year: 2015,
            co2_emissions: None,
            gdp_per_capita: Some(5000.0),
            latitude: Some(10.0),
            longitude: Some(20.0),
            ..Observation::default()
        }]);

        let spec = svc.emissions_map(2015).unwrap();
        let marker = &spec["data"][0]["marker"];
        assert_eq!(marker["size"], serde_json::json!([0.0]));
        assert_eq!(marker["color"], serde_json::json!([5000.0]));
        assert_eq!(spec["layout"]["title"]["text"], "CO2 Emissions in 2015");
    }
}
