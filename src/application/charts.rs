// Chart builders - Pure functions from filtered rows to chart specifications
//
// Each builder is stateless and idempotent: identical input rows always
// produce a structurally identical specification. Rows are never
// aggregated; duplicate (Entity, Year) rows get one bar or marker each.
use crate::application::dataset::EntityColors;
use crate::domain::chart::{
    Axis, ChartSpec, ColorBar, Font, Geo, Layout, Legend, Margin, Marker, MarkerColor, MarkerSize,
    Projection, Scene, Title, Trace,
};
use crate::domain::observation::Observation;
use crate::domain::palette;
use std::collections::HashMap;

const SCATTER_MARKER_SIZE: f64 = 12.0;
const SCATTER_MARKER_OPACITY: f64 = 0.8;
const GEO_SIZE_MAX: f64 = 20.0;

/// Bar chart of electricity access (% of population), one bar per row,
/// colored by entity.
pub fn electricity_access_chart(rows: &[&Observation], colors: &EntityColors) -> ChartSpec {
    bar_chart(rows, colors, |o| o.access_to_electricity, "Access to electricity (% of population)")
}

/// Bar chart of clean cooking-fuel access, one bar per row, colored by
/// entity.
pub fn clean_fuels_chart(rows: &[&Observation], colors: &EntityColors) -> ChartSpec {
    bar_chart(rows, colors, |o| o.access_to_clean_fuels, "Access to clean fuels for cooking")
}

fn bar_chart(
    rows: &[&Observation],
    colors: &EntityColors,
    value: impl Fn(&Observation) -> Option<f64>,
    y_title: &str,
) -> ChartSpec {
    let data = group_by_entity(rows)
        .into_iter()
        .map(|(entity, group)| {
            Trace::bar(
                group.iter().map(|o| o.entity.clone()).collect(),
                group.iter().map(|&o| value(o)).collect(),
                entity.to_string(),
                colors.color_for(entity),
            )
        })
        .collect();

    let mut layout = Layout::dark();
    layout.xaxis = Some(Axis::titled("Entity"));
    layout.yaxis = Some(Axis::titled(y_title));
    ChartSpec { data, layout }
}

/// 3D scatter of the generation mix: one trace per distinct entity, with
/// fossil generation on x, renewable generation on y and the entity name
/// repeated on z.
pub fn generation_mix_chart(rows: &[&Observation], colors: &EntityColors) -> ChartSpec {
    let data = group_by_entity(rows)
        .into_iter()
        .map(|(entity, group)| Trace::Scatter3d {
            x: group.iter().map(|o| o.electricity_fossil).collect(),
            y: group.iter().map(|o| o.electricity_renewables).collect(),
            z: vec![entity.to_string(); group.len()],
            mode: "markers".to_string(),
            text: group.iter().map(|o| o.entity.clone()).collect(),
            name: entity.to_string(),
            marker: Marker {
                size: Some(MarkerSize::Fixed(SCATTER_MARKER_SIZE)),
                color: Some(MarkerColor::Uniform(colors.color_for(entity).to_string())),
                opacity: Some(SCATTER_MARKER_OPACITY),
                ..Marker::default()
            },
        })
        .collect();

    let mut layout = Layout::dark();
    layout.scene = Some(Scene {
        xaxis: Axis::titled("Electricity from fossil fuels (TWh)"),
        yaxis: Axis::titled("Electricity from renewables (TWh)"),
        zaxis: Axis::titled("Entity"),
    });
    layout.height = Some(700);
    layout.showlegend = Some(true);
    layout.legend = Some(Legend {
        orientation: "v".to_string(),
        yanchor: "top".to_string(),
        y: 1.0,
        xanchor: "left".to_string(),
        x: 1.05,
        bgcolor: palette::BACKGROUND.to_string(),
        font: Font {
            color: palette::TEXT.to_string(),
            size: Some(10),
        },
    });
    layout.margin = Some(Margin { l: 0, r: 0, b: 0, t: 0 });
    ChartSpec { data, layout }
}

/// Geographic bubble map: one marker per row at (latitude, longitude),
/// sized by CO2 emissions (null coerced to zero) and colored by GDP per
/// capita on a continuous scale.
pub fn emissions_map(rows: &[&Observation], year: i32) -> ChartSpec {
    let sizes: Vec<f64> = rows.iter().map(|o| o.co2_emissions.unwrap_or(0.0)).collect();
    // Area sizing: sizeref = 2 * max(size) / size_max^2
    let max_size = sizes.iter().copied().fold(0.0, f64::max);
    let sizeref = 2.0 * max_size / (GEO_SIZE_MAX * GEO_SIZE_MAX);

    let trace = Trace::Scattergeo {
        lat: rows.iter().map(|o| o.latitude).collect(),
        lon: rows.iter().map(|o| o.longitude).collect(),
        mode: "markers".to_string(),
        hovertext: rows.iter().map(|o| o.entity.clone()).collect(),
        marker: Marker {
            size: Some(MarkerSize::PerPoint(sizes)),
            sizemode: Some("area".to_string()),
            sizeref: Some(sizeref),
            color: Some(MarkerColor::PerPoint(
                rows.iter().map(|o| o.gdp_per_capita).collect(),
            )),
            colorscale: Some(palette::CONTINUOUS_SCALE.to_string()),
            showscale: Some(true),
            colorbar: Some(ColorBar {
                title: Title::new("gdp_per_capita"),
            }),
            opacity: None,
        },
    };

    let mut layout = Layout::dark();
    layout.title = Some(Title::new(format!("CO2 Emissions in {year}")));
    layout.geo = Some(Geo {
        projection: Projection {
            kind: "natural earth".to_string(),
        },
        bgcolor: palette::BACKGROUND.to_string(),
    });
    ChartSpec {
        data: vec![trace],
        layout,
    }
}

/// Groups rows by entity, preserving first-appearance order of entities
/// and input order of rows within each group.
fn group_by_entity<'a>(rows: &[&'a Observation]) -> Vec<(&'a str, Vec<&'a Observation>)> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Observation>> = HashMap::new();
    for row in rows {
        groups
            .entry(row.entity.as_str())
            .or_insert_with(|| {
                order.push(row.entity.as_str());
                Vec::new()
            })
            .push(row);
    }
    order
        .into_iter()
        .map(|e| (e, groups.remove(e).unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dataset::DatasetStore;

    fn store(rows: Vec<Observation>) -> DatasetStore {
        DatasetStore::new(rows)
    }

    fn obs(entity: &str, year: i32) -> Observation {
        Observation {
            entity: entity.to_string(),
            year,
            ..Observation::default()
        }
    }

    fn bar_values(spec: &ChartSpec) -> Vec<(String, Option<f64>)> {
        spec.data
            .iter()
            .flat_map(|t| match t {
                Trace::Bar { x, y, .. } => x.iter().cloned().zip(y.iter().copied()).collect::<Vec<_>>(),
                _ => panic!("expected bar trace"),
            })
            .collect()
    }

    #[test]
    fn test_one_bar_per_row_no_aggregation() {
        let rows = vec![
            Observation {
                access_to_electricity: Some(50.0),
                ..obs("A", 2010)
            },
            Observation {
                access_to_electricity: Some(80.0),
                ..obs("B", 2010)
            },
            // Duplicate (Entity, Year) row stays a separate bar.
            Observation {
                access_to_electricity: Some(60.0),
                ..obs("A", 2010)
            },
        ];
        let store = store(rows);
        let filtered = store.filter_by_year(2010);

        let spec = electricity_access_chart(&filtered, store.entity_colors());
        let bars = bar_values(&spec);
        assert_eq!(bars.len(), 3);
        assert_eq!(
            bars,
            vec![
                ("A".to_string(), Some(50.0)),
                ("A".to_string(), Some(60.0)),
                ("B".to_string(), Some(80.0)),
            ]
        );
    }

    #[test]
    fn test_bar_chart_empty_for_absent_year() {
        let store = store(vec![Observation {
            access_to_electricity: Some(50.0),
            ..obs("A", 2010)
        }]);
        let filtered = store.filter_by_year(2011);

        let spec = electricity_access_chart(&filtered, store.entity_colors());
        assert!(spec.data.is_empty());
    }

    #[test]
    fn test_generation_mix_one_trace_per_entity() {
        let rows = vec![
            Observation {
                electricity_fossil: Some(10.0),
                electricity_renewables: Some(5.0),
                ..obs("A", 2012)
            },
            Observation {
                electricity_fossil: Some(3.0),
                electricity_renewables: Some(7.0),
                ..obs("B", 2012)
            },
            Observation {
                electricity_fossil: Some(11.0),
                electricity_renewables: Some(6.0),
                ..obs("A", 2012)
            },
        ];
        let store = store(rows);
        let filtered = store.filter_by_year(2012);

        let spec = generation_mix_chart(&filtered, store.entity_colors());
        assert_eq!(spec.data.len(), 2);
        match &spec.data[0] {
            Trace::Scatter3d { x, z, name, .. } => {
                assert_eq!(name, "A");
                assert_eq!(x, &vec![Some(10.0), Some(11.0)]);
                assert_eq!(z, &vec!["A".to_string(), "A".to_string()]);
            }
            _ => panic!("expected scatter3d trace"),
        }
    }

    #[test]
    fn test_emissions_map_null_co2_sized_zero() {
        let rows = vec![
            Observation {
                co2_emissions: None,
                gdp_per_capita: Some(5000.0),
                latitude: Some(1.0),
                longitude: Some(2.0),
                ..obs("A", 2015)
            },
            Observation {
                co2_emissions: Some(120.5),
                gdp_per_capita: Some(900.0),
                latitude: Some(3.0),
                longitude: Some(4.0),
                ..obs("B", 2015)
            },
        ];
        let store = store(rows);
        let filtered = store.filter_by_year(2015);

        let spec = emissions_map(&filtered, 2015);
        assert_eq!(spec.data.len(), 1);
        match &spec.data[0] {
            Trace::Scattergeo { marker, .. } => {
                assert_eq!(
                    marker.size,
                    Some(MarkerSize::PerPoint(vec![0.0, 120.5]))
                );
                assert_eq!(
                    marker.color,
                    Some(MarkerColor::PerPoint(vec![Some(5000.0), Some(900.0)]))
                );
            }
            _ => panic!("expected scattergeo trace"),
        }
        assert_eq!(
            spec.layout.title.as_ref().map(|t| t.text.as_str()),
            Some("CO2 Emissions in 2015")
        );
    }

    #[test]
    fn test_builders_are_idempotent() {
        let rows = vec![
            Observation {
                access_to_electricity: Some(42.0),
                electricity_fossil: Some(1.0),
                electricity_renewables: Some(2.0),
                co2_emissions: Some(3.0),
                latitude: Some(4.0),
                longitude: Some(5.0),
                ..obs("A", 2010)
            },
            Observation {
                access_to_electricity: Some(24.0),
                ..obs("B", 2010)
            },
        ];
        let store = store(rows);
        let filtered = store.filter_by_year(2010);
        let colors = store.entity_colors();

        let first = serde_json::to_value(electricity_access_chart(&filtered, colors)).unwrap();
        let second = serde_json::to_value(electricity_access_chart(&filtered, colors)).unwrap();
        assert_eq!(first, second);

        let first = serde_json::to_value(generation_mix_chart(&filtered, colors)).unwrap();
        let second = serde_json::to_value(generation_mix_chart(&filtered, colors)).unwrap();
        assert_eq!(first, second);

        let first = serde_json::to_value(emissions_map(&filtered, 2010)).unwrap();
        let second = serde_json::to_value(emissions_map(&filtered, 2010)).unwrap();
        assert_eq!(first, second);
    }
}
