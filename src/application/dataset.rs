// Dataset store - Immutable in-memory table of observations
use crate::domain::observation::Observation;
use crate::domain::palette;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// The loaded dataset plus the indexes derived from it at construction:
/// the sorted set of distinct years and a stable entity color assignment.
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug)]
pub struct DatasetStore {
    rows: Vec<Observation>,
    years: Vec<i32>,
    colors: EntityColors,
}

impl DatasetStore {
    pub fn new(rows: Vec<Observation>) -> Self {
        let years: Vec<i32> = rows.iter().map(|o| o.year).collect::<BTreeSet<_>>().into_iter().collect();
        let colors = EntityColors::from_rows(&rows);
        Self { rows, years, colors }
    }

    /// All observations whose year equals the given value, in file order.
    /// A year with no observations yields an empty vec, not an error.
    pub fn filter_by_year(&self, year: i32) -> Vec<&Observation> {
        self.rows.iter().filter(|o| o.year == year).collect()
    }

    pub fn year_index(&self) -> YearIndex {
        let min = self.years.first().copied();
        let max = self.years.last().copied();
        YearIndex {
            years: self.years.clone(),
            bar_default: min,
            scatter_default: max,
            geo_default: min,
        }
    }

    pub fn entity_colors(&self) -> &EntityColors {
        &self.colors
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Legal selector values and the initial year for each selector widget.
#[derive(Debug, Clone, Serialize)]
pub struct YearIndex {
    pub years: Vec<i32>,
    pub bar_default: Option<i32>,
    pub scatter_default: Option<i32>,
    pub geo_default: Option<i32>,
}

/// Stable entity-to-color assignment: distinct entities are sorted and
/// mapped onto the categorical palette by index. The assignment depends
/// only on the full dataset, so an entity keeps its color across year
/// filters and re-renders.
#[derive(Debug, Clone)]
pub struct EntityColors {
    map: HashMap<String, &'static str>,
}

impl EntityColors {
    fn from_rows(rows: &[Observation]) -> Self {
        let entities: BTreeSet<&str> = rows.iter().map(|o| o.entity.as_str()).collect();
        let map = entities
            .into_iter()
            .enumerate()
            .map(|(i, e)| (e.to_string(), palette::ALPHABET[i % palette::ALPHABET.len()]))
            .collect();
        Self { map }
    }

    pub fn color_for(&self, entity: &str) -> &'static str {
        self.map.get(entity).copied().unwrap_or(palette::ALPHABET[0])
    }
}
