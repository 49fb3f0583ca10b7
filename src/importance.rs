use crate::collections::FxIndexMap;
use crate::errors::RouteError;


/// Weight of any location type the user did not rank
pub const DEFAULT_WEIGHT: f64 = 1.0;


/// User ranking of location types
/// Higher weight = more attractive to drive through
/// Entries keep their insertion order, which breaks ties in `most_important`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportanceMap {
    weights: FxIndexMap<String, f64>,
}

impl ImportanceMap {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite a location weight
    /// Labels are trimmed, weights must be finite
    pub fn insert(&mut self, label: &str, weight: f64) -> Result<(), RouteError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(RouteError::EmptyLabel);
        }
        if !weight.is_finite() {
            return Err(RouteError::InvalidWeight {
                label: label.to_string(),
                value: weight.to_string(),
            });
        }

        self.weights.insert(label.to_string(), weight);
        Ok(())
    }

    /// Stored weight, DEFAULT_WEIGHT for unlisted labels
    pub fn weight(&self, label: &str) -> f64 {
        self.weights.get(label).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Cost of stepping onto a cell with this label
    /// Negated so the min-cost search prefers important places
    pub fn edge_cost(&self, label: &str) -> f64 {
        -self.weight(label)
    }

    /// Label with the highest weight, first inserted wins a tie
    pub fn most_important(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (label, &weight) in &self.weights {
            match best {
                Some((_, w)) if w >= weight => {}
                _ => best = Some((label.as_str(), weight)),
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Parse a single `Label=weight` entry
    pub fn parse_entry(entry: &str) -> Result<(String, f64), RouteError> {
        let Some((label, value)) = entry.rsplit_once('=') else {
            return Err(RouteError::InvalidWeight {
                label: entry.trim().to_string(),
                value: String::new(),
            });
        };

        let label = label.trim();
        if label.is_empty() {
            return Err(RouteError::EmptyLabel);
        }
        let weight = parse_weight(label, value)?;
        Ok((label.to_string(), weight))
    }

    /// Build from `Label=weight` entries, later entries overwrite earlier ones
    pub fn from_entries<I, S>(entries: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for entry in entries {
            let (label, weight) = Self::parse_entry(entry.as_ref())?;
            map.insert(&label, weight)?;
        }
        Ok(map)
    }
}

/// Parse a weight typed by the user
pub(crate) fn parse_weight(label: &str, value: &str) -> Result<f64, RouteError> {
    match value.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() => Ok(weight),
        _ => Err(RouteError::InvalidWeight {
            label: label.to_string(),
            value: value.trim().to_string(),
        }),
    }
}
