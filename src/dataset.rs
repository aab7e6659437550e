//! Region dataset loading

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::classify::ClassifyError;

/// Classification variable carried by every region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Variable {
    MedianAge,
    DeathsPerMil,
}

impl Variable {
    pub(crate) const ALL: [Variable; 2] = [Variable::MedianAge, Variable::DeathsPerMil];

    /// Column / selector name
    pub(crate) fn name(self) -> &'static str {
        match self {
            Variable::MedianAge => "median_age",
            Variable::DeathsPerMil => "deaths_per_mil",
        }
    }

    /// Axis label for charts and reports
    pub(crate) fn label(self) -> &'static str {
        match self {
            Variable::MedianAge => "median age",
            Variable::DeathsPerMil => "deaths per 1mil.",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variable {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ClassifyError::UnknownVariable(s.to_string()))
    }
}

/// One map region. Attributes that failed to parse are `None`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Observation {
    pub(crate) id: String,
    pub(crate) median_age: Option<f64>,
    pub(crate) deaths_per_mil: Option<f64>,
}

impl Observation {
    pub(crate) fn new(id: &str, median_age: Option<f64>, deaths_per_mil: Option<f64>) -> Self {
        Self {
            id: id.to_string(),
            median_age,
            deaths_per_mil,
        }
    }

    pub(crate) fn value(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::MedianAge => self.median_age,
            Variable::DeathsPerMil => self.deaths_per_mil,
        }
    }
}

/// Values of `variable` for every region that has one
pub(crate) fn values_of(regions: &[Observation], variable: Variable) -> Vec<f64> {
    regions.iter().filter_map(|r| r.value(variable)).collect()
}

/// Unrounded `(min, max)` of `variable`, `None` when no region has a value
pub(crate) fn extent(regions: &[Observation], variable: Variable) -> Option<(f64, f64)> {
    regions
        .iter()
        .filter_map(|r| r.value(variable))
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[derive(Deserialize)]
struct CsvRegion {
    id: String,
    #[serde(default)]
    median_age: Option<String>,
    #[serde(default)]
    deaths_per_mil: Option<String>,
}

fn parse_attribute(cell: Option<&str>) -> Option<f64> {
    cell.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl From<CsvRegion> for Observation {
    fn from(row: CsvRegion) -> Self {
        Observation {
            id: row.id.trim().to_string(),
            median_age: parse_attribute(row.median_age.as_deref()),
            deaths_per_mil: parse_attribute(row.deaths_per_mil.as_deref()),
        }
    }
}

/// Load the region registry from a CSV file with `id`, `median_age` and
/// `deaths_per_mil` columns
pub(crate) fn load_dataset(path: &Path) -> Result<Vec<Observation>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("Error opening dataset: {}", e))?;

    let mut regions = Vec::new();
    for (line, row) in reader.deserialize::<CsvRegion>().enumerate() {
        let row = row.map_err(|e| format!("Malformed row {}: {}", line + 2, e))?;
        regions.push(Observation::from(row));
    }

    if regions.is_empty() {
        return Err("Dataset contains no regions".to_string());
    }

    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_variable_round_trips_through_name() {
        for v in Variable::ALL {
            assert_eq!(v.name().parse::<Variable>().unwrap(), v);
        }
    }

    #[test]
    fn test_unknown_variable_is_rejected() {
        let err = "population".parse::<Variable>().unwrap_err();
        assert!(matches!(err, ClassifyError::UnknownVariable(ref s) if s == "population"));
    }

    #[test]
    fn test_load_dataset_parses_rows() {
        let file = write_csv("id,median_age,deaths_per_mil\nNSW,38.5,120\nVIC,37.9,98.25\n");
        let regions = load_dataset(file.path()).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0], Observation::new("NSW", Some(38.5), Some(120.0)));
        assert_eq!(regions[1].value(Variable::DeathsPerMil), Some(98.25));
    }

    #[test]
    fn test_malformed_cells_become_none() {
        let file = write_csv("id,median_age,deaths_per_mil\nA,n/a,10\nB,,inf\nC,41,\n");
        let regions = load_dataset(file.path()).unwrap();
        assert_eq!(regions[0].median_age, None);
        assert_eq!(regions[0].deaths_per_mil, Some(10.0));
        assert_eq!(regions[1].median_age, None);
        assert_eq!(regions[1].deaths_per_mil, None);
        assert_eq!(regions[2].median_age, Some(41.0));
        assert_eq!(regions[2].deaths_per_mil, None);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = write_csv("id,name,median_age,deaths_per_mil\nQLD,Queensland,37.5,77\n");
        let regions = load_dataset(file.path()).unwrap();
        assert_eq!(regions[0].median_age, Some(37.5));
    }

    #[test]
    fn test_empty_dataset_is_error() {
        let file = write_csv("id,median_age,deaths_per_mil\n");
        assert!(load_dataset(file.path()).is_err());
    }

    #[test]
    fn test_extent_skips_missing_values() {
        let regions = vec![
            Observation::new("a", Some(3.0), None),
            Observation::new("b", None, Some(1.0)),
            Observation::new("c", Some(-2.5), Some(4.0)),
        ];
        assert_eq!(extent(&regions, Variable::MedianAge), Some((-2.5, 3.0)));
        assert_eq!(values_of(&regions, Variable::DeathsPerMil), vec![1.0, 4.0]);
        assert_eq!(extent(&[], Variable::MedianAge), None);
    }
}
