use std::error::Error;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;

/// Simple pseudo-random number generator (xorshift)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform value in `[lo, hi)`
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (self.next_u64() as f64 / u64::MAX as f64) * (hi - lo)
    }
}

/// One CSV row. Attributes stay text so malformed cells can be written.
#[derive(Serialize)]
struct RegionRow {
    id: String,
    median_age: String,
    deaths_per_mil: String,
}

impl RegionRow {
    fn new(
        id: impl Into<String>,
        median_age: impl Into<String>,
        deaths: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            median_age: median_age.into(),
            deaths_per_mil: deaths.into(),
        }
    }
}

fn write_regions(path: &Path, rows: &[RegionRow]) -> Result<(), Box<dyn Error>> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Regions with spread-out values and one row that cannot be parsed
fn sample_rows(count: usize, seed: u64) -> Vec<RegionRow> {
    let mut rng = SimpleRng::new(seed);
    let mut rows: Vec<RegionRow> = (1..=count)
        .map(|i| {
            // Sum of two draws gives a rough bell shape
            let age = rng.range(15.0, 23.0) + rng.range(15.0, 23.0);
            let deaths = rng.range(20.0, 320.0).round();
            RegionRow::new(
                format!("Region {:02}", i),
                format!("{:.1}", age),
                deaths.to_string(),
            )
        })
        .collect();

    // Ids may contain the delimiter
    rows.push(RegionRow::new("Capital Region, North", "36.4", "88"));
    rows.push(RegionRow::new("Unsurveyed", "n/a", ""));
    rows
}

/// Regions sharing one value, for the zero-spread case
fn uniform_rows(count: usize) -> Vec<RegionRow> {
    (1..=count)
        .map(|i| RegionRow::new(format!("Flat {:02}", i), "40", "100"))
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| "test_data".to_string());
    let dir = Path::new(&dir);
    std::fs::create_dir_all(dir)?;

    write_regions(&dir.join("regions.csv"), &sample_rows(40, 2024))?;
    write_regions(&dir.join("uniform.csv"), &uniform_rows(6))?;

    println!("Generated: regions.csv, uniform.csv in {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_with_delimiter_are_quoted() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("regions.csv");
        write_regions(&path, &sample_rows(3, 7)).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r.len() == 3));

        let capital = &records[3];
        assert_eq!(&capital[0], "Capital Region, North");
        assert_eq!(&capital[1], "36.4");
        assert_eq!(&records[4][1], "n/a");
    }

    #[test]
    fn test_sample_rows_are_deterministic() {
        let first: Vec<String> = sample_rows(10, 2024).into_iter().map(|r| r.median_age).collect();
        let second: Vec<String> = sample_rows(10, 2024).into_iter().map(|r| r.median_age).collect();
        assert_eq!(first, second);
    }
}
