//! Common test utilities

use std::path::{Path, PathBuf};

/// Australian states and territories: (id, median age, deaths per million)
pub const AUSTRALIA: [(&str, f64, f64); 8] = [
    ("New South Wales", 38.7, 148.0),
    ("Victoria", 37.8, 302.0),
    ("Queensland", 37.8, 61.0),
    ("South Australia", 41.1, 88.0),
    ("Western Australia", 37.9, 42.0),
    ("Tasmania", 42.4, 95.0),
    ("Northern Territory", 33.3, 27.0),
    ("Australian Capital Territory", 35.7, 71.0),
];

/// Simple pseudo-random number generator (xorshift)
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
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
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (self.next_u64() as f64 / u64::MAX as f64) * (hi - lo)
    }
}

/// Write raw CSV text to `dir/name`
pub fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// CSV text for a list of fully valued regions
pub fn regions_csv(rows: &[(&str, f64, f64)]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["id", "median_age", "deaths_per_mil"])
        .unwrap();
    for (id, age, deaths) in rows {
        writer
            .write_record([id.to_string(), age.to_string(), deaths.to_string()])
            .unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

/// CSV text for `count` regions with random values
pub fn random_regions_csv(count: usize, seed: u64) -> String {
    let mut rng = SimpleRng::new(seed);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["id", "median_age", "deaths_per_mil"])
        .unwrap();
    for i in 0..count {
        let age = rng.range(25.0, 50.0);
        let deaths = rng.range(0.0, 500.0);
        writer
            .write_record([
                format!("r{}", i),
                format!("{:.2}", age),
                format!("{:.1}", deaths),
            ])
            .unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

/// Lines of one `[Section]` of the report, without the header
pub fn section<'a>(stdout: &'a str, header: &str) -> Vec<&'a str> {
    stdout
        .lines()
        .skip_while(|line| line.trim() != header)
        .skip(1)
        .take_while(|line| !line.trim().is_empty())
        .collect()
}
