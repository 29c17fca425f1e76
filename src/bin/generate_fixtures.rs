//! Writes the sample inputs the dashboard loads at startup: a synthetic
//! multi-demographic yearly rate table, and a forecast-model artifact fitted
//! to that table's yearly means.  Fitting happens here, at generation time;
//! the app itself only consumes the pre-fitted artifact.

use serde_json::json;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Ordinary least squares over (x, y) pairs: returns (intercept, slope,
/// residual standard deviation).
fn fit_trend(xs: &[f64], ys: &[f64]) -> (f64, f64, f64) {
    let n = xs.len() as f64;
    let sx: f64 = xs.iter().sum();
    let sy: f64 = ys.iter().sum();
    let sxx: f64 = xs.iter().map(|x| x * x).sum();
    let sxy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();

    let slope = (n * sxy - sx * sy) / (n * sxx - sx * sx);
    let intercept = (sy - slope * sx) / n;

    let rss: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| {
            let r = y - (intercept + slope * x);
            r * r
        })
        .sum();
    (intercept, slope, (rss / n).sqrt())
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let years: Vec<i32> = (2000..=2018).collect();

    let ages: &[(&str, f64)] = &[
        ("10-14 years", 2.1),
        ("15-24 years", 10.8),
        ("25-34 years", 14.6),
        ("35-44 years", 16.2),
        ("45-64 years", 18.9),
        ("65 years and over", 16.7),
    ];

    let labels: &[(&str, f64)] = &[
        ("All persons", 1.0),
        ("Male", 1.62),
        ("Female", 0.42),
        ("Male: White", 1.78),
        ("Male: Black or African American", 1.05),
        ("Female: White", 0.46),
        ("Female: Black or African American", 0.19),
    ];

    // ---- Observation table ----
    let csv_path = "data/mortality_rates.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create dataset file");
    writer
        .write_record(["YEAR", "AGE", "STUB_LABEL", "ESTIMATE"])
        .expect("Failed to write header");

    let mut rows: i64 = 0;
    let mut blanks: i64 = 0;
    let mut year_sums = vec![(0.0f64, 0usize); years.len()];
    for (year_idx, &year) in years.iter().enumerate() {
        let drift = 1.0 + 0.013 * f64::from(year - years[0]);
        for &(age, base) in ages {
            for &(label, factor) in labels {
                // The source file leaves ESTIMATE blank for suppressed cells.
                let estimate = if rng.next_f64() < 0.025 {
                    blanks += 1;
                    String::new()
                } else {
                    let rate = (base * factor * drift + rng.gauss(0.0, 0.35)).max(0.1);
                    year_sums[year_idx].0 += rate;
                    year_sums[year_idx].1 += 1;
                    format!("{rate:.1}")
                };
                writer
                    .write_record([year.to_string(), age.to_string(), label.to_string(), estimate])
                    .expect("Failed to write row");
                rows += 1;
            }
        }
    }
    writer.flush().expect("Failed to flush dataset");

    // ---- Fit the trend on overall yearly means and write the artifact ----
    let xs: Vec<f64> = (0..years.len()).map(|i| i as f64).collect();
    let means: Vec<f64> = year_sums
        .iter()
        .map(|&(sum, count)| sum / count as f64)
        .collect();
    let (intercept, slope, residual_std) = fit_trend(&xs, &means);

    let artifact = json!({
        "train_start": years[0],
        "train_end": years[years.len() - 1],
        "intercept": intercept,
        "slope": slope,
        "residual_std": residual_std,
        "confidence_level": 0.95,
    });
    let model_path = "data/forecast_model.json";
    std::fs::write(
        model_path,
        serde_json::to_string_pretty(&artifact).expect("Failed to serialize artifact"),
    )
    .expect("Failed to write artifact");

    println!("Wrote {rows} rows ({blanks} blank estimates) to {csv_path}");
    println!("Wrote fitted artifact to {model_path}");
}
