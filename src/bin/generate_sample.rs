//! Sample Data Generator
//! Writes good_features.csv and bad_features.csv with synthetic labeled
//! feature data, so the scatter plots can be tried without a real export.

use anyhow::Result;
use polars::prelude::*;
use std::fs::File;

const ROWS: usize = 200;

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

/// One gaussian value per row, mean chosen by the row's class.
fn feature(rng: &mut SimpleRng, labels: &[i64], class_means: [f64; 2], std_dev: f64) -> Vec<f64> {
    labels
        .iter()
        .map(|&label| rng.gauss(class_means[(label - 1) as usize], std_dev))
        .collect()
}

fn write_csv(path: &str, mut df: DataFrame) -> Result<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    println!("wrote {path} ({} rows)", df.height());
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let labels: Vec<i64> = (0..ROWS)
        .map(|_| if rng.next_f64() < 0.5 { 1 } else { 2 })
        .collect();

    // Good features: the plotted pair (Feature2, Feature1) separates the
    // classes cleanly.
    let good = DataFrame::new(vec![
        Column::new("Feature1".into(), feature(&mut rng, &labels, [2.0, 6.0], 0.8)),
        Column::new("Feature2".into(), feature(&mut rng, &labels, [1.0, 4.5], 0.7)),
        Column::new("Feature3".into(), feature(&mut rng, &labels, [5.0, 5.2], 1.0)),
        Column::new("Feature4".into(), feature(&mut rng, &labels, [3.0, 3.1], 1.2)),
        Column::new("Feature5".into(), feature(&mut rng, &labels, [0.0, 0.1], 1.0)),
        Column::new("Feature6".into(), feature(&mut rng, &labels, [7.0, 7.1], 1.5)),
        Column::new("Label".into(), labels.clone()),
    ])?;
    write_csv("good_features.csv", good)?;

    // Bad features: the plotted pair (Feature3, Feature6) overlaps almost
    // completely.
    let bad = DataFrame::new(vec![
        Column::new("Feature1".into(), feature(&mut rng, &labels, [2.0, 2.2], 1.0)),
        Column::new("Feature2".into(), feature(&mut rng, &labels, [1.0, 1.1], 1.0)),
        Column::new("Feature3".into(), feature(&mut rng, &labels, [5.0, 5.1], 1.3)),
        Column::new("Feature4".into(), feature(&mut rng, &labels, [3.0, 3.0], 1.2)),
        Column::new("Feature5".into(), feature(&mut rng, &labels, [0.0, 0.0], 1.0)),
        Column::new("Feature6".into(), feature(&mut rng, &labels, [7.0, 7.2], 1.4)),
        Column::new("Label".into(), labels),
    ])?;
    write_csv("bad_features.csv", bad)?;

    Ok(())
}
