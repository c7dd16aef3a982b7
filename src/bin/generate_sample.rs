//! Writes a deterministic sample CSV for trying out the renderer:
//!
//! ```sh
//! cargo run --bin generate_sample
//! cargo run -- sample_data.csv --colorbar
//! ```

use anyhow::{Context, Result};

const OUTPUT: &str = "sample_data.csv";
const N_MICE: usize = 8;
const N_SAMPLES: usize = 6000;
const SAMPLE_DT: f64 = 0.1;

fn gaussian(t: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(t - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (splitmix64).
struct SampleRng {
    state: u64,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One subject's trace: a slow baseline drift, a few transient events,
/// and sample noise.
fn generate_trace(time: &[f64], rng: &mut SampleRng) -> Vec<f64> {
    let n_events = 2 + (rng.next_u64() % 3) as usize;
    let events: Vec<(f64, f64, f64)> = (0..n_events)
        .map(|_| {
            let mu = rng.range(30.0, time.last().copied().unwrap_or(0.0) - 30.0);
            let sigma = rng.range(2.0, 12.0);
            let amplitude = rng.range(1.0, 6.0);
            (mu, sigma, amplitude)
        })
        .collect();

    let drift_phase = rng.range(0.0, std::f64::consts::TAU);
    let baseline = rng.range(-0.5, 0.5);

    time.iter()
        .map(|&t| {
            let signal: f64 = events
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(t, mu, sigma, amp))
                .sum();
            let drift = 0.3 * (t / 90.0 + drift_phase).sin();
            baseline + drift + signal + rng.gauss(0.0, 0.2)
        })
        .collect()
}

fn main() -> Result<()> {
    let mut rng = SampleRng::new(42);

    let time: Vec<f64> = (0..N_SAMPLES).map(|i| i as f64 * SAMPLE_DT).collect();
    let traces: Vec<Vec<f64>> = (0..N_MICE).map(|_| generate_trace(&time, &mut rng)).collect();

    let mut writer =
        csv::Writer::from_path(OUTPUT).with_context(|| format!("creating {OUTPUT}"))?;

    let mut header = vec!["Time (s)".to_string()];
    header.extend((1..=N_MICE).map(|i| format!("Mouse{i}")));
    writer.write_record(&header).context("writing header")?;

    for (i, t) in time.iter().enumerate() {
        let mut record = vec![format!("{t:.1}")];
        record.extend(traces.iter().map(|trace| format!("{:.6}", trace[i])));
        writer
            .write_record(&record)
            .with_context(|| format!("writing row {i}"))?;
    }
    writer.flush().context("flushing CSV")?;

    println!("wrote {N_SAMPLES} samples x {N_MICE} mice to {OUTPUT}");
    Ok(())
}
