//! Writes a deterministic demo catalog for trying the filter form.
//!
//! Usage: `generate_sample [OUTPUT] [--seed N] [--per-series N]`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Map, Value};

#[derive(Parser, Debug)]
#[command(name = "generate_sample", about = "Write a demo lighting catalog")]
struct Args {
    /// Output JSON file.
    #[arg(default_value = "merged_products_with_series.json")]
    output: PathBuf,

    /// PRNG seed; the same seed always yields the same catalog.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Products generated per series.
    #[arg(long, default_value_t = 12)]
    per_series: usize,
}

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Uniform integer in `[lo, hi]`, rounded down to a multiple of `step`.
    fn stepped(&mut self, lo: f64, hi: f64, step: f64) -> f64 {
        let v = lo + self.next_f64() * (hi - lo);
        (v / step).floor() * step
    }
}

struct SeriesSpec {
    name: &'static str,
    prefix: &'static str,
    watt: (f64, f64),
    beam: &'static [f64],
    lumen_per_watt: f64,
    price_per_watt: f64,
}

const SERIES: &[SeriesSpec] = &[
    SeriesSpec { name: "Track Light Pro", prefix: "TR", watt: (10.0, 40.0), beam: &[15.0, 24.0, 36.0], lumen_per_watt: 95.0, price_per_watt: 55.0 },
    SeriesSpec { name: "Flat Panel", prefix: "PL", watt: (20.0, 60.0), beam: &[110.0, 120.0], lumen_per_watt: 110.0, price_per_watt: 40.0 },
    SeriesSpec { name: "Recessed Downlight", prefix: "DL", watt: (6.0, 25.0), beam: &[36.0, 60.0, 90.0], lumen_per_watt: 90.0, price_per_watt: 48.0 },
    SeriesSpec { name: "Linear Batten", prefix: "LB", watt: (18.0, 72.0), beam: &[100.0, 120.0], lumen_per_watt: 120.0, price_per_watt: 30.0 },
    SeriesSpec { name: "High Bay", prefix: "HB", watt: (100.0, 200.0), beam: &[60.0, 90.0, 120.0], lumen_per_watt: 140.0, price_per_watt: 65.0 },
];

const CCTS: &[f64] = &[2700.0, 3000.0, 3500.0, 4000.0, 5000.0, 5700.0, 6500.0];

fn product(rng: &mut SimpleRng, spec: &SeriesSpec, index: usize) -> Value {
    let watt = rng.stepped(spec.watt.0, spec.watt.1, 1.0);
    let cct = *rng.pick(CCTS);
    let beam = *rng.pick(spec.beam);
    let lumen = (watt * spec.lumen_per_watt / 10.0).round() * 10.0;
    let price = (watt * spec.price_per_watt / 100.0).ceil() * 100.0;

    let mut obj = Map::new();
    obj.insert("series".into(), json!(spec.name));
    obj.insert(
        "model".into(),
        json!(format!("{}-{}{:02}", spec.prefix, watt as u32, index)),
    );
    obj.insert("watt".into(), json!(watt as u32));
    obj.insert("cct".into(), json!(cct as u32));
    obj.insert("beam".into(), json!(beam as u32));
    obj.insert("lumen".into(), json!(lumen as u32));
    obj.insert("price".into(), json!(price as u32));

    // Mimic hand-merged catalogs: some numbers stored as text, some missing.
    match rng.next_u64() % 10 {
        0 => {
            obj.insert("watt".into(), json!(format!("{}", watt as u32)));
        }
        1 => {
            obj.remove("beam");
        }
        2 => {
            obj.insert("price".into(), json!("call for quote"));
        }
        _ => {}
    }
    Value::Object(obj)
}

fn catalog(seed: u64, per_series: usize) -> Vec<Value> {
    let mut rng = SimpleRng::new(seed);
    SERIES
        .iter()
        .flat_map(|spec| (0..per_series).map(move |i| (spec, i)))
        .map(|(spec, i)| product(&mut rng, spec, i))
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let products = catalog(args.seed, args.per_series);

    let text = serde_json::to_string_pretty(&products).context("serializing catalog")?;
    std::fs::write(&args.output, text)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} products in {} series to {}",
        products.len(),
        SERIES.len(),
        args.output.display()
    );
    Ok(())
}
