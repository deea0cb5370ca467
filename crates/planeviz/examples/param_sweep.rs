//! Sweep one slider and print what the engines report, for quick sanity checks.
//!
//! Usage:
//!   cargo run -p planeviz --example param_sweep -- eigen
//!   cargo run -p planeviz --example param_sweep -- stops
//!
//! - eigen mode: rotation from -180° to 180° at fixed skew; prints the eigen
//!   branch and values.
//! - stops mode: sheet rotation from -30° to 30°; prints stop heights.

use nalgebra::Vector2;
use planeviz::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "eigen".to_string());
    match mode.as_str() {
        "eigen" => sweep_eigen(),
        "stops" => sweep_stops(),
        _ => {
            eprintln!("usage: param_sweep [eigen|stops]");
        }
    }
}

fn sweep_eigen() {
    for step in 0..=12 {
        let rot = -180.0 + 30.0 * step as f64;
        let m = compose_matrix(0.5, 0.0, rot);
        match eigen(&m) {
            EigenResult::Complex { real, imag } => {
                println!("rot={rot:>7.1} complex {real:.4} ± {imag:.4}i");
            }
            EigenResult::Real {
                lambda1, lambda2, ..
            } => {
                println!("rot={rot:>7.1} real    {lambda1:.4}, {lambda2:.4}");
            }
        }
    }
}

fn sweep_stops() {
    let cfg = ProbeCfg::default();
    for step in 0..=6 {
        let params = SheetParams {
            rotation_deg: -30.0 + 10.0 * step as f64,
            pivot: Vector2::new(-130.0, 0.0),
            ..SheetParams::default()
        };
        let frame = sheet_frame(&params, &cfg);
        let heights: Vec<String> = frame
            .stops
            .iter()
            .map(|s| match s {
                Some(s) => format!("{:.1}@{:.1}", s.height, s.touch_x),
                None => "-".to_string(),
            })
            .collect();
        println!("rot={:>6.1} stops=[{}]", params.rotation_deg, heights.join(", "));
    }
}
