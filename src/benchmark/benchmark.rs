//! Manual scaling benchmarks for the potential kernels
//!
//! Times `value` and `gradient` over growing batch sizes and prints CSV
//! rows for plotting. All three kernels should scale linearly in N; the
//! Lee-Suto gradient is the most expensive per particle.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::potential::kernel::NVec3;
use crate::potential::model::{KernelKind, PotentialModel};
use crate::units::units::UnitSystem;

/// Deterministic scattered positions, no rand needed
fn make_positions(n: usize) -> Vec<NVec3> {
    let mut pos = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        pos.push(NVec3::new(
            (i_f * 0.37).sin() * 25.0 + 1.0,
            (i_f * 0.13).cos() * 25.0,
            (i_f * 0.07).sin() * 25.0,
        ));
    }
    pos
}

fn raw(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// One model per kernel with order-unity parameters
fn bench_models() -> Vec<(&'static str, PotentialModel)> {
    let units = UnitSystem::dimensionless();
    let hern = PotentialModel::new(KernelKind::Hernquist, &raw(&[("m", 1.0), ("c", 1.0)]), &units);
    let mn = PotentialModel::new(
        KernelKind::MiyamotoNagai,
        &raw(&[("m", 1.0), ("a", 3.0), ("b", 0.3)]),
        &units,
    );
    let ls = PotentialModel::new(
        KernelKind::LeeSutoNfw,
        &raw(&[
            ("v_h", 0.5),
            ("r_h", 10.0),
            ("a", 1.0),
            ("b", 0.9),
            ("c", 0.7),
            ("phi", 0.3),
        ]),
        &units,
    );

    [("hernquist", hern), ("miyamoto_nagai", mn), ("lee_suto_nfw", ls)]
        .into_iter()
        .filter_map(|(name, m)| m.ok().map(|m| (name, m)))
        .collect()
}

/// Benchmark batch evaluation for a range of N
/// Paste output directly into a spreadsheet to graph
pub fn bench_kernels() {
    println!("kernel,N,value_ms,gradient_ms");

    let models = bench_models();

    for n in [1_000, 10_000, 100_000, 1_000_000] {
        let pos = make_positions(n);
        let mut phi = vec![0.0; n];
        let mut grad = vec![NVec3::zeros(); n];

        for (name, model) in &models {
            // Warm up
            let _ = model.value(&pos, &mut phi);
            let _ = model.gradient(&pos, &mut grad);

            let t0 = Instant::now();
            let _ = model.value(&pos, &mut phi);
            let value_ms = t0.elapsed().as_secs_f64() * 1000.0;

            let t1 = Instant::now();
            let _ = model.gradient(&pos, &mut grad);
            let gradient_ms = t1.elapsed().as_secs_f64() * 1000.0;

            println!("{name},{n},{value_ms:.6},{gradient_ms:.6}");
        }
    }
}
