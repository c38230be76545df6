//! Example: Lead removal with the MOF/biochar composite
//!
//! Walks through the three uses of the surrogate on the reference pair:
//!
//! - Direct prediction at a known operating point
//! - Random search for conditions reaching 95% removal
//! - Attribution of a poor operating point on another pair
//!
//! Also compares the five adsorbents on the same lead scenario and prints a
//! coarse pH × contact-time surface.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example lead_removal
//! ```

use adsorb_rs::{
    attribution::AttributionEngine,
    models::{sweep, SurrogateModel},
    optimizer::{Optimizer, RandomSearch, SearchConfiguration, SearchProblem, SearchSpace},
    physics::{OperatingConditions, RemovalModel},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Lead Removal - MOF/Biochar Composite");
    println!("═══════════════════════════════════════════════════════\n");

    let model = SurrogateModel::builtin();

    // ====== Direct prediction ======

    let conditions = OperatingConditions::new(6.0, 5.0, 30.0);
    let prediction = model.try_predict("mof_biochar", "pb", &conditions)?;

    println!("Operating point:");
    println!("  pH            : {}", conditions.ph);
    println!("  Concentration : {} mg/L", conditions.concentration);
    println!("  Contact time  : {} min", conditions.contact_time);
    println!("  Removal       : {:.2} % ± {:.2}\n", prediction.mean, prediction.std);

    // ====== Adsorbent comparison ======

    println!("{:<20} {:>12} {:>10}", "Adsorbent", "Removal (%)", "σ");
    println!("{:-<44}", "");
    for id in model.registry().material_ids() {
        let prediction = model.predict(id, "pb", &conditions);
        println!("{:<20} {:>12.2} {:>10.2}", id, prediction.mean, prediction.std);
    }

    // =============================================================================================
    // Optimisation
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Random Search: target 95%");
    println!("═══════════════════════════════════════════════════════\n");

    let problem = SearchProblem::new("pb", "mof_biochar", 95.0, SearchSpace::default());
    let config = SearchConfiguration::new(200).with_seed(2024);

    let start = Instant::now();
    let result = RandomSearch::new().search(&model, &problem, &config)?;
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    let best = &result.best;
    println!("  Trials        : {} ({:.3} ms)", result.len(), elapsed);
    println!("  Best trial    : #{}", best.iteration);
    println!("  pH            : {:.2}", best.ph);
    println!("  Contact time  : {:.1} min", best.contact_time);
    println!("  Concentration : {:.1} mg/L", best.concentration);
    println!("  Removal       : {:.2} % ± {:.2}", best.mean, best.std);
    println!("  Target met    : {}", if result.target_met() { "yes" } else { "no" });
    println!("  Feasible      : {} / {}", result.feasible().len(), result.len());

    // =============================================================================================
    // Attribution
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Attribution: zeolite / Cr(VI), pH 3, 20 mg/L, 20 min");
    println!("═══════════════════════════════════════════════════════\n");

    let engine = AttributionEngine::new(&model);
    println!("  Baseline removal: {:.2} %\n", engine.baseline_removal());

    for item in engine.explain("zeolite", "cr6", 3.0, 20.0, 20.0) {
        println!("  {:<16} {:>+8.2}", item.name(), item.contribution);
    }

    // =============================================================================================
    // Response surface
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Response Surface: removal (%) vs pH × time");
    println!("═══════════════════════════════════════════════════════\n");

    let ph_grid = sweep::linspace(2.0, 8.0, 7);
    let times = sweep::linspace(0.0, 30.0, 7);
    let surface = sweep::response_surface(&model, "mof_biochar", "pb", &conditions, &ph_grid, &times);

    print!("{:>6}", "pH");
    for t in &times {
        print!("{:>8.0}", t);
    }
    println!();
    for (i, ph) in ph_grid.iter().enumerate() {
        print!("{:>6.1}", ph);
        for j in 0..times.len() {
            print!("{:>8.1}", surface[(i, j)]);
        }
        println!();
    }

    Ok(())
}
