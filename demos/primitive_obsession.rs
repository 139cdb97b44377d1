//! # Primitive Obsession Exercises
//!
//! Runs every exercise, logging each outcome as it happens, then prints the
//! full report. The crate logs through the `log` facade; this demo wires it
//! to env_logger, so verbosity follows `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example primitive_obsession
//! ```

use validated_values::demonstration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("Starting primitive obsession exercises");

    let report = demonstration::run_all();

    println!("{}", report.to_json_pretty()?);

    log::info!(
        "Done: {} accepted, {} rejected",
        report.accepted(),
        report.rejected()
    );
    Ok(())
}
