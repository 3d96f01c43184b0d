use csv::Writer;
use orbitwatch::config::sample::sample_engine;
use orbitwatch::engine::sink::FileEventSink;
use orbitwatch::io::snapshot;
use serde::Serialize;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

#[derive(Serialize)]
struct TrajectoryRecord<'a> {
    step: usize,
    satellite: &'a str,
    x: f64,
    y: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let dt = 10.0; // seconds of simulated time per step
    let steps = 360;

    let mut engine = sample_engine();

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let mut sink = FileEventSink::create(&output_dir.join("communications.log"))?;

    let mut total_events = 0;
    for _ in 0..steps {
        let events = engine.step(dt, &mut sink)?;
        total_events += events.len();
    }

    // Export every satellite's recorded positions.
    let file = File::create(output_dir.join("trajectories.csv"))?;
    let mut writer = Writer::from_writer(file);
    for satellite in engine.satellites() {
        for (step, position) in satellite.trajectory().iter().enumerate() {
            writer.serialize(TrajectoryRecord {
                step,
                satellite: &satellite.body.name,
                x: position.x,
                y: position.y,
            })?;
        }
    }
    writer.flush()?;

    snapshot::save_to_path(
        &output_dir.join("entities.txt"),
        engine.satellites(),
        engine.ground_stations(),
    )?;

    println!(
        "Simulated {} steps ({} s); {} communication events written to output/communications.log",
        steps,
        steps as f64 * dt,
        total_events
    );

    Ok(())
}
