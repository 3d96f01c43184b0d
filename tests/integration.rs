use orbitwatch::config::sample::sample_engine;
use orbitwatch::engine::simulation::SimulationEngine;
use orbitwatch::engine::sink::{FileEventSink, MemoryEventSink};
use orbitwatch::io::snapshot;
use orbitwatch::models::ground_station::{GroundStation, StationCategory};
use orbitwatch::models::satellite::{Satellite, SatelliteCategory};
use std::fs;
use std::path::Path;

// Integration test for a whole simulation run: stepping, event
// recording, snapshot save/load and failure behavior on a bad file.
#[test]
fn integration_test() -> Result<(), Box<dyn std::error::Error>> {
    // One LEO satellite circling the origin, one station that always
    // sees it and one that never does.
    let mut engine = SimulationEngine::new();
    engine.add_satellite(Satellite::new(
        "Aqua",
        2_934.0,
        7.0e6,
        7_660.0,
        0.0,
        0.0,
        SatelliteCategory::Transmitter,
        0.001,
    ));
    engine.add_ground_station(GroundStation::new(
        "Near",
        5.0e4,
        0.0,
        0.0,
        7.5e6,
        StationCategory::Both,
    ));
    engine.add_ground_station(GroundStation::new(
        "Far",
        3.0e4,
        5.0e7,
        0.0,
        10_000.0,
        StationCategory::Tracking,
    ));

    let mut sink = MemoryEventSink::new();
    let steps = 100;
    for _ in 0..steps {
        let events = engine.step(10.0, &mut sink)?;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].satellite, "Aqua");
        assert_eq!(events[0].station, "Near");
    }
    assert_eq!(sink.events.len(), steps);

    // Orbit radius invariant across the whole run, and one trajectory
    // entry per step on top of the seeded position.
    let satellite = &engine.satellites()[0];
    assert!((satellite.body.position.magnitude() - 7.0e6).abs() < 1e-3);
    assert_eq!(satellite.trajectory().len(), steps + 1);

    // Timestamps never decrease across steps.
    for pair in sink.events.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    // Snapshot round-trip through a file replaces the target engine's
    // sample entities instead of merging with them.
    let snapshot_path = output_dir.join("integration_entities.txt");
    snapshot::save_to_path(&snapshot_path, engine.satellites(), engine.ground_stations())?;

    let mut reloaded = sample_engine();
    assert!(reloaded.satellites().len() > 1);
    snapshot::load_into_engine(&snapshot_path, &mut reloaded)?;
    assert_eq!(reloaded.satellites().len(), 1);
    assert_eq!(reloaded.ground_stations().len(), 2);
    assert_eq!(reloaded.satellites()[0].body.name, "Aqua");
    assert_eq!(reloaded.satellites()[0].orbit_radius(), 7.0e6);
    assert_eq!(
        reloaded.satellites()[0].category,
        SatelliteCategory::Transmitter
    );

    // A malformed file surfaces an error and leaves the previous state
    // alone.
    let bad_path = output_dir.join("integration_bad.txt");
    fs::write(
        &bad_path,
        "Satellite: Broken, not-a-number, 7.0e6, 7660, 0, 0, Receiver, 0.001\n",
    )?;
    assert!(snapshot::load_into_engine(&bad_path, &mut reloaded).is_err());
    assert_eq!(reloaded.satellites().len(), 1);
    assert_eq!(reloaded.satellites()[0].body.name, "Aqua");

    // The file sink accumulates one line per event across batches.
    let log_path = output_dir.join("integration_events.log");
    let _ = fs::remove_file(&log_path);
    let mut file_sink = FileEventSink::create(&log_path)?;
    engine.step(10.0, &mut file_sink)?;
    engine.step(10.0, &mut file_sink)?;
    let log = fs::read_to_string(&log_path)?;
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("At time "));
    assert!(lines[0].ends_with("Aqua connects with Near"));

    Ok(())
}
