use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::engine::simulation::SimulationEngine;
use crate::io::snapshot_errors::SnapshotError;
use crate::models::ground_station::{GroundStation, StationCategory};
use crate::models::satellite::{Satellite, SatelliteCategory};

const SATELLITE_TAG: &str = "Satellite";
const STATION_TAG: &str = "Ground Station";

/// Renders all entities in the snapshot text format: satellites first,
/// then ground stations, one `Kind: fields` line per entity with
/// comma-separated fields and categories as symbolic names.
pub fn render_snapshot(satellites: &[Satellite], stations: &[GroundStation]) -> String {
    let mut out = String::new();
    for satellite in satellites {
        let _ = writeln!(
            out,
            "{}: {}, {}, {}, {}, {}, {}, {}, {}",
            SATELLITE_TAG,
            satellite.body.name,
            satellite.body.mass,
            satellite.orbit_radius(),
            satellite.speed,
            satellite.angle,
            satellite.phase,
            satellite.category,
            satellite.angular_velocity,
        );
    }
    for station in stations {
        let _ = writeln!(
            out,
            "{}: {}, {}, {}, {}, {}, {}",
            STATION_TAG,
            station.body.name,
            station.body.mass,
            station.body.position.x,
            station.body.position.y,
            station.detection_range,
            station.category,
        );
    }
    out
}

/// Parses snapshot text into fresh entity collections. Nothing touches an
/// engine until the whole input parses, so a failure leaves the caller's
/// state as it was. Blank lines are skipped.
pub fn parse_snapshot(
    input: &str,
) -> Result<(Vec<Satellite>, Vec<GroundStation>), SnapshotError> {
    let mut satellites = Vec::new();
    let mut stations = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (tag, rest) = match trimmed.split_once(':') {
            Some(parts) => parts,
            None => return Err(SnapshotError::UnknownRecord { line }),
        };
        match tag.trim() {
            SATELLITE_TAG => satellites.push(parse_satellite(rest, line)?),
            STATION_TAG => stations.push(parse_station(rest, line)?),
            _ => return Err(SnapshotError::UnknownRecord { line }),
        }
    }

    Ok((satellites, stations))
}

fn parse_satellite(rest: &str, line: usize) -> Result<Satellite, SnapshotError> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    if fields.len() != 8 {
        return Err(SnapshotError::FieldCount {
            line,
            expected: 8,
            found: fields.len(),
        });
    }

    let category = SatelliteCategory::from_name(fields[6])
        .ok_or_else(|| SnapshotError::UnknownCategory(fields[6].to_string()))?;

    Ok(Satellite::new(
        fields[0],
        fields[1].parse()?, // mass
        fields[2].parse()?, // orbit radius
        fields[3].parse()?, // speed
        fields[4].parse()?, // angle
        fields[5].parse()?, // phase
        category,
        fields[7].parse()?, // angular velocity
    ))
}

fn parse_station(rest: &str, line: usize) -> Result<GroundStation, SnapshotError> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    if fields.len() != 6 {
        return Err(SnapshotError::FieldCount {
            line,
            expected: 6,
            found: fields.len(),
        });
    }

    let category = StationCategory::from_name(fields[5])
        .ok_or_else(|| SnapshotError::UnknownCategory(fields[5].to_string()))?;

    Ok(GroundStation::new(
        fields[0],
        fields[1].parse()?, // mass
        fields[2].parse()?, // x
        fields[3].parse()?, // y
        fields[4].parse()?, // detection range
        category,
    ))
}

/// Writes the snapshot for the given entities to `path`.
pub fn save_to_path(
    path: &Path,
    satellites: &[Satellite],
    stations: &[GroundStation],
) -> Result<(), SnapshotError> {
    fs::write(path, render_snapshot(satellites, stations))?;
    Ok(())
}

/// Loads a snapshot file and replaces the engine's entire entity state.
/// On any error the engine keeps its previous entities.
pub fn load_into_engine(path: &Path, engine: &mut SimulationEngine) -> Result<(), SnapshotError> {
    let text = fs::read_to_string(path)?;
    let (satellites, stations) = parse_snapshot(&text)?;
    engine.replace_entities(satellites, stations);
    Ok(())
}
