use crate::constants::{EARTH_ANGULAR_VELOCITY, GEO_ORBIT_RADIUS, LEO_ORBIT_RADIUS, R_EARTH};
use crate::engine::simulation::SimulationEngine;
use crate::models::ground_station::{GroundStation, StationCategory};
use crate::models::satellite::{Satellite, SatelliteCategory};

/// Built-in demonstration scenario: two LEO satellites and one
/// geostationary relay circling the origin, with two stations on the
/// planet surface. Loaded at startup and replaced wholesale by a
/// snapshot load.
pub fn sample_engine() -> SimulationEngine {
    let mut engine = SimulationEngine::new();

    engine.add_satellite(Satellite::new(
        "Aqua",
        2_934.0,
        LEO_ORBIT_RADIUS,
        7_660.0,
        0.0,
        0.0,
        SatelliteCategory::Transmitter,
        0.001131, // rad/s for a ~6771 km circular orbit
    ));
    engine.add_satellite(Satellite::new(
        "Terra",
        4_864.0,
        LEO_ORBIT_RADIUS + 300_000.0,
        7_500.0,
        90.0,
        45.0,
        SatelliteCategory::Receiver,
        0.001061,
    ));
    engine.add_satellite(Satellite::new(
        "Relay-1",
        1_250.0,
        GEO_ORBIT_RADIUS,
        3_075.0,
        180.0,
        0.0,
        SatelliteCategory::Transmitter,
        EARTH_ANGULAR_VELOCITY,
    ));

    engine.add_ground_station(GroundStation::new(
        "Svalbard",
        5.0e4,
        R_EARTH,
        0.0,
        1.5e6,
        StationCategory::Both,
    ));
    engine.add_ground_station(GroundStation::new(
        "Wallops",
        3.0e4,
        0.0,
        -R_EARTH,
        2.0e6,
        StationCategory::Communicating,
    ));

    engine
}
