pub const R_EARTH: f64 = 6.371e6; // Radius of Earth (m)
pub const ORBIT_ALTITUDE: f64 = 400_000.0; // Orbital altitude for LEO (m)
pub const LEO_ORBIT_RADIUS: f64 = R_EARTH + ORBIT_ALTITUDE; // (m)
pub const GEO_ORBIT_RADIUS: f64 = 4.2164e7; // Geostationary orbit radius (m)
pub const EARTH_ANGULAR_VELOCITY: f64 = 7.2921150e-5; // Earth's rotation rate (rad/s)

// Math
pub const PI: f64 = std::f64::consts::PI;
