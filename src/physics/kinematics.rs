use nalgebra as na;

/// Places a body on a circle of radius `r`, at `angle_deg` degrees from
/// the positive x axis.
pub fn initial_position(r: f64, angle_deg: f64) -> na::Vector2<f64> {
    let angle = angle_deg.to_radians();
    na::Vector2::new(r * angle.cos(), r * angle.sin())
}

/// Tangential (counter-clockwise) velocity of magnitude `speed` for a body
/// placed at `angle_deg` degrees.
pub fn initial_velocity(speed: f64, angle_deg: f64) -> na::Vector2<f64> {
    let angle = angle_deg.to_radians();
    na::Vector2::new(-speed * angle.sin(), speed * angle.cos())
}

/// One step of fixed-radius circular motion. The angular position is
/// recovered from the current position with `atan2`, so consecutive small
/// steps accumulate to the same angle as one large step. `atan2(0, 0)` is
/// 0 in Rust's libm, which pins a zero-radius body at the origin.
pub fn advance_circular(
    position: &na::Vector2<f64>,
    r: f64,
    angular_velocity: f64,
    dt: f64,
) -> na::Vector2<f64> {
    let theta = position.y.atan2(position.x) + angular_velocity * dt;
    na::Vector2::new(r * theta.cos(), r * theta.sin())
}
