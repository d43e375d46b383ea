//! Mercator projection for the route map.

use std::f64::consts::FRAC_PI_4;

use super::shipment::Coordinates;

pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 450.0;
const MAP_SCALE: f64 = 130.0;
const ARC_LIFT: f64 = 50.0;
const GRATICULE_STEP: i32 = 30;
// Mercator diverges at the poles; clip parallels like most web maps do.
const MAX_LATITUDE: f64 = 85.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

fn translate() -> Point {
    Point {
        x: MAP_WIDTH / 2.0,
        y: MAP_HEIGHT / 1.4,
    }
}

pub fn project(coords: Coordinates) -> Point {
    let origin = translate();
    let lambda = coords.lng.to_radians();
    let phi = coords.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    Point {
        x: origin.x + MAP_SCALE * lambda,
        y: origin.y - MAP_SCALE * (FRAC_PI_4 + phi / 2.0).tan().ln(),
    }
}

/// Control point of the route arc: midpoint of both ends, lifted upward.
pub fn arc_control(origin: Point, dest: Point) -> Point {
    Point {
        x: (origin.x + dest.x) / 2.0,
        y: (origin.y + dest.y) / 2.0 - ARC_LIFT,
    }
}

/// SVG path data for a quadratic arc between two locations.
pub fn route_arc(origin: Coordinates, dest: Coordinates) -> String {
    let from = project(origin);
    let to = project(dest);
    let control = arc_control(from, to);
    format!(
        "M {:.2},{:.2} Q {:.2},{:.2} {:.2},{:.2}",
        from.x, from.y, control.x, control.y, to.x, to.y
    )
}

/// Meridians and parallels every 30 degrees, as SVG path data.
pub fn graticule() -> Vec<String> {
    let mut lines = Vec::new();
    for lng in (-180..=180).step_by(GRATICULE_STEP as usize) {
        let top = project(Coordinates::new(MAX_LATITUDE, lng as f64));
        let bottom = project(Coordinates::new(-MAX_LATITUDE, lng as f64));
        lines.push(format!(
            "M {:.2},{:.2} L {:.2},{:.2}",
            top.x, top.y, bottom.x, bottom.y
        ));
    }
    for lat in (-60..=60).step_by(GRATICULE_STEP as usize) {
        let west = project(Coordinates::new(lat as f64, -180.0));
        let east = project(Coordinates::new(lat as f64, 180.0));
        lines.push(format!(
            "M {:.2},{:.2} L {:.2},{:.2}",
            west.x, west.y, east.x, east.y
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn null_island_lands_on_translation_point() {
        let point = project(Coordinates::new(0.0, 0.0));
        assert!(close(point.x, 400.0));
        assert!(close(point.y, 450.0 / 1.4));
    }

    #[test]
    fn north_and_east_move_up_and_right() {
        let london = project(Coordinates::new(51.5074, -0.1278));
        let dubai = project(Coordinates::new(25.2048, 55.2708));
        assert!(dubai.x > london.x);
        assert!(london.y < dubai.y);
        assert!(close(dubai.x, 400.0 + 130.0 * 55.2708_f64.to_radians()));
    }

    #[test]
    fn arc_control_is_lifted_midpoint() {
        let control = arc_control(Point { x: 100.0, y: 200.0 }, Point { x: 300.0, y: 100.0 });
        assert_eq!(control, Point { x: 200.0, y: 100.0 });
    }

    #[test]
    fn route_arc_starts_at_origin() {
        let path = route_arc(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 90.0));
        assert!(path.starts_with("M 400.00,321.43 Q"));
    }

    #[test]
    fn graticule_has_meridians_and_parallels() {
        // 13 meridians (-180..=180) and 5 parallels (-60..=60)
        assert_eq!(graticule().len(), 18);
    }
}
