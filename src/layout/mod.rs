pub mod flat;
pub mod hierarchy;

use serde::{Deserialize, Serialize};

/// Default radius of the keyword ring and of the product orbit.
pub const ORBIT_RADIUS: f32 = 140.0;

/// Default radius of the outer tag ring.
pub const OUTER_RADIUS: f32 = 230.0;

/// 2D position in layout units. The renderer applies its own
/// scale/center transform before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Point on the circle of `radius` at `angle` radians (0 = +x axis,
/// angles grow clockwise in screen space).
pub fn orbit_position(angle: f32, radius: f32) -> Vec2 {
    Vec2 {
        x: angle.cos() * radius,
        y: angle.sin() * radius,
    }
}

/// Tier of a node in the hierarchical mind map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    User,
    Product,
    Tag,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn orbit_position_top_of_circle() {
        let p = orbit_position(-FRAC_PI_2, 140.0);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y + 140.0).abs() < 1e-4);
    }

    #[test]
    fn orbit_position_zero_angle_is_right() {
        let p = orbit_position(0.0, 100.0);
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
    }
}
