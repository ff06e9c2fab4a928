//! Collision detection and response for axis-aligned geometry
//!
//! The ball is a circle, but overlap tests treat it as its bounding square
//! (rectangle inflated by the radius). Reflection response picks an axis
//! rather than computing an exact contact normal; good enough at arcade
//! speeds and it matches how the game has always played.

use glam::Vec2;

/// Axis-aligned rectangle, `min` = top-left in board coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            min: pos,
            max: pos + Vec2::new(width, height),
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }
}

/// Which side family of a block the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitAxis {
    /// Left or right face: reflect the horizontal velocity component
    Horizontal,
    /// Top or bottom face: reflect the vertical velocity component
    Vertical,
}

/// Overlap test between a ball (inflated by its radius) and a rectangle
pub fn ball_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius >= rect.min.x
        && center.x - radius <= rect.max.x
        && center.y + radius >= rect.min.y
        && center.y - radius <= rect.max.y
}

/// Pick the reflection axis for a block hit
///
/// Compares penetration normalized by the block's half extents: the axis
/// with the larger normalized offset is the side the ball came in from.
pub fn block_hit_axis(ball_center: Vec2, block: &Rect) -> HitAxis {
    let offset = ball_center - block.center();
    let half = block.half_extents();
    if (offset.x / half.x).abs() > (offset.y / half.y).abs() {
        HitAxis::Horizontal
    } else {
        HitAxis::Vertical
    }
}

/// Compute the post-paddle-bounce velocity
///
/// `hit_fraction` in [0, 1] maps across the paddle face to a reflection
/// angle in [-45°, +45°] off vertical: the left edge sends the ball hard
/// left, center straight up, right edge hard right. Speed is preserved and
/// the vertical component always points up.
pub fn paddle_bounce(hit_fraction: f32, speed: f32) -> Vec2 {
    let angle = (hit_fraction.clamp(0.0, 1.0) * 2.0 - 1.0) * std::f32::consts::FRAC_PI_4;
    Vec2::new(angle.sin() * speed, -(angle.cos() * speed).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_rect_overlap() {
        let rect = Rect::new(Vec2::new(100.0, 100.0), 60.0, 20.0);

        // Dead center
        assert!(ball_rect_overlap(Vec2::new(130.0, 110.0), 8.0, &rect));
        // Touching from above via the inflated extent
        assert!(ball_rect_overlap(Vec2::new(130.0, 93.0), 8.0, &rect));
        // Clear miss
        assert!(!ball_rect_overlap(Vec2::new(130.0, 80.0), 8.0, &rect));
        assert!(!ball_rect_overlap(Vec2::new(60.0, 110.0), 8.0, &rect));
    }

    #[test]
    fn test_block_hit_axis_side_hit() {
        let block = Rect::new(Vec2::new(100.0, 100.0), 60.0, 20.0);
        // Ball left of the block, roughly level with its center
        let axis = block_hit_axis(Vec2::new(95.0, 110.0), &block);
        assert_eq!(axis, HitAxis::Horizontal);
    }

    #[test]
    fn test_block_hit_axis_top_hit() {
        let block = Rect::new(Vec2::new(100.0, 100.0), 60.0, 20.0);
        // Ball above the block, roughly centered horizontally
        let axis = block_hit_axis(Vec2::new(130.0, 95.0), &block);
        assert_eq!(axis, HitAxis::Vertical);
    }

    #[test]
    fn test_paddle_bounce_center_goes_straight_up() {
        let speed = 50.0_f32.sqrt(); // speed of a (5, 5) ball
        let vel = paddle_bounce(0.5, speed);
        assert!(vel.x.abs() < 0.001);
        assert!((vel.y + speed).abs() < 0.001);
    }

    #[test]
    fn test_paddle_bounce_edges() {
        let speed = 10.0;
        let left = paddle_bounce(0.0, speed);
        let right = paddle_bounce(1.0, speed);

        // Hard left / hard right at 45 degrees, always upward
        assert!(left.x < 0.0);
        assert!(right.x > 0.0);
        assert!(left.y < 0.0 && right.y < 0.0);
        assert!((left.x.abs() - left.y.abs()).abs() < 0.001);

        // Speed preserved
        assert!((left.length() - speed).abs() < 0.001);
        assert!((right.length() - speed).abs() < 0.001);
    }

    #[test]
    fn test_paddle_bounce_clamps_fraction() {
        let a = paddle_bounce(-0.5, 10.0);
        let b = paddle_bounce(0.0, 10.0);
        assert!((a - b).length() < 0.001);
    }
}
