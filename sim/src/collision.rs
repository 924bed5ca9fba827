//! Circle-vs-rectangle tests shared by the brick grid and the paddle.
//!
//! A collision is detected by clamping the ball center onto the rectangle and
//! comparing the distance to the contact point against the ball radius. The
//! contact point also tells which edge was struck.

use cgmath::Vector2;

/// Axis-aligned rectangle, lower-left origin, y up.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Rectangle edge a contact point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Bottom,
    Top,
    Left,
    Right,
}

impl Rect {
    /// Rectangle point closest to `point`.
    pub fn closest_point(&self, point: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(
            point.x.clamp(self.x, self.x + self.width),
            point.y.clamp(self.y, self.y + self.height),
        )
    }

    /// The contact point, if a circle at `center` overlaps this rectangle.
    pub fn circle_contact(&self, center: Vector2<f32>, radius: f32) -> Option<Vector2<f32>> {
        let contact = self.closest_point(center);
        let dx = contact.x - center.x;
        let dy = contact.y - center.y;

        (dx * dx + dy * dy <= radius * radius).then_some(contact)
    }

    /// Which edge a contact point lies on. `None` when the circle center is
    /// inside the rectangle, so the contact point is the center itself.
    /// Corner contacts resolve in the order bottom, top, left, right.
    pub fn struck_edge(&self, contact: Vector2<f32>) -> Option<Edge> {
        if contact.y == self.y {
            Some(Edge::Bottom)
        } else if contact.y == self.y + self.height {
            Some(Edge::Top)
        } else if contact.x == self.x {
            Some(Edge::Left)
        } else if contact.x == self.x + self.width {
            Some(Edge::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect {
        x: 100.0,
        y: 200.0,
        width: 80.0,
        height: 20.0,
    };

    #[test]
    fn closest_point_clamps_to_bounds() {
        let point = RECT.closest_point(Vector2::new(50.0, 300.0));
        assert_eq!(point, Vector2::new(100.0, 220.0));

        let inside = RECT.closest_point(Vector2::new(120.0, 210.0));
        assert_eq!(inside, Vector2::new(120.0, 210.0));
    }

    #[test]
    fn circle_contact_requires_overlap() {
        assert!(RECT.circle_contact(Vector2::new(140.0, 190.0), 10.0).is_some());
        assert!(RECT.circle_contact(Vector2::new(140.0, 189.0), 10.0).is_none());
    }

    #[test]
    fn struck_edge_matches_contact_side() {
        assert_eq!(
            RECT.struck_edge(RECT.closest_point(Vector2::new(140.0, 195.0))),
            Some(Edge::Bottom)
        );
        assert_eq!(
            RECT.struck_edge(RECT.closest_point(Vector2::new(140.0, 225.0))),
            Some(Edge::Top)
        );
        assert_eq!(
            RECT.struck_edge(RECT.closest_point(Vector2::new(95.0, 210.0))),
            Some(Edge::Left)
        );
        assert_eq!(
            RECT.struck_edge(RECT.closest_point(Vector2::new(185.0, 210.0))),
            Some(Edge::Right)
        );
    }

    #[test]
    fn corner_contact_prefers_bottom_edge() {
        let contact = RECT.closest_point(Vector2::new(95.0, 195.0));
        assert_eq!(RECT.struck_edge(contact), Some(Edge::Bottom));
    }

    #[test]
    fn center_inside_matches_no_edge() {
        let contact = RECT.closest_point(Vector2::new(120.0, 210.0));
        assert_eq!(RECT.struck_edge(contact), None);
    }
}
