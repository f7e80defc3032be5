//! Plane geometry: axis-aligned bounding boxes on the fixed 800×600 plane.
//!
//! Positions are box centers; extents are stored as half-width/half-height so
//! the two tests that dominate the hot path — overlap and in-plane — are a
//! handful of comparisons with no division.

/// Plane width in world units.  Fixed by the renderer contract.
pub const PLANE_WIDTH: f32 = 800.0;
/// Plane height in world units.
pub const PLANE_HEIGHT: f32 = 600.0;

/// An axis-aligned box: center position plus half extents.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub cx: f32,
    pub cy: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl BoundingBox {
    /// Build from center and full width/height.
    #[inline]
    pub fn new(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self { cx, cy, half_w: w * 0.5, half_h: h * 0.5 }
    }

    /// The same box translated by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { cx: self.cx + dx, cy: self.cy + dy, ..self }
    }

    /// The same box re-centered at `(cx, cy)`.
    #[inline]
    pub fn at(self, cx: f32, cy: f32) -> Self {
        Self { cx, cy, ..self }
    }

    /// Axis-aligned overlap test: boxes overlap unless separated on either
    /// axis.  Touching edges do not count as overlap.
    #[inline]
    pub fn overlaps(self, other: BoundingBox) -> bool {
        (self.cx - other.cx).abs() < self.half_w + other.half_w
            && (self.cy - other.cy).abs() < self.half_h + other.half_h
    }

    /// `true` if the whole box (accounting for half extents) lies within
    /// `[0, PLANE_WIDTH] × [0, PLANE_HEIGHT]`.
    #[inline]
    pub fn in_plane(self) -> bool {
        self.cx - self.half_w >= 0.0
            && self.cx + self.half_w <= PLANE_WIDTH
            && self.cy - self.half_h >= 0.0
            && self.cy + self.half_h <= PLANE_HEIGHT
    }

    /// Euclidean distance between box centers.
    #[inline]
    pub fn center_distance(self, other: BoundingBox) -> f32 {
        let dx = self.cx - other.cx;
        let dy = self.cy - other.cy;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance from the box center to an arbitrary point.
    #[inline]
    pub fn distance_to(self, x: f32, y: f32) -> f32 {
        let dx = self.cx - x;
        let dy = self.cy - y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.1}, {:.1}) {}x{}",
            self.cx,
            self.cy,
            self.half_w * 2.0,
            self.half_h * 2.0
        )
    }
}
