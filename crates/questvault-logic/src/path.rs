//! Progress-to-pose mapping along the adventure path.
//!
//! The map screen places the adventurer on a fixed arc and faces it along
//! the direction of travel. [`PathCurve`] does the math: a centripetal
//! Catmull-Rom spline through an ordered set of control points, evaluated at
//! a progress scalar in [0, 1]. Everything here is deterministic — identical
//! inputs always produce identical output.

use crate::vec3::Vec3;
use serde::{Deserialize, Serialize};

/// Position and facing direction at a point on the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPose {
    pub position: Vec3,
    /// Unit tangent of the curve. Zero only for degenerate control points
    /// (all coincident).
    pub direction: Vec3,
}

/// Smooth curve through an ordered set of control points.
///
/// Progress 0 yields exactly the first control point and progress 1 exactly
/// the last; every control point in between is passed through in order, and
/// the tangent is continuous across segment joins. Progress outside [0, 1]
/// (including non-finite values) is clamped, never extrapolated.
#[derive(Debug, Clone)]
pub struct PathCurve {
    points: Vec<Vec3>,
}

impl PathCurve {
    /// Build a curve from control points. Needs at least two.
    pub fn new(points: Vec<Vec3>) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self { points })
    }

    /// The five-point arc the adventure map draws, start (beach) to end
    /// (treasure).
    pub fn adventure_default() -> Self {
        Self {
            points: vec![
                Vec3::new(-3.0, 0.0, 2.0),
                Vec3::new(-1.0, 0.2, 1.0),
                Vec3::new(1.0, 0.1, 0.0),
                Vec3::new(2.5, 0.3, -1.0),
                Vec3::new(3.0, 0.5, -2.0),
            ],
        }
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Point on the curve at `progress`.
    pub fn point(&self, progress: f32) -> Vec3 {
        let p = sanitize(progress);
        if p >= 1.0 {
            // The cubic reproduces the endpoint only up to rounding; return
            // the control point itself so the end of the path is exact.
            return self.points[self.points.len() - 1];
        }
        let (index, u) = self.locate(p);
        self.segment(index).position(u)
    }

    /// Unit tangent at `progress`.
    pub fn tangent(&self, progress: f32) -> Vec3 {
        let (index, u) = self.locate(sanitize(progress));
        self.segment(index).velocity(u).normalize()
    }

    /// Position and direction in one evaluation, for per-frame use.
    pub fn pose(&self, progress: f32) -> PathPose {
        let p = sanitize(progress);
        let (index, u) = self.locate(p);
        let segment = self.segment(index);
        let position = if p >= 1.0 {
            self.points[self.points.len() - 1]
        } else {
            segment.position(u)
        };
        PathPose {
            position,
            direction: segment.velocity(u).normalize(),
        }
    }

    /// `n + 1` evenly spaced points along the curve (the drawn path line).
    pub fn sample(&self, n: usize) -> Vec<Vec3> {
        let steps = n.max(1);
        (0..=steps)
            .map(|i| self.point(i as f32 / steps as f32))
            .collect()
    }

    /// Map clamped progress to a segment index and the local parameter
    /// within that segment.
    fn locate(&self, p: f32) -> (usize, f32) {
        let last_segment = self.points.len() - 2;
        let scaled = p * (self.points.len() - 1) as f32;
        let index = (scaled as usize).min(last_segment);
        (index, scaled - index as f32)
    }

    fn segment(&self, index: usize) -> Segment {
        let p1 = self.points[index];
        let p2 = self.points[index + 1];
        // Clamp the neighbor lookups at the ends of the point list.
        let p0 = if index == 0 { p1 } else { self.points[index - 1] };
        let p3 = if index + 2 < self.points.len() {
            self.points[index + 2]
        } else {
            p2
        };
        Segment::centripetal(p0, p1, p2, p3)
    }
}

fn sanitize(progress: f32) -> f32 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// One cubic span of the curve, coefficients per axis.
struct Segment {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl Segment {
    /// Build the span from its four neighboring control points using
    /// centripetal knot spacing (alpha = 0.5): knot deltas are the square
    /// roots of chord lengths, which keeps the curve from looping or
    /// overshooting on unevenly spaced points.
    fn centripetal(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let mut dt1 = p1.distance_squared(&p2).powf(0.25);
        let mut dt0 = p0.distance_squared(&p1).powf(0.25);
        let mut dt2 = p2.distance_squared(&p3).powf(0.25);

        // Coincident neighbors collapse to the span's own knot delta.
        if dt1 < 1e-4 {
            dt1 = 1.0;
        }
        if dt0 < 1e-4 {
            dt0 = dt1;
        }
        if dt2 < 1e-4 {
            dt2 = dt1;
        }

        let t1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let t2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

        Self {
            c0: p1,
            c1: t1,
            c2: (p2 - p1) * 3.0 - t1 * 2.0 - t2,
            c3: (p1 - p2) * 2.0 + t1 + t2,
        }
    }

    fn position(&self, u: f32) -> Vec3 {
        self.c0 + (self.c1 + (self.c2 + self.c3 * u) * u) * u
    }

    /// d/du of [`Segment::position`] — unnormalized velocity along the span.
    fn velocity(&self, u: f32) -> Vec3 {
        self.c1 + (self.c2 * 2.0 + self.c3 * (3.0 * u)) * u
    }
}
