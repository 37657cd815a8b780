//! Brute-force visibility sweep.
//!
//! One sweep aims a ray from the viewpoint at every boundary sample of the
//! field, intersects each ray with every obstacle, keeps the nearest hit
//! per ray, and flags silhouette edges: rays that graze a circle
//! near-tangentially or cross a segment near-perpendicularly.
//!
//! The sweep is a pure function of its inputs. Outputs for one cycle fully
//! replace the previous cycle's outputs; nothing accumulates. Cost is
//! `O((width + height) * (segments + circles))` per cycle.

use tracing::debug;

use crate::geometry::{Circle, Field, Segment};
use crate::math::angle_2d::angle_between_degrees;
use crate::math::intersect_2d::{segment_circle_intersect_2d, segment_segment_intersect_2d};
use crate::math::Point2;
use crate::scene::Scene;

/// The obstacle a ray struck, carrying its geometric payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Obstacle {
    Segment(Segment),
    Circle(Circle),
}

/// A single ray-obstacle intersection candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Where the ray met the obstacle.
    pub point: Point2,
    /// Euclidean distance from the viewpoint to `point`. Always >= 0, even
    /// for the behind-ray points the circle intersection can emit.
    pub distance: f64,
    /// Which obstacle produced the hit.
    pub obstacle: Obstacle,
}

/// Marker emitted by the silhouette heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugMarker {
    /// Approximate tangent chord where a ray grazed a circle.
    Tangent(Segment),
    /// Hit point where a ray crossed a segment near-perpendicularly.
    Edge(Point2),
}

/// Output of one sweep cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepOutput {
    /// One segment from the viewpoint to the nearest hit, per ray that hit
    /// anything, in ray emission order.
    pub hit_segments: Vec<Segment>,
    /// Silhouette markers, in ray emission order.
    pub markers: Vec<DebugMarker>,
}

/// Runs one full visibility sweep from `viewpoint`.
///
/// Rays are aimed at every [`Field::boundary_targets`] sample. Each ray is
/// tested against every obstacle segment, then every circle, in scene
/// order; the nearest candidate wins, with ties broken in favor of the
/// earlier obstacle. Rays with no candidates contribute nothing.
#[must_use]
pub fn sweep(viewpoint: &Point2, field: &Field, scene: &Scene) -> SweepOutput {
    let mut out = SweepOutput::default();
    let mut rays = 0_usize;

    for target in field.boundary_targets() {
        rays += 1;
        let ray = Segment::new(*viewpoint, target);

        let Some(nearest) = nearest_hit(&ray, scene) else {
            continue;
        };

        let hit_segment = Segment::new(*viewpoint, nearest.point);
        if let Some(marker) = silhouette_marker(&hit_segment, &nearest) {
            out.markers.push(marker);
        }
        out.hit_segments.push(hit_segment);
    }

    debug!(
        rays,
        hits = out.hit_segments.len(),
        markers = out.markers.len(),
        "visibility sweep complete"
    );
    out
}

/// Collects every obstacle intersection along `ray` and reduces to the
/// nearest. The sort is stable, so equidistant candidates keep scene order.
fn nearest_hit(ray: &Segment, scene: &Scene) -> Option<Hit> {
    let mut candidates = Vec::new();

    for segment in &scene.segments {
        if let Some(point) =
            segment_segment_intersect_2d(&segment.start, &segment.end, &ray.start, &ray.end)
        {
            candidates.push(Hit {
                point,
                distance: (point - ray.start).norm(),
                obstacle: Obstacle::Segment(*segment),
            });
        }
    }

    for circle in &scene.circles {
        for point in
            segment_circle_intersect_2d(&ray.start, &ray.end, circle.center(), circle.radius())
        {
            candidates.push(Hit {
                point,
                distance: (point - ray.start).norm(),
                obstacle: Obstacle::Circle(*circle),
            });
        }
    }

    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    candidates.into_iter().next()
}

/// Flags the nearest hit if it lies on a silhouette edge.
///
/// Circle hits are flagged when the hit segment runs near-parallel to the
/// estimated tangent at the hit point; segment hits when the hit segment
/// crosses the obstacle near-perpendicularly. `angle_between_degrees`
/// yields values in `[0, 180]`, so the 268..272 window can never fire; it
/// is kept so the two heuristics read as the same shape.
fn silhouette_marker(hit_segment: &Segment, hit: &Hit) -> Option<DebugMarker> {
    match hit.obstacle {
        Obstacle::Circle(circle) => {
            let tangent = circle.tangent_through(&hit.point);
            let d = angle_between_degrees(&tangent.direction(), &hit_segment.direction());
            if (d > -2.0 && d < 2.0) || (d > 178.0 && d < 182.0) {
                return Some(DebugMarker::Tangent(tangent));
            }
        }
        Obstacle::Segment(segment) => {
            let d = angle_between_degrees(&hit_segment.direction(), &segment.direction());
            if (d > 88.0 && d < 92.0) || (d > 268.0 && d < 272.0) {
                return Some(DebugMarker::Edge(hit_segment.end));
            }
        }
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn circle(cx: f64, cy: f64, r: f64) -> Circle {
        Circle::new(Point2::new(cx, cy), r).unwrap()
    }

    fn segment(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point2::new(ax, ay), Point2::new(bx, by))
    }

    // ── nearest-hit reduction ──

    #[test]
    fn nearest_hit_takes_minimum_distance() {
        let scene = Scene::new(
            vec![segment(8.0, 0.0, 8.0, 10.0), segment(7.0, 0.0, 7.0, 10.0)],
            vec![],
        );
        let ray = segment(5.0, 5.0, 10.0, 5.0);
        let hit = nearest_hit(&ray, &scene).unwrap();
        assert!((hit.point.x - 7.0).abs() < TOLERANCE, "hit={hit:?}");
        assert!((hit.distance - 2.0).abs() < TOLERANCE, "hit={hit:?}");
    }

    #[test]
    fn nearest_hit_tie_keeps_scene_order() {
        let first = segment(7.0, 0.0, 7.0, 10.0);
        let second = segment(7.0, 10.0, 7.0, 0.0);
        let scene = Scene::new(vec![first, second], vec![]);
        let ray = segment(5.0, 5.0, 10.0, 5.0);
        let hit = nearest_hit(&ray, &scene).unwrap();
        assert_eq!(hit.obstacle, Obstacle::Segment(first));
    }

    #[test]
    fn nearest_hit_prefers_closer_circle_point() {
        let scene = Scene::new(vec![], vec![circle(100.0, 300.0, 50.0)]);
        let ray = segment(100.0, 100.0, 100.0, 600.0);
        let hit = nearest_hit(&ray, &scene).unwrap();
        assert!((hit.point.y - 250.0).abs() < TOLERANCE, "hit={hit:?}");
        assert!((hit.distance - 150.0).abs() < TOLERANCE, "hit={hit:?}");
    }

    #[test]
    fn nearest_hit_none_when_ray_misses() {
        let scene = Scene::new(vec![], vec![circle(100.0, 300.0, 50.0)]);
        let ray = segment(100.0, 100.0, 400.0, 0.0);
        assert!(nearest_hit(&ray, &scene).is_none());
    }

    // ── silhouette heuristic ──

    #[test]
    fn grazing_ray_is_flagged_tangent() {
        // Hit point (5, 0) on the circle: the estimated tangent there is
        // horizontal, and the hit segment runs along it (180 degrees).
        let c = circle(0.0, 0.0, 5.0);
        let hit_segment = segment(-5.0, 0.0, 5.0, 0.0);
        let hit = Hit {
            point: Point2::new(5.0, 0.0),
            distance: 10.0,
            obstacle: Obstacle::Circle(c),
        };
        let marker = silhouette_marker(&hit_segment, &hit);
        assert!(
            matches!(marker, Some(DebugMarker::Tangent(_))),
            "marker={marker:?}"
        );
    }

    #[test]
    fn forty_five_degree_ray_is_not_flagged() {
        let c = circle(0.0, 0.0, 5.0);
        let hit_segment = segment(0.0, -5.0, 5.0, 0.0);
        let hit = Hit {
            point: Point2::new(5.0, 0.0),
            distance: hit_segment.length(),
            obstacle: Obstacle::Circle(c),
        };
        assert!(silhouette_marker(&hit_segment, &hit).is_none());
    }

    #[test]
    fn perpendicular_segment_hit_is_flagged_edge() {
        let obstacle = segment(0.0, -1.0, 0.0, 1.0);
        let hit_segment = segment(-3.0, 0.0, 0.0, 0.0);
        let hit = Hit {
            point: Point2::new(0.0, 0.0),
            distance: 3.0,
            obstacle: Obstacle::Segment(obstacle),
        };
        let marker = silhouette_marker(&hit_segment, &hit);
        assert_eq!(marker, Some(DebugMarker::Edge(Point2::new(0.0, 0.0))));
    }

    #[test]
    fn oblique_segment_hit_is_not_flagged() {
        let obstacle = segment(0.0, 0.0, 1.0, 1.0);
        let hit_segment = segment(-3.0, 0.0, 0.0, 0.0);
        let hit = Hit {
            point: Point2::new(0.0, 0.0),
            distance: 3.0,
            obstacle: Obstacle::Segment(obstacle),
        };
        assert!(silhouette_marker(&hit_segment, &hit).is_none());
    }

    // ── end-to-end sweeps ──

    #[test]
    fn top_edge_obstacle_catches_every_upward_ray() {
        let field = Field::new(800, 600).unwrap();
        let scene = Scene::new(vec![segment(0.0, 0.0, 800.0, 0.0)], vec![]);
        let viewpoint = Point2::new(400.0, 300.0);
        let out = sweep(&viewpoint, &field, &scene);

        // 800 rays aimed at (x, 0) plus the two corner rays from the side
        // fan at y = 0.
        assert_eq!(out.hit_segments.len(), 802);
        for hs in &out.hit_segments {
            assert!(hs.end.y.abs() < TOLERANCE, "hs={hs:?}");
            assert!((hs.start - viewpoint).norm() < TOLERANCE);
        }

        // Near-perpendicular crossings are flagged; x = 400 is exactly
        // perpendicular, and the 88..92 window spans x = 390..=410.
        assert_eq!(out.markers.len(), 21);
        assert!(out
            .markers
            .contains(&DebugMarker::Edge(Point2::new(400.0, 0.0))));
        for m in &out.markers {
            assert!(matches!(m, DebugMarker::Edge(p) if p.y.abs() < TOLERANCE));
        }
    }

    #[test]
    fn circle_on_vertical_diameter() {
        let field = Field::new(800, 600).unwrap();
        let c = circle(100.0, 300.0, 50.0);
        let scene = Scene::new(vec![], vec![c]);
        let viewpoint = Point2::new(100.0, 100.0);
        let out = sweep(&viewpoint, &field, &scene);

        // The ray aimed straight down the circle's vertical diameter stops
        // at the near rim.
        assert!(out
            .hit_segments
            .iter()
            .any(|hs| (hs.end - Point2::new(100.0, 250.0)).norm() < 1e-9));

        // Every hit lies on the circle rim.
        for hs in &out.hit_segments {
            let dist = (hs.end - c.center()).norm();
            assert!((dist - 50.0).abs() < 1e-9, "hs={hs:?}");
        }

        // The diameter ray is tangent-flagged: the estimated tangent at a
        // vertically aligned hit point is itself vertical, spanning the
        // radius on each side of the hit.
        assert!(out.markers.iter().any(|m| matches!(m, DebugMarker::Tangent(t)
            if (t.start - Point2::new(100.0, 200.0)).norm() < 1e-9
                && (t.end - Point2::new(100.0, 300.0)).norm() < 1e-9)));
    }

    #[test]
    fn empty_scene_produces_empty_output() {
        let field = Field::new(800, 600).unwrap();
        let out = sweep(&Point2::new(400.0, 300.0), &field, &Scene::default());
        assert!(out.hit_segments.is_empty());
        assert!(out.markers.is_empty());
    }

    #[test]
    fn sweep_is_deterministic() {
        let field = Field::new(200, 150).unwrap();
        let scene = Scene::new(
            vec![segment(20.0, 10.0, 180.0, 140.0), segment(0.0, 75.0, 200.0, 75.0)],
            vec![circle(60.0, 40.0, 30.0), circle(150.0, 100.0, 45.0)],
        );
        let viewpoint = Point2::new(100.0, 75.0);
        let first = sweep(&viewpoint, &field, &scene);
        let second = sweep(&viewpoint, &field, &scene);
        assert_eq!(first, second);
    }

    #[test]
    fn hit_segments_follow_ray_emission_order() {
        // A box around the viewpoint: every ray hits, so the output has one
        // entry per ray, in fan order.
        let field = Field::new(10, 10).unwrap();
        let scene = Scene::new(
            vec![
                segment(1.0, 1.0, 9.0, 1.0),
                segment(9.0, 1.0, 9.0, 9.0),
                segment(9.0, 9.0, 1.0, 9.0),
                segment(1.0, 9.0, 1.0, 1.0),
            ],
            vec![],
        );
        let viewpoint = Point2::new(5.0, 5.0);
        let out = sweep(&viewpoint, &field, &scene);
        assert_eq!(out.hit_segments.len(), 2 * 10 + 2 * 10);

        let targets: Vec<Point2> = field.boundary_targets().collect();
        for (hs, target) in out.hit_segments.iter().zip(&targets) {
            // Each hit lies along its ray: direction to the hit is parallel
            // to the direction to the target.
            let ray_dir = target - viewpoint;
            let hit_dir = hs.end - viewpoint;
            let cross = ray_dir.x * hit_dir.y - ray_dir.y * hit_dir.x;
            assert!(cross.abs() < 1e-6, "target={target} hs={hs:?}");
        }
    }
}
