//! Zustandsloser Geometrie-Kernel: De-Casteljau-Auswertung, Mittelpunkte,
//! Parallel-Versatz (Segment-Normale und Winkelhalbierende), Segment-Schnitt.
//!
//! Alle Funktionen sind total: degenerierte Eingaben liefern einen
//! definierten Rückfallwert statt eines Fehlers.

use super::point::Point;
use glam::Vec2;

/// Lineare Interpolation `a·(1−t) + b·t`.
///
/// Die Form liefert bei `t = 0` exakt `a` und bei `t = 1` exakt `b`.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a * (1.0 - t) + b * t
}

/// Wertet die Bézier-Kurve beliebigen Grades bei `t` aus (De Casteljau).
///
/// - 0 Punkte: Ursprung (Schutzfall, sollte nicht auftreten)
/// - 1 Punkt: der Punkt selbst
pub fn evaluate_bezier(points: &[Vec2], t: f32) -> Vec2 {
    let mut scratch = Vec::with_capacity(points.len());
    evaluate_bezier_with(points, t, &mut scratch)
}

/// Wie [`evaluate_bezier`], nutzt aber einen wiederverwendbaren Puffer.
fn evaluate_bezier_with(points: &[Vec2], t: f32, scratch: &mut Vec<Vec2>) -> Vec2 {
    match points {
        [] => Vec2::ZERO,
        [single] => *single,
        _ => {
            scratch.clear();
            scratch.extend_from_slice(points);
            let mut len = scratch.len();
            while len > 1 {
                for i in 0..len - 1 {
                    scratch[i] = lerp(scratch[i], scratch[i + 1], t);
                }
                len -= 1;
            }
            scratch[0]
        }
    }
}

/// Tastet die Bézier-Kurve an `samples` gleichverteilten Parametern in [0, 1] ab.
///
/// Der erste Sample liegt exakt auf dem ersten, der letzte exakt auf dem
/// letzten Kontrollpunkt.
pub fn sample_bezier(points: &[Vec2], samples: usize) -> Vec<Vec2> {
    if points.is_empty() || samples == 0 {
        return Vec::new();
    }
    if samples == 1 {
        return vec![points[0]];
    }

    let mut scratch = Vec::with_capacity(points.len());
    let last = (samples - 1) as f32;
    (0..samples)
        .map(|i| evaluate_bezier_with(points, i as f32 / last, &mut scratch))
        .collect()
}

/// Mittelpunkte aufeinanderfolgender Punkte (`len − 1` Einträge, als Mittelpunkt markiert).
pub fn compute_midpoints(points: &[Point]) -> Vec<Point> {
    points
        .windows(2)
        .map(|pair| Point::midpoint((pair[0].position + pair[1].position) * 0.5))
        .collect()
}

/// Linke Einheitsnormale des Segments `p0 → p1` oder `None` bei Länge 0.
pub fn segment_normal(p0: Vec2, p1: Vec2) -> Option<Vec2> {
    let delta = p1 - p0;
    let len = delta.length();
    if len == 0.0 {
        return None;
    }
    Some(delta.perp() / len)
}

/// Verschiebt das Segment `p0 → p1` senkrecht um `distance`.
///
/// Segmente der Länge 0 werden unverändert zurückgegeben.
pub fn segment_normal_offset(p0: Vec2, p1: Vec2, distance: f32) -> (Vec2, Vec2) {
    match segment_normal(p0, p1) {
        Some(normal) => (p0 + normal * distance, p1 + normal * distance),
        None => (p0, p1),
    }
}

/// Einheitsrichtung der Winkelhalbierenden am Knoten `curr`.
///
/// Mittelt die Normalen des ein- und ausgehenden Segments. Fehlt eine der
/// beiden (Endpunkt oder Segment der Länge 0), gilt die andere; fehlen beide,
/// ergibt sich `Vec2::ZERO`. Bei einer 180°-Kehre wird die eingehende
/// Normale verwendet.
pub fn vertex_bisector(prev: Option<Vec2>, curr: Vec2, next: Option<Vec2>) -> Vec2 {
    let incoming = prev.and_then(|p| segment_normal(p, curr));
    let outgoing = next.and_then(|n| segment_normal(curr, n));

    match (incoming, outgoing) {
        (Some(a), Some(b)) => (a + b).try_normalize().unwrap_or(a),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => Vec2::ZERO,
    }
}

/// Versatzpfad per Segment-Normale: jedes Sehnen-Segment wird einzeln verschoben.
///
/// Der Pfad hat dieselbe Knotenanzahl wie `points`; unter 2 Punkten ist er leer.
pub fn offset_polyline_segments(points: &[Vec2], distance: f32) -> Vec<Vec2> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut path = Vec::with_capacity(points.len());
    let last_segment = points.len() - 2;
    for (i, pair) in points.windows(2).enumerate() {
        let (start, end) = segment_normal_offset(pair[0], pair[1], distance);
        path.push(start);
        if i == last_segment {
            path.push(end);
        }
    }
    path
}

/// Versatzpfad per Winkelhalbierender: jeder Knoten wird entlang seiner
/// Halbierenden um `distance` verschoben (ohne Gehrungs-Korrektur).
pub fn offset_polyline_bisector(points: &[Vec2], distance: f32) -> Vec<Vec2> {
    if points.len() < 2 {
        return Vec::new();
    }

    (0..points.len())
        .map(|i| {
            let prev = i.checked_sub(1).map(|p| points[p]);
            let next = points.get(i + 1).copied();
            points[i] + vertex_bisector(prev, points[i], next) * distance
        })
        .collect()
}

/// Abstände der `count` Parallelen zur Mittellinie: `(i − (n+1)/2)·spacing`, i = 1..=n.
///
/// Symmetrisch um 0, von `−(n−1)/2·d` bis `+(n−1)/2·d`.
pub fn parallel_distances(count: u32, spacing: f32) -> Vec<f32> {
    let center = (count as f32 + 1.0) / 2.0;
    (1..=count)
        .map(|index| (index as f32 - center) * spacing)
        .collect()
}

/// Orientierung von `c` relativ zur Geraden `a → b` (> 0: links, < 0: rechts).
#[inline]
fn orientation(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

#[inline]
fn strictly_opposite(u: f32, v: f32) -> bool {
    (u > 0.0 && v < 0.0) || (u < 0.0 && v > 0.0)
}

/// Schneiden sich die Segmente `p1–p2` und `q1–q2`?
///
/// Strikter Orientierungstest: Berühren an Endpunkten und kollineare
/// Überlappung gelten nicht als Schnitt.
pub fn do_segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    strictly_opposite(orientation(p1, p2, q1), orientation(p1, p2, q2))
        && strictly_opposite(orientation(q1, q2, p1), orientation(q1, q2, p2))
}

/// Abstand von `pos` zum Segment `a–b`.
pub fn distance_to_segment(pos: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return pos.distance(a);
    }
    let t = ((pos - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    pos.distance(a + ab * t)
}

/// Kleinster Abstand von `pos` zu einer Polylinie (`None` unter 2 Punkten).
pub fn distance_to_polyline(pos: Vec2, path: &[Vec2]) -> Option<f32> {
    path.windows(2)
        .map(|pair| distance_to_segment(pos, pair[0], pair[1]))
        .min_by(f32::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(raw: &[(f32, f32)]) -> Vec<Vec2> {
        raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
    }

    #[test]
    fn bezier_hits_endpoints_exactly() {
        let cases = [
            pts(&[(3.0, 4.0)]),
            pts(&[(0.0, 0.0), (400.0, 400.0)]),
            pts(&[(0.0, 0.0), (400.0, 400.0), (700.0, 400.0)]),
            pts(&[(0.1, 0.7), (13.3, -2.9), (5.5, 8.25), (-7.0, 1.0), (2.0, 2.0)]),
        ];
        for points in &cases {
            assert_eq!(evaluate_bezier(points, 0.0), points[0]);
            assert_eq!(evaluate_bezier(points, 1.0), *points.last().unwrap());
        }
    }

    #[test]
    fn bezier_with_two_points_is_linear() {
        let a = Vec2::new(-10.0, 5.0);
        let b = Vec2::new(30.0, 25.0);
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let p = evaluate_bezier(&[a, b], t);
            let expected = lerp(a, b, t);
            assert_relative_eq!(p.x, expected.x, epsilon = 1e-5);
            assert_relative_eq!(p.y, expected.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn bezier_degenerate_inputs() {
        assert_eq!(evaluate_bezier(&[], 0.5), Vec2::ZERO);
        assert_eq!(evaluate_bezier(&[Vec2::new(7.0, 8.0)], 0.3), Vec2::new(7.0, 8.0));
    }

    #[test]
    fn bezier_quadratic_midpoint() {
        // B(0.5) = 0.25·P0 + 0.5·P1 + 0.25·P2
        let points = pts(&[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]);
        let mid = evaluate_bezier(&points, 0.5);
        assert!((mid - Vec2::new(5.0, 5.0)).length() < 0.001);
    }

    #[test]
    fn sample_bezier_count_and_ends() {
        let points = pts(&[(0.0, 0.0), (400.0, 400.0), (700.0, 400.0)]);
        let samples = sample_bezier(&points, 101);
        assert_eq!(samples.len(), 101);
        assert_eq!(samples[0], points[0]);
        assert_eq!(samples[100], points[2]);
        assert!(sample_bezier(&[], 101).is_empty());
        assert_eq!(sample_bezier(&points, 1), vec![points[0]]);
    }

    #[test]
    fn midpoints_count_and_values() {
        assert!(compute_midpoints(&[]).is_empty());
        assert!(compute_midpoints(&[Point::new(Vec2::ONE)]).is_empty());

        let points: Vec<Point> = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 20.0)])
            .into_iter()
            .map(Point::new)
            .collect();
        let mids = compute_midpoints(&points);
        assert_eq!(mids.len(), 2);
        assert_eq!(mids[0].position, Vec2::new(5.0, 0.0));
        assert_eq!(mids[1].position, Vec2::new(10.0, 10.0));
        assert!(mids.iter().all(|m| !m.is_editable()));
    }

    #[test]
    fn normal_offset_of_zero_length_segment_is_identity() {
        let p = Vec2::new(4.0, -2.0);
        for d in [-50.0, 0.0, 3.5, 1e6] {
            assert_eq!(segment_normal_offset(p, p, d), (p, p));
        }
    }

    #[test]
    fn normal_offset_of_horizontal_segment() {
        let (a, b) = segment_normal_offset(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 10.0);
        assert_relative_eq!(a.y, 10.0);
        assert_relative_eq!(b.y, 10.0);
        assert_relative_eq!(a.x, 0.0);
        assert_relative_eq!(b.x, 100.0);
    }

    #[test]
    fn segment_offset_path_keeps_vertex_count() {
        let points = pts(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
        let path = offset_polyline_segments(&points, 5.0);
        assert_eq!(path.len(), points.len());
        assert!(offset_polyline_segments(&points[..1], 5.0).is_empty());
    }

    #[test]
    fn bisector_and_segment_offsets_agree_on_straight_lines() {
        let points = pts(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
        let a = offset_polyline_segments(&points, -7.0);
        let b = offset_polyline_bisector(&points, -7.0);
        for (p, q) in a.iter().zip(&b) {
            assert!((*p - *q).length() < 1e-4);
        }
    }

    #[test]
    fn bisector_at_right_angle_points_diagonally() {
        let dir = vertex_bisector(
            Some(Vec2::new(0.0, 0.0)),
            Vec2::new(10.0, 0.0),
            Some(Vec2::new(10.0, 10.0)),
        );
        let expected = Vec2::new(-1.0, 1.0).normalize();
        assert!((dir - expected).length() < 1e-5);
        assert_eq!(vertex_bisector(None, Vec2::ZERO, None), Vec2::ZERO);
    }

    #[test]
    fn parallel_distances_are_symmetric() {
        assert_eq!(parallel_distances(3, 10.0), vec![-10.0, 0.0, 10.0]);
        assert_eq!(parallel_distances(2, 4.0), vec![-2.0, 2.0]);
        assert_eq!(parallel_distances(1, 4.0), vec![0.0]);
        assert!(parallel_distances(0, 4.0).is_empty());
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(do_segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        ));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        assert!(!do_segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(6.0, 1.0),
        ));
    }

    #[test]
    fn touching_endpoints_do_not_count_as_intersection() {
        assert!(!do_segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ));
        // T-Berührung: Endpunkt liegt auf dem anderen Segment
        assert!(!do_segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 10.0),
        ));
    }

    #[test]
    fn collinear_overlap_does_not_count_as_intersection() {
        assert!(!do_segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(15.0, 0.0),
        ));
    }

    #[test]
    fn polyline_distance() {
        let path = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert_relative_eq!(distance_to_polyline(Vec2::new(5.0, 3.0), &path).unwrap(), 3.0);
        assert_relative_eq!(distance_to_polyline(Vec2::new(14.0, 5.0), &path).unwrap(), 4.0);
        assert!(distance_to_polyline(Vec2::ZERO, &path[..1]).is_none());
        assert_relative_eq!(
            distance_to_segment(Vec2::new(3.0, 4.0), Vec2::ZERO, Vec2::ZERO),
            5.0
        );
    }
}
