use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::partitioning::Bvh;
use crate::query::{Intersection, Ray};
use crate::shape::{PointSet, PrimitiveSet, QuadSet, SegmentSet, TriangleSet};

struct TriangleSoup {
    positions: Vec<Point<Real>>,
    triangles: Vec<[u32; 3]>,
}

impl TriangleSoup {
    fn set(&self) -> TriangleSet<'_> {
        TriangleSet::new(&self.positions, &self.triangles)
    }
}

/// Random disjoint-ish triangles scattered in a cube of half-extent 10.
fn random_triangles(count: usize, seed: u64) -> TriangleSoup {
    let mut rng = oorandom::Rand32::new(seed);
    let mut coord = |scale: f32| rng.rand_float() * 2.0 * scale - scale;

    let mut positions = Vec::with_capacity(count * 3);
    let mut triangles = Vec::with_capacity(count);
    for i in 0..count as u32 {
        let center = Vector::new(coord(10.0), coord(10.0), coord(10.0));
        for _ in 0..3 {
            positions.push(Point::from(center + Vector::new(coord(0.5), coord(0.5), coord(0.5))));
        }
        triangles.push([3 * i, 3 * i + 1, 3 * i + 2]);
    }

    TriangleSoup {
        positions,
        triangles,
    }
}

fn random_rays(count: usize, seed: u64) -> Vec<Ray> {
    let mut rng = oorandom::Rand32::new(seed);
    let mut coord = |scale: f32| rng.rand_float() * 2.0 * scale - scale;

    (0..count)
        .map(|_| {
            let origin = Point::new(coord(12.0), coord(12.0), coord(12.0));
            let mut dir = Vector::new(coord(1.0), coord(1.0), coord(1.0));
            if dir.norm_squared() < 1.0e-6 {
                dir = Vector::x();
            }
            Ray::new(origin, dir)
        })
        .collect()
}

/// Closest hit by exhaustively testing every primitive with a fresh ray.
fn brute_force_cast_ray<S: PrimitiveSet>(set: &S, ray: &Ray) -> Option<Intersection> {
    let mut best: Option<Intersection> = None;
    for prim in 0..set.len() as u32 {
        if let Some(hit) = set.cast_local_ray(prim, ray) {
            if best.is_none() || hit.distance < best.unwrap().distance {
                best = Some(Intersection::from_primitive(prim, hit));
            }
        }
    }
    best
}

fn brute_force_project_point<S: PrimitiveSet>(
    set: &S,
    pt: &Point<Real>,
    max_distance: Real,
) -> Option<Intersection> {
    let mut best: Option<Intersection> = None;
    for prim in 0..set.len() as u32 {
        if let Some(hit) = set.project_local_point(prim, pt, max_distance) {
            if best.is_none() || hit.distance < best.unwrap().distance {
                best = Some(Intersection::from_primitive(prim, hit));
            }
        }
    }
    best
}

/// Asserts the tree query and the brute-force scan agree on every ray.
///
/// When two distinct primitives are hit at (nearly) the same parameter either
/// may win, so primitive ids are only compared when the uv has to match too.
fn assert_rays_match_brute_force<S: PrimitiveSet>(bvh: &Bvh, set: &S, rays: &[Ray]) {
    for ray in rays {
        let bvh_hit = bvh.cast_ray(set, ray, false);
        let brute_hit = brute_force_cast_ray(set, ray);
        match (bvh_hit, brute_hit) {
            (None, None) => {}
            (Some(a), Some(b)) => {
                assert_relative_eq!(a.distance, b.distance, epsilon = 1.0e-5);
                if a.primitive == b.primitive {
                    assert_relative_eq!(a.uv, b.uv, epsilon = 1.0e-4);
                }
            }
            (a, b) => panic!("tree and brute force disagree on hit-ness: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn build_is_well_formed_for_every_size() {
    for len in 0..=64usize {
        // Deliberately collision-heavy coordinates so duplicate centers and
        // structural-split fallbacks get exercised alongside regular splits.
        let aabbs: Vec<Aabb> = (0..len)
            .map(|i| {
                let center = Point::new((i % 7) as Real, (i % 3) as Real, (i % 2) as Real);
                Aabb::new(center, center).loosened(0.25)
            })
            .collect();
        let bvh = Bvh::from_leaves(&aabbs);
        bvh.assert_well_formed(&aabbs);
        if len > 0 {
            assert_eq!(bvh.primitive_count(), len);
            assert!(bvh.root_aabb().is_some());
        }
    }
}

#[test]
fn build_with_coincident_centers_terminates() {
    let aabb = Aabb::new(Point::new(1.0, 2.0, 3.0), Point::new(1.0, 2.0, 3.0));
    let aabbs = vec![aabb; 33];
    let bvh = Bvh::from_leaves(&aabbs);
    bvh.assert_well_formed(&aabbs);
}

#[test]
fn empty_tree_answers_nothing() {
    let mut bvh = Bvh::from_leaves(&[]);
    assert!(bvh.nodes().is_empty());
    assert!(bvh.root_aabb().is_none());

    let soup = TriangleSoup {
        positions: Vec::new(),
        triangles: Vec::new(),
    };
    let ray = Ray::new(Point::origin(), Vector::x());
    assert!(bvh.cast_ray(&soup.set(), &ray, false).is_none());
    assert!(bvh
        .project_point(&soup.set(), &Point::origin(), 10.0, false)
        .is_none());

    bvh.refit(&[]);
    bvh.assert_well_formed(&[]);
}

#[test]
fn ray_closest_hit_matches_brute_force() {
    let soup = random_triangles(100, 1234);
    let set = soup.set();
    let bvh = Bvh::from_leaves(&set.primitive_aabbs());
    bvh.assert_well_formed(&set.primitive_aabbs());

    assert_rays_match_brute_force(&bvh, &set, &random_rays(1000, 999));
}

#[test]
fn find_any_returns_a_valid_hit() {
    // A stack of parallel triangles, all crossed by the same ray.
    let mut positions = Vec::new();
    let mut triangles = Vec::new();
    for i in 0..20u32 {
        let z = i as Real;
        positions.push(Point::new(-1.0, -1.0, z));
        positions.push(Point::new(2.0, -1.0, z));
        positions.push(Point::new(-1.0, 2.0, z));
        triangles.push([3 * i, 3 * i + 1, 3 * i + 2]);
    }
    let set = TriangleSet::new(&positions, &triangles);
    let bvh = Bvh::from_leaves(&set.primitive_aabbs());

    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::z());
    let hit = bvh.cast_ray(&set, &ray, true).expect("at least one hit exists");

    // Whatever was returned must be a genuine intersection of that primitive.
    let direct = set
        .cast_local_ray(hit.primitive, &ray)
        .expect("reported primitive is actually hit");
    assert_relative_eq!(hit.distance, direct.distance);
}

#[test]
fn refit_tracks_moved_geometry() {
    let mut soup = random_triangles(80, 555);
    let mut bvh = Bvh::from_leaves(&soup.set().primitive_aabbs());
    let permutation_before = bvh.primitives().to_vec();

    // Move every vertex, with per-vertex jitter so bounds genuinely change.
    let mut rng = oorandom::Rand32::new(777);
    for pt in &mut soup.positions {
        *pt += Vector::new(
            1.5 + rng.rand_float() * 0.2,
            -0.7 + rng.rand_float() * 0.2,
            0.3 + rng.rand_float() * 0.2,
        );
    }

    let moved_aabbs = soup.set().primitive_aabbs();
    bvh.refit(&moved_aabbs);
    bvh.assert_well_formed(&moved_aabbs);
    assert_eq!(bvh.primitives(), &permutation_before[..]);

    // Refit + query must answer exactly like a rebuild over the new bounds.
    let rebuilt = Bvh::from_leaves(&moved_aabbs);
    let set = soup.set();
    for ray in random_rays(200, 31) {
        let refitted_hit = bvh.cast_ray(&set, &ray, false);
        let rebuilt_hit = rebuilt.cast_ray(&set, &ray, false);
        match (refitted_hit, rebuilt_hit) {
            (None, None) => {}
            (Some(a), Some(b)) => assert_relative_eq!(a.distance, b.distance, epsilon = 1.0e-5),
            (a, b) => panic!("refitted and rebuilt trees disagree: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn project_point_matches_brute_force() {
    let soup = random_triangles(60, 4242);
    let set = soup.set();
    let bvh = Bvh::from_leaves(&set.primitive_aabbs());

    let mut rng = oorandom::Rand32::new(4243);
    let mut coord = |scale: f32| rng.rand_float() * 2.0 * scale - scale;
    for _ in 0..200 {
        let pt = Point::new(coord(11.0), coord(11.0), coord(11.0));
        let bvh_hit = bvh.project_point(&set, &pt, 3.0, false);
        let brute_hit = brute_force_project_point(&set, &pt, 3.0);
        match (bvh_hit, brute_hit) {
            (None, None) => {}
            (Some(a), Some(b)) => assert_relative_eq!(a.distance, b.distance, epsilon = 1.0e-5),
            (a, b) => panic!("tree and brute force disagree on projection: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn two_disjoint_triangles_scenario() {
    let positions = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(10.0, 10.0, 10.0),
        Point::new(11.0, 10.0, 10.0),
        Point::new(10.0, 11.0, 10.0),
    ];
    let triangles = [[0u32, 1, 2], [3, 4, 5]];
    let set = TriangleSet::new(&positions, &triangles);
    let bvh = Bvh::from_leaves(&set.primitive_aabbs());

    let ray = Ray::new(Point::new(0.2, 0.2, 5.0), Vector::new(0.0, 0.0, -1.0));
    let hit = bvh.cast_ray(&set, &ray, false).unwrap();
    assert_eq!(hit.primitive, 0);
    assert_relative_eq!(hit.distance, 5.0, epsilon = 1.0e-5);

    let miss = Ray::new(Point::new(100.0, 100.0, 100.0), Vector::new(1.0, 1.0, 1.0));
    assert!(bvh.cast_ray(&set, &miss, false).is_none());
}

#[test]
fn point_set_queries_match_brute_force() {
    let mut rng = oorandom::Rand32::new(8080);
    let mut coord = |scale: f32| rng.rand_float() * 2.0 * scale - scale;

    let positions: Vec<Point<Real>> = (0..150)
        .map(|_| Point::new(coord(8.0), coord(8.0), coord(8.0)))
        .collect();
    let radius: Vec<Real> = (0..150).map(|_| 0.05 + coord(0.02).abs()).collect();
    let points: Vec<u32> = (0..150).collect();
    let set = PointSet::new(&positions, &radius, &points);

    let bvh = Bvh::from_leaves(&set.primitive_aabbs());
    bvh.assert_well_formed(&set.primitive_aabbs());
    assert_rays_match_brute_force(&bvh, &set, &random_rays(300, 8081));

    for query in random_triangles(20, 8082).positions {
        let bvh_hit = bvh.project_point(&set, &query, 4.0, false);
        let brute_hit = brute_force_project_point(&set, &query, 4.0);
        assert_eq!(bvh_hit.is_some(), brute_hit.is_some());
        if let (Some(a), Some(b)) = (bvh_hit, brute_hit) {
            assert_relative_eq!(a.distance, b.distance, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn segment_set_queries_match_brute_force() {
    let mut rng = oorandom::Rand32::new(616);
    let mut coord = |scale: f32| rng.rand_float() * 2.0 * scale - scale;

    let mut positions = Vec::new();
    let mut segments = Vec::new();
    for i in 0..120u32 {
        let start = Point::new(coord(8.0), coord(8.0), coord(8.0));
        positions.push(start);
        positions.push(start + Vector::new(coord(1.0), coord(1.0), coord(1.0)));
        segments.push([2 * i, 2 * i + 1]);
    }
    let radius = vec![0.1; positions.len()];
    let set = SegmentSet::new(&positions, &radius, &segments);

    let bvh = Bvh::from_leaves(&set.primitive_aabbs());
    bvh.assert_well_formed(&set.primitive_aabbs());
    assert_rays_match_brute_force(&bvh, &set, &random_rays(300, 617));
}

#[test]
fn quad_set_queries_match_brute_force() {
    // A planar grid of unit quads, plus one degenerate (triangle) quad.
    let mut positions = Vec::new();
    let mut quads = Vec::new();
    for gy in 0..6u32 {
        for gx in 0..6u32 {
            let x = gx as Real;
            let y = gy as Real;
            let base = positions.len() as u32;
            positions.push(Point::new(x, y, 0.0));
            positions.push(Point::new(x + 1.0, y, 0.0));
            positions.push(Point::new(x + 1.0, y + 1.0, 0.0));
            positions.push(Point::new(x, y + 1.0, 0.0));
            quads.push([base, base + 1, base + 2, base + 3]);
        }
    }
    let base = positions.len() as u32;
    positions.push(Point::new(10.0, 0.0, 0.0));
    positions.push(Point::new(11.0, 0.0, 0.0));
    positions.push(Point::new(10.0, 1.0, 0.0));
    quads.push([base, base + 1, base + 2, base + 2]);

    let set = QuadSet::new(&positions, &quads);
    let bvh = Bvh::from_leaves(&set.primitive_aabbs());
    bvh.assert_well_formed(&set.primitive_aabbs());

    assert_rays_match_brute_force(&bvh, &set, &random_rays(300, 2020));

    // The degenerate quad behaves as a triangle.
    let ray = Ray::new(Point::new(10.2, 0.2, 4.0), Vector::new(0.0, 0.0, -1.0));
    let hit = bvh.cast_ray(&set, &ray, false).unwrap();
    assert_eq!(hit.primitive, 36);
    assert_relative_eq!(hit.distance, 4.0, epsilon = 1.0e-5);
}
