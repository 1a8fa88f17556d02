//! Counting and transform laws checked over generated inputs

use figura::scene::geometry::{flip, rotate, transform_local};
use figura::{Angle, Color, Coordinate, Flip, GlobalN, Scene, Shape, ShapeId, ShapeKind};
use glam::{DVec2, dvec2};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

fn any_flip() -> impl Strategy<Value = Flip> {
    prop_oneof![Just(Flip::Normal), Just(Flip::Mirrored)]
}

fn grid_point() -> impl Strategy<Value = DVec2> {
    (-50i32..50, -50i32..50).prop_map(|(x, y)| dvec2(f64::from(x), f64::from(y)))
}

fn closed_form(kind: ShapeKind, s: u64) -> u64 {
    match kind {
        ShapeKind::Line | ShapeKind::Constant => s,
        ShapeKind::Square => s * s,
        ShapeKind::Rectangle => s * (s + 1),
        ShapeKind::Triangle => s * (s + 1) / 2,
    }
}

proptest! {
    #[test]
    fn point_count_matches_closed_form(kind in any_kind(), s in 1u32..40) {
        let points = kind.grid_points(s);
        prop_assert_eq!(points.len() as u64, closed_form(kind, u64::from(s)));
        prop_assert_eq!(kind.value(s), points.len() as u64);
    }

    #[test]
    fn shape_value_matches_drawn_dots(
        kind in any_kind(),
        n in 1u32..30,
        offset in -35i32..10,
        constant in 1u32..20,
    ) {
        let shape = Shape::new(ShapeId(1), kind, Color::rgb(0, 0, 0))
            .with_size_offset(offset)
            .with_constant_value(constant);
        let n = GlobalN::clamped(n);
        prop_assert_eq!(shape.local_points(n).len() as u64, shape.value(n));
        prop_assert_eq!(shape.formula_term(n).value, shape.value(n));
    }

    #[test]
    fn degenerate_sizes_are_empty(
        kind in prop::sample::select(vec![
            ShapeKind::Line,
            ShapeKind::Square,
            ShapeKind::Rectangle,
            ShapeKind::Triangle,
        ]),
        n in 1u32..20,
        deficit in 0i32..20,
    ) {
        let offset = -(n as i32) - deficit;
        let shape = Shape::new(ShapeId(1), kind, Color::rgb(0, 0, 0)).with_size_offset(offset);
        let n = GlobalN::clamped(n);
        prop_assert!(shape.local_points(n).is_empty());
        prop_assert_eq!(shape.value(n), 0);
    }

    #[test]
    fn full_turns_are_identity(p in grid_point(), base in 0.0f64..360.0, turns in -5i32..5) {
        let once = rotate(p, Angle(base));
        let spun = rotate(p, Angle(base + 360.0 * f64::from(turns)));
        prop_assert!(once.distance(spun) < 1e-9, "{once} vs {spun}");
    }

    #[test]
    fn rotation_preserves_distance(p in grid_point(), deg in -720.0f64..720.0) {
        prop_assert!((rotate(p, Angle(deg)).length() - p.length()).abs() < 1e-9);
    }

    #[test]
    fn double_flip_is_exact(p in grid_point(), fx in any_flip(), fy in any_flip()) {
        prop_assert_eq!(flip(flip(p, fx, fy), fx, fy), p);
    }

    #[test]
    fn right_angles_stay_on_grid(p in grid_point(), quarter in 0i32..8, fx in any_flip(), fy in any_flip()) {
        let q = transform_local(p, fx, fy, Angle(f64::from(quarter) * 90.0));
        prop_assert_eq!(q, q.round());
    }

    #[test]
    fn evaluation_never_panics(text in ".{0,64}", n in 0u32..100) {
        let v = Coordinate::from(text.as_str()).evaluate(GlobalN::clamped(n));
        prop_assert!(v.is_finite());
    }

    #[test]
    fn operator_soup_is_always_finite(text in "[-+*/().n0-9]{0,3000}", n in 0u32..100) {
        let v = Coordinate::from(text.as_str()).evaluate(GlobalN::clamped(n));
        prop_assert!(v.is_finite());
    }

    #[test]
    fn arithmetic_in_n_is_exact(a in 0u32..100, b in 1u32..100, n in 1u32..100) {
        let text = format!("(n + {a}) * {b} - n");
        let expected = (f64::from(n) + f64::from(a)) * f64::from(b) - f64::from(n);
        prop_assert_eq!(Coordinate::from(text).evaluate(GlobalN::clamped(n)), expected);
    }

    #[test]
    fn attachment_always_terminates(links in prop::collection::vec(0usize..6, 6)) {
        let mut scene = Scene::new();
        let ids: Vec<ShapeId> = (0..6).map(|_| scene.add_shape(ShapeKind::Square)).collect();
        for (child, parent) in links.into_iter().enumerate() {
            scene.attach(ids[child], ids[parent], Default::default());
        }
        for shape in scene.shapes() {
            let origin = scene.world_position(shape);
            prop_assert!(origin.is_finite());
        }
    }
}
