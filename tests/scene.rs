//! End-to-end scene behavior through the public API

use figura::{Anchor, Axis, GridBox, Preset, Scene, ShapeKind, evaluate_coordinate};
use glam::dvec2;

#[test]
fn coordinate_examples() {
    assert_eq!(evaluate_coordinate("n+2", 3), 5.0);
    assert_eq!(evaluate_coordinate("n*n", 4), 16.0);
    assert_eq!(evaluate_coordinate("alert(1)", 3), 0.0);
    assert_eq!(evaluate_coordinate("", 5), 0.0);
}

#[test]
fn triangle_anchored_on_top_of_square() {
    let mut scene = Scene::new();
    scene.set_n(3);
    let wall = scene.add_shape(ShapeKind::Square);
    let roof = scene.add_shape(ShapeKind::Triangle);
    scene.attach(roof, wall, Anchor::Top);

    // add_shape spaced the roof out to x = 2; as an attached shape that is
    // now a fine-adjustment offset on top of the anchor (1.5, 3)
    let roof_shape = scene.get(roof).unwrap();
    assert_eq!(scene.world_position(roof_shape), dvec2(3.5, 3.0));

    scene.get_mut(roof).unwrap().set_position(0.0, 0.0);
    let roof_shape = scene.get(roof).unwrap();
    assert_eq!(scene.world_position(roof_shape), dvec2(1.5, 3.0));
    assert_eq!(scene.resolved_parent(roof_shape).map(|p| p.id()), Some(wall));
}

#[test]
fn self_attachment_places_absolutely() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Line);
    scene.get_mut(id).unwrap().set_position(4.0, -1.0);
    scene.attach(id, id, Anchor::Center);

    let shape = scene.get(id).unwrap();
    assert_eq!(scene.world_position(shape), dvec2(4.0, -1.0));
    assert!(scene.resolved_parent(shape).is_none());
}

#[test]
fn removing_a_parent_leaves_children_dangling() {
    let mut scene = Scene::new();
    let parent = scene.add_shape(ShapeKind::Square);
    let child = scene.add_shape(ShapeKind::Line);
    scene.attach(child, parent, Anchor::Right);
    scene.remove(parent);

    let child_shape = scene.get(child).unwrap();
    assert_eq!(child_shape.attached_to, Some(parent));
    assert_eq!(scene.world_position(child_shape), dvec2(2.0, 0.0));
}

#[test]
fn aggregate_square_and_shifted_triangle() {
    let mut scene = Scene::new();
    scene.set_n(3);
    scene.add_shape(ShapeKind::Square);
    let roof = scene.add_shape(ShapeKind::Triangle);
    scene.get_mut(roof).unwrap().set_size_offset(1);

    let terms: Vec<String> = scene.aggregate_formula().into_iter().map(|t| t.text).collect();
    assert_eq!(terms, vec!["n^2", "(n+1)(n+2)/2"]);
    assert_eq!(scene.aggregate_value(), 19);
    assert_eq!(scene.calculation(), "9 + 10 = 19");
}

#[test]
fn hit_threshold_is_six_tenths() {
    let mut scene = Scene::new();
    scene.set_n(4);
    let line = scene.add_shape(ShapeKind::Line);

    let hit = scene.hit_test(dvec2(2.0, 0.59)).map(|s| s.id());
    assert_eq!(hit, Some(line));
    assert!(scene.hit_test(dvec2(2.0, 0.61)).is_none());
}

#[test]
fn hit_follows_rotation_and_flip() {
    let mut scene = Scene::new();
    scene.set_n(3);
    let line = scene.add_shape(ShapeKind::Line);
    scene.rotate_shape(line, 90.0);
    assert!(scene.hit_test(dvec2(0.0, 2.0)).is_some());
    assert!(scene.hit_test(dvec2(2.0, 0.0)).is_none());

    scene.flip_shape(line, Axis::X);
    // flip happens before rotation, so mirroring x turns the column downwards
    assert!(scene.hit_test(dvec2(0.0, -2.0)).is_some());
}

#[test]
fn box_select_after_move() {
    let mut scene = Scene::new();
    let a = scene.add_shape(ShapeKind::Line);
    let b = scene.add_shape(ShapeKind::Line);
    scene.move_shape(b, 10.0, 10.0);

    let area = GridBox::from_corners(dvec2(-1.0, -1.0), dvec2(1.0, 1.0));
    let picked = scene.box_select(area);
    assert!(picked.contains(&a));
    assert!(!picked.contains(&b));
}

#[test]
fn dynamic_position_tracks_n() {
    let mut scene = Scene::new();
    let id = scene.add_shape(ShapeKind::Line);
    scene.get_mut(id).unwrap().set_position("n*2", "-n");

    scene.set_n(2);
    assert_eq!(scene.world_position(scene.get(id).unwrap()), dvec2(4.0, -2.0));
    scene.set_n(5);
    assert_eq!(scene.world_position(scene.get(id).unwrap()), dvec2(10.0, -5.0));
}

#[test]
fn preset_report() {
    let mut scene = Scene::new();
    scene.load_preset(Preset::Boat);
    let report = format!(
        "{}\n{}\n{}",
        scene.formula_text(),
        scene.formula_latex(),
        scene.calculation()
    );
    insta::assert_snapshot!(report, @r"
    n(n+1) + n + n(n+1)/2
    F_n = \color{#3b82f6}{n(n+1)} + \color{#f97316}{n} + \color{#ef4444}{\frac{n(n+1)}{2}}
    12 + 3 + 6 = 21
    ");
}

#[test]
fn empty_scene_reads_zero() {
    let scene = Scene::new();
    assert_eq!(scene.formula_text(), "0");
    assert_eq!(scene.aggregate_value(), 0);
    assert!(scene.hit_test(dvec2(0.0, 0.0)).is_none());
    assert!(scene.world_bounds().is_none());
}
