//! End-to-end drawing sessions driven frame by frame

use std::f32::consts::TAU;

use airpen_draw::{
    ControllerState, DrawableEvent, DrawingController, Finger, FrameInput, HandState, PenConfig,
    ShapeType,
};
use approx::assert_abs_diff_eq;
use glam::Vec3;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn pinching(tip: Vec3) -> FrameInput {
    FrameInput {
        tip,
        left: HandState::tracked().with_strength(Finger::Index, 1.0),
        right: HandState::tracked(),
    }
}

fn open(tip: Vec3) -> FrameInput {
    FrameInput {
        tip,
        left: HandState::tracked(),
        right: HandState::tracked(),
    }
}

fn fist() -> HandState {
    Finger::ALL
        .iter()
        .fold(HandState::tracked(), |hand, &f| hand.with_strength(f, 0.92))
}

fn color_switch() -> FrameInput {
    FrameInput {
        left: HandState::tracked().with_pinching(Finger::Middle, true),
        right: HandState::tracked(),
        ..Default::default()
    }
}

/// Feed a path with the draw pinch held, collecting every event
fn draw_path(controller: &mut DrawingController, path: &[Vec3]) -> Vec<DrawableEvent> {
    path.iter()
        .flat_map(|&tip| controller.tick(&pinching(tip)))
        .collect()
}

fn circle_path(center: Vec3, radius: f32, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            center + Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}

fn square_path(side: f32, steps: usize) -> Vec<Vec3> {
    let step = side / steps as f32;
    let mut path = Vec::new();
    for i in 0..steps {
        path.push(Vec3::new(i as f32 * step, 0.0, 0.0));
    }
    for i in 0..steps {
        path.push(Vec3::new(side, i as f32 * step, 0.0));
    }
    for i in 0..steps {
        path.push(Vec3::new(side - i as f32 * step, side, 0.0));
    }
    for i in 0..steps {
        path.push(Vec3::new(0.0, side - i as f32 * step, 0.0));
    }
    path.push(Vec3::ZERO);
    path
}

#[test]
fn drawn_circle_is_replaced_by_canonical_circle() {
    init_tracing();
    let mut controller = DrawingController::new(PenConfig::default()).unwrap();
    let center = Vec3::new(0.1, 1.2, 0.4);

    let events = draw_path(&mut controller, &circle_path(center, 0.2, 30));

    let replaced: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            DrawableEvent::Replace {
                id, shape, vertices, ..
            } => Some((*id, *shape, vertices.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(replaced.len(), 1);

    let (id, shape, vertices) = &replaced[0];
    assert!(
        events
            .iter()
            .filter_map(DrawableEvent::stroke_id)
            .all(|stroke| stroke == *id)
    );
    assert_eq!(*shape, ShapeType::Circle);
    assert_eq!(vertices.len(), 21);
    assert_eq!(vertices.first(), vertices.last());
    for v in vertices {
        assert_abs_diff_eq!(v.z, center.z, epsilon = 1e-5);
        assert_abs_diff_eq!(v.distance(center), 0.2, epsilon = 1e-3);
    }

    let stroke = controller.strokes().get(*id).unwrap();
    assert_eq!(stroke.shape(), Some(ShapeType::Circle));
    assert_eq!(stroke.points(), vertices.as_slice());
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn held_pinch_after_recognition_does_not_start_a_stroke() {
    init_tracing();
    let mut controller = DrawingController::new(PenConfig::default()).unwrap();
    draw_path(&mut controller, &circle_path(Vec3::ZERO, 0.2, 30));
    assert_eq!(controller.strokes().len(), 1);

    let events = draw_path(&mut controller, &[Vec3::new(0.5, 0.5, 0.0), Vec3::ONE]);
    assert!(events.is_empty());
    assert_eq!(controller.strokes().len(), 1);

    controller.tick(&open(Vec3::ONE));
    let events = controller.tick(&pinching(Vec3::ONE));
    assert!(matches!(events.as_slice(), [DrawableEvent::Create { .. }]));
    assert_eq!(controller.strokes().len(), 2);
}

#[test]
fn closed_square_stays_free_hand() {
    init_tracing();
    let mut controller = DrawingController::new(PenConfig::default()).unwrap();

    let path = square_path(0.8, 10);
    let events = draw_path(&mut controller, &path);

    assert!(
        !events
            .iter()
            .any(|e| matches!(e, DrawableEvent::Replace { .. }))
    );
    let ControllerState::Drawing(id) = controller.state() else {
        panic!("stroke should still be active");
    };
    let stroke = controller.strokes().get(id).unwrap();
    assert_eq!(stroke.points(), path.as_slice());
    assert_eq!(stroke.shape(), None);
}

#[test]
fn open_stroke_never_closes() {
    let mut controller = DrawingController::new(PenConfig::default()).unwrap();
    let path: Vec<Vec3> = (0..40).map(|i| Vec3::new(i as f32 * 0.02, 0.0, 0.0)).collect();

    let events = draw_path(&mut controller, &path);
    let appends = events
        .iter()
        .filter(|e| matches!(e, DrawableEvent::Append { .. }))
        .count();
    assert_eq!(appends, 39);
    assert!(controller.state().is_drawing());
}

#[test]
fn fist_clears_every_stroke() {
    init_tracing();
    let mut controller = DrawingController::new(PenConfig::default()).unwrap();

    let mut created = Vec::new();
    for offset in 0..3 {
        let base = Vec3::new(0.0, offset as f32, 0.0);
        let events = draw_path(&mut controller, &[base, base + Vec3::new(0.1, 0.0, 0.0)]);
        created.extend(events.iter().filter_map(|e| match e {
            DrawableEvent::Create { id, .. } => Some(*id),
            _ => None,
        }));
        controller.tick(&open(base));
    }
    let listed: Vec<_> = controller.strokes().iter().map(|s| s.id()).collect();
    assert_eq!(listed, created);

    let events = controller.tick(&FrameInput {
        right: fist(),
        ..open(Vec3::ZERO)
    });
    let destroyed: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            DrawableEvent::Destroy { id } => Some(*id),
            _ => None,
        })
        .collect();

    assert_eq!(destroyed, created);
    assert!(controller.strokes().is_empty());
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn fist_while_drawing_ends_the_stroke() {
    let mut controller = DrawingController::new(PenConfig::default()).unwrap();
    draw_path(&mut controller, &[Vec3::ZERO, Vec3::X]);

    let mut input = pinching(Vec3::Y);
    input.left = Finger::ALL
        .iter()
        .fold(input.left, |hand, &f| hand.with_strength(f, 0.99));
    controller.tick(&input);

    assert!(controller.strokes().is_empty());
    assert_eq!(controller.state(), ControllerState::Idle);

    // Once the fist opens the held pinch starts a fresh stroke
    let events = controller.tick(&pinching(Vec3::Z));
    assert!(matches!(
        events.as_slice(),
        [DrawableEvent::Create { origin, .. }] if *origin == Vec3::Z
    ));
    assert!(controller.state().is_drawing());
}

#[test]
fn drawing_resumes_after_clear_with_other_hand() {
    init_tracing();
    let mut controller = DrawingController::new(PenConfig::default()).unwrap();
    draw_path(&mut controller, &[Vec3::ZERO, Vec3::X]);

    let mut clearing = pinching(Vec3::X);
    clearing.right = Finger::ALL
        .iter()
        .fold(HandState::tracked(), |hand, &f| hand.with_strength(f, 0.95));
    let events = controller.tick(&clearing);
    assert!(matches!(events.last(), Some(DrawableEvent::Destroy { .. })));
    assert!(controller.strokes().is_empty());

    let events = controller.tick(&pinching(Vec3::Y));
    let [DrawableEvent::Create { id, .. }] = events.as_slice() else {
        panic!("expected create, got {events:?}");
    };
    assert_eq!(controller.state(), ControllerState::Drawing(*id));
}

#[test]
fn circle_segments_come_from_config() {
    let mut config = PenConfig::default();
    config.recognition.circle_segments = 8;
    let mut controller = DrawingController::new(config).unwrap();

    let events = draw_path(&mut controller, &circle_path(Vec3::ZERO, 0.2, 30));
    let vertices = events
        .iter()
        .find_map(|e| match e {
            DrawableEvent::Replace { vertices, .. } => Some(vertices),
            _ => None,
        })
        .unwrap();
    assert_eq!(vertices.len(), 9);
}

#[test]
fn color_switch_wraps_to_first() {
    let mut controller = DrawingController::new(PenConfig {
        initial_color: 4,
        ..Default::default()
    })
    .unwrap();
    controller.tick(&open(Vec3::ZERO));
    assert_eq!(controller.palette().index(), 4);

    let events = controller.tick(&color_switch());
    assert_eq!(
        events,
        vec![DrawableEvent::TipColor {
            index: 0,
            color: PenConfig::default().palette[0],
        }]
    );

    // Holding the pinch does not switch again
    assert!(controller.tick(&color_switch()).is_empty());
    controller.tick(&open(Vec3::ZERO));
    controller.tick(&color_switch());
    assert_eq!(controller.palette().index(), 1);
}

#[test]
fn recognized_shape_keeps_stroke_color() {
    let mut controller = DrawingController::new(PenConfig::default()).unwrap();
    controller.tick(&color_switch());
    controller.tick(&color_switch());
    controller.tick(&open(Vec3::ZERO));
    controller.tick(&color_switch());
    assert_eq!(controller.palette().index(), 2);

    let events = draw_path(&mut controller, &circle_path(Vec3::ZERO, 0.3, 40));
    let expected = PenConfig::default().palette[2];
    assert!(events.iter().any(|e| matches!(
        e,
        DrawableEvent::Replace { color, .. } if *color == expected
    )));
}
