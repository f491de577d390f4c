//! End-to-end integration tests for navigation requests.
//!
//! Each test exercises: normalize -> lookup -> solve -> deliver against a
//! `MemoryScene` and a `SceneRecorder`.

use pretty_assertions::assert_eq;

use waypoint_nav::delivery::{Consumer, RecordedScene};
use waypoint_nav::{
    Error, MemoryScene, NavigationSession, NavigatorConfig, PathDelivery, RouteRenderer,
    RouteStyle, SceneDocument, SceneRecorder, TravelState, Vec3,
};

// ============================================================================
// Helpers
// ============================================================================

const CAMPUS: &str = r#"{
    "waypoints": [
        {"id": 1, "name": "LUNAR_START_MAIN_GATE", "position": [0.0, 0.0, 0.0], "neighbors": [2]},
        {"id": 2, "name": "Plaza", "position": [0.0, 0.0, 10.0], "neighbors": [1, 3, 4, null]},
        {"id": 3, "name": "Lib2", "position": [6.0, 0.0, 10.0], "neighbors": [2]},
        {"id": 4, "name": "Open Stage", "position": [0.0, 0.0, 18.0], "neighbors": [2]},
        {"id": 5, "name": "Storage Shed", "position": [30.0, 0.0, 30.0], "neighbors": []},
        {"id": 6, "name": "", "position": [1.0, 0.0, 1.0], "neighbors": [1]}
    ]
}"#;

fn campus_scene() -> MemoryScene {
    SceneDocument::from_json_str(CAMPUS).unwrap().into_scene().unwrap()
}

fn recording_session(config: NavigatorConfig) -> (NavigationSession, SceneRecorder, MemoryScene) {
    let mut scene = campus_scene();
    let recorder = SceneRecorder::new();
    let delivery = PathDelivery::recording(&config, &recorder);
    let session = NavigationSession::new(&mut scene, config, delivery).unwrap();
    (session, recorder, scene)
}

struct BrokenRoute;

impl RouteRenderer for BrokenRoute {
    fn clear(&mut self) {}

    fn draw(&mut self, _points: &[Vec3], _style: &RouteStyle) -> waypoint_nav::Result<()> {
        Err(Error::Collaborator {
            consumer: "route renderer".into(),
            message: "no material".into(),
        })
    }
}

// ============================================================================
// 1. Build side effects
// ============================================================================

#[test]
fn test_build_hides_named_waypoints() {
    let (session, _recorder, scene) = recording_session(NavigatorConfig::default());
    assert_eq!(session.graph().len(), 5);
    assert_eq!(scene.hidden_count(), 5);
    assert!(!scene.is_hidden(waypoint_nav::WaypointId(6)));
}

// ============================================================================
// 2. Successful request
// ============================================================================

#[test]
fn test_full_request_delivers_everything() {
    let (mut session, recorder, _scene) = recording_session(NavigatorConfig::default());

    let outcome = session.request_navigation("lunar start main gate", "LIB2").unwrap();
    assert_eq!(outcome.path.names(), vec!["LUNAR_START_MAIN_GATE", "Plaza", "Lib2"]);
    assert!((outcome.path.length() - 16.0).abs() < 1e-4);
    assert!(outcome.report.is_complete());

    let scene = recorder.snapshot();
    assert_eq!(
        scene.route,
        Some(vec![
            Vec3::new(0.0, 0.1, 0.0),
            Vec3::new(0.0, 0.1, 10.0),
            Vec3::new(6.0, 0.1, 10.0),
        ])
    );
    assert_eq!(scene.pin, Some(Vec3::new(6.0, 0.2, 10.0)));
    assert_eq!(scene.observer, Some(Vec3::ZERO));
    assert_eq!(scene.traveler, Some(Vec3::ZERO));
    assert_eq!(session.traveler_state(), TravelState::Traveling { segment: 0 });
}

#[test]
fn test_observer_not_moved_outside_preview() {
    let mut config = NavigatorConfig::default();
    config.preview.enabled = false;
    let (mut session, recorder, _scene) = recording_session(config);

    let outcome = session.request_navigation("plaza", "open stage").unwrap();
    assert!(!outcome.report.observer_moved);
    assert_eq!(recorder.snapshot().observer, None);
}

// ============================================================================
// 3. Failed requests leave no trace
// ============================================================================

#[test]
fn test_unknown_destination_has_no_side_effects() {
    let (mut session, recorder, _scene) = recording_session(NavigatorConfig::default());

    let err = session.request_navigation("plaza", "cafeteria").unwrap_err();
    assert!(matches!(err, Error::WaypointNotFound { ref key } if key == "cafeteria"));
    assert_eq!(recorder.snapshot(), RecordedScene::default());
    assert!(session.current_route().is_none());
}

#[test]
fn test_unreachable_destination_has_no_side_effects() {
    let (mut session, recorder, _scene) = recording_session(NavigatorConfig::default());

    let err = session.request_navigation("plaza", "storage shed").unwrap_err();
    assert!(matches!(
        err,
        Error::RouteUnreachable { ref start, ref destination }
            if start == "plaza" && destination == "storage_shed"
    ));
    assert_eq!(recorder.snapshot(), RecordedScene::default());
    assert_eq!(session.traveler_state(), TravelState::Idle);
}

#[test]
fn test_failure_keeps_previous_route_and_traveler() {
    let (mut session, recorder, _scene) = recording_session(NavigatorConfig::default());
    session.request_navigation("plaza", "lib2").unwrap();
    session.tick(0.5);

    assert!(session.request_navigation("plaza", "storage shed").is_err());
    assert_eq!(session.current_route().unwrap().names(), vec!["Plaza", "Lib2"]);
    assert_eq!(session.traveler_state(), TravelState::Traveling { segment: 0 });
    assert_eq!(recorder.snapshot().pin, Some(Vec3::new(6.0, 0.2, 10.0)));

    // And the store still answers
    assert!(session.request_navigation("lib2", "open stage").is_ok());
}

// ============================================================================
// 4. Replacing a route
// ============================================================================

#[test]
fn test_new_request_replaces_route_pin_and_traveler() {
    let (mut session, recorder, _scene) = recording_session(NavigatorConfig::default());

    session.request_navigation("plaza", "lib2").unwrap();
    for _ in 0..10 {
        session.tick(0.1);
    }
    let first_token = session.traveler().unwrap().token().clone();

    session.request_navigation("plaza", "open stage").unwrap();
    assert!(first_token.is_cancelled());
    assert!(!session.traveler().unwrap().token().is_cancelled());

    let scene = recorder.snapshot();
    assert_eq!(scene.route_draws, 2);
    assert_eq!(scene.route_clears, 2);
    assert_eq!(scene.pins_placed, 2);
    assert_eq!(scene.pins_removed, 1);
    assert_eq!(scene.pin, Some(Vec3::new(0.0, 0.2, 18.0)));
    assert_eq!(scene.traveler_spawns, 2);
    assert_eq!(scene.traveler, Some(Vec3::new(0.0, 0.0, 10.0)));
}

// ============================================================================
// 5. Graceful degradation
// ============================================================================

#[test]
fn test_missing_pin_renderer_does_not_stop_pipeline() {
    let config = NavigatorConfig::default();
    let recorder = SceneRecorder::new();
    let delivery = PathDelivery::new(&config)
        .with_route_renderer(Box::new(recorder.clone()))
        .with_traveler_renderer(Box::new(recorder.clone()));
    let mut session = NavigationSession::new(&mut campus_scene(), config, delivery).unwrap();

    let outcome = session.request_navigation("plaza", "lib2").unwrap();
    let failed: Vec<Consumer> = outcome.report.failures.iter().map(|f| f.consumer).collect();
    assert_eq!(failed, vec![Consumer::Pin, Consumer::Observer]);
    assert!(outcome.report.drawn);
    assert!(outcome.report.traveler_spawned);
    assert!(recorder.snapshot().route.is_some());
}

#[test]
fn test_failing_route_renderer_does_not_stop_pin() {
    let config = NavigatorConfig::default();
    let recorder = SceneRecorder::new();
    let delivery = PathDelivery::new(&config)
        .with_route_renderer(Box::new(BrokenRoute))
        .with_pin_renderer(Box::new(recorder.clone()));
    let mut session = NavigationSession::new(&mut campus_scene(), config, delivery).unwrap();

    let outcome = session.request_navigation("plaza", "lib2").unwrap();
    assert!(!outcome.report.drawn);
    assert_eq!(outcome.report.failures[0].consumer, Consumer::Route);
    assert_eq!(outcome.report.failures[0].message, "route renderer failed: no material");
    assert_eq!(recorder.snapshot().pin, Some(Vec3::new(6.0, 0.2, 10.0)));
}

#[test]
fn test_no_traveler_renderer_means_no_animation() {
    let config = NavigatorConfig::default();
    let recorder = SceneRecorder::new();
    let delivery = PathDelivery::new(&config).with_route_renderer(Box::new(recorder.clone()));
    let mut session = NavigationSession::new(&mut campus_scene(), config, delivery).unwrap();

    session.request_navigation("plaza", "lib2").unwrap();
    assert!(session.tick(0.1).is_none());
    assert_eq!(session.traveler_state(), TravelState::Idle);
}

// ============================================================================
// 6. Entry points
// ============================================================================

#[test]
fn test_start_navigation_forwards_names() {
    let (mut session, _recorder, _scene) = recording_session(NavigatorConfig::default());
    let outcome = session.start_navigation("Open Stage", "Lib2").unwrap();
    assert_eq!(outcome.path.names(), vec!["Open Stage", "Plaza", "Lib2"]);
}

#[test]
fn test_launch_destination_uses_default_start() {
    let (mut session, _recorder, _scene) = recording_session(NavigatorConfig::default());
    let outcome = session.receive_launch_destination("open stage").unwrap();
    assert_eq!(outcome.path.start().map(|w| w.name.as_str()), Some("LUNAR_START_MAIN_GATE"));
}

#[test]
fn test_preview_navigates_on_startup() {
    let (mut session, recorder, _scene) = recording_session(NavigatorConfig::default());
    let outcome = session.run_preview().unwrap().unwrap();
    assert_eq!(outcome.path.destination().map(|w| w.name.as_str()), Some("Lib2"));
    assert_eq!(recorder.snapshot().observer, Some(Vec3::ZERO));
}

#[test]
fn test_self_route_is_single_stop() {
    let (mut session, recorder, _scene) = recording_session(NavigatorConfig::default());
    let outcome = session.request_navigation("Plaza", "plaza").unwrap();
    assert_eq!(outcome.path.len(), 1);
    assert_eq!(recorder.snapshot().pin, Some(Vec3::new(0.0, 0.2, 10.0)));

    let update = session.tick(0.016).unwrap();
    assert!(update.arrived);
}

// ============================================================================
// 7. Independent sessions
// ============================================================================

#[test]
fn test_sessions_do_not_share_state() {
    let (mut first, first_recorder, _) = recording_session(NavigatorConfig::default());
    let (second, second_recorder, _) = recording_session(NavigatorConfig::default());

    first.request_navigation("plaza", "lib2").unwrap();
    assert!(first_recorder.snapshot().pin.is_some());
    assert_eq!(second_recorder.snapshot(), RecordedScene::default());
    assert!(second.current_route().is_none());
}
