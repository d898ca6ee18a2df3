use desk_wm::{
    DesktopId, DesktopSpec, PointerEvent, Rect, SessionKind, WindowId, WindowManager, WindowSpec,
};

const DESKTOP: DesktopId = DesktopId(0);
const WINDOW: WindowId = WindowId(0);

/// Desktop 800x600 with one 200x100 window dragged to the origin, matching
/// the classic drag scenario starting from (0, 0).
fn manager_with_window_at_origin() -> WindowManager {
    let mut manager = WindowManager::init(vec![
        DesktopSpec::new(800, 600).window(WindowSpec::new("a", 200, 100)),
    ])
    .expect("valid setup");
    // Cascade puts the window at (50, 50); walk it to (0, 0) first.
    manager.handle_event(DESKTOP, &PointerEvent::down(60, 60));
    manager.handle_event(DESKTOP, &PointerEvent::moved(10, 10));
    manager.handle_event(DESKTOP, &PointerEvent::up(10, 10));
    assert_eq!(window_rect(&manager), Rect::new(0, 0, 200, 100));
    manager
}

fn window_rect(manager: &WindowManager) -> Rect {
    manager
        .desktop(DESKTOP)
        .unwrap()
        .window(WINDOW)
        .unwrap()
        .rect()
}

#[test]
fn drag_follows_the_pointer_delta() {
    let mut manager = manager_with_window_at_origin();
    assert!(manager.handle_event(DESKTOP, &PointerEvent::down(50, 10)));
    assert_eq!(
        manager.active_session(),
        Some((DESKTOP, WINDOW, SessionKind::Drag))
    );
    assert!(manager.handle_event(DESKTOP, &PointerEvent::moved(70, 40)));
    assert_eq!(window_rect(&manager), Rect::new(20, 30, 200, 100));
}

#[test]
fn clamp_rejects_axes_independently() {
    let mut manager = manager_with_window_at_origin();
    manager.handle_event(DESKTOP, &PointerEvent::down(50, 10));
    manager.handle_event(DESKTOP, &PointerEvent::moved(70, 40));
    assert_eq!(window_rect(&manager), Rect::new(20, 30, 200, 100));
    // X would push the right edge past 800; Y keeps updating.
    manager.handle_event(DESKTOP, &PointerEvent::moved(900, 40));
    assert_eq!(window_rect(&manager), Rect::new(20, 30, 200, 100));
    manager.handle_event(DESKTOP, &PointerEvent::moved(900, 60));
    assert_eq!(window_rect(&manager), Rect::new(20, 50, 200, 100));
    // And the mirror case: Y violates while X recovers.
    manager.handle_event(DESKTOP, &PointerEvent::moved(100, -500));
    assert_eq!(window_rect(&manager), Rect::new(50, 50, 200, 100));
}

#[test]
fn release_ends_the_session_for_good() {
    let mut manager = manager_with_window_at_origin();
    manager.handle_event(DESKTOP, &PointerEvent::down(50, 10));
    manager.handle_event(DESKTOP, &PointerEvent::moved(70, 40));
    // Release lands far outside the window; the session still ends.
    assert!(manager.handle_event(DESKTOP, &PointerEvent::up(2000, 2000)));
    assert!(manager.active_session().is_none());
    let rect = window_rect(&manager);
    // Subsequent moves without a new press change nothing.
    assert!(!manager.handle_event(DESKTOP, &PointerEvent::moved(300, 300)));
    assert_eq!(window_rect(&manager), rect);
}

#[test]
fn global_release_is_idempotent() {
    let mut manager = manager_with_window_at_origin();
    let rect = window_rect(&manager);
    manager.release_all();
    manager.release_all();
    assert!(manager.active_session().is_none());
    assert_eq!(window_rect(&manager), rect);
    assert!(!manager.handle_event(DESKTOP, &PointerEvent::up(0, 0)));
}

#[test]
fn a_new_press_supersedes_a_lingering_session() {
    let mut manager = WindowManager::init(vec![DesktopSpec {
        width: 800,
        height: 600,
        windows: vec![WindowSpec::new("a", 48, 40), WindowSpec::new("b", 48, 40)],
    }])
    .expect("valid setup");
    // Press window a's title bar, then press window b's without an
    // intervening release: the second press owns the only session slot.
    manager.handle_event(DESKTOP, &PointerEvent::down(55, 55));
    assert_eq!(
        manager.active_session().map(|(_, id, _)| id),
        Some(WindowId(0))
    );
    manager.handle_event(DESKTOP, &PointerEvent::down(105, 105));
    assert_eq!(
        manager.active_session(),
        Some((DESKTOP, WindowId(1), SessionKind::Drag))
    );
    // Moves now steer window b only.
    manager.handle_event(DESKTOP, &PointerEvent::moved(115, 105));
    let desktop = manager.desktop(DESKTOP).unwrap();
    assert_eq!(desktop.window(WindowId(1)).unwrap().rect().left, 110);
    assert_eq!(desktop.window(WindowId(0)).unwrap().rect().left, 50);
}

#[test]
fn moves_on_another_desktop_do_not_reach_the_session() {
    let mut manager = WindowManager::init(vec![
        DesktopSpec::new(800, 600).window(WindowSpec::new("a", 200, 100)),
        DesktopSpec::new(800, 600).window(WindowSpec::new("b", 200, 100)),
    ])
    .expect("valid setup");
    manager.handle_event(DESKTOP, &PointerEvent::down(60, 60));
    assert!(!manager.handle_event(DesktopId(1), &PointerEvent::moved(200, 200)));
    let first = manager.desktop(DESKTOP).unwrap().window(WINDOW).unwrap().rect();
    let second = manager.desktop(DesktopId(1)).unwrap().window(WINDOW).unwrap().rect();
    assert_eq!(first, Rect::new(50, 50, 200, 100));
    assert_eq!(second, Rect::new(50, 50, 200, 100));
}

#[test]
fn body_presses_do_not_start_a_session() {
    let mut manager = manager_with_window_at_origin();
    assert!(!manager.handle_event(DESKTOP, &PointerEvent::down(100, 60)));
    assert!(manager.active_session().is_none());
    // And the z index is untouched by a body press.
    assert_eq!(
        manager.desktop(DESKTOP).unwrap().window(WINDOW).unwrap().z(),
        1
    );
}
