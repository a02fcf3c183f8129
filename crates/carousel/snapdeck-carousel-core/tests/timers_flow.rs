mod common;

use common::{land, mounted, snap_events};
use snapdeck_carousel_core::{
    Carousel, CarouselConfig, CarouselEvent, HostCommand, NeverRecheck, ScrollPhase, TimerKind,
};

fn locking() -> CarouselConfig {
    let mut cfg = CarouselConfig::new(100.0, 100.0);
    cfg.lock_scroll_while_snapping = true;
    cfg
}

fn momentum() -> CarouselConfig {
    let mut cfg = CarouselConfig::new(100.0, 100.0);
    cfg.enable_momentum = true;
    cfg
}

#[test]
fn locked_snap_disables_scrolling_until_the_timeout() {
    let mut carousel = mounted(locking(), 5);
    let out = carousel.snap_to_item(2, true, true);
    assert_eq!(
        out.commands,
        vec![
            HostCommand::SetScrollEnabled { enabled: false },
            HostCommand::ScrollTo {
                offset: 200.0,
                animated: true
            },
        ]
    );
    assert!(carousel.state().is_locked());
    assert!(carousel.timers().is_pending(TimerKind::ScrollLock));

    assert!(carousel.tick(999.0).commands.is_empty());
    let out = carousel.tick(1.0);
    assert_eq!(
        out.commands,
        vec![HostCommand::SetScrollEnabled { enabled: true }]
    );
    assert_eq!(carousel.state().phase, ScrollPhase::Settling { target: 2 });
    assert!(carousel.state().scroll_enabled);
}

#[test]
fn reaching_the_target_releases_the_lock_early() {
    let mut carousel = mounted(locking(), 5);
    carousel.snap_to_item(2, true, true);
    let out = carousel.on_scroll(200.0);
    assert!(out
        .commands
        .contains(&HostCommand::SetScrollEnabled { enabled: true }));
    assert!(!carousel.timers().is_pending(TimerKind::ScrollLock));
    assert_eq!(carousel.state().phase, ScrollPhase::Idle);
    assert!(carousel.tick(5000.0).commands.is_empty());
}

#[test]
fn drags_are_ignored_while_locked() {
    let mut carousel = mounted(locking(), 5);
    carousel.snap_to_item(2, true, true);
    carousel.on_drag_begin(0.0);
    assert!(!carousel.state().is_dragging());
}

#[test]
fn momentum_never_locks() {
    let mut cfg = momentum();
    cfg.lock_scroll_while_snapping = true;
    let mut carousel = mounted(cfg, 5);
    let out = carousel.snap_to_item(2, true, true);
    assert!(!out
        .commands
        .iter()
        .any(|c| matches!(c, HostCommand::SetScrollEnabled { .. })));
}

fn flick_to_last(carousel: &mut Carousel) -> Option<(f32, bool)> {
    carousel.on_drag_begin(0.0);
    carousel.on_scroll(150.0);
    carousel.on_scroll(396.0);
    assert!(carousel.on_drag_end().commands.is_empty());
    carousel.on_momentum_end().scroll_target()
}

#[test]
fn momentum_tracks_the_active_slide_per_event() {
    let mut carousel = mounted(momentum(), 5);
    carousel.on_scroll(150.0);
    assert_eq!(carousel.current_index(), 1);
    carousel.on_scroll(396.0);
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn edge_recheck_synthesizes_the_missing_settle() {
    let mut carousel = mounted(momentum(), 5);
    let target = flick_to_last(&mut carousel);
    assert_eq!(target, Some((400.0, true)));
    assert!(carousel.timers().is_pending(TimerKind::EdgeRecheck));

    // The host never reports the final scroll.
    assert!(carousel.tick(200.0).events.is_empty());
    let out = carousel.tick(50.0);
    assert_eq!(
        out.events,
        vec![
            CarouselEvent::BeforeSnap { index: 4 },
            CarouselEvent::Snap { index: 4 }
        ]
    );
}

#[test]
fn edge_recheck_stays_quiet_when_the_host_reported() {
    let mut carousel = mounted(momentum(), 5);
    let target = flick_to_last(&mut carousel);
    let events = snap_events(&land(&mut carousel, target));
    assert_eq!(
        events,
        vec![
            CarouselEvent::BeforeSnap { index: 4 },
            CarouselEvent::Snap { index: 4 }
        ]
    );
    assert!(carousel.tick(250.0).events.is_empty());
}

#[test]
fn edge_recheck_policy_is_pluggable() {
    let mut carousel = Carousel::new(momentum(), 5)
        .unwrap()
        .with_edge_policy(Box::new(NeverRecheck));
    let target = carousel.mount().scroll_target();
    land(&mut carousel, target);
    flick_to_last(&mut carousel);
    assert!(!carousel.timers().is_pending(TimerKind::EdgeRecheck));
    assert!(carousel.tick(1000.0).events.is_empty());
}

#[test]
fn programmatic_momentum_snap_skips_the_next_momentum_end() {
    let mut carousel = mounted(momentum(), 5);
    let target = carousel.snap_to_item(2, true, true).scroll_target();
    land(&mut carousel, target);
    assert!(carousel.on_momentum_end().commands.is_empty());
    assert!(!carousel.state().ignore_next_momentum);
}

#[test]
fn apparition_delay_reveals_on_tick() {
    let mut cfg = CarouselConfig::new(100.0, 100.0);
    cfg.apparition_delay_ms = 300.0;
    let mut carousel = Carousel::new(cfg, 3).unwrap();
    assert!(!carousel.mount().events.contains(&CarouselEvent::Shown));
    assert!(carousel.container().hidden);

    assert!(carousel.tick(200.0).events.is_empty());
    assert!(!carousel.is_visible());
    assert_eq!(carousel.tick(100.0).events, vec![CarouselEvent::Shown]);
    assert!(carousel.is_visible());
    assert!(!carousel.container().hidden);
}

#[test]
fn unmount_drops_pending_timers() {
    let mut cfg = locking();
    cfg.apparition_delay_ms = 300.0;
    let mut carousel = Carousel::new(cfg, 5).unwrap();
    carousel.mount();
    carousel.snap_to_item(3, true, true);
    assert!(carousel.timers().is_pending(TimerKind::ScrollLock));
    carousel.unmount();
    assert!(!carousel.is_mounted());
    assert!(!carousel.timers().is_pending(TimerKind::ScrollLock));
    assert!(!carousel.timers().is_pending(TimerKind::Apparition));
    assert!(carousel.tick(5000.0).is_empty());
    assert!(carousel.snap_to_item(1, true, true).is_empty());
}

#[test]
fn remount_after_a_locked_snap_starts_unlocked() {
    let mut cfg = locking();
    cfg.apparition_delay_ms = 300.0;
    let mut carousel = Carousel::new(cfg, 5).unwrap();
    carousel.mount();
    carousel.tick(300.0);
    carousel.snap_to_item(2, true, true);
    assert!(carousel.state().is_locked());
    carousel.unmount();

    let out = carousel.mount();
    assert_eq!(
        out.commands,
        vec![HostCommand::ScrollTo {
            offset: 0.0,
            animated: false
        }]
    );
    assert!(!out.events.contains(&CarouselEvent::Shown));
    assert!(carousel.container().hidden);
    assert!(carousel.state().scroll_enabled);
    assert!(!carousel.state().is_locked());
    assert!(!carousel.state().armed.before_snap);
    assert!(!carousel.state().armed.snap);
    assert_eq!(carousel.current_index(), 0);

    carousel.on_scroll(0.0);
    carousel.on_drag_begin(0.0);
    assert!(carousel.state().is_dragging());
    assert!(carousel.state().drag_start.is_some());
    assert_eq!(carousel.tick(300.0).events, vec![CarouselEvent::Shown]);
}

#[test]
fn scroll_enabled_toggle_reaches_the_host() {
    let mut carousel = mounted(CarouselConfig::new(100.0, 100.0), 3);
    let out = carousel.set_scroll_enabled(false);
    assert_eq!(
        out.commands,
        vec![HostCommand::SetScrollEnabled { enabled: false }]
    );
    assert!(!carousel.config().scroll_enabled);
    assert!(!carousel.state().scroll_enabled);
}
