mod common;

use common::{land, mounted, snap_events};
use snapdeck_carousel_core::{CarouselConfig, CarouselEvent, HostCommand};

fn gallery() -> CarouselConfig {
    let mut cfg = CarouselConfig::new(100.0, 300.0);
    cfg.loop_enabled = true;
    cfg.loop_clones_per_side = 2;
    cfg
}

#[test]
fn head_item_starts_after_the_leading_clones() {
    let carousel = mounted(gallery(), 3);
    assert_eq!(carousel.real_index(), 2);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.current_scroll_position(), 200.0);
}

#[test]
fn landing_on_a_leading_clone_jumps_to_the_real_slide() {
    let mut carousel = mounted(gallery(), 3);

    let target = carousel.snap_to_prev(true, true).scroll_target();
    assert_eq!(target, Some((100.0, true)));

    let out = carousel.on_scroll(100.0);
    assert_eq!(
        snap_events(&out.events),
        vec![
            CarouselEvent::BeforeSnap { index: 2 },
            CarouselEvent::Snap { index: 2 }
        ]
    );
    // Clone 1 shows data[2]; its real copy sits at 1 + N.
    assert_eq!(
        out.commands,
        vec![HostCommand::ScrollTo {
            offset: 400.0,
            animated: false
        }]
    );

    let out = carousel.on_scroll(400.0);
    assert!(snap_events(&out.events).is_empty());
    assert_eq!(carousel.real_index(), 4);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn landing_on_a_trailing_clone_jumps_back() {
    let mut carousel = mounted(gallery(), 3);
    carousel.snap_to_item(2, false, false);
    land(&mut carousel, Some((400.0, false)));
    assert_eq!(carousel.real_index(), 4);

    let target = carousel.snap_to_next(true, true).scroll_target();
    assert_eq!(target, Some((500.0, true)));
    let events = snap_events(&land(&mut carousel, target));
    assert_eq!(
        events,
        vec![
            CarouselEvent::BeforeSnap { index: 0 },
            CarouselEvent::Snap { index: 0 }
        ]
    );
    assert_eq!(carousel.real_index(), 2);
    assert_eq!(carousel.current_scroll_position(), 200.0);
}

#[test]
fn next_wraps_from_the_last_custom_slide() {
    let mut cfg = gallery();
    // Momentum scrolling tracks the active slide on every event.
    cfg.enable_momentum = true;
    let mut carousel = mounted(cfg, 3);
    carousel.on_scroll(600.0);
    assert_eq!(carousel.real_index(), 6);
    let out = carousel.snap_to_next(false, false);
    assert_eq!(out.scroll_target(), Some((0.0, false)));
}

#[test]
fn single_item_does_not_loop() {
    let carousel = mounted(gallery(), 1);
    assert_eq!(carousel.geometry().custom_len(), 1);
    assert_eq!(carousel.real_index(), 0);
}
