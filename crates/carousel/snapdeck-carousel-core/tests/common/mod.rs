#![allow(dead_code)]

use snapdeck_carousel_core::{Carousel, CarouselConfig, CarouselEvent, Outputs, ScrollHost};

/// Everything a host saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ScrollTo(f32, bool),
    ScrollEnabled(bool),
    BeforeSnap(usize),
    Snap(usize),
    Scroll(f32),
    Shown,
}

/// Host that records calls and remembers where it was asked to scroll.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub offset: f32,
    pub scroll_enabled: bool,
}

impl ScrollHost for RecordingHost {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        self.offset = offset;
        self.calls.push(HostCall::ScrollTo(offset, animated));
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
        self.calls.push(HostCall::ScrollEnabled(enabled));
    }

    fn on_before_snap(&mut self, index: usize) {
        self.calls.push(HostCall::BeforeSnap(index));
    }

    fn on_snap(&mut self, index: usize) {
        self.calls.push(HostCall::Snap(index));
    }

    fn on_scroll(&mut self, offset: f32) {
        self.calls.push(HostCall::Scroll(offset));
    }

    fn on_shown(&mut self) {
        self.calls.push(HostCall::Shown);
    }
}

/// Mounted carousel settled on its first item.
pub fn mounted(cfg: CarouselConfig, len: usize) -> Carousel {
    let mut carousel = Carousel::new(cfg, len).expect("valid config");
    let target = carousel.mount().scroll_target();
    if let Some((offset, _)) = target {
        carousel.on_scroll(offset);
    }
    carousel
}

/// Report the scroll target of `outputs` back as the landing scroll event,
/// following any reposition jump it triggers.
pub fn land(carousel: &mut Carousel, outputs: Option<(f32, bool)>) -> Vec<CarouselEvent> {
    let mut events = Vec::new();
    let mut target = outputs;
    while let Some((offset, _)) = target {
        let out: &Outputs = carousel.on_scroll(offset);
        events.extend(out.events.iter().cloned());
        target = out.scroll_target().filter(|(next, _)| *next != offset);
    }
    events
}

pub fn snap_events(events: &[CarouselEvent]) -> Vec<CarouselEvent> {
    events
        .iter()
        .filter(|e| !matches!(e, CarouselEvent::Scroll { .. }))
        .cloned()
        .collect()
}
