//! Host scroll surface seam.

/// Scrollable list surface driven by the carousel.
///
/// Only the two commands are required; callback hooks default to no-ops so a
/// host implements just the listeners it needs.
pub trait ScrollHost {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool);
    fn set_scroll_enabled(&mut self, enabled: bool);

    fn on_before_snap(&mut self, _index: usize) {}
    fn on_snap(&mut self, _index: usize) {}
    fn on_scroll(&mut self, _offset: f32) {}
    fn on_shown(&mut self) {}
}
