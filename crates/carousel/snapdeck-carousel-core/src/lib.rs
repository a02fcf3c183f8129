//! Snapdeck Carousel Core (host-agnostic)
//!
//! Headless snapping carousel: slide positions, clone-padded loop mapping,
//! scroll-driven slide styles and the scroll/snap state machine. Hosts feed
//! scroll-view events into a [`Carousel`] and apply the [`Outputs`] it returns
//! (scroll commands and callback events); rendering goes through the frames
//! and list hints of the render adapter.

pub mod animator;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod host;
pub mod inputs;
pub mod interp;
pub mod looping;
pub mod machine;
pub mod outputs;
pub mod policy;
pub mod positions;
pub mod render;
pub mod state;
pub mod styles;
pub mod timers;

// Re-exports for consumers (adapters)
pub use animator::SlideAnimator;
pub use config::{
    Alignment, Axis, CallbackTiming, CarouselConfig, SlideLayout, StackDirection,
};
pub use engine::Carousel;
pub use error::{CarouselError, Result};
pub use geometry::Geometry;
pub use host::ScrollHost;
pub use inputs::{Input, SnapOptions, Subscriptions};
pub use interp::functions::{interpolate, Extrapolate};
pub use interp::Interpolator;
pub use looping::LoopMapper;
pub use machine::{resolve_swipe, step, Context, Effect, Transition};
pub use outputs::{CarouselEvent, HostCommand, Outputs};
pub use policy::{EdgeSettlePolicy, NeverRecheck, RecheckAfterDelay};
pub use positions::{Band, PositionTable};
pub use render::{ContainerLayout, Deceleration, ListHints, RenderedSlide, SlideFrame};
pub use state::{ScrollPhase, ScrollState};
pub use styles::SlideStyle;
pub use timers::{TimerKind, TimerSet};
