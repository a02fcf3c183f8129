//! Output contracts from the carousel engine.
//!
//! Outputs carry the commands the host scroll surface must apply and the
//! callback events raised by this call. Adapters (wasm, native views) apply
//! commands to the surface and forward events to their listeners.

use serde::{Deserialize, Serialize};

use crate::host::ScrollHost;

/// Instruction for the scroll surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
    ScrollTo { offset: f32, animated: bool },
    SetScrollEnabled { enabled: bool },
}

/// Callback-level signals. Indices are data indices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CarouselEvent {
    BeforeSnap { index: usize },
    Snap { index: usize },
    Scroll { offset: f32 },
    /// The apparition delay elapsed; the carousel may be shown.
    Shown,
}

/// Outputs returned by every engine call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub commands: Vec<HostCommand>,
    #[serde(default)]
    pub events: Vec<CarouselEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_command(&mut self, command: HostCommand) {
        self.commands.push(command);
    }

    #[inline]
    pub fn push_event(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.events.is_empty()
    }

    /// Last scroll command, if any.
    pub fn scroll_target(&self) -> Option<(f32, bool)> {
        self.commands.iter().rev().find_map(|c| match c {
            HostCommand::ScrollTo { offset, animated } => Some((*offset, *animated)),
            HostCommand::SetScrollEnabled { .. } => None,
        })
    }

    /// Apply commands, then deliver events, in emission order.
    pub fn dispatch(&self, host: &mut dyn ScrollHost) {
        for command in &self.commands {
            match command {
                HostCommand::ScrollTo { offset, animated } => host.scroll_to_offset(*offset, *animated),
                HostCommand::SetScrollEnabled { enabled } => host.set_scroll_enabled(*enabled),
            }
        }
        for event in &self.events {
            match event {
                CarouselEvent::BeforeSnap { index } => host.on_before_snap(*index),
                CarouselEvent::Snap { index } => host.on_snap(*index),
                CarouselEvent::Scroll { offset } => host.on_scroll(*offset),
                CarouselEvent::Shown => host.on_shown(),
            }
        }
    }
}
