//! Render adapter: what a list host needs to draw the carousel.
//!
//! Per slide the host gets a stable key, the data index to render, the
//! main-axis size and the interpolated style at the current scroll offset.
//! List-level hints size the host's virtualization window.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::Axis;
use crate::engine::Carousel;
use crate::styles::{slide_style, SlideStyle};

/// Render description of one custom index, independent of item content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideFrame {
    pub key: String,
    pub custom_index: usize,
    pub data_index: usize,
    /// Width (horizontal) or height (vertical) of the slide.
    pub main_size: f32,
    /// Interpolated position value at the current offset.
    pub value: f32,
    pub style: SlideStyle,
}

/// A frame paired with the item it renders.
#[derive(Debug)]
pub struct RenderedSlide<'a, T> {
    pub frame: SlideFrame,
    pub item: &'a T,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deceleration {
    Fast,
    Rate(f32),
}

/// List-level hints. Virtualization fields are `None` for the plain scroll
/// view used by the stack layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListHints {
    pub visible_items: usize,
    pub initial_num_to_render: Option<usize>,
    pub max_to_render_per_batch: Option<usize>,
    pub window_size: Option<usize>,
    pub deceleration: Deceleration,
    pub inverted: bool,
    pub uses_scroll_view: bool,
    pub remove_clipped_subviews: bool,
}

/// Outer container layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerLayout {
    pub axis: Axis,
    pub slider_size: f32,
    pub leading_inset: f32,
    pub trailing_inset: f32,
    /// Hidden until the apparition delay elapsed.
    pub hidden: bool,
}

impl Carousel {
    /// Key for a custom index, stable across renders.
    pub fn key_for(&self, custom_index: usize) -> String {
        if self.config().uses_stack_layout() {
            format!("scrollview-item-{custom_index}")
        } else {
            format!("flatlist-item-{custom_index}")
        }
    }

    /// Interpolated position value of a slide at the current offset.
    pub fn slide_value(&self, custom_index: usize) -> Option<f32> {
        self.geometry()
            .interpolators
            .get(custom_index)
            .map(|it| it.sample(self.current_scroll_position()))
    }

    pub fn slide_style(&self, custom_index: usize) -> Option<SlideStyle> {
        let value = self.slide_value(custom_index)?;
        Some(slide_style(
            custom_index,
            value,
            self.config(),
            self.data_len(),
            self.slide_animator(),
        ))
    }

    /// Frames for every custom index, in render order.
    pub fn frames(&self) -> Vec<SlideFrame> {
        let len = self.geometry().custom_len();
        (0..len)
            .filter_map(|custom| {
                let value = self.slide_value(custom)?;
                Some(SlideFrame {
                    key: self.key_for(custom),
                    custom_index: custom,
                    data_index: self.geometry().data_index(custom),
                    main_size: self.config().item_size,
                    value,
                    style: slide_style(
                        custom,
                        value,
                        self.config(),
                        self.data_len(),
                        self.slide_animator(),
                    ),
                })
            })
            .collect()
    }

    /// Frames paired with their items from `data`.
    pub fn render_slides<'a, T>(&self, data: &'a [T]) -> Vec<RenderedSlide<'a, T>> {
        if data.len() != self.data_len() {
            warn!(
                "render_slides: data has {} items, carousel laid out for {}",
                data.len(),
                self.data_len()
            );
        }
        self.frames()
            .into_iter()
            .filter_map(|frame| {
                let item = data.get(frame.data_index)?;
                Some(RenderedSlide { frame, item })
            })
            .collect()
    }

    pub fn list_hints(&self) -> ListHints {
        let cfg = self.config();
        let visible_items = (cfg.slider_size / cfg.item_size).ceil() as usize + 1;
        let mapper = &self.geometry().mapper;
        let per_side = if mapper.is_looping() { mapper.clones() } else { 2 };
        let initial = visible_items + per_side * 2;
        let batch = 1 + initial * 2;
        let scroll_view = cfg.uses_stack_layout();
        let virtualized = |n: usize| if scroll_view { None } else { Some(n) };
        ListHints {
            visible_items,
            initial_num_to_render: virtualized(initial),
            max_to_render_per_batch: virtualized(batch),
            window_size: virtualized(batch),
            deceleration: if cfg.enable_momentum {
                Deceleration::Rate(0.9)
            } else {
                Deceleration::Fast
            },
            inverted: cfg.is_mirrored(),
            uses_scroll_view: scroll_view,
            remove_clipped_subviews: !scroll_view,
        }
    }

    pub fn container(&self) -> ContainerLayout {
        let (leading_inset, trailing_inset) = self.geometry().insets();
        ContainerLayout {
            axis: self.config().axis,
            slider_size: self.config().slider_size,
            leading_inset,
            trailing_inset,
            hidden: !self.is_visible(),
        }
    }
}
