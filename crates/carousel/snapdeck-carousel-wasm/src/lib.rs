use js_sys::{Function, Reflect};
use log::warn;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use snapdeck_carousel_core::{Carousel, CarouselConfig, Outputs, ScrollHost, Subscriptions};

#[wasm_bindgen]
pub struct SnapCarousel {
    core: Carousel,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js<T: Serialize>(value: &T, what: &str) -> Result<JsValue, JsError> {
    swb::to_value(value).map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

fn outputs_to_js(out: &Outputs) -> Result<JsValue, JsError> {
    to_js(out, "outputs")
}

/// JS object whose optional methods receive commands and callbacks:
/// `scrollToOffset(offset, animated)`, `setScrollEnabled(enabled)`,
/// `onBeforeSnapToItem(index)`, `onSnapToItem(index)`, `onScroll(offset)`,
/// `onShown()`. Missing methods are skipped; thrown errors are logged.
struct JsHost {
    target: JsValue,
}

impl JsHost {
    fn method(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.target, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
    }

    fn call(&self, name: &str, args: &[JsValue]) {
        let Some(f) = self.method(name) else {
            return;
        };
        let result = match args {
            [] => f.call0(&self.target),
            [a] => f.call1(&self.target, a),
            [a, b, ..] => f.call2(&self.target, a, b),
        };
        if let Err(err) = result {
            warn!("host method {name} threw: {err:?}");
        }
    }
}

impl ScrollHost for JsHost {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        self.call(
            "scrollToOffset",
            &[JsValue::from_f64(offset as f64), JsValue::from_bool(animated)],
        );
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.call("setScrollEnabled", &[JsValue::from_bool(enabled)]);
    }

    fn on_before_snap(&mut self, index: usize) {
        self.call("onBeforeSnapToItem", &[JsValue::from_f64(index as f64)]);
    }

    fn on_snap(&mut self, index: usize) {
        self.call("onSnapToItem", &[JsValue::from_f64(index as f64)]);
    }

    fn on_scroll(&mut self, offset: f32) {
        self.call("onScroll", &[JsValue::from_f64(offset as f64)]);
    }

    fn on_shown(&mut self) {
        self.call("onShown", &[]);
    }
}

#[wasm_bindgen]
impl SnapCarousel {
    /// Create an unmounted carousel over `data_len` items. `config` is a JS
    /// object matching `CarouselConfig` (only `item_size` and `slider_size`
    /// are required).
    /// Example:
    ///   new SnapCarousel({ item_size: 240, slider_size: 360, loop: true }, 5)
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, data_len: u32) -> Result<SnapCarousel, JsError> {
        console_error_panic_hook::set_once();

        if jsvalue_is_undefined_or_null(&config) {
            return Err(JsError::new("config error: item_size and slider_size are required"));
        }
        let cfg: CarouselConfig =
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?;
        let core = Carousel::new(cfg, data_len as usize)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(SnapCarousel { core })
    }

    /// Same as the constructor, from a JSON string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(config_json: &str, data_len: u32) -> Result<SnapCarousel, JsError> {
        console_error_panic_hook::set_once();
        let cfg = CarouselConfig::from_json(config_json)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        let core = Carousel::new(cfg, data_len as usize)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(SnapCarousel { core })
    }

    /// Choose which callbacks the host listens to: `{ before_snap, snap, scroll }`.
    #[wasm_bindgen(js_name = set_subscriptions)]
    pub fn set_subscriptions(&mut self, subscriptions: JsValue) -> Result<(), JsError> {
        let subs: Subscriptions = if jsvalue_is_undefined_or_null(&subscriptions) {
            Subscriptions::default()
        } else {
            swb::from_value(subscriptions)
                .map_err(|e| JsError::new(&format!("subscriptions error: {e}")))?
        };
        self.core.set_subscriptions(subs);
        Ok(())
    }

    /// Attach to the scroll surface. Returns `{ commands, events }`.
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.mount())
    }

    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.core.unmount();
    }

    /// Advance the timer clock by `dt_ms` milliseconds.
    #[wasm_bindgen]
    pub fn tick(&mut self, dt_ms: f64) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.tick(dt_ms))
    }

    #[wasm_bindgen(js_name = on_scroll)]
    pub fn on_scroll(&mut self, offset: f32) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.on_scroll(offset))
    }

    #[wasm_bindgen(js_name = on_drag_begin)]
    pub fn on_drag_begin(&mut self, offset: f32) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.on_drag_begin(offset))
    }

    #[wasm_bindgen(js_name = on_drag_end)]
    pub fn on_drag_end(&mut self) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.on_drag_end())
    }

    #[wasm_bindgen(js_name = on_momentum_end)]
    pub fn on_momentum_end(&mut self) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.on_momentum_end())
    }

    #[wasm_bindgen(js_name = on_touch_end)]
    pub fn on_touch_end(&mut self) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.on_touch_end())
    }

    #[wasm_bindgen(js_name = on_layout)]
    pub fn on_layout(&mut self) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.on_layout())
    }

    /// Snap to a data index; out-of-range indices clamp to the ends.
    #[wasm_bindgen(js_name = snap_to_item)]
    pub fn snap_to_item(
        &mut self,
        index: i32,
        animated: bool,
        fire_callback: bool,
    ) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.snap_to_item(index as isize, animated, fire_callback))
    }

    #[wasm_bindgen(js_name = snap_to_next)]
    pub fn snap_to_next(&mut self, animated: bool, fire_callback: bool) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.snap_to_next(animated, fire_callback))
    }

    #[wasm_bindgen(js_name = snap_to_prev)]
    pub fn snap_to_prev(&mut self, animated: bool, fire_callback: bool) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.snap_to_prev(animated, fire_callback))
    }

    #[wasm_bindgen(js_name = set_scroll_enabled)]
    pub fn set_scroll_enabled(&mut self, enabled: bool) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.set_scroll_enabled(enabled))
    }

    /// Replace the configuration (full `CarouselConfig` object).
    #[wasm_bindgen(js_name = set_config)]
    pub fn set_config(&mut self, config: JsValue) -> Result<JsValue, JsError> {
        let cfg: CarouselConfig =
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?;
        let out = self
            .core
            .set_config(cfg)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        outputs_to_js(out)
    }

    #[wasm_bindgen(js_name = set_data_len)]
    pub fn set_data_len(&mut self, data_len: u32) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.set_data_len(data_len as usize))
    }

    /// Apply the outputs of the last call to a JS host object exposing any of
    /// `scrollToOffset`, `setScrollEnabled`, `onBeforeSnapToItem`,
    /// `onSnapToItem`, `onScroll` and `onShown`.
    #[wasm_bindgen]
    pub fn dispatch(&self, host: JsValue) {
        let mut js_host = JsHost { target: host };
        self.core.outputs().dispatch(&mut js_host);
    }

    #[wasm_bindgen(js_name = current_index)]
    pub fn current_index(&self) -> u32 {
        self.core.current_index() as u32
    }

    #[wasm_bindgen(js_name = real_index)]
    pub fn real_index(&self) -> u32 {
        self.core.real_index() as u32
    }

    #[wasm_bindgen(js_name = current_scroll_position)]
    pub fn current_scroll_position(&self) -> f32 {
        self.core.current_scroll_position()
    }

    #[wasm_bindgen(js_name = is_visible)]
    pub fn is_visible(&self) -> bool {
        self.core.is_visible()
    }

    /// Per-slide keys, data indices, sizes and styles at the current offset.
    #[wasm_bindgen]
    pub fn frames(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.frames(), "frames")
    }

    #[wasm_bindgen(js_name = list_hints)]
    pub fn list_hints(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.list_hints(), "list hints")
    }

    #[wasm_bindgen]
    pub fn container(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.container(), "container")
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
