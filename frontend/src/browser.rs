//! Browser side of the counter and the insight panel: viewport intersection,
//! animation frames, detached image fetches and section scrolling.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, window, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};
use yew::Callback;

use crate::config;
use crate::counter::FrameClock;
use crate::insights::ImageLoader;
use crate::scroll::scroll_target;

/// Watches one element and reports its visible fraction each time it crosses the threshold.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(element: &Element, threshold: f64, on_change: Callback<f64>) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    let fraction = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    on_change.emit(fraction);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Stops callbacks but keeps the closure alive, so this is safe to call from inside one.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Id of the animation frame still waiting to run, shared with the frame callback.
#[derive(Clone, Default)]
struct PendingFrame(Rc<Cell<Option<i32>>>);

impl PendingFrame {
    fn scheduled(&self, id: i32) {
        self.0.set(Some(id));
    }

    fn fired(&self) {
        self.0.set(None);
    }

    fn take(&self) -> Option<i32> {
        self.0.take()
    }
}

/// `requestAnimationFrame` as a [`FrameClock`]. One closure serves every frame
/// and lives as long as the clock.
pub struct AnimationFrameClock {
    step: Closure<dyn FnMut(f64)>,
    pending: PendingFrame,
}

impl AnimationFrameClock {
    pub fn new(on_frame: Callback<f64>) -> Self {
        let pending = PendingFrame::default();
        let fired = pending.clone();
        let step = Closure::wrap(Box::new(move |timestamp: f64| {
            fired.fired();
            on_frame.emit(timestamp);
        }) as Box<dyn FnMut(f64)>);

        Self { step, pending }
    }

    pub fn cancel(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

impl FrameClock for AnimationFrameClock {
    fn request_frame(&mut self) {
        if let Some(window) = window() {
            match window.request_animation_frame(self.step.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.scheduled(id),
                Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
            }
        }
    }
}

/// Fetches images through detached `<img>` elements so they land in the browser cache.
pub struct BrowserImageLoader {
    on_loaded: Callback<String>,
    on_failed: Callback<String>,
}

impl BrowserImageLoader {
    pub fn new(on_loaded: Callback<String>, on_failed: Callback<String>) -> Self {
        Self { on_loaded, on_failed }
    }
}

impl ImageLoader for BrowserImageLoader {
    fn load(&mut self, url: &str) {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(err) => {
                warn!("Could not create image element for {}: {:?}", url, err);
                return;
            }
        };

        let on_loaded = self.on_loaded.clone();
        let loaded_url = url.to_owned();
        let onload = Closure::once_into_js(move || on_loaded.emit(loaded_url));

        let on_failed = self.on_failed.clone();
        let failed_url = url.to_owned();
        let onerror = Closure::once_into_js(move || on_failed.emit(failed_url));

        image.set_onload(Some(onload.unchecked_ref()));
        image.set_onerror(Some(onerror.unchecked_ref()));
        image.set_src(url);
        debug!("Preloading {}", url);
    }
}

/// Smooth-scrolls the window to the element with `id`, leaving room for the nav bar.
pub fn scroll_to_section(id: &str) {
    if let Some(window) = window() {
        let element = window.document().and_then(|document| document.get_element_by_id(id));
        match element {
            Some(element) => {
                let top = element.get_bounding_client_rect().top();
                let page_y = window.page_y_offset().unwrap_or(0.0);
                let options = ScrollToOptions::new();
                options.set_top(scroll_target(top, page_y, config::HEADER_OFFSET_PX));
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            None => warn!("No section with id '{}' to scroll to", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fired_frame_is_not_pending() {
        let pending = PendingFrame::default();
        let callback_side = pending.clone();

        pending.scheduled(3);
        callback_side.fired();
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn cancel_takes_the_waiting_frame_once() {
        let pending = PendingFrame::default();
        pending.scheduled(3);
        pending.clone().fired();
        pending.scheduled(4);

        assert_eq!(pending.take(), Some(4));
        assert_eq!(pending.take(), None);
    }
}
