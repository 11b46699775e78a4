//! Viewport-triggered effects: section reveal and animated counters.
//!
//! Both fire once per element, the first time it crosses its intersection
//! threshold, and then stop observing that element.

use std::{cell::RefCell, rc::Rc};

use duco_core::{CounterAnimation, OnceObserver, Result, SiteConfig, Tick};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::dom;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Whether the platform provides `IntersectionObserver`.
pub fn intersection_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Call `on_enter` once per element, on its first intersection at
/// `threshold`.
fn observe_once<F>(elements: Vec<HtmlElement>, threshold: f64, on_enter: F) -> Result<()>
where
    F: Fn(&HtmlElement) + 'static,
{
    let targets = Rc::new(elements);
    let pending = Rc::new(RefCell::new(
        (0..targets.len()).collect::<OnceObserver<usize>>(),
    ));

    let watched = targets.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = watched
                    .iter()
                    .position(|el| AsRef::<Element>::as_ref(el) == &target)
                else {
                    continue;
                };

                if pending.borrow_mut().notify(&index, entry.is_intersecting()) {
                    on_enter(&watched[index]);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| dom::js_error("new IntersectionObserver", e))?;

    for element in targets.iter() {
        observer.observe(element);
    }

    callback.forget();
    Ok(())
}

/// Reveal page sections as they scroll into view.
///
/// Without `IntersectionObserver` every section is revealed immediately.
/// Returns the number of sections handled.
pub fn reveal_sections(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<usize> {
    let sections = dom::query_all(document, &config.selectors.reveal)?;
    let count = sections.len();
    if sections.is_empty() {
        return Ok(0);
    }

    let class = config.classes.revealed.clone();
    if !intersection_supported(window) {
        for section in &sections {
            dom::set_class(section, &class, true)?;
        }
        return Ok(count);
    }

    observe_once(sections, config.motion.reveal_threshold, move |section| {
        if let Err(e) = dom::set_class(section, &class, true) {
            log::warn!("{e}");
        }
    })?;
    Ok(count)
}

/// Count statistics up from zero when they scroll into view.
///
/// Counters are left as rendered when `IntersectionObserver` is missing.
pub fn animate_counters(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<usize> {
    let counters = dom::query_all(document, &config.selectors.stat_number)?;
    if counters.is_empty() || !intersection_supported(window) {
        return Ok(0);
    }

    let count = counters.len();
    let attribute = config.attributes.count.clone();
    let frames = config.motion.counter_frames;
    let win = window.clone();

    observe_once(counters, config.motion.counter_threshold, move |element| {
        let raw = element.get_attribute(&attribute).unwrap_or_default();
        let animation = CounterAnimation::new(CounterAnimation::parse_target(&raw), frames);
        run_counter(&win, element.clone(), animation);
    })?;
    Ok(count)
}

/// Drive `animation` one step per animation frame until it finishes.
pub fn run_counter(window: &Window, element: HtmlElement, mut animation: CounterAnimation) {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let handle = frame.clone();
    let win = window.clone();

    *handle.borrow_mut() = Some(Closure::new(move || match animation.tick() {
        Tick::Continue(value) => {
            element.set_text_content(Some(&value.to_string()));
            let scheduled = frame
                .borrow()
                .as_ref()
                .is_some_and(|callback| request_frame(&win, callback));
            if !scheduled {
                element.set_text_content(Some(&animation.target().to_string()));
                frame.borrow_mut().take();
            }
        }
        Tick::Done(target) => {
            element.set_text_content(Some(&target.to_string()));
            // Drop our own closure; nothing references it after this frame.
            frame.borrow_mut().take();
        }
    }));

    if let Some(callback) = handle.borrow().as_ref() {
        request_frame(window, callback);
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> bool {
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("requestAnimationFrame failed: {}", dom::describe(&e));
            false
        }
    }
}
