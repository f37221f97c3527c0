//! Shared DOM plumbing: styled element creation, click wiring, the image
//! placeholder fallback and the injected keyframe stylesheet.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlImageElement, MouseEvent};

use crate::catalog::PLACEHOLDER_IMAGE;

/// Create an element with an inline style attribute.
pub fn styled(doc: &Document, tag: &str, style: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if !style.is_empty() {
        el.set_attribute("style", style)?;
    }
    Ok(el)
}

pub fn set_text_by_id(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Console warning for soft failures (missing media, rejected autoplay).
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Attach a click handler. The closure is leaked into the page, which is
/// fine for listeners that live until the tab closes.
pub fn on_click<F>(el: &Element, mut f: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| f()) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click handler variant that needs the event (seek/volume bars use the
/// click offset within the bar).
pub fn on_click_event<F>(el: &Element, mut f: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| f(evt)) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Image element that degrades to the shared placeholder when its source is
/// missing. The data flag stops a second swap if the placeholder itself
/// fails to load.
pub fn image_with_fallback(
    doc: &Document,
    src: &str,
    style: &str,
) -> Result<HtmlImageElement, JsValue> {
    let img: HtmlImageElement = doc.create_element("img")?.dyn_into()?;
    if !style.is_empty() {
        img.set_attribute("style", style)?;
    }
    img.set_src(src);
    let handler = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        let Some(target) = evt.target() else { return };
        let Ok(img) = target.dyn_into::<HtmlImageElement>() else {
            return;
        };
        if img.get_attribute("data-fallback").is_some() {
            return;
        }
        img.set_attribute("data-fallback", "1").ok();
        warn(&format!("image missing, using placeholder: {}", img.src()));
        img.set_src(PLACEHOLDER_IMAGE);
    }) as Box<dyn FnMut(_)>);
    img.add_event_listener_with_callback("error", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(img)
}

// Keyframes and base rules shared across views; everything else is inline.
const SHEET: &str = "\
body { margin:0; background:#1a0f14; color:#f4e3c1; font-family:'Georgia', serif; }\n\
button { cursor:pointer; font-family:inherit; }\n\
@keyframes bt-float { 0%,100% { transform:translateY(0); } 50% { transform:translateY(-18px); } }\n\
@keyframes bt-pulse { 0%,100% { transform:scale(1); } 50% { transform:scale(1.06); } }\n\
@keyframes bt-spin { from { transform:rotate(0deg); } to { transform:rotate(360deg); } }\n";

/// Inject the shared stylesheet once per page.
pub fn ensure_stylesheet(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id("bt-style").is_some() {
        return Ok(());
    }
    let style = doc.create_element("style")?;
    style.set_id("bt-style");
    style.set_text_content(Some(SHEET));
    if let Some(body) = doc.body() {
        body.append_child(&style)?;
    }
    Ok(())
}
