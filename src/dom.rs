use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Create an element with a class list, detached.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

/// Create an element and append it to `parent`.
pub fn el_in(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let child = el(document, tag, class)?;
    parent.append_child(&child).map_err(js_err)?;
    Ok(child)
}

pub fn text_in(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let child = el_in(document, parent, tag, class)?;
    child.set_text_content(Some(text));
    Ok(child)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_pointer_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::PointerEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
