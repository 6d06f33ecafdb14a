use crate::core::ElementBox;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Map a `JsValue` error into `anyhow`.
#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Create `<tag class="..">`.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let element = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

/// Create `<tag class="..">text</tag>`.
pub fn text_el(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

/// Append `text` split on `\n`, with `<br>` between lines.
pub fn append_lines(
    document: &web::Document,
    parent: &web::HtmlElement,
    text: &str,
) -> anyhow::Result<()> {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            append(parent, &el(document, "br", "")?)?;
        }
        append(parent, &document.create_text_node(line))?;
    }
    Ok(())
}

#[inline]
pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    _ = element.style().set_property(property, value);
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn element_box(element: &web::Element) -> ElementBox {
    let rect = element.get_bounding_client_rect();
    ElementBox {
        top: rect.top() as f32,
        bottom: rect.bottom() as f32,
        height: rect.height() as f32,
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Decoded value of `key` in the page's query string, if present.
pub fn query_param(key: &str) -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    let (_, raw) = search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)?;
    js_sys::decode_uri_component(raw).ok().map(String::from)
}
