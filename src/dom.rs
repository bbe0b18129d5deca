use crate::core::Surface;
use wasm_bindgen::JsCast;
use web_sys as web;

/// All elements matching `selector`; an invalid selector yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn device_pixel_ratio() -> f32 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    if dpr > 0.0 {
        dpr as f32
    } else {
        1.0
    }
}

/// Size the canvas to its container: logical CSS size, DPR-scaled backing
/// store, and a context transform that keeps drawing in logical pixels.
pub fn sync_canvas_to_container(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Surface {
    let (w, h) = match canvas.parent_element() {
        Some(parent) => {
            let rect = parent.get_bounding_client_rect();
            (rect.width() as f32, rect.height() as f32)
        }
        None => (0.0, 0.0),
    };
    let surface = Surface::new(w, h, device_pixel_ratio());
    let (bw, bh) = surface.backing_size();
    canvas.set_width(bw);
    canvas.set_height(bh);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", surface.width));
    _ = style.set_property("height", &format!("{}px", surface.height));
    let dpr = surface.dpr as f64;
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    surface
}
