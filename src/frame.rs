use crate::core::HeroScene;
use crate::dom;
use crate::render::CanvasPainter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: HeroScene,
    pub painter: CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    #[inline]
    pub fn frame(&mut self) {
        self.scene.step(&mut self.painter);
    }

    pub fn resize(&mut self) {
        let surface = dom::sync_canvas_to_container(&self.canvas, self.painter.context());
        log::debug!(
            "[resize] {:.0}x{:.0} dpr={:.2}",
            surface.width,
            surface.height,
            surface.dpr
        );
        self.scene.resize(surface);
    }
}

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run the scene on every display refresh for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
