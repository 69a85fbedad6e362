use crate::frame::FrameContext;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Routes canvas clicks to the active measurement tool.
pub fn wire_canvas_click(canvas: &web::HtmlCanvasElement, frame_ctx: Rc<RefCell<FrameContext>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        frame_ctx.borrow_mut().click(client);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
