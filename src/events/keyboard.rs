use crate::frame::FrameContext;
use crate::input::{self, KeyAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_in_form_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "SELECT" | "TEXTAREA"))
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, frame_ctx: &Rc<RefCell<FrameContext>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || typing_in_form_field(ev) {
        return;
    }
    let key = ev.key();
    let Some(action) = input::key_action(&key) else {
        return;
    };
    if action.suppresses_default() {
        ev.prevent_default();
    }
    log::debug!("[keys] {:?} -> {:?}", key, action);
    let mut ctx = frame_ctx.borrow_mut();
    match action {
        KeyAction::Tool(tool) => ctx.set_tool(tool),
        KeyAction::ClearMeasurements => ctx.clear_measurements(),
        _ => ctx.update_params(|p| action.apply(p)),
    }
}

pub fn wire_global_keydown(frame_ctx: Rc<RefCell<FrameContext>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &frame_ctx);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
