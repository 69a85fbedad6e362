#![cfg(target_arch = "wasm32")]
use echo_core::{ImagingParameters, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use frame::FrameContext;

// Keep the backing store matched to CSS size * devicePixelRatio
fn wire_canvas_resize(frame_ctx: &Rc<RefCell<FrameContext>>) {
    frame_ctx.borrow_mut().resize();
    let frame_ctx_resize = frame_ctx.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        frame_ctx_resize.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

type ChangeSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

// Moving to a display with another devicePixelRatio need not fire `resize`.
// Watch the current ratio and re-arm for the new one after each change.
fn watch_pixel_ratio(frame_ctx: Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let viewport = *frame_ctx.borrow().session.viewport();
    let mql = match window.match_media(&viewport.resolution_query()) {
        Ok(Some(mql)) => mql,
        _ => {
            log::warn!("[resize] matchMedia unavailable; pixel ratio changes go unnoticed");
            return;
        }
    };
    let slot: ChangeSlot = Rc::default();
    let slot_change = slot.clone();
    let mql_change = mql.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(cb) = slot_change.borrow_mut().take() {
            _ = mql_change.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
            // still executing; must outlive this call
            cb.forget();
        }
        log::info!(
            "[resize] device pixel ratio changed from {:.2}",
            viewport.device_pixel_ratio()
        );
        frame_ctx.borrow_mut().resize();
        watch_pixel_ratio(frame_ctx.clone());
    }) as Box<dyn FnMut()>);
    _ = mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    *slot.borrow_mut() = Some(closure);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("echo-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let viewport = dom::sync_canvas_backing_size(&canvas).unwrap_or_default();
    let session = Session::new(ImagingParameters::default(), viewport)
        .with_frozen_clicks(constants::FROZEN_CLICKS);
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(session, canvas.clone())));

    overlay::mount_hero_scene(&document);
    overlay::mount_tool_options(&document);
    wire_canvas_resize(&frame_ctx);
    watch_pixel_ratio(frame_ctx.clone());
    events::wire_controls(&document, &frame_ctx);
    events::wire_global_keydown(frame_ctx.clone());
    events::wire_canvas_click(&canvas, frame_ctx.clone());

    frame_ctx.borrow().refresh_panel();
    frame::start_loop(frame_ctx);
    Ok(())
}
