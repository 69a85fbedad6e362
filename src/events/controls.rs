use crate::constants::{
    CLEAR_BUTTON_ID, DEPTH_INPUT_ID, FREEZE_BUTTON_ID, GAIN_INPUT_ID, HEART_RATE_INPUT_ID,
    MODE_ATTR, PRESET_ATTR, TOOL_SELECT_ID,
};
use crate::dom;
use crate::frame::FrameContext;
use echo_core::{DepthCm, Gain, HeartRate, ImagingParameters, MeasurementTool, Mode, Preset};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::JsCast;
use web_sys as web;

type Ctx = Rc<RefCell<FrameContext>>;

/// Wires every control-panel element to the frame context.
pub fn wire_controls(document: &web::Document, frame_ctx: &Ctx) {
    wire_choice_buttons::<Preset>(document, PRESET_ATTR, frame_ctx, |p, preset| {
        p.preset = preset
    });
    wire_choice_buttons::<Mode>(document, MODE_ATTR, frame_ctx, |p, mode| p.mode = mode);

    wire_slider(document, GAIN_INPUT_ID, frame_ctx, |p, v| {
        p.gain = Gain::clamped(v)
    });
    wire_slider(document, DEPTH_INPUT_ID, frame_ctx, |p, v| {
        p.depth = DepthCm::clamped(v)
    });
    wire_slider(document, HEART_RATE_INPUT_ID, frame_ctx, |p, v| {
        p.heart_rate = HeartRate::clamped(v)
    });

    let ctx = frame_ctx.clone();
    dom::add_value_listener(document, TOOL_SELECT_ID, "change", move |value| {
        match MeasurementTool::from_str(&value) {
            Ok(tool) => ctx.borrow_mut().set_tool(tool),
            Err(e) => log::warn!("[controls] {}", e),
        }
    });

    let ctx = frame_ctx.clone();
    dom::add_click_listener(document, FREEZE_BUTTON_ID, move || {
        ctx.borrow_mut().update_params(|p| p.frozen = !p.frozen);
    });

    let ctx = frame_ctx.clone();
    dom::add_click_listener(document, CLEAR_BUTTON_ID, move || {
        ctx.borrow_mut().clear_measurements();
    });
}

/// Buttons tagged with `attr`; the attribute value names the choice.
fn wire_choice_buttons<T>(
    document: &web::Document,
    attr: &str,
    frame_ctx: &Ctx,
    set: fn(&mut ImagingParameters, T),
) where
    T: FromStr<Err = echo_core::ParamError> + Copy + 'static,
{
    for (el, value) in dom::elements_with_attr(document, attr) {
        let choice = match T::from_str(&value) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[controls] {}", e);
                continue;
            }
        };
        let ctx = frame_ctx.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            ctx.borrow_mut().update_params(|p| set(p, choice));
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_slider(
    document: &web::Document,
    id: &str,
    frame_ctx: &Ctx,
    set: fn(&mut ImagingParameters, i64),
) {
    let ctx = frame_ctx.clone();
    dom::add_value_listener(document, id, "input", move |value| {
        match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => ctx.borrow_mut().update_params(|p| set(p, v.round() as i64)),
            _ => log::warn!("[controls] non-numeric slider value {:?}", value),
        }
    });
}
