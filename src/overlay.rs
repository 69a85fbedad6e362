use crate::constants::{
    ACTIVE_CLASS, DEPTH_INPUT_ID, DEPTH_LABEL_ID, DERIVED_FS_ID, DERIVED_HR_ID, EMPTY_LIST_TEXT,
    FREEZE_BUTTON_ID, GAIN_INPUT_ID, GAIN_LABEL_ID, HEART_RATE_INPUT_ID, HEART_RATE_LABEL_ID,
    HERO_SCENE_ID, HERO_SCENE_URL, MEASUREMENT_LIST_ID, MODE_ATTR, PRESET_ATTR, STATUS_ID,
    TOOL_HINT_ID, TOOL_SELECT_ID,
};
use crate::dom;
use echo_core::{ImagingParameters, MeasurementLog, MeasurementRecord, MeasurementTool};
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn freeze_label(frozen: bool) -> &'static str {
    if frozen {
        "Frozen"
    } else {
        "Live"
    }
}

/// Status line and tool hint above the viewport.
pub fn update_status(document: &web::Document, params: &ImagingParameters, tool: MeasurementTool) {
    dom::set_text(document, STATUS_ID, &params.status_line());
    dom::set_text(document, TOOL_HINT_ID, tool.hint());
}

/// Mirrors parameters back into the control panel so keyboard edits and
/// clamping show up in the inputs.
pub fn sync_controls(document: &web::Document, params: &ImagingParameters, tool: MeasurementTool) {
    mark_active(document, PRESET_ATTR, params.preset.id());
    mark_active(document, MODE_ATTR, params.mode.id());

    dom::set_element_value(document, GAIN_INPUT_ID, &params.gain.to_string());
    dom::set_element_value(document, DEPTH_INPUT_ID, &params.depth.to_string());
    dom::set_element_value(document, HEART_RATE_INPUT_ID, &params.heart_rate.to_string());
    dom::set_text(document, GAIN_LABEL_ID, &format!("{}%", params.gain));
    dom::set_text(document, DEPTH_LABEL_ID, &format!("{} cm", params.depth));
    dom::set_text(document, HEART_RATE_LABEL_ID, &format!("{} bpm", params.heart_rate));

    dom::set_element_value(document, TOOL_SELECT_ID, tool.id());
    dom::set_text(document, FREEZE_BUTTON_ID, freeze_label(params.frozen));
}

fn mark_active(document: &web::Document, attr: &str, active: &str) {
    for (el, value) in dom::elements_with_attr(document, attr) {
        let cl = el.class_list();
        _ = if value == active {
            cl.add_1(ACTIVE_CLASS)
        } else {
            cl.remove_1(ACTIVE_CLASS)
        };
    }
}

fn local_time(timestamp_ms: f64) -> String {
    js_sys::Date::new(&JsValue::from_f64(timestamp_ms))
        .to_locale_time_string("default")
        .into()
}

fn list_item(record: &MeasurementRecord) -> String {
    format!(
        "<li class='measurement'><span class='kind'>{} · {}</span><span class='value'>{}</span></li>",
        record.kind,
        local_time(record.timestamp_ms),
        record.formatted_value()
    )
}

/// Newest-first list plus the derived cards.
pub fn render_measurements(document: &web::Document, log: &MeasurementLog) {
    if let Some(el) = document.get_element_by_id(MEASUREMENT_LIST_ID) {
        if log.is_empty() {
            el.set_inner_html(&format!("<p class='empty'>{EMPTY_LIST_TEXT}</p>"));
        } else {
            let items: String = log.iter().map(list_item).collect();
            el.set_inner_html(&format!("<ul>{items}</ul>"));
        }
    }
    let derived = log.derived();
    dom::set_text(
        document,
        DERIVED_HR_ID,
        &format!("{} bpm", derived.heart_rate_bpm),
    );
    dom::set_text(document, DERIVED_FS_ID, &derived.fractional_shortening_text());
}

/// Fills the tool `<select>` with one option per tool, labelled for humans
/// and valued with the id `FromStr` parses.
pub fn mount_tool_options(document: &web::Document) {
    let Some(select) = document.get_element_by_id(TOOL_SELECT_ID) else {
        return;
    };
    select.set_inner_html("");
    for tool in MeasurementTool::ALL {
        let Ok(option) = document.create_element("option") else {
            continue;
        };
        _ = option.set_attribute("value", tool.id());
        option.set_text_content(Some(tool.label()));
        _ = select.append_child(&option);
    }
}

/// Points the decorative 3D embed at its scene. Missing element is fine.
pub fn mount_hero_scene(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HERO_SCENE_ID) {
        if let Err(e) = el.set_attribute("url", HERO_SCENE_URL) {
            log::warn!("[hero] could not set scene url: {:?}", e);
        }
    }
}
