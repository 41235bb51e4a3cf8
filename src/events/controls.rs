use crate::constants::{
    DARK_BG_CLASS, DARK_BG_TOGGLE_ID, FPS30_TOGGLE_ID, LEGACY_BODY_CLASS, LEGACY_TOGGLE_ID,
};
use crate::dom;
use crate::frame::LoopHandle;
use balls_core::{AnimationMode, FrameRate};
use web_sys as web;

#[inline]
pub fn frame_rate_for(fps30: bool) -> FrameRate {
    if fps30 {
        FrameRate::Capped30
    } else {
        FrameRate::Uncapped
    }
}

#[inline]
pub fn mode_for(legacy: bool) -> AnimationMode {
    if legacy {
        AnimationMode::Legacy
    } else {
        AnimationMode::Field
    }
}

/// Hook the three page checkboxes up to the loop.
pub fn wire_controls(document: &web::Document, handle: &LoopHandle) {
    let doc = document.clone();
    dom::add_toggle_listener(document, DARK_BG_TOGGLE_ID, move |on| {
        dom::set_body_class(&doc, DARK_BG_CLASS, on);
    });

    let h = handle.clone();
    dom::add_toggle_listener(document, FPS30_TOGGLE_ID, move |on| {
        h.set_frame_rate(frame_rate_for(on));
    });

    let doc = document.clone();
    let h = handle.clone();
    dom::add_toggle_listener(document, LEGACY_TOGGLE_ID, move |on| {
        dom::set_body_class(&doc, LEGACY_BODY_CLASS, on);
        h.set_mode(mode_for(on));
    });
}
