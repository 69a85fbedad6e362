use crate::dom;
use crate::overlay;
use crate::render::CanvasPainter;
use echo_core::{
    AnimationDriver, ClickOutcome, FrameClock, FrameScheduler, ImagingParameters, MeasurementLog,
    MeasurementTool, Session,
};
use glam::DVec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler. Every request re-arms the same
/// tick closure.
#[derive(Default)]
pub struct RafScheduler {
    tick: TickClosure,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let closure = tick.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| log::error!("[frame] requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle);
        }
    }
}

pub struct FrameContext {
    pub session: Session,
    pub log: MeasurementLog,
    pub canvas: web::HtmlCanvasElement,
    pub painter: Option<CanvasPainter>,
    pub driver: AnimationDriver<i32>,
    pub scheduler: RafScheduler,
    pub seeds: FrameClock,
    pub started: Instant,
}

impl FrameContext {
    pub fn new(session: Session, canvas: web::HtmlCanvasElement) -> Self {
        let painter = CanvasPainter::from_canvas(&canvas);
        if let Some(p) = &painter {
            p.apply_viewport(session.viewport());
        }
        Self {
            session,
            log: MeasurementLog::new(),
            canvas,
            painter,
            driver: AnimationDriver::new(),
            scheduler: RafScheduler::default(),
            seeds: FrameClock,
            started: Instant::now(),
        }
    }

    /// One tick of the redraw loop.
    pub fn frame(&mut self) {
        if self.painter.is_none() {
            self.painter = CanvasPainter::from_canvas(&self.canvas);
            if let Some(p) = &self.painter {
                p.apply_viewport(self.session.viewport());
            }
        }
        let frozen = self.session.params().frozen;
        let t_sec = self.started.elapsed().as_secs_f64();
        let session = &mut self.session;
        let painter = &mut self.painter;
        let seeds = &mut self.seeds;
        self.driver.run_frame(&mut self.scheduler, frozen, || {
            // no surface yet: skip, the next tick retries
            if let Some(p) = painter.as_mut() {
                session.render_frame(p, t_sec, seeds);
            }
        });
    }

    /// Applies a parameter edit; on change restarts the loop and refreshes
    /// the panel.
    pub fn update_params(&mut self, edit: impl FnOnce(&mut ImagingParameters)) {
        let before = *self.session.params();
        if !self.session.update_params(edit) {
            return;
        }
        let params = *self.session.params();
        if params.frozen != before.frozen {
            log::info!("[frame] {}", if params.frozen { "frozen" } else { "live" });
        }
        self.driver.restart(&mut self.scheduler, params.frozen);
        self.refresh_panel();
    }

    pub fn set_tool(&mut self, tool: MeasurementTool) {
        self.session.set_tool(tool);
        self.repaint_if_frozen();
        self.refresh_panel();
    }

    pub fn clear_measurements(&mut self) {
        self.log.clear();
        self.refresh_panel();
    }

    /// Re-measures the canvas. Safe to call repeatedly; the last call wins.
    pub fn resize(&mut self) {
        let Some(viewport) = dom::sync_canvas_backing_size(&self.canvas) else {
            return;
        };
        // the backing store may have been reset even if the size is unchanged
        if let Some(p) = &self.painter {
            p.apply_viewport(&viewport);
        }
        if self.session.resize(viewport) {
            log::info!(
                "[resize] {:.0}x{:.0} css px @ {:.2}x",
                viewport.width(),
                viewport.height(),
                viewport.device_pixel_ratio()
            );
            self.repaint_if_frozen();
        }
    }

    pub fn click(&mut self, client: DVec2) {
        let origin = dom::canvas_origin(&self.canvas);
        let point = self.session.viewport().to_canvas(client, origin);
        match self.session.click(point, js_sys::Date::now()) {
            ClickOutcome::Ignored => {}
            ClickOutcome::Pending(_) => self.repaint_if_frozen(),
            ClickOutcome::Measured(record) => {
                log::info!("[measure] {} {}", record.kind, record.formatted_value());
                self.log.push(record);
                self.repaint_if_frozen();
                self.refresh_panel();
            }
        }
    }

    /// A frozen canvas gets no frames; redraw the held frame so markers and
    /// resizes still show.
    fn repaint_if_frozen(&mut self) {
        if !self.session.params().frozen {
            return;
        }
        if let Some(p) = self.painter.as_mut() {
            self.session.repaint(p);
        }
    }

    pub fn refresh_panel(&self) {
        if let Some(document) = dom::window_document() {
            overlay::sync_controls(&document, self.session.params(), self.session.tool());
            overlay::update_status(&document, self.session.params(), self.session.tool());
            overlay::render_measurements(&document, &self.log);
        }
    }
}

/// Installs the tick closure and schedules the first frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick_slot = frame_ctx.borrow().scheduler.tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick_slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));

    let mut ctx = frame_ctx.borrow_mut();
    let frozen = ctx.session.params().frozen;
    let FrameContext {
        driver, scheduler, ..
    } = &mut *ctx;
    driver.restart(scheduler, frozen);
    log::info!("[frame] loop started");
}
