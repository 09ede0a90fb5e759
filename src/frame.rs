//! Per-frame update and the requestAnimationFrame loop.

use crate::render;
use fluid_core::{FrameState, SceneConfig, SceneUniforms};
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one tick needs. The tick is the sole writer of `state`;
/// listeners feed the two cells.
pub struct FrameContext {
    pub config: SceneConfig,
    pub state: FrameState,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
    pub pointer_target: Rc<Cell<[f32; 2]>>,
    pub logical_size: Rc<Cell<[f32; 2]>>,
    pub pixel_ratio: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let [tx, ty] = self.pointer_target.get();
        self.state.cursor.target = Vec2::new(tx, ty);
        let [lw, lh] = self.logical_size.get();
        self.state.logical_size = Vec2::new(lw, lh);
        self.state.pixel_ratio = self.pixel_ratio;

        self.state.tick(self.started.elapsed().as_secs_f32(), &self.config);

        // A collapsed viewport keeps the loop alive but draw-free.
        let width = self.canvas.width();
        let height = self.canvas.height();
        if width == 0 || height == 0 {
            return;
        }
        self.state.physical_size = Vec2::new(width as f32, height as f32);

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(width, height);
            let uniforms = SceneUniforms::pack(&self.config, &self.state);
            if let Err(e) = gpu.render(&uniforms) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Start the requestAnimationFrame loop. `alive` gates both the frame body
/// and rescheduling: once cleared, a callback that was already queued does
/// no GPU work and the chain ends.
pub fn start_loop(
    ctx: Rc<RefCell<Option<FrameContext>>>,
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
) {
    let tick_clone = tick.clone();
    let alive_tick = alive.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        if !alive_tick.get() {
            return;
        }
        if let Some(ctx) = ctx.borrow_mut().as_mut() {
            ctx.frame();
        }
        if alive_tick.get() {
            schedule(&raf_clone, &tick_clone);
        }
    }) as Box<dyn FnMut()>));
    schedule(&raf_id, &tick);
}

fn schedule(raf_id: &Rc<Cell<Option<i32>>>, tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(window) = web::window() {
        if let Some(callback) = tick.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                raf_id.set(Some(id));
            }
        }
    }
}
