#![cfg(target_arch = "wasm32")]
//! WASM front-end for the fluid metaball background.
//!
//! Hosts mount one instance into a container element; the instance owns its
//! canvas, GPU resources and render loop, and tears everything down on
//! `unmount`. There is no module-level state: every mount is a fresh,
//! independent instance.

use fluid_core::{classify, FrameState, SceneConfig};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fluid-web loaded");
    Ok(())
}

/// One mounted background instance.
///
/// Lifecycle: mount -> active -> unmounted (terminal). A failed mount yields
/// an inert instance that renders nothing; `unmount` is safe in every state
/// and idempotent.
#[wasm_bindgen]
pub struct FluidBackground {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    listeners: Rc<RefCell<events::Listeners>>,
    ctx: Rc<RefCell<Option<frame::FrameContext>>>,
    canvas: Rc<RefCell<Option<web::HtmlCanvasElement>>>,
}

impl FluidBackground {
    fn inert() -> Self {
        Self {
            alive: Rc::new(Cell::new(false)),
            raf_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
            listeners: Rc::new(RefCell::new(events::Listeners::default())),
            ctx: Rc::new(RefCell::new(None)),
            canvas: Rc::new(RefCell::new(None)),
        }
    }
}

#[wasm_bindgen]
impl FluidBackground {
    /// Mount into the element with id `container_id`.
    ///
    /// Every failure mode (missing container, no adapter, device or shader
    /// errors) is logged and degrades to an inert instance; nothing
    /// propagates to the host as an exception.
    pub async fn mount(container_id: String) -> FluidBackground {
        let bg = Self::inert();

        let Some(document) = dom::window_document() else {
            log::warn!("mount: no document available");
            return bg;
        };
        let Some(container) = document.get_element_by_id(&container_id) else {
            log::warn!("mount: container #{container_id} not found; rendering nothing");
            return bg;
        };

        let (user_agent, cores) = dom::capability_signals();
        let tier = classify(&user_agent, cores);
        let limits = tier.limits();
        log::info!(
            "device tier {:?}: {} spheres, {} march steps, pixel ratio <= {}",
            tier,
            limits.sphere_cap,
            limits.march_steps,
            limits.max_pixel_ratio
        );

        let config = SceneConfig::default();

        let Some(canvas) = dom::create_background_canvas(&container) else {
            log::error!("mount: could not create canvas");
            return bg;
        };
        let (logical_w, logical_h) = dom::sync_canvas_backing_size(&canvas, limits.max_pixel_ratio);

        let gpu = match render::GpuState::new(&canvas, &config, &limits).await {
            Ok(gpu) => gpu,
            Err(e) => {
                log::error!("WebGPU init error: {e:?}");
                canvas.remove();
                return bg;
            }
        };

        let pointer_target = Rc::new(Cell::new([0.5_f32, 0.5]));
        let logical_size = Rc::new(Cell::new([logical_w, logical_h]));

        {
            let mut listeners = bg.listeners.borrow_mut();
            listeners.wire_pointer_move(pointer_target.clone());
            listeners.wire_resize(canvas.clone(), limits.max_pixel_ratio, logical_size.clone());
        }

        let pixel_ratio = dom::clamped_ratio(limits.max_pixel_ratio) as f32;
        *bg.ctx.borrow_mut() = Some(frame::FrameContext {
            state: FrameState::new(&config),
            config,
            gpu: Some(gpu),
            canvas: canvas.clone(),
            started: Instant::now(),
            pointer_target,
            logical_size,
            pixel_ratio,
        });
        *bg.canvas.borrow_mut() = Some(canvas);
        bg.alive.set(true);

        frame::start_loop(
            bg.ctx.clone(),
            bg.alive.clone(),
            bg.raf_id.clone(),
            bg.tick.clone(),
        );
        bg
    }

    /// Tear down: stop the loop, deregister listeners, release GPU resources
    /// and detach the canvas. Idempotent; a second call performs no GPU work.
    pub fn unmount(&self) {
        self.alive.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
        self.listeners.borrow_mut().remove_all();
        if self.ctx.borrow_mut().take().is_some() {
            log::info!("background unmounted; GPU resources released");
        }
        if let Some(canvas) = self.canvas.borrow_mut().take() {
            canvas.remove();
        }
    }
}
