//! Window-level listener wiring.
//!
//! Handlers only write into shared cells that the frame tick polls once per
//! frame, so bursts of events coalesce to at most one effect per frame. The
//! closures are retained here (not leaked) so unmount can deregister them.

use crate::dom;
use crate::input;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
pub struct Listeners {
    pointer_move: Option<Closure<dyn FnMut(web::PointerEvent)>>,
    resize: Option<Closure<dyn FnMut()>>,
}

impl Listeners {
    /// Window pointermove -> normalized Y-up target cell.
    pub fn wire_pointer_move(&mut self, target: Rc<Cell<[f32; 2]>>) {
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (width, height) = dom::window_inner_size();
            target.set(input::pointer_target(
                ev.client_x() as f32,
                ev.client_y() as f32,
                width,
                height,
            ));
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        self.pointer_move = Some(closure);
    }

    /// Window resize -> canvas backing sync + logical size cell. No program
    /// rebuild happens here; the frame tick reconfigures the surface.
    pub fn wire_resize(
        &mut self,
        canvas: web::HtmlCanvasElement,
        max_pixel_ratio: f32,
        logical_size: Rc<Cell<[f32; 2]>>,
    ) {
        let closure = Closure::wrap(Box::new(move || {
            let (width, height) = dom::sync_canvas_backing_size(&canvas, max_pixel_ratio);
            logical_size.set([width, height]);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        self.resize = Some(closure);
    }

    /// Deregister everything; safe to call more than once.
    pub fn remove_all(&mut self) {
        let Some(window) = web::window() else {
            self.pointer_move = None;
            self.resize = None;
            return;
        };
        if let Some(closure) = self.pointer_move.take() {
            _ = window
                .remove_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.resize.take() {
            _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}
