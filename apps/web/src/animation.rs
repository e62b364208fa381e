use std::cell::RefCell;
use std::rc::Rc;

use heatmap_core::format::js_number;
use heatmap_core::{CellRect, TransitionClock};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

/// Cells growing from their start geometry into place.
pub struct CellTransition {
    cells: Vec<(Element, CellRect, CellRect)>,
    clock: TransitionClock,
}

impl CellTransition {
    pub const fn new(cells: Vec<(Element, CellRect, CellRect)>, clock: TransitionClock) -> Self {
        Self { cells, clock }
    }

    /// Advance to `now_ms` and write one frame. Returns `true` once the
    /// cells have reached their final geometry.
    fn step(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        let progress = self.clock.tick(now_ms);
        let finished = self.clock.is_finished();
        for (element, start, end) in &self.cells {
            let rect = if finished {
                *end
            } else {
                start.lerp(end, progress)
            };
            write_rect(element, &rect)?;
        }
        Ok(finished)
    }
}

pub fn write_rect(element: &Element, rect: &CellRect) -> Result<(), JsValue> {
    element.set_attribute("x", &js_number(rect.x))?;
    element.set_attribute("y", &js_number(rect.y))?;
    element.set_attribute("width", &js_number(rect.width))?;
    element.set_attribute("height", &js_number(rect.height))
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
}

/// Drive `transition` with `requestAnimationFrame` until it finishes.
pub fn start(window: Window, mut transition: CellTransition) -> Result<(), JsValue> {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&handle);
    let frame_window = window.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let keep_going = match transition.step(now_ms) {
            Ok(finished) => !finished,
            Err(error) => {
                web_sys::console::error_2(&"Cell transition failed".into(), &error);
                false
            }
        };

        if keep_going {
            if let Some(callback) = next.borrow().as_ref() {
                if let Err(error) = request_frame(&frame_window, callback) {
                    web_sys::console::error_2(&"requestAnimationFrame failed".into(), &error);
                }
            }
        } else {
            // Breaks the Rc cycle so the closure is freed.
            let _ = next.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = handle.borrow().as_ref() {
        request_frame(&window, callback)?;
    }
    Ok(())
}
