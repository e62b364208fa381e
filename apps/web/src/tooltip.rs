use std::cell::RefCell;
use std::rc::Rc;

use heatmap_core::format::js_number;
use heatmap_core::{Cell, TooltipState, TOOLTIP_OFFSET_PX};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

/// The page's single tooltip element and what it currently shows.
#[derive(Clone)]
pub struct TooltipController {
    document: Document,
    element: HtmlElement,
    state: Rc<RefCell<TooltipState>>,
}

impl TooltipController {
    pub fn new(document: Document, element: HtmlElement) -> Self {
        Self {
            document,
            element,
            state: Rc::new(RefCell::new(TooltipState::Hidden)),
        }
    }

    /// Show the tooltip on `mouseover` and hide it on `mouseout`. The
    /// listeners stay registered for the life of the page.
    pub fn attach(&self, rect: &Element, cell: &Cell) -> Result<(), JsValue> {
        let over = {
            let controller = self.clone();
            let cell = cell.clone();
            Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
                let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
                controller
                    .state
                    .borrow_mut()
                    .enter(&cell, pointer, TOOLTIP_OFFSET_PX);
                controller.paint_or_log();
            }))
        };
        rect.add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref())?;
        over.forget();

        let out = {
            let controller = self.clone();
            Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_event: MouseEvent| {
                controller.state.borrow_mut().exit();
                controller.paint_or_log();
            }))
        };
        rect.add_event_listener_with_callback("mouseout", out.as_ref().unchecked_ref())?;
        out.forget();

        Ok(())
    }

    fn paint_or_log(&self) {
        if let Err(error) = self.paint() {
            web_sys::console::error_2(&"Failed to update tooltip".into(), &error);
        }
    }

    fn paint(&self) -> Result<(), JsValue> {
        let style = self.element.style();
        let state = self.state.borrow();
        match &*state {
            TooltipState::Hidden => style.set_property("display", "none"),
            TooltipState::Shown { tooltip, left, top } => {
                let [heading, reading] = tooltip.lines();
                self.element.set_inner_html("");
                self.element
                    .append_child(&self.document.create_text_node(heading))?;
                let line_break = self.document.create_element("br")?;
                self.element.append_child(&line_break)?;
                self.element
                    .append_child(&self.document.create_text_node(reading))?;

                style.set_property("display", "block")?;
                style.set_property("top", &format!("{}px", js_number(*top)))?;
                style.set_property("left", &format!("{}px", js_number(*left)))?;
                self.element
                    .set_attribute("data-year", &tooltip.year.to_string())
            }
        }
    }
}
