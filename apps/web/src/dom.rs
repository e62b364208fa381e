use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub fn set_attrs(element: &Element, attrs: &[(&str, &str)]) -> Result<(), JsValue> {
    for (name, value) in attrs {
        element.set_attribute(name, value)?;
    }
    Ok(())
}

/// Create an HTML element and append it to `parent`.
pub fn append_html(document: &Document, parent: &Element, tag: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    parent.append_child(&element)?;
    Ok(element)
}

/// Create an element in the SVG namespace and append it to `parent`.
pub fn append_svg(
    document: &Document,
    parent: &Element,
    tag: &str,
    attrs: &[(&str, &str)],
) -> Result<Element, JsValue> {
    let element = document.create_element_ns(Some(SVG_NS), tag)?;
    set_attrs(&element, attrs)?;
    parent.append_child(&element)?;
    Ok(element)
}
