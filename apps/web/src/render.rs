use heatmap_core::format::js_number;
use heatmap_core::{Axis, HeatmapChart, TransitionClock};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::animation::{self, CellTransition};
use crate::dom::{append_html, append_svg, set_attrs};
use crate::tooltip::TooltipController;

/// The page elements the app draws into.
pub struct Containers {
    pub window: Window,
    pub document: Document,
    pub root: Element,
    pub tooltip: HtmlElement,
}

impl Containers {
    pub fn from_page() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let root = document
            .get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("missing #app container"))?;
        let tooltip = document
            .get_element_by_id("tooltip")
            .ok_or_else(|| JsValue::from_str("missing #tooltip element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("#tooltip is not an HTML element"))?;
        Ok(Self {
            window,
            document,
            root,
            tooltip,
        })
    }
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", js_number(x), js_number(y))
}

/// Draw an axis into `group` the way d3-axis lays one out.
fn render_axis(document: &Document, group: &Element, axis: &Axis) -> Result<(), JsValue> {
    let orientation = axis.orientation;
    set_attrs(
        group,
        &[
            ("fill", "none"),
            ("font-size", "10"),
            ("font-family", "sans-serif"),
            ("text-anchor", orientation.text_anchor()),
        ],
    )?;
    append_svg(
        document,
        group,
        "path",
        &[
            ("class", "domain"),
            ("stroke", "currentColor"),
            ("d", &axis.domain_path()),
        ],
    )?;

    let line_length = js_number(axis.tick_line_length());
    let label_offset = js_number(axis.label_offset());
    let (line_attr, text_attr) = match orientation.cross_attr() {
        "y" => ("y2", "y"),
        _ => ("x2", "x"),
    };

    for tick in &axis.ticks {
        let tick_group = append_svg(
            document,
            group,
            "g",
            &[
                ("class", "tick"),
                ("opacity", "1"),
                ("transform", &axis.tick_transform(tick)),
            ],
        )?;
        append_svg(
            document,
            &tick_group,
            "line",
            &[("stroke", "currentColor"), (line_attr, &line_length)],
        )?;
        let text = append_svg(
            document,
            &tick_group,
            "text",
            &[
                ("fill", "currentColor"),
                (text_attr, &label_offset),
                ("dy", orientation.label_dy()),
            ],
        )?;
        text.set_text_content(Some(&tick.label));
    }
    Ok(())
}

fn render_legend(document: &Document, root: &Element, chart: &HeatmapChart) -> Result<(), JsValue> {
    let legend = &chart.legend;
    let container = append_html(document, root, "div")?;
    container.set_id("legend");

    let svg = append_svg(
        document,
        &container,
        "svg",
        &[
            ("width", &js_number(legend.width)),
            ("height", &js_number(legend.height)),
        ],
    )?;
    let swatches = append_svg(
        document,
        &svg,
        "g",
        &[("transform", &translate(legend.padding, 0.0))],
    )?;
    for swatch in &legend.swatches {
        append_svg(
            document,
            &swatches,
            "rect",
            &[
                ("x", &js_number(swatch.x)),
                ("y", "0"),
                ("width", &js_number(heatmap_core::legend::SWATCH_SIZE)),
                ("height", &js_number(heatmap_core::legend::SWATCH_SIZE)),
                ("fill", &swatch.fill.to_string()),
                ("data-temp", &js_number(swatch.temperature)),
            ],
        )?;
    }

    let axis_group = append_svg(
        document,
        &svg,
        "g",
        &[(
            "transform",
            &translate(legend.padding, heatmap_core::legend::SWATCH_SIZE),
        )],
    )?;
    render_axis(document, &axis_group, &legend.axis)
}

/// Replace the contents of `#app` with the chart and start the entry
/// transition.
pub fn render_heatmap(containers: &Containers, chart: &HeatmapChart) -> Result<(), JsValue> {
    let document = &containers.document;
    let root = &containers.root;
    let insets = chart.options.insets;
    root.set_inner_html("");

    let title = append_html(document, root, "h1")?;
    title.set_id("title");
    title.set_text_content(Some(&chart.title));

    let description = append_html(document, root, "h3")?;
    description.set_id("description");
    description.set_text_content(Some(&chart.description));

    let svg = append_svg(
        document,
        root,
        "svg",
        &[
            ("width", &js_number(chart.options.width)),
            ("height", &js_number(chart.options.height)),
        ],
    )?;

    let x_axis = append_svg(
        document,
        &svg,
        "g",
        &[
            ("id", "x-axis"),
            (
                "transform",
                &translate(insets.left, insets.top + chart.chart_height()),
            ),
        ],
    )?;
    render_axis(document, &x_axis, &chart.x_axis)?;

    let y_axis = append_svg(
        document,
        &svg,
        "g",
        &[("id", "y-axis"), ("transform", &translate(insets.left, insets.top))],
    )?;
    render_axis(document, &y_axis, &chart.y_axis)?;

    let cells_group = append_svg(
        document,
        &svg,
        "g",
        &[("transform", &translate(insets.left, insets.top))],
    )?;

    let tooltip = TooltipController::new(document.clone(), containers.tooltip.clone());
    let mut animated = Vec::with_capacity(chart.cells.len());
    for cell in &chart.cells {
        let rect = append_svg(
            document,
            &cells_group,
            "rect",
            &[("class", "cell"), ("fill", &cell.fill.to_string())],
        )?;
        for (name, value) in cell.data_attributes() {
            rect.set_attribute(name, &value)?;
        }
        animation::write_rect(&rect, &cell.start)?;
        tooltip.attach(&rect, cell)?;
        animated.push((rect, cell.start, cell.end));
    }

    render_legend(document, root, chart)?;

    let transition = CellTransition::new(animated, TransitionClock::new(chart.options.transition_ms));
    animation::start(containers.window.clone(), transition)
}
