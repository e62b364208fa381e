mod animation;
mod dom;
mod fetch;
mod render;
mod tooltip;

use heatmap_core::{ChartOptions, DATASET_URL};
use render::Containers;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

async fn run(containers: Containers) {
    let chart = match fetch::load_chart(DATASET_URL, &ChartOptions::default()).await {
        Ok(chart) => chart,
        Err(error) => {
            console::error_1(&format!("Failed to load temperature data: {error}").into());
            return;
        }
    };

    if let Err(error) = render::render_heatmap(&containers, &chart) {
        console::error_2(&"Failed to render heatmap".into(), &error);
    }
}

fn main() {
    match Containers::from_page() {
        Ok(containers) => spawn_local(run(containers)),
        Err(error) => console::error_2(&"Heatmap page is missing its containers".into(), &error),
    }
}
