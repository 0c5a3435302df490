use super::game::Game;
use crate::catalog::Catalog;
use tile_engine::GRID_SIZE;
use wasm_bindgen::JsValue;
use yew::prelude::*;

const MAX_BOARD_SIZE: f64 = 400.;
const MARGIN: f64 = 20.;

fn fit_board(width: f64, height: f64) -> f64 {
    (width - MARGIN)
        .min(height - MARGIN)
        .min(MAX_BOARD_SIZE)
        .max(0.)
}

fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(name)
}

fn window_size() -> (f64, f64) {
    let read = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(MAX_BOARD_SIZE + MARGIN)
    };
    web_sys::window()
        .map(|window| (read(window.inner_width()), read(window.inner_height())))
        .unwrap_or((MAX_BOARD_SIZE + MARGIN, MAX_BOARD_SIZE + MARGIN))
}

#[function_component(App)]
pub fn app() -> Html {
    let selection = use_ref(|| {
        let catalog = Catalog::embedded();
        let id = query_param("id");
        let entry = catalog.resolve(id.as_deref()).clone();
        log::info!("puzzle {:?} uses {}", id, entry.image);
        (entry, catalog.fallback.image)
    });
    let (entry, fallback_image) = (*selection).clone();

    let (width, height) = window_size();
    let cell_size = fit_board(width, height) / GRID_SIZE as f64;

    html! {
        <div class="app">
            <Game cell_size={cell_size} entry={entry} fallback_image={fallback_image} />
        </div>
    }
}
