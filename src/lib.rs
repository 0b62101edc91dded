/// YT Ask - Chrome Extension for asking questions about YouTube videos
/// Built with Rust + WASM + Yew

mod ask;
mod browser;
mod client;
mod config;
mod error;
mod format;
mod interaction;
mod video;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export core functions for JavaScript access
#[wasm_bindgen]
pub fn video_id_from_url(url: &str) -> Option<String> {
    video::extract_video_id(url).ok().flatten()
}

#[wasm_bindgen]
pub fn render_answer(text: &str) -> String {
    format::format_answer(text)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
