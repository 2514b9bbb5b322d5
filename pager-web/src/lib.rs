#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod components;
pub mod dom;

pub use components::{Pager, PagerDemo, PagerProps};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    match dom::mount_point() {
        Some(root) => {
            yew::Renderer::<components::PagerDemo>::with_root(root).render();
        }
        None => log::error!("Pager demo has no element to mount into"),
    }
}
