//! Birthday tribute site core crate.
//!
//! A single-page, browser-resident gift: a hero splash, a looping movie
//! gallery, three mini-games, a shuffled background playlist and a
//! celebration finale. `start_site()` builds the whole DOM; afterwards
//! everything runs off user-input callbacks, media events and one
//! `requestAnimationFrame` loop. Nothing is persisted and nothing talks to
//! a server: each tab starts from the same fixed state.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod catalog;
pub mod celebration;
pub mod dom;
pub mod gallery;
pub mod games;
pub mod hero;
pub mod player;
pub mod rng;
pub mod session;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Build the site into the current document and hand control back to the
/// browser's event loop.
#[wasm_bindgen]
pub fn start_site() -> Result<(), JsValue> {
    app::mount()
}
