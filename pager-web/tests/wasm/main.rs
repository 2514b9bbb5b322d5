#![cfg(target_arch = "wasm32")]

mod pager_click_tests;
