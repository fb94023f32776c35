#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod carousel;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod error;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod logging;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod media;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod rate_limit;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod routes;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod schedule;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod transition;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod typewriter;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
