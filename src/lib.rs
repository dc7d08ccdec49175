#[cfg(target_arch = "wasm32")]
pub mod frontend;
pub mod interaction;
pub mod motion;
pub mod projects;
pub mod theme;
