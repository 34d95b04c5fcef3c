pub mod debounce;
pub mod live_preview;

pub use debounce::{run_debounced_parser, spawn_debounced_parser};
pub use live_preview::LivePreview;
