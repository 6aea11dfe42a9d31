use crate::app::App;
use tracing_wasm::{WASMLayerConfigBuilder, set_as_global_default_with_config};

mod app;
mod components;
mod services;

fn main() {
    console_error_panic_hook::set_once();
    set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build(),
    );
    yew::Renderer::<App>::new().render();
}
