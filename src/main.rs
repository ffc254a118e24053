use aireview::backend::utils::config::RuntimeConfig;
use aireview::frontend::app::Route;
use aireview::frontend::services::air_quality::use_air_quality_provider;
use aireview::frontend::services::context::AuthState;

use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() {
    env_logger::init();

    // Initialize runtime once
    let _rt = RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create runtime")
    });

    let size = LogicalSize::new(1100.0, 720.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("AireView")
                .with_inner_size(size)
                .with_min_inner_size(size),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(RuntimeConfig::from_env);
    let is_authenticated = use_signal(|| false);
    let mut auth = AuthState { is_authenticated };

    provide_context(auth);
    provide_context(config.clone());
    use_air_quality_provider(&config);

    // Restore a previously saved session before the first guarded route
    use_future(move || async move {
        auth.restore().await;
    });

    rsx! { Router::<Route> {} }
}
