//! Main layout component with the navigation guard.

use crate::frontend::app::Route;
use crate::frontend::components::layout::Layout;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::guard::{self, GuardDecision};
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

#[component]
pub fn Main() -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let route = use_route::<Route>();

    let decision = guard::evaluate(&route.to_string(), (auth.is_authenticated)());
    if let GuardDecision::Redirect(target) = decision {
        nav.replace(target);
        return rsx! { div {} };
    }

    rsx! { Layout {} }
}
