//! Application routing system.
//!
//! Every route is wrapped in [`Main`], which applies the navigation
//! guard before rendering the page.

use crate::frontend::pages::auth::{Auth, Register};
use crate::frontend::pages::dashboard::Dashboard;
use crate::frontend::pages::home::Home;
use crate::frontend::pages::information::Information;
use crate::frontend::pages::main::Main;
use crate::frontend::pages::not_found::NotFound;

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    #[layout(Main)]
    /// Public landing page.
    #[route("/")]
    Home {},
    /// Sign-in page.
    #[route("/auth")]
    Auth {},
    /// Registration page.
    #[route("/auth/register")]
    Register {},
    /// Public information page about the AQI scale.
    #[route("/information/prueba")]
    Information {},
    /// Readings dashboard. Requires a stored session token.
    #[route("/dashboard")]
    Dashboard {},
    /// Fallback for unknown paths; protected like any non-public route.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
