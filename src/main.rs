mod content;
mod dom;
mod error;
mod primitives;
mod reveal;
mod scroll;
mod site;
mod tilt;
mod variant;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use site::{AnimatedSite, InteractiveSite, StaticSite};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    InteractiveSite {},
    #[route("/animated")]
    AnimatedSite {},
    #[route("/static")]
    StaticSite {},
}

const LOG_LEVEL: Level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    // Errors only when a subscriber is already installed.
    let _ = dioxus::logger::init(LOG_LEVEL);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting portfolio site");
    dioxus::launch(App);
}
