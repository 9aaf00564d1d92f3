use catalog::ClientConfig;
use dioxus::prelude::*;

use ui::SignupProvider;
use views::{Activities, Fallback};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Activities {},
    // The page may be served from any path, e.g. /static/index.html.
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../signup.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SignupProvider {
            config: config,
            demo: cfg!(feature = "demo"),
            Router::<Route> {}
        }
    }
}
