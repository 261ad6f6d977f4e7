use dioxus::prelude::*;
use views::Home;

mod components;
mod models;
mod styles;
mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus_logger::init(tracing::Level::INFO) {
        eprintln!("failed to init logger: {err}");
    }
    tracing::info!("launching task dashboard");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "Task Manager" }
        Home {}
    }
}
