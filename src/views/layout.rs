use crate::styles::layout as style;
use dioxus::prelude::*;

/// The page shell shared by every page of the app.
///
/// Whatever is passed as `children` is rendered once, untouched, inside the single `main`
/// content region.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: style::LAYOUT,
            main {
                class: style::MAIN,
                {children}
            }
        }
    }
}
