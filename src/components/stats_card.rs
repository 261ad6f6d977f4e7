use crate::styles::stats_card as style;
use dioxus::prelude::*;

#[component]
pub fn StatsCard(
    title: String,
    value: i64,
    /// Accent for the top border and the value. Left empty, the card renders unstyled.
    #[props(into, default = String::new())]
    color: String,
) -> Element {
    let (card_style, value_style) = if color.is_empty() {
        (String::new(), String::new())
    } else {
        (format!("border-top: 4px solid {color}"), format!("color: {color}"))
    };

    rsx! {
        div {
            class: style::CARD,
            style: "{card_style}",
            h3 { class: style::TITLE, "{title}" }
            p {
                class: style::VALUE,
                style: "{value_style}",
                "{value}"
            }
        }
    }
}
