use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders member-written markdown. Raw HTML in the source is dropped.
#[component]
pub fn Markdown(text: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();

    let parser = Parser::new_ext(&text, Options::all())
        .filter(|event| !matches!(event, Event::Html(_)));
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    rsx!(
        div {
            class: "prose max-w-none {class}",
            dangerous_inner_html: "{html_output}"
        }
    )
}
