//! Read-only markdown rendering for catalog prose.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Renders catalog prose (history, significance) written in markdown.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     MarkdownText {
///         content: "Founded in the **16th century**.".to_string(),
///     }
/// }
/// ```
#[component]
pub fn MarkdownText(
    /// Markdown content to render
    content: ReadOnlySignal<String>,
) -> Element {
    // Convert markdown to HTML
    let html_content = use_memo(move || {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);

        let content_str = content();
        let parser = Parser::new_ext(&content_str, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    });

    rsx! {
        div {
            class: "prose",
            dangerous_inner_html: "{html_content()}",
        }
    }
}
