//! Embedded YouTube player for monastery footage.
//!
//! The iframe is injected through the webview once the placeholder is
//! mounted. One-shot; if the script fails we keep the placeholder.

use dioxus::prelude::*;

#[component]
pub fn VideoEmbed(
    /// YouTube video id
    video_id: String,
    /// Heading shown above the player
    title: String,
) -> Element {
    let id = video_id.clone();
    use_effect(move || {
        let id = id.clone();
        spawn(async move {
            let script = format!(
                r#"
                const host = document.getElementById('video-embed');
                if (host && !host.querySelector('iframe')) {{
                    const frame = document.createElement('iframe');
                    frame.src = 'https://www.youtube.com/embed/{id}';
                    frame.allow = 'accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture';
                    frame.allowFullscreen = true;
                    host.appendChild(frame);
                }}
                "#
            );
            if let Err(e) = dioxus::document::eval(&script).await {
                tracing::warn!(error = %e, "Failed to inject video player");
            }
        });
    });

    rsx! {
        div { class: "detail-panel",
            h3 { "{title}" }
            div { id: "video-embed", class: "video-embed",
                div { class: "video-loading",
                    span { "📽️" }
                    span { "Loading video..." }
                }
            }
        }
    }
}
