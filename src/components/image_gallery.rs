//! Image gallery with a main view and thumbnail strip.

use dioxus::prelude::*;

#[component]
pub fn ImageGallery(
    /// Image URLs, first one shown initially
    images: Vec<String>,
    /// Alt text base (the monastery name)
    alt: String,
) -> Element {
    let mut selected = use_signal(|| 0usize);

    let index = selected().min(images.len().saturating_sub(1));
    let main = images.get(index).cloned().unwrap_or_default();

    rsx! {
        div { class: "gallery-main",
            img { src: "{main}", alt: "{alt}" }
        }
        if images.len() > 1 {
            div { class: "gallery-thumbs",
                for (i, image) in images.iter().enumerate() {
                    button {
                        r#type: "button",
                        class: if i == index { "gallery-thumb active" } else { "gallery-thumb" },
                        onclick: move |_| selected.set(i),
                        img { src: "{image}", alt: "{alt}" }
                    }
                }
            }
        }
    }
}
