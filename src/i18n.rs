// SPDX-License-Identifier: GPL-3.0-only

//! Provides localization support for this crate.

use std::sync::LazyLock;

use i18n_embed::{
    DefaultLocalizer, LanguageLoader, Localizer,
    fluent::{FluentLanguageLoader, fluent_language_loader},
    unic_langid::LanguageIdentifier,
};
use rust_embed::RustEmbed;

use crate::layout::Layout;
use crate::render::RenderFrame;

/// Applies the requested language(s) to requested translations from the `fl!()` macro.
pub fn init(requested_languages: &[LanguageIdentifier]) {
    if let Err(why) = localizer().select(requested_languages) {
        tracing::warn!("error while loading fluent localizations: {}", why);
    }
}

// Get the `Localizer` to be used for localizing this library.
#[must_use]
pub fn localizer() -> Box<dyn Localizer> {
    Box::from(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();

    if let Err(why) = loader.load_fallback_language(&Localizations) {
        tracing::warn!("error while loading fallback language: {}", why);
    }

    loader
});

/// Request a localized string by ID from the i18n/ directory.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

/// Localized display name of a layout.
pub fn layout_name(layout: Layout) -> String {
    match layout {
        Layout::Latin => crate::fl!("layout-latin"),
        Layout::Cyrillic => crate::fl!("layout-cyrillic"),
    }
}

fn on_off(flag: bool) -> String {
    if flag {
        crate::fl!("state-on")
    } else {
        crate::fl!("state-off")
    }
}

/// One-line summary of a frame's modifier state, shown under the keyboard.
pub fn status_line(frame: &RenderFrame) -> String {
    crate::fl!(
        "status-line",
        layout = layout_name(frame.language),
        caps = on_off(frame.caps_active),
        shift = on_off(frame.shift_active)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Selection;

    #[test]
    fn test_fallback_bundle_loaded() {
        for id in [
            "language-hint",
            "layout-latin",
            "layout-cyrillic",
            "status-line",
            "layout-loaded",
            "script-error",
        ] {
            assert!(LANGUAGE_LOADER.has(id), "fallback bundle should define '{}'", id);
        }
    }

    #[test]
    fn test_bundles_embedded() {
        assert!(Localizations::get("en/dualboard.ftl").is_some());
        assert!(Localizations::get("ru/dualboard.ftl").is_some());
    }

    #[test]
    fn test_layout_names_differ() {
        assert_ne!(layout_name(Layout::Latin), layout_name(Layout::Cyrillic));
    }

    #[test]
    fn test_status_line_mentions_caps_lock() {
        let frame = RenderFrame {
            language: Layout::Latin,
            caps_active: true,
            shift_active: false,
            glyphs: Default::default(),
            pressed: Default::default(),
            content: String::new(),
            selection: Selection::caret(0),
        };
        let line = status_line(&frame);
        assert!(line.contains("Caps Lock"), "status line was '{}'", line);
    }
}
