#![allow(non_snake_case)]

use dioxus::prelude::*;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Chapter metadata as the browse page embeds it in the `surahList` global.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Surah {
    pub id: u32,
    pub name: String,
    pub ar: String,
    pub translation: String,
    pub verses: u32,
    #[serde(rename = "type")]
    pub revelation: String,
}

/// Reads the page-supplied `surahList` global, if any. The grid only exists
/// on the browse page, so `None` is the common case.
pub fn list_from_window() -> Option<Vec<Surah>> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("surahList")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let json: String = js_sys::JSON::stringify(&value).ok()?.into();
    match serde_json::from_str::<Vec<Surah>>(&json) {
        Ok(surahs) => {
            tracing::info!("loaded {} surahs from page data", surahs.len());
            Some(surahs)
        }
        Err(e) => {
            tracing::warn!("ignoring malformed surahList global: {e}");
            None
        }
    }
}

#[component]
pub fn SurahGrid(surahs: Vec<Surah>) -> Element {
    rsx! {
        div {
            id: "surah-grid",
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
            for surah in surahs {
                a {
                    key: "{surah.id}",
                    href: "/surah/{surah.id}",
                    class: "bg-white dark:bg-gray-800 p-4 rounded-xl border border-gray-100 dark:border-gray-700 flex justify-between items-center hover:shadow-md transition-shadow",
                    div {
                        div { class: "font-bold", "{surah.id}. {surah.name}" }
                        div { class: "text-xs text-gray-500",
                            "{surah.translation} \u{b7} {surah.verses} verses \u{b7} {surah.revelation}"
                        }
                    }
                    div { class: "arabic-content text-2xl", "{surah.ar}" }
                }
            }
        }
    }
}
