#![allow(non_snake_case)]

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;

pub const STORAGE_KEY: &str = "quran_bookmarks";

/// A saved verse reference. The short serde names are the wire format the
/// site has always stored under `quran_bookmarks`; lists persisted before
/// this rewrite keep loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "s")]
    pub surah_name: String,
    #[serde(rename = "a")]
    pub verse: u32,
    #[serde(rename = "sid")]
    pub surah_id: u32,
}

impl Bookmark {
    /// Link target the server routes honor.
    pub fn href(&self) -> String {
        format!("/surah/{}#ayah-{}", self.surah_id, self.verse)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

/// Ordered bookmark list; insertion order is display order. At most one
/// entry per (surah id, verse) pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookmarkList {
    items: Vec<Bookmark>,
}

impl BookmarkList {
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(STORAGE_KEY) {
            Some(raw) => Self::from_json(&raw),
            None => Self::default(),
        }
    }

    /// Malformed JSON yields the empty list rather than failing.
    pub fn from_json(raw: &str) -> Self {
        let items = serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!("discarding unreadable stored bookmarks: {e}");
            Vec::new()
        });
        Self { items }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn add(&mut self, bookmark: Bookmark) -> AddOutcome {
        let duplicate = self
            .items
            .iter()
            .any(|b| b.surah_id == bookmark.surah_id && b.verse == bookmark.verse);
        if duplicate {
            return AddOutcome::Duplicate;
        }
        self.items.push(bookmark);
        AddOutcome::Added
    }

    /// Indices come from the current render, but an out-of-range index is
    /// still a no-op rather than a panic.
    pub fn remove(&mut self, index: usize) -> Option<Bookmark> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn items(&self) -> &[Bookmark] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slide-out drawer plus its backdrop overlay. Visibility is pure CSS class
/// state: `translate-x-full` on the drawer, `hidden` on the overlay.
#[component]
pub fn BookmarksDrawer(
    bookmarks: Signal<BookmarkList>,
    mut open: Signal<bool>,
    onremove: EventHandler<usize>,
) -> Element {
    let slide = if *open.read() { "" } else { " translate-x-full" };
    let overlay = if *open.read() { "" } else { " hidden" };
    rsx! {
        div {
            id: "drawer-overlay",
            class: "fixed inset-0 bg-black/50 z-40{overlay}",
            onclick: move |_| open.set(false),
        }
        aside {
            id: "bookmarks-drawer",
            class: "fixed top-0 right-0 h-full w-80 bg-white dark:bg-gray-900 shadow-xl z-50 transition-transform{slide}",
            h2 { class: "p-4 font-bold border-b border-gray-100 dark:border-gray-700",
                "Bookmarks"
            }
            div { id: "bookmarks-list", class: "p-4 space-y-3 overflow-y-auto",
                if bookmarks.read().is_empty() {
                    div { class: "text-center py-10 text-gray-400",
                        p { "No bookmarks yet." }
                    }
                } else {
                    for (i , item) in bookmarks.read().items().iter().cloned().enumerate() {
                        div {
                            key: "{item.surah_id}:{item.verse}",
                            class: "bg-gray-50 dark:bg-gray-800 p-3 rounded-lg border border-gray-100 dark:border-gray-700 flex justify-between items-center",
                            a { class: "flex-grow hover:text-brand-600 transition-colors",
                                href: item.href(),
                                span { class: "font-bold text-sm", "Surah {item.surah_name}" }
                                div { class: "text-xs text-gray-500", "Verse {item.verse}" }
                            }
                            button {
                                class: "text-red-400 hover:text-red-600 ml-2",
                                onclick: move |_| onremove.call(i),
                                "\u{2715}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::MemStore;

    fn fatiha(verse: u32) -> Bookmark {
        Bookmark {
            surah_name: "Al-Fatiha".to_string(),
            verse,
            surah_id: 1,
        }
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut list = BookmarkList::default();
        assert_eq!(list.add(fatiha(1)), AddOutcome::Added);
        assert_eq!(list.add(fatiha(1)), AddOutcome::Duplicate);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn uniqueness_is_per_surah_and_verse() {
        let mut list = BookmarkList::default();
        assert_eq!(list.add(fatiha(1)), AddOutcome::Added);
        assert_eq!(list.add(fatiha(2)), AddOutcome::Added);
        let mut other = fatiha(1);
        other.surah_id = 2;
        other.surah_name = "Al-Baqarah".to_string();
        assert_eq!(list.add(other), AddOutcome::Added);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_deletes_exactly_the_indexed_item() {
        let mut list = BookmarkList::default();
        list.add(fatiha(1));
        list.add(fatiha(2));
        list.add(fatiha(3));
        let removed = list.remove(1);
        assert_eq!(removed, Some(fatiha(2)));
        assert_eq!(list.items(), &[fatiha(1), fatiha(3)]);
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut list = BookmarkList::default();
        list.add(fatiha(1));
        assert_eq!(list.remove(5), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn round_trips_through_storage_preserving_order() {
        let store = MemStore::new();
        let mut list = BookmarkList::default();
        list.add(fatiha(7));
        list.add(Bookmark {
            surah_name: "Ya-Sin".to_string(),
            verse: 9,
            surah_id: 36,
        });
        store.set(STORAGE_KEY, &list.to_json());

        let reloaded = BookmarkList::load(&store);
        assert_eq!(reloaded, list);
    }

    #[test]
    fn wire_format_uses_legacy_keys() {
        let list = BookmarkList::from_json(r#"[{"s":"Al-Fatiha","a":1,"sid":1}]"#);
        assert_eq!(list.items(), &[fatiha(1)]);
        assert_eq!(list.to_json(), r#"[{"s":"Al-Fatiha","a":1,"sid":1}]"#);
    }

    #[test]
    fn malformed_stored_json_loads_as_empty() {
        assert!(BookmarkList::from_json("{not json").is_empty());
        assert!(BookmarkList::from_json(r#"{"s":"x"}"#).is_empty());
    }

    #[test]
    fn missing_key_loads_as_empty() {
        let store = MemStore::new();
        assert!(BookmarkList::load(&store).is_empty());
    }

    #[test]
    fn href_points_at_the_verse_anchor() {
        assert_eq!(fatiha(3).href(), "/surah/1#ayah-3");
    }
}
