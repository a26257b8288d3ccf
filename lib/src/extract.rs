//! Bookmark extraction from an Arc `StorableSidebar.json` document.
//!
//! Arc stores its sidebar as flat `[id, payload, id, payload, ...]` lists.
//! Folders point at their children by id, and those ids are resolved
//! against the list that contains the folder. Children are therefore
//! visited twice when they also sit at the top level of that list; the
//! output keeps both occurrences.

use crate::models::{Bookmark, ItemId, ItemPayload};
use log::{debug, warn};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Top-level sections of the export that hold an item list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncSection {
    Sidebar,
    Firebase,
}

impl SyncSection {
    /// Sections in the order their bookmarks are emitted
    pub const ALL: [SyncSection; 2] = [SyncSection::Sidebar, SyncSection::Firebase];

    /// JSON pointer to the section's item list
    pub fn pointer(&self) -> &'static str {
        match self {
            SyncSection::Sidebar => "/sidebarSyncState/items",
            SyncSection::Firebase => "/firebaseSyncState/syncData/items",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SyncSection::Sidebar => "sidebar",
            SyncSection::Firebase => "firebase",
        }
    }
}

/// Counters collected while walking the item lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// `(id, payload)` pairs looked at, synthetic child pairs included
    pub pairs_visited: usize,
    /// Pairs whose payload was missing or not an object
    pub payloads_skipped: usize,
    /// Child ids with no payload in the enclosing list
    pub unresolved_children: usize,
    /// Child lists not descended into because they already sit on the
    /// recursion path
    pub cycles_cut: usize,
    pub sidebar_bookmarks: usize,
    pub firebase_bookmarks: usize,
}

/// Extract bookmarks, using the current time for entries without a numeric `createdAt`
pub fn extract(root: &Value) -> Vec<Bookmark> {
    extract_at(root, chrono::Utc::now().timestamp())
}

/// Extract bookmarks with an explicit fallback timestamp
pub fn extract_at(root: &Value, now: i64) -> Vec<Bookmark> {
    extract_with_stats(root, now).0
}

pub fn extract_with_stats(root: &Value, now: i64) -> (Vec<Bookmark>, ExtractStats) {
    let mut extractor = Extractor::new(now);

    for section in SyncSection::ALL {
        let Some(items) = root.pointer(section.pointer()) else {
            debug!("No {} item list in export", section.display_name());
            continue;
        };

        let before = extractor.bookmarks.len();
        extractor.process_list(items);
        let found = extractor.bookmarks.len() - before;

        debug!("Extracted {} bookmarks from {} items", found, section.display_name());
        match section {
            SyncSection::Sidebar => extractor.stats.sidebar_bookmarks = found,
            SyncSection::Firebase => extractor.stats.firebase_bookmarks = found,
        }
    }

    (extractor.bookmarks, extractor.stats)
}

/// One `(id, payload)` pair. `payload` is `None` for an unresolved child.
#[derive(Debug, Clone, Copy)]
struct Entry<'a> {
    id: &'a Value,
    payload: Option<&'a Value>,
}

struct Extractor {
    now: i64,
    bookmarks: Vec<Bookmark>,
    /// Child lists on the current recursion path
    path: HashSet<ListKey>,
    stats: ExtractStats,
}

impl Extractor {
    fn new(now: i64) -> Self {
        Self {
            now,
            bookmarks: Vec::new(),
            path: HashSet::new(),
            stats: ExtractStats::default(),
        }
    }

    fn process_list<'a>(&mut self, items: &'a Value) {
        let Some(items) = items.as_array() else {
            debug!("Item list is not an array, skipping");
            return;
        };

        // chunks_exact drops an unmatched trailing id
        let entries: Vec<Entry<'a>> = items
            .chunks_exact(2)
            .map(|pair| Entry {
                id: &pair[0],
                payload: Some(&pair[1]),
            })
            .collect();

        self.process_entries(&entries);
    }

    fn process_entries<'a>(&mut self, entries: &[Entry<'a>]) {
        let mut index: Option<HashMap<ItemId<'a>, Option<&'a Value>>> = None;

        for entry in entries {
            self.stats.pairs_visited += 1;

            let Some(payload) = entry.payload.and_then(ItemPayload::from_value) else {
                self.stats.payloads_skipped += 1;
                continue;
            };

            let resolved = payload.resolve();

            if let Some(bookmark) = resolved.bookmark(self.now) {
                self.bookmarks.push(bookmark);
            }

            let Some(children_ids) = resolved.children_ids else {
                continue;
            };

            let index = index.get_or_insert_with(|| build_index(entries));
            let children: Vec<Entry<'a>> = children_ids
                .iter()
                .map(|child_id| {
                    let payload = ItemId::from_value(child_id)
                        .and_then(|key| index.get(&key).copied())
                        .flatten();
                    if payload.is_none() {
                        self.stats.unresolved_children += 1;
                    }
                    Entry {
                        id: child_id,
                        payload,
                    }
                })
                .collect();

            // The walk is a pure function of the list, so meeting the same
            // list again below itself would never terminate
            let key = list_key(&children);
            if self.path.contains(&key) {
                warn!("Children of {} repeat an enclosing folder, skipping", entry.id);
                self.stats.cycles_cut += 1;
                continue;
            }

            debug!("Descending into {} children of {}", children.len(), entry.id);

            self.path.insert(key.clone());
            self.process_entries(&children);
            self.path.remove(&key);
        }
    }
}

/// Addresses of the id and payload of every entry in a list
type ListKey = Vec<(usize, usize)>;

fn list_key(entries: &[Entry<'_>]) -> ListKey {
    entries
        .iter()
        .map(|entry| {
            let payload = entry.payload.map_or(0, |p| p as *const Value as usize);
            (entry.id as *const Value as usize, payload)
        })
        .collect()
}

/// Map each scalar id to the payload of its first occurrence
fn build_index<'a>(entries: &[Entry<'a>]) -> HashMap<ItemId<'a>, Option<&'a Value>> {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(id) = ItemId::from_value(entry.id) {
            index.entry(id).or_insert(entry.payload);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const NOW: i64 = 1_800_000_000;

    fn tab(title: &str, url: &str, created_at: Value) -> Value {
        json!({
            "data": {"tab": {"savedTitle": title, "savedURL": url}},
            "createdAt": created_at
        })
    }

    fn sidebar(items: Value) -> Value {
        json!({ "sidebarSyncState": { "items": items } })
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!([]))]
    #[case(json!(null))]
    #[case(sidebar(json!("not a list")))]
    #[case(sidebar(json!({"id1": {}})))]
    #[case(sidebar(json!(42)))]
    #[case(json!({"firebaseSyncState": {"syncData": {"items": {}}}}))]
    #[case(json!({"firebaseSyncState": 3}))]
    fn test_malformed_roots_yield_nothing(#[case] root: Value) {
        assert!(extract_at(&root, NOW).is_empty());
    }

    #[test]
    fn test_single_bookmark() {
        let root = json!({
            "sidebarSyncState": {
                "items": ["id1", {
                    "data": {"tab": {"savedTitle": "Example", "savedURL": "http://example.com"}},
                    "createdAt": 1700000000
                }]
            }
        });

        assert_eq!(
            extract_at(&root, NOW),
            vec![Bookmark::new("Example", "http://example.com", 1_700_000_000)]
        );
    }

    #[test]
    fn test_wrapped_payload_matches_bare() {
        let inner = tab("A", "http://a", json!(100));
        let bare = sidebar(json!(["a", inner.clone()]));
        let wrapped = sidebar(json!(["a", {"value": inner}]));

        assert_eq!(extract_at(&bare, NOW), extract_at(&wrapped, NOW));
        assert_eq!(extract_at(&bare, NOW).len(), 1);
    }

    #[test]
    fn test_missing_or_empty_url_dropped() {
        let root = sidebar(json!([
            "a", {"data": {"tab": {"savedTitle": "No URL"}}},
            "b", tab("Empty", "", json!(1)),
            "c", {"data": {"tab": {}}},
            "d", tab("Kept", "http://d", json!(4)),
        ]));

        let bookmarks = extract_at(&root, NOW);
        assert_eq!(bookmarks, vec![Bookmark::new("Kept", "http://d", 4)]);
    }

    #[test]
    fn test_non_string_url_yields_no_bookmark() {
        let root = sidebar(json!([
            "a", {"data": {"tab": {"savedTitle": "Numeric", "savedURL": 42}}, "createdAt": 1},
            "b", {"data": {"tab": {"savedTitle": ["x"], "savedURL": "http://b"}}, "createdAt": 2},
        ]));

        // A non-string title is absent too, so the URL stands in for it
        let bookmarks = extract_at(&root, NOW);
        assert_eq!(bookmarks, vec![Bookmark::new("http://b", "http://b", 2)]);
    }

    #[test]
    fn test_order_follows_list() {
        let root = sidebar(json!([
            "x", tab("X", "http://x", json!(1)),
            "y", tab("Y", "http://y", json!(2)),
            "z", tab("Z", "http://z", json!(3)),
        ]));

        let urls: Vec<_> = extract_at(&root, NOW).into_iter().map(|b| b.url).collect();
        assert_eq!(urls, vec!["http://x", "http://y", "http://z"]);
    }

    #[test]
    fn test_odd_length_list_ignores_trailing_id() {
        let root = sidebar(json!(["a", tab("A", "http://a", json!(1)), "dangling"]));
        let (bookmarks, stats) = extract_with_stats(&root, NOW);
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(stats.pairs_visited, 1);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!("payload"))]
    #[case(json!([1, 2]))]
    #[case(json!(17))]
    fn test_non_object_payload_skipped(#[case] payload: Value) {
        let root = sidebar(json!(["bad", payload, "good", tab("G", "http://g", json!(1))]));
        let (bookmarks, stats) = extract_with_stats(&root, NOW);
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(stats.payloads_skipped, 1);
    }

    #[test]
    fn test_title_falls_back_to_url() {
        let root = sidebar(json!([
            "a", {"data": {"tab": {"savedURL": "http://a"}}, "createdAt": 1},
            "b", tab("", "http://b", json!(2)),
        ]));

        let titles: Vec<_> = extract_at(&root, NOW).into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["http://a", "http://b"]);
    }

    #[rstest]
    #[case(json!(1650000000.7), 1_650_000_000)]
    #[case(json!(1650000000), 1_650_000_000)]
    #[case(json!("2024-01-01"), NOW)]
    #[case(json!(null), NOW)]
    fn test_add_date(#[case] created_at: Value, #[case] expected: i64) {
        let root = sidebar(json!(["a", tab("A", "http://a", created_at)]));
        assert_eq!(extract_at(&root, NOW)[0].add_date, expected);
    }

    #[test]
    fn test_missing_created_at_uses_wall_clock() {
        let root = sidebar(json!(["a", {"data": {"tab": {"savedURL": "http://a"}}}]));

        let before = chrono::Utc::now().timestamp();
        let bookmarks = extract(&root);
        let after = chrono::Utc::now().timestamp();

        assert!(bookmarks[0].add_date >= before && bookmarks[0].add_date <= after);
    }

    #[test]
    fn test_folder_resolves_child_in_same_list() {
        let root = sidebar(json!([
            "folder", {"childrenIds": ["child"], "title": "Folder"},
            "child", tab("Child", "http://child", json!(5)),
        ]));

        // Once via the folder, once as a top-level entry
        let bookmarks = extract_at(&root, NOW);
        assert_eq!(
            bookmarks,
            vec![
                Bookmark::new("Child", "http://child", 5),
                Bookmark::new("Child", "http://child", 5),
            ]
        );
    }

    #[test]
    fn test_folder_children_visited_in_children_order() {
        let root = sidebar(json!([
            "folder", {"childrenIds": ["b", "a"]},
            "a", tab("A", "http://a", json!(1)),
            "b", tab("B", "http://b", json!(2)),
        ]));

        let urls: Vec<_> = extract_at(&root, NOW).into_iter().map(|b| b.url).collect();
        assert_eq!(urls, vec!["http://b", "http://a", "http://a", "http://b"]);
    }

    #[test]
    fn test_unresolved_child_does_not_stop_siblings() {
        let root = sidebar(json!([
            "folder", {"value": {"childrenIds": ["ghost", "real"]}},
            "real", tab("Real", "http://real", json!(9)),
        ]));

        let (bookmarks, stats) = extract_with_stats(&root, NOW);
        assert_eq!(stats.unresolved_children, 1);
        // child via folder, then top-level copy
        assert_eq!(bookmarks.len(), 2);
        assert!(bookmarks.iter().all(|b| b.url == "http://real"));
    }

    #[test]
    fn test_duplicate_ids_first_occurrence_wins() {
        let root = sidebar(json!([
            "folder", {"childrenIds": ["dup"]},
            "dup", tab("First", "http://first", json!(1)),
            "dup", tab("Second", "http://second", json!(2)),
        ]));

        let bookmarks = extract_at(&root, NOW);
        assert_eq!(bookmarks[0].title, "First");
        assert_eq!(bookmarks.len(), 3);
    }

    #[test]
    fn test_grandchildren_resolve_against_child_list() {
        // "leaf" is only reachable if it is listed among the folder's children
        let root = sidebar(json!([
            "outer", {"childrenIds": ["inner", "leaf"]},
            "inner", {"childrenIds": ["leaf"]},
            "leaf", tab("Leaf", "http://leaf", json!(1)),
        ]));

        // outer -> inner -> leaf, outer -> leaf, inner -> leaf, leaf
        assert_eq!(extract_at(&root, NOW).len(), 4);
    }

    #[test]
    fn test_grandchild_missing_from_child_list_is_unresolved() {
        let root = sidebar(json!([
            "outer", {"childrenIds": ["inner"]},
            "inner", {"childrenIds": ["leaf"]},
            "leaf", tab("Leaf", "http://leaf", json!(1)),
        ]));

        let (bookmarks, stats) = extract_with_stats(&root, NOW);
        // inner -> leaf at the top level, plus the top-level leaf itself
        assert_eq!(bookmarks.len(), 2);
        assert_eq!(stats.unresolved_children, 1);
    }

    #[test]
    fn test_entry_with_tab_and_children_fires_both() {
        let root = sidebar(json!([
            "both", {
                "data": {"tab": {"savedTitle": "Both", "savedURL": "http://both"}},
                "createdAt": 1,
                "childrenIds": ["kid"]
            },
            "kid", tab("Kid", "http://kid", json!(2)),
        ]));

        let titles: Vec<_> = extract_at(&root, NOW).into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Both", "Kid", "Kid"]);
    }

    #[test]
    fn test_self_referencing_folder_terminates() {
        let root = sidebar(json!([
            "loop", {
                "data": {"tab": {"savedTitle": "Loop", "savedURL": "http://loop"}},
                "createdAt": 1,
                "childrenIds": ["loop"]
            },
        ]));

        // Top-level entry, then its single trip through itself
        let (bookmarks, stats) = extract_with_stats(&root, NOW);
        assert_eq!(bookmarks, vec![Bookmark::new("Loop", "http://loop", 1); 2]);
        assert_eq!(stats.cycles_cut, 1);
    }

    #[test]
    fn test_duplicate_id_folder_is_not_a_cycle() {
        // The folder's child resolves to the first "dup", a plain tab
        let root = sidebar(json!([
            "dup", tab("A", "http://a", json!(1)),
            "dup", {"childrenIds": ["dup"]},
        ]));

        let (bookmarks, stats) = extract_with_stats(&root, NOW);
        assert_eq!(bookmarks, vec![Bookmark::new("A", "http://a", 1); 2]);
        assert_eq!(stats.cycles_cut, 0);
    }

    #[test]
    fn test_acyclic_nesting_never_cut() {
        let root = sidebar(json!([
            "outer", {"childrenIds": ["inner", "leaf"]},
            "inner", {"childrenIds": ["leaf"]},
            "leaf", tab("Leaf", "http://leaf", json!(1)),
        ]));

        let (_, stats) = extract_with_stats(&root, NOW);
        assert_eq!(stats.cycles_cut, 0);
    }

    #[test]
    fn test_mutual_cycle_terminates() {
        let root = sidebar(json!([
            "a", {"childrenIds": ["b", "a"]},
            "b", {"childrenIds": ["a", "b"]},
        ]));

        let (bookmarks, stats) = extract_with_stats(&root, NOW);
        assert!(bookmarks.is_empty());
        assert!(stats.cycles_cut > 0);
    }

    #[test]
    fn test_sidebar_precedes_firebase() {
        let root = json!({
            "firebaseSyncState": {"syncData": {"items": ["f", tab("F", "http://f", json!(1))]}},
            "sidebarSyncState": {"items": ["s", tab("S", "http://s", json!(2))]}
        });

        let (bookmarks, stats) = extract_with_stats(&root, NOW);
        let titles: Vec<_> = bookmarks.into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["S", "F"]);
        assert_eq!(stats.sidebar_bookmarks, 1);
        assert_eq!(stats.firebase_bookmarks, 1);
    }

    #[test]
    fn test_firebase_only() {
        let root = json!({
            "firebaseSyncState": {"syncData": {"items": ["f", {"value": tab("F", "http://f", json!(1))}]}}
        });
        assert_eq!(extract_at(&root, NOW).len(), 1);
    }

    #[test]
    fn test_numeric_ids_resolve() {
        let root = sidebar(json!([
            1, {"childrenIds": [2.0]},
            2, tab("Two", "http://two", json!(2)),
        ]));
        assert_eq!(extract_at(&root, NOW).len(), 2);
    }

    #[test]
    fn test_section_pointers() {
        assert_eq!(SyncSection::Sidebar.pointer(), "/sidebarSyncState/items");
        assert_eq!(
            SyncSection::Firebase.pointer(),
            "/firebaseSyncState/syncData/items"
        );
    }
}
