/// Tab list state for the popup, mirrored into a key/value store
use log::{debug, info, warn};

use crate::categorizer::classify;
use crate::operations::{GroupedView, group_by_category};
use crate::storage::{KeyValueStore, StorageError};
use crate::tab_data::TabEntry;

/// Storage key holding the JSON array of tab entries
pub const TABS_KEY: &str = "tabs";

/// Milliseconds since the Unix epoch
pub type Clock = fn() -> u64;

fn browser_clock() -> u64 {
    js_sys::Date::now() as u64
}

/// Ordered list of tab entries plus the add-field input buffer.
///
/// Every mutating method ends with `persist`, so the store always holds the
/// full list after a successful call, or no `"tabs"` key when the list is empty.
#[derive(Debug, Clone)]
pub struct TabStore<S: KeyValueStore> {
    store: S,
    tabs: Vec<TabEntry>,
    input: String,
    clock: Clock,
    last_id: u64,
}

impl<S: KeyValueStore> TabStore<S> {
    /// Empty store that has not read anything from `store`
    pub fn new(store: S) -> Self {
        TabStore {
            store,
            tabs: Vec::new(),
            input: String::new(),
            clock: browser_clock,
            last_id: 0,
        }
    }

    /// Read the persisted list once, using the browser clock for new ids
    pub fn load(store: S) -> Result<Self, StorageError> {
        Self::load_with_clock(store, browser_clock)
    }

    /// Read the persisted list once.
    ///
    /// A missing key starts empty. A value that is not a JSON array of tab
    /// entries is logged and also starts empty; only a failing medium is an error.
    pub fn load_with_clock(store: S, clock: Clock) -> Result<Self, StorageError> {
        let tabs = match store.get(TABS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<TabEntry>>(&raw) {
                Ok(tabs) => tabs,
                Err(e) => {
                    warn!("Ignoring malformed {:?} record: {}", TABS_KEY, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        info!("Loaded {} tabs", tabs.len());

        let last_id = tabs.iter().map(|t| t.id).max().unwrap_or(0);
        Ok(TabStore {
            store,
            tabs,
            input: String::new(),
            clock,
            last_id,
        })
    }

    pub fn tabs(&self) -> &[TabEntry] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn grouped(&self) -> GroupedView {
        group_by_category(&self.tabs)
    }

    /// Classify `url_text` and append it as a new entry.
    ///
    /// Blank text (after trimming) is ignored and returns `Ok(None)` without
    /// touching the input buffer or the store.
    pub fn add_tab(&mut self, url_text: &str) -> Result<Option<TabEntry>, StorageError> {
        let url = url_text.trim();
        if url.is_empty() {
            return Ok(None);
        }

        let entry = TabEntry::new(self.next_id(), classify(url));
        debug!("Adding tab {} as {}/{}", entry.id, entry.category, entry.keyword);

        self.tabs.push(entry.clone());
        self.input.clear();
        self.persist()?;
        Ok(Some(entry))
    }

    /// Add whatever is in the input buffer
    pub fn submit_input(&mut self) -> Result<Option<TabEntry>, StorageError> {
        let text = self.input.clone();
        self.add_tab(&text)
    }

    /// Remove the entry with `id`. Unknown ids are not an error.
    pub fn remove_tab(&mut self, id: u64) -> Result<bool, StorageError> {
        let original_len = self.tabs.len();
        self.tabs.retain(|t| t.id != id);
        let removed = self.tabs.len() < original_len;
        if removed {
            debug!("Removed tab {}", id);
        }

        self.persist()?;
        Ok(removed)
    }

    pub fn clear_all_tabs(&mut self) -> Result<(), StorageError> {
        debug!("Clearing {} tabs", self.tabs.len());
        self.tabs.clear();
        self.store.remove(TABS_KEY)
    }

    /// Overwrite the stored list with the current one, or delete the key
    /// when the list is empty
    pub fn persist(&self) -> Result<(), StorageError> {
        if self.tabs.is_empty() {
            return self.store.remove(TABS_KEY);
        }

        let json = serde_json::to_string(&self.tabs)?;
        self.store.set(TABS_KEY, &json)
    }

    // Creation timestamp, bumped past the last issued id so ids stay unique
    fn next_id(&mut self) -> u64 {
        let id = (self.clock)().max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorizer::Category;
    use crate::storage::MemoryStore;

    const NOW: u64 = 1_698_508_200_000;

    fn fixed_clock() -> u64 {
        NOW
    }

    fn empty_store() -> (TabStore<MemoryStore>, MemoryStore) {
        let backing = MemoryStore::new();
        let store = TabStore::load_with_clock(backing.clone(), fixed_clock).unwrap();
        (store, backing)
    }

    fn stored_tabs(backing: &MemoryStore) -> Option<Vec<TabEntry>> {
        backing
            .get(TABS_KEY)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[test]
    fn test_load_missing_key_starts_empty() {
        let (store, _) = empty_store();
        assert!(store.is_empty());
        assert_eq!(store.input(), "");
    }

    #[test]
    fn test_load_existing_tabs() {
        let json = r#"[{"id":5,"keyword":"github","category":"Work"},{"id":7,"keyword":"General","category":"Others"}]"#;
        let backing = MemoryStore::with_entry(TABS_KEY, json);

        let store = TabStore::load_with_clock(backing, fixed_clock).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.tabs()[0].id, 5);
        assert_eq!(store.tabs()[0].category, Category::Work);
        assert_eq!(store.tabs()[1].keyword, "General");
    }

    #[test]
    fn test_load_malformed_starts_empty() {
        for raw in ["not json", "{\"id\":1}", "", "[{\"id\":\"x\"}]"] {
            let backing = MemoryStore::with_entry(TABS_KEY, raw);
            let store = TabStore::load_with_clock(backing.clone(), fixed_clock).unwrap();

            assert!(store.is_empty(), "expected empty list for {:?}", raw);
            // The record is left alone until the next persist
            assert_eq!(backing.get(TABS_KEY).unwrap(), Some(raw.to_string()));
        }
    }

    #[test]
    fn test_add_tab() {
        let (mut store, backing) = empty_store();
        store.set_input("https://facebook.com/x");

        let entry = store.add_tab("https://facebook.com/x").unwrap().unwrap();

        assert_eq!(entry.id, NOW);
        assert_eq!(entry.keyword, "facebook");
        assert_eq!(entry.category, Category::SocialMedia);
        assert_eq!(store.len(), 1);
        assert_eq!(store.input(), "");
        assert_eq!(stored_tabs(&backing), Some(vec![entry]));
    }

    #[test]
    fn test_add_tab_trims_input() {
        let (mut store, _) = empty_store();

        let entry = store.add_tab("  https://nytimes.com  ").unwrap().unwrap();

        assert_eq!(entry.keyword, "nytimes");
        assert_eq!(entry.category, Category::News);
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let (mut store, backing) = empty_store();
        store.set_input("   ");

        assert_eq!(store.add_tab("").unwrap(), None);
        assert_eq!(store.add_tab("   ").unwrap(), None);
        assert_eq!(store.submit_input().unwrap(), None);

        assert!(store.is_empty());
        assert_eq!(store.input(), "   ");
        assert!(!backing.contains_key(TABS_KEY));
    }

    #[test]
    fn test_add_appends_in_insertion_order_with_unique_ids() {
        let (mut store, backing) = empty_store();

        store.add_tab("https://example.org").unwrap();
        store.add_tab("https://github.com").unwrap();
        store.add_tab("https://bbc.com").unwrap();

        let ids: Vec<u64> = store.tabs().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![NOW, NOW + 1, NOW + 2]);

        let keywords: Vec<&str> = store.tabs().iter().map(|t| t.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["General", "github", "bbc"]);
        assert_eq!(stored_tabs(&backing).unwrap(), store.tabs().to_vec());
    }

    #[test]
    fn test_new_ids_follow_loaded_ids() {
        let json = format!(r#"[{{"id":{},"keyword":"jira","category":"Work"}}]"#, NOW + 10);
        let backing = MemoryStore::with_entry(TABS_KEY, &json);
        let mut store = TabStore::load_with_clock(backing, fixed_clock).unwrap();

        let entry = store.add_tab("https://slack.com").unwrap().unwrap();

        assert_eq!(entry.id, NOW + 11);
    }

    #[test]
    fn test_submit_input() {
        let (mut store, _) = empty_store();
        store.set_input("https://notion.so/page");

        let entry = store.submit_input().unwrap().unwrap();

        assert_eq!(entry.keyword, "notion");
        assert_eq!(store.input(), "");
    }

    #[test]
    fn test_remove_tab() {
        let (mut store, backing) = empty_store();
        let first = store.add_tab("https://github.com").unwrap().unwrap();
        let second = store.add_tab("https://cnn.com").unwrap().unwrap();

        assert!(store.remove_tab(first.id).unwrap());

        assert_eq!(store.tabs(), &[second.clone()]);
        assert_eq!(stored_tabs(&backing), Some(vec![second]));
    }

    #[test]
    fn test_remove_only_tab_deletes_record() {
        let (mut store, backing) = empty_store();
        let entry = store.add_tab("https://github.com").unwrap().unwrap();

        store.remove_tab(entry.id).unwrap();

        assert!(store.is_empty());
        assert!(!backing.contains_key(TABS_KEY));
    }

    #[test]
    fn test_remove_unknown_id() {
        let (mut store, backing) = empty_store();
        store.add_tab("https://github.com").unwrap();

        assert!(!store.remove_tab(12345).unwrap());

        assert_eq!(store.len(), 1);
        assert_eq!(stored_tabs(&backing).unwrap().len(), 1);
    }

    #[test]
    fn test_clear_all_tabs() {
        let (mut store, backing) = empty_store();
        store.add_tab("https://github.com").unwrap();
        store.add_tab("https://twitter.com").unwrap();

        store.clear_all_tabs().unwrap();

        assert!(store.is_empty());
        assert!(!backing.contains_key(TABS_KEY));
    }

    #[test]
    fn test_clear_all_on_empty_and_malformed() {
        let backing = MemoryStore::with_entry(TABS_KEY, "garbage");
        let mut store = TabStore::load_with_clock(backing.clone(), fixed_clock).unwrap();

        store.clear_all_tabs().unwrap();

        assert!(store.is_empty());
        assert!(!backing.contains_key(TABS_KEY));
    }

    #[test]
    fn test_persisted_list_round_trips_through_load() {
        let (mut store, backing) = empty_store();
        store.add_tab("https://linkedin.com").unwrap();
        store.add_tab("https://example.org").unwrap();
        store.add_tab("https://theguardian.com").unwrap();

        let reloaded = TabStore::load_with_clock(backing, fixed_clock).unwrap();

        assert_eq!(reloaded.tabs(), store.tabs());
    }

    #[test]
    fn test_grouped_view() {
        let (mut store, _) = empty_store();
        store.add_tab("https://jira.company.com").unwrap();
        store.add_tab("https://example.org").unwrap();
        store.add_tab("https://github.com").unwrap();

        let view = store.grouped();

        let work: Vec<&str> = view
            .get(Category::Work)
            .iter()
            .map(|t| t.keyword.as_str())
            .collect();
        assert_eq!(work, vec!["jira", "github"]);
        assert_eq!(view.get(Category::Others).len(), 1);
        assert!(view.get(Category::News).is_empty());
    }
}
