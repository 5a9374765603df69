//! Product list and transaction status state.
//!
//! The store holds the rendered product ids plus the error/success/
//! loading status strings every transaction flow reports into. At most
//! one status is non-empty at a time; overlapping flows overwrite each
//! other last-writer-wins, nothing queues or reconciles them.

use leptos::prelude::*;

use crate::services::gateway::StatusSink;

/// Derive the store's entries from the on-chain product count.
///
/// A zero count means "nothing to render" (`None`), not an empty list.
/// Ids are returned newest-created first, i.e. descending contract
/// index order.
pub fn product_entries(count: u64) -> Option<Vec<u64>> {
    if count == 0 {
        return None;
    }
    Some((0..count).rev().collect())
}

/// Global products context.
///
/// The list is rebuilt wholesale from the current on-chain count, never
/// patched incrementally: every rebuild re-renders every card, which in
/// turn re-fetches each product record.
#[derive(Clone, Copy)]
pub struct ProductsContext {
    products: RwSignal<Option<Vec<u64>>>,
    error: RwSignal<String>,
    success: RwSignal<String>,
    loading: RwSignal<String>,
}

impl ProductsContext {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(None),
            error: RwSignal::new(String::new()),
            success: RwSignal::new(String::new()),
            loading: RwSignal::new(String::new()),
        }
    }

    /// Reactive accessor for the rendered product ids.
    pub fn entries(&self) -> Option<Vec<u64>> {
        self.products.get()
    }

    /// Replace the whole list from the given product count.
    pub fn rebuild(&self, count: u64) {
        self.products.set(product_entries(count));
    }

    pub fn error(&self) -> String {
        self.error.get()
    }

    pub fn success(&self) -> String {
        self.success.get()
    }

    pub fn loading(&self) -> String {
        self.loading.get()
    }

    /// Reset all status messages.
    pub fn clear(&self) {
        self.error.set(String::new());
        self.success.set(String::new());
        self.loading.set(String::new());
    }
}

// At most one status string is non-empty at a time: every setter
// wipes the others, so a stale error never renders next to a fresh
// loading banner.
impl StatusSink for ProductsContext {
    fn set_loading(&self, message: &str) {
        self.loading.set(message.to_string());
        self.error.set(String::new());
        self.success.set(String::new());
    }

    fn set_error(&self, message: &str) {
        self.error.set(message.to_string());
        self.success.set(String::new());
        self.loading.set(String::new());
    }

    fn set_success(&self, message: &str) {
        self.success.set(message.to_string());
        self.error.set(String::new());
        self.loading.set(String::new());
    }

    fn clear_loading(&self) {
        self.loading.set(String::new());
    }
}

pub fn provide_products_context() -> ProductsContext {
    let context = ProductsContext::new();
    provide_context(context);
    context
}

pub fn use_products_context() -> ProductsContext {
    expect_context::<ProductsContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_has_no_entries() {
        assert_eq!(product_entries(0), None);
    }

    #[test]
    fn entries_are_newest_first() {
        assert_eq!(product_entries(1), Some(vec![0]));
        assert_eq!(product_entries(4), Some(vec![3, 2, 1, 0]));
    }

    #[test]
    fn entry_count_matches_chain_count() {
        let entries = product_entries(25).unwrap();
        assert_eq!(entries.len(), 25);
        assert_eq!(entries.first(), Some(&24));
        assert_eq!(entries.last(), Some(&0));
    }

    #[test]
    fn loading_replaces_prior_error() {
        let store = ProductsContext::new();
        store.set_error("Product name must be at least 2 characters");
        store.set_loading("Creating...");
        assert_eq!(store.error(), "");
        assert_eq!(store.success(), "");
        assert_eq!(store.loading(), "Creating...");
    }

    #[test]
    fn at_most_one_status_is_set() {
        let store = ProductsContext::new();
        store.set_loading("Approving...");
        store.set_success("Product purchased successfully");
        assert_eq!(store.loading(), "");
        assert_eq!(store.error(), "");

        store.set_error("user rejected transaction");
        assert_eq!(store.success(), "");
        assert_eq!(store.error(), "user rejected transaction");
    }
}
