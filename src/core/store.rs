use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::domain::kpi::TransactionStoreState;
use crate::domain::period::{PeriodFilter, PeriodPreset};
use crate::domain::transaction::{
    default_entries, default_subcategories, PrimaryCategory, TransactionDraft, TransactionEntry,
};
use crate::period::apply_preset_to_filter;
use crate::storage::{StoreSnapshot, SNAPSHOT_SCHEMA_VERSION};
use crate::theme::{self, ThemeColorToken};

use super::clock::{Clock, SystemClock};
use super::recalculate::recalculate;

/// Handle returned by [`TransactionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Arc<TransactionStoreState>) + Send>;

/// Owns the entry set and the active filter, and republishes a fresh
/// [`TransactionStoreState`] after every mutation.
///
/// Every mutation samples the clock once, computes the next entries and filter, and hands
/// both to [`recalculate`]. No mutation derives KPIs on its own.
pub struct TransactionStore {
    clock: Arc<dyn Clock>,
    state: Arc<TransactionStoreState>,
    default_preset: PeriodPreset,
    initial_filter: PeriodFilter,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl TransactionStore {
    /// Store seeded with the sample entries and the `this_month` window.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let today = clock.today();
        Self::build(clock, default_entries(today), PeriodPreset::default())
    }

    /// Store over caller-supplied entries, viewed through `preset`.
    pub fn with_entries(
        clock: Arc<dyn Clock>,
        entries: Vec<TransactionEntry>,
        preset: PeriodPreset,
    ) -> Self {
        Self::build(clock, entries, preset)
    }

    /// Store configured from the user's settings.
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let entries = if config.seed_sample_entries {
            default_entries(clock.today())
        } else {
            Vec::new()
        };
        Self::build(clock, entries, config.default_preset)
    }

    fn build(clock: Arc<dyn Clock>, entries: Vec<TransactionEntry>, preset: PeriodPreset) -> Self {
        let today = clock.today();
        let initial_filter = apply_preset_to_filter(&PeriodFilter::unresolved(preset), today);
        let state = recalculate(entries, &initial_filter, today);
        info!(
            preset = %preset,
            entries = state.entries.len(),
            "transaction store initialized"
        );
        Self {
            clock,
            state: Arc::new(state),
            default_preset: preset,
            initial_filter,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Registers `callback`, invoking it right away with the current state and then once per
    /// published state, in mutation order.
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&Arc<TransactionStoreState>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        callback(&self.state);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drops a subscription. Returns `false` when the id was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn current_state(&self) -> Arc<TransactionStoreState> {
        Arc::clone(&self.state)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn default_preset(&self) -> PeriodPreset {
        self.default_preset
    }

    /// Prepends a new entry built from `draft` and returns its identifier.
    pub fn add_entry(&mut self, draft: TransactionDraft) -> Uuid {
        let entry = TransactionEntry::from_draft(draft);
        let id = entry.id;
        debug!(id = %id, date = %entry.date, amount = entry.amount, "adding entry");
        let mut entries = Vec::with_capacity(self.state.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.state.entries.iter().cloned());
        let filter = self.state.filter.clone();
        self.publish(entries, filter);
        id
    }

    /// Removes the first entry with `id`. An unknown id still republishes an unchanged state.
    pub fn remove_entry(&mut self, id: Uuid) -> bool {
        let mut entries = self.state.entries.clone();
        let removed = match entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        };
        debug!(id = %id, removed, "removing entry");
        let filter = self.state.filter.clone();
        self.publish(entries, filter);
        removed
    }

    pub fn set_preset(&mut self, preset: PeriodPreset) {
        let today = self.clock.today();
        let filter = apply_preset_to_filter(&PeriodFilter::unresolved(preset), today);
        debug!(preset = %preset, "switching preset");
        let entries = self.state.entries.clone();
        self.publish_at(entries, filter, today);
    }

    /// Switches to a custom window over raw bounds. Normalization happens on recalculation.
    ///
    /// Adjustments made to the bounds are not reported here; callers compare the raw bounds
    /// with the published filter through `describe_range_adjustments`.
    pub fn set_custom_range(&mut self, start: &str, end: &str) {
        debug!(start, end, "switching to custom range");
        let filter = PeriodFilter::custom(start, end);
        let entries = self.state.entries.clone();
        self.publish(entries, filter);
    }

    /// Restores the sample entries and the default preset.
    pub fn reset_filter(&mut self) {
        let today = self.clock.today();
        let filter = apply_preset_to_filter(&PeriodFilter::unresolved(self.default_preset), today);
        debug!("resetting entries and filter");
        self.publish_at(default_entries(today), filter, today);
    }

    /// Drops every entry and returns to the filter resolved at construction.
    pub fn clear(&mut self) {
        debug!("clearing all entries");
        let filter = self.initial_filter.clone();
        self.publish(Vec::new(), filter);
    }

    /// Replaces the entry set wholesale and views it through the initial filter.
    pub fn seed(&mut self, entries: Vec<TransactionEntry>) {
        debug!(count = entries.len(), "seeding entries");
        let filter = self.initial_filter.clone();
        self.publish(entries, filter);
    }

    pub fn subcategories(&self, category: PrimaryCategory) -> Vec<String> {
        default_subcategories(category)
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn accent_for(&self, entry: &TransactionEntry) -> ThemeColorToken {
        theme::accent_for(entry.kind())
    }

    /// Persistable view of the current entries and filter.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            filter: self.state.filter.clone(),
            entries: self.state.entries.clone(),
        }
    }

    /// Replaces entries and filter from a previously saved snapshot.
    pub fn restore(&mut self, snapshot: StoreSnapshot) {
        info!(
            entries = snapshot.entries.len(),
            preset = %snapshot.filter.preset,
            "restoring store snapshot"
        );
        self.publish(snapshot.entries, snapshot.filter);
    }

    fn publish(&mut self, entries: Vec<TransactionEntry>, filter: PeriodFilter) {
        let today = self.clock.today();
        self.publish_at(entries, filter, today);
    }

    fn publish_at(
        &mut self,
        entries: Vec<TransactionEntry>,
        filter: PeriodFilter,
        today: NaiveDate,
    ) {
        self.state = Arc::new(recalculate(entries, &filter, today));
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionStore")
            .field("state", &self.state)
            .field("default_preset", &self.default_preset)
            .field("initial_filter", &self.initial_filter)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Cloneable handle serializing every mutation behind one lock.
///
/// Subscribers run while the lock is held. A subscriber that calls back into the same
/// handle deadlocks, because `Mutex` is not reentrant; read the state passed to the
/// callback instead.
#[derive(Clone)]
pub struct SharedTransactionStore {
    inner: Arc<Mutex<TransactionStore>>,
}

impl SharedTransactionStore {
    pub fn new(store: TransactionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with exclusive access for the whole read-compute-publish cycle.
    pub fn with<R>(&self, f: impl FnOnce(&mut TransactionStore) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn current_state(&self) -> Arc<TransactionStoreState> {
        self.lock().current_state()
    }

    pub fn add_entry(&self, draft: TransactionDraft) -> Uuid {
        self.with(|store| store.add_entry(draft))
    }

    pub fn remove_entry(&self, id: Uuid) -> bool {
        self.with(|store| store.remove_entry(id))
    }

    pub fn set_preset(&self, preset: PeriodPreset) {
        self.with(|store| store.set_preset(preset))
    }

    pub fn set_custom_range(&self, start: &str, end: &str) {
        self.with(|store| store.set_custom_range(start, end))
    }

    pub fn reset_filter(&self) {
        self.with(|store| store.reset_filter())
    }

    pub fn clear(&self) {
        self.with(|store| store.clear())
    }

    pub fn seed(&self, entries: Vec<TransactionEntry>) {
        self.with(|store| store.seed(entries))
    }

    /// See [`TransactionStore::subscribe`]. `callback` must not touch this handle.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Arc<TransactionStoreState>) + Send + 'static,
    {
        self.with(|store| store.subscribe(callback))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.with(|store| store.unsubscribe(id))
    }

    fn lock(&self) -> MutexGuard<'_, TransactionStore> {
        // State is swapped in one assignment, so a panicking subscriber cannot leave it torn.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
