//! Live snapshot delivery for store collections.
//!
//! Every store owns a [`Feed`] for its collection. Subscribers register a
//! listener and immediately receive the current contents; after each
//! successful mutation the store publishes the complete, ordered collection
//! again. Deliveries are full replacements of the subscriber's working set,
//! never deltas, so a listener only ever needs to swap in what it is given.
//!
//! ```rust
//! use shiftdesk::libs::feed::Feed;
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//!
//! let feed: Feed<u32> = Feed::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! let sub = feed.subscribe(&[1, 2], move |items: &[u32]| *sink.lock() = items.to_vec());
//! feed.publish(&[1, 2, 3]);
//! sub.cancel();
//! feed.publish(&[]);
//! assert_eq!(*seen.lock(), vec![1, 2, 3]);
//! ```

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

type Listener<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

struct Registry<T> {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener<T>)>>,
}

/// Subscriber hub for one collection.
pub struct Feed<T> {
    registry: Arc<Registry<T>>,
}

impl<T: 'static> Feed<T> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry {
                next_id: AtomicU64::new(1),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Registers `listener`, hands it `current` straight away and returns the
    /// capability that stops further deliveries.
    pub fn subscribe<F>(&self, current: &[T], listener: F) -> Subscription
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        let listener: Listener<T> = Arc::new(listener);
        listener(current);
        self.registry.listeners.lock().push((id, listener));

        let weak: Weak<Registry<T>> = Arc::downgrade(&self.registry);
        Subscription {
            id,
            cancel: Box::new(move |id| {
                if let Some(registry) = weak.upgrade() {
                    registry.listeners.lock().retain(|(lid, _)| *lid != id);
                }
            }),
        }
    }

    /// Delivers `snapshot` to every active subscriber.
    pub fn publish(&self, snapshot: &[T]) {
        // Listeners run outside the lock so they may cancel or subscribe.
        let listeners: Vec<Listener<T>> = self.registry.listeners.lock().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(snapshot);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.listeners.lock().len()
    }
}

impl<T: 'static> Default for Feed<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`Feed::subscribe`].
///
/// Delivery continues until [`Subscription::cancel`] is called; dropping the
/// handle without cancelling keeps the listener registered.
#[must_use = "call cancel() to stop delivery"]
pub struct Subscription {
    id: u64,
    cancel: Box<dyn FnOnce(u64) + Send>,
}

impl Subscription {
    pub fn cancel(self) {
        (self.cancel)(self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
