//! Publish values to subscribers without the publisher knowing who listens.
//!
//! A [`Signal`] is a cheap handle to a shared list of subscribers.
//! Every subscription is registered under a [`SignalId`], pushing a value only reaches the subscribers registered under the same ID.
//!
//! # Example
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//!
//! use arcade_samples::signal::{Signal, SignalId};
//!
//! const SCORE: SignalId = SignalId::from_u128(1);
//!
//! let signal = Signal::new();
//! let total = Rc::new(Cell::new(0));
//!
//! let subscription = {
//!     let total = Rc::clone(&total);
//!     signal.subscribe(SCORE, move |points: &u32| total.set(total.get() + points))
//! };
//!
//! signal.push(&10, SCORE);
//! signal.push(&5, SCORE);
//! assert_eq!(total.get(), 15);
//!
//! // Dropping the subscription stops the callback from being called
//! drop(subscription);
//! signal.push(&100, SCORE);
//! assert_eq!(total.get(), 15);
//! ```

use std::{
    cell::RefCell,
    fmt::{Debug, Formatter},
    rc::{Rc, Weak},
};

use smallvec::SmallVec;
use uuid::Uuid;

/// Unique identifier of a kind of event sent over a [`Signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalId(Uuid);

impl SignalId {
    /// Create a well-known ID from a constant.
    #[inline]
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Create a new random ID that can't collide with any other.
    #[inline]
    #[must_use]
    pub fn new_unique() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Callback invoked for every pushed value.
///
/// Shared so a push can call it without keeping the subscriber list borrowed.
type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// A single registered callback.
struct Subscriber<T> {
    /// Key used to find the subscriber back when it unsubscribes.
    key: u64,
    /// Kind of events this subscriber receives.
    id: SignalId,
    /// Called with the pushed value.
    callback: Callback<T>,
}

/// Shared state of a signal.
struct Subscribers<T> {
    /// Key for the next subscriber.
    next_key: u64,
    /// Registered subscribers in subscription order.
    list: Vec<Subscriber<T>>,
}

impl<T> Subscribers<T> {
    /// Whether the subscriber with the key is still registered.
    fn contains(&self, key: u64) -> bool {
        self.list.iter().any(|subscriber| subscriber.key == key)
    }

    /// Remove a subscriber by key.
    fn remove(&mut self, key: u64) {
        self.list.retain(|subscriber| subscriber.key != key);
    }
}

/// Handle to a shared list of subscribers.
///
/// Cloning the signal clones the handle, all clones push to the same subscribers.
pub struct Signal<T> {
    /// Shared subscribers.
    inner: Rc<RefCell<Subscribers<T>>>,
}

impl<T: 'static> Signal<T> {
    /// Create a signal without subscribers.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        let inner = Rc::new(RefCell::new(Subscribers {
            next_key: 0,
            list: Vec::new(),
        }));

        Self { inner }
    }

    /// Register a callback for all values pushed with an ID.
    ///
    /// # Arguments
    ///
    /// * `id` - Only values pushed with this ID reach the callback.
    /// * `callback` - Called with a reference to every value pushed.
    ///
    /// # Returns
    ///
    /// - The subscription, the callback is removed when it's dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, id: SignalId, callback: impl FnMut(&T) + 'static) -> Subscription {
        let key = {
            let mut inner = self.inner.borrow_mut();

            let key = inner.next_key;
            inner.next_key += 1;

            inner.list.push(Subscriber {
                key,
                id,
                callback: Rc::new(RefCell::new(callback)),
            });

            key
        };

        let weak: Weak<RefCell<Subscribers<T>>> = Rc::downgrade(&self.inner);

        Subscription {
            unsubscribe: Some(Box::new(move || {
                // The signal might be gone already
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().remove(key);
                }
            })),
        }
    }

    /// Send a value to every subscriber registered with the ID, in subscription order.
    ///
    /// Pushing with an ID nobody subscribed to does nothing.
    /// Callbacks may subscribe, unsubscribe and push values themselves:
    /// subscribers registered during the push only receive later pushes, subscribers removed during the push are not called anymore.
    ///
    /// # Arguments
    ///
    /// * `value` - Value passed to the callbacks.
    /// * `id` - Which subscribers receive the value.
    pub fn push(&self, value: &T, id: SignalId) {
        // Snapshot the receivers so the list isn't borrowed while calling them
        let receivers = self
            .inner
            .borrow()
            .list
            .iter()
            .filter(|subscriber| subscriber.id == id)
            .map(|subscriber| (subscriber.key, Rc::clone(&subscriber.callback)))
            .collect::<SmallVec<[_; 4]>>();

        for (key, callback) in receivers {
            // Unsubscribed by one of the callbacks called before
            if !self.inner.borrow().contains(key) {
                continue;
            }

            let Ok(mut callback) = callback.try_borrow_mut() else {
                log::warn!("Skipping a signal callback that's already running, it pushed to its own signal");

                continue;
            };

            (&mut *callback)(value);
        }
    }

    /// Amount of live subscriptions, for all IDs.
    #[inline]
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().list.len()
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Debug for Signal<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.inner.borrow().list.len())
            .finish()
    }
}

/// Registration of a callback on a [`Signal`].
///
/// The callback is removed when this is dropped.
pub struct Subscription {
    /// Removes the subscriber, taken on unsubscribe.
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the callback from the signal.
    #[inline]
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    /// Run the unsubscribe function once.
    fn detach(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("subscribed", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::{Signal, SignalId};

    const POSITION: SignalId = SignalId::from_u128(0x01);
    const HEALTH: SignalId = SignalId::from_u128(0x02);

    /// Create a signal with a recording subscriber.
    fn recorder(signal: &Signal<i32>, id: SignalId) -> (Rc<RefCell<Vec<i32>>>, super::Subscription) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let received = Rc::clone(&received);
            signal.subscribe(id, move |value| received.borrow_mut().push(*value))
        };

        (received, subscription)
    }

    #[test]
    fn only_matching_ids_receive() {
        let signal = Signal::new();
        let (positions, _position_subscription) = recorder(&signal, POSITION);
        let (health, _health_subscription) = recorder(&signal, HEALTH);

        signal.push(&1, POSITION);
        signal.push(&2, HEALTH);
        signal.push(&3, SignalId::new_unique());

        assert_eq!(*positions.borrow(), vec![1]);
        assert_eq!(*health.borrow(), vec![2]);
    }

    #[test]
    fn subscribers_are_called_in_order() {
        let signal = Signal::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let _subscriptions = (0..3)
            .map(|index| {
                let order = Rc::clone(&order);
                signal.subscribe(POSITION, move |_: &i32| order.borrow_mut().push(index))
            })
            .collect::<Vec<_>>();

        signal.push(&0, POSITION);

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let signal = Signal::new();
        let (received, subscription) = recorder(&signal, POSITION);

        signal.push(&1, POSITION);
        subscription.unsubscribe();
        signal.push(&2, POSITION);

        assert_eq!(*received.borrow(), vec![1]);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_subscribers() {
        let signal = Signal::new();
        let (received, _subscription) = recorder(&signal, POSITION);

        signal.clone().push(&7, POSITION);

        assert_eq!(*received.borrow(), vec![7]);
    }

    #[test]
    fn subscribing_from_a_callback() {
        let signal = Signal::<i32>::new();
        let late = Rc::new(RefCell::new(Vec::new()));
        let subscriptions = Rc::new(RefCell::new(Vec::new()));

        let _first = {
            let signal = signal.clone();
            let late = Rc::clone(&late);
            let subscriptions = Rc::clone(&subscriptions);
            signal.clone().subscribe(POSITION, move |_| {
                let late = Rc::clone(&late);
                subscriptions
                    .borrow_mut()
                    .push(signal.subscribe(HEALTH, move |value| late.borrow_mut().push(*value)));
            })
        };

        signal.push(&1, POSITION);
        signal.push(&2, HEALTH);

        assert_eq!(*late.borrow(), vec![2]);
        assert_eq!(signal.subscriber_count(), 2);
    }

    #[test]
    fn unsubscribe_after_nested_push() {
        let signal = Signal::<i32>::new();
        let (received, subscription) = recorder(&signal, POSITION);
        let subscription = Rc::new(RefCell::new(Some(subscription)));

        // Pushes on another ID, then removes the recorder
        let _remover = {
            let signal = signal.clone();
            let subscription = Rc::clone(&subscription);
            signal.clone().subscribe(POSITION, move |_| {
                signal.push(&0, HEALTH);
                subscription.borrow_mut().take();
            })
        };

        signal.push(&1, POSITION);
        signal.push(&2, POSITION);

        assert_eq!(*received.borrow(), vec![1]);
        assert_eq!(signal.subscriber_count(), 1);
    }

    #[test]
    fn unsubscribed_during_push_is_skipped() {
        let signal = Signal::<i32>::new();
        let later = Rc::new(RefCell::new(None));

        let _first = {
            let later = Rc::clone(&later);
            signal.subscribe(POSITION, move |_| {
                later.borrow_mut().take();
            })
        };
        let (received, subscription) = recorder(&signal, POSITION);
        *later.borrow_mut() = Some(subscription);

        signal.push(&1, POSITION);

        assert!(received.borrow().is_empty());
        assert_eq!(signal.subscriber_count(), 1);
    }

    #[test]
    fn pushing_to_itself_is_not_reentrant() {
        let signal = Signal::<i32>::new();
        let calls = Rc::new(RefCell::new(0));

        let _echo = {
            let signal = signal.clone();
            let calls = Rc::clone(&calls);
            signal.clone().subscribe(POSITION, move |value| {
                *calls.borrow_mut() += 1;
                signal.push(&(value + 1), POSITION);
            })
        };

        signal.push(&0, POSITION);

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn subscription_outliving_signal() {
        let signal = Signal::new();
        let (_received, subscription) = recorder(&signal, POSITION);

        drop(signal);
        subscription.unsubscribe();
    }
}
