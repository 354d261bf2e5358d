//! Observable display state for one screen.
//!
//! State changes go through [`ViewModel::commit`]: the mutation runs on a copy,
//! the copy replaces the stored state in one step, then every subscriber is
//! called synchronously with the new snapshot. Observers never see a
//! half-applied update and each commit fires exactly one notification.

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// State held by a [`ViewModel`]. `VIEW_NAME` identifies the screen to the view manager.
pub trait ScreenState: Clone + Default + Send + Sync + 'static {
    const VIEW_NAME: &'static str;
}

type Observer<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`ViewModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ViewModel<S: ScreenState> {
    state: RwLock<S>,
    observers: Mutex<Vec<(SubscriptionId, Observer<S>)>>,
    next_id: AtomicU64,
    /// Held from update through notification so commits are delivered in order.
    committing: Mutex<()>,
}

impl<S: ScreenState> ViewModel<S> {
    pub fn new() -> Self {
        Self::with_state(S::default())
    }

    pub fn with_state(state: S) -> Self {
        Self {
            state: RwLock::new(state),
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            committing: Mutex::new(()),
        }
    }

    pub fn view_name(&self) -> &'static str {
        S::VIEW_NAME
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.state.read().clone()
    }

    /// Register `observer`; it runs on every subsequent commit.
    pub fn subscribe(&self, observer: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.lock().push((id, Arc::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(sid, _)| *sid != id);
        observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.lock().len()
    }

    /// Apply `update` as one whole-state overwrite, then notify subscribers.
    ///
    /// Concurrent commits are serialized: the last snapshot an observer
    /// receives is always the stored state. Only the commit lock is held while
    /// observers run, so an observer may read [`state`](Self::state) or
    /// (un)subscribe, but must not commit to the same view model. `update`
    /// must not call back into this view model either.
    pub fn commit(&self, update: impl FnOnce(&mut S)) {
        let _committing = self.committing.lock();
        let snapshot = {
            let mut current = self.state.write();
            let mut next = current.clone();
            update(&mut next);
            *current = next.clone();
            next
        };
        let observers: Vec<Observer<S>> = self
            .observers
            .lock()
            .iter()
            .map(|(_, o)| Arc::clone(o))
            .collect();
        debug!(
            view = S::VIEW_NAME,
            subscribers = observers.len(),
            "view state committed"
        );
        for observer in &observers {
            observer(&snapshot);
        }
    }

    /// Replace the whole state and notify.
    pub fn set_state(&self, state: S) {
        self.commit(|s| *s = state);
    }
}

impl<S: ScreenState> Default for ViewModel<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScreenState + fmt::Debug> fmt::Debug for ViewModel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModel")
            .field("view_name", &S::VIEW_NAME)
            .field("state", &*self.state.read())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Pair {
        left: u32,
        right: u32,
    }

    impl ScreenState for Pair {
        const VIEW_NAME: &'static str = "pair";
    }

    #[test]
    fn commit_notifies_each_subscriber_once() {
        let vm = ViewModel::<Pair>::new();
        let hits = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            vm.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        vm.commit(|s| s.left = 1);

        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert_eq!(vm.state(), Pair { left: 1, right: 0 });
    }

    #[test]
    fn observers_see_the_whole_update() {
        let vm = Arc::new(ViewModel::<Pair>::new());
        let reader = Arc::clone(&vm);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        vm.subscribe(move |snapshot| {
            // Both the pushed snapshot and a fresh read must carry both fields.
            sink.lock().push((snapshot.clone(), reader.state()));
        });

        vm.commit(|s| {
            s.left = 7;
            s.right = 9;
        });

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, Pair { left: 7, right: 9 });
        assert_eq!(seen[0].1, Pair { left: 7, right: 9 });
    }

    #[test]
    fn rapid_commits_are_not_coalesced() {
        let vm = ViewModel::<Pair>::new();
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&values);
        vm.subscribe(move |s| sink.lock().push(s.left));

        for i in 1..=4 {
            vm.commit(|s| s.left = i);
        }

        assert_eq!(*values.lock(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn concurrent_commits_are_delivered_in_order() {
        let vm = Arc::new(ViewModel::<Pair>::new());
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&values);
        vm.subscribe(move |s| sink.lock().push(s.left));

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let vm = Arc::clone(&vm);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        vm.commit(|s| s.left += 1);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let values = values.lock();
        assert_eq!(*values, (1..=200).collect::<Vec<u32>>());
        assert_eq!(values.last().copied(), Some(vm.state().left));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let vm = ViewModel::<Pair>::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let id = vm.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        vm.set_state(Pair { left: 1, right: 1 });
        assert!(vm.unsubscribe(id));
        assert!(!vm.unsubscribe(id));
        vm.set_state(Pair { left: 2, right: 2 });

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(vm.subscriber_count(), 0);
        assert_eq!(vm.state(), Pair { left: 2, right: 2 });
    }

    #[test]
    fn view_name_comes_from_state_type() {
        assert_eq!(ViewModel::<Pair>::default().view_name(), "pair");
    }
}
