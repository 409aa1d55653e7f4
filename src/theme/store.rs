use std::{
    any::Any,
    cell::{Cell, RefCell},
    collections::VecDeque,
    fmt,
    panic::{self, AssertUnwindSafe},
    rc::{Rc, Weak},
    sync::Arc,
};

use smallvec::SmallVec;
use tesserae_theme::{
    ColorTokens, ConfigurationError, DesignTokens, DesignTokensPatch, SharedString,
    TypographyTokens,
};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Called after every replacement. Subscribers receive no payload and read
/// the new tokens from the store themselves.
pub type SubscriberFn = Rc<dyn Fn() -> anyhow::Result<()>>;

type FaultHandlerFn = Rc<dyn Fn(&SubscriberFault)>;

/// Identifies a subscriber. A store holds at most one registration per id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberId(SharedString);

impl SubscriberId {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self(id.into())
    }

    pub fn with_suffix(&self, suffix: impl AsRef<str>) -> Self {
        Self(format!("{}:{}", self.0, suffix.as_ref()).into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubscriberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SubscriberId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<SharedString> for SubscriberId {
    fn from(value: SharedString) -> Self {
        Self(value)
    }
}

/// A subscriber that failed while being notified of a replacement.
#[derive(Error, Debug)]
pub enum SubscriberFault {
    #[error("theme subscriber \"{id}\" failed: {error:#}")]
    Failed { id: SubscriberId, error: anyhow::Error },
    #[error("theme subscriber \"{id}\" panicked: {message}")]
    Panicked { id: SubscriberId, message: String },
}

impl SubscriberFault {
    pub fn id(&self) -> &SubscriberId {
        match self {
            SubscriberFault::Failed { id, .. } | SubscriberFault::Panicked { id, .. } => id,
        }
    }
}

/// What happened during a [`ThemeStore::replace`].
///
/// The swap itself always succeeds. Faults only describe subscribers that
/// failed while being told about it.
#[must_use = "subscriber faults should be checked or explicitly ignored"]
#[derive(Debug, Default)]
pub struct ReplaceReport {
    /// How many subscriber callbacks ran.
    pub notified: usize,
    pub faults: Vec<SubscriberFault>,
    /// The replacement was requested from inside a notification and will be
    /// applied once that notification round finishes.
    pub queued: bool,
}

impl ReplaceReport {
    fn queued() -> Self {
        Self {
            queued: true,
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }

    pub fn into_result(self) -> Result<usize, Vec<SubscriberFault>> {
        if self.faults.is_empty() {
            Ok(self.notified)
        } else {
            Err(self.faults)
        }
    }
}

struct SubscriberEntry {
    id: SubscriberId,
    serial: u64,
    callback: SubscriberFn,
}

struct StoreState {
    current: RefCell<Arc<DesignTokens>>,
    subscribers: RefCell<Vec<SubscriberEntry>>,
    queued: RefCell<VecDeque<Arc<DesignTokens>>>,
    notifying: Cell<bool>,
    next_serial: Cell<u64>,
    fault_handler: RefCell<Option<FaultHandlerFn>>,
}

impl StoreState {
    fn current(&self) -> Arc<DesignTokens> {
        self.current.borrow().clone()
    }

    fn subscribe(self: &Rc<Self>, id: SubscriberId, callback: SubscriberFn) -> Subscription {
        let mut subscribers = self.subscribers.borrow_mut();

        let serial = match subscribers.iter().find(|entry| entry.id == id) {
            Some(existing) => {
                trace!(%id, "theme subscriber already registered");
                existing.serial
            }
            None => {
                let serial = self.next_serial.get();
                self.next_serial.set(serial + 1);

                debug!(%id, "theme subscriber registered");
                subscribers.push(SubscriberEntry {
                    id: id.clone(),
                    serial,
                    callback,
                });
                serial
            }
        };

        Subscription {
            state: Rc::downgrade(self),
            id,
            serial,
        }
    }

    fn unsubscribe(&self, id: &SubscriberId, serial: u64) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let len = subscribers.len();
        subscribers.retain(|entry| !(entry.id == *id && entry.serial == serial));

        let removed = subscribers.len() != len;
        if removed {
            debug!(%id, "theme subscriber removed");
        }
        removed
    }

    fn replace(&self, next: Arc<DesignTokens>) -> ReplaceReport {
        if self.notifying.get() {
            debug!(theme = %next.name(), "theme replaced during notification, queued");
            self.queued.borrow_mut().push_back(next);
            return ReplaceReport::queued();
        }

        let mut report = ReplaceReport::default();
        let mut next = Some(next);

        self.notifying.set(true);
        let _notifying = NotifyingGuard(&self.notifying);

        while let Some(tokens) = next
            .take()
            .or_else(|| self.queued.borrow_mut().pop_front())
        {
            debug!(theme = %tokens.name(), "theme replaced");
            *self.current.borrow_mut() = tokens;
            self.notify(&mut report);
        }

        report
    }

    fn notify(&self, report: &mut ReplaceReport) {
        // Registrations made or removed by a callback apply from the next round.
        let subscribers: SmallVec<[(SubscriberId, SubscriberFn); 8]> = self
            .subscribers
            .borrow()
            .iter()
            .map(|entry| (entry.id.clone(), entry.callback.clone()))
            .collect();

        for (id, callback) in subscribers {
            trace!(%id, "notifying theme subscriber");
            report.notified += 1;

            let fault = match panic::catch_unwind(AssertUnwindSafe(|| callback())) {
                Ok(Ok(())) => continue,
                Ok(Err(error)) => SubscriberFault::Failed { id, error },
                Err(payload) => SubscriberFault::Panicked {
                    id,
                    message: panic_message(payload.as_ref()),
                },
            };

            warn!("{fault}");

            let fault_handler = self.fault_handler.borrow().clone();
            if let Some(fault_handler) = fault_handler
                && let Err(payload) =
                    panic::catch_unwind(AssertUnwindSafe(|| fault_handler(&fault)))
            {
                warn!(
                    id = %fault.id(),
                    "theme fault handler panicked: {}",
                    panic_message(payload.as_ref())
                );
            }

            report.faults.push(fault);
        }
    }
}

/// Clears the notifying flag when a round ends, including by unwinding.
struct NotifyingGuard<'a>(&'a Cell<bool>);

impl Drop for NotifyingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Owns the active [`DesignTokens`] for one UI subtree.
///
/// Components never hold the store itself. They get a [`ThemeHandle`],
/// which can read and subscribe but not replace. Dropping the store
/// releases every subscription.
pub struct ThemeStore {
    state: Rc<StoreState>,
}

impl ThemeStore {
    pub fn new(initial: DesignTokens) -> Self {
        Self {
            state: Rc::new(StoreState {
                current: RefCell::new(Arc::new(initial)),
                subscribers: RefCell::new(Vec::new()),
                queued: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
                next_serial: Cell::new(0),
                fault_handler: RefCell::new(None),
            }),
        }
    }

    /// A shared, read-only reference for components.
    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle {
            state: self.state.clone(),
        }
    }

    pub fn current(&self) -> Arc<DesignTokens> {
        self.state.current()
    }

    /// Swaps in `next`, then calls every subscriber in registration order.
    ///
    /// A failing subscriber doesn't stop the others from being called. Its
    /// fault is logged, passed to the [`on_fault`](Self::on_fault) handler
    /// and returned in the report.
    pub fn replace(&self, next: impl Into<Arc<DesignTokens>>) -> ReplaceReport {
        self.state.replace(next.into())
    }

    pub fn replace_colors(&self, colors: ColorTokens) -> Result<ReplaceReport, ConfigurationError> {
        let next = self.current().with_colors(colors)?;
        Ok(self.replace(next))
    }

    pub fn replace_typography(
        &self,
        typography: TypographyTokens,
    ) -> Result<ReplaceReport, ConfigurationError> {
        let next = self.current().with_typography(typography)?;
        Ok(self.replace(next))
    }

    /// Merges `patch` over the current tokens and replaces them with the result.
    pub fn apply(&self, patch: &DesignTokensPatch) -> Result<ReplaceReport, ConfigurationError> {
        let next = self.current().merged(patch)?;
        Ok(self.replace(next))
    }

    pub fn subscribe(
        &self,
        id: impl Into<SubscriberId>,
        callback: impl Fn() -> anyhow::Result<()> + 'static,
    ) -> Subscription {
        self.state.subscribe(id.into(), Rc::new(callback))
    }

    /// Routes subscriber faults to `handler` as they happen, in addition to
    /// returning them from [`replace`](Self::replace).
    pub fn on_fault(&self, handler: impl Fn(&SubscriberFault) + 'static) {
        *self.state.fault_handler.borrow_mut() = Some(Rc::new(handler));
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscribers.borrow().len()
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        // Callbacks usually capture handles, which keep the state alive.
        if let Ok(mut subscribers) = self.state.subscribers.try_borrow_mut() {
            let released = subscribers.len();
            subscribers.clear();
            debug!(released, "theme store dropped");
        }
        self.state.queued.borrow_mut().clear();
        self.state.fault_handler.borrow_mut().take();
    }
}

/// Shared reference to a [`ThemeStore`], passed into components.
#[derive(Clone)]
pub struct ThemeHandle {
    state: Rc<StoreState>,
}

impl ThemeHandle {
    /// The active tokens. Always a complete set, never a mix of two.
    pub fn current(&self) -> Arc<DesignTokens> {
        self.state.current()
    }

    pub fn subscribe(
        &self,
        id: impl Into<SubscriberId>,
        callback: impl Fn() -> anyhow::Result<()> + 'static,
    ) -> Subscription {
        self.state.subscribe(id.into(), Rc::new(callback))
    }

    pub fn is_subscribed(&self, id: impl Into<SubscriberId>) -> bool {
        let id = id.into();
        self.state
            .subscribers
            .borrow()
            .iter()
            .any(|entry| entry.id == id)
    }
}

impl fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("theme", &self.current().name())
            .finish()
    }
}

/// Removes one registration when [`unsubscribe`](Self::unsubscribe) is called.
///
/// Dropping a subscription does not unsubscribe.
#[derive(Debug, Clone)]
pub struct Subscription {
    state: Weak<StoreState>,
    id: SubscriberId,
    serial: u64,
}

impl Subscription {
    pub fn id(&self) -> &SubscriberId {
        &self.id
    }

    /// Returns whether this call removed the registration. Calling it again,
    /// or after the store is gone, does nothing.
    pub fn unsubscribe(&self) -> bool {
        match self.state.upgrade() {
            Some(state) => state.unsubscribe(&self.id, self.serial),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rand::seq::SliceRandom;
    use tesserae_theme::{ColorRole, Rgba, TextRole, Typeface};

    use super::*;

    fn tokens(name: &str, color: Rgba) -> DesignTokens {
        let colors = ColorRole::ALL
            .into_iter()
            .fold(ColorTokens::builder(), |builder, role| builder.set(role, color))
            .build()
            .unwrap();
        let typography = TextRole::ALL
            .into_iter()
            .fold(TypographyTokens::builder(), |builder, role| {
                builder.set(role, Typeface::new("Inter", 14.))
            })
            .build()
            .unwrap();

        DesignTokens::new(name, colors, typography).unwrap()
    }

    fn recorder() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_replace_swaps_current() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let handle = store.handle();

        let _ = store.replace(tokens("red", Rgba::RED));

        assert_eq!(handle.current().name().as_ref(), "red");
        for role in ColorRole::ALL {
            assert_eq!(handle.current().color(role), Rgba::RED);
        }
    }

    #[test]
    fn test_subscribers_notified_in_registration_order() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let calls = recorder();

        let mut ids: Vec<String> = (0..16).map(|i| format!("subscriber-{i}")).collect();
        ids.shuffle(&mut rand::rng());

        for id in &ids {
            let calls = calls.clone();
            let name = id.clone();
            let _ = store.subscribe(id.as_str(), move || {
                calls.borrow_mut().push(name.clone());
                Ok(())
            });
        }

        let report = store.replace(tokens("red", Rgba::RED));

        assert_eq!(report.notified, ids.len());
        assert!(report.is_clean());
        assert_eq!(*calls.borrow(), ids);
    }

    #[test]
    fn test_subscribers_read_the_new_tokens() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let handle = store.handle();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _ = store.subscribe("reader", {
            let seen = seen.clone();
            move || {
                let current = handle.current();
                let colors: Vec<Rgba> = ColorRole::ALL.map(|role| current.color(role)).to_vec();
                seen.borrow_mut().push(colors);
                Ok(())
            }
        });

        let _ = store.replace(tokens("red", Rgba::RED));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].iter().all(|color| *color == Rgba::RED));
    }

    #[test]
    fn test_duplicate_subscription_is_ignored() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let count = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let count = count.clone();
            let _ = store.subscribe("same", move || {
                count.set(count.get() + 1);
                Ok(())
            });
        }

        assert_eq!(store.subscriber_count(), 1);
        let report = store.replace(tokens("red", Rgba::RED));
        assert_eq!(report.notified, 1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_faulty_subscribers_dont_block_the_rest() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let calls = recorder();

        for (index, id) in ["first", "failing", "panicking", "last"]
            .into_iter()
            .enumerate()
        {
            let calls = calls.clone();
            let _ = store.subscribe(id, move || {
                calls.borrow_mut().push(id.to_string());
                match index {
                    1 => anyhow::bail!("could not restyle"),
                    2 => panic!("restyle exploded"),
                    _ => Ok(()),
                }
            });
        }

        let handled = Rc::new(Cell::new(0));
        store.on_fault({
            let handled = handled.clone();
            move |_fault| handled.set(handled.get() + 1)
        });

        let report = store.replace(tokens("red", Rgba::RED));

        assert_eq!(*calls.borrow(), ["first", "failing", "panicking", "last"]);
        assert_eq!(report.notified, 4);
        assert_eq!(handled.get(), 2);
        assert_eq!(store.current().name().as_ref(), "red");

        let faults = report.into_result().unwrap_err();
        assert!(matches!(&faults[0], SubscriberFault::Failed { id, .. } if id.as_str() == "failing"));
        assert!(matches!(
            &faults[1],
            SubscriberFault::Panicked { id, message } if id.as_str() == "panicking" && message == "restyle exploded"
        ));
    }

    #[test]
    fn test_panicking_fault_handler_doesnt_wedge_the_store() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let calls = recorder();

        for id in ["failing", "after"] {
            let calls = calls.clone();
            let _ = store.subscribe(id, move || {
                calls.borrow_mut().push(id.to_string());
                if id == "failing" {
                    anyhow::bail!("could not restyle");
                }
                Ok(())
            });
        }
        store.on_fault(|fault| panic!("fault handler exploded on {}", fault.id()));

        let first = store.replace(tokens("red", Rgba::RED));
        assert!(!first.queued);
        assert_eq!(first.faults.len(), 1);
        assert_eq!(*calls.borrow(), ["failing", "after"]);

        let second = store.replace(tokens("white", Rgba::WHITE));
        assert!(!second.queued, "store should still apply replacements");
        assert_eq!(second.notified, 2);
        assert_eq!(store.current().name().as_ref(), "white");
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let subscription = store.subscribe("once", || Ok(()));
        let _other = store.subscribe("other", || Ok(()));

        assert!(subscription.unsubscribe());
        assert!(!subscription.unsubscribe());
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_stale_handle_doesnt_remove_new_registration() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let stale = store.subscribe("reused", || Ok(()));
        assert!(stale.unsubscribe());

        let _fresh = store.subscribe("reused", || Ok(()));
        assert!(!stale.unsubscribe());
        assert!(store.handle().is_subscribed("reused"));
    }

    #[test]
    fn test_unsubscribe_during_notification_is_deferred() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let calls = recorder();

        let later: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _ = store.subscribe("remover", {
            let calls = calls.clone();
            let later = later.clone();
            move || {
                calls.borrow_mut().push("remover".into());
                if let Some(subscription) = later.borrow().as_ref() {
                    subscription.unsubscribe();
                    subscription.unsubscribe();
                }
                Ok(())
            }
        });

        *later.borrow_mut() = Some(store.subscribe("removed", {
            let calls = calls.clone();
            move || {
                calls.borrow_mut().push("removed".into());
                Ok(())
            }
        }));

        let first = store.replace(tokens("red", Rgba::RED));
        assert_eq!(first.notified, 2);
        assert_eq!(*calls.borrow(), ["remover", "removed"]);

        let second = store.replace(tokens("black", Rgba::BLACK));
        assert_eq!(second.notified, 1);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_subscribe_during_notification_applies_next_round() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let handle = store.handle();
        let late_calls = Rc::new(Cell::new(0));

        let _ = store.subscribe("spawner", {
            let late_calls = late_calls.clone();
            move || {
                let late_calls = late_calls.clone();
                let _ = handle.subscribe("late", move || {
                    late_calls.set(late_calls.get() + 1);
                    Ok(())
                });
                Ok(())
            }
        });

        let first = store.replace(tokens("red", Rgba::RED));
        assert_eq!(first.notified, 1);
        assert_eq!(late_calls.get(), 0);

        let second = store.replace(tokens("black", Rgba::BLACK));
        assert_eq!(second.notified, 2);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_nested_replace_is_queued() {
        let store = Rc::new(ThemeStore::new(tokens("black", Rgba::BLACK)));
        let handle = store.handle();
        let seen = recorder();

        let _ = store.subscribe("chain", {
            let store = Rc::downgrade(&store);
            let seen = seen.clone();
            move || {
                let name = handle.current().name().to_string();
                seen.borrow_mut().push(name.clone());

                if name == "red"
                    && let Some(store) = store.upgrade()
                {
                    let nested = store.replace(tokens("white", Rgba::WHITE));
                    assert!(nested.queued);
                    // The nested swap waits for this round to finish.
                    assert_eq!(handle.current().name().as_ref(), "red");
                }
                Ok(())
            }
        });

        let report = store.replace(tokens("red", Rgba::RED));

        assert_eq!(*seen.borrow(), ["red", "white"]);
        assert_eq!(report.notified, 2);
        assert_eq!(store.current().name().as_ref(), "white");
    }

    #[test]
    fn test_replace_colors_keeps_typography() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let before = store.current();

        let colors = tokens("red", Rgba::RED).colors().as_ref().clone();
        let _ = store.replace_colors(colors).unwrap();

        let after = store.current();
        assert_eq!(after.color(ColorRole::Primary), Rgba::RED);
        assert!(Arc::ptr_eq(before.typography(), after.typography()));
    }

    #[test]
    fn test_invalid_patch_leaves_store_untouched() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let notified = Rc::new(Cell::new(false));
        let _ = store.subscribe("watcher", {
            let notified = notified.clone();
            move || {
                notified.set(true);
                Ok(())
            }
        });

        let patch = DesignTokensPatch::new().color(ColorRole::Primary, Rgba::new(9., 0., 0., 1.));
        assert!(store.apply(&patch).is_err());

        assert!(!notified.get());
        assert_eq!(store.current().color(ColorRole::Primary), Rgba::BLACK);
    }

    #[test]
    fn test_dropping_store_releases_subscriptions() {
        let store = ThemeStore::new(tokens("black", Rgba::BLACK));
        let handle = store.handle();
        let subscription = handle.subscribe("component", {
            let handle = handle.clone();
            move || {
                let _ = handle.current();
                Ok(())
            }
        });

        drop(store);

        assert!(!handle.is_subscribed("component"));
        assert!(!subscription.unsubscribe());
        assert_eq!(handle.current().name().as_ref(), "black");
    }
}
