use std::{cell::Cell, rc::Rc};

use tesserae_theme::DesignTokens;
use tracing::debug;

use crate::{
    ContractViolation,
    element::{Element, TryRender},
    theme::{ReplaceReport, Subscription, SubscriberId, ThemeHandle, ThemeStore},
};

/// Root is the top of a themed subtree. It owns the [`ThemeStore`] that every
/// view below it reads from.
///
/// The root subscribes to its own store and marks itself dirty whenever the
/// tokens are replaced, so the host knows to render again. The view itself is
/// kept, never rebuilt. Dropping the root drops the store and with it every
/// subscription made through it.
///
/// # Example
///
/// ```ignore
/// let mut root = Root::new(LIGHT.clone(), |theme| {
///     HeadlineWithCaption::new(theme, "Theme Example", "Tap to switch")
/// });
///
/// let frame = root.render()?.clone();
/// let _ = root.switch_theme(DARK.clone());
/// assert!(root.needs_render());
/// ```
pub struct Root<V> {
    // Declared first so it's dropped before the store.
    subscription: Subscription,
    view: V,
    store: ThemeStore,
    dirty: Rc<Cell<bool>>,
    frame: Option<Element>,
}

impl<V: TryRender> Root<V> {
    pub fn new(tokens: DesignTokens, build_view: impl FnOnce(&ThemeHandle) -> V) -> Self {
        let store = ThemeStore::new(tokens);
        let view = build_view(&store.handle());
        let dirty = Rc::new(Cell::new(true));

        let subscription = store.subscribe(SubscriberId::new("root"), {
            let dirty = dirty.clone();
            move || {
                dirty.set(true);
                Ok(())
            }
        });

        Self {
            subscription,
            view,
            store,
            dirty,
            frame: None,
        }
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    pub fn theme(&self) -> ThemeHandle {
        self.store.handle()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Gives mutable access to the view, marking the root dirty.
    pub fn view_mut(&mut self) -> &mut V {
        self.dirty.set(true);
        &mut self.view
    }

    pub fn switch_theme(&self, tokens: DesignTokens) -> ReplaceReport {
        self.store.replace(tokens)
    }

    pub fn needs_render(&self) -> bool {
        self.dirty.get()
    }

    /// Renders the view against the current tokens and keeps the result as
    /// the latest frame.
    pub fn render(&mut self) -> Result<&Element, ContractViolation> {
        let frame = self.view.try_render()?;

        debug!(theme = %self.store.current().name(), "root rendered");
        self.dirty.set(false);

        Ok(self.frame.insert(frame))
    }

    /// The last successfully rendered frame.
    pub fn frame(&self) -> Option<&Element> {
        self.frame.as_ref()
    }

    /// Stops tracking theme replacements. The root stays dirty-free until
    /// its view is changed.
    pub fn detach(&self) -> bool {
        self.subscription.unsubscribe()
    }
}
