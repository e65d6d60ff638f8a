//! Hash-aware scroll restoration.
//!
//! On every navigation the controller looks at the fragment of the new
//! location. Without one the view jumps back to the top. With one it looks up
//! the element carrying that id and, after a short settle delay, smooth
//! scrolls it into view. The browser glue lives in [`crate::dom`]; everything
//! here only talks to the collaborator traits below.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationLocation {
    pub path: String,
    pub fragment: Option<String>,
}

impl NavigationLocation {
    pub fn new(path: impl Into<String>, fragment: Option<String>) -> Self {
        Self {
            path: path.into(),
            fragment,
        }
    }

    /// Splits an href like `/docs#pricing` at the first `#`.
    pub fn parse(href: &str) -> Self {
        match href.split_once('#') {
            Some((path, fragment)) => Self::new(path, Some(fragment.to_owned())),
            None => Self::new(href, None),
        }
    }

    /// Builds a location from the pieces of `window.location`. The query stays
    /// part of the path so a query-only change counts as a new navigation.
    pub fn from_parts(pathname: &str, search: &str, hash: &str) -> Self {
        Self::parse(&format!("{}{}{}", pathname, search, hash))
    }

    /// The element id the fragment points at, if any.
    pub fn target_id(&self) -> Option<&str> {
        let fragment = self.fragment.as_deref()?;
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        (!id.is_empty()).then_some(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

pub trait ElementLookup {
    type Element;

    fn resolve(&self, id: &str) -> Option<Self::Element>;
}

pub trait Viewport {
    type Element;

    fn scroll_to_origin(&self);
    fn scroll_into_view(&self, element: &Self::Element, behavior: ScrollBehavior);
}

/// A pending one-shot task that can be called off before it fires.
pub trait Cancel {
    fn cancel(self);
}

pub trait Scheduler {
    type Handle: Cancel;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Same location as last time, nothing scheduled.
    Unchanged,
    ResetToTop,
    Scheduled { id: String },
    TargetMissing { id: String },
}

pub struct HashScrollController<L, V, S>
where
    L: ElementLookup<Element = V::Element>,
    V: Viewport + 'static,
    V::Element: 'static,
    S: Scheduler,
{
    lookup: L,
    viewport: Rc<V>,
    scheduler: S,
    settle_delay: Duration,
    behavior: ScrollBehavior,
    last: Option<NavigationLocation>,
    pending: Option<Pending<S::Handle>>,
}

struct Pending<H> {
    handle: H,
    fired: Rc<Cell<bool>>,
}

impl<L, V, S> HashScrollController<L, V, S>
where
    L: ElementLookup<Element = V::Element>,
    V: Viewport + 'static,
    V::Element: 'static,
    S: Scheduler,
{
    pub fn new(lookup: L, viewport: V, scheduler: S) -> Self {
        Self {
            lookup,
            viewport: Rc::new(viewport),
            scheduler,
            settle_delay: DEFAULT_SETTLE_DELAY,
            behavior: ScrollBehavior::Smooth,
            last: None,
            pending: None,
        }
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Behavior used for scrolls scheduled from now on.
    pub fn set_behavior(&mut self, behavior: ScrollBehavior) {
        self.behavior = behavior;
    }

    #[cfg(test)]
    fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.fired.get())
    }

    pub fn navigate(&mut self, location: &NavigationLocation) -> ScrollOutcome {
        if self.last.as_ref() == Some(location) {
            return ScrollOutcome::Unchanged;
        }
        self.last = Some(location.clone());
        self.cancel_pending();

        let Some(id) = location.target_id() else {
            self.viewport.scroll_to_origin();
            debug!(path = %location.path, "no fragment, scrolled to top");
            return ScrollOutcome::ResetToTop;
        };

        let Some(element) = self.lookup.resolve(id) else {
            debug!(id, "scroll target not rendered, skipping");
            return ScrollOutcome::TargetMissing { id: id.to_owned() };
        };

        let viewport = Rc::clone(&self.viewport);
        let behavior = self.behavior;
        let fired = Rc::new(Cell::new(false));
        let handle = {
            let fired = Rc::clone(&fired);
            self.scheduler.schedule(
                self.settle_delay,
                Box::new(move || {
                    fired.set(true);
                    viewport.scroll_into_view(&element, behavior);
                }),
            )
        };
        self.pending = Some(Pending { handle, fired });

        debug!(id, delay_ms = self.settle_delay.as_millis() as u64, "scroll scheduled");
        ScrollOutcome::Scheduled { id: id.to_owned() }
    }

    /// Calls off whatever scroll is still waiting. Run when the owning view
    /// goes away.
    pub fn teardown(&mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        match self.pending.take() {
            Some(pending) if !pending.fired.get() => pending.handle.cancel(),
            _ => {}
        }
    }
}

impl<L, V, S> Drop for HashScrollController<L, V, S>
where
    L: ElementLookup<Element = V::Element>,
    V: Viewport + 'static,
    V::Element: 'static,
    S: Scheduler,
{
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
