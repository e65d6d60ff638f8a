#![allow(non_snake_case)]

//! Performance mode broadcast.
//!
//! One ancestor owns the "high performance" flag and every descendant can
//! read it. When the flag is set, components drop their expensive visual
//! effects (animated gradients, the testimonial reel).
//!
//! [`PerformanceScope`] is the capability object itself and works without
//! any renderer. [`PerformanceProvider`] and [`use_performance_mode`] expose
//! it through the Dioxus context tree.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerformanceState {
    pub is_high_performance: bool,
}

/// What a consumer observes. Unscoped reads resolve to
/// [`PerformanceScope::DEFAULT`].
#[derive(Debug, Clone, Default)]
pub struct PerformanceScope {
    state: Option<Rc<PerformanceState>>,
}

impl PerformanceScope {
    pub const DEFAULT: bool = false;

    pub const fn unscoped() -> Self {
        Self { state: None }
    }

    pub fn provide(is_high_performance: bool) -> Self {
        Self {
            state: Some(Rc::new(PerformanceState {
                is_high_performance,
            })),
        }
    }

    /// Re-provides `is_high_performance`, keeping the current broadcast when
    /// the value has not changed.
    pub fn reprovide(&self, is_high_performance: bool) -> Self {
        match &self.state {
            Some(state) if state.is_high_performance == is_high_performance => self.clone(),
            _ => Self::provide(is_high_performance),
        }
    }

    pub fn is_high_performance(&self) -> bool {
        self.state
            .as_ref()
            .map_or(Self::DEFAULT, |state| state.is_high_performance)
    }

    pub fn is_scoped(&self) -> bool {
        self.state.is_some()
    }

    /// True when both scopes hand out the very same broadcast.
    pub fn same_broadcast(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialEq for PerformanceScope {
    fn eq(&self, other: &Self) -> bool {
        self.is_scoped() == other.is_scoped()
            && self.is_high_performance() == other.is_high_performance()
    }
}

#[component]
pub fn PerformanceProvider(high_performance: bool, children: Element) -> Element {
    let last = use_hook(|| Rc::new(RefCell::new(PerformanceScope::unscoped())));
    let scope = use_memo(use_reactive((&high_performance,), move |(high_performance,)| {
        let previous = last.borrow().clone();
        let next = previous.reprovide(high_performance);
        if !next.same_broadcast(&previous) {
            tracing::debug!(high_performance, "performance mode provided");
        }
        *last.borrow_mut() = next.clone();
        next
    }));
    use_context_provider(move || scope);

    rsx! {
        { children }
    }
}

pub fn use_performance_scope() -> PerformanceScope {
    match try_use_context::<Memo<PerformanceScope>>() {
        Some(scope) => scope.read().clone(),
        None => PerformanceScope::unscoped(),
    }
}

pub fn use_performance_mode() -> bool {
    use_performance_scope().is_high_performance()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_value_is_observed() {
        for v in [true, false] {
            let scope = PerformanceScope::provide(v);
            assert!(scope.is_scoped());
            assert_eq!(scope.is_high_performance(), v);
        }
    }

    #[test]
    fn unscoped_reads_default() {
        let scope = PerformanceScope::unscoped();
        assert!(!scope.is_scoped());
        assert!(!scope.is_high_performance());
        assert!(!PerformanceScope::default().is_high_performance());
    }

    #[test]
    fn unchanged_value_keeps_broadcast_identity() {
        let first = PerformanceScope::provide(true);
        let second = first.reprovide(true);
        assert!(first.same_broadcast(&second));

        let third = second.reprovide(false);
        assert!(!second.same_broadcast(&third));
        assert!(!third.is_high_performance());

        let fourth = third.reprovide(false);
        assert!(third.same_broadcast(&fourth));
    }

    #[test]
    fn separate_provides_are_distinct_broadcasts() {
        let a = PerformanceScope::provide(true);
        let b = PerformanceScope::provide(true);
        assert_eq!(a, b);
        assert!(!a.same_broadcast(&b));
    }

    #[test]
    fn reprovide_from_unscoped_creates_scope() {
        let scope = PerformanceScope::unscoped().reprovide(false);
        assert!(scope.is_scoped());
        assert_ne!(scope, PerformanceScope::unscoped());
    }

    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::Cell;

    #[component]
    fn ModeLabel() -> Element {
        let mode = use_performance_mode();
        rsx! {
            span { "mode={mode}" }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn consumer_under_provider_sees_value() {
        fn on() -> Element {
            rsx! {
                PerformanceProvider { high_performance: true, ModeLabel {} }
            }
        }
        fn off() -> Element {
            rsx! {
                PerformanceProvider { high_performance: false, ModeLabel {} }
            }
        }
        assert!(render(on).contains("mode=true"));
        assert!(render(off).contains("mode=false"));
    }

    #[test]
    fn consumer_without_provider_sees_false() {
        fn app() -> Element {
            rsx! {
                ModeLabel {}
            }
        }
        assert!(render(app).contains("mode=false"));
    }

    #[test]
    fn nearest_provider_wins() {
        fn app() -> Element {
            rsx! {
                PerformanceProvider { high_performance: true,
                    PerformanceProvider { high_performance: false, ModeLabel {} }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("mode=false"));
        assert!(!html.contains("mode=true"));
    }

    thread_local! {
        static RENDERS: Cell<usize> = const { Cell::new(0) };
        static PROVIDED: Cell<bool> = const { Cell::new(true) };
        static SEEN: RefCell<Vec<PerformanceScope>> = const { RefCell::new(Vec::new()) };
    }

    #[component]
    fn Observer(n: usize) -> Element {
        let scope = use_performance_scope();
        SEEN.with(|seen| seen.borrow_mut().push(scope));
        rsx! {
            span { "render={n}" }
        }
    }

    fn observed_app() -> Element {
        let n = RENDERS.with(|renders| {
            let n = renders.get();
            renders.set(n + 1);
            n
        });
        let high_performance = PROVIDED.with(Cell::get);
        rsx! {
            PerformanceProvider { high_performance, Observer { n } }
        }
    }

    fn rerender(dom: &mut VirtualDom) {
        dom.mark_dirty(ScopeId::ROOT);
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn provider_rerender_keeps_broadcast_identity() {
        let mut dom = VirtualDom::new(observed_app);
        dom.rebuild_in_place();
        for _ in 0..3 {
            rerender(&mut dom);
        }

        let seen = SEEN.with(|seen| seen.borrow().clone());
        assert!(seen.len() >= 4);
        assert!(seen.iter().all(|scope| scope.is_high_performance()));
        assert!(seen.iter().all(|scope| scope.same_broadcast(&seen[0])));
    }

    #[test]
    fn provider_value_change_replaces_broadcast() {
        let mut dom = VirtualDom::new(observed_app);
        dom.rebuild_in_place();

        PROVIDED.with(|provided| provided.set(false));
        rerender(&mut dom);
        rerender(&mut dom);

        let seen = SEEN.with(|seen| seen.borrow().clone());
        assert!(seen.len() >= 3);
        let last = &seen[seen.len() - 1];
        assert!(seen[0].is_high_performance());
        assert!(!last.is_high_performance());
        assert!(!last.same_broadcast(&seen[0]));
        assert!(last.same_broadcast(&seen[seen.len() - 2]));
    }
}
