//! Headless open/close state machine for disclosure panels.
//!
//! The Leptos component owns one [`DisclosureState`] per panel and routes every DOM event
//! through [`reduce_disclosure`]. The reducer never calls user code; it returns
//! [`DisclosureEffect`] values and the component runs the matching callbacks.

use crate::class_list::ClassList;
use crate::settings::UiSettings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Visual transition currently running on a panel.
pub enum AnimationPhase {
    /// No transition in flight.
    #[default]
    None,
    /// Panel is animating towards open.
    Expanding,
    /// Panel is animating towards closed.
    Collapsing,
}

impl AnimationPhase {
    /// Class-suffix token for an active phase.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Expanding => Some("expanding"),
            Self::Collapsing => Some("collapsing"),
        }
    }

    fn towards(open: bool) -> Self {
        if open {
            Self::Expanding
        } else {
            Self::Collapsing
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-panel state.
pub struct DisclosureState {
    is_open: bool,
    last_synced_open: bool,
    animation: AnimationPhase,
}

impl DisclosureState {
    /// Creates a panel state from the initial `open` prop.
    pub fn new(open: bool) -> Self {
        Self {
            is_open: open,
            last_synced_open: open,
            animation: AnimationPhase::None,
        }
    }

    /// Authoritative disclosure state.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Transition currently in flight.
    pub fn animation(&self) -> AnimationPhase {
        self.animation
    }

    /// Last controlled `open` value applied to the panel.
    pub fn last_synced_open(&self) -> bool {
        self.last_synced_open
    }

    /// Class list for the panel container.
    pub fn container_class(&self, settings: &UiSettings, custom: Option<&str>) -> ClassList {
        let base = settings.class("accordion__item");
        ClassList::new(base.clone())
            .with_if(self.is_open, format!("{base}--active"))
            .with_optional(
                self.animation
                    .token()
                    .map(|phase| format!("{base}--{phase}"))
                    .as_deref(),
            )
            .with_optional(custom)
    }
}

impl Default for DisclosureState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs accepted by [`reduce_disclosure`].
pub enum DisclosureAction {
    /// Primary activation of the heading.
    Toggle,
    /// Escape pressed on the heading.
    Dismiss,
    /// The container reported `animationend`.
    AnimationComplete,
    /// The externally owned `open` value was read during a render.
    SyncControlledOpen(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Caller notifications produced by a transition.
pub enum DisclosureEffect {
    /// Invoke the heading-click callback with the new open value.
    NotifyToggle {
        /// Open state after the toggle.
        is_open: bool,
    },
    /// Invoke the animation-end callback. Runs before the new state is committed.
    NotifyAnimationEnd,
}

/// Applies `action` to `state` and returns the notifications the caller must run.
pub fn reduce_disclosure(
    state: &mut DisclosureState,
    action: DisclosureAction,
) -> Vec<DisclosureEffect> {
    let mut effects = Vec::new();
    match action {
        DisclosureAction::Toggle => {
            let next = !state.is_open;
            state.animation = AnimationPhase::towards(next);
            state.is_open = next;
            effects.push(DisclosureEffect::NotifyToggle { is_open: next });
        }
        DisclosureAction::Dismiss => {
            // Direct set, not a toggle: no heading-click notification.
            if state.is_open {
                state.is_open = false;
            }
        }
        DisclosureAction::AnimationComplete => {
            effects.push(DisclosureEffect::NotifyAnimationEnd);
            state.animation = AnimationPhase::None;
        }
        DisclosureAction::SyncControlledOpen(open) => {
            if open != state.last_synced_open {
                state.is_open = open;
                state.last_synced_open = open;
            }
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply(state: &mut DisclosureState, action: DisclosureAction) -> Vec<DisclosureEffect> {
        reduce_disclosure(state, action)
    }

    #[test]
    fn toggle_parity_follows_initial_state() {
        for initial in [false, true] {
            let mut state = DisclosureState::new(initial);
            for n in 1..=7 {
                apply(&mut state, DisclosureAction::Toggle);
                assert_eq!(state.is_open(), initial ^ (n % 2 == 1), "after {n} toggles");
            }
        }
    }

    #[test]
    fn toggle_sets_phase_and_notifies_with_new_value() {
        let mut state = DisclosureState::new(false);

        let effects = apply(&mut state, DisclosureAction::Toggle);
        assert_eq!(effects, vec![DisclosureEffect::NotifyToggle { is_open: true }]);
        assert_eq!(state.animation(), AnimationPhase::Expanding);

        let effects = apply(&mut state, DisclosureAction::Toggle);
        assert_eq!(effects, vec![DisclosureEffect::NotifyToggle { is_open: false }]);
        assert_eq!(state.animation(), AnimationPhase::Collapsing);
    }

    #[test]
    fn animation_complete_notifies_then_clears_phase() {
        let mut state = DisclosureState::new(false);
        apply(&mut state, DisclosureAction::Toggle);

        let effects = apply(&mut state, DisclosureAction::AnimationComplete);

        assert_eq!(effects, vec![DisclosureEffect::NotifyAnimationEnd]);
        assert_eq!(state.animation(), AnimationPhase::None);
        assert!(state.is_open());
    }

    #[test]
    fn rapid_retoggle_restarts_phase_without_completion() {
        let mut state = DisclosureState::new(true);
        apply(&mut state, DisclosureAction::Toggle);
        apply(&mut state, DisclosureAction::Toggle);

        assert!(state.is_open());
        assert_eq!(state.animation(), AnimationPhase::Expanding);
    }

    #[test]
    fn dismiss_closes_open_panel_and_ignores_closed_panel() {
        let mut closed = DisclosureState::new(false);
        let before = closed;
        assert!(apply(&mut closed, DisclosureAction::Dismiss).is_empty());
        assert_eq!(closed, before);

        let mut open = DisclosureState::new(true);
        apply(&mut open, DisclosureAction::Dismiss);
        assert!(!open.is_open());
    }

    #[test]
    fn dismiss_does_not_notify_heading_click_listeners() {
        // Documented behavior: only a toggle reports to the heading-click callback.
        let mut state = DisclosureState::new(false);
        apply(&mut state, DisclosureAction::Toggle);

        let effects = apply(&mut state, DisclosureAction::Dismiss);

        assert!(effects.is_empty());
        assert!(!state.is_open());
        assert_eq!(state.animation(), AnimationPhase::Expanding);
    }

    #[test]
    fn controlled_sync_applies_only_on_divergence() {
        let mut state = DisclosureState::new(false);
        apply(&mut state, DisclosureAction::Toggle);
        assert!(state.is_open());

        // Same external value as last observed: the local toggle stands.
        apply(&mut state, DisclosureAction::SyncControlledOpen(false));
        assert!(state.is_open());

        apply(&mut state, DisclosureAction::SyncControlledOpen(true));
        let synced = state;
        assert!(synced.last_synced_open());
        for _ in 0..3 {
            apply(&mut state, DisclosureAction::SyncControlledOpen(true));
            assert_eq!(state, synced);
        }
    }

    #[test]
    fn controlled_sync_can_force_close() {
        let mut state = DisclosureState::new(true);
        apply(&mut state, DisclosureAction::SyncControlledOpen(false));
        assert!(!state.is_open());
        assert_eq!(state.animation(), AnimationPhase::None);
    }

    #[test]
    fn container_class_reflects_open_and_phase() {
        let settings = UiSettings::default();
        let mut state = DisclosureState::new(false);
        assert_eq!(
            state.container_class(&settings, None).to_string(),
            "bx--accordion__item"
        );

        apply(&mut state, DisclosureAction::Toggle);
        assert_eq!(
            state.container_class(&settings, Some("faq")).to_string(),
            "bx--accordion__item bx--accordion__item--active bx--accordion__item--expanding faq"
        );

        apply(&mut state, DisclosureAction::AnimationComplete);
        assert_eq!(
            state.container_class(&settings, None).to_string(),
            "bx--accordion__item bx--accordion__item--active"
        );
    }
}
