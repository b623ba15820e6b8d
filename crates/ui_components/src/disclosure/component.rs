use leptos::ev::{AnimationEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use super::state::{reduce_disclosure, DisclosureAction, DisclosureEffect, DisclosureState};
use crate::class_list::{bool_token, ClassList};
use crate::keyboard::is_escape;
use crate::settings::use_ui_settings;

/// Tooltip and arrow label used when no `icon_description` is supplied.
pub const DEFAULT_ICON_DESCRIPTION: &str = "Expand/Collapse";

const DEFAULT_TITLE: &str = "title";

#[derive(Debug, Clone)]
/// Payload delivered to `on_heading_click` after a toggle.
pub struct HeadingClick {
    /// Open state after the toggle.
    pub is_open: bool,
    /// Click that triggered the toggle.
    pub event: MouseEvent,
}

/// Everything an activator element must wire up to drive a [`DisclosurePanel`].
pub struct ExpandoProps {
    /// Current open state, for `aria-expanded`.
    pub aria_expanded: Signal<bool>,
    /// Heading class (`{prefix}--accordion__heading`).
    pub class: String,
    /// Tooltip text, taken from `icon_description`.
    pub title: String,
    /// Toggle handler.
    pub on_click: Callback<MouseEvent>,
    /// Escape-dismissal handler.
    pub on_keydown: Callback<KeyboardEvent>,
    /// Arrow icon and title content.
    pub children: View,
}

/// Rendering strategy for the activator element of a [`DisclosurePanel`].
pub type RenderExpando = Callback<ExpandoProps, View>;

/// Default activator: a plain `<button type="button">`.
pub fn default_render_expando(props: ExpandoProps) -> View {
    let ExpandoProps {
        aria_expanded,
        class,
        title,
        on_click,
        on_keydown,
        children,
    } = props;
    view! {
        <button
            type="button"
            class=class
            title=title
            aria-expanded=move || bool_token(aria_expanded.get())
            on:click=move |ev| on_click.call(ev)
            on:keydown=move |ev| on_keydown.call(ev)
        >
            {children}
        </button>
    }
    .into_view()
}

/// Right-pointing chevron that rotates when the panel opens.
pub(super) fn chevron_arrow(class: String, label: Option<String>) -> impl IntoView {
    let hidden = label.is_none().then_some("true");
    view! {
        <svg
            class=class
            aria-label=label
            aria-hidden=hidden
            role="img"
            width="16"
            height="16"
            viewBox="0 0 16 16"
            fill="currentColor"
        >
            <path d="M11 8l-5 5-.7-.7L9.6 8 5.3 3.7 6 3z"></path>
        </svg>
    }
}

/// Notifications that must observe the state from before the action.
fn runs_before_commit(effect: &DisclosureEffect) -> bool {
    matches!(effect, DisclosureEffect::NotifyAnimationEnd)
}

/// Applies `action` to the panel signal and runs its notifications through `run`.
///
/// Animation-end notifications run before the new state is set. Toggle notifications run
/// after it, so an owner that pushes a controlled `open` value from its callback is synced
/// against the committed state.
fn commit(
    state: RwSignal<DisclosureState>,
    action: DisclosureAction,
    mut run: impl FnMut(DisclosureEffect),
) {
    let mut preview = state.get_untracked();
    for effect in reduce_disclosure(&mut preview, action) {
        if runs_before_commit(&effect) {
            run(effect);
        }
    }

    // Pre-commit callbacks may have pushed new state; apply the action to what they left.
    let previous = state.get_untracked();
    let mut next = previous;
    let effects = reduce_disclosure(&mut next, action);
    if next != previous {
        state.set(next);
    }
    for effect in effects {
        if !runs_before_commit(&effect) {
            run(effect);
        }
    }
}

/// Re-syncs the panel whenever the owner's `open` value is read with a new value.
fn sync_controlled_open(state: RwSignal<DisclosureState>, open: MaybeSignal<bool>) {
    create_render_effect(move |_| {
        let controlled = open.get();
        commit(state, DisclosureAction::SyncControlledOpen(controlled), |_| {});
    });
}

/// Closes an open panel when the key is escape; every other key is ignored.
fn dismiss_on_key(state: RwSignal<DisclosureState>, key: &str, key_code: u32) {
    if state.with_untracked(DisclosureState::is_open) && is_escape(key, key_code) {
        commit(state, DisclosureAction::Dismiss, |_| {});
    }
}

#[component]
/// Collapsible panel with a heading activator, escape dismissal, and an animation phase class.
///
/// `open` may be a plain value or a signal. When it is a signal, every change the owner
/// pushes is synced into the panel; local toggles in between are kept.
pub fn DisclosurePanel(
    #[prop(optional, into)] open: MaybeSignal<bool>,
    #[prop(optional, into)] title: Option<ViewFn>,
    #[prop(into, default = DEFAULT_ICON_DESCRIPTION.to_string())] icon_description: String,
    #[prop(optional)] render_expando: Option<RenderExpando>,
    #[prop(optional)] on_heading_click: Option<Callback<HeadingClick>>,
    #[prop(optional)] on_animation_end: Option<Callback<AnimationEvent>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let settings = use_ui_settings();
    let state = create_rw_signal(DisclosureState::new(open.get_untracked()));

    sync_controlled_open(state, open);

    let on_click = Callback::new(move |ev: MouseEvent| {
        commit(state, DisclosureAction::Toggle, |effect| {
            if let DisclosureEffect::NotifyToggle { is_open } = effect {
                if let Some(on_heading_click) = on_heading_click.as_ref() {
                    on_heading_click.call(HeadingClick {
                        is_open,
                        event: ev.clone(),
                    });
                }
            }
        });
    });

    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        dismiss_on_key(state, &ev.key(), ev.key_code());
    });

    let handle_animation_end = move |ev: AnimationEvent| {
        commit(state, DisclosureAction::AnimationComplete, |effect| {
            if effect == DisclosureEffect::NotifyAnimationEnd {
                if let Some(on_animation_end) = on_animation_end.as_ref() {
                    on_animation_end.call(ev.clone());
                }
            }
        });
    };

    let title = match title {
        Some(title) => title.run(),
        None => DEFAULT_TITLE.into_view(),
    };
    let heading = view! {
        {chevron_arrow(settings.class("accordion__arrow"), Some(icon_description.clone()))}
        <div class=settings.class("accordion__title")>{title}</div>
    }
    .into_view();

    let expando = ExpandoProps {
        aria_expanded: Signal::derive(move || state.with(DisclosureState::is_open)),
        class: settings.class("accordion__heading"),
        title: icon_description,
        on_click,
        on_keydown,
        children: heading,
    };
    let expando = match render_expando {
        Some(render_expando) => render_expando.call(expando),
        None => default_render_expando(expando),
    };

    let content_class = settings.class("accordion__content");
    let container_class = move || {
        state.with(|state| {
            state
                .container_class(&settings, class.as_deref())
                .to_string()
        })
    };

    view! {
        <li class={container_class} {..attrs} on:animationend=handle_animation_end>
            {expando}
            <div class=content_class>{children.map(|children| children())}</div>
        </li>
    }
}

#[component]
/// List container grouping several [`DisclosurePanel`]s.
pub fn DisclosureGroup(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let settings = use_ui_settings();
    let class = ClassList::new(settings.class("accordion"))
        .with_optional(class.as_deref())
        .to_string();

    view! {
        <ul class={class} {..attrs}>
            {children()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::disclosure::AnimationPhase;

    fn controlled(open: RwSignal<bool>) -> MaybeSignal<bool> {
        MaybeSignal::Dynamic(Signal::from(open))
    }

    #[test]
    fn owner_mirroring_heading_click_can_still_force_close() {
        let runtime = create_runtime();
        let open = create_rw_signal(false);
        let state = create_rw_signal(DisclosureState::new(false));
        sync_controlled_open(state, controlled(open));

        commit(state, DisclosureAction::Toggle, |effect| {
            if let DisclosureEffect::NotifyToggle { is_open } = effect {
                open.set(is_open);
            }
        });
        assert!(state.get_untracked().is_open());
        assert!(state.get_untracked().last_synced_open());

        open.set(false);
        assert!(!state.get_untracked().is_open());

        runtime.dispose();
    }

    #[test]
    fn unchanged_controlled_value_keeps_local_toggle() {
        let runtime = create_runtime();
        let open = create_rw_signal(false);
        let state = create_rw_signal(DisclosureState::new(false));
        sync_controlled_open(state, controlled(open));

        commit(state, DisclosureAction::Toggle, |_| {});
        open.set(false);
        assert!(state.get_untracked().is_open());

        open.set(true);
        open.set(true);
        assert!(state.get_untracked().is_open());
        assert!(state.get_untracked().last_synced_open());

        runtime.dispose();
    }

    #[test]
    fn toggle_notification_sees_committed_state() {
        let runtime = create_runtime();
        let state = create_rw_signal(DisclosureState::new(false));
        let mut seen = Vec::new();

        commit(state, DisclosureAction::Toggle, |effect| {
            seen.push((effect, state.get_untracked().is_open()));
        });

        assert_eq!(
            seen,
            vec![(DisclosureEffect::NotifyToggle { is_open: true }, true)]
        );
        runtime.dispose();
    }

    #[test]
    fn animation_end_notification_runs_before_phase_clears() {
        let runtime = create_runtime();
        let state = create_rw_signal(DisclosureState::new(true));
        commit(state, DisclosureAction::Toggle, |_| {});

        let mut phase_during_callback = None;
        commit(state, DisclosureAction::AnimationComplete, |effect| {
            assert_eq!(effect, DisclosureEffect::NotifyAnimationEnd);
            phase_during_callback = Some(state.get_untracked().animation());
        });

        assert_eq!(phase_during_callback, Some(AnimationPhase::Collapsing));
        assert_eq!(state.get_untracked().animation(), AnimationPhase::None);
        runtime.dispose();
    }

    #[test]
    fn only_escape_dismisses_an_open_panel() {
        let runtime = create_runtime();
        let state = create_rw_signal(DisclosureState::new(true));

        dismiss_on_key(state, "Enter", 13);
        dismiss_on_key(state, " ", 32);
        assert!(state.get_untracked().is_open());

        dismiss_on_key(state, "Escape", 27);
        assert!(!state.get_untracked().is_open());
        runtime.dispose();
    }
}
