//! Story gallery for the `ui_components` widgets.
//!
//! Every story is a plain render function registered in [`STORIES`]; the gallery renders them
//! in order so visual changes can be reviewed in one page. Panel callbacks are reported through
//! `leptos::logging` so interactions show up in the browser console.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::ev::AnimationEvent;
use leptos::*;
use ui_components::prelude::*;

#[derive(Clone, Copy)]
/// A single named example.
pub struct Story {
    /// Stable identifier, used for deep links (`#disclosure-default`).
    pub id: &'static str,
    /// Component family the story belongs to.
    pub group: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Renders the story body.
    pub render: fn() -> View,
}

/// Every registered story, in display order.
pub const STORIES: &[Story] = &[
    Story {
        id: "disclosure-default",
        group: "DisclosurePanel",
        title: "Default",
        render: disclosure_default,
    },
    Story {
        id: "disclosure-controlled",
        group: "DisclosurePanel",
        title: "Controlled open state",
        render: disclosure_controlled,
    },
    Story {
        id: "disclosure-custom-expando",
        group: "DisclosurePanel",
        title: "Custom activator",
        render: disclosure_custom_expando,
    },
    Story {
        id: "disclosure-skeleton",
        group: "DisclosurePanel",
        title: "Loading placeholder",
        render: disclosure_skeleton,
    },
    Story {
        id: "skeleton-single",
        group: "SkeletonText",
        title: "Single line",
        render: skeleton_single,
    },
    Story {
        id: "skeleton-paragraph-percent",
        group: "SkeletonText",
        title: "Paragraph, percentage width",
        render: skeleton_paragraph_percent,
    },
    Story {
        id: "skeleton-paragraph-pixel",
        group: "SkeletonText",
        title: "Paragraph, pixel width",
        render: skeleton_paragraph_pixel,
    },
    Story {
        id: "skeleton-heading",
        group: "SkeletonText",
        title: "Heading",
        render: skeleton_heading,
    },
];

/// Looks up a story by id.
pub fn find_story(id: &str) -> Option<&'static Story> {
    STORIES.iter().find(|story| story.id == id)
}

fn log_heading_click() -> Callback<HeadingClick> {
    Callback::new(|click: HeadingClick| {
        logging::log!("on_heading_click: is_open={}", click.is_open);
    })
}

fn log_animation_end() -> Callback<AnimationEvent> {
    Callback::new(|ev: AnimationEvent| {
        logging::log!("on_animation_end: {}", ev.animation_name());
    })
}

fn disclosure_default() -> View {
    view! {
        <DisclosureGroup>
            <DisclosurePanel
                title=|| "Section 1 title"
                on_heading_click=log_heading_click()
                on_animation_end=log_animation_end()
            >
                <p>"Panel content stays mounted; the host stylesheet hides it when closed."</p>
            </DisclosurePanel>
            <DisclosurePanel title=|| "Section 2 title" open=true on_heading_click=log_heading_click()>
                <p>"This panel starts open."</p>
            </DisclosurePanel>
            <DisclosurePanel title=|| "Section 3 title" icon_description="Show details">
                <p>"Press Escape on the heading to close it."</p>
            </DisclosurePanel>
        </DisclosureGroup>
    }
    .into_view()
}

fn disclosure_controlled() -> View {
    let open = create_rw_signal(false);
    view! {
        <div>
            <button type="button" on:click=move |_| open.set(true)>"Expand all"</button>
            <button type="button" on:click=move |_| open.set(false)>"Collapse all"</button>
            <DisclosureGroup>
                <DisclosurePanel title=|| "Controlled 1" open=open on_heading_click=log_heading_click()>
                    <p>"Local clicks still toggle; the buttons above force a state."</p>
                </DisclosurePanel>
                <DisclosurePanel title=|| "Controlled 2" open=open>
                    <p>"Second panel shares the same owner signal."</p>
                </DisclosurePanel>
            </DisclosureGroup>
        </div>
    }
    .into_view()
}

fn disclosure_custom_expando() -> View {
    let render_expando: RenderExpando = Callback::new(|props: ExpandoProps| {
        let ExpandoProps {
            aria_expanded,
            class,
            title,
            on_click,
            on_keydown,
            children,
        } = props;
        view! {
            <div
                role="button"
                tabindex="0"
                class=class
                title=title
                aria-expanded=move || if aria_expanded.get() { "true" } else { "false" }
                on:click=move |ev| on_click.call(ev)
                on:keydown=move |ev| on_keydown.call(ev)
            >
                {children}
            </div>
        }
        .into_view()
    });

    view! {
        <DisclosureGroup>
            <DisclosurePanel title=|| "Rendered through a div" render_expando=render_expando>
                <p>"The activator element is supplied by the caller."</p>
            </DisclosurePanel>
        </DisclosureGroup>
    }
    .into_view()
}

fn disclosure_skeleton() -> View {
    view! { <DisclosureGroupSkeleton /> }.into_view()
}

fn skeleton_single() -> View {
    view! { <SkeletonText width="40px" /> }.into_view()
}

fn skeleton_paragraph_percent() -> View {
    view! { <SkeletonText paragraph=true line_count=5 width="100%" /> }.into_view()
}

fn skeleton_paragraph_pixel() -> View {
    view! { <SkeletonText paragraph=true line_count=4 width="320px" /> }.into_view()
}

fn skeleton_heading() -> View {
    view! { <SkeletonText heading=true width="60%" /> }.into_view()
}

#[component]
/// Renders all registered stories, or only `story` when an id is given.
pub fn ComponentGallery(
    /// Settings provided to every story; defaults apply when omitted.
    #[prop(optional)]
    settings: Option<UiSettings>,
    /// Restricts the gallery to one story id.
    #[prop(optional, into)]
    story: Option<String>,
) -> impl IntoView {
    provide_ui_settings(settings.unwrap_or_default());

    let selected: Vec<&'static Story> = match story.as_deref() {
        Some(id) => match find_story(id) {
            Some(story) => vec![story],
            None => {
                logging::warn!("unknown story `{id}`; rendering the full gallery");
                STORIES.iter().collect()
            }
        },
        None => STORIES.iter().collect(),
    };

    view! {
        <main class="ui-gallery">
            {selected
                .into_iter()
                .map(|story| {
                    view! {
                        <section id=story.id data-story-group=story.group>
                            <h2>{story.group}" / "{story.title}</h2>
                            {(story.render)()}
                        </section>
                    }
                })
                .collect_view()}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_ids_are_unique() {
        let ids: HashSet<_> = STORIES.iter().map(|story| story.id).collect();
        assert_eq!(ids.len(), STORIES.len());
    }

    #[test]
    fn find_story_resolves_registered_ids() {
        let story = find_story("skeleton-paragraph-pixel").expect("story");
        assert_eq!(story.group, "SkeletonText");
        assert!(find_story("missing").is_none());
    }
}
