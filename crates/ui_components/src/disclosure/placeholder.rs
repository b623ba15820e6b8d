use leptos::*;

use super::component::chevron_arrow;
use crate::class_list::ClassList;
use crate::settings::{use_ui_settings, UiSettings};
use crate::skeleton::SkeletonText;

const DEFAULT_SKELETON_COUNT: usize = 4;

/// Number of collapsed rows drawn after the optional expanded first row.
fn collapsed_rows(open: bool, count: usize) -> usize {
    if open {
        count.saturating_sub(1)
    } else {
        count
    }
}

fn skeleton_heading(settings: &UiSettings) -> impl IntoView {
    view! {
        <span class=settings.class("accordion__heading")>
            {chevron_arrow(settings.class("accordion__arrow"), None)}
            <SkeletonText class=settings.class("accordion__title") />
        </span>
    }
}

#[component]
/// Collapsed placeholder row: an arrow and a skeleton title line.
pub fn DisclosureGroupSkeletonItem() -> impl IntoView {
    let settings = use_ui_settings();
    view! {
        <li class=settings.class("accordion__item")>
            {skeleton_heading(&settings)}
        </li>
    }
}

#[component]
/// Loading placeholder for a [`DisclosureGroup`](super::DisclosureGroup).
pub fn DisclosureGroupSkeleton(
    /// Draw the first row expanded with placeholder content.
    #[prop(default = true)]
    open: bool,
    /// Total number of rows, including the expanded one.
    #[prop(default = DEFAULT_SKELETON_COUNT)]
    count: usize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let settings = use_ui_settings();
    let class = ClassList::new(settings.class("accordion"))
        .with(settings.class("skeleton"))
        .with_optional(class.as_deref())
        .to_string();
    let item_class = settings.class("accordion__item");
    let open_item_class = ClassList::new(item_class.clone())
        .with(format!("{item_class}--active"))
        .to_string();

    let expanded = (open && count > 0).then(|| {
        view! {
            <li class=open_item_class>
                {skeleton_heading(&settings)}
                <div class=settings.class("accordion__content")>
                    <SkeletonText width="90%" />
                    <SkeletonText width="80%" />
                    <SkeletonText width="95%" />
                </div>
            </li>
        }
    });
    let collapsed = (0..collapsed_rows(open, count))
        .map(|_| view! { <DisclosureGroupSkeletonItem /> })
        .collect_view();

    view! {
        <ul class={class} {..attrs}>
            {expanded}
            {collapsed}
        </ul>
    }
}
