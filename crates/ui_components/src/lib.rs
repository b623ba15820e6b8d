//! Design-system widgets for Leptos web UIs.
//!
//! The crate ships disclosure panels and loading placeholders. Each widget keeps its logic in
//! a headless layer ([`reduce_disclosure`], [`layout_lines`]) that can be tested without a DOM,
//! and a thin Leptos component that renders the `{prefix}--*` class contract styled by the
//! host stylesheet. The prefix comes from [`UiSettings`], provided through context.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_list;
mod disclosure;
mod keyboard;
mod settings;
mod skeleton;

pub use class_list::ClassList;
pub use disclosure::{
    default_render_expando, reduce_disclosure, AnimationPhase, DisclosureAction,
    DisclosureEffect, DisclosureGroup, DisclosureGroupSkeleton, DisclosureGroupSkeletonItem,
    DisclosurePanel, DisclosureState, ExpandoProps, HeadingClick, RenderExpando,
    DEFAULT_ICON_DESCRIPTION,
};
pub use keyboard::is_escape;
pub use settings::{provide_ui_settings, use_ui_settings, UiSettings, DEFAULT_PREFIX};
pub use skeleton::{
    generate_lines, layout_lines, CssLength, CssLengthError, CssUnit, SkeletonConfig,
    SkeletonLayout, SkeletonLine, SkeletonText, DEFAULT_LINE_COUNT, DEFAULT_WIDTH,
};

/// Convenience imports for crates composing these widgets.
pub mod prelude {
    pub use crate::{
        provide_ui_settings, DisclosureGroup, DisclosureGroupSkeleton, DisclosureGroupSkeletonItem,
        DisclosurePanel, ExpandoProps, HeadingClick, RenderExpando, SkeletonText, UiSettings,
    };
}
