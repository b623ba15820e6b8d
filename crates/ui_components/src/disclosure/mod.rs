//! Disclosure panels ("accordion items"), their list container, and its loading placeholder.

mod component;
mod placeholder;
mod state;

pub use component::{
    default_render_expando, DisclosureGroup, DisclosurePanel, ExpandoProps, HeadingClick,
    RenderExpando, DEFAULT_ICON_DESCRIPTION,
};
pub use placeholder::{DisclosureGroupSkeleton, DisclosureGroupSkeletonItem};
pub use state::{
    reduce_disclosure, AnimationPhase, DisclosureAction, DisclosureEffect, DisclosureState,
};
