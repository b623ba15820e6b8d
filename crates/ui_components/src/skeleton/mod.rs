//! Placeholder text shown while real content loads.

mod component;
mod lines;

pub use component::SkeletonText;
pub use lines::{
    generate_lines, layout_lines, CssLength, CssLengthError, CssUnit, SkeletonConfig,
    SkeletonLayout, SkeletonLine, DEFAULT_LINE_COUNT, DEFAULT_WIDTH,
};
