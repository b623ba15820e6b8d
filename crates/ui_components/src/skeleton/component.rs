use leptos::*;

use super::lines::{
    layout_lines, SkeletonConfig, SkeletonLayout, SkeletonLine, DEFAULT_LINE_COUNT, DEFAULT_WIDTH,
};
use crate::settings::use_ui_settings;

fn line_view(line: SkeletonLine, attrs: &[(&'static str, Attribute)]) -> impl IntoView {
    let style = format!("width: {}", line.width);
    let attrs = attrs.to_vec();
    view! { <p class={line.class} style={style} {..attrs}></p> }
}

/// True when a paragraph request could not be jittered and renders as one line.
fn paragraph_fell_back(config: &SkeletonConfig, layout: &SkeletonLayout) -> bool {
    config.paragraph && matches!(layout, SkeletonLayout::Single(_))
}

#[component]
/// Loading placeholder for text: one bar, or a paragraph of bars with deterministic widths.
pub fn SkeletonText(
    #[prop(optional)] paragraph: bool,
    #[prop(default = DEFAULT_LINE_COUNT)] line_count: usize,
    #[prop(into, default = DEFAULT_WIDTH.to_string())] width: String,
    #[prop(optional)] heading: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let settings = use_ui_settings();
    let config = SkeletonConfig {
        paragraph,
        line_count,
        width,
        heading,
        class,
    };

    let layout = layout_lines(&config, &settings);
    if paragraph_fell_back(&config, &layout) {
        logging::debug_warn!(
            "skeleton width {:?} cannot be jittered; rendering a single line",
            config.width
        );
    }

    match layout {
        SkeletonLayout::Single(line) => line_view(line, &attrs).into_view(),
        SkeletonLayout::Paragraph(lines) => view! {
            <div>
                {lines
                    .into_iter()
                    .map(|line| line_view(line, &attrs))
                    .collect_view()}
            </div>
        }
        .into_view(),
    }
}
