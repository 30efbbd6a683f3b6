use crate::pattern::{DEFAULT_SIZE, PatternStyle, SharedPatternCache, data_uri};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GeometricIconProps {
    pub seed: AttrValue,
    #[prop_or(DEFAULT_SIZE)]
    pub size: u32,
    #[prop_or_default]
    pub pattern_style: PatternStyle,
    #[prop_or_default]
    pub class: Classes,
}

/// Generated artwork for `seed`, painted as a background image so it fills
/// whatever box the caller gives it.
#[function_component(GeometricIcon)]
pub fn geometric_icon(
    GeometricIconProps {
        seed,
        size,
        pattern_style,
        class,
    }: &GeometricIconProps,
) -> Html {
    let cache = use_context::<SharedPatternCache>();
    let uri = use_memo(
        (seed.clone(), *size, *pattern_style),
        move |(seed, size, style)| match cache {
            Some(cache) => cache.data_uri(seed, *size, *style).to_string(),
            None => data_uri(seed, *size, *style),
        },
    );

    html! {
        <div
            class={classes!("geometric-icon", class.clone())}
            role="img"
            aria-label={seed.clone()}
            style={format!(
                "background-image: url(\"{uri}\"); background-size: cover; background-position: center;"
            )}
        />
    }
}
