use crate::{
    app::AppState,
    seo::{OpenGraph, apply_document_title, apply_head, meta_for_path},
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageMetaProps {
    /// Overrides the title derived from the route.
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

/// Keeps the tab title, canonical link and social card tags in sync with
/// the current route.
#[function_component(PageMeta)]
pub fn page_meta(PageMetaProps { title }: &PageMetaProps) -> Html {
    let app_state =
        use_context::<AppState>().expect("AppState context is set when starting the App");
    let location = use_location().expect("should be called inside a router");
    let path = location.path().to_string();

    use_effect_with((path, title.clone()), move |(path, title)| {
        let site = &app_state.config.site;
        let mut meta = meta_for_path(site, path);
        if let Some(title) = title {
            meta.title = Some(title.to_string());
        }
        let og = OpenGraph::build(site, path, &meta);
        apply_document_title(&og.document_title(site));
        apply_head(&og);
    });

    html! {}
}
