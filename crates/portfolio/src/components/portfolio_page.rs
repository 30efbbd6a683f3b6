use crate::{
    app::{AppState, Route},
    components::{filter_bar::FilterBar, page_meta::PageMeta, project_card::ProjectCard},
    filter::{FilterId, FilterOperator, FilterSet, FilterType, filter_projects},
};
use log::debug;
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Search text kept in the URL so a filtered view can be shared.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioQuery {
    pub q: Option<String>,
}

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    let app_state =
        use_context::<AppState>().expect("AppState context is set when starting the App");
    let location = use_location().expect("should be called inside a router");
    let navigator = use_navigator().expect("should be called inside a router");

    let query = location.query::<PortfolioQuery>().unwrap_or_default();
    let search = query.q.clone().unwrap_or_default();
    let filter_set = use_state(FilterSet::default);

    let on_search = {
        let navigator = navigator.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            let query = PortfolioQuery {
                q: (!text.is_empty()).then_some(text),
            };
            if let Err(err) = navigator.replace_with_query(&Route::Portfolio, &query) {
                debug!("Cannot update the search query: {err:?}");
            }
        })
    };

    let on_add = {
        let filter_set = filter_set.clone();
        Callback::from(move |(filter_type, value): (FilterType, String)| {
            let mut next = (*filter_set).clone();
            next.add(filter_type, vec![value]);
            filter_set.set(next);
        })
    };
    let on_tag = {
        let on_add = on_add.clone();
        Callback::from(move |tag: String| on_add.emit((FilterType::Tags, tag)))
    };
    let on_operator = {
        let filter_set = filter_set.clone();
        Callback::from(move |(id, operator): (FilterId, FilterOperator)| {
            let mut next = (*filter_set).clone();
            if next.set_operator(id, operator) {
                filter_set.set(next);
            }
        })
    };
    let on_remove = {
        let filter_set = filter_set.clone();
        Callback::from(move |id: FilterId| {
            let mut next = (*filter_set).clone();
            if next.remove(id).is_some() {
                filter_set.set(next);
            }
        })
    };
    let on_clear = {
        let filter_set = filter_set.clone();
        Callback::from(move |()| filter_set.set(FilterSet::default()))
    };

    let filters = filter_set.active_filters();
    let grid = match &app_state.projects {
        None => html! { <p>{"Loading projects..."}</p> },
        Some(projects) => {
            let shown = filter_projects(projects, &filters, &search);
            if shown.is_empty() {
                html! { <p class="empty">{"No projects match the current filters."}</p> }
            } else {
                html! {
                    <div class="project-grid">
                        { for shown.into_iter().map(|project| html! {
                            <ProjectCard
                                key={project.id.clone()}
                                project={project.clone()}
                                on_tag={on_tag.clone()}
                            />
                        }) }
                    </div>
                }
            }
        }
    };

    html! {
        <section class="portfolio">
            <PageMeta />
            <h1>{"Portfolio"}</h1>
            <input
                type="search"
                class="project-search"
                placeholder="Search projects..."
                value={search}
                oninput={on_search}
            />
            <FilterBar
                options={app_state.filter_options.clone()}
                {filters}
                {on_add}
                {on_operator}
                {on_remove}
                {on_clear}
            />
            { grid }
        </section>
    }
}
