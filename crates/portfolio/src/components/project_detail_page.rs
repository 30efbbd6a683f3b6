use crate::{
    app::{AppState, Route},
    components::{geometric_icon::GeometricIcon, not_found::NotFound, page_meta::PageMeta},
    project::find_project,
    util::{
        color::{category_swatch, tag_swatch},
        time::format_date,
    },
};
use yew::prelude::*;
use yew_router::prelude::*;

const DETAIL_ICON_SIZE: u32 = 320;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailPageProps {
    pub id: String,
}

#[function_component(ProjectDetailPage)]
pub fn project_detail_page(ProjectDetailPageProps { id }: &ProjectDetailPageProps) -> Html {
    let app_state =
        use_context::<AppState>().expect("AppState context is set when starting the App");

    let Some(projects) = &app_state.projects else {
        return html! { <p>{"Loading project..."}</p> };
    };
    let Some(project) = find_project(projects, id) else {
        return html! { <NotFound /> };
    };

    let categories = project.category.iter().map(|category| {
        html! {
            <span class="badge" style={format!("background-color: {}", category_swatch(category))}>
                { category }
            </span>
        }
    });
    let tags = project.tags.iter().map(|tag| {
        html! { <span class="tag" style={format!("border-color: {}", tag_swatch(tag))}>{ tag }</span> }
    });

    html! {
        <article class="project-detail">
            <PageMeta />
            <Link<Route> to={Route::Portfolio} classes="back-link">{"← All projects"}</Link<Route>>
            <GeometricIcon
                seed={AttrValue::from(project.title.clone())}
                size={DETAIL_ICON_SIZE}
                class="project-hero"
            />
            <h1>{ &project.title }</h1>
            <div class="project-meta">
                <span>{ format!("by {}", project.owner) }</span>
                <span>{ format_date(project.date.date_naive()) }</span>
                <span>{ &project.language }</span>
                <span>{ format!("★ {}", project.stars) }</span>
            </div>
            <div class="category-list">{ for categories }</div>
            <p class="project-description">{ &project.description }</p>
            <div class="tag-list">{ for tags }</div>
            <div class="project-links">
                if let Some(repo) = project.repo_link() {
                    <a href={repo.to_string()} target="_blank" rel="noopener noreferrer">{"View source"}</a>
                }
                if let Some(demo) = &project.demo_url {
                    <a href={demo.clone()} target="_blank" rel="noopener noreferrer">{"Live demo"}</a>
                }
            </div>
        </article>
    }
}
