use crate::{
    app::Route,
    components::geometric_icon::GeometricIcon,
    project::Project,
    util::{color::tag_swatch, time::format_month_year},
};
use yew::prelude::*;
use yew_router::prelude::*;

const CARD_ICON_SIZE: u32 = 120;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    /// Clicking a tag adds a tag filter when set.
    #[prop_or_default]
    pub on_tag: Option<Callback<String>>,
}

#[function_component(ProjectCard)]
pub fn project_card(ProjectCardProps { project, on_tag }: &ProjectCardProps) -> Html {
    let tags = project.tags.iter().map(|tag| {
        let style = format!("border-color: {}", tag_swatch(tag));
        match on_tag {
            Some(on_tag) => {
                let onclick = {
                    let on_tag = on_tag.clone();
                    let tag = tag.clone();
                    Callback::from(move |_: MouseEvent| on_tag.emit(tag.clone()))
                };
                html! { <button class="tag" {style} {onclick}>{ tag }</button> }
            }
            None => html! { <span class="tag" {style}>{ tag }</span> },
        }
    });

    html! {
        <div class={classes!("project-card", project.featured.then_some("featured"))}>
            <GeometricIcon
                seed={AttrValue::from(project.title.clone())}
                size={CARD_ICON_SIZE}
                class="project-icon"
            />
            <div class="project-body">
                <div class="project-heading">
                    <Link<Route> to={Route::Project { id: project.route_key().to_string() }}>
                        <h3>{ &project.title }</h3>
                    </Link<Route>>
                    if project.featured {
                        <span class="badge featured-badge">{"Featured"}</span>
                    }
                    if project.is_private {
                        <span class="badge private-badge">{"Private"}</span>
                    }
                </div>
                <p class="project-description">{ &project.description }</p>
                <div class="project-meta">
                    <span>{ &project.language }</span>
                    <span>{ format!("★ {}", project.stars) }</span>
                    <span>{ format_month_year(project.date.date_naive()) }</span>
                </div>
                <div class="tag-list">{ for tags }</div>
                <div class="project-links">
                    if let Some(repo) = project.repo_link() {
                        <a href={repo.to_string()} target="_blank" rel="noopener noreferrer">{"Code"}</a>
                    }
                    if let Some(demo) = &project.demo_url {
                        <a href={demo.clone()} target="_blank" rel="noopener noreferrer">{"Demo"}</a>
                    }
                </div>
            </div>
        </div>
    }
}
