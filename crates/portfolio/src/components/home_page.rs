use crate::{
    app::{AppState, Route},
    components::{blog_list_page::PostSummary, page_meta::PageMeta, project_card::ProjectCard},
};
use yew::prelude::*;
use yew_router::prelude::*;

const LATEST_POSTS: usize = 3;
const FEATURED_PROJECTS: usize = 6;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let app_state =
        use_context::<AppState>().expect("AppState context is set when starting the App");
    let site = &app_state.config.site;

    let featured = match &app_state.projects {
        None => html! { <p>{"Loading projects..."}</p> },
        Some(projects) => html! {
            <div class="project-grid">
                { for projects
                    .iter()
                    .filter(|project| project.featured)
                    .take(FEATURED_PROJECTS)
                    .map(|project| html! {
                        <ProjectCard key={project.id.clone()} project={project.clone()} />
                    }) }
            </div>
        },
    };

    html! {
        <section class="home">
            <PageMeta />
            <header class="hero">
                <h1>{ &site.title }</h1>
                <p>{ &site.description }</p>
            </header>
            <h2>{"Featured projects"}</h2>
            { featured }
            <Link<Route> to={Route::Portfolio}>{"See all projects →"}</Link<Route>>
            <h2>{"Latest posts"}</h2>
            <ul class="post-list">
                { for app_state.blog.latest(LATEST_POSTS).map(|post| html! {
                    <PostSummary key={post.slug.clone()} post={post.clone()} />
                }) }
            </ul>
            <Link<Route> to={Route::Blog}>{"Read the blog →"}</Link<Route>>
        </section>
    }
}
