use crate::{
    app::{AppState, Route},
    blog::Post,
    components::page_meta::PageMeta,
    util::time::format_date,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PostSummaryProps {
    pub post: Post,
}

/// One row of a post listing: title, date, reading time and description.
#[function_component(PostSummary)]
pub fn post_summary(PostSummaryProps { post }: &PostSummaryProps) -> Html {
    html! {
        <li class="post-summary">
            <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }}>
                <h3>{ &post.title }</h3>
            </Link<Route>>
            <div class="post-meta">
                if let Some(date) = post.date {
                    <time datetime={date.to_string()}>{ format_date(date) }</time>
                    {" · "}
                }
                <span>{ post.reading_time().to_string() }</span>
            </div>
            if !post.description.is_empty() {
                <p>{ &post.description }</p>
            }
        </li>
    }
}

#[function_component(BlogListPage)]
pub fn blog_list_page() -> Html {
    let app_state =
        use_context::<AppState>().expect("AppState context is set when starting the App");
    let posts = app_state.blog.posts();

    html! {
        <section class="blog-list">
            <PageMeta />
            <h1>{"Blog"}</h1>
            if posts.is_empty() {
                <p>{"No posts yet."}</p>
            } else {
                <ul class="post-list">
                    { for posts.iter().map(|post| html! { <PostSummary post={post.clone()} key={post.slug.clone()} /> }) }
                </ul>
            }
        </section>
    }
}
