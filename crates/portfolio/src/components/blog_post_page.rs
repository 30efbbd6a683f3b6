use crate::{
    app::{AppState, Route},
    blog::Block,
    components::{code_block::CodeBlock, page_meta::PageMeta},
    util::time::format_date,
};
use yew::prelude::*;
use yew_router::prelude::*;

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading { level, text } => {
            let tag = format!("h{level}");
            html! { <@{tag}>{ text }</@> }
        }
        Block::Paragraph(text) => html! { <p>{ text }</p> },
        Block::Code { language, code } => html! {
            <CodeBlock
                code={AttrValue::from(code.clone())}
                language={language.clone().map(AttrValue::from)}
            />
        },
        Block::List(items) => html! {
            <ul>{ for items.iter().map(|item| html! { <li>{ item }</li> }) }</ul>
        },
        Block::Quote(text) => html! { <blockquote>{ text }</blockquote> },
        Block::YouTube { video_id, title } => html! {
            <div class="video-embed">
                <iframe
                    src={format!("https://www.youtube.com/embed/{video_id}")}
                    title={title.clone().unwrap_or_else(|| "YouTube video".to_string())}
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                />
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(BlogPostPageProps { slug }: &BlogPostPageProps) -> Html {
    let app_state =
        use_context::<AppState>().expect("AppState context is set when starting the App");
    let post = use_memo((app_state.blog.clone(), slug.clone()), |(blog, slug)| {
        blog.get_or_not_found(slug)
    });
    let blocks = use_memo(post.clone(), |post| post.blocks());

    html! {
        <article class="blog-post">
            <PageMeta title={AttrValue::from(post.title.clone())} />
            <Link<Route> to={Route::Blog} classes="back-link">{"← All posts"}</Link<Route>>
            <header>
                <h1>{ &post.title }</h1>
                <div class="post-meta">
                    if let Some(date) = post.date {
                        <time datetime={date.to_string()}>{ format_date(date) }</time>
                        {" · "}
                    }
                    <span>{ post.reading_time().to_string() }</span>
                </div>
                if !post.tags.is_empty() {
                    <ul class="tag-list">
                        { for post.tags.iter().map(|tag| html! { <li class="tag">{ tag }</li> }) }
                    </ul>
                }
            </header>
            <div class="post-body">
                { for blocks.iter().map(render_block) }
            </div>
        </article>
    }
}
