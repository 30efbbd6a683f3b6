//! Blog posts compiled into the site: frontmatter, slugs, ordering and
//! the block structure the post page renders.

mod content;
mod frontmatter;
mod highlight;

pub use content::{Block, parse_blocks, word_count};
pub use frontmatter::{Frontmatter, split_frontmatter};
pub use highlight::highlight_code;

use chrono::NaiveDate;
use log::{error, warn};
use std::cmp::Reverse;

const WORDS_PER_MINUTE: usize = 200;
const UNTITLED: &str = "Untitled";

const EMBEDDED_POSTS: &[(&str, &str)] = &[
    (
        "posts/hello-world.mdx",
        include_str!("../../content/posts/hello-world.mdx"),
    ),
    (
        "posts/building-a-blog-with-rust.mdx",
        include_str!("../../content/posts/building-a-blog-with-rust.mdx"),
    ),
    (
        "posts/procedural-icons.mdx",
        include_str!("../../content/posts/procedural-icons.mdx"),
    ),
];

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("post `{slug}` has malformed frontmatter: {source}")]
    Frontmatter {
        slug: String,
        source: serde_yaml::Error,
    },
    #[error("post `{slug}` has an unreadable date `{date}`")]
    Date { slug: String, date: String },
}

/// Last path segment without the `.mdx`/`.md` extension.
#[must_use]
pub fn slug_from_path(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.strip_suffix(".mdx")
        .or_else(|| name.strip_suffix(".md"))
        .unwrap_or(name)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
#[display("{_0} min read")]
pub struct ReadingTime(usize);

impl ReadingTime {
    #[must_use]
    pub fn minutes(self) -> usize {
        self.0
    }
}

/// One minute per started 200 words, never less than a minute.
#[must_use]
pub fn reading_time(text: &str) -> ReadingTime {
    ReadingTime(word_count(text).div_ceil(WORDS_PER_MINUTE).max(1))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// `None` when the frontmatter has no date.
    pub date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub published: bool,
    pub body: String,
}

impl Post {
    pub fn parse(path: &str, source: &str) -> Result<Self, BlogError> {
        let slug = slug_from_path(path).to_string();
        let (yaml, body) = split_frontmatter(source);
        let frontmatter =
            Frontmatter::parse(yaml.unwrap_or_default()).map_err(|source| {
                BlogError::Frontmatter {
                    slug: slug.clone(),
                    source,
                }
            })?;
        let title = frontmatter.title.unwrap_or_else(|| {
            warn!("Post {slug} is missing a title");
            UNTITLED.to_string()
        });
        let date = match frontmatter.date {
            Some(date) => Some(
                frontmatter::parse_date(&date).ok_or_else(|| BlogError::Date {
                    slug: slug.clone(),
                    date,
                })?,
            ),
            None => {
                warn!("Post {slug} is missing a date");
                None
            }
        };
        Ok(Self {
            title,
            description: frontmatter.description,
            date,
            tags: frontmatter.tags,
            published: frontmatter.published,
            body: body.to_string(),
            slug,
        })
    }

    /// Placeholder shown for a slug without a post.
    #[must_use]
    pub fn not_found(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: "Post Not Found".to_string(),
            description: "The requested post could not be found.".to_string(),
            date: None,
            tags: Vec::new(),
            published: false,
            body: "The post you're looking for doesn't exist or has been removed.".to_string(),
        }
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    #[must_use]
    pub fn reading_time(&self) -> ReadingTime {
        reading_time(&self.body)
    }

    #[must_use]
    pub fn blocks(&self) -> Vec<Block> {
        parse_blocks(&self.body)
    }
}

/// Published posts, newest first. Undated posts come last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogIndex {
    posts: Vec<Post>,
}

impl BlogIndex {
    /// Posts that fail to parse are logged and left out.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut posts: Vec<Post> = sources
            .into_iter()
            .filter_map(|(path, source)| match Post::parse(path, source) {
                Ok(post) => Some(post),
                Err(err) => {
                    error!("Skipping {path}: {err}");
                    None
                }
            })
            .filter(|post| post.published)
            .collect();
        posts.sort_by_key(|post| Reverse(post.date));
        Self { posts }
    }

    /// The posts shipped with the site.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_sources(EMBEDDED_POSTS.iter().copied())
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    #[must_use]
    pub fn get_or_not_found(&self, slug: &str) -> Post {
        self.get(slug)
            .cloned()
            .unwrap_or_else(|| Post::not_found(slug))
    }

    pub fn latest(&self, count: usize) -> impl Iterator<Item = &Post> {
        self.posts.iter().take(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case("content/posts/hello-world.mdx", "hello-world")]
    #[case("posts/notes.md", "notes")]
    #[case("plain", "plain")]
    #[case("a/b/c.txt", "c.txt")]
    fn slugs(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(expected, slug_from_path(path));
    }

    #[rstest]
    #[case("", 1)]
    #[case("word", 1)]
    #[case(&"w ".repeat(200), 1)]
    #[case(&"w ".repeat(201), 2)]
    #[case(&"w ".repeat(1000), 5)]
    fn reading_times(#[case] text: &str, #[case] minutes: usize) {
        assert_eq!(minutes, reading_time(text).minutes());
    }

    #[test]
    fn reading_time_label() {
        assert_eq!("3 min read", reading_time(&"w ".repeat(450)).to_string());
    }

    #[test]
    fn parses_full_post() {
        let post = Post::parse(
            "posts/first.mdx",
            "---\ntitle: First\ndescription: Hello\ndate: 2024-03-01\ntags: [rust, wasm]\n---\n# Heading\n",
        )
        .unwrap();
        assert_eq!("first", post.slug);
        assert_eq!("/blog/first", post.url());
        assert_eq!("First", post.title);
        assert_eq!(NaiveDate::from_ymd_opt(2024, 3, 1), post.date);
        assert_eq!(vec!["rust", "wasm"], post.tags);
        assert!(post.published);
        assert_eq!("# Heading\n", post.body);
    }

    #[test]
    fn missing_fields_get_defaults() {
        let post = Post::parse("posts/bare.md", "Just text").unwrap();
        assert_eq!(UNTITLED, post.title);
        assert_eq!(None, post.date);
        assert_eq!("", post.description);
        assert_eq!("Just text", post.body);
    }

    #[test]
    fn bad_input_is_reported() {
        assert_matches!(
            Post::parse("posts/x.mdx", "---\ndate: someday\n---\n"),
            Err(BlogError::Date { slug, date }) if slug == "x" && date == "someday"
        );
        assert_matches!(
            Post::parse("posts/y.mdx", "---\ntags: [oops\n---\n"),
            Err(BlogError::Frontmatter { slug, .. }) if slug == "y"
        );
    }

    #[test]
    fn index_orders_and_hides_drafts() {
        let index = BlogIndex::from_sources([
            ("posts/old.mdx", "---\ntitle: Old\ndate: 2022-01-01\n---\n"),
            ("posts/undated.mdx", "---\ntitle: Undated\n---\n"),
            ("posts/new.mdx", "---\ntitle: New\ndate: 2024-01-01\n---\n"),
            (
                "posts/draft.mdx",
                "---\ntitle: Draft\ndate: 2025-01-01\npublished: false\n---\n",
            ),
            ("posts/broken.mdx", "---\ndate: nope\n---\n"),
        ]);
        let slugs: Vec<_> = index.posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(vec!["new", "old", "undated"], slugs);
        assert!(index.get("draft").is_none());
        assert_eq!("Post Not Found", index.get_or_not_found("draft").title);
        assert_eq!(1, index.latest(1).count());
    }

    #[test]
    fn embedded_posts_parse() {
        let index = BlogIndex::embedded();
        assert_eq!(EMBEDDED_POSTS.len(), index.posts().len());
        assert!(index.posts().iter().all(|post| post.date.is_some()));
        assert!(index.get("hello-world").is_some());
    }
}
