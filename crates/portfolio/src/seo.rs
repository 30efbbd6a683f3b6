//! Page titles and social card metadata.

use crate::{config::SiteMeta, util::encode::encode_uri_component};
use itertools::Itertools as _;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlHeadElement};

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const TWITTER_CARD: &str = "summary_large_image";

/// Per-page overrides of the site defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image_alt: Option<String>,
}

impl RouteMeta {
    fn new(title: Option<&str>, description: &str, og_image_alt: &str) -> Self {
        Self {
            title: title.map(ToString::to_string),
            description: Some(description.to_string()),
            og_image_alt: Some(og_image_alt.to_string()),
        }
    }
}

/// `building-a-blog` becomes `Building A Blog`.
#[must_use]
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .join(" ")
}

#[must_use]
pub fn meta_for_path(site: &SiteMeta, path: &str) -> RouteMeta {
    match path {
        "/" => RouteMeta::new(None, &site.description, "Home"),
        "/blog" => RouteMeta::new(
            Some("Blog"),
            "Thoughts, tutorials, and insights on web development, blockchain, AI and memes.",
            "Blog",
        ),
        "/portfolio" => RouteMeta::new(
            Some("Portfolio"),
            "Selected projects and case studies.",
            "Portfolio",
        ),
        "/contact" => RouteMeta::new(Some("Contact"), "Get in touch with Joseph.", "Contact"),
        _ => {
            if let Some(rest) = path.strip_prefix("/blog/") {
                let title = title_case_slug(rest.split('/').next().unwrap_or_default());
                RouteMeta::new(Some("Blog"), &title, &title)
            } else if path.starts_with("/portfolio/") {
                RouteMeta::new(
                    Some("Project"),
                    "Project details and write-up",
                    "Project Details",
                )
            } else {
                RouteMeta::default()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Resolved metadata of one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenGraph {
    pub canonical: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub locale: String,
    pub keywords: String,
    pub image: OgImage,
    pub twitter_card: &'static str,
}

/// Whether a `<meta>` tag is keyed by `name` or by `property`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum MetaKey {
    #[display("name")]
    Name,
    #[display("property")]
    Property,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub name: &'static str,
    pub content: String,
}

impl MetaTag {
    fn new(key: MetaKey, name: &'static str, content: impl ToString) -> Self {
        Self {
            key,
            name,
            content: content.to_string(),
        }
    }
}

impl OpenGraph {
    #[must_use]
    pub fn build(site: &SiteMeta, path: &str, meta: &RouteMeta) -> Self {
        let title = meta.title.clone().unwrap_or_else(|| site.title.clone());
        let description = meta
            .description
            .clone()
            .unwrap_or_else(|| site.description.clone());
        let alt = meta
            .og_image_alt
            .clone()
            .or_else(|| meta.title.clone())
            .unwrap_or_else(|| site.title.clone());
        let image_url = format!(
            "{}/api/og?title={}&description={}",
            site.url,
            encode_uri_component(&title),
            encode_uri_component(&description)
        );
        Self {
            canonical: format!("{}{path}", site.url),
            site_name: site.site_name.clone(),
            locale: site.locale.clone(),
            keywords: site.keywords.clone(),
            image: OgImage {
                url: image_url,
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt,
            },
            twitter_card: TWITTER_CARD,
            title,
            description,
        }
    }

    #[must_use]
    pub fn for_path(site: &SiteMeta, path: &str) -> Self {
        Self::build(site, path, &meta_for_path(site, path))
    }

    /// Text for the browser tab.
    #[must_use]
    pub fn document_title(&self, site: &SiteMeta) -> String {
        if self.title == site.title {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, site.title)
        }
    }

    /// `<meta>` tags of the document head, in the order they are written.
    #[must_use]
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        use MetaKey::{Name, Property};
        vec![
            MetaTag::new(Name, "description", &self.description),
            MetaTag::new(Name, "keywords", &self.keywords),
            MetaTag::new(Property, "og:type", "website"),
            MetaTag::new(Property, "og:url", &self.canonical),
            MetaTag::new(Property, "og:site_name", &self.site_name),
            MetaTag::new(Property, "og:title", &self.title),
            MetaTag::new(Property, "og:description", &self.description),
            MetaTag::new(Property, "og:locale", &self.locale),
            MetaTag::new(Property, "og:image", &self.image.url),
            MetaTag::new(Property, "og:image:width", self.image.width),
            MetaTag::new(Property, "og:image:height", self.image.height),
            MetaTag::new(Property, "og:image:alt", &self.image.alt),
            MetaTag::new(Name, "twitter:card", self.twitter_card),
            MetaTag::new(Name, "twitter:title", &self.title),
            MetaTag::new(Name, "twitter:description", &self.description),
            MetaTag::new(Name, "twitter:image", &self.image.url),
        ]
    }
}

/// Updates the tab title of the running page.
pub fn apply_document_title(title: &str) {
    gloo::utils::document().set_title(title);
}

/// Finds the head element matching `selector`, creating a `tag` element
/// when there is none, and sets `attributes` on it.
fn upsert_head_element(
    document: &Document,
    head: &HtmlHeadElement,
    tag: &str,
    selector: &str,
    attributes: &[(&str, &str)],
) -> Result<Element, JsValue> {
    let element = match head.query_selector(selector)? {
        Some(element) => element,
        None => {
            let element = document.create_element(tag)?;
            head.append_child(&element)?;
            element
        }
    };
    for (name, value) in attributes {
        element.set_attribute(name, value)?;
    }
    Ok(element)
}

/// Writes the canonical link and every [`OpenGraph::meta_tags`] entry into
/// the document head, replacing the values of a previous page.
pub fn apply_head(og: &OpenGraph) {
    let document = gloo::utils::document();
    let Some(head) = document.head() else {
        warn!("Document has no head, skipping page metadata");
        return;
    };
    if let Err(err) = upsert_head_element(
        &document,
        &head,
        "link",
        r#"link[rel="canonical"]"#,
        &[("rel", "canonical"), ("href", og.canonical.as_str())],
    ) {
        warn!("Cannot set the canonical link: {err:?}");
    }
    for tag in og.meta_tags() {
        let key = tag.key.to_string();
        let selector = format!(r#"meta[{key}="{}"]"#, tag.name);
        if let Err(err) = upsert_head_element(
            &document,
            &head,
            "meta",
            &selector,
            &[(key.as_str(), tag.name), ("content", tag.content.as_str())],
        ) {
            warn!("Cannot set meta tag {}: {err:?}", tag.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn site() -> SiteMeta {
        SiteMeta {
            title: "Joseph Chalabi".to_string(),
            site_name: "jchalabi.xyz".to_string(),
            description: "Portfolio website showcasing my projects and skills".to_string(),
            url: "https://jchalabi.xyz".to_string(),
            locale: "en_US".to_string(),
            keywords: "rust".to_string(),
        }
    }

    #[rstest]
    #[case("hello-world", "Hello World")]
    #[case("building-a-blog-with-rust", "Building A Blog With Rust")]
    #[case("single", "Single")]
    #[case("trailing-", "Trailing ")]
    fn slugs_are_title_cased(#[case] slug: &str, #[case] expected: &str) {
        assert_eq!(expected, title_case_slug(slug));
    }

    #[test]
    fn blog_post_meta_uses_the_slug() {
        let meta = meta_for_path(&site(), "/blog/hello-world");
        assert_eq!(Some("Blog"), meta.title.as_deref());
        assert_eq!(Some("Hello World"), meta.description.as_deref());
    }

    #[test]
    fn blog_prefix_without_slug_has_an_empty_description() {
        let meta = meta_for_path(&site(), "/blog/");
        assert_eq!(Some("Blog"), meta.title.as_deref());
        assert_eq!(Some(""), meta.description.as_deref());
        assert_eq!(Some(""), meta.og_image_alt.as_deref());
    }

    #[rstest]
    #[case("/portfolio/LFP", Some("Project"))]
    #[case("/portfolio", Some("Portfolio"))]
    #[case("/contact", Some("Contact"))]
    #[case("/", None)]
    #[case("/unknown", None)]
    #[case("/blog/", Some("Blog"))]
    #[case("/portfolio/", Some("Project"))]
    fn route_titles(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(expected, meta_for_path(&site(), path).title.as_deref());
    }

    #[test]
    fn open_graph_for_blog() {
        let og = OpenGraph::for_path(&site(), "/blog");
        assert_eq!("https://jchalabi.xyz/blog", og.canonical);
        assert_eq!(
            "https://jchalabi.xyz/api/og?title=Blog&description=Thoughts%2C%20tutorials%2C%20and%20insights%20on%20web%20development%2C%20blockchain%2C%20AI%20and%20memes.",
            og.image.url
        );
        assert_eq!((1200, 630), (og.image.width, og.image.height));
        assert_eq!("summary_large_image", og.twitter_card);
        assert_eq!("Blog | Joseph Chalabi", og.document_title(&site()));
    }

    #[test]
    fn defaults_fill_an_unknown_route() {
        let og = OpenGraph::for_path(&site(), "/nowhere");
        assert_eq!("Joseph Chalabi", og.title);
        assert_eq!("Joseph Chalabi", og.image.alt);
        assert_eq!(site().description, og.description);
        assert_eq!("Joseph Chalabi", og.document_title(&site()));
    }

    #[test]
    fn head_tags_cover_open_graph_and_twitter() {
        let og = OpenGraph::for_path(&site(), "/contact");
        let tags = og.meta_tags();
        let find = |key: MetaKey, name: &str| {
            tags.iter()
                .find(|tag| tag.key == key && tag.name == name)
                .map(|tag| tag.content.as_str())
        };
        assert_eq!(Some("rust"), find(MetaKey::Name, "keywords"));
        assert_eq!(Some("Get in touch with Joseph."), find(MetaKey::Name, "description"));
        assert_eq!(Some("website"), find(MetaKey::Property, "og:type"));
        assert_eq!(
            Some("https://jchalabi.xyz/contact"),
            find(MetaKey::Property, "og:url")
        );
        assert_eq!(Some("jchalabi.xyz"), find(MetaKey::Property, "og:site_name"));
        assert_eq!(Some("Contact"), find(MetaKey::Property, "og:title"));
        assert_eq!(Some("en_US"), find(MetaKey::Property, "og:locale"));
        assert_eq!(Some(og.image.url.as_str()), find(MetaKey::Property, "og:image"));
        assert_eq!(Some("1200"), find(MetaKey::Property, "og:image:width"));
        assert_eq!(Some("630"), find(MetaKey::Property, "og:image:height"));
        assert_eq!(Some("Contact"), find(MetaKey::Property, "og:image:alt"));
        assert_eq!(
            Some("summary_large_image"),
            find(MetaKey::Name, "twitter:card")
        );
        assert_eq!(Some("Contact"), find(MetaKey::Name, "twitter:title"));
        assert_eq!(Some(og.image.url.as_str()), find(MetaKey::Name, "twitter:image"));
        assert_eq!(None, find(MetaKey::Property, "twitter:card"));
        assert_eq!("property", MetaKey::Property.to_string());
    }
}
