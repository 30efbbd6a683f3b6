use log::warn;
use once_cell::sync::Lazy;
use syntect::{highlighting::ThemeSet, html::highlighted_html_for_string, parsing::SyntaxSet};

static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEMES: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const THEME: &str = "base16-ocean.dark";

/// Highlighted `<pre>` markup for a fenced block, or `None` when the
/// language is missing or unknown and the block should be shown as plain
/// text.
#[must_use]
pub fn highlight_code(code: &str, language: Option<&str>) -> Option<String> {
    let syntax = SYNTAXES.find_syntax_by_token(language?)?;
    let theme = THEMES.themes.get(THEME)?;
    match highlighted_html_for_string(code, &SYNTAXES, syntax, theme) {
        Ok(html) => Some(html),
        Err(err) => {
            warn!("Cannot highlight {} code: {err}", syntax.name);
            None
        }
    }
}
