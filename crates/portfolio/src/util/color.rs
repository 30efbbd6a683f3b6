use std::borrow::Cow;

/// Color derived from the sum of the string's UTF-16 code units, so a tag
/// keeps its swatch across reloads.
#[must_use]
pub fn hashed_swatch(s: &str) -> String {
    let sum: u32 = s.encode_utf16().map(u32::from).sum();
    format!("hsl({}, 70%, 60%)", sum % 360)
}

/// Swatch shown next to a tag. Common languages and ecosystems get fixed
/// colors.
#[must_use]
pub fn tag_swatch(tag: &str) -> Cow<'static, str> {
    let fixed = match tag {
        "TypeScript" | "Typescript" => "#3b82f6",
        "JavaScript" | "Javascript" => "#facc15",
        "Python" => "#22c55e",
        "Rust" => "#ea580c",
        "Go" => "#06b6d4",
        "React" => "#60a5fa",
        "Next.js" => "#000000",
        "Blockchain" => "#c084fc",
        "Cosmos" => "#6366f1",
        _ => return Cow::Owned(hashed_swatch(tag)),
    };
    Cow::Borrowed(fixed)
}

#[must_use]
pub fn category_swatch(category: &str) -> &'static str {
    match category {
        "frontend" => "#6366f1",
        "backend" => "#16a34a",
        "infrastructure" => "#d97706",
        "AI" => "#9333ea",
        _ => "#3b82f6",
    }
}

#[must_use]
pub fn featured_swatch(featured: bool) -> &'static str {
    if featured { "#eab308" } else { "#71717a" }
}
