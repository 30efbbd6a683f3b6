/// Coarse structure of a post body. Inline markup stays in the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    Code { language: Option<String>, code: String },
    List(Vec<String>),
    Quote(String),
    YouTube { video_id: String, title: Option<String> },
}

#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    paragraph: Vec<String>,
    list: Vec<String>,
    quote: Vec<String>,
}

impl Builder {
    fn flush(&mut self) {
        if !self.paragraph.is_empty() {
            self.blocks
                .push(Block::Paragraph(self.paragraph.join(" ")));
            self.paragraph.clear();
        }
        if !self.list.is_empty() {
            self.blocks.push(Block::List(std::mem::take(&mut self.list)));
        }
        if !self.quote.is_empty() {
            self.blocks.push(Block::Quote(self.quote.join(" ")));
            self.quote.clear();
        }
    }

    fn push(&mut self, block: Block) {
        self.flush();
        self.blocks.push(block);
    }
}

/// Splits a Markdown/MDX body into headings, paragraphs, lists, quotes,
/// fenced code and `<YouTubeEmbed>` elements. `import`/`export` lines are
/// dropped.
#[must_use]
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let mut builder = Builder::default();
    let mut lines = body.lines();
    while let Some(line) = lines.next() {
        let trimmed = line.trim();
        if let Some(info) = trimmed.strip_prefix("```") {
            let language = info.trim();
            let language = (!language.is_empty()).then(|| language.to_string());
            let mut code = Vec::new();
            for line in lines.by_ref() {
                if line.trim_start().starts_with("```") {
                    break;
                }
                code.push(line);
            }
            builder.push(Block::Code {
                language,
                code: code.join("\n"),
            });
        } else if trimmed.is_empty() {
            builder.flush();
        } else if let Some(heading) = heading(trimmed) {
            builder.push(heading);
        } else if let Some(embed) = youtube_embed(trimmed) {
            builder.push(embed);
        } else if trimmed.starts_with("import ") || trimmed.starts_with("export ") {
            // MDX module syntax, nothing to show.
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            if !builder.paragraph.is_empty() || !builder.quote.is_empty() {
                builder.flush();
            }
            builder.list.push(item.trim().to_string());
        } else if let Some(quote) = trimmed.strip_prefix('>') {
            if !builder.paragraph.is_empty() || !builder.list.is_empty() {
                builder.flush();
            }
            builder.quote.push(quote.trim().to_string());
        } else {
            if !builder.list.is_empty() || !builder.quote.is_empty() {
                builder.flush();
            }
            builder.paragraph.push(trimmed.to_string());
        }
    }
    builder.flush();
    builder.blocks
}

fn heading(line: &str) -> Option<Block> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    let text = line[level..].strip_prefix(' ')?;
    (1..=6).contains(&level).then(|| Block::Heading {
        level: level as u8,
        text: text.trim().to_string(),
    })
}

fn youtube_embed(line: &str) -> Option<Block> {
    let attrs = line.strip_prefix("<YouTubeEmbed")?;
    Some(Block::YouTube {
        video_id: attribute(attrs, "videoId")?,
        title: attribute(attrs, "title"),
    })
}

fn attribute(attrs: &str, name: &str) -> Option<String> {
    let start = attrs.find(&format!("{name}=\""))? + name.len() + 2;
    let len = attrs[start..].find('"')?;
    Some(attrs[start..start + len].to_string())
}

/// Words in the prose and code of a body.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
