//! Module content body parsing
//!
//! A content body is plain text with a few Markdown-like conventions: `#` headings,
//! `- ` bullet lists, fenced code blocks and fenced `mermaid` diagram descriptions.
//! Everything else is grouped into paragraphs.

/// Fence language that marks a diagram description
const DIAGRAM_LANGUAGE: &str = "mermaid";

/// A structural piece of a content body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with its HTML level (2 to 4; the page title is level 1)
    Heading(u8, String),
    /// Consecutive text lines joined by spaces
    Paragraph(String),
    /// Bullet list items
    List(Vec<String>),
    /// Code sample with its language tag (may be empty)
    Code(String, String),
    /// Chart description handed to the diagram script as-is
    Diagram(String),
}

impl Block {
    /// Returns `true` for diagram blocks
    #[must_use]
    pub const fn is_diagram(&self) -> bool {
        matches!(self, Self::Diagram(_))
    }
}

/// Split a content body into blocks, in order.
///
/// An unterminated fence runs to the end of the body.
#[must_use]
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Vec<String> = Vec::new();
    let mut lines = body.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim();

        if let Some(language) = trimmed.strip_prefix("```") {
            flush(&mut blocks, &mut paragraph, &mut list);
            let language = language.trim().to_string();
            let mut code = Vec::new();
            for inner in lines.by_ref() {
                if inner.trim_start().starts_with("```") {
                    break;
                }
                code.push(inner);
            }
            let code = code.join("\n");
            blocks.push(if language.eq_ignore_ascii_case(DIAGRAM_LANGUAGE) {
                Block::Diagram(code)
            } else {
                Block::Code(language, code)
            });
            continue;
        }

        if trimmed.is_empty() {
            flush(&mut blocks, &mut paragraph, &mut list);
        } else if let Some((level, text)) = heading(trimmed) {
            flush(&mut blocks, &mut paragraph, &mut list);
            blocks.push(Block::Heading(level, text.to_string()));
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            if !paragraph.is_empty() {
                blocks.push(Block::Paragraph(paragraph.join(" ")));
                paragraph.clear();
            }
            list.push(item.trim().to_string());
        } else {
            if !list.is_empty() {
                blocks.push(Block::List(std::mem::take(&mut list)));
            }
            paragraph.push(trimmed);
        }
    }

    flush(&mut blocks, &mut paragraph, &mut list);
    blocks
}

fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<&str>, list: &mut Vec<String>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(paragraph.join(" ")));
        paragraph.clear();
    }
    if !list.is_empty() {
        blocks.push(Block::List(std::mem::take(list)));
    }
}

/// `#` → h2, `##` → h3, deeper → h4
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?.trim();
    let level = match hashes {
        1 => 2,
        2 => 3,
        _ => 4,
    };
    Some((level, text))
}
