//! Line-oriented block grammar: fences, headings, lists, paragraphs.

use super::inline;
use super::types::{Block, ListKind, MalformedInput};

/// Carries the paragraph and list runs being accumulated while lines are
/// consumed, so every rule flushes pending state the same way.
#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    paragraph: Vec<String>,
    list: Option<(ListKind, Vec<String>)>,
}

impl Builder {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        self.blocks.push(Block::Paragraph {
            spans: inline::parse(&text),
        });
    }

    fn flush_list(&mut self) {
        if let Some((kind, items)) = self.list.take() {
            self.blocks.push(Block::List { kind, items });
        }
    }

    fn flush_all(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn push_heading(&mut self, level: u8, text: &str) {
        self.flush_all();
        self.blocks.push(Block::Heading {
            level,
            spans: inline::parse(text.trim()),
        });
    }

    fn push_list_item(&mut self, kind: ListKind, item: &str) {
        self.flush_paragraph();
        match &mut self.list {
            Some((current, items)) if *current == kind => items.push(item.to_string()),
            _ => {
                // A different kind starts a new list node.
                self.flush_list();
                self.list = Some((kind, vec![item.to_string()]));
            }
        }
    }

    fn push_paragraph_line(&mut self, line: &str) {
        self.flush_list();
        self.paragraph.push(line.trim().to_string());
    }
}

pub(super) fn parse(input: &str) -> Result<Vec<Block>, MalformedInput> {
    let lines: Vec<&str> = input.lines().collect();
    let mut builder = Builder::default();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];

        if let Some(tag) = fence_marker(line) {
            builder.flush_all();
            let opened_at = index + 1;
            let language = match tag.trim() {
                "" => None,
                tag => Some(tag.to_string()),
            };

            let mut code_lines: Vec<&str> = Vec::new();
            index += 1;
            loop {
                match lines.get(index) {
                    None => return Err(MalformedInput::UnterminatedFence { opened_at }),
                    Some(line) if fence_marker(line).is_some() => break,
                    Some(line) => {
                        code_lines.push(line);
                        index += 1;
                    }
                }
            }

            builder.blocks.push(Block::Code {
                language,
                code: code_lines.join("\n"),
            });
            index += 1;
            continue;
        }

        if let Some((level, text)) = heading_marker(line) {
            builder.push_heading(level, text);
        } else if let Some(item) = line.strip_prefix("- ") {
            builder.push_list_item(ListKind::Bulleted, item.trim());
        } else if let Some(item) = numbered_marker(line) {
            builder.push_list_item(ListKind::Numbered, item.trim());
        } else if line.trim().is_empty() {
            builder.flush_all();
        } else {
            builder.push_paragraph_line(line);
        }

        index += 1;
    }

    builder.flush_all();
    Ok(builder.blocks)
}

/// A fence line is one whose trimmed content starts with ```; the remainder
/// of an opening fence line is its language tag.
fn fence_marker(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix("```")
}

/// Highest specificity first so `###` is never read as `#` + text.
fn heading_marker(line: &str) -> Option<(u8, &str)> {
    line.strip_prefix("### ")
        .map(|text| (3, text))
        .or_else(|| line.strip_prefix("## ").map(|text| (2, text)))
        .or_else(|| line.strip_prefix("# ").map(|text| (1, text)))
}

/// One or more ASCII digits followed by `. `.
fn numbered_marker(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}
