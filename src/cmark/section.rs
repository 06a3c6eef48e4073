use pulldown_cmark::{Event, HeadingLevel, Tag};
use std::{iter::Peekable, ops::Range, vec::IntoIter};

use super::CMarkParser;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SectionLevel {
    #[default]
    H1 = 1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl From<HeadingLevel> for SectionLevel {
    fn from(value: HeadingLevel) -> Self {
        match value {
            HeadingLevel::H1 => SectionLevel::H1,
            HeadingLevel::H2 => SectionLevel::H2,
            HeadingLevel::H3 => SectionLevel::H3,
            HeadingLevel::H4 => SectionLevel::H4,
            HeadingLevel::H5 => SectionLevel::H5,
            HeadingLevel::H6 => SectionLevel::H6,
        }
    }
}

/// A `Section` represents all text following a heading in a document.
/// Any headings that have a lower-level than the `Section` that follow the section
/// will be nested inside this section. Any `Section` with the same level as the
/// current section will be a sibling section in the parent `Section` or `Outline`.
///
/// Section text is borrowed straight from the source, so list markers, emphasis
/// and line breaks are exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    source: &'a str,
    /// The title of the section as provided by the heading.
    pub title: &'a str,
    /// The heading level of the section ranging from H1 to H6.
    pub level: SectionLevel,
    /// The 1-based line the heading starts on.
    pub line: usize,
    /// Byte offset of the heading itself.
    start: usize,
    /// Byte offset just past the heading.
    body_start: usize,
    /// Byte offset where the next sibling or ancestor section begins.
    end: usize,
    /// Any child sections that are nested below the current section.
    pub sections: Vec<Section<'a>>,
}

impl<'a> Section<'a> {
    /// All text that follows this section's heading, including child sections and their headings.
    pub fn content(&self) -> &'a str {
        &self.source[self.body_start..self.end]
    }

    /// The text of this section up to where `child` begins.
    pub fn content_before(&self, child: &Section<'a>) -> &'a str {
        let end = child.start.clamp(self.body_start, self.end);

        &self.source[self.body_start..end]
    }

    /// The text of this section from the end of `child`'s heading onward, including any
    /// later child sections.
    pub fn content_after(&self, child: &Section<'a>) -> &'a str {
        let start = child.body_start.clamp(self.body_start, self.end);

        &self.source[start..self.end]
    }
}

/// The heading structure of a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline<'a> {
    /// The sections of the document, in document order.
    pub sections: Vec<Section<'a>>,
}

impl<'a> Outline<'a> {
    pub fn parse(source: &'a str) -> Outline<'a> {
        OutlineParser::new(source).parse()
    }

    /// Top level (H1) sections in document order.
    pub fn top_level(&self) -> impl Iterator<Item = &Section<'a>> + '_ {
        self.sections
            .iter()
            .filter(|section| section.level == SectionLevel::H1)
    }

    /// Looks up a top level section by its title. When a title is repeated the last one wins.
    pub fn section(&self, title: &str) -> Option<&Section<'a>> {
        self.top_level()
            .filter(|section| section.title == title)
            .last()
    }
}

struct Heading<'a> {
    title: &'a str,
    level: SectionLevel,
    line: usize,
    span: Range<usize>,
}

struct OutlineParser<'a> {
    parser: CMarkParser<'a>,
}

impl<'a> OutlineParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            parser: CMarkParser::new(source),
        }
    }

    fn parse(mut self) -> Outline<'a> {
        let source = self.parser.source();
        let mut headings = self.collect_headings().into_iter().peekable();
        let mut sections = Vec::new();

        while let Some(heading) = headings.next() {
            sections.push(build_section(source, heading, &mut headings));
        }

        Outline { sections }
    }

    /// Headings nested in block quotes, list items or footnotes belong to those
    /// blocks and do not start a section.
    fn collect_headings(&mut self) -> Vec<Heading<'a>> {
        let source = self.parser.source();
        let mut headings = Vec::new();
        let mut depth = 0usize;

        while let Some((event, span)) = self.parser.next_spanned() {
            match event {
                Event::Start(Tag::BlockQuote | Tag::Item | Tag::FootnoteDefinition(_)) => {
                    depth += 1
                }
                Event::End(Tag::BlockQuote | Tag::Item | Tag::FootnoteDefinition(_)) => {
                    depth = depth.saturating_sub(1)
                }
                Event::Start(Tag::Heading(level, ..))
                    if depth == 0 && is_atx_heading(&source[span.clone()]) =>
                {
                    headings.push(Heading {
                        title: heading_text(&source[span.clone()]),
                        level: level.into(),
                        line: self.parser.line(),
                        span,
                    });
                }
                _ => (),
            }
        }

        headings
    }
}

fn build_section<'a>(
    source: &'a str,
    heading: Heading<'a>,
    rest: &mut Peekable<IntoIter<Heading<'a>>>,
) -> Section<'a> {
    let body_end = rest.peek().map_or(source.len(), |next| next.span.start);
    let body_start = heading.span.end.min(body_end);
    let mut sections = Vec::new();

    while let Some(child) = rest.next_if(|next| next.level > heading.level) {
        sections.push(build_section(source, child, rest));
    }

    let end = rest.peek().map_or(source.len(), |next| next.span.start);

    Section {
        source,
        title: heading.title,
        level: heading.level,
        line: heading.line,
        start: heading.span.start,
        body_start,
        end,
        sections,
    }
}

/// Only `#` headings start sections. A setext underline is ordinary text.
fn is_atx_heading(raw: &str) -> bool {
    let indent = raw.len() - raw.trim_start_matches(' ').len();
    let line = &raw[indent..];
    let marks = line.len() - line.trim_start_matches('#').len();

    indent <= 3
        && (1..=6).contains(&marks)
        && matches!(
            line[marks..].chars().next(),
            None | Some(' ' | '\t' | '\n' | '\r')
        )
}

/// Extracts the title from the source text of an ATX heading.
fn heading_text(raw: &str) -> &str {
    let line = raw.lines().next().unwrap_or_default().trim();
    let text = line.trim_start_matches('#').trim();
    let without_closing = text.trim_end_matches('#');

    if without_closing.len() < text.len() && without_closing.ends_with(' ') {
        without_closing.trim_end()
    } else {
        text
    }
}
