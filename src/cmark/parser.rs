use pulldown_cmark::{Event, OffsetIter, Options, Parser};

use std::ops::Range;

pub struct CMarkParser<'a> {
    source: &'a str,
    events: OffsetIter<'a, 'a>,
    offset: usize,
}

impl<'a> CMarkParser<'a> {
    pub fn new(source: &'a str) -> CMarkParser<'a> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);

        let events = Parser::new_ext(source, options).into_offset_iter();

        CMarkParser {
            source,
            events,
            offset: 0,
        }
    }

    /// The text being parsed.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The 1-based line the last emitted event starts on.
    pub fn line(&self) -> usize {
        memchr::memchr_iter(b'\n', &self.source.as_bytes()[..self.offset]).count() + 1
    }

    /// Consume the next event in stream along with the byte range of source text it covers.
    pub fn next_spanned(&mut self) -> Option<(Event<'a>, Range<usize>)> {
        self.events.next().map(|(event, range)| {
            self.offset = range.start;
            (event, range)
        })
    }
}
