use std::ops::Range;

use tracing::debug;

use crate::Token;
use crate::engine::TokenStream;

/// Where a match sits in the input: tokens `[start, end)` and the bytes they cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub bytes: Range<usize>,
}

impl Span {
    fn over(tokens: &[Token], start: usize, end: usize) -> Self {
        let first = tokens.get(start).map_or(0, |t| t.position);
        let last = end.checked_sub(1).and_then(|i| tokens.get(i)).map_or(first, Token::end);
        Span { start, end, bytes: first..last }
    }
}

/// Piece of a segmented input: either literal text or an extracted value.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<T> {
    Text(String),
    Value(T),
}

/// One way a value can be read out of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRange<T> {
    pub span: Span,
    pub value: T,
    /// No other returned range contains this one.
    pub is_largest_possible: bool,
}

/// The tokens of one input plus a "parse one value at the cursor" function,
/// queried in one of three modes.
///
/// The extractor must follow the stream contract: on success it leaves the
/// cursor after what it consumed, on failure it leaves the cursor alone.
pub struct Query<'a, T> {
    tokens: Vec<Token>,
    extract: Box<dyn Fn(&mut TokenStream<'_>) -> Option<T> + 'a>,
}

impl<'a, T> Query<'a, T> {
    pub fn new(tokens: Vec<Token>, extract: impl Fn(&mut TokenStream<'_>) -> Option<T> + 'a) -> Self {
        Self { tokens, extract: Box::new(extract) }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The value starting at the lowest token index. At one index the
    /// extractor is greedy, so the longest reading wins.
    pub fn first(&self) -> Option<(T, Span)> {
        debug!(tokens = self.tokens.len(), "query: first match");
        let mut ts = TokenStream::new(&self.tokens);

        while !ts.finished() {
            let start = ts.position();
            if let Some(value) = (self.extract)(&mut ts) {
                return Some((value, Span::over(&self.tokens, start, ts.position())));
            }
            ts.advance(1);
        }
        None
    }

    /// The whole input as alternating text and values, left to right.
    ///
    /// Linear in the number of tokens as long as the extractor is linear in
    /// what it consumes. Spaces after a value open the next text segment.
    pub fn mixed_with_text(&self) -> Vec<Segment<T>> {
        debug!(tokens = self.tokens.len(), "query: text segmentation");
        let mut ts = TokenStream::new(&self.tokens);
        let mut segments = Vec::new();
        let mut text = String::new();

        while !ts.finished() {
            match (self.extract)(&mut ts) {
                Some(value) => {
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Value(value));
                    text.push_str(&ts.get(-1).spaces_following);
                }
                None => {
                    let token = ts.get(0);
                    text.push_str(&token.value);
                    text.push_str(&token.spaces_following);
                    ts.advance(1);
                }
            }
        }

        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }
        segments
    }

    /// Every interval a value can be read from, including the shorter
    /// readings obtained by cutting the stream just before the end of a
    /// longer one ("three halves" also yields "three").
    ///
    /// Ranges come out ordered by start, then by decreasing end.
    pub fn possible_intervals(&self) -> Vec<MatchedRange<T>> {
        debug!(tokens = self.tokens.len(), "query: interval enumeration");
        let count = self.tokens.len();
        let mut ts = TokenStream::new(&self.tokens);
        let mut ranges = Vec::new();
        let mut max_end_so_far = 0;

        for start in 0..count {
            ts.set_limit(count);
            loop {
                ts.set_position(start);
                let Some(value) = (self.extract)(&mut ts) else {
                    // a shorter stream cannot produce anything either
                    break;
                };
                let end = ts.position();
                if end <= start {
                    break;
                }

                ranges.push(MatchedRange {
                    span: Span::over(&self.tokens, start, end),
                    value,
                    is_largest_possible: ts.limit() == count && end > max_end_so_far,
                });

                max_end_so_far = max_end_so_far.max(end);
                ts.set_limit(end - 1);
            }
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tokenizer;
    use crate::locale::ENGLISH;

    /// Reads a run of consecutive "x" tokens as its length.
    fn run_of_x(ts: &mut TokenStream<'_>) -> Option<usize> {
        let mut n = 0;
        while ts.get(0).is_value("x") {
            ts.advance(1);
            n += 1;
        }
        (n > 0).then_some(n)
    }

    fn query(text: &str) -> Query<'static, usize> {
        Query::new(Tokenizer::new(&ENGLISH).tokenize(text), run_of_x)
    }

    #[test]
    fn first_finds_lowest_start() {
        let (value, span) = query("a b x x c x").first().unwrap();
        assert_eq!(value, 2);
        assert_eq!((span.start, span.end), (2, 4));
        assert_eq!(span.bytes, 4..7);
        assert!(query("nothing here").first().is_none());
    }

    #[test]
    fn mixed_with_text_rebuilds_the_input() {
        let segments = query("a  x x, b x").mixed_with_text();
        assert_eq!(
            segments,
            vec![
                Segment::Text("a  ".to_string()),
                Segment::Value(2),
                Segment::Text(", b ".to_string()),
                Segment::Value(1),
            ]
        );
        assert_eq!(query("").mixed_with_text(), Vec::<Segment<usize>>::new());
    }

    #[test]
    fn possible_intervals_enumerates_nested_readings() {
        let ranges = query("x x x b").possible_intervals();
        let summary: Vec<(usize, usize, usize, bool)> =
            ranges.iter().map(|r| (r.span.start, r.span.end, r.value, r.is_largest_possible)).collect();
        assert_eq!(
            summary,
            vec![
                (0, 3, 3, true),
                (0, 2, 2, false),
                (0, 1, 1, false),
                (1, 3, 2, false),
                (1, 2, 1, false),
                (2, 3, 1, false),
            ]
        );
    }
}
