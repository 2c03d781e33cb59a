use crate::{EMPTY_TOKEN, Token};

/// Cursor over a token slice.
///
/// Every grammar function takes `&mut TokenStream` and follows one rule: if
/// it returns `None`, the position is exactly what it was on entry. Saving
/// with [`position`](Self::position) and restoring with
/// [`set_position`](Self::set_position) is the only backtracking primitive.
///
/// `limit` can be lowered below the slice length to make the stream pretend
/// it ends early; interval enumeration relies on it.
#[derive(Debug, Clone)]
pub struct TokenStream<'t> {
    tokens: &'t [Token],
    position: usize,
    limit: usize,
}

impl<'t> TokenStream<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, position: 0, limit: tokens.len() }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Clamped to the number of tokens.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.min(self.tokens.len());
    }

    /// Token at `position + offset`, or a category-less sentinel when that
    /// falls outside `[0, limit)`.
    pub fn get(&self, offset: isize) -> &'t Token {
        match self.position.checked_add_signed(offset) {
            Some(index) if index < self.limit => &self.tokens[index],
            _ => &EMPTY_TOKEN,
        }
    }

    /// Move the cursor; negative deltas rewind.
    pub fn advance(&mut self, delta: isize) {
        self.position = self.position.saturating_add_signed(delta);
    }

    pub fn finished(&self) -> bool {
        self.position >= self.limit
    }

    /// Offset of the first token at or after `from` lacking `category`, or
    /// the offset one past the end if every remaining token has it.
    pub fn index_of_without_category(&self, category: &str, from: isize) -> isize {
        let start = self.position.saturating_add_signed(from);
        let index = (start..self.limit).find(|&i| !self.tokens[i].has_category(category)).unwrap_or(self.limit);
        index as isize - self.position as isize
    }

    /// Run `f` here; when `skip` is set and `f` fails, step over tokens in
    /// `category` one at a time and retry after each.
    pub fn try_or_skip_category<T>(
        &mut self,
        category: &str,
        skip: bool,
        mut f: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<T> {
        if !skip {
            return f(self);
        }

        let original = self.position;
        loop {
            if let Some(result) = f(self) {
                return Some(result);
            }
            self.advance(1);
            if !self.get(-1).has_category(category) || self.finished() {
                break;
            }
        }

        self.position = original;
        None
    }

    pub fn try_or_skip_date_time_ignore<T>(
        &mut self,
        skip: bool,
        f: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<T> {
        self.try_or_skip_category("date_time_ignore", skip, f)
    }

    /// Run every strategy from the current position and keep the result of
    /// the one that advanced furthest; earlier strategies win ties.
    pub fn first_which_uses_most_tokens<T>(&mut self, strategies: &[&dyn Fn(&mut Self) -> Option<T>]) -> Option<T> {
        let original = self.position;
        let mut best = None;
        let mut best_position = original;

        for strategy in strategies {
            self.position = original;
            if let Some(result) = strategy(self) {
                if self.position > best_position {
                    best = Some(result);
                    best_position = self.position;
                }
            }
        }

        self.position = best_position;
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str, categories: &'static [&'static str]) -> Token {
        Token {
            value: value.to_string(),
            spaces_following: " ".to_string(),
            position: 0,
            categories,
            number: None,
            duration: None,
        }
    }

    fn sample() -> Vec<Token> {
        vec![
            token("a", &["ignore"]),
            token("and", &["ignore"]),
            token("word", &[]),
            token("of", &["ignore", "date_time_ignore"]),
            token("end", &[]),
        ]
    }

    #[test]
    fn lookahead_outside_the_stream_yields_the_sentinel() {
        let tokens = sample();
        let mut ts = TokenStream::new(&tokens);
        assert!(ts.get(-1).categories.is_empty());
        assert_eq!(ts.get(2).value, "word");
        ts.set_limit(2);
        assert_eq!(ts.get(2).value, "");
        assert!(!ts.get(2).has_category("ignore"));
    }

    #[test]
    fn index_of_without_category_skips_filler() {
        let tokens = sample();
        let mut ts = TokenStream::new(&tokens);
        assert_eq!(ts.index_of_without_category("ignore", 0), 2);
        ts.set_position(3);
        assert_eq!(ts.index_of_without_category("ignore", 0), 1);
        ts.set_position(4);
        assert_eq!(ts.index_of_without_category("word", 1), 1);
    }

    #[test]
    fn try_or_skip_restores_position_on_failure() {
        let tokens = sample();
        let mut ts = TokenStream::new(&tokens);
        let found = ts.try_or_skip_category("ignore", true, |ts| ts.get(0).is_value("word").then_some(()));
        assert_eq!(found, Some(()));
        assert_eq!(ts.position(), 2);

        ts.set_position(0);
        let missing = ts.try_or_skip_category("ignore", true, |ts| ts.get(0).is_value("end").then_some(()));
        assert_eq!(missing, None);
        assert_eq!(ts.position(), 0);
    }

    #[test]
    fn longest_strategy_wins_and_ties_keep_the_first() {
        let tokens = sample();
        let mut ts = TokenStream::new(&tokens);
        let short = |ts: &mut TokenStream<'_>| {
            ts.advance(1);
            Some("short")
        };
        let long = |ts: &mut TokenStream<'_>| {
            ts.advance(3);
            Some("long")
        };
        let other = |ts: &mut TokenStream<'_>| {
            ts.advance(3);
            Some("other")
        };
        assert_eq!(ts.first_which_uses_most_tokens(&[&short, &long, &other]), Some("long"));
        assert_eq!(ts.position(), 3);

        let fail = |_: &mut TokenStream<'_>| None::<&str>;
        ts.set_position(1);
        assert_eq!(ts.first_which_uses_most_tokens(&[&fail]), None);
        assert_eq!(ts.position(), 1);
    }
}
