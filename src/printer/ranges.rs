use crate::cst::Span;
use crate::options::Range;

/// Maps requested input ranges to the output ranges of the rules they match
#[derive(Debug, Default)]
pub struct RangeRemapper {
    requested: Vec<Range>,
    matched: Vec<Range>,
    found: Vec<Range>,
}

impl RangeRemapper {
    pub fn new(requested: Vec<Range>) -> Self {
        Self {
            requested,
            ..Default::default()
        }
    }

    /// Records where a rule ended up if its input span was requested.
    /// Only exact matches count.
    pub fn record(&mut self, input: Span, output: Range) {
        let input = Range::new(input.start, input.end);
        if self.requested.contains(&input) {
            self.matched.push(input);
            self.found.push(output);
        }
    }

    /// Output ranges in document order. Nested rules are recorded before
    /// the rule containing them, hence the sort.
    pub fn finish(mut self) -> Vec<Range> {
        for range in self.requested.iter().filter(|r| !self.matched.contains(r)) {
            log::trace!("Range {}..{} matched no rule", range.start, range.end);
        }
        self.found.sort_by_key(|range| range.start);
        self.found
    }
}
