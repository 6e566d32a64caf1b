use crate::cst::Comment;

/// Hands out the comments lying in the gaps between printed nodes.
///
/// Gaps must be queried in document order: the cursor only moves forward, so
/// each comment is looked at a bounded number of times over a whole print.
#[derive(Debug)]
pub struct Comments<'a> {
    source: &'a str,
    comments: &'a [Comment],
    cursor: usize,
    enabled: bool,
}

impl<'a> Comments<'a> {
    pub fn new(source: &'a str, comments: &'a [Comment], enabled: bool) -> Self {
        Self {
            source,
            comments,
            cursor: 0,
            enabled,
        }
    }

    fn skip_before(&mut self, after: usize) {
        while self
            .comments
            .get(self.cursor)
            .is_some_and(|comment| comment.span.start < after)
        {
            self.cursor += 1;
        }
    }

    /// Whether any comment lies fully inside `(after, before)`, without
    /// consuming it
    pub fn has_between(&mut self, after: usize, before: usize) -> bool {
        if !self.enabled {
            return false;
        }
        self.skip_before(after);
        self.comments
            .get(self.cursor)
            .is_some_and(|comment| comment.span.end <= before)
    }

    /// The comments fully inside `(after, before)` as authored, joined by a
    /// newline and `indent`. Empty when comments are disabled or a bound is
    /// unknown.
    pub fn between(&mut self, after: Option<usize>, before: Option<usize>, indent: &str) -> String {
        let (Some(after), Some(before)) = (after, before) else {
            return String::new();
        };
        if !self.enabled {
            return String::new();
        }

        self.skip_before(after);
        let mut buffer = String::new();
        while let Some(comment) = self.comments.get(self.cursor) {
            if comment.span.end > before {
                break;
            }
            if !buffer.is_empty() {
                buffer.push('\n');
                buffer.push_str(indent);
            }
            buffer.push_str(comment.span.text(self.source));
            self.cursor += 1;
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::collect_comments;

    #[test]
    fn test_between() {
        let source = "/*a*/ x /*b*/ /*c*/ y /*d*/";
        let comments = collect_comments(source);
        let mut cursor = Comments::new(source, &comments, true);

        assert_eq!(cursor.between(Some(0), Some(6), ""), "/*a*/");
        assert!(cursor.has_between(7, 20));
        assert_eq!(cursor.between(Some(7), Some(20), "\t"), "/*b*/\n\t/*c*/");
        assert_eq!(cursor.between(Some(21), None, ""), "");
        assert_eq!(cursor.between(Some(21), Some(source.len()), ""), "/*d*/");
        assert!(!cursor.has_between(21, source.len()));
    }

    #[test]
    fn test_skips_comments_inside_nodes() {
        let source = "a /*in*/ b /*gap*/ c";
        let comments = collect_comments(source);
        let mut cursor = Comments::new(source, &comments, true);
        assert_eq!(cursor.between(Some(10), Some(19), ""), "/*gap*/");
    }

    #[test]
    fn test_disabled() {
        let source = "/*a*/";
        let comments = collect_comments(source);
        let mut cursor = Comments::new(source, &comments, false);
        assert!(!cursor.has_between(0, 5));
        assert_eq!(cursor.between(Some(0), Some(5), ""), "");
    }
}
