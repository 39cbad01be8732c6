//! Label declaration index.
//!
//! `goto foo` resolves to the first line whose trimmed text starts with
//! `label foo`. That is a textual prefix test against the normalized source
//! (comments not yet stripped), so `goto foo` also matches `label foobar`
//! when that line comes first. The index is built in one pass so each goto
//! only scans label lines, not the whole file.

/// Label lines in source order.
pub(crate) struct LabelIndex<'src> {
    /// Text after `label ` on each label line, with its 0-based line.
    declarations: Vec<(&'src str, usize)>,
}

impl<'src> LabelIndex<'src> {
    pub(crate) fn build(lines: &[&'src str]) -> Self {
        let declarations = lines
            .iter()
            .enumerate()
            .filter_map(|(line, text)| {
                text.trim_matches(' ')
                    .strip_prefix("label ")
                    .map(|rest| (rest, line))
            })
            .collect();
        LabelIndex { declarations }
    }

    /// The line of the first label declaration matching `target`.
    pub(crate) fn find(&self, target: &str) -> Option<usize> {
        self.declarations
            .iter()
            .find(|(rest, _)| rest.starts_with(target))
            .map(|&(_, line)| line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let lines = ["label a", "x = 1", "  label b  ", "label a"];
        let index = LabelIndex::build(&lines);
        assert_eq!(index.find("a"), Some(0));
        assert_eq!(index.find("b"), Some(2));
        assert_eq!(index.find("c"), None);
    }

    #[test]
    fn test_prefix_match() {
        let lines = ["label loopend", "label loop"];
        let index = LabelIndex::build(&lines);
        assert_eq!(index.find("loop"), Some(0));
    }

    #[test]
    fn test_commented_label_still_declares() {
        let lines = ["label done # finish up"];
        let index = LabelIndex::build(&lines);
        assert_eq!(index.find("done"), Some(0));
    }

    #[test]
    fn test_label_keyword_alone_declares_nothing() {
        let lines = ["label", "labelx y"];
        let index = LabelIndex::build(&lines);
        assert_eq!(index.find("y"), None);
    }
}
