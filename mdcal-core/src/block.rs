//! Splitting a markdown document into candidate event blocks.
//!
//! A block starts at a heading line and runs until the next heading or
//! the end of the document. Blocks come out in document order, which
//! becomes the calendar's default event ordering.

/// One heading-delimited group of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-based line number of the heading line in the source document.
    pub start_line: usize,
    /// The heading line plus everything up to the next heading. Blank
    /// lines are preserved for downstream trimming.
    pub lines: Vec<&'a str>,
}

/// True for markdown headings: one or more `#` followed by whitespace
/// (leading indentation is allowed). `#tag` is not a heading because no
/// whitespace follows the hashes.
pub fn is_heading(line: &str) -> bool {
    let trimmed = line.trim_start();
    let hashes = trimmed.len() - trimmed.trim_start_matches('#').len();
    hashes > 0
        && trimmed[hashes..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
}

/// Lazily split a document into blocks. Text before the first heading
/// is skipped; a document without headings yields nothing.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks {
        lines: text.lines().enumerate().peekable(),
    }
}

/// Iterator returned by [`blocks`].
pub struct Blocks<'a> {
    lines: std::iter::Peekable<std::iter::Enumerate<std::str::Lines<'a>>>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        let (idx, heading) = loop {
            let (idx, line) = self.lines.next()?;
            if is_heading(line) {
                break (idx, line);
            }
        };

        let mut lines = vec![heading];
        while let Some(&(_, line)) = self.lines.peek() {
            if is_heading(line) {
                break;
            }
            lines.push(line);
            self.lines.next();
        }

        Some(Block {
            start_line: idx + 1,
            lines,
        })
    }
}
