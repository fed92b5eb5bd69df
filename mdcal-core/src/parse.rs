//! The event-block parser: one markdown block in, one [`Event`] out.
//!
//! Lines inside a block play fixed roles, in order:
//! title, date, optional tag line, description lines, optional trailing
//! link. Role assignment is driven by classifying line content, not by
//! fixed offsets, so the optional pieces can be absent without shifting
//! everything else.

use crate::block::{Block, blocks};
use crate::date;
use crate::error::{BlockError, ParseError};
use crate::event::Event;
use crate::tags;

/// Result of parsing a whole document: events in document order plus
/// one error per rejected block. A bad block never hides the others.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub events: Vec<Event>,
    pub errors: Vec<BlockError>,
}

/// Parse a whole markdown document.
pub fn parse_document(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for block in blocks(text) {
        match parse_block(&block) {
            Ok(event) => outcome.events.push(event),
            Err(error) => outcome.errors.push(BlockError {
                line: block.start_line,
                heading: block
                    .lines
                    .first()
                    .map(|l| l.trim().to_string())
                    .unwrap_or_default(),
                error,
            }),
        }
    }

    outcome
}

/// What a body line (anything after the date) can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRole {
    /// Entirely `#tag` tokens.
    Tags,
    /// A lone absolute URL.
    Link,
    /// Anything else: description text.
    Text,
}

fn classify(line: &str) -> LineRole {
    if tags::is_tag_line(line) {
        LineRole::Tags
    } else if is_url(line) {
        LineRole::Link
    } else {
        LineRole::Text
    }
}

/// Parse a single block into an [`Event`]. Pure function of the block
/// text.
pub fn parse_block(block: &Block) -> Result<Event, ParseError> {
    let mut rest = block
        .lines
        .iter()
        .map(|line| line.trim())
        .skip_while(|line| line.is_empty());

    // Title: the heading line, markers stripped.
    let heading = rest.next().ok_or(ParseError::EmptyTitle)?;
    let title = heading.trim_start_matches('#').trim();
    if title.is_empty() {
        return Err(ParseError::EmptyTitle);
    }

    // Date: next non-blank line, required. A tag line here means the
    // author skipped the date entirely, which reads better as "missing"
    // than as a malformed date.
    let date_line = rest
        .find(|line| !line.is_empty())
        .ok_or(ParseError::MissingDate)?;
    if tags::is_tag_line(date_line) {
        return Err(ParseError::MissingDate);
    }
    let (start_date, end_date) = date::parse_date_line(date_line)?;

    // Body: optional tag line first, optional link last, description in
    // between. Blank lines carry no information past this point.
    let mut body: Vec<&str> = rest.filter(|line| !line.is_empty()).collect();

    let tags = if body
        .first()
        .is_some_and(|line| classify(line) == LineRole::Tags)
    {
        tags::extract_tags(body.remove(0))
    } else {
        Vec::new()
    };

    let link = if body
        .last()
        .is_some_and(|line| classify(line) == LineRole::Link)
    {
        body.pop().map(str::to_string)
    } else {
        None
    };

    let description = if body.is_empty() {
        None
    } else {
        Some(body.join("\n"))
    };

    Ok(Event {
        title: title.to_string(),
        start_date,
        end_date,
        tags,
        description,
        link,
    })
}

/// True when a line looks like an absolute URL (`scheme://...`). Only
/// syntactic presence is checked; nothing is fetched or validated.
fn is_url(line: &str) -> bool {
    let Some((scheme, rest)) = line.split_once("://") else {
        return false;
    };
    !scheme.is_empty()
        && !rest.is_empty()
        && !line.chars().any(char::is_whitespace)
        && scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
