//! Markdown rendering with diagram-fence interception.
//!
//! Fenced code blocks tagged with the diagram dialect are lifted out of
//! the HTML stream so the UI can hand them to the diagram renderer;
//! everything else becomes sanitized HTML.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

/// One renderable slice of a markdown document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Sanitized HTML, safe for direct insertion.
    Html(String),
    /// Raw source of a diagram fence, rendered asynchronously by the UI.
    Diagram(String),
}

/// Convert markdown to an ordered list of HTML and diagram segments.
///
/// Supports strikethrough, tables, and footnotes. A fenced code block
/// whose info string starts with `dialect` becomes a
/// [`Segment::Diagram`] carrying the raw fence body; surrounding
/// content is rendered to HTML and sanitized with `ammonia` to strip
/// anything script-bearing. An unclosed fence at the end of input
/// still yields a diagram segment with whatever was collected.
pub fn render_segments(markdown: &str, dialect: &str) -> Vec<Segment> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);

    let mut segments = Vec::new();
    let mut pending: Vec<Event> = Vec::new();
    let mut diagram: Option<String> = None;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref info)))
                if info.split_whitespace().next() == Some(dialect) =>
            {
                flush_html(&mut segments, &mut pending);
                diagram = Some(String::new());
            }
            Event::End(TagEnd::CodeBlock) if diagram.is_some() => {
                if let Some(code) = diagram.take() {
                    segments.push(Segment::Diagram(code));
                }
            }
            Event::Text(ref text) if diagram.is_some() => {
                if let Some(code) = diagram.as_mut() {
                    code.push_str(text);
                }
            }
            other => pending.push(other),
        }
    }

    if let Some(code) = diagram.take() {
        segments.push(Segment::Diagram(code));
    }
    flush_html(&mut segments, &mut pending);

    segments
}

/// Render the buffered events to one sanitized HTML segment.
fn flush_html(segments: &mut Vec<Segment>, pending: &mut Vec<Event>) {
    if pending.is_empty() {
        return;
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, pending.drain(..));

    let clean = ammonia::clean(&html_output);
    if !clean.trim().is_empty() {
        segments.push(Segment::Html(clean));
    }
}
