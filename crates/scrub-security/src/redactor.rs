use scrub_core::{EntitySpan, RedactionCounts, RedactionResult};
use std::borrow::Cow;

use crate::entities::{EntityDetector, NoEntities};
use crate::patterns::{PLACEHOLDER, Rule, rules};

/// A piece of the text being redacted.
///
/// `Text` is still open to detection; `Masked` is a placeholder and is never
/// scanned again.
enum Segment<'a> {
    Text { offset: usize, text: &'a str },
    Masked(Cow<'a, str>),
}

/// Redaction engine over the built-in rule table
pub struct Redactor {
    rules: &'static [Rule],
    entities: Box<dyn EntityDetector>,
}

impl Redactor {
    pub fn new() -> Self {
        Self::with_entity_detector(Box::new(NoEntities))
    }

    pub fn with_entity_detector(entities: Box<dyn EntityDetector>) -> Self {
        Self {
            rules: rules(),
            entities,
        }
    }

    pub fn entity_detection_enabled(&self) -> bool {
        self.entities.enabled()
    }

    /// Redact sensitive data from `text`.
    ///
    /// Rules run in priority order, each over the text earlier rules left
    /// alone. Placeholders already present in the input are kept verbatim and
    /// not counted.
    pub fn redact(&self, text: &str) -> RedactionResult {
        let mut segments = split_existing_placeholders(text);
        let mut counts = RedactionCounts::default();

        for rule in self.rules {
            let placeholder = rule.category().placeholder();
            let mut next = Vec::with_capacity(segments.len());

            for segment in segments {
                let (offset, text) = match segment {
                    Segment::Text { offset, text } => (offset, text),
                    masked => {
                        next.push(masked);
                        continue;
                    }
                };

                let mut last = 0;
                for range in rule.masked_ranges(text) {
                    push_text(&mut next, offset + last, &text[last..range.start]);
                    next.push(Segment::Masked(Cow::Borrowed(placeholder)));
                    counts.add(rule.category(), 1);
                    last = range.end;
                }
                push_text(&mut next, offset + last, &text[last..]);
            }

            segments = next;
        }

        let mut entities = Vec::new();
        if self.entities.enabled() {
            segments = mask_entities(segments, self.entities.detect(text), &mut entities);
        }

        let redacted = segments
            .iter()
            .map(|segment| match segment {
                Segment::Text { text, .. } => *text,
                Segment::Masked(placeholder) => &**placeholder,
            })
            .collect();

        RedactionResult {
            redacted,
            counts,
            entities,
        }
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

fn push_text<'a>(segments: &mut Vec<Segment<'a>>, offset: usize, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Text { offset, text });
    }
}

fn split_existing_placeholders(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for found in PLACEHOLDER.find_iter(text) {
        push_text(&mut segments, last, &text[last..found.start()]);
        segments.push(Segment::Masked(Cow::Borrowed(found.as_str())));
        last = found.end();
    }
    push_text(&mut segments, last, &text[last..]);

    segments
}

/// Replace detected entities that lie wholly inside unredacted text.
///
/// Spans overlapping a placeholder, overlapping an earlier span, or not on
/// char boundaries are dropped.
fn mask_entities<'a>(
    segments: Vec<Segment<'a>>,
    mut spans: Vec<EntitySpan>,
    accepted: &mut Vec<EntitySpan>,
) -> Vec<Segment<'a>> {
    spans.sort_by_key(|span| (span.start, std::cmp::Reverse(span.end)));

    let mut out = Vec::with_capacity(segments.len());
    let mut spans = spans.into_iter().peekable();

    for segment in segments {
        let (offset, text) = match segment {
            Segment::Text { offset, text } => (offset, text),
            masked => {
                out.push(masked);
                continue;
            }
        };
        let end = offset + text.len();

        let mut last = 0;
        while let Some(span) = spans.peek() {
            if span.start >= end {
                break;
            }
            let Some(span) = spans.next() else { break };

            let local_start = match span.start.checked_sub(offset) {
                Some(start) if start >= last => start,
                _ => continue,
            };
            let local_end = local_start + (span.end.saturating_sub(span.start));
            if span.end <= span.start
                || local_end > text.len()
                || !text.is_char_boundary(local_start)
                || !text.is_char_boundary(local_end)
            {
                continue;
            }

            push_text(&mut out, offset + last, &text[last..local_start]);
            out.push(Segment::Masked(Cow::Owned(span.placeholder())));
            last = local_end;
            accepted.push(span);
        }
        push_text(&mut out, offset + last, &text[last..]);
    }

    out
}
