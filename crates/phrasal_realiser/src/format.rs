//! Plain-text layout of realised documents.
//!
//! Runs after orthography, when every sentence carries its realisation and
//! every phrase has become text. Adds titles, blank lines between
//! paragraphs and list bullets.

use phrasal_foundation::{DocumentCategory, DocumentElement, Element};
use tracing::warn;

/// Lays out a realised tree as plain text.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Creates a formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Formats a realised element.
    ///
    /// Words and phrases that never went through orthography contribute
    /// nothing.
    #[must_use]
    pub fn format(&self, element: &Element) -> String {
        let mut numbering = Vec::new();
        self.format_in(element, None, &mut numbering)
    }

    fn format_in(
        &self,
        element: &Element,
        parent: Option<DocumentCategory>,
        numbering: &mut Vec<usize>,
    ) -> String {
        match element {
            Element::Text(text) => text.text.clone(),
            Element::Document(document) => self.format_document(document, parent, numbering),
            Element::List(list) => self.format_spaced(&list.children, numbering),
            Element::Coordinated(coordinated) => {
                self.format_spaced(&coordinated.coordinates, numbering)
            }
            other => {
                warn!(kind = other.kind(), "formatting unrealised element as empty text");
                String::new()
            }
        }
    }

    fn format_document(
        &self,
        document: &DocumentElement,
        parent: Option<DocumentCategory>,
        numbering: &mut Vec<usize>,
    ) -> String {
        let category = document.category;
        let components = &document.components;
        let mut buffer = String::new();

        match category {
            DocumentCategory::Document => {
                push_title(&mut buffer, document.title.as_deref(), "\n\n");
                buffer.push_str(&self.format_concatenated(components, category, numbering));
            }
            DocumentCategory::Section => {
                push_title(&mut buffer, document.title.as_deref(), "\n");
                buffer.push_str(&self.format_concatenated(components, category, numbering));
            }
            DocumentCategory::List => {
                buffer.push_str(&self.format_concatenated(components, category, numbering));
            }
            DocumentCategory::EnumeratedList => {
                push_title(&mut buffer, document.title.as_deref(), "\n");
                numbering.push(0);
                for component in components {
                    if component.document_category() == Some(DocumentCategory::ListItem) {
                        if let Some(counter) = numbering.last_mut() {
                            *counter += 1;
                        }
                    }
                    let text = self.format_in(component, Some(category), numbering);
                    if !buffer.is_empty() && !buffer.ends_with('\n') {
                        buffer.push(' ');
                    }
                    buffer.push_str(&text);
                }
                numbering.pop();
            }
            DocumentCategory::Paragraph => {
                buffer.push_str(&self.format_joined(components, category, numbering));
                buffer.push_str("\n\n");
            }
            DocumentCategory::Sentence => {
                buffer.push_str(document.realisation.as_deref().unwrap_or_default());
            }
            DocumentCategory::ListItem => {
                match parent {
                    Some(DocumentCategory::List) => buffer.push_str(" * "),
                    Some(DocumentCategory::EnumeratedList) => {
                        buffer.push_str(&numbered_prefix(numbering));
                        buffer.push_str(" - ");
                    }
                    _ => {}
                }
                buffer.push_str(&self.format_joined(components, category, numbering));
                buffer.push('\n');
            }
        }
        buffer
    }

    fn format_concatenated(
        &self,
        components: &[Element],
        parent: DocumentCategory,
        numbering: &mut Vec<usize>,
    ) -> String {
        components
            .iter()
            .map(|component| self.format_in(component, Some(parent), numbering))
            .collect()
    }

    fn format_joined(
        &self,
        components: &[Element],
        parent: DocumentCategory,
        numbering: &mut Vec<usize>,
    ) -> String {
        components
            .iter()
            .map(|component| self.format_in(component, Some(parent), numbering))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Each child followed by a space.
    fn format_spaced(&self, children: &[Element], numbering: &mut Vec<usize>) -> String {
        let mut buffer = String::new();
        for child in children {
            buffer.push_str(&self.format_in(child, None, numbering));
            buffer.push(' ');
        }
        buffer
    }
}

fn push_title(buffer: &mut String, title: Option<&str>, terminator: &str) {
    if let Some(title) = title {
        buffer.push_str(title);
        buffer.push_str(terminator);
    }
}

/// "2" at the top level, "2.1" one level down.
fn numbered_prefix(numbering: &[usize]) -> String {
    numbering
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
