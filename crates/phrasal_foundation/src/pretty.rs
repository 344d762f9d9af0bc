//! Tree printer for elements.
//!
//! Renders an element and its children as an indented outline, one node
//! per line:
//!
//! ```text
//! Phrase: category=CLAUSE, features={ELIDED=false}
//!  |-Phrase: category=NOUN_PHRASE, features={ELIDED=false}
//!  | \-Word: base=woman, category=NOUN
//!  \-Phrase: category=VERB_PHRASE, features={ELIDED=false}
//!    \-Word: base=kiss, category=VERB
//! ```

use crate::element::Element;

/// Prints an element tree as an outline.
#[must_use]
pub fn print_tree(element: &Element) -> String {
    let mut printer = TreePrinter::default();
    printer.print(element, "");
    printer.output
}

#[derive(Default)]
struct TreePrinter {
    output: String,
}

impl TreePrinter {
    fn print(&mut self, element: &Element, indent: &str) {
        self.print_node(element);
        self.output.push('\n');

        let children = element.children();
        let Some((last, rest)) = children.split_last() else {
            return;
        };
        for child in rest {
            self.output.push_str(indent);
            self.output.push_str(" |-");
            self.print(child, &format!("{indent} | "));
        }
        self.output.push_str(indent);
        self.output.push_str(" \\-");
        self.print(last, &format!("{indent}   "));
    }

    fn print_node(&mut self, element: &Element) {
        let label = match element {
            Element::Word(w) => format!("Word: base={}, category={}", w.base_form, w.category),
            Element::Inflected(w) => {
                format!("Inflected: base={}, category={}", w.base_form, w.category)
            }
            Element::Text(t) => format!("Text: {:?}", t.text),
            Element::Phrase(p) => format!("Phrase: category={}", p.category),
            Element::Coordinated(c) => format!(
                "Coordinated: conjunction={}",
                c.conjunction().unwrap_or_default()
            ),
            Element::List(_) => "List:".to_string(),
            Element::Document(d) => match &d.realisation {
                Some(text) => format!("Document: category={}, realisation={text:?}", d.category),
                None => format!("Document: category={}", d.category),
            },
        };
        self.output.push_str(&label);

        let features = element.features();
        if !features.is_empty() {
            self.output.push_str(&format!(", features={{{features}}}"));
        }
    }
}
