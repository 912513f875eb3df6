//! Plain-text rendering of a [`PageView`] for the terminal.

use std::fmt;

use crate::views::{InputKind, Item, PageView};

const LABEL_WIDTH: usize = 34;
const RULE_WIDTH: usize = 60;

/// Display adapter that lays a page out as text.
pub struct TextPage<'a>(pub &'a PageView);

pub fn render_text(view: &PageView) -> String {
    TextPage(view).to_string()
}

impl fmt::Display for TextPage<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let view = self.0;
        let rule = "─".repeat(RULE_WIDTH);

        writeln!(f, "{}", view.title)?;
        let nav: Vec<String> = view
            .nav
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.label)
                } else {
                    format!(" {} ", item.label)
                }
            })
            .collect();
        writeln!(f, "{}", nav.join(" "))?;
        writeln!(f, "{rule}")?;

        for section in &view.sections {
            if let Some(heading) = &section.heading {
                writeln!(f, "{heading}")?;
            }
            for item in &section.items {
                write_item(f, item)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{rule}")?;
        writeln!(f, "{}", view.footer)
    }
}

fn write_item(
    f: &mut fmt::Formatter<'_>,
    item: &Item,
) -> fmt::Result {
    match item {
        Item::Input(input) => {
            let label = format!("{} [{}]", input.label, input.field.query_key());
            let value = if input.value.is_empty() {
                input.placeholder.map(|p| format!("({p})")).unwrap_or_default()
            } else {
                input.value.clone()
            };
            write!(f, "  {label:<w$} {value}", w = LABEL_WIDTH)?;
            if let Some(suffix) = input.suffix {
                write!(f, " {suffix}")?;
            }
            if let InputKind::Number { min, step } = input.kind {
                write!(f, "  (min {min}, step {step})")?;
            }
            writeln!(f)?;
            if let Some(hint) = &input.hint {
                writeln!(f, "    {hint}")?;
            }
            Ok(())
        }
        Item::Stat { label, value } => writeln!(f, "  {label:<w$} {value:>12}", w = LABEL_WIDTH),
        Item::Line { label, value } => {
            writeln!(f, "    {label:<w$} {value:>12}", w = LABEL_WIDTH - 2)
        }
        Item::Text(text) => writeln!(f, "  {text}"),
        Item::Action(action) => writeln!(f, "  < {} >", action.label),
    }
}
