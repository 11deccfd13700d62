use crate::callable::callable_label;
use crate::config::RenderConfig;
use crate::shape::{Diagnostic, Shape};

/// Renders diagnostic values into human readable strings.
///
/// Rendering is total and pure: every [`Shape`] has a rule and recursion
/// follows the nesting of the value itself.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Creates a renderer with the provided layout options.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Returns the layout options in use.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a single value.
    pub fn render<T: Diagnostic + ?Sized>(&self, value: &T) -> String {
        self.render_shape(value.shape())
    }

    fn render_shape(&self, shape: Shape<'_>) -> String {
        match shape {
            Shape::Null => "<null>".to_string(),
            Shape::Text(text) => format!("\"{text}\""),
            Shape::Char(c) => render_char(c),
            Shape::Bool(b) => b.to_string(),
            Shape::Callable(type_name) => callable_label(type_name),
            Shape::Scalar(text) => text,
            Shape::Pair(key, value) => self.render_pair(key, value),
            Shape::Pairs(entries) => self.render_pairs(&entries),
            Shape::Items(items) => self.render_items(&items),
        }
    }

    fn render_pair(&self, key: &dyn Diagnostic, value: &dyn Diagnostic) -> String {
        format!("[{}] = {}", self.render(key), self.render(value))
    }

    fn render_pairs(&self, entries: &[(&dyn Diagnostic, &dyn Diagnostic)]) -> String {
        if entries.is_empty() {
            return "{}".to_string();
        }
        let lines: Vec<String> = entries
            .iter()
            .map(|(key, value)| self.indent(&self.render_pair(*key, *value)))
            .collect();
        format!("{{\n{}\n}}", lines.join(",\n"))
    }

    fn render_items(&self, items: &[&dyn Diagnostic]) -> String {
        let rendered: Vec<String> = items.iter().map(|item| self.render(*item)).collect();
        let width: usize = rendered.iter().map(|item| item.chars().count()).sum();
        if width <= self.config.max_inline_width {
            return format!("[{}]", rendered.join(", "));
        }
        let lines: Vec<String> = rendered.iter().map(|item| self.indent(item)).collect();
        format!("[\n{}\n]", lines.join(",\n"))
    }

    // Indents every line so nested blocks stay aligned under their parent.
    fn indent(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| format!("{}{line}", self.config.indent))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_char(c: char) -> String {
    if c.is_control() {
        format!("\\u{:04X}", c as u32)
    } else {
        format!("'{c}'")
    }
}

/// Renders `value` with the default layout options.
pub fn render<T: Diagnostic + ?Sized>(value: &T) -> String {
    Renderer::default().render(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_characters_use_unicode_escapes() {
        assert_eq!(render(&'\n'), "\\u000A");
        assert_eq!(render(&'\u{7f}'), "\\u007F");
        assert_eq!(render(&'a'), "'a'");
        assert_eq!(render(&'é'), "'é'");
    }

    #[test]
    fn text_is_quoted_without_escaping() {
        assert_eq!(render("say \"hi\""), "\"say \"hi\"\"");
        assert_eq!(render(&String::new()), "\"\"");
    }

    #[test]
    fn nested_blocks_indent_every_line() {
        let inner: Vec<u32> = (100..125).collect();
        let outer = vec![inner.clone(), vec![1]];
        let rendered = render(&outer);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "[");
        assert_eq!(lines[1], "  [");
        assert_eq!(lines[2], "    100,");
        assert_eq!(*lines.last().unwrap(), "]");
        assert!(rendered.contains("  ],\n  [1]\n]"));
    }

    #[test]
    fn block_layout_keeps_carriage_returns() {
        let rendered = render(&vec!["a\r\nb".to_string(), "x".repeat(70)]);
        assert!(rendered.starts_with("[\n  \"a\r\n  b\",\n"));
        assert_eq!(render(&["a\r\nb"]), "[\"a\r\nb\"]");
    }

    #[test]
    fn narrow_config_breaks_lines_early() {
        let renderer = Renderer::new(RenderConfig {
            max_inline_width: 2,
            indent: "\t".into(),
        });
        assert_eq!(renderer.render(&[1, 2]), "[1, 2]");
        assert_eq!(renderer.render(&[1, 2, 3]), "[\n\t1,\n\t2,\n\t3\n]");
    }
}
