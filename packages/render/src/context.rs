use crate::RenderOptions;
use std::fmt;

/// Output buffer with indentation tracking.
pub(crate) struct Context<'a> {
    options: &'a RenderOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// Opening tag on its own line; children follow one level deeper.
    pub fn open(&mut self, tag: &str, attrs: Attrs) {
        self.add_line(&format!("<{}{}>", tag, attrs));
        self.indent();
    }

    pub fn close(&mut self, tag: &str) {
        self.dedent();
        self.add_line(&format!("</{}>", tag));
    }

    /// Element with escaped text content on a single line.
    pub fn text(&mut self, tag: &str, attrs: Attrs, text: &str) {
        self.add_line(&format!("<{tag}{}>{}</{tag}>", attrs, escape_html(text)));
    }

    pub fn void(&mut self, tag: &str, attrs: Attrs) {
        self.add_line(&format!("<{}{} />", tag, attrs));
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

/// Attribute list, rendered with a leading space per attribute.
#[derive(Debug, Default)]
pub(crate) struct Attrs {
    parts: Vec<(&'static str, String)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.set("class", class)
    }

    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.parts.push((name, value.into()));
        self
    }

    pub fn set_opt(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub fn style(self, style: Style) -> Self {
        if style.is_empty() {
            return self;
        }
        self.set("style", style.to_string())
    }
}

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.parts {
            write!(f, " {}=\"{}\"", name, escape_html(value))?;
        }
        Ok(())
    }
}

/// Inline `style` declarations.
#[derive(Debug, Default)]
pub(crate) struct Style {
    props: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.props.push((name, value.into()));
        self
    }

    /// Skips the declaration when the value is absent or empty.
    pub fn prop_opt(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.prop(name, value),
            _ => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.props.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", name, value)?;
        }
        Ok(())
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
