#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: u32,
    pub color: &'static str,
    pub line_spacing: u32,
    pub padding: u32,
}

impl TextStyle {
    const BASE: TextStyle = TextStyle {
        font_size: 18,
        color: "white",
        line_spacing: 5,
        padding: 10,
    };

    pub fn large() -> Self {
        Self {
            font_size: 35,
            ..Self::BASE
        }
    }

    pub fn medium() -> Self {
        Self {
            font_size: 25,
            ..Self::BASE
        }
    }

    pub fn small() -> Self {
        Self::BASE
    }
}

/// One block of (possibly multi-line) caption text.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub text: String,
    pub style: TextStyle,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn height(&self) -> u32 {
        let lines = self.lines().count().max(1) as u32;
        let style = &self.style;
        style.padding * 2 + lines * style.font_size + (lines - 1) * style.line_spacing
    }

    /// Rough width estimate; no text shaping is done up front.
    pub fn width(&self) -> u32 {
        let widest = self.lines().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
        let style = &self.style;
        (widest * style.font_size as f64 * 0.6).ceil() as u32 + style.padding * 2
    }
}
