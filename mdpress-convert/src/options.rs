//! Conversion knobs.

/// Options controlling markdown conversion.
///
/// The defaults match the article corpus this tool was written for; the only
/// knob that has ever needed turning is the list indent width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Number of leading whitespace characters that make up one list nesting
    /// level. Articles are authored with 2-space indents.
    pub indent_width: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions { indent_width: 2 }
    }
}

impl ConvertOptions {
    /// Options with a non-default indent width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        ConvertOptions { indent_width }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_indent_width_is_two() {
        assert_eq!(ConvertOptions::default().indent_width, 2);
    }

    #[test]
    fn with_indent_width_overrides_default() {
        assert_eq!(ConvertOptions::with_indent_width(4).indent_width, 4);
    }
}
