//! Main script generation.
//!
//! A main script is the header template, one `<INCLUDE .../>` line per
//! test script of the model, and the footer template.

use crate::scanner::DEFAULT_DELIMITER;

/// Minimum width of the zero-padded test number in include file names.
const INDEX_WIDTH: usize = 3;

/// Attributes of the generated include lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeStyle {
    /// Marker between model name and test number, e.g. `.Test.`
    pub delimiter: String,
    /// Extension of the referenced test scripts (without dot)
    pub member_extension: String,
    /// `NameSpace` attribute
    pub namespace: String,
    /// `TAB` attribute
    pub tab: u32,
    /// `LineComment` attribute
    pub line_comment: u32,
}

impl Default for IncludeStyle {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            member_extension: "xml".to_string(),
            namespace: String::new(),
            tab: 10,
            line_comment: 0,
        }
    }
}

impl From<&crate::config::Config> for IncludeStyle {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            delimiter: config.scanner.delimiter.clone(),
            member_extension: config.render.member_extension.clone(),
            namespace: config.render.namespace.clone(),
            tab: config.render.tab,
            line_comment: config.render.line_comment,
        }
    }
}

/// Render the include line for test number `index` of `model`, without newline.
///
/// The number is padded to at least three digits; larger numbers are
/// written in full (`1000` stays `1000`). The model name is not escaped.
pub fn include_line(model: &str, index: usize, style: &IncludeStyle) -> String {
    format!(
        "<INCLUDE FileName=\"{}{}{:0width$}.{}\" NameSpace=\"{}\" TAB=\"{}\" LineComment=\"{}\"/>",
        model,
        style.delimiter,
        index,
        style.member_extension,
        style.namespace,
        style.tab,
        style.line_comment,
        width = INDEX_WIDTH,
    )
}

/// Render a complete main script for `model` with `count` test scripts.
pub fn render(model: &str, count: usize, header: &str, footer: &str, style: &IncludeStyle) -> String {
    let mut output = String::with_capacity(header.len() + footer.len() + count * 96);

    output.push_str(header);
    for index in 1..=count {
        output.push_str(&include_line(model, index, style));
        output.push('\n');
    }
    output.push_str(footer);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(file: &str) -> String {
        format!(
            "<INCLUDE FileName=\"{}\" NameSpace=\"\" TAB=\"10\" LineComment=\"0\"/>\n",
            file
        )
    }

    #[test]
    fn test_render_three() {
        let out = render("A", 3, "<H>", "<F>", &IncludeStyle::default());

        let expected = format!(
            "<H>{}{}{}<F>",
            line("A.Test.001.xml"),
            line("A.Test.002.xml"),
            line("A.Test.003.xml")
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_single() {
        let out = render("XFS_PTR_PRINT", 1, "", "", &IncludeStyle::default());

        assert_eq!(out, line("XFS_PTR_PRINT.Test.001.xml"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_index_padding_is_minimum_width() {
        let style = IncludeStyle::default();

        assert!(include_line("A", 7, &style).contains("A.Test.007.xml"));
        assert!(include_line("A", 42, &style).contains("A.Test.042.xml"));
        assert!(include_line("A", 999, &style).contains("A.Test.999.xml"));
        assert!(include_line("A", 1000, &style).contains("A.Test.1000.xml"));
    }

    #[test]
    fn test_render_thousand() {
        let out = render("A", 1000, "", "", &IncludeStyle::default());

        assert_eq!(out.lines().count(), 1000);
        assert_eq!(out.lines().last().unwrap(), line("A.Test.1000.xml").trim_end());
    }

    #[test]
    fn test_model_name_not_escaped() {
        let out = include_line("A\"&<B", 1, &IncludeStyle::default());
        assert!(out.starts_with("<INCLUDE FileName=\"A\"&<B.Test.001.xml\""));
    }

    #[test]
    fn test_custom_style() {
        let style = IncludeStyle {
            delimiter: ".Case.".to_string(),
            member_extension: "rdt".to_string(),
            namespace: "ns".to_string(),
            tab: 4,
            line_comment: 1,
        };

        assert_eq!(
            include_line("M", 2, &style),
            "<INCLUDE FileName=\"M.Case.002.rdt\" NameSpace=\"ns\" TAB=\"4\" LineComment=\"1\"/>"
        );
    }
}
