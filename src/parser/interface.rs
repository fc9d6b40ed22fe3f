use crate::parser::base::ParseError;
use crate::parser::ErrorContext;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Self {
        LeftWidth(width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    pub(crate) fn new(width: usize) -> Self {
        // middle must be at least 2 (so we can hyphenate)
        MiddleWidth(std::cmp::max(width, 2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TotalWidth(pub usize);

/// Lays out rows of `left  middle`, wrapping the middle column to its width.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    padding: usize,
    left: LeftWidth,
    middle: MiddleWidth,
}

// Target 95% of the total width, so the renderer doesn't butt against the terminal edge.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// With an average word length of 5, this fits 3 words and the spaces between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

impl ColumnRenderer {
    /// Produce a renderer whose middle column fits within the total width, when possible.
    pub(crate) fn guided(
        indent: usize,
        padding: usize,
        left: LeftWidth,
        middle: MiddleWidth,
        total_width: TotalWidth,
    ) -> Self {
        let non_middle = indent + left.0 + padding;
        let target_total_width = (total_width.0 as f64 * TARGET_TOTAL_FACTOR) as usize;

        if middle.0 + non_middle <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} and middle fit within the target total {target_total_width}.  Selecting middle: {}.", middle.0);
            }

            Self::new(indent, padding, left, middle)
        } else {
            let calculated_middle = std::cmp::max(
                target_total_width.saturating_sub(non_middle),
                MINIMUM_MIDDLE_WIDTH,
            );

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} and middle exceed the target total {target_total_width}.  Selecting middle: {calculated_middle}.");
            }

            Self::new(indent, padding, left, MiddleWidth::new(calculated_middle))
        }
    }

    pub(crate) fn new(indent: usize, padding: usize, left: LeftWidth, middle: MiddleWidth) -> Self {
        Self {
            indent,
            padding,
            left,
            middle,
        }
    }

    pub(crate) fn render(&self, left: &str, middle: &str) -> Vec<String> {
        let indent = self.indent;
        let left_width = self.left.0;
        let padding = self.padding;
        let middle_parts = chunk(middle, self.middle.0);

        if middle_parts.is_empty() {
            return vec![format!("{:indent$}{left}", "")];
        }

        middle_parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                let column = if i == 0 { left } else { "" };
                format!("{:indent$}{column:left_width$}{:padding$}{part}", "", "")
            })
            .collect()
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
        let word_length = word.chars().count();

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word_length + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}
