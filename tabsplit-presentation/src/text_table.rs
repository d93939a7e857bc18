use std::{borrow::Cow, fmt::Write};

const COLUMN_GAP: &str = "  ";
const RULE: char = '-';
const SECTION_SPACING: &str = "\n\n";

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Renders a header line, a rule and one line per row.
    ///
    /// Cells beyond the header count are dropped. Trailing spaces are trimmed.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().take(col_count).enumerate() {
                col_widths[i] = col_widths[i].max(text_width(cell));
            }
        }

        let total_width =
            col_widths.iter().sum::<usize>() + COLUMN_GAP.len() * (col_count.saturating_sub(1));
        let mut table = String::with_capacity((total_width + 1) * (self.rows.len() + 2));

        self.write_line(&mut table, self.headers, &col_widths);
        let rule: String = std::iter::repeat_n(RULE, total_width).collect();
        let _ = writeln!(&mut table, "{rule}");
        for row in &self.rows {
            self.write_line(&mut table, row.as_ref(), &col_widths);
        }

        table.truncate(table.trim_end_matches('\n').len());
        table
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, width) in col_widths.iter().copied().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let cell = cells.get(i).map_or("", |cell| &**cell);
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            pad_cell(&mut line, cell, width, alignment);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn pad_cell(out: &mut String, cell: &str, width: usize, alignment: Alignment) {
    let slack = width.saturating_sub(text_width(cell));
    let (left, right) = match alignment {
        Alignment::Left => (0, slack),
        Alignment::Center => (slack / 2, slack - slack / 2),
        Alignment::Right => (slack, 0),
    };
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(cell);
    out.extend(std::iter::repeat_n(' ', right));
}

/// Joins rendered sections top to bottom with a blank line between them.
pub fn combine_vertically(sections: &[&str]) -> Option<String> {
    let sections: Vec<&str> = sections
        .iter()
        .copied()
        .filter(|section| !section.is_empty())
        .collect();
    if sections.is_empty() {
        return None;
    }
    Some(sections.join(SECTION_SPACING))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_simple_table() {
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed("Name"), Cow::Borrowed("Balance")])
            .row([Cow::Borrowed("Alice"), Cow::Borrowed("+100")])
            .row([Cow::Borrowed("Bob"), Cow::Borrowed("-100")])
            .build();

        assert_eq!(
            table,
            "Name   Balance\n\
             --------------\n\
             Alice     +100\n\
             Bob       -100"
        );
    }

    #[rstest]
    fn test_center_alignment_and_wide_cells() {
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Center])
            .headers(&[Cow::Borrowed("Id")])
            .rows([[Cow::Borrowed("abcde")], [Cow::Borrowed("é")]])
            .build();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec![" Id", "-----", "abcde", "  é"]);
    }

    #[rstest]
    fn test_missing_and_extra_cells() {
        let table = TextTableBuilder::new()
            .headers(&[Cow::Borrowed("A"), Cow::Borrowed("B")])
            .row(vec![Cow::Borrowed("only")])
            .row(vec![Cow::Borrowed("x"), Cow::Borrowed("y"), Cow::Borrowed("dropped")])
            .build();

        assert_eq!(table, "A     B\n-------\nonly\nx     y");
    }

    #[rstest]
    fn test_no_headers_renders_nothing() {
        let table = TextTableBuilder::<Vec<Cow<'static, str>>>::new().build();
        assert!(table.is_empty());
    }

    #[rstest]
    #[case::joins_sections(&["one", "two"], Some("one\n\ntwo"))]
    #[case::skips_empty(&["", "two"], Some("two"))]
    #[case::nothing(&[], None)]
    fn test_combine_vertically(#[case] sections: &[&str], #[case] expected: Option<&str>) {
        assert_eq!(combine_vertically(sections).as_deref(), expected);
    }
}
