use crate::constants::tree::{
    BOUNDARY, FILL, LEFT_OUTLINE, LIGHT, LIGHT_SPACING, LIT_SEPARATOR, PLAIN_SEPARATOR, RIGHT_OUTLINE, STAR_ROWS,
    TOP_ROWS, TRUNK_GIRTH, TRUNK_HOLLOW,
};

/// One printed line of the uncoloured tree.
pub type Row = String;

/// Toggles between the two branch separators.
pub fn switch_separator(current: char) -> char {
    if current == LIT_SEPARATOR {
        PLAIN_SEPARATOR
    } else {
        LIT_SEPARATOR
    }
}

/// Builds one outlined branch row of roughly `width` characters.
///
/// The interior is `ceil((width - 2) / 2)` fill glyphs joined by `separator`, never fewer than one. Only rows using
/// the lit separator carry lights: both ends when the fill count is even, every fourth glyph otherwise.
pub fn build_line(width: usize, separator: char) -> Row {
    let fills = width.saturating_sub(2).div_ceil(2).max(1);

    let mut middle = Vec::with_capacity(fills * 2 - 1);
    for index in 0..fills {
        if index > 0 {
            middle.push(separator);
        }
        middle.push(FILL);
    }

    if separator == LIT_SEPARATOR {
        if fills % 2 == 0 {
            let last = middle.len() - 1;
            middle[0] = LIGHT;
            middle[last] = LIGHT;
        } else {
            for index in (0..middle.len()).step_by(LIGHT_SPACING) {
                middle[index] = LIGHT;
            }
        }
    }

    std::iter::once(LEFT_OUTLINE).chain(middle).chain(std::iter::once(RIGHT_OUTLINE)).collect()
}

fn build_trunk(filler: char) -> Row {
    std::iter::once(BOUNDARY)
        .chain(std::iter::repeat_n(filler, TRUNK_GIRTH))
        .chain(std::iter::once(BOUNDARY))
        .collect()
}

#[derive(Debug)]
pub struct TreeBuilder {
    rows: Vec<Row>,
    width: usize,
    separator: char,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new(), width: 1, separator: PLAIN_SEPARATOR }
    }

    fn push_line(&mut self) {
        self.rows.push(build_line(self.width, self.separator));
    }

    fn star(&mut self) {
        self.rows.extend(STAR_ROWS.iter().map(|row| row.to_string()));
    }

    fn top(&mut self) {
        for _ in 0..TOP_ROWS {
            self.width += 2;
            self.separator = switch_separator(self.separator);
            self.push_line();
        }
    }

    fn body(&mut self, extra_lines: usize) {
        for _ in 0..extra_lines / 2 {
            self.separator = switch_separator(self.separator);
            self.push_line();

            self.separator = switch_separator(self.separator);
            self.width += 2;
            self.push_line();
        }
    }

    fn trunk(&mut self) {
        self.rows.push(build_trunk(TRUNK_HOLLOW));
        self.rows.push(build_trunk(FILL));
    }

    /// Star tip first, trunk last. `extra_lines` is expected to be even.
    pub fn generate(mut self, extra_lines: usize) -> Vec<Row> {
        self.star();
        self.top();
        self.body(extra_lines);
        self.trunk();
        self.rows
    }
}

pub fn generate_tree(extra_lines: usize) -> Vec<Row> {
    TreeBuilder::new().generate(extra_lines)
}

/// Centres every row in the widest row's width plus two.
pub fn pad_tree(rows: &[Row]) -> Vec<Row> {
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) + 2;
    rows.iter().map(|row| format!("{row:^width$}")).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_switch_separator() {
        assert_eq!(switch_separator('/'), '\\');
        assert_eq!(switch_separator('\\'), '/');
        assert_eq!(switch_separator(switch_separator('/')), '/');
    }

    #[test]
    fn test_build_line_narrow() {
        assert_eq!(build_line(1, '/'), "/●\\");
        assert_eq!(build_line(1, '\\'), "/_\\");
        assert_eq!(build_line(3, '/'), "/●\\");
    }

    #[test]
    fn test_build_line_lights() {
        // Odd fill count: every fourth glyph.
        assert_eq!(build_line(7, '/'), "/●/_/●\\");
        assert_eq!(build_line(11, '/'), "/●/_/●/_/●\\");
        // Even fill count: only the ends.
        assert_eq!(build_line(9, '/'), "/●/_/_/●\\");
        // The other separator never gets lights.
        assert_eq!(build_line(9, '\\'), "/_\\_\\_\\_\\");
    }

    #[test]
    fn test_row_count() {
        for extra_lines in (0..=30).step_by(2) {
            assert_eq!(generate_tree(extra_lines).len(), 2 + 3 + extra_lines + 2);
        }
    }

    #[test]
    fn test_tree_without_body() {
        let tree = generate_tree(0);
        assert_eq!(tree, vec!["*", "***", "/●\\", "/_\\_\\", "/●/_/●\\", "|   |", "|___|"]);
    }

    #[test]
    fn test_small_tree() {
        let tree = generate_tree(2);
        assert_eq!(tree.len(), 9);
        assert_eq!(tree[0], "*");
        assert_eq!(tree[1], "***");
        assert_eq!(tree[8], "|___|");
        insta::assert_snapshot!(tree.join("\n"), @r"
        *
        ***
        /●\
        /_\_\
        /●/_/●\
        /_\_\_\
        /●/_/_/●\
        |   |
        |___|
        ");
    }

    #[test]
    fn test_rows_are_outlined() {
        let tree = generate_tree(12);
        let (branches, trunk) = tree[STAR_ROWS.len()..].split_at(tree.len() - STAR_ROWS.len() - 2);

        for row in branches {
            let glyphs: Vec<char> = row.chars().collect();
            assert_eq!(glyphs[0], LEFT_OUTLINE, "{row}");
            assert_eq!(glyphs[glyphs.len() - 1], RIGHT_OUTLINE, "{row}");
            assert!(glyphs[1] == FILL || glyphs[1] == LIGHT, "{row}");
            assert!(glyphs[glyphs.len() - 2] == FILL || glyphs[glyphs.len() - 2] == LIGHT, "{row}");
        }
        for row in trunk {
            assert!(row.starts_with(BOUNDARY) && row.ends_with(BOUNDARY), "{row}");
            assert_eq!(row.chars().filter(|c| *c == BOUNDARY).count(), 2);
        }
    }

    #[test]
    fn test_body_widens_every_other_row() {
        let tree = generate_tree(6);
        let widths: Vec<usize> = tree[2..tree.len() - 2].iter().map(|row| row.chars().count()).collect();
        assert_eq!(widths, vec![3, 5, 7, 7, 9, 9, 11, 11, 13]);
    }

    #[test]
    fn test_pad_tree() {
        let tree = generate_tree(4);
        let padded = pad_tree(&tree);
        let width = tree.iter().map(|row| row.chars().count()).max().unwrap() + 2;

        assert_eq!(padded.len(), tree.len());
        assert!(padded.iter().all(|row| row.chars().count() == width));
        for (plain, padded) in tree.iter().zip(padded.iter()) {
            assert_eq!(padded.trim(), plain.as_str());
        }
        assert_eq!(padded[tree.len() - 1], format!("{:^width$}", "|___|"));
    }

    #[test]
    fn test_pad_tree_twice_keeps_rows() {
        let once = pad_tree(&generate_tree(8));
        let twice = pad_tree(&once);

        let width = twice[0].chars().count();
        assert!(twice.iter().all(|row| row.chars().count() == width));
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.trim(), b.trim());
        }
    }

    #[test]
    fn test_pad_empty() {
        assert!(pad_tree(&[]).is_empty());
    }
}
