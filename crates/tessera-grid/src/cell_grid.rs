//! A fixed-size grid of styled character cells.
//!
//! Used for layered overlays: the canvas is blitted first, then the modal on top.
//! Each cell remembers the SGR sequence active when it was written, so colors
//! survive the round trip back to text.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: String,
}

impl StyledCell {
    pub fn space() -> Self {
        Self {
            ch: ' ',
            style: String::new(),
        }
    }

    pub fn new(ch: char, style: String) -> Self {
        Self { ch, style }
    }
}

#[derive(Debug, Clone)]
pub struct CellGrid {
    cells: Vec<Vec<StyledCell>>,
    width: usize,
    height: usize,
}

impl CellGrid {
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .map(|_| (0..width).map(|_| StyledCell::space()).collect())
            .collect();
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&StyledCell> {
        self.cells.get(y).and_then(|row| row.get(x))
    }

    /// Write `line` starting at column `x` of row `y`, clipping at the grid edge.
    pub fn blit_line(&mut self, line: &str, x: usize, y: usize) {
        if y >= self.height {
            return;
        }

        let mut col = x;
        let mut active: Vec<String> = Vec::new();
        let mut current_style = String::new();
        let mut chars = line.chars();

        while let Some(c) = chars.next() {
            if c == '\x1b' {
                let mut escape = String::from(c);
                for next in chars.by_ref() {
                    escape.push(next);
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
                if escape.ends_with('m') {
                    apply_sgr(&mut active, escape);
                    current_style = active.concat();
                }
                continue;
            }

            if col >= self.width {
                break;
            }
            self.cells[y][col] = StyledCell::new(c, current_style.clone());
            col += 1;
        }
    }

    pub fn blit_lines<S: AsRef<str>>(&mut self, lines: &[S], x: usize, y: usize) {
        for (row_idx, line) in lines.iter().enumerate() {
            self.blit_line(line.as_ref(), x, y + row_idx);
        }
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| cells_to_string(row)).collect()
    }
}

/// Fold one SGR sequence into the active set. `0` clears everything; `39` and `49`
/// drop only the foreground or background colors they reset.
fn apply_sgr(active: &mut Vec<String>, escape: String) {
    let params = escape
        .strip_prefix("\x1b[")
        .and_then(|rest| rest.strip_suffix('m'))
        .unwrap_or("");
    match params {
        "" | "0" => active.clear(),
        "39" => active.retain(|e| !sets_color(e, '3')),
        "49" => active.retain(|e| !sets_color(e, '4')),
        _ => active.push(escape),
    }
}

/// True if `escape` sets a foreground (`layer = '3'`) or background (`'4'`) color.
fn sets_color(escape: &str, layer: char) -> bool {
    let params = escape.trim_start_matches("\x1b[");
    let mut chars = params.chars();
    chars.next() == Some(layer) && chars.next().is_some_and(|c| c.is_ascii_digit() && c != '9')
}

fn cells_to_string(cells: &[StyledCell]) -> String {
    let mut result = String::new();
    let mut current_style = "";

    for cell in cells {
        if cell.style != current_style {
            if !current_style.is_empty() {
                result.push_str("\x1b[0m");
            }
            result.push_str(&cell.style);
            current_style = &cell.style;
        }
        result.push(cell.ch);
    }

    if !current_style.is_empty() {
        result.push_str("\x1b[0m");
    }

    result
}
