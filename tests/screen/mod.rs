//! Minimal screen model for replaying controller output
//!
//! Interprets exactly the byte vocabulary the controller emits — plain text,
//! `\r`, `\n`, `CSI J`, `CSI n A`, and SGR sequences — and keeps a line/column
//! picture of what a terminal would show. Content is assumed ASCII, and `\n`
//! also returns to column 0, matching a cooked-mode tty. Anything outside
//! that vocabulary is a test failure, as is an explicit "move up 0".

/// A virtual terminal screen with unbounded height and width.
pub struct VirtualScreen {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl VirtualScreen {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    /// Replay a chunk of controller output.
    pub fn feed(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    self.row += 1;
                    self.col = 0;
                    if self.lines.len() <= self.row {
                        self.lines.push(String::new());
                    }
                    i += 1;
                }
                b'\r' => {
                    self.col = 0;
                    i += 1;
                }
                0x1b => {
                    i += self.apply_csi(&bytes[i..]);
                }
                b => {
                    self.put(b as char);
                    i += 1;
                }
            }
        }
    }

    /// All lines currently on screen, with trailing empty lines trimmed.
    pub fn visible(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.lines.iter().map(String::as_str).collect();
        while lines.last() == Some(&"") {
            lines.pop();
        }
        lines
    }

    /// Current cursor row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current cursor column.
    pub fn col(&self) -> usize {
        self.col
    }

    fn put(&mut self, ch: char) {
        let line = &mut self.lines[self.row];
        while line.len() < self.col {
            line.push(' ');
        }
        if line.len() == self.col {
            line.push(ch);
        } else {
            line.replace_range(self.col..self.col + 1, &ch.to_string());
        }
        self.col += 1;
    }

    /// Interpret one escape sequence and return its byte length.
    fn apply_csi(&mut self, bytes: &[u8]) -> usize {
        assert_eq!(bytes.get(1), Some(&b'['), "unsupported escape sequence");
        let mut i = 2;
        let mut param: Option<usize> = None;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            param = Some(param.unwrap_or(0) * 10 + usize::from(bytes[i] - b'0'));
            i += 1;
        }
        match bytes.get(i) {
            Some(&b'A') => {
                let n = param.unwrap_or(1);
                assert!(n >= 1, "explicit move-up-zero emitted");
                self.row = self.row.saturating_sub(n);
            }
            Some(&b'J') => {
                // Clear from the cursor to the end of the screen.
                self.lines[self.row].truncate(self.col);
                self.lines.truncate(self.row + 1);
            }
            Some(&b'm') => {
                // Styles are invisible to content checks.
            }
            other => panic!("unsupported CSI final byte: {:?}", other),
        }
        i + 1
    }
}
