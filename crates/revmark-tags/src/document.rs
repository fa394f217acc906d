//! In-memory line model of a source file.

/// Line separator convention of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// The platform convention, used when a document has no line break yet.
    pub fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }
}

/// An ordered sequence of text lines, indexed from 0.
///
/// Every line remembers its own terminator, and rendering reproduces them
/// together with the presence of a final line break, so lines that are not
/// modified round-trip byte-for-byte even in files with mixed endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    lines: Vec<String>,
    endings: Vec<LineEnding>,
    line_ending: LineEnding,
    trailing_newline: bool,
}

impl SourceDocument {
    pub fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut endings = Vec::new();
        let mut unterminated = None;

        for piece in text.split_inclusive('\n') {
            match piece.strip_suffix('\n') {
                Some(body) => match body.strip_suffix('\r') {
                    Some(body) => {
                        lines.push(body.to_string());
                        endings.push(LineEnding::CrLf);
                    }
                    None => {
                        lines.push(body.to_string());
                        endings.push(LineEnding::Lf);
                    }
                },
                None => unterminated = Some(piece.to_string()),
            }
        }

        let crlf = endings.iter().filter(|e| **e == LineEnding::CrLf).count();
        let line_ending = if endings.is_empty() {
            LineEnding::native()
        } else if crlf * 2 >= endings.len() {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };

        if let Some(last) = unterminated {
            endings.push(endings.last().copied().unwrap_or(line_ending));
            lines.push(last);
        }

        Self {
            lines,
            endings,
            line_ending,
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Build a document from lines, terminating every line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let line_ending = LineEnding::native();
        Self {
            endings: vec![line_ending; lines.len()],
            lines,
            line_ending,
            trailing_newline: true,
        }
    }

    pub fn render(&self) -> String {
        let mut text = String::new();
        let last = self.lines.len().saturating_sub(1);
        for (index, (line, ending)) in self.lines.iter().zip(&self.endings).enumerate() {
            text.push_str(line);
            if index < last || self.trailing_newline {
                text.push_str(ending.as_str());
            }
        }
        text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The prevailing line ending of the parsed text.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Terminator of one line, if it exists.
    pub fn ending_of(&self, index: usize) -> Option<LineEnding> {
        self.endings.get(index).copied()
    }

    /// Whether the line is absent or holds only whitespace.
    pub fn is_blank(&self, index: usize) -> bool {
        self.line(index).is_none_or(|line| line.trim().is_empty())
    }

    /// Insert an empty line before `index`, terminated like its neighbour.
    pub(crate) fn insert_blank(&mut self, index: usize) {
        let ending = index
            .checked_sub(1)
            .and_then(|above| self.ending_of(above))
            .or_else(|| self.ending_of(index))
            .unwrap_or(self.line_ending);
        self.lines.insert(index, String::new());
        self.endings.insert(index, ending);
    }

    pub(crate) fn append_to(&mut self, index: usize, text: &str) {
        self.lines[index].push_str(text);
    }

    pub(crate) fn retain_map<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> Option<String>,
    {
        let lines = std::mem::take(&mut self.lines);
        let endings = std::mem::take(&mut self.endings);
        (self.lines, self.endings) = lines
            .into_iter()
            .zip(endings)
            .filter_map(|(line, ending)| f(&line).map(|line| (line, ending)))
            .unzip();
    }
}

impl std::fmt::Display for SourceDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
