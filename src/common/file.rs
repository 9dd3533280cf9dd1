//!
//! A query source file.
//!

use std::{fmt::Formatter, ops::Range, path::Path};

use super::{Loc, Source, SourceError, Span};

///
/// Line and column information for
/// a particular location in a query.
///
#[derive(Debug, PartialEq, Eq)]
pub struct LineColumn<'a> {
    file: &'a str,
    line: usize,
    column: usize,
}

impl<'a> LineColumn<'a> {
    ///
    /// 0-based line.
    ///
    pub fn line(&self) -> usize {
        self.line
    }

    ///
    /// 0-based column, in characters.
    ///
    pub fn column(&self) -> usize {
        self.column
    }
}

///
/// Converting to 1-based only for display.
///
impl<'a> std::fmt::Display for LineColumn<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.column + 1)
    }
}

///
/// Finds the starting character index of all
/// lines, delimited by `\n`, `\r\n` or a lone `\r`.
///
/// A trailing line break starts a new, empty line: the end of
/// input after it is located at that line's column 0.
///
fn line_starts(st: &[char]) -> Vec<usize> {
    let mut v = vec![0];
    let mut i = 0;

    while i < st.len() {
        match st[i] {
            '\n' => v.push(i + 1),
            '\r' => {
                if matches!(st.get(i + 1), Some('\n')) {
                    v.push(i + 2);
                    i += 1;
                } else {
                    v.push(i + 1);
                }
            }
            _ => (),
        }

        i += 1;
    }

    v
}

///
/// A query, either read from disk or given inline.
///
/// Here, line-column information can be provided.
///
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: String,
    chars: Vec<char>,
    line_starts: Vec<usize>,
}

impl SourceFile {
    ///
    /// Wraps query text under a display path.
    ///
    pub fn new(path: impl ToString, contents: &str) -> Self {
        let chars = contents.chars().collect::<Vec<_>>();
        let line_starts = line_starts(&chars);

        Self {
            path: path.to_string(),
            chars,
            line_starts,
        }
    }

    ///
    /// TESTING ONLY
    /// ***
    /// Create a dummy file with a fake path.
    ///
    #[cfg(test)]
    pub fn dummy_file(contents: &'static str) -> Self {
        Self::new("DUMMY.logscale", contents)
    }

    ///
    /// Attempts to read a query from a given file path.
    ///
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_string_lossy().into_owned(),
            source,
        })?;

        Ok(Self::new(path.to_string_lossy(), &contents))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    ///
    /// Return the (0-based) line and column information at a [Loc] in this file.
    ///
    fn line_col(&self, loc: Loc) -> Option<(usize, usize)> {
        // Pair the start of each line with the start of the next (or EOF),
        // and find the line whose range holds `loc`.
        self.line_starts
            .iter()
            .copied()
            .zip(
                self.line_starts
                    .iter()
                    .copied()
                    .skip(1)
                    .chain([self.chars.len() + 1]),
            )
            .enumerate()
            .find(|&(_, (start, end))| start <= loc.0 && loc.0 < end)
            .map(|(ln, (start, _))| (ln, loc.0 - start))
    }
}

impl Source for SourceFile {
    type Location<'a> = LineColumn<'a>
    where Self: 'a;

    fn locate(&self, span: Span) -> Option<Self::Location<'_>> {
        if self.in_bounds(&span) {
            let (line, column) = self.line_col(span.start)?;
            return Some(LineColumn {
                file: &self.path,
                line,
                column,
            });
        }

        None
    }

    fn bounds(&self) -> Range<Loc> {
        Loc(0)..Loc(self.chars.len())
    }

    fn characters(&self) -> &[char] {
        &self.chars
    }
}
