//!
//! Comment openers.
//!
//! The grammar lexes `// ...` comments itself; the scanner only
//! has to recognise the opener so it can step aside.
//!

use crate::lexing::utils::Lexer;

///
/// `/`: division, regex delimiter, or half a comment opener.
///
pub const SLASH: char = '/';

///
/// With the cursor just past a `/`, does a second `/` make it
/// a line comment?
///
pub fn continues_line_comment<L: Lexer>(lexer: &L) -> bool {
    lexer.upcoming(SLASH)
}

#[cfg(test)]
mod tests {
    use crate::{
        common::{file::SourceFile, Source},
        lexing::utils::Lexer,
    };

    use super::continues_line_comment;

    #[test]
    fn line_comment_opener() {
        let source = SourceFile::dummy_file("// An apple a day...");
        let input = &mut source.stream();
        input.advance(false);
        assert!(continues_line_comment(&*input));
    }

    #[test]
    fn lone_slash() {
        for text in ["/abc/", "/", "/ /", "/*x*/"] {
            let source = SourceFile::new("lone.logscale", text);
            let input = &mut source.stream();
            input.advance(false);
            assert!(!continues_line_comment(&*input), "{text:?}");
        }
    }
}
