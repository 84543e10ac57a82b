//! Off-side rule bookkeeping.

/// What a new line's indentation does relative to the enclosing block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Layout {
    /// Same level as the current block.
    Same,
    /// One level deeper; a block opens.
    Indent,
    /// Shallower; this many blocks close.
    Dedent(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IndentError {
    /// Neither indentation is a prefix of the other (e.g. tabs vs spaces).
    Inconsistent,
    /// Dedent lands between two open levels.
    Unmatched,
}

/// Stack of indentation prefixes, outermost first.
///
/// Invariant: never empty, starts with `""`, and each entry is a strict
/// prefix of the entry after it.
#[derive(Clone, Debug)]
pub(crate) struct IndentStack {
    levels: Vec<String>,
}

impl IndentStack {
    pub(crate) fn new() -> Self {
        IndentStack {
            levels: vec![String::new()],
        }
    }

    /// Number of open blocks.
    pub(crate) fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    fn top(&self) -> &str {
        self.levels.last().map_or("", String::as_str)
    }

    /// Compare `indent` against the innermost level and update the stack.
    pub(crate) fn apply(&mut self, indent: &str) -> Result<Layout, IndentError> {
        let top = self.top();
        if indent == top {
            return Ok(Layout::Same);
        }
        if indent.starts_with(top) {
            self.levels.push(indent.to_owned());
            return Ok(Layout::Indent);
        }
        if !top.starts_with(indent) {
            return Err(IndentError::Inconsistent);
        }

        let mut closed = 0;
        loop {
            self.levels.pop();
            closed += 1;
            let top = self.top();
            if top == indent {
                return Ok(Layout::Dedent(closed));
            }
            if !top.starts_with(indent) {
                return Err(IndentError::Unmatched);
            }
        }
    }

    /// Close the innermost block at end of input. Returns `false` when only
    /// the outermost level is left.
    pub(crate) fn close_one(&mut self) -> bool {
        if self.levels.len() > 1 {
            self.levels.pop();
            true
        } else {
            false
        }
    }
}
