//! Contains the macro expander, which rewrites every known macro invocation of its input into the
//! macro's template, with the arguments of the invocation substituted in.
//!
//! The expander makes a single left-to-right pass over the input and never backtracks. It does
//! not expand macros recursively: neither the arguments nor the filled-in templates are scanned
//! again. Its output is meant to be handed to a renderer.
//!
//! An invocation is a `\`, the longest run of ascii letters, digits, and underscores following it
//! (the name), and then one `{...}` group per argument of the macro. Groups do not nest: an
//! argument ends at the first `}` found.
mod error;
mod storage;

use log::trace;

use crate::macros::{is_word_byte, MacroTable};

pub use error::{ErrorKind, ExpandError};
pub use storage::Storage;

/// Expand all macros of `input` found in `macros`.
///
/// Names that are not in the table are not an error: the `\` is emitted and the name is then
/// read as plain text, so the invocation comes out unchanged. The character directly following an
/// expanded invocation is dropped, so `a\foo b` comes out as `aXb` when `\foo` expands to `X`.
///
/// A malformed invocation of a known macro fails the whole expansion.
pub fn expand(input: &str, macros: &MacroTable) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(input.len());
    Expander::new(input, macros).run(|str| output.push_str(str))?;
    Ok(output)
}

/// Same as [`expand`], but the output is allocated in the given [`Storage`].
///
/// This is handy when expanding the content of many fields at once, since the whole batch can then
/// be freed with [`Storage::reset`].
pub fn expand_in<'store>(
    input: &str,
    macros: &MacroTable,
    storage: &'store Storage,
) -> Result<&'store str, ExpandError> {
    let mut output = bumpalo::collections::String::with_capacity_in(input.len(), &storage.0);
    Expander::new(input, macros).run(|str| output.push_str(str))?;
    Ok(output.into_bump_str())
}

struct Expander<'a> {
    input: &'a str,
    macros: &'a MacroTable,
}

impl<'a> Expander<'a> {
    fn new(input: &'a str, macros: &'a MacroTable) -> Self {
        Self { input, macros }
    }

    /// Scan the input, handing every piece of output to `emit` in order.
    ///
    /// On error, whatever was emitted so far must be discarded.
    fn run(self, mut emit: impl FnMut(&str)) -> Result<(), ExpandError> {
        let mut rest = self.input;

        while let Some(escape) = rest.find('\\') {
            let (text, after_escape) = rest.split_at(escape);
            emit(text);
            let after_escape = &after_escape[1..];

            let name_len = after_escape
                .bytes()
                .take_while(|b| is_word_byte(*b))
                .count();
            // Word characters are ascii, so `name_len` is a char boundary.
            let (name, mut cursor) = after_escape.split_at(name_len);

            let Some(definition) = self.macros.get(name) else {
                emit("\\");
                rest = after_escape;
                continue;
            };

            let mut arguments = Vec::with_capacity(definition.arity() as usize);
            for _ in 0..definition.arity() {
                let group = cursor
                    .strip_prefix('{')
                    .ok_or_else(|| self.error(ErrorKind::MissingArgument, cursor, name))?;
                let (argument, after_group) = group
                    .split_once('}')
                    .ok_or_else(|| self.error(ErrorKind::UnmatchedBrace, cursor, name))?;
                arguments.push(argument);
                cursor = after_group;
            }

            trace!("expanding `\\{}` with arguments {:?}", name, arguments);
            emit(&definition.substitute(arguments));

            // The character following the invocation is consumed along with it.
            let mut chars = cursor.chars();
            chars.next();
            rest = chars.as_str();
        }

        emit(rest);
        Ok(())
    }

    /// `place` must be a suffix of the input.
    fn error(&self, kind: ErrorKind, place: &str, name: &str) -> ExpandError {
        ExpandError::new(kind, self.input, self.input.len() - place.len(), name)
    }
}
