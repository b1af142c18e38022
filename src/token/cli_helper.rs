use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::line_buffer::LineBuffer;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::rc::Rc;

use crate::builtins;
use crate::environment::Environment;
use crate::interpreter::SpecialForm;
use crate::primitive::symbol_policies::is_symbol_continuation;


/// Rustyline Helper completing special forms, builtins, and the names bound
/// in a session's global frame.
pub struct CliHelper {
    global: Rc<Environment>,
}

pub struct CliCandidate {
    name: String,
}

impl CliHelper {
    pub fn new(global: Rc<Environment>) -> Self {
        Self { global }
    }

    /// Sorted names starting with prefix.
    pub fn names_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut res = SpecialForm::ALL
            .iter()
            .map(|form| form.name().to_string())
            .chain(builtins::names().into_iter().map(str::to_string))
            .chain(
                self.global
                    .bindings()
                    .into_iter()
                    .map(|(symbol, _)| symbol.as_str().to_string()),
            )
            .filter(|name| name.starts_with(prefix))
            .collect::<Vec<_>>();
        res.sort_unstable();
        res.dedup();
        res
    }

    fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if !is_symbol_continuation(c) {
                if i < pos {
                    start = i + c.len_utf8();
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, _end) = self.word_bounds(line, pos);
        if start >= pos {
            return Ok((pos, vec![]));
        }
        let names = self.names_with_prefix(&line[start..pos]);
        Ok((
            start,
            names.into_iter().map(|name| CliCandidate { name }).collect(),
        ))
    }

    fn update(&self, line: &mut LineBuffer, start: usize, elected: &str) {
        let (_, end) = self.word_bounds(line.as_str(), line.pos());
        line.delete_range(start..end);
        line.insert_str(start, elected);
        line.set_pos(start + elected.len());
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = CliCandidate;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.name.as_str()
    }

    fn replacement(&self) -> &str {
        self.name.as_str()
    }
}

impl Hint for CliCandidate {
    fn display(&self) -> &str {
        self.name.as_str()
    }

    fn completion(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Interpreter;

    #[test]
    fn prefix_completion() {
        let mut interpreter = Interpreter::new();
        interpreter.run("(define list-len 0)").unwrap();
        let helper = CliHelper::new(interpreter.global().clone());

        assert_eq!(
            helper.names_with_prefix("list"),
            vec!["list", "list-len", "list-ref", "list-tail", "list?"]
        );
        assert_eq!(helper.names_with_prefix("set"), vec!["set!", "set-car!", "set-cdr!"]);
        assert!(helper.names_with_prefix("zzz").is_empty());
    }

    #[test]
    fn word_bounds_stop_at_parens() {
        let helper = CliHelper::new(Environment::new_global());
        assert_eq!(helper.word_bounds("(car (li", 8), (6, 8));
        assert_eq!(helper.word_bounds("(set-c x)", 6), (1, 6));
    }
}
