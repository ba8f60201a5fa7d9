use crate::{
    error::PreprocessError,
    lexer::{strip_comment, tokenize},
};
use log::debug;
use std::{
    collections::{hash_map::Entry, HashMap},
    fs,
};

pub const TOK_INCLUDE: &str = "%include";
pub const TOK_DEFINE: &str = "%define";

/// The tokens of one source line after directives have been applied.
pub type Line = Vec<String>;

/// Applies `%define` and `%include` directives line by line.
///
/// A directive is only recognised as the first token of a line once its
/// comment has been stripped. A define takes effect from the following line
/// on, and every later token equal to its name is replaced by the tokens of
/// its value. A directive line becomes an empty line, so line indices of
/// the top-level source survive. An include is replaced by the preprocessed
/// lines of the named file, which shares the defines of its includer.
#[derive(Debug, Default)]
pub struct Preprocessor {
    defines: HashMap<String, Vec<String>>,
    open_includes: Vec<String>,
}

impl Preprocessor {
    pub fn new() -> Preprocessor {
        Preprocessor::default()
    }

    pub fn definition(&self, name: &str) -> Option<&[String]> {
        self.defines.get(name).map(Vec::as_slice)
    }

    pub fn process(&mut self, source: &str) -> Result<Vec<Line>, PreprocessError> {
        let mut lines = Vec::new();
        self.expand(source, &mut lines)?;
        Ok(lines)
    }

    fn expand(&mut self, source: &str, lines: &mut Vec<Line>) -> Result<(), PreprocessError> {
        for line in source.lines() {
            let tokens = tokenize(line);

            match tokens.first() {
                Some(&TOK_DEFINE) => {
                    self.define(&tokens[1..])?;
                    lines.push(Line::new());
                }
                Some(&TOK_INCLUDE) => self.include(directive_argument(line, TOK_INCLUDE), lines)?,
                _ => lines.push(self.substitute(&tokens)),
            }
        }

        Ok(())
    }

    fn define(&mut self, tokens: &[&str]) -> Result<(), PreprocessError> {
        let (name, value) = match tokens.split_first() {
            Some((name, value)) => (*name, value),
            None => return Err(PreprocessError::EmptyDefine),
        };

        if value.is_empty() {
            return Err(PreprocessError::DefineWithoutValue(name.to_owned()));
        }

        // Names inside the value are expanded once, here.
        let value = self.substitute(value);

        match self.defines.entry(name.to_owned()) {
            Entry::Vacant(vacant) => {
                debug!("defined `{}` as `{}`", name, value.join(" "));
                vacant.insert(value);
                Ok(())
            }
            Entry::Occupied(occupied) => Err(PreprocessError::DuplicateDefine {
                name: name.to_owned(),
                original_value: occupied.get().join(" "),
                new_value: value.join(" "),
            }),
        }
    }

    fn include(&mut self, name: &str, lines: &mut Vec<Line>) -> Result<(), PreprocessError> {
        if name.is_empty() {
            return Err(PreprocessError::EmptyInclude);
        }

        if self.open_includes.iter().any(|open| open == name) {
            return Err(PreprocessError::RecursiveInclude {
                name: name.to_owned(),
            });
        }

        debug!("including `{}`", name);
        let source = fs::read_to_string(name).map_err(|inner| PreprocessError::FailedInclude {
            name: name.to_owned(),
            inner,
        })?;

        self.open_includes.push(name.to_owned());
        let expanded = self.expand(&source, lines);
        self.open_includes.pop();

        expanded
    }

    fn substitute(&self, tokens: &[&str]) -> Line {
        let mut line = Line::with_capacity(tokens.len());

        for token in tokens {
            match self.defines.get(*token) {
                Some(value) => line.extend(value.iter().cloned()),
                None => line.push((*token).to_owned()),
            }
        }

        line
    }
}

/// Everything after `directive` on a line, so that include paths keep their
/// spaces and commas.
fn directive_argument<'a>(line: &'a str, directive: &str) -> &'a str {
    let code = strip_comment(line);
    match code.find(directive) {
        Some(start) => code[start + directive.len()..].trim(),
        None => "",
    }
}

/// Preprocesses `source` with no prior defines.
pub fn preprocess(source: &str) -> Result<Vec<Line>, PreprocessError> {
    Preprocessor::new().process(source)
}
