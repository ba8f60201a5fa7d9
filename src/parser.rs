use crate::{
    assembler::is_valid_label,
    error::{SyntaxError, SyntaxErrorKind},
    statement::{Argument, Statement},
};

/// Parses a decimal, `0x` hexadecimal or `0b` binary literal with an optional
/// leading `-`. The digits themselves must not carry a sign.
fn parse_value(value: &str) -> Option<i64> {
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    let (radix, digits) = if let Some(digits) = unsigned.strip_prefix("0x") {
        (16, digits)
    } else if let Some(digits) = unsigned.strip_prefix("0b") {
        (2, digits)
    } else {
        (10, unsigned)
    };

    if !digits.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return None;
    }

    // Sign and digits are parsed together so that i64::MIN fits.
    if negative {
        i64::from_str_radix(&format!("-{}", digits), radix).ok()
    } else {
        i64::from_str_radix(digits, radix).ok()
    }
}

fn parse_argument(token: &str) -> Result<Argument, SyntaxErrorKind> {
    match parse_value(token) {
        Some(value) => Ok(Argument::Integer(value)),
        None if is_valid_label(token) => Ok(Argument::Name(token.to_owned())),
        None => Err(SyntaxErrorKind::InvalidToken(token.to_owned())),
    }
}

fn label_of(token: &str) -> Option<&str> {
    token
        .strip_suffix(':')
        .filter(|label| is_valid_label(label))
}

/// Turns the tokens of one line into statements: any number of `name:`
/// label markers, optionally followed by a mnemonic and its operands.
fn parse_line(tokens: &[&str]) -> Result<Vec<Statement>, SyntaxErrorKind> {
    let mut statements = Vec::<Statement>::default();

    for (i, token) in tokens.iter().enumerate() {
        if let Some(label) = label_of(token) {
            statements.push(Statement::label(label));
            continue;
        }

        let operands = tokens[i + 1..]
            .iter()
            .map(|token| {
                if label_of(token).is_some() {
                    Err(SyntaxErrorKind::UnexpectedLabel((*token).to_owned()))
                } else {
                    parse_argument(token)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        statements.push(Statement::instruction(*token, operands));
        break;
    }

    Ok(statements)
}

/// Parses token lines into a statement list.
pub fn parse_lines<S: AsRef<str>>(lines: &[Vec<S>]) -> Result<Vec<Statement>, SyntaxError> {
    let mut statements = Vec::<Statement>::default();

    for (line, tokens) in lines.iter().enumerate() {
        let tokens: Vec<&str> = tokens.iter().map(|token| token.as_ref()).collect();
        let parsed = parse_line(&tokens).map_err(|kind| SyntaxError { line, kind })?;
        statements.extend(parsed);
    }

    Ok(statements)
}
