use crate::error::ParseError;
use crate::expr::{BinaryOp, Token};
use crate::rewrite::rewrite;
use crate::Int;

/// Reduce a token sequence to its integer total.
///
/// The sequence is copied before normalization, so the caller's resolved
/// tree is left untouched and re-evaluating it gives the same total.
pub fn evaluate(tokens: &[Token]) -> Result<Int, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut tokens = tokens.to_vec();
    rewrite(&mut tokens, 3, collapse_sign)?;
    rewrite(&mut tokens, 2, validate_alternation)?;

    // A leading minus negates the first value rather than binding two.
    if tokens.len() >= 2
        && matches!(tokens[0], Token::Operator(BinaryOp::Sub))
        && tokens[1].is_value()
    {
        let value = tokens.remove(1);
        tokens[0] = Token::Negated(Box::new(value));
    }

    let mut total = evaluate_token(&tokens[0])?;
    for pair in tokens[1..].chunks_exact(2) {
        let value = evaluate_token(&pair[1])?;
        total = match &pair[0] {
            Token::Operator(BinaryOp::Add) => total.checked_add(value),
            Token::Operator(BinaryOp::Sub) => total.checked_sub(value),
            _ => unreachable!("alternation was validated"),
        }
        .ok_or(ParseError::Overflow)?;
    }
    Ok(total)
}

fn evaluate_token(token: &Token) -> Result<Int, ParseError> {
    match token {
        Token::Number(x) => Ok(*x),
        Token::DiceRoll(die) => Ok(Int::from(die.rolled)),
        Token::Negated(inner) => evaluate_token(inner)?
            .checked_neg()
            .ok_or(ParseError::Overflow),
        Token::Group(children) => evaluate(children),
        Token::Operator(op) => Err(ParseError::ExpectedValue(op.to_string())),
    }
}

/// `<op> - <value>` folds the subtraction into the value, so the flat fold
/// above only ever sees strict operator/value alternation. Each collapse
/// shrinks the sequence by one, which guarantees termination.
fn collapse_sign(window: &[Token]) -> Result<Option<Vec<Token>>, ParseError> {
    match window {
        [op @ Token::Operator(_), Token::Operator(BinaryOp::Sub), value] if value.is_value() => {
            Ok(Some(vec![
                op.clone(),
                Token::Negated(Box::new(value.clone())),
            ]))
        }
        _ => Ok(None),
    }
}

/// Detects two adjacent operators or two adjacent values. Never rewrites.
fn validate_alternation(window: &[Token]) -> Result<Option<Vec<Token>>, ParseError> {
    match window {
        [a, b] if a.is_value() == b.is_value() => Err(ParseError::IllegalTokenSequence(
            a.to_string(),
            b.to_string(),
        )),
        _ => Ok(None),
    }
}
