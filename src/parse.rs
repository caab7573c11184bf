use crate::error::ParseError;
use crate::expr::{BinaryOp, Die, Token};
use crate::roll::Roller;
use crate::Int;
use logos::Logos;

/// Tokenize with the thread-local RNG.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    tokenize_with(input, &mut rand::thread_rng())
}

/// Tokenize the raw input into the root token sequence, drawing dice
/// outcomes from `roller`.
///
/// Operators and parentheses are padded with whitespace first, so `1+2`
/// and `1 + 2` lex identically; each whitespace-separated fragment is then
/// classified on its own. Dice fragments expand into groups of already
/// resolved rolls, so randomness happens here and never during evaluation.
pub fn tokenize_with<R: Roller>(input: &str, roller: &mut R) -> Result<Vec<Token>, ParseError> {
    pad(input)
        .split_whitespace()
        .map(|fragment| classify(fragment, roller))
        .collect()
}

fn pad(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '+' | '-' | '(' | ')' => {
                out.push(' ');
                out.push(c);
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

#[derive(Logos, Debug, Copy, Clone, PartialEq)]
enum Fragment {
    #[regex(r"[0-9]+d[0-9]+", |lex| parse_dice(lex.slice()))]
    Dice(DiceSpec),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    Integer(Int),

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

/// A dice fragment before validation and expansion.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct DiceSpec {
    count: u32,
    faces: u32,
}

// `split_once` cannot fail: the regex guarantees a 'd' between digit runs.
// The digit runs themselves can still overflow, which rejects the fragment.
fn parse_dice(s: &str) -> Result<DiceSpec, std::num::ParseIntError> {
    let (count, faces) = s.split_once('d').unwrap();
    Ok(DiceSpec {
        count: count.parse()?,
        faces: faces.parse()?,
    })
}

fn classify<R: Roller>(fragment: &str, roller: &mut R) -> Result<Token, ParseError> {
    let mut lex = Fragment::lexer(fragment);
    let kind = match lex.next() {
        Some(Fragment::Error) | None => {
            return Err(ParseError::UnparseableToken(fragment.to_string()))
        }
        // A partial match ("2d6x", "1.5") is just as unparseable. This also
        // rejects the literal "(" and ")" fragments the padding produces.
        Some(_) if lex.span().end != fragment.len() => {
            return Err(ParseError::UnparseableToken(fragment.to_string()))
        }
        Some(kind) => kind,
    };

    match kind {
        Fragment::Dice(spec) => expand(spec, roller),
        Fragment::Plus => Ok(Token::Operator(BinaryOp::Add)),
        Fragment::Minus => Ok(Token::Operator(BinaryOp::Sub)),
        Fragment::Integer(value) => Ok(Token::Number(value)),
        Fragment::Error => unreachable!("handled above"),
    }
}

/// Expand `NdF` into a group of `N` resolved dice joined by implicit `+`.
fn expand<R: Roller>(spec: DiceSpec, roller: &mut R) -> Result<Token, ParseError> {
    if spec.count == 0 {
        return Err(ParseError::NonPositiveDiceCount);
    }
    if spec.faces == 0 {
        return Err(ParseError::NonPositiveDiceFaces);
    }

    let mut children = Vec::with_capacity(spec.count as usize * 2 - 1);
    for i in 0..spec.count {
        if i > 0 {
            children.push(Token::Operator(BinaryOp::Add));
        }
        children.push(Token::DiceRoll(Die::roll(spec.faces, roller)));
    }
    Ok(Token::Group(children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::StepRoller;

    fn tokens(input: &str) -> Result<Vec<Token>, ParseError> {
        tokenize_with(input, &mut StepRoller::new(1, 1))
    }

    #[test]
    fn test_padding_is_whitespace_insensitive() {
        assert_eq!(tokens("1+2").unwrap(), tokens("1 + 2").unwrap());
        assert_eq!(tokens("10-4").unwrap(), tokens(" 10 -  4 ").unwrap());
        assert_eq!(tokens("").unwrap(), vec![]);
    }

    #[test]
    fn test_classify_numbers_and_operators() {
        assert_eq!(
            tokens("1 + 2 - 34").unwrap(),
            vec![
                Token::Number(1),
                Token::Operator(BinaryOp::Add),
                Token::Number(2),
                Token::Operator(BinaryOp::Sub),
                Token::Number(34),
            ]
        );
    }

    #[test]
    fn test_dice_expand_into_groups() {
        assert_eq!(
            tokens("3d6").unwrap(),
            vec![Token::Group(vec![
                Token::DiceRoll(Die { faces: 6, rolled: 1 }),
                Token::Operator(BinaryOp::Add),
                Token::DiceRoll(Die { faces: 6, rolled: 2 }),
                Token::Operator(BinaryOp::Add),
                Token::DiceRoll(Die { faces: 6, rolled: 3 }),
            ])]
        );
        // A single die still expands into a one-child group.
        assert_eq!(
            tokens("1d20").unwrap(),
            vec![Token::Group(vec![Token::DiceRoll(Die {
                faces: 20,
                rolled: 1
            })])]
        );
    }

    #[test]
    fn test_zero_dice_rejected() {
        assert_eq!(tokens("0d6"), Err(ParseError::NonPositiveDiceCount));
        assert_eq!(tokens("1d0"), Err(ParseError::NonPositiveDiceFaces));
        assert_eq!(tokens("0d0"), Err(ParseError::NonPositiveDiceCount));
    }

    #[test]
    fn test_unparseable_fragments() {
        for bad in ["x", "2d", "d6", "2d6x", "1.5", "*", "99999999999999999999"] {
            assert_eq!(
                tokens(bad),
                Err(ParseError::UnparseableToken(bad.to_string())),
                "fragment {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parens_are_rejected() {
        assert_eq!(
            tokens("(1 + 2)"),
            Err(ParseError::UnparseableToken("(".to_string()))
        );
        assert_eq!(
            tokens(")"),
            Err(ParseError::UnparseableToken(")".to_string()))
        );
    }
}
