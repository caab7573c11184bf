use crate::roll::Roller;
use crate::Int;
use std::fmt::{self, Write};

/// The two connectives a dice expression supports. Anything else fails at
/// the tokenizer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
        };
        f.write_char(c)
    }
}

/// A single die, resolved the moment it is constructed. The outcome never
/// changes afterwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Die {
    pub faces: u32,
    pub rolled: u32,
}

impl Die {
    pub(crate) fn roll<R: Roller>(faces: u32, roller: &mut R) -> Self {
        Self {
            faces,
            rolled: roller.roll(faces),
        }
    }
}

impl fmt::Display for Die {
    // A die renders as what it rolled, never as its face count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rolled, f)
    }
}

/// One classified unit of a dice expression.
///
/// The tree is built in a single tokenizer pass and read-only afterwards;
/// each evaluation call owns its own tree and discards it on return.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    Number(Int),
    DiceRoll(Die),
    Operator(BinaryOp),
    Negated(Box<Token>),
    Group(Vec<Token>),
}

impl Token {
    /// Everything except a bare operator resolves to a value.
    pub fn is_value(&self) -> bool {
        !matches!(self, Self::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => fmt::Display::fmt(x, f),
            Self::DiceRoll(die) => fmt::Display::fmt(die, f),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::Negated(inner) => write!(f, "-{}", inner),
            Self::Group(children) => write!(f, "({})", render(children)),
        }
    }
}

/// Space-joined rendering of a token sequence. The root of an expression
/// renders through this without outer parentheses; nested groups add their
/// own via `Display`.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_per_variant() {
        assert_eq!(Token::Number(42).to_string(), "42");
        assert_eq!(Token::Number(-7).to_string(), "-7");
        assert_eq!(
            Token::DiceRoll(Die {
                faces: 20,
                rolled: 13
            })
            .to_string(),
            "13"
        );
        assert_eq!(Token::Operator(BinaryOp::Add).to_string(), "+");
        assert_eq!(Token::Operator(BinaryOp::Sub).to_string(), "-");
        assert_eq!(Token::Negated(Box::new(Token::Number(4))).to_string(), "-4");
        assert_eq!(
            Token::Group(vec![
                Token::Number(1),
                Token::Operator(BinaryOp::Add),
                Token::Number(2),
            ])
            .to_string(),
            "(1 + 2)"
        );
    }

    #[test]
    fn test_render_root_without_parens() {
        let tokens = [
            Token::Number(5),
            Token::Operator(BinaryOp::Sub),
            Token::Number(3),
        ];
        assert_eq!(render(&tokens), "5 - 3");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_nested_negation_renders_flat() {
        let t = Token::Negated(Box::new(Token::Negated(Box::new(Token::Number(1)))));
        assert_eq!(t.to_string(), "--1");
    }
}
