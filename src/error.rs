/// Every way a dice expression can fail, from classification through
/// evaluation. The façade renders these as `Error: <message>`.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("unparseable token {0}")]
    UnparseableToken(String),
    #[error("cannot roll fewer than 1 die")]
    NonPositiveDiceCount,
    #[error("cannot roll a die with fewer than 1 face")]
    NonPositiveDiceFaces,
    #[error("need at least one value")]
    EmptyExpression,
    #[error("illegal token sequence {0} {1}")]
    IllegalTokenSequence(String, String),
    #[error("expected a value, found {0}")]
    ExpectedValue(String),
    #[error("arithmetic overflow")]
    Overflow,
}
