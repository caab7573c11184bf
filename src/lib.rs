//! Dice notation parsing and evaluation.
//!
//! An expression like `2d6 + 3 - 1d4` is tokenized into a tree of resolved
//! values (dice are rolled once, at parse time), evaluated left to right,
//! and rendered as `<expression> = <total>`. The crate is a pure function
//! of its input string: no I/O, no state between calls.

mod error;
mod eval;
mod expr;
mod parse;
mod rewrite;
mod roll;

pub use error::ParseError;
pub use eval::evaluate;
pub use expr::{render, BinaryOp, Die, Token};
pub use parse::{tokenize, tokenize_with};
pub use roll::Roller;

/// The integer type dice expressions evaluate to.
pub type Int = i64;

/// Replies longer than this are re-rendered with a truncated expression.
const MAX_REPLY_LEN: usize = 1000;

/// Evaluate a raw dice expression with the thread-local RNG.
///
/// Always returns a reply string: `"<expression> = <total>"` on success,
/// `"Error: <message>"` on failure. Nothing propagates past here.
pub fn roll(input: &str) -> String {
    roll_with(input, &mut rand::thread_rng())
}

/// Like [`roll`], drawing dice outcomes from the given roller.
pub fn roll_with<R: Roller>(input: &str, roller: &mut R) -> String {
    match try_roll(input, roller) {
        Ok(reply) => reply,
        Err(why) => format!("Error: {}", why),
    }
}

fn try_roll<R: Roller>(input: &str, roller: &mut R) -> Result<String, ParseError> {
    let tokens = parse::tokenize_with(input, roller)?;
    let rendered = expr::render(&tokens);
    let total = eval::evaluate(&tokens)?;

    let reply = format!("{} = {}", rendered, total);
    Ok(if reply.len() > MAX_REPLY_LEN {
        // Renderings are pure ASCII, so byte truncation is safe. The total
        // comes from the same resolved tree and is unaffected.
        let cut = rendered.len().min(MAX_REPLY_LEN);
        format!("{} = {}", &rendered[..cut], total)
    } else {
        reply
    })
}
