//! CLI command implementations.

mod check;
mod meta;
mod resolve;
mod tokens;

pub use check::{run_check, CheckArgs};
pub use meta::{run_meta, MetaArgs};
pub use resolve::{run_resolve, ResolveArgs};
pub use tokens::{run_tokens, TokensArgs};
