//! Front door of the definition compiler: lex → parse → resolve, plus the
//! values handed to the (external) template-rendering step — the semantic
//! model, on-demand overload permutations, and the compacted lookup table.

mod context;
mod error;

pub use build_ast::parse;
pub use build_sem::resolve;
pub use build_table::{IntrinsicTable, build_intrinsic_table};
pub use build_token::lex;
pub use context::{camel_case, is_first, is_last, pascal_case, snake_case};
pub use error::CompileError;
pub use permute::{Permutation, Permuter};

use sem::Sem;
use source_files::{SourceFileKey, SourceFiles};

/// Compiles one definition file into its semantic model. The file must
/// already be registered; reading and writing stay with the caller.
pub fn compile(source_files: &SourceFiles, key: SourceFileKey) -> Result<Sem, CompileError> {
    let tokens = lex(source_files.get(key).content(), key)?;
    let file = parse(tokens)?;
    let sem = resolve(&file)?;
    Ok(sem)
}
