pub mod builder;
pub mod predicate;
pub mod rewriter;

pub use builder::{TermQueryBuilder, WildcardQueryBuilder};
pub use predicate::MatchPredicate;
pub use rewriter::{rewrite, rewrite_pattern, TokenConstraint, TokenExpr};
