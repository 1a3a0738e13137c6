use crate::query::rewriter::{TokenConstraint, TokenExpr};
use ahash::AHashMap;
use roaring::RoaringBitmap;

/// Minimal in-memory inverted index over chunk tokens.
///
/// Stands in for the host engine's boolean evaluator: postings are one
/// bitmap per token, a rewritten expression evaluates as plain bitmap
/// intersections (with a union for the final chunk's any-of pair). No
/// lookup here ever iterates the term dictionary.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    postings: AHashMap<String, RoaringBitmap>,
    docs: RoaringBitmap,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document's encoded tokens.
    pub fn add(&mut self, doc_id: u32, tokens: &[String]) {
        self.docs.insert(doc_id);
        for token in tokens {
            self.postings
                .entry(token.clone())
                .or_default()
                .insert(doc_id);
        }
    }

    /// Documents carrying a single token.
    pub fn lookup(&self, token: &str) -> RoaringBitmap {
        self.postings.get(token).cloned().unwrap_or_default()
    }

    /// Evaluate a rewritten expression to the set of matching documents.
    pub fn eval(&self, expr: &TokenExpr) -> RoaringBitmap {
        match expr {
            TokenExpr::All => self.docs.clone(),
            TokenExpr::And(constraints) => {
                let mut acc = self.docs.clone();
                for constraint in constraints {
                    let hits = match constraint {
                        TokenConstraint::Term(token) => self.lookup(token),
                        TokenConstraint::AnyOf(tokens) => {
                            let mut union = RoaringBitmap::new();
                            for token in tokens {
                                union |= self.lookup(token);
                            }
                            union
                        }
                    };
                    acc &= hits;
                    if acc.is_empty() {
                        break;
                    }
                }
                acc
            }
        }
    }

    pub fn doc_count(&self) -> u64 {
        self.docs.len()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_lookup() {
        let mut index = MemoryIndex::new();
        index.add(1, &["a0011".to_string(), "b2233".to_string()]);
        index.add(2, &["a0011".to_string()]);

        assert_eq!(index.doc_count(), 2);
        assert_eq!(index.term_count(), 2);
        assert_eq!(index.lookup("a0011").len(), 2);
        assert_eq!(index.lookup("b2233").len(), 1);
        assert!(index.lookup("c4455").is_empty());
    }

    #[test]
    fn test_eval_intersects_constraints() {
        let mut index = MemoryIndex::new();
        index.add(1, &["a0011".to_string(), "b2233".to_string()]);
        index.add(2, &["a0011".to_string(), "b9999".to_string()]);

        let expr = TokenExpr::And(vec![
            TokenConstraint::Term("a0011".to_string()),
            TokenConstraint::Term("b2233".to_string()),
        ]);
        let hits = index.eval(&expr);
        assert_eq!(hits.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_eval_any_of_unions() {
        let mut index = MemoryIndex::new();
        index.add(1, &["b2233".to_string()]);
        index.add(2, &["t2233".to_string()]);
        index.add(3, &["x9999".to_string()]);

        let expr = TokenExpr::And(vec![TokenConstraint::AnyOf(vec![
            "b2233".to_string(),
            "t2233".to_string(),
        ])]);
        let hits = index.eval(&expr);
        assert_eq!(hits.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_eval_all_matches_every_document() {
        let mut index = MemoryIndex::new();
        index.add(7, &["a0011".to_string()]);
        index.add(9, &["b2233".to_string()]);
        assert_eq!(index.eval(&TokenExpr::All).len(), 2);
    }
}
