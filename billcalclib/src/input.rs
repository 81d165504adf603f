//! Pairing of flat command-line tokens into label/cost pairs.

use crate::error::BillError;
use crate::Result;

/// Pair `[label, cost, label, cost, ...]` into `(label, cost)` tuples.
///
/// An odd number of tokens means a trailing label has no cost, which fails
/// with [`BillError::MalformedInput`] before anything reaches a ledger.
pub fn pair_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<(&str, &str)>> {
    if tokens.len() % 2 != 0 {
        return Err(BillError::MalformedInput(tokens.len()));
    }

    Ok(tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].as_ref(), pair[1].as_ref()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_in_order() {
        let tokens = vec!["rent", "1000", "utilities", "50"];
        let pairs = pair_tokens(&tokens).unwrap();
        assert_eq!(pairs, vec![("rent", "1000"), ("utilities", "50")]);
    }

    #[test]
    fn test_owned_tokens() {
        let tokens: Vec<String> = vec!["a".into(), "1".into()];
        assert_eq!(pair_tokens(&tokens).unwrap(), vec![("a", "1")]);
    }

    #[test]
    fn test_odd_token_count_rejected() {
        let err = pair_tokens(&["rent", "1000", "utilities"]).unwrap_err();
        assert!(matches!(err, BillError::MalformedInput(3)));
    }

    #[test]
    fn test_empty_input() {
        let tokens: [&str; 0] = [];
        assert!(pair_tokens(&tokens).unwrap().is_empty());
    }
}
