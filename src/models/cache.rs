//! Memoization of prediction scores keyed on exact request values

use crate::types::request::PredictionRequest;
use std::collections::HashMap;
use std::sync::RwLock;

/// Exact-equality key for a request.
///
/// Floats are compared by bit pattern; `-0.0` is folded into `0.0` so the two
/// zeros share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    amounts: [u64; 3],
    addr: [u16; 2],
    codes: [u8; 5],
}

impl CacheKey {
    pub fn new(request: &PredictionRequest) -> Self {
        Self {
            amounts: [
                float_bits(request.card1),
                float_bits(request.card2),
                float_bits(request.transaction_amt),
            ],
            addr: [request.addr1, request.addr2],
            codes: [
                request.card4.code(),
                request.card6.code(),
                request.p_emaildomain.code(),
                request.product_cd.code(),
                request.device_type.code(),
            ],
        }
    }
}

fn float_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Process-lifetime score cache. Entries are never evicted.
#[derive(Debug, Default)]
pub struct PredictionCache {
    entries: RwLock<HashMap<CacheKey, f64>>,
}

impl PredictionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached score for `key`
    pub fn get(&self, key: &CacheKey) -> Option<f64> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).copied())
    }

    /// Store a score. A concurrent insert for the same key keeps the first value.
    pub fn insert(&self, key: CacheKey, score: f64) -> f64 {
        match self.entries.write() {
            Ok(mut entries) => *entries.entry(key).or_insert(score),
            Err(_) => score,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::request::EmailDomain;

    #[test]
    fn test_exact_key_equality() {
        let base = PredictionRequest::default();
        let same = PredictionRequest::default();
        let other = PredictionRequest {
            p_emaildomain: EmailDomain::Yahoo,
            ..PredictionRequest::default()
        };
        let nudged = PredictionRequest {
            card1: f64::EPSILON,
            ..PredictionRequest::default()
        };

        assert_eq!(CacheKey::new(&base), CacheKey::new(&same));
        assert_ne!(CacheKey::new(&base), CacheKey::new(&other));
        assert_ne!(CacheKey::new(&base), CacheKey::new(&nudged));
    }

    #[test]
    fn test_signed_zero_shares_entry() {
        let negative = PredictionRequest {
            card2: -0.0,
            ..PredictionRequest::default()
        };

        assert_eq!(
            CacheKey::new(&negative),
            CacheKey::new(&PredictionRequest::default())
        );
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = PredictionCache::new();
        let key = CacheKey::new(&PredictionRequest::default());

        assert_eq!(cache.get(&key), None);
        assert_eq!(cache.insert(key, 0.42), 0.42);
        assert_eq!(cache.get(&key), Some(0.42));
        assert_eq!(cache.insert(key, 0.99), 0.42);

        assert_eq!(cache.len(), 1);
    }
}
