//! Eviction Policy Module
//!
//! Defines the capability contract shared by every eviction discipline and
//! the runtime selector used to build one.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::{FifoPolicy, LfuPolicy, LifoPolicy, LruPolicy, MruPolicy};
use crate::error::CacheError;

// == Eviction Policy ==
/// Bookkeeping for one eviction discipline.
///
/// The cache reports every insertion and access; the policy decides which
/// key leaves when the cache is full. A policy only ever tracks keys that are
/// currently stored in the cache.
pub trait EvictionPolicy<K>: fmt::Debug {
    /// The discipline implemented by this policy.
    fn kind(&self) -> PolicyKind;

    /// Records the first insertion of `key`.
    fn on_insert(&mut self, key: &K);

    /// Records a successful lookup or a value update of `key`.
    fn on_access(&mut self, key: &K);

    /// Returns the key that should be evicted next, without removing it.
    fn select_victim(&self) -> Option<&K>;

    /// Stops tracking `key`.
    fn remove(&mut self, key: &K);

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tracked keys ordered from next victim to last victim.
    fn eviction_order(&self) -> Vec<K>;
}

// == Policy Kind ==
/// Selects one of the built-in eviction disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First in, first out
    Fifo,
    /// Last in, first out
    Lifo,
    /// Least recently used
    #[default]
    Lru,
    /// Most recently used
    Mru,
    /// Least frequently used
    Lfu,
}

impl PolicyKind {
    /// All built-in disciplines.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::Lfu,
    ];

    // == Build ==
    /// Creates an empty policy of this kind.
    pub fn build<K>(self) -> Box<dyn EvictionPolicy<K> + Send>
    where
        K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
    {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::new()),
            PolicyKind::Lifo => Box::new(LifoPolicy::new()),
            PolicyKind::Lru => Box::new(LruPolicy::new()),
            PolicyKind::Mru => Box::new(MruPolicy::new()),
            PolicyKind::Lfu => Box::new(LfuPolicy::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lifo => "lifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Mru => "mru",
            PolicyKind::Lfu => "lfu",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lifo" => Ok(PolicyKind::Lifo),
            "lru" => Ok(PolicyKind::Lru),
            "mru" => Ok(PolicyKind::Mru),
            "lfu" => Ok(PolicyKind::Lfu),
            other => Err(CacheError::InvalidRequest(format!(
                "Unknown eviction policy: {}",
                other
            ))),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("LIFO".parse::<PolicyKind>().unwrap(), PolicyKind::Lifo);
        assert_eq!(" lru ".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!("Mru".parse::<PolicyKind>().unwrap(), PolicyKind::Mru);
        assert_eq!("lfu".parse::<PolicyKind>().unwrap(), PolicyKind::Lfu);
    }

    #[test]
    fn test_policy_kind_parse_unknown() {
        let result = "random".parse::<PolicyKind>();
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[test]
    fn test_policy_kind_display_round_trips() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_policy_kind_default_is_lru() {
        assert_eq!(PolicyKind::default(), PolicyKind::Lru);
    }

    #[test]
    fn test_policy_kind_serde_lowercase() {
        let json = serde_json::to_string(&PolicyKind::Lfu).unwrap();
        assert_eq!(json, r#""lfu""#);

        let kind: PolicyKind = serde_json::from_str(r#""mru""#).unwrap();
        assert_eq!(kind, PolicyKind::Mru);
    }

    #[test]
    fn test_build_reports_kind() {
        for kind in PolicyKind::ALL {
            let policy = kind.build::<String>();
            assert_eq!(policy.kind(), kind);
            assert!(policy.is_empty());
        }
    }
}
