//! Predicates described by configuration.
//!
//! A [`PredicateConfig`] is plain serde data, so predicate trees can live in TOML files next to
//! the rest of an application's settings and be assembled at startup:
//!
//! ```toml
//! op = "all"
//!
//! [[of]]
//! op = "ge"
//! value = 0
//!
//! [[of]]
//! op = "lt"
//! value = 150
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::trace;

use crate::{errors::ConfigError, predicate1};

/// A one-argument predicate assembled at runtime.
pub type BoxedPredicate1<A> = Box<dyn Fn(&A) -> bool + Send + Sync>;

/// Description of a one-argument predicate over values of type `A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PredicateConfig<A> {
    /// Matches everything or nothing.
    Constantly {
        /// The result returned for every input.
        result: bool,
    },

    /// Matches values equal to `value`.
    Eq {
        /// The value to compare against.
        value: A,
    },

    /// Matches values not equal to `value`.
    Ne {
        /// The value to compare against.
        value: A,
    },

    /// Matches values strictly greater than `value`.
    Gt {
        /// The value to compare against.
        value: A,
    },

    /// Matches values greater than or equal to `value`.
    Ge {
        /// The value to compare against.
        value: A,
    },

    /// Matches values strictly less than `value`.
    Lt {
        /// The value to compare against.
        value: A,
    },

    /// Matches values less than or equal to `value`.
    Le {
        /// The value to compare against.
        value: A,
    },

    /// Matches values in the inclusive range `low..=high`.
    Between {
        /// Inclusive lower bound.
        low: A,

        /// Inclusive upper bound.
        high: A,
    },

    /// Negates the inner predicate.
    Not {
        /// The predicate to negate.
        inner: Box<PredicateConfig<A>>,
    },

    /// Matches when every listed predicate matches. An empty list matches everything.
    All {
        /// The predicates to conjoin.
        of: Vec<PredicateConfig<A>>,
    },

    /// Matches when at least one listed predicate matches. An empty list matches nothing.
    Any {
        /// The predicates to disjoin.
        of: Vec<PredicateConfig<A>>,
    },
}

impl<A> PredicateConfig<A> {
    /// Parses a predicate description from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError>
    where
        A: DeserializeOwned,
    {
        Ok(toml::from_str(text)?)
    }

    /// The `op` tag of this node.
    pub const fn op(&self) -> &'static str {
        match self {
            Self::Constantly { .. } => "constantly",
            Self::Eq { .. } => "eq",
            Self::Ne { .. } => "ne",
            Self::Gt { .. } => "gt",
            Self::Ge { .. } => "ge",
            Self::Lt { .. } => "lt",
            Self::Le { .. } => "le",
            Self::Between { .. } => "between",
            Self::Not { .. } => "not",
            Self::All { .. } => "all",
            Self::Any { .. } => "any",
        }
    }
}

impl<A: Ord + Send + Sync + 'static> PredicateConfig<A> {
    /// Validates this description and assembles the predicate it describes.
    pub fn build(self) -> Result<BoxedPredicate1<A>, ConfigError> {
        trace!(op = self.op(), "building predicate");

        let pred: BoxedPredicate1<A> = match self {
            Self::Constantly { result } => {
                Box::new(predicate1::to_fn::<A>(predicate1::constantly(result)))
            }
            Self::Eq { value } => Box::new(predicate1::eq::<A, A>(value)),
            Self::Ne { value } => Box::new(predicate1::ne::<A, A>(value)),
            Self::Gt { value } => Box::new(predicate1::gt::<A, A>(value)),
            Self::Ge { value } => Box::new(predicate1::ge::<A, A>(value)),
            Self::Lt { value } => Box::new(predicate1::lt::<A, A>(value)),
            Self::Le { value } => Box::new(predicate1::le::<A, A>(value)),
            Self::Between { low, high } => {
                if low > high {
                    return Err(ConfigError::EmptyRange);
                }
                Box::new(predicate1::between::<A, A>(low, high))
            }
            Self::Not { inner } => Box::new(predicate1::not::<A>(inner.build()?)),
            Self::All { of } => Box::new(predicate1::all::<A, _>(build_all(of)?)),
            Self::Any { of } => Box::new(predicate1::any::<A, _>(build_all(of)?)),
        };

        Ok(pred)
    }
}

fn build_all<A: Ord + Send + Sync + 'static>(
    configs: Vec<PredicateConfig<A>>,
) -> Result<Vec<BoxedPredicate1<A>>, ConfigError> {
    configs.into_iter().map(PredicateConfig::build).collect()
}
