//! Random selection over a preference document.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::debug;

use crate::document::PreferenceDocument;
use crate::error::LotteryError;

/// Where the candidate pool of a draw came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionMethod {
    /// One person's preference list.
    Person { person: String },
    /// The union of every person's preferences.
    AllOptions,
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMethod::Person { person } => write!(f, "{person}'s preferences"),
            SelectionMethod::AllOptions => f.write_str("all options"),
        }
    }
}

/// A drawn food name and the pool it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub food: String,
    pub method: SelectionMethod,
}

/// Build the session generator: fixed when `seed` is given, entropy otherwise.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw one food uniformly at random.
///
/// With `person`, the pool is that person's list as configured (duplicates
/// included). Without, it is the set of distinct foods across everyone. An
/// empty pool, including an unconfigured person, is [`LotteryError::EmptyPool`].
pub fn select_one<R: Rng + ?Sized>(
    document: &PreferenceDocument,
    person: Option<&str>,
    rng: &mut R,
) -> Result<Selection, LotteryError> {
    let options: Vec<String>;
    let (pool, method) = match person {
        Some(name) => (
            document.preferences_for(name),
            SelectionMethod::Person {
                person: name.to_string(),
            },
        ),
        None => {
            options = document.all_food_options().into_iter().collect();
            (options.as_slice(), SelectionMethod::AllOptions)
        }
    };

    let food = pool
        .choose(rng)
        .cloned()
        .ok_or_else(|| LotteryError::EmptyPool {
            person: person.map(str::to_string),
        })?;
    debug!(pool_size = pool.len(), food = %food, method = %method, "drew food");
    Ok(Selection { food, method })
}
