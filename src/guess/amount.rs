// src/guess/amount.rs
use tracing::{debug, trace};

use crate::process::types::TypedValue;

/// A fully numeric column still in the running for amount/balance.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub index: usize,
    pub values: Vec<f64>,
}

impl Candidate {
    fn is_all_integer(&self) -> bool {
        self.values.iter().all(|v| v.fract() == 0.0)
    }

    fn has_zero(&self) -> bool {
        self.values.iter().any(|&v| v == 0.0)
    }
}

/// Ordered pool of numeric columns. Assigning a role removes the column, so
/// no column can take two roles.
#[derive(Clone, Debug, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    /// Every column where all rows hold a number, in ascending index order.
    pub fn from_rows(rows: &[Vec<TypedValue>], num_columns: usize) -> Self {
        let candidates = (0..num_columns)
            .filter_map(|index| {
                let values = rows
                    .iter()
                    .map(|row| row.get(index).and_then(TypedValue::as_number))
                    .collect::<Option<Vec<f64>>>()?;
                Some(Candidate { index, values })
            })
            .collect();
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.candidates.first().map(|c| c.index)
    }

    pub fn remove(&mut self, index: usize) {
        self.candidates.retain(|c| c.index != index);
    }

    /// Drop columns whose values are all whole numbers.
    pub fn discard_integer_columns(&mut self) {
        self.candidates.retain(|c| !c.is_all_integer());
    }

    /// First column without an exact zero, else the first column.
    fn preferred_amount(&self) -> Option<usize> {
        self.candidates
            .iter()
            .find(|c| !c.has_zero())
            .or_else(|| self.candidates.first())
            .map(|c| c.index)
    }
}

/// Header cell matching any keyword, case-insensitively: exact matches across
/// all cells are tried before substring matches.
pub fn find_header_match(header: &[String], keywords: &[String]) -> Option<usize> {
    let labels: Vec<String> = header.iter().map(|l| l.to_lowercase()).collect();
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    labels
        .iter()
        .position(|label| keywords.iter().any(|k| label == k))
        .or_else(|| {
            labels
                .iter()
                .position(|label| keywords.iter().any(|k| label.contains(k.as_str())))
        })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AmountBalance {
    pub amount: Option<usize>,
    pub balance: Option<usize>,
}

/// Header labels consulted for the amount/balance roles.
#[derive(Clone, Copy, Debug)]
pub struct HeaderKeywords<'a> {
    pub header: &'a [String],
    pub amount: &'a [String],
    pub balance: &'a [String],
}

pub fn guess_amount_and_balance(
    rows: &[Vec<TypedValue>],
    num_columns: usize,
    keywords: Option<HeaderKeywords<'_>>,
) -> AmountBalance {
    let mut pool = CandidatePool::from_rows(rows, num_columns);
    trace!(candidates = pool.len(), "numeric columns");

    // 1) trivial pools
    if pool.is_empty() {
        return AmountBalance::default();
    }
    if pool.len() == 1 {
        return AmountBalance {
            amount: pool.first(),
            balance: None,
        };
    }

    let mut guess = AmountBalance::default();

    // 2) header labels
    if let Some(kw) = keywords {
        guess.amount = find_header_match(kw.header, kw.amount);
        guess.balance = find_header_match(kw.header, kw.balance);
        if guess.amount.is_some() && guess.amount == guess.balance {
            // "balance amount" and friends belong to balance
            guess.amount = None;
        }
        for index in [guess.amount, guess.balance].into_iter().flatten() {
            pool.remove(index);
        }
        debug!(amount = ?guess.amount, balance = ?guess.balance, "header keyword matches");
    }

    // 3) statistics on whatever is left
    if guess.amount.is_none() || guess.balance.is_none() {
        pool.discard_integer_columns();

        if guess.amount.is_none() {
            guess.amount = pool.preferred_amount();
            if let Some(index) = guess.amount {
                pool.remove(index);
            }
        }
        if guess.balance.is_none() {
            guess.balance = pool.first();
        }
        debug!(amount = ?guess.amount, balance = ?guess.balance, "statistical fallback");
    }

    guess
}
