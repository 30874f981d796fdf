//! Column role inference over typed data rows (header already removed).

pub mod amount;
pub mod date;
pub mod description;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::ParseOptions;
use crate::process::types::TypedValue;

pub use amount::{find_header_match, guess_amount_and_balance, AmountBalance, HeaderKeywords};
pub use date::guess_date_column;
pub use description::guess_description_column;

/// Best-effort column index per role; `None` when there is no confident guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ColumnGuesses {
    pub date: Option<usize>,
    pub amount: Option<usize>,
    pub balance: Option<usize>,
    pub description: Option<usize>,
}

#[instrument(level = "debug", skip_all, fields(rows = rows.len(), columns = num_columns))]
pub fn guess_columns(
    header: Option<&[String]>,
    rows: &[Vec<TypedValue>],
    num_columns: usize,
    options: &ParseOptions,
) -> ColumnGuesses {
    if rows.is_empty() {
        return ColumnGuesses::default();
    }

    let keywords = header
        .filter(|_| options.header_keyword_matching)
        .map(|header| HeaderKeywords {
            header,
            amount: &options.amount_keywords,
            balance: &options.balance_keywords,
        });
    let AmountBalance { amount, balance } = guess_amount_and_balance(rows, num_columns, keywords);

    let guesses = ColumnGuesses {
        date: guess_date_column(rows, num_columns),
        amount,
        balance,
        description: guess_description_column(rows, num_columns),
    };
    debug!(?guesses, "column guesses");
    guesses
}
