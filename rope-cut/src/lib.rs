//! Cut a rope of integer length `n` into at least two integer pieces so that
//! the product of the piece lengths is as large as possible.
//!
//! [`max_product_after_cutting`] is the bottom-up table solution, the other
//! strategies exist to cross-check it.

pub mod closed_form;
pub mod error;
pub mod exhaustive;
mod table;

use std::{fmt::Display, str::FromStr};

pub use error::{CutError, CutResult};
pub use table::{best_cut, max_product_after_cutting};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cut {
    pub product: u64,
    /// longest first, always at least two of them
    pub segments: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Table,
    ClosedForm,
    Exhaustive,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Table, Strategy::ClosedForm, Strategy::Exhaustive];

    pub fn solve(self, n: i64) -> CutResult<Cut> {
        match self {
            Strategy::Table => best_cut(n),
            Strategy::ClosedForm => closed_form::max_product(n),
            Strategy::Exhaustive => {
                let (partis, product) = exhaustive::max_products(n)?;
                // n >= 2 always has at least one partition
                let segments = partis.into_iter().next().unwrap_or_default();
                Ok(Cut { product, segments })
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Table => "table",
            Strategy::ClosedForm => "closed-form",
            Strategy::Exhaustive => "exhaustive",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                format!("unknown strategy `{s}`, expected one of: table, closed-form, exhaustive")
            })
    }
}

/// `n` as a table index, rejecting anything that can't be cut at least once
pub(crate) fn rope_length(n: i64) -> CutResult<usize> {
    if n < 2 {
        return Err(CutError::InvalidLength { length: n });
    }
    usize::try_from(n).map_err(|_| CutError::LengthTooLarge { length: n })
}
