//! Entities and the form payloads that create or change them.

pub mod baked_good;
pub mod bakery;

pub use baked_good::{BakedGood, NewBakedGood};
pub use bakery::{Bakery, BakeryNameUpdate};

/// Sort direction for price-ordered queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceOrder {
    Ascending,
    Descending,
}

impl PriceOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            PriceOrder::Ascending => "ASC",
            PriceOrder::Descending => "DESC",
        }
    }
}
