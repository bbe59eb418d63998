mod currency;
mod posting;

pub use currency::RateTable;
pub use posting::{Posting, PostingBuilder};
