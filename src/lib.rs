pub mod emit;
pub mod grammar;
pub mod noze;

pub use grammar::{Grammar, Rule};

/// Builds the Noze grammar document. Nothing is written.
pub fn build() -> Grammar {
    noze::grammar()
}
