//! Natural classes and corpus membership labeling

pub mod inventory;
pub mod labeler;

pub use inventory::{ClassInventory, NaturalClass};
pub use labeler::{label_corpus, label_lines, Labeling, LexicalCounts, MembershipMap};
