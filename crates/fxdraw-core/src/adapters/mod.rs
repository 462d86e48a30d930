pub mod norges_bank;

pub use norges_bank::NorgesBankSource;
