mod tally;

pub use tally::ExtensionTally;
