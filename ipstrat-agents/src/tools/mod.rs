pub mod novelty;

pub use novelty::PatentNoveltyCheck;
