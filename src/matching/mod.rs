pub mod codes;
pub mod joiner;
pub mod names;

pub use codes::ClubCodes;
pub use joiner::{ImpliedProbabilities, JoinedFixture, MatchOdds, MatchOddsJoiner, Outcome, QuoteIndex};
pub use names::{contains_either, normalize, pair_key, TeamNameMatcher};
