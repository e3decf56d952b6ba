pub mod codes;
pub mod merge;
pub mod record;
pub mod tags;

mod error;
mod qualification;

pub use error::SourceError;
pub use qualification::Qualification;

pub use codes::parse_codes;
pub use emoji_test::parse_emoji_test;
pub use emoji_test::EmojiTestParser;
pub use emoji_test::ParseStats;
pub use merge::merge;
pub use record::EmojiRecord;
pub use tags::TagIndex;
