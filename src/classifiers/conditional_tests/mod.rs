mod split_suggestion;

pub use conditional_test::ConditionalTest;
pub use numeric_threshold_test::NumericThresholdTest;
pub use split_suggestion::SplitSuggestion;
