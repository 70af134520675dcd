pub mod keywords;
pub mod matcher;
pub mod recommend;

pub use keywords::{keyword_groups, keywords_for, SPECIALTY_KEYWORDS};
pub use matcher::match_symptoms;
pub use recommend::recommend;
