mod article;
mod news;
mod table;

pub use article::{ArticleRef, RankingPeriod};
pub use news::{Comment, RankEntry};
pub use table::{Record, ResultTable};
