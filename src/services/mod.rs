mod news;

pub use news::NewsService;
