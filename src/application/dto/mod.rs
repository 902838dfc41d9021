pub mod analytics;
pub mod articles;
pub mod authors;
pub mod categories;
pub mod comments;
pub mod outcomes;

pub use analytics::{
    AuthorActivityDto, CategoryCountDto, ContentOverviewDto, SearchResultsDto, StatisticsDto,
};
pub use articles::ArticleDto;
pub use authors::AuthorDto;
pub use categories::CategoryDto;
pub use comments::CommentDto;
pub use outcomes::{CreatedDto, DeleteResultDto, ModifiedCountDto, UpdateResultDto};
