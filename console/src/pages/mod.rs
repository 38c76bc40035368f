pub mod books;
pub mod loans;
pub mod recommendations;

pub use books::{BooksPage, BooksState};
pub use loans::{LoanFilter, LoansPage, LoansState};
pub use recommendations::{
    RANDOM_COUNT, RecommendationTab, RecommendationsPage, RecommendationsState,
};
