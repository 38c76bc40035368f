mod books;
mod home;
mod loans;
mod not_found;
mod recommendations;

pub use books::BooksPage;
pub use home::HomePage;
pub use loans::LoansPage;
pub use not_found::NotFoundPage;
pub use recommendations::RecommendationsPage;
