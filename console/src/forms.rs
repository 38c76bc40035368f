use derive_more::Display;
use payloads::{
    AuthorId, BookId, LoanId, requests,
    requests::{AuthorDetails, BookDetails},
};
use std::fmt;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
    Title,
    Isbn,
    Year,
    Author,
    Name,
    Nationality,
    Borrower,
    AuthorQuery,
}

/// Validation failures caught before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("book id is not a number")]
    InvalidBookId,
    #[error("author id is not a number")]
    InvalidAuthorId,
    #[error("publication year is not a number")]
    InvalidYear,
}

/// Field values of one create/edit dialog, kept in the shape the form
/// controls use.
pub trait Form: Clone + Default + PartialEq + fmt::Debug {
    /// Id of the record an edit session is bound to.
    type Id: Copy + Eq + fmt::Debug;
    /// The request body a valid form turns into.
    type Payload: Clone + fmt::Debug;

    fn validate(&self) -> Result<Self::Payload, FormError>;
}

/// A form that can also be opened pre-populated from an existing record.
pub trait EditForm: Form {
    type Entity;

    fn from_entity(entity: &Self::Entity) -> (Self::Id, Self);
}

fn required(value: &str, field: Field) -> Result<(), FormError> {
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub isbn: String,
    /// As typed, so the field can be cleared while editing.
    pub publication_year: String,
    /// Selected author, as the select control's string value.
    pub author_id: String,
}

impl BookForm {
    pub fn for_year(publication_year: i32) -> Self {
        Self {
            title: String::new(),
            isbn: String::new(),
            publication_year: publication_year.to_string(),
            author_id: String::new(),
        }
    }
}

impl Default for BookForm {
    /// A blank form defaults the publication year to the current year.
    fn default() -> Self {
        Self::for_year(i32::from(jiff::Zoned::now().year()))
    }
}

impl Form for BookForm {
    type Id = BookId;
    type Payload = BookDetails;

    fn validate(&self) -> Result<BookDetails, FormError> {
        required(&self.title, Field::Title)?;
        required(&self.isbn, Field::Isbn)?;
        required(&self.author_id, Field::Author)?;
        let author_id = self
            .author_id
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::InvalidAuthorId)?;
        required(self.publication_year.trim(), Field::Year)?;
        let publication_year = self
            .publication_year
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidYear)?;

        Ok(BookDetails {
            title: self.title.clone(),
            isbn: self.isbn.clone(),
            publication_year,
            author_id: AuthorId(author_id),
        })
    }
}

impl EditForm for BookForm {
    type Entity = payloads::Book;

    fn from_entity(book: &payloads::Book) -> (BookId, Self) {
        let form = Self {
            title: book.title.clone(),
            isbn: book.isbn.clone(),
            publication_year: book.publication_year.to_string(),
            author_id: book.author_id.to_string(),
        };
        (book.id, form)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorForm {
    pub name: String,
    pub nationality: String,
}

impl Form for AuthorForm {
    type Id = AuthorId;
    type Payload = AuthorDetails;

    fn validate(&self) -> Result<AuthorDetails, FormError> {
        required(&self.name, Field::Name)?;
        required(&self.nationality, Field::Nationality)?;
        Ok(AuthorDetails {
            name: self.name.clone(),
            nationality: self.nationality.clone(),
        })
    }
}

impl EditForm for AuthorForm {
    type Entity = payloads::Author;

    fn from_entity(author: &payloads::Author) -> (AuthorId, Self) {
        let form = Self {
            name: author.name.clone(),
            nationality: author.nationality.clone(),
        };
        (author.id, form)
    }
}

/// Loans can only be created, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanForm {
    /// Selected book, as the select control's string value.
    pub book_id: String,
    pub borrower_name: String,
}

impl Form for LoanForm {
    type Id = LoanId;
    type Payload = requests::CreateLoan;

    fn validate(&self) -> Result<requests::CreateLoan, FormError> {
        let book_id = self
            .book_id
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::InvalidBookId)?;
        let borrower_name = self.borrower_name.trim();
        if borrower_name.is_empty() {
            return Err(FormError::Missing(Field::Borrower));
        }

        Ok(requests::CreateLoan {
            book_id: BookId(book_id),
            borrower_name: borrower_name.to_string(),
        })
    }
}

/// Author names searched for recommendations must not be blank.
pub fn validate_author_query(query: &str) -> Result<&str, FormError> {
    let query = query.trim();
    if query.is_empty() {
        Err(FormError::Missing(Field::AuthorQuery))
    } else {
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{Author, Book};

    #[test]
    fn book_form_requires_fields_and_numeric_author() {
        let mut form = BookForm::for_year(1965);
        assert_eq!(form.validate(), Err(FormError::Missing(Field::Title)));

        form.title = "Dune".into();
        form.isbn = "9780441013593".into();
        assert_eq!(form.validate(), Err(FormError::Missing(Field::Author)));

        form.author_id = "three".into();
        assert_eq!(form.validate(), Err(FormError::InvalidAuthorId));

        form.author_id = "3".into();
        form.publication_year.clear();
        assert_eq!(form.validate(), Err(FormError::Missing(Field::Year)));

        form.publication_year = "19x5".into();
        assert_eq!(form.validate(), Err(FormError::InvalidYear));

        form.publication_year = " 1965 ".into();
        let details = form.validate().unwrap();
        assert_eq!(details.author_id, AuthorId(3));
        assert_eq!(details.publication_year, 1965);
    }

    #[test]
    fn blank_book_form_defaults_to_current_year() {
        let year = jiff::Zoned::now().year().to_string();
        assert_eq!(BookForm::default().publication_year, year);
    }

    #[test]
    fn editing_copies_values_and_stringifies_author() {
        let book = Book {
            id: BookId(9),
            title: "Emma".into(),
            isbn: "9780141439587".into(),
            publication_year: 1815,
            author_id: AuthorId(12),
            author_name: Some("Jane Austen".into()),
        };
        let (id, form) = BookForm::from_entity(&book);
        assert_eq!(id, BookId(9));
        assert_eq!(form.author_id, "12");
        assert_eq!(form.publication_year, "1815");

        let author = Author {
            id: AuthorId(12),
            name: "Jane Austen".into(),
            nationality: "British".into(),
        };
        let (id, form) = AuthorForm::from_entity(&author);
        assert_eq!(id, AuthorId(12));
        assert_eq!(form.nationality, "British");
    }

    #[test]
    fn loan_form_checks_book_id_before_borrower() {
        let form = LoanForm {
            book_id: String::new(),
            borrower_name: "   ".into(),
        };
        assert_eq!(form.validate(), Err(FormError::InvalidBookId));

        let form = LoanForm {
            book_id: "4".into(),
            borrower_name: "   ".into(),
        };
        assert_eq!(form.validate(), Err(FormError::Missing(Field::Borrower)));

        let form = LoanForm {
            book_id: "4".into(),
            borrower_name: "  Ada Lovelace ".into(),
        };
        let loan = form.validate().unwrap();
        assert_eq!(loan.book_id, BookId(4));
        assert_eq!(loan.borrower_name, "Ada Lovelace");
    }

    #[test]
    fn author_query_is_trimmed() {
        assert_eq!(validate_author_query(" J. Austen "), Ok("J. Austen"));
        assert_eq!(
            validate_author_query("  "),
            Err(FormError::Missing(Field::AuthorQuery))
        );
    }
}
