//! Localization tables. Every page is written once and reads its text from
//! the [`Messages`] of the active [`Locale`].

use crate::forms::{Field, FormError};
use jiff::civil::Date;
use payloads::LoanStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    French,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::French];

    /// Path segment used in routes.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Self::English => &ENGLISH,
            Self::French => &FRENCH,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub app_title: &'static str,
    pub language_name: &'static str,
    pub nav_books: &'static str,
    pub nav_loans: &'static str,
    pub nav_recommendations: &'static str,
    pub not_found: &'static str,
    pub dismiss: &'static str,

    pub home_heading: &'static str,
    pub home_tagline: &'static str,
    pub home_books_title: &'static str,
    pub home_books_description: &'static str,
    pub home_loans_title: &'static str,
    pub home_loans_description: &'static str,
    pub home_recommendations_title: &'static str,
    pub home_recommendations_description: &'static str,
    pub view_link: &'static str,

    pub loading: &'static str,
    /// Shown wherever a referenced record is missing from the loaded data.
    pub unknown: &'static str,
    /// The same, for a book's author.
    pub unknown_author: &'static str,
    pub add: &'static str,
    pub create: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub by_author: &'static str,

    pub field_title: &'static str,
    pub field_isbn: &'static str,
    pub field_year: &'static str,
    pub field_author: &'static str,
    pub field_name: &'static str,
    pub field_nationality: &'static str,
    pub field_book: &'static str,
    pub field_borrower: &'static str,
    pub field_author_query: &'static str,
    pub select_author: &'static str,
    pub select_book: &'static str,
    /// `{field}` is replaced by the field label.
    pub field_required: &'static str,
    pub invalid_author: &'static str,
    pub invalid_book: &'static str,
    pub invalid_year: &'static str,
    pub borrower_required: &'static str,
    pub author_query_required: &'static str,

    pub books_heading: &'static str,
    pub books_subheading: &'static str,
    pub authors_title: &'static str,
    pub authors_description: &'static str,
    pub books_title: &'static str,
    pub books_description: &'static str,
    pub no_authors: &'static str,
    pub no_books: &'static str,
    pub add_author_title: &'static str,
    pub edit_author_title: &'static str,
    pub author_form_description: &'static str,
    pub add_book_title: &'static str,
    pub edit_book_title: &'static str,
    pub book_form_description: &'static str,
    pub confirm_delete_author: &'static str,
    pub confirm_delete_book: &'static str,
    pub author_created: &'static str,
    pub author_updated: &'static str,
    pub author_deleted: &'static str,
    pub book_created: &'static str,
    pub book_updated: &'static str,
    pub book_deleted: &'static str,
    pub load_authors_failed: &'static str,
    pub load_books_failed: &'static str,
    pub save_author_failed: &'static str,
    pub save_book_failed: &'static str,
    pub delete_author_failed: &'static str,
    pub delete_book_failed: &'static str,

    pub loans_heading: &'static str,
    pub loans_subheading: &'static str,
    pub loans_title: &'static str,
    pub loans_description: &'static str,
    pub show_all: &'static str,
    pub show_active: &'static str,
    pub new_loan: &'static str,
    pub create_loan_title: &'static str,
    pub loan_form_description: &'static str,
    pub borrower_placeholder: &'static str,
    pub no_loans: &'static str,
    pub return_action: &'static str,
    pub returned_on: &'static str,
    pub status_active: &'static str,
    pub status_overdue: &'static str,
    pub status_returned: &'static str,
    pub confirm_delete_loan: &'static str,
    pub loan_created: &'static str,
    pub loan_returned: &'static str,
    pub loan_deleted: &'static str,
    pub load_loans_failed: &'static str,
    pub create_loan_failed: &'static str,
    pub return_loan_failed: &'static str,
    pub delete_loan_failed: &'static str,

    pub recommendations_heading: &'static str,
    pub recommendations_subheading: &'static str,
    pub tab_random: &'static str,
    pub tab_recent: &'static str,
    pub random_title: &'static str,
    pub recent_title: &'static str,
    pub by_author_title: &'static str,
    pub no_results: &'static str,
    pub book_singular: &'static str,
    pub book_plural: &'static str,
    pub load_random_failed: &'static str,
    pub load_recent_failed: &'static str,
    pub search_author_failed: &'static str,

    pub months: [&'static str; 12],
    /// Whether zero takes the plural form ("0 books" but "0 livre").
    pub plural_zero: bool,
}

impl Messages {
    pub fn field(&self, field: Field) -> &'static str {
        match field {
            Field::Title => self.field_title,
            Field::Isbn => self.field_isbn,
            Field::Year => self.field_year,
            Field::Author => self.field_author,
            Field::Name => self.field_name,
            Field::Nationality => self.field_nationality,
            Field::Borrower => self.field_borrower,
            Field::AuthorQuery => self.field_author_query,
        }
    }

    pub fn form_error(&self, error: &FormError) -> String {
        match error {
            FormError::Missing(Field::Borrower) => {
                self.borrower_required.to_string()
            }
            FormError::Missing(Field::AuthorQuery) => {
                self.author_query_required.to_string()
            }
            FormError::Missing(field) => {
                self.field_required.replace("{field}", self.field(*field))
            }
            FormError::InvalidAuthorId => self.invalid_author.to_string(),
            FormError::InvalidBookId => self.invalid_book.to_string(),
            FormError::InvalidYear => self.invalid_year.to_string(),
        }
    }

    pub fn loan_status(&self, status: LoanStatus) -> &'static str {
        match status {
            LoanStatus::Active => self.status_active,
            LoanStatus::Overdue => self.status_overdue,
            LoanStatus::Returned => self.status_returned,
        }
    }

    /// Short date such as "15 Jan 2024".
    pub fn format_date(&self, date: Date) -> String {
        let month = self.months[usize::from(date.month().unsigned_abs()) - 1];
        format!("{} {} {}", date.day(), month, date.year())
    }

    pub fn book_count(&self, count: usize) -> String {
        let plural = count > 1 || (count == 0 && self.plural_zero);
        let noun = if plural {
            self.book_plural
        } else {
            self.book_singular
        };
        format!("{count} {noun}")
    }
}

pub static ENGLISH: Messages = Messages {
    app_title: "Library",
    language_name: "English",
    nav_books: "Books",
    nav_loans: "Loans",
    nav_recommendations: "Recommendations",
    not_found: "Page not found",
    dismiss: "Dismiss",

    home_heading: "Library Management",
    home_tagline: "Manage books, track loans and discover recommendations.",
    home_books_title: "Books & Authors",
    home_books_description: "Manage your book catalogue and author information.",
    home_loans_title: "Loan Management",
    home_loans_description: "Track loans and manage returns.",
    home_recommendations_title: "Recommendations",
    home_recommendations_description: "Discover books by author and trend.",
    view_link: "View →",

    loading: "Loading...",
    unknown: "Unknown",
    unknown_author: "Unknown Author",
    add: "Add",
    create: "Create",
    save: "Save",
    cancel: "Cancel",
    edit: "Edit",
    delete: "Delete",
    by_author: "by",

    field_title: "Title",
    field_isbn: "ISBN",
    field_year: "Year",
    field_author: "Author",
    field_name: "Name",
    field_nationality: "Nationality",
    field_book: "Book",
    field_borrower: "Borrower",
    field_author_query: "Author name",
    select_author: "Select an author",
    select_book: "Select a book",
    field_required: "{field} is required",
    invalid_author: "Please select a valid author",
    invalid_book: "Please select a valid book",
    invalid_year: "Please enter a valid year",
    borrower_required: "Borrower name is required",
    author_query_required: "Enter an author name",

    books_heading: "Books & Authors",
    books_subheading: "Manage your catalogue",
    authors_title: "Authors",
    authors_description: "Manage author information",
    books_title: "Books",
    books_description: "Manage your book catalogue",
    no_authors: "No authors",
    no_books: "No books",
    add_author_title: "Add an author",
    edit_author_title: "Edit author",
    author_form_description: "Enter the author's details",
    add_book_title: "Add a book",
    edit_book_title: "Edit book",
    book_form_description: "Enter the book's details",
    confirm_delete_author: "Are you sure you want to delete this author?",
    confirm_delete_book: "Are you sure you want to delete this book?",
    author_created: "Author created successfully",
    author_updated: "Author updated successfully",
    author_deleted: "Author deleted successfully",
    book_created: "Book created successfully",
    book_updated: "Book updated successfully",
    book_deleted: "Book deleted successfully",
    load_authors_failed: "Failed to load authors",
    load_books_failed: "Failed to load books",
    save_author_failed: "Failed to save the author",
    save_book_failed: "Failed to save the book",
    delete_author_failed: "Failed to delete the author",
    delete_book_failed: "Failed to delete the book",

    loans_heading: "Loans",
    loans_subheading: "Track loans and returns",
    loans_title: "Loan register",
    loans_description: "Manage book loans",
    show_all: "All",
    show_active: "Active",
    new_loan: "New",
    create_loan_title: "Create a loan",
    loan_form_description: "Enter the loan details",
    borrower_placeholder: "Name",
    no_loans: "No loans",
    return_action: "Return",
    returned_on: "Returned on",
    status_active: "Active",
    status_overdue: "Overdue",
    status_returned: "Returned",
    confirm_delete_loan: "Are you sure you want to delete this loan?",
    loan_created: "Loan created successfully",
    loan_returned: "Book returned successfully",
    loan_deleted: "Loan deleted successfully",
    load_loans_failed: "Failed to load loans",
    create_loan_failed: "Failed to create the loan",
    return_loan_failed: "Failed to return the book",
    delete_loan_failed: "Failed to delete the loan",

    recommendations_heading: "Recommendations",
    recommendations_subheading: "Discover books",
    tab_random: "Random",
    tab_recent: "Recent",
    random_title: "Random selection",
    recent_title: "Recent books",
    by_author_title: "By author",
    no_results: "No books found",
    book_singular: "book",
    book_plural: "books",
    load_random_failed: "Failed to load recommendations",
    load_recent_failed: "Failed to load recent books",
    search_author_failed: "Author search failed",

    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
        "Nov", "Dec",
    ],
    plural_zero: true,
};

pub static FRENCH: Messages = Messages {
    app_title: "Bibliothèque",
    language_name: "Français",
    nav_books: "Livres",
    nav_loans: "Emprunts",
    nav_recommendations: "Recommandations",
    not_found: "Page introuvable",
    dismiss: "Fermer",

    home_heading: "Gestion de Bibliothèque",
    home_tagline: "Gérez les livres, suivez les emprunts et découvrez des recommandations.",
    home_books_title: "Livres & Auteurs",
    home_books_description: "Gérez votre catalogue de livres et les informations des auteurs.",
    home_loans_title: "Gestion des Emprunts",
    home_loans_description: "Suivez les emprunts et gérez les retours.",
    home_recommendations_title: "Recommandations",
    home_recommendations_description: "Découvrez des livres par auteurs et tendances.",
    view_link: "Voir →",

    loading: "Chargement...",
    unknown: "Inconnu",
    unknown_author: "Inconnu",
    add: "Ajouter",
    create: "Créer",
    save: "Modifier",
    cancel: "Annuler",
    edit: "Modifier",
    delete: "Supprimer",
    by_author: "par",

    field_title: "Titre",
    field_isbn: "ISBN",
    field_year: "Année",
    field_author: "Auteur",
    field_name: "Nom",
    field_nationality: "Nationalité",
    field_book: "Livre",
    field_borrower: "Emprunteur",
    field_author_query: "Nom de l'auteur",
    select_author: "Sélectionner un auteur",
    select_book: "Sélectionner un livre",
    field_required: "Le champ « {field} » est requis",
    invalid_author: "Veuillez sélectionner un auteur valide",
    invalid_book: "Veuillez sélectionner un livre valide",
    invalid_year: "Veuillez saisir une année valide",
    borrower_required: "Le nom de l'emprunteur est requis",
    author_query_required: "Entrez un nom d'auteur",

    books_heading: "Livres & Auteurs",
    books_subheading: "Gérez votre catalogue",
    authors_title: "Auteurs",
    authors_description: "Gérer les informations des auteurs",
    books_title: "Livres",
    books_description: "Gérer votre catalogue de livres",
    no_authors: "Aucun auteur",
    no_books: "Aucun livre",
    add_author_title: "Ajouter un auteur",
    edit_author_title: "Modifier l'auteur",
    author_form_description: "Entrez les détails de l'auteur",
    add_book_title: "Ajouter un livre",
    edit_book_title: "Modifier le livre",
    book_form_description: "Entrez les détails du livre",
    confirm_delete_author: "Êtes-vous sûr de vouloir supprimer cet auteur ?",
    confirm_delete_book: "Êtes-vous sûr de vouloir supprimer ce livre ?",
    author_created: "Auteur créé avec succès",
    author_updated: "Auteur modifié avec succès",
    author_deleted: "Auteur supprimé avec succès",
    book_created: "Livre créé avec succès",
    book_updated: "Livre modifié avec succès",
    book_deleted: "Livre supprimé avec succès",
    load_authors_failed: "Échec du chargement des auteurs",
    load_books_failed: "Échec du chargement des livres",
    save_author_failed: "Échec de l'enregistrement de l'auteur",
    save_book_failed: "Échec de l'enregistrement du livre",
    delete_author_failed: "Échec de la suppression de l'auteur",
    delete_book_failed: "Échec de la suppression du livre",

    loans_heading: "Emprunts",
    loans_subheading: "Suivez les emprunts et les retours",
    loans_title: "Registre des emprunts",
    loans_description: "Gérer les emprunts de livres",
    show_all: "Tous",
    show_active: "Actifs",
    new_loan: "Nouveau",
    create_loan_title: "Créer un emprunt",
    loan_form_description: "Entrez les détails de l'emprunt",
    borrower_placeholder: "Nom",
    no_loans: "Aucun emprunt",
    return_action: "Retourner",
    returned_on: "Retourné le",
    status_active: "Actif",
    status_overdue: "En retard",
    status_returned: "Retourné",
    confirm_delete_loan: "Êtes-vous sûr de vouloir supprimer cet emprunt ?",
    loan_created: "Emprunt créé avec succès",
    loan_returned: "Livre retourné avec succès",
    loan_deleted: "Emprunt supprimé avec succès",
    load_loans_failed: "Échec du chargement des emprunts",
    create_loan_failed: "Échec de la création de l'emprunt",
    return_loan_failed: "Échec du retour du livre",
    delete_loan_failed: "Échec de la suppression de l'emprunt",

    recommendations_heading: "Recommandations",
    recommendations_subheading: "Découvrez des livres",
    tab_random: "Aléatoire",
    tab_recent: "Récents",
    random_title: "Sélection aléatoire",
    recent_title: "Livres récents",
    by_author_title: "Par auteur",
    no_results: "Aucun livre trouvé",
    book_singular: "livre",
    book_plural: "livres",
    load_random_failed: "Échec du chargement des recommandations",
    load_recent_failed: "Échec du chargement des livres récents",
    search_author_failed: "Échec de la recherche par auteur",

    months: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août",
        "sept.", "oct.", "nov.", "déc.",
    ],
    plural_zero: false,
};
