//! Raw form input for catalog mutations and queries.
//!
//! Forms hold exactly what the user typed. Validation turns them into wire
//! payloads or fails with the message to show next to the form; a form that
//! fails validation never produces a request.

use crate::Result;
use crate::book::{BookUpdate, DeleteBooks, NewBook};
use crate::error::InvalidInputError;
use crate::types::Isbn;

pub const INSERT_FIELDS_REQUIRED: &str = "Error: Todos los campos son obligatorios.";
pub const UPDATE_ISBN_REQUIRED: &str = "Error: El ISBN a modificar es obligatorio.";
pub const UPDATE_NOTHING_TO_CHANGE: &str = "Introduce al menos un campo para actualizar.";
pub const DELETE_ISBNS_REQUIRED: &str = "Error: Introduce al menos un ISBN.";
pub const QUERY_ISBN_REQUIRED: &str = "Introduce un ISBN";
pub const QUERY_AUTHOR_REQUIRED: &str = "Selecciona un autor";
pub const QUERY_FORMAT_REQUIRED: &str = "Selecciona un formato";

/// Fields of the insert form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertForm {
    pub isbn: String,
    pub title: String,
    pub year: String,
    pub price: String,
    pub stock: String,
    pub genre: String,
    pub format: String,
    pub authors: String,
}

impl InsertForm {
    fn fields(&self) -> [&str; 8] {
        [
            &self.isbn,
            &self.title,
            &self.year,
            &self.price,
            &self.stock,
            &self.genre,
            &self.format,
            &self.authors,
        ]
    }

    /// Every field is required; numbers must parse.
    pub fn validate(&self) -> Result<NewBook> {
        if self.fields().iter().any(|f| f.trim().is_empty()) {
            return Err(InvalidInputError::form(INSERT_FIELDS_REQUIRED).into());
        }

        Ok(NewBook {
            isbn: Isbn::new(&self.isbn)?,
            title: self.title.trim().to_string(),
            year: parse_number("year", &self.year)?,
            price: parse_number("price", &self.price)?,
            stock: parse_number("stock", &self.stock)?,
            genre: self.genre.trim().to_string(),
            format: self.format.trim().to_string(),
            authors: self.authors.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.is_empty())
    }
}

/// Fields of the update form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateForm {
    pub isbn: String,
    pub title: String,
    pub price: String,
    pub stock: String,
}

impl UpdateForm {
    /// The target ISBN is required, plus at least one field to change.
    pub fn validate(&self) -> Result<(Isbn, BookUpdate)> {
        if self.isbn.trim().is_empty() {
            return Err(InvalidInputError::form(UPDATE_ISBN_REQUIRED).into());
        }
        let isbn = Isbn::new(&self.isbn)?;

        let update = BookUpdate {
            title: non_blank(&self.title).map(str::to_string),
            price: non_blank(&self.price)
                .map(|p| parse_number("price", p))
                .transpose()?,
            stock: non_blank(&self.stock)
                .map(|s| parse_number("stock", s))
                .transpose()?,
        };

        if update.is_empty() {
            return Err(InvalidInputError::form(UPDATE_NOTHING_TO_CHANGE).into());
        }

        Ok((isbn, update))
    }
}

/// The delete form: a comma-separated ISBN list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteForm {
    pub isbns: String,
}

impl DeleteForm {
    pub fn new(isbns: impl Into<String>) -> Self {
        Self {
            isbns: isbns.into(),
        }
    }

    /// Split on commas, trim, drop blanks; at least one ISBN must remain.
    pub fn validate(&self) -> Result<DeleteBooks> {
        let isbns = self
            .isbns
            .split(',')
            .filter_map(non_blank)
            .map(Isbn::new)
            .collect::<Result<Vec<_>>>()?;

        if isbns.is_empty() {
            return Err(InvalidInputError::form(DELETE_ISBNS_REQUIRED).into());
        }

        Ok(DeleteBooks { isbns })
    }

    pub fn clear(&mut self) {
        self.isbns.clear();
    }
}

/// A query input that must not be blank, trimmed.
pub fn require<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    non_blank(value).ok_or_else(|| InvalidInputError::form(message).into())
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    let trimmed = value.trim();
    trimmed.parse().map_err(|_| {
        InvalidInputError::Number {
            field,
            value: trimmed.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn filled() -> InsertForm {
        InsertForm {
            isbn: " 978-84 ".to_string(),
            title: "Ficciones".to_string(),
            year: "1944".to_string(),
            price: "12.50".to_string(),
            stock: "7".to_string(),
            genre: "Cuento".to_string(),
            format: "Bolsillo".to_string(),
            authors: "Jorge Luis Borges".to_string(),
        }
    }

    fn form_message(err: Error) -> String {
        match err {
            Error::InvalidInput(InvalidInputError::Form { message }) => message,
            other => panic!("expected a form error, got {other:?}"),
        }
    }

    #[test]
    fn insert_requires_every_field() {
        let mut form = filled();
        form.genre = "   ".to_string();
        assert_eq!(form_message(form.validate().unwrap_err()), INSERT_FIELDS_REQUIRED);
    }

    #[test]
    fn insert_parses_numbers() {
        let book = filled().validate().unwrap();
        assert_eq!(book.isbn.as_str(), "978-84");
        assert_eq!(book.year, 1944);
        assert_eq!(book.price, 12.5);
        assert_eq!(book.stock, 7);
    }

    #[test]
    fn insert_rejects_bad_numbers() {
        let mut form = filled();
        form.year = "mil".to_string();
        assert!(matches!(
            form.validate().unwrap_err(),
            Error::InvalidInput(InvalidInputError::Number { field: "year", .. })
        ));
    }

    #[test]
    fn insert_clear_empties_every_field() {
        let mut form = filled();
        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn update_requires_isbn() {
        let form = UpdateForm {
            title: "Nuevo".to_string(),
            ..Default::default()
        };
        assert_eq!(form_message(form.validate().unwrap_err()), UPDATE_ISBN_REQUIRED);
    }

    #[test]
    fn update_requires_a_change() {
        let form = UpdateForm {
            isbn: "1".to_string(),
            title: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form_message(form.validate().unwrap_err()),
            UPDATE_NOTHING_TO_CHANGE
        );
    }

    #[test]
    fn update_keeps_only_filled_fields() {
        let form = UpdateForm {
            isbn: "1".to_string(),
            stock: " 4 ".to_string(),
            ..Default::default()
        };
        let (isbn, update) = form.validate().unwrap();
        assert_eq!(isbn.as_str(), "1");
        assert_eq!(update.stock, Some(4));
        assert_eq!(update.title, None);
        assert_eq!(update.price, None);
    }

    #[test]
    fn delete_splits_and_trims() {
        let form = DeleteForm::new(" 1, 2 ,,3 ");
        let request = form.validate().unwrap();
        let isbns: Vec<_> = request.isbns.iter().map(Isbn::as_str).collect();
        assert_eq!(isbns, vec!["1", "2", "3"]);
    }

    #[test]
    fn delete_with_no_isbns_is_rejected() {
        assert_eq!(
            form_message(DeleteForm::new("").validate().unwrap_err()),
            DELETE_ISBNS_REQUIRED
        );
        assert_eq!(
            form_message(DeleteForm::new(" , ,").validate().unwrap_err()),
            DELETE_ISBNS_REQUIRED
        );
    }

    #[test]
    fn require_trims_query_input() {
        assert_eq!(require("  Ebook ", QUERY_FORMAT_REQUIRED).unwrap(), "Ebook");
        assert_eq!(
            form_message(require(" ", QUERY_AUTHOR_REQUIRED).unwrap_err()),
            QUERY_AUTHOR_REQUIRED
        );
    }
}
