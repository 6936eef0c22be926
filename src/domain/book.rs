use serde::{Deserialize, Serialize};

/// A book as returned by the upstream catalog API
///
/// # Invariants
/// - `id` is assigned by the upstream system; this service never
///   fabricates one. Only a book that came back from a successful
///   upstream read or write carries a valid id.
/// - Never mutated in place; an update produces a new `Book` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Payload for creating or updating a book
///
/// Carries no id: the upstream assigns one on create, and update takes
/// the target id from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
}

impl BookInput {
    /// Checks the structural shape of the payload
    ///
    /// # Returns
    /// * `Ok(())` - If both fields are non-blank
    /// * `Err(Vec<String>)` - One entry per violated field
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("title: must not be blank".to_string());
        }
        if self.author.trim().is_empty() {
            errors.push("author: must not be blank".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_passes() {
        let input = BookInput {
            title: "The Stars My Destination".to_string(),
            author: "Alfred Bester".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        let input = BookInput {
            title: String::new(),
            author: "Alfred Bester".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors, vec!["title: must not be blank".to_string()]);
    }

    #[test]
    fn blank_author_rejected() {
        let input = BookInput {
            title: "The Stars My Destination".to_string(),
            author: String::new(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors, vec!["author: must not be blank".to_string()]);
    }

    #[test]
    fn both_fields_blank_accumulates_one_error_per_field() {
        let input = BookInput {
            title: String::new(),
            author: String::new(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], "title: must not be blank");
        assert_eq!(errors[1], "author: must not be blank");
    }

    #[test]
    fn whitespace_only_fields_rejected() {
        let input = BookInput {
            title: "   ".to_string(),
            author: "\t".to_string(),
        };
        assert_eq!(input.validate().unwrap_err().len(), 2);
    }

    #[test]
    fn book_decodes_from_upstream_json() {
        let book: Book =
            serde_json::from_str(r#"{"id":1,"title":"Title 1","author":"Author 1"}"#)
                .expect("valid book json");
        assert_eq!(book.id, 1);
        assert_eq!(book.title, "Title 1");
        assert_eq!(book.author, "Author 1");
    }
}
