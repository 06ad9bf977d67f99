use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: i32,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            quantity,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity: quantity.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: String,
}

pub struct CreateBookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: i32,
}

pub struct UpdateBookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: i32,
}

pub struct DeleteBookDto {
    pub id: String,
}
