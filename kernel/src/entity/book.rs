mod author;
mod id;
mod quantity;
mod title;

pub use self::{author::*, id::*, quantity::*, title::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    quantity: BookQuantity,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor, quantity: BookQuantity) -> Self {
        Self {
            id,
            title,
            author,
            quantity,
        }
    }
}
