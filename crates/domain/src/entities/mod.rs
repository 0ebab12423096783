//! Domain entities

mod comment;
mod tag;

pub use comment::Comment;
pub use tag::Tag;
