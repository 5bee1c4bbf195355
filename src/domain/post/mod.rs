pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate, PublishStateUpdate};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{PostBody, PostCategory, PostId, PostListCursor, PostSlug, PostTitle};
