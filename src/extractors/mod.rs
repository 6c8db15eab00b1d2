//! Request extractors whose rejections are `AppError`s, so every failure body is JSON.

mod form;
mod id;

pub use form::FormOrEmpty;
pub use id::{BakedGoodId, BakeryId};
