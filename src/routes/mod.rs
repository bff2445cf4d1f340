use std::borrow::Cow;

use serde::Serialize;

pub mod errors;

mod book;
pub use book::book;

mod index;
pub use index::index;

#[derive(Serialize)]
pub struct TemplateBase {
    pub title: Cow<'static, str>,
}
