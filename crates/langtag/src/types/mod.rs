mod extension;
mod tag;

pub use extension::Extension;
pub use tag::LanguageTag;
