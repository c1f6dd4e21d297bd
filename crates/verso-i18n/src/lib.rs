//! Locale-aware label resolution.
//!
//! Documentation content is authored in a single native locale. This crate
//! produces display strings for other locales from [`LabelCatalog`] tables:
//! URL overrides, exact terms, and phrase rules. Labels that look like code
//! are never touched, and the native locale always gets the source string.
//!
//! # Example
//!
//! ```ignore
//! use verso_i18n::{Catalogs, LabelResolver, Locale};
//!
//! let en: Locale = "en".parse()?;
//! let zh: Locale = "zh".parse()?;
//! let resolver = LabelResolver::new(en, Catalogs::bundled()?);
//!
//! assert_eq!(resolver.title(Some("/docs/nodes/group"), "Group", &zh), "组");
//! assert_eq!(resolver.label("merge()", &zh), "merge()");
//! ```

mod catalog;
mod code;
mod locale;
mod negotiate;
mod resolver;

pub use catalog::{CatalogError, Catalogs, LabelCatalog, PhraseRule};
pub use code::looks_like_code;
pub use locale::{Locale, LocaleError};
pub use negotiate::{LocaleNegotiator, Negotiation};
pub use resolver::{DEFAULT_DESCRIPTION_LIMIT, LabelKind, LabelResolver};
