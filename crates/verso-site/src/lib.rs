//! Version and locale resolution for documentation sites.
//!
//! For any request path this crate answers:
//! - which version snapshot the path addresses ([`VersionTagSet::resolve`])
//! - which snapshots have content for the same topic ([`AvailabilityProbe`])
//! - where a "switch version" action lands ([`VersionNavigator`])
//! - which localized labels to display ([`localize_tree`], [`Site::resolve`])
//!
//! Everything is synchronous and works on an immutable [`DocumentStore`]
//! built once at startup.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use verso_i18n::{Catalogs, LabelResolver};
//! use verso_site::{Site, SiteConfig, VersionTagSet};
//! use verso_storage::DocumentIndex;
//! use verso_storage_fs::FsStorage;
//!
//! let index = DocumentIndex::build(&FsStorage::new(PathBuf::from("docs")))?;
//! let resolver = LabelResolver::new("en".parse()?, Catalogs::bundled()?);
//! let versions = VersionTagSet::new("latest", ["v1.1", "v1.0"])?;
//! let site = Site::new(Arc::new(index), resolver, SiteConfig::new(versions));
//!
//! let page = site.resolve("/docs/v1.0/nodes/boolean", &"zh".parse()?)?;
//! ```

mod availability;
mod localize;
mod navigation;
mod navigator;
mod site;
mod store;
mod versions;

pub use availability::AvailabilityProbe;
pub use localize::{TocEntry, localize_toc, localize_tree};
pub use navigation::{Label, NavNode, build_tree};
pub use navigator::VersionNavigator;
pub use site::{ResolvedPage, Site, SiteConfig, SiteError, VersionOption};
pub use store::DocumentStore;
pub use versions::{VersionError, VersionTag, VersionTagSet};
