//! Look up Active Directory users, groups and computers as typed records.
//!
//! The library is a thin mapping layer over LDAP searches: a
//! [`DirectorySearcher`] validates an identifier, fills it into a fixed search
//! filter, runs the search through a [`DirectoryClient`] and turns the result
//! into a [`UserRecord`], [`GroupRecord`] or [`ComputerRecord`]. Binary
//! attributes such as `objectGUID` and `objectSid` and file time timestamps
//! are converted to their usual string forms by [`SearchEntryExt`].
//!
//! For a general primer on LDAP, the [introduction] in the `ldap3` crate which
//! is used here for interfacing with LDAP is an excellent resource.
//!
//! [introduction]: https://github.com/inejge/ldap3/blob/master/LDAP-primer.md
//!
//! # Getting started
//! ```no_run
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use ad_searcher::{DirectorySearcher, SearchLimits};
//!
//! let searcher = DirectorySearcher::with_credentials(
//!     "LDAP://DC=oit,DC=example,DC=com",
//!     "OIT\\svc-lookup",
//!     "verysecret",
//! )?;
//!
//! if let Some(user) = searcher.user_by_sam_account_name("jpublic", SearchLimits::default())? {
//!     println!("{} ({})", user.display_name, user.full_sam_account_name);
//! }
//! for group in searcher.group_membership_names_of("jpublic", SearchLimits::default())? {
//!     println!("member of {group}");
//! }
//! searcher.dispose()?;
//! # Ok(())
//! # }
//! ```
//!
//! Lookups block. In async code, connect with
//! [`DirectorySearcher::connect_async`], share the searcher through an
//! [`Arc`](std::sync::Arc) and use the `_async` variants:
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//!
//! use ad_searcher::{Config, DirectorySearcher};
//!
//! // Configuration can also be deserialized with serde.
//! let config = Config::new("LDAP://dc1.oit.example.com/DC=oit,DC=example,DC=com")
//!     .with_credentials("OIT\\svc-lookup", "verysecret");
//! let searcher = Arc::new(DirectorySearcher::connect_async(config).await?);
//! let member = searcher.is_user_in_group_async("it-web", "jpublic").await?;
//! println!("jpublic is in it-web: {member}");
//! # Ok(())
//! # }
//! ```
//!
//! # Limitations
//! * Identifiers are substituted into filters as they are, without escaping.
//!   They are only checked for being non-empty and containing at least one
//!   letter or digit.
//! * Only simple binds are supported. Signing and sealing are approximated
//!   with StartTLS.
//! * Group member lookups resolve every member with its own search.

pub mod attributes;
pub mod config;
pub mod directory;
pub mod dn;
pub mod entry;
pub mod error;
pub mod filter;
pub mod ldap;
pub mod records;
pub mod resolve;
pub mod searcher;
pub mod validation;

pub use ldap3::{self, SearchEntry};

pub use crate::{
	config::{AuthenticationTypes, Config, ConnectionConfig, Credentials, DirectoryPath, TLSConfig},
	directory::{DirectoryClient, SearchLimits, SearchRequest},
	entry::SearchEntryExt,
	error::Error,
	ldap::LdapDirectory,
	records::{ComputerRecord, GroupRecord, UserRecord, UserWithManagerRecord},
	resolve::{HostResolver, SystemResolver},
	searcher::DirectorySearcher,
};
