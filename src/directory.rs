//! The search capability the searcher needs from a directory connection.
use ldap3::SearchEntry;

/// Result count and paging settings for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
	/// Maximum number of entries the server should return. `0` means no
	/// client side limit.
	pub size_limit: i32,
	/// If set, enables the [simple paged search control] and sets the page size
	/// to the given value
	///
	/// [simple paged search control]: https://www.rfc-editor.org/rfc/rfc2696.html
	pub page_size: Option<i32>,
}

impl SearchLimits {
	/// Limits for a search that returns at most `size_limit` entries, fetched
	/// in pages of `page_size`.
	#[must_use]
	pub const fn new(size_limit: i32, page_size: i32) -> Self {
		Self { size_limit, page_size: Some(page_size) }
	}
}

/// One subtree search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest<'a> {
	/// Search base. `None` searches from the base of the connection's path.
	pub base: Option<&'a str>,
	/// LDAP filter, e.g. `(&(objectClass=user)(sAMAccountName=jpublic))`.
	pub filter: &'a str,
	/// Attributes the server should return.
	pub attributes: &'a [&'a str],
	/// Count and paging limits.
	pub limits: SearchLimits,
}

impl<'a> SearchRequest<'a> {
	/// A search from the connection's base.
	#[must_use]
	pub fn new(filter: &'a str, attributes: &'a [&'a str], limits: SearchLimits) -> Self {
		Self { base: None, filter, attributes, limits }
	}

	/// Anchor the search at `base` instead.
	#[must_use]
	pub const fn with_base(mut self, base: &'a str) -> Self {
		self.base = Some(base);
		self
	}
}

/// A connection to a directory that can execute attribute-filtered searches.
///
/// Implementations block the calling thread until the search completes.
pub trait DirectoryClient: Send + Sync {
	/// Failures reported by the directory or the transport.
	type Error: std::error::Error + Send + Sync + 'static;

	/// Run a search and collect every entry it returns.
	fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<SearchEntry>, Self::Error>;

	/// Run a search for at most one entry.
	fn search_one(&self, request: &SearchRequest<'_>) -> Result<Option<SearchEntry>, Self::Error> {
		let mut request = *request;
		request.limits.size_limit = 1;
		Ok(self.search(&request)?.into_iter().next())
	}

	/// Release the connection. Called at most once.
	fn close(&mut self) -> Result<(), Self::Error>;
}
