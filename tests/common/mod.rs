use std::{
	collections::HashMap,
	io,
	net::{IpAddr, Ipv4Addr},
	sync::{
		atomic::{AtomicUsize, Ordering},
		Arc, Mutex,
	},
};

use ad_searcher::{DirectoryClient, HostResolver, SearchLimits, SearchRequest};
use ldap3::SearchEntry;

pub const USER_DN: &str = "CN=Public\\, Joe,OU=Partners,DC=oit,DC=example,DC=com";
pub const MANAGER_DN: &str = "CN=Boss\\, Betty,OU=Staff,DC=oit,DC=example,DC=com";
pub const GROUP_DN: &str = "CN=IT Web Team,OU=Groups,DC=oit,DC=example,DC=com";
pub const COMPUTER_DN: &str = "CN=WEB01,OU=Servers,DC=oit,DC=example,DC=com";
pub const COMPUTER_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7));

/// A search as the directory received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
	pub base: Option<String>,
	pub filter: String,
	pub attributes: Vec<String>,
	pub limits: SearchLimits,
}

/// Answers searches from canned entries keyed by filter, and records every
/// request.
#[derive(Debug, Default)]
pub struct MockDirectory {
	responses: HashMap<String, Vec<SearchEntry>>,
	failure: Option<String>,
	requests: Mutex<Vec<RecordedRequest>>,
	closed: Arc<AtomicUsize>,
}

impl MockDirectory {
	pub fn new() -> Self {
		Self::default()
	}

	/// A directory that fails every search with `message`.
	pub fn failing(message: &str) -> Self {
		Self { failure: Some(message.to_owned()), ..Self::default() }
	}

	/// Answer `filter` with `entries`.
	pub fn respond(mut self, filter: impl Into<String>, entries: Vec<SearchEntry>) -> Self {
		self.responses.insert(filter.into(), entries);
		self
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().unwrap().clone()
	}

	/// Counts calls to `close`, and stays readable after the directory is
	/// consumed.
	pub fn close_counter(&self) -> Arc<AtomicUsize> {
		Arc::clone(&self.closed)
	}
}

impl DirectoryClient for MockDirectory {
	type Error = io::Error;

	fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<SearchEntry>, io::Error> {
		self.requests.lock().unwrap().push(RecordedRequest {
			base: request.base.map(str::to_owned),
			filter: request.filter.to_owned(),
			attributes: request.attributes.iter().map(|&attribute| attribute.to_owned()).collect(),
			limits: request.limits,
		});
		if let Some(message) = &self.failure {
			return Err(io::Error::other(message.clone()));
		}

		let mut entries = self.responses.get(request.filter).cloned().unwrap_or_default();
		if let Ok(limit) = usize::try_from(request.limits.size_limit) {
			if limit > 0 {
				entries.truncate(limit);
			}
		}
		Ok(entries)
	}

	fn close(&mut self) -> Result<(), io::Error> {
		self.closed.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}
}

/// Resolves every host to [`COMPUTER_ADDRESS`].
#[derive(Debug)]
pub struct StubResolver;

impl HostResolver for StubResolver {
	fn resolve(&self, _host: &str) -> io::Result<IpAddr> {
		Ok(COMPUTER_ADDRESS)
	}
}

/// Build an entry from string attributes.
pub fn entry(dn: &str, attrs: &[(&str, &[&str])]) -> SearchEntry {
	SearchEntry {
		dn: dn.to_owned(),
		attrs: attrs
			.iter()
			.map(|(name, values)| {
				((*name).to_owned(), values.iter().map(|value| (*value).to_owned()).collect())
			})
			.collect(),
		bin_attrs: HashMap::new(),
	}
}

pub fn joe_public() -> SearchEntry {
	entry(
		USER_DN,
		&[
			("cn", &["Public, Joe"]),
			("displayName", &["Public, Joe"]),
			("distinguishedName", &[USER_DN]),
			("msDS-PrincipalName", &["oit\\jpublic"]),
			("sAMAccountName", &["jpublic"]),
			("givenName", &["Joe"]),
			("sn", &["Public"]),
			("mail", &["Joe.Public@example.com"]),
			("title", &["Web Developer"]),
			("memberOf", &[GROUP_DN, "CN=VPN Users,OU=Groups,DC=oit,DC=example,DC=com"]),
		],
	)
}

pub fn betty_boss() -> SearchEntry {
	entry(
		MANAGER_DN,
		&[
			("cn", &["Boss, Betty"]),
			("distinguishedName", &[MANAGER_DN]),
			("msDS-PrincipalName", &["OIT\\bboss"]),
			("sAMAccountName", &["bboss"]),
		],
	)
}
