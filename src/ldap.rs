//! [`DirectoryClient`] backed by an `ldap3` connection.
//!
//! `ldap3` is asynchronous, so each [`LdapDirectory`] owns a small runtime
//! that drives its connection. Searches block on that runtime and may be
//! issued from any thread that is not itself running async code.
use std::time::Duration;

use ldap3::{
	adapters::{Adapter, EntriesOnly, PagedResults},
	LdapConnAsync, LdapError, Scope, SearchEntry, SearchOptions,
};
use tokio::runtime::{Handle, Runtime};
use tracing::{debug, info, warn};

use crate::{
	config::Config,
	directory::{DirectoryClient, SearchRequest},
	error::Error,
};

/// Result code the server sends when it stopped at the size limit.
const SIZE_LIMIT_EXCEEDED: u32 = 4;

/// A bound connection to a directory server.
#[derive(Debug)]
pub struct LdapDirectory {
	/// Runtime driving the connection. Only `None` while dropping.
	runtime: Option<Runtime>,
	/// Handle to `runtime`, used to run operations to completion.
	handle: Handle,
	/// The connection handle; cloned for every operation.
	ldap: ldap3::Ldap,
	/// Base of searches that do not name one.
	base: String,
	/// Timeout applied to every operation.
	operation_timeout: Option<Duration>,
	/// Whether [`DirectoryClient::close`] already ran.
	closed: bool,
}

impl LdapDirectory {
	/// Open and bind a connection as described by `config`.
	///
	/// Blocks until the bind completes. Must not be called from async code;
	/// see [`DirectorySearcher::connect_async`](crate::DirectorySearcher::connect_async).
	pub fn connect(config: &Config) -> Result<Self, Error> {
		config.validate()?;
		let path = config.directory_path()?;
		let settings = config.to_settings(&path);

		let runtime = tokio::runtime::Builder::new_multi_thread()
			.worker_threads(1)
			.thread_name("ad-searcher-ldap")
			.enable_all()
			.build()?;
		let handle = runtime.handle().clone();

		let ldap = runtime
			.block_on(async {
				let (conn, mut ldap) =
					LdapConnAsync::from_url_with_settings(settings, &path.url).await?;
				tokio::spawn(async move {
					if let Err(err) = conn.drive().await {
						warn!("Ldap connection error {err}");
					}
				});

				if let Some(credentials) = config.bind_credentials() {
					ldap.simple_bind(&credentials.username, &credentials.password)
						.await?
						.success()?;
				}
				Ok::<_, LdapError>(ldap)
			})
			.map_err(Error::directory)?;
		info!("Connected to {} with base `{}`", path.url, path.base);

		Ok(Self {
			runtime: Some(runtime),
			handle,
			ldap,
			base: path.base,
			operation_timeout: config.connection.operation_timeout,
			closed: false,
		})
	}

	/// Base of searches that do not name one.
	#[must_use]
	pub fn base(&self) -> &str {
		&self.base
	}

	/// Run a search, collecting every entry.
	async fn run_search(
		&self,
		request: &SearchRequest<'_>,
	) -> Result<Vec<SearchEntry>, LdapError> {
		let mut ldap = self.ldap.clone();
		ldap.with_search_options(SearchOptions::new().sizelimit(request.limits.size_limit));
		if let Some(timeout) = self.operation_timeout {
			ldap.with_timeout(timeout);
		}

		let mut adapters: Vec<Box<dyn Adapter<_, _>>> = vec![Box::new(EntriesOnly::new())];
		if let Some(page_size) = request.limits.page_size.filter(|size| *size > 0) {
			adapters.push(Box::new(PagedResults::new(page_size)));
		}

		let base = request.base.unwrap_or(&self.base);
		let mut search = ldap
			.streaming_search_with(
				adapters,
				base,
				Scope::Subtree,
				request.filter,
				request.attributes.to_vec(),
			)
			.await?;

		let mut entries = Vec::new();
		while let Some(entry) = search.next().await? {
			entries.push(SearchEntry::construct(entry));
		}
		let result = search.finish().await;
		if result.rc != 0 && result.rc != SIZE_LIMIT_EXCEEDED {
			return Err(LdapError::LdapResult { result });
		}
		Ok(entries)
	}
}

impl DirectoryClient for LdapDirectory {
	type Error = LdapError;

	fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<SearchEntry>, LdapError> {
		debug!(
			base = request.base.unwrap_or(&self.base),
			filter = request.filter,
			size_limit = request.limits.size_limit,
			page_size = ?request.limits.page_size,
			"Searching"
		);
		self.handle.block_on(self.run_search(request))
	}

	fn close(&mut self) -> Result<(), LdapError> {
		if self.closed {
			return Ok(());
		}
		self.closed = true;
		let mut ldap = self.ldap.clone();
		self.handle.block_on(async move { ldap.unbind().await })
	}
}

impl Drop for LdapDirectory {
	fn drop(&mut self) {
		if let Some(runtime) = self.runtime.take() {
			runtime.shutdown_background();
		}
	}
}
