//! Typed lookups against a directory.
//!
//! [`DirectorySearcher`] validates its arguments, builds one of the filters in
//! [`crate::filter`], runs it through its [`DirectoryClient`] and maps the
//! results to the types in [`crate::records`]. Absent objects are `Ok(None)` or
//! an empty list; only bad arguments and directory failures are errors.
//!
//! Every lookup blocks the calling thread. From async code, wrap the searcher
//! in an [`Arc`] and call the `_async` variant instead, which runs the lookup
//! on Tokio's blocking pool.
use std::sync::Arc;

use ldap3::SearchEntry;
use tracing::{debug, warn};

use crate::{
	attributes as attr,
	config::{AuthenticationTypes, Config},
	directory::{DirectoryClient, SearchLimits, SearchRequest},
	dn,
	entry::SearchEntryExt,
	error::Error,
	filter,
	ldap::LdapDirectory,
	records::{ComputerRecord, GroupRecord, UserRecord, UserWithManagerRecord},
	resolve::{HostResolver, SystemResolver},
	validation,
};

/// Looks up users, groups and computers in a directory.
///
/// Owns its connection: [`DirectorySearcher::dispose`] releases it, and
/// dropping the searcher without disposing it still tears it down.
#[derive(Debug)]
pub struct DirectorySearcher<C = LdapDirectory> {
	/// The connection searches are run on.
	client: C,
	/// Resolves computer host names.
	resolver: Arc<dyn HostResolver>,
}

impl DirectorySearcher<LdapDirectory> {
	/// Connect to `path` with the current process's identity, using
	/// [`AuthenticationTypes::DEFAULT`].
	pub fn new(path: &str) -> Result<Self, Error> {
		Self::from_config(&Config::new(non_empty_path(path)?))
	}

	/// Connect to `path` as a service account, using
	/// [`AuthenticationTypes::DEFAULT`].
	pub fn with_credentials(path: &str, username: &str, password: &str) -> Result<Self, Error> {
		Self::from_config(&Config::new(non_empty_path(path)?).with_credentials(username, password))
	}

	/// Connect to `path` as a service account on a specific port with the
	/// given authentication options.
	pub fn with_options(
		path: &str,
		username: &str,
		password: &str,
		port: u16,
		authentication: AuthenticationTypes,
	) -> Result<Self, Error> {
		if port == 0 {
			return Err(Error::argument("port", "must not be zero"));
		}
		let mut config = Config::new(non_empty_path(path)?).with_credentials(username, password);
		config.port = Some(port);
		config.authentication = authentication;
		Self::from_config(&config)
	}

	/// Connect as described by `config`.
	pub fn from_config(config: &Config) -> Result<Self, Error> {
		Ok(Self::from_client(LdapDirectory::connect(config)?))
	}

	/// Connect as described by `config` without blocking the async runtime.
	pub async fn connect_async(config: Config) -> Result<Self, Error> {
		tokio::task::spawn_blocking(move || Self::from_config(&config)).await?
	}
}

/// Trim a directory path, rejecting empty ones.
fn non_empty_path(path: &str) -> Result<&str, Error> {
	let path = path.trim();
	if path.is_empty() {
		return Err(Error::argument("path", "must not be empty"));
	}
	Ok(path)
}

/// Trim an identifier and check that it is non-empty and alphanumeric.
fn identifier<'a>(value: &'a str, parameter: &'static str) -> Result<&'a str, Error> {
	let value = value.trim();
	if value.is_empty() || !validation::is_valid_alpha_numeric(value) {
		return Err(Error::argument(parameter, "must be a non-empty alphanumeric value"));
	}
	Ok(value)
}

/// Like [`identifier`], additionally requiring an email address.
fn checked_email(value: &str) -> Result<&str, Error> {
	let value = identifier(value, "email_address")?;
	if !validation::is_valid_email(value) {
		return Err(Error::argument("email_address", "must be an email address"));
	}
	Ok(value)
}

/// Trim a free-form filter, or `None` if it should not be sent.
fn checked_filter(filter: &str) -> Option<&str> {
	let filter = filter.trim();
	if filter.is_empty() || !validation::is_valid_alpha_numeric(filter) {
		warn!("Refusing to search with filter `{filter}`");
		return None;
	}
	Some(filter)
}

impl<C: DirectoryClient> DirectorySearcher<C> {
	/// Search with an already connected client.
	#[must_use]
	pub fn from_client(client: C) -> Self {
		Self { client, resolver: Arc::new(SystemResolver) }
	}

	/// Resolve computer host names with `resolver` instead of the system
	/// resolver.
	#[must_use]
	pub fn with_resolver(mut self, resolver: Arc<dyn HostResolver>) -> Self {
		self.resolver = resolver;
		self
	}

	/// The underlying client.
	#[must_use]
	pub const fn client(&self) -> &C {
		&self.client
	}

	/// Release the connection.
	pub fn dispose(mut self) -> Result<(), Error> {
		self.client.close().map_err(Error::directory)
	}

	/// Run `filter` and return the first entry.
	///
	/// Returns `Ok(None)` without contacting the directory if `filter` is empty
	/// or contains no alphanumeric characters.
	pub fn search(
		&self,
		filter: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		self.search_one_in(None, filter, attributes, limits)
	}

	/// Run `filter` and return every entry.
	///
	/// Returns `Ok(None)` without contacting the directory if `filter` is empty
	/// or contains no alphanumeric characters.
	pub fn search_all(
		&self,
		filter: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<Vec<SearchEntry>>, Error> {
		let Some(filter) = checked_filter(filter) else {
			return Ok(None);
		};
		let request = SearchRequest::new(filter, attributes, limits);
		self.client.search(&request).map(Some).map_err(Error::directory)
	}

	/// [`DirectorySearcher::search`], anchored at `base` if given.
	fn search_one_in(
		&self,
		base: Option<&str>,
		filter: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let Some(filter) = checked_filter(filter) else {
			return Ok(None);
		};
		let request = SearchRequest { base, filter, attributes, limits };
		self.client.search_one(&request).map_err(Error::directory)
	}

	/// Search for one entry and map it with `map`.
	fn find<T>(
		&self,
		filter: &str,
		attributes: &[&str],
		limits: SearchLimits,
		map: impl FnOnce(&SearchEntry) -> Result<T, Error>,
	) -> Result<Option<T>, Error> {
		self.search(filter, attributes, limits)?.map(|entry| map(&entry)).transpose()
	}

	/// The raw entry of the user with the given logon name.
	pub fn user_search_result_by_sam_account_name(
		&self,
		sam_account_name: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let sam_account_name = identifier(sam_account_name, "sam_account_name")?;
		self.search(&filter::user_by_sam_account_name(sam_account_name), attributes, limits)
	}

	/// The raw entry of the group with the given common name.
	pub fn group_search_result_by_name(
		&self,
		group_name: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let group_name = identifier(group_name, "group_name")?;
		self.search(&filter::group_by_name(group_name), attributes, limits)
	}

	/// The raw entry of the group with the given logon name.
	pub fn group_search_result_by_sam_account_name(
		&self,
		group_sam_account_name: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let group_sam_account_name = identifier(group_sam_account_name, "group_sam_account_name")?;
		self.search(&filter::group_by_sam_account_name(group_sam_account_name), attributes, limits)
	}

	/// The raw entry of the computer with the given common name.
	pub fn computer_search_result_by_common_name(
		&self,
		common_name: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let common_name = identifier(common_name, "common_name")?;
		self.search(&filter::computer_by_common_name(common_name), attributes, limits)
	}

	/// The raw entry of the computer with the given `objectGUID`.
	pub fn computer_search_result_by_object_guid(
		&self,
		object_guid: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let octets = object_guid_octets(object_guid)?;
		self.search(&filter::computer_by_object_guid(&octets), attributes, limits)
	}

	/// The user with the given logon name.
	pub fn user_by_sam_account_name(
		&self,
		sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Option<UserRecord>, Error> {
		self.user_search_result_by_sam_account_name(
			sam_account_name,
			UserRecord::ATTRIBUTES,
			limits,
		)?
		.map(|entry| UserRecord::from_search(&entry))
		.transpose()
	}

	/// The user with the given SMTP address.
	pub fn user_by_email(
		&self,
		email_address: &str,
		limits: SearchLimits,
	) -> Result<Option<UserRecord>, Error> {
		let email_address = checked_email(email_address)?;
		self.find(
			&filter::user_by_email(email_address),
			UserRecord::ATTRIBUTES,
			limits,
			UserRecord::from_search,
		)
	}

	/// The user with the given distinguished name.
	pub fn user_by_distinguished_name(
		&self,
		distinguished_name: &str,
		limits: SearchLimits,
	) -> Result<Option<UserRecord>, Error> {
		let distinguished_name = identifier(distinguished_name, "distinguished_name")?;
		self.find(
			&filter::user_by_distinguished_name(distinguished_name),
			UserRecord::ATTRIBUTES,
			limits,
			UserRecord::from_search,
		)
	}

	/// Users whose given name and surname start with `first_name` and
	/// `last_name`.
	///
	/// Names that are empty are rejected; names without any alphanumeric
	/// character match nobody.
	pub fn users_by_first_last_name(
		&self,
		first_name: &str,
		last_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<UserRecord>, Error> {
		if first_name.is_empty() {
			return Err(Error::argument("first_name", "must not be empty"));
		}
		if last_name.is_empty() {
			return Err(Error::argument("last_name", "must not be empty"));
		}
		let (first_name, last_name) = (first_name.trim(), last_name.trim());
		if !validation::is_valid_alpha_numeric(first_name)
			|| !validation::is_valid_alpha_numeric(last_name)
		{
			return Ok(Vec::new());
		}

		let filter = filter::users_by_first_last_name(first_name, last_name);
		let entries = self.search_all(&filter, UserRecord::ATTRIBUTES, limits)?.unwrap_or_default();
		entries.iter().map(UserRecord::from_search).collect()
	}

	/// The user with the given logon name, and their manager.
	pub fn user_manager_by_sam_account_name(
		&self,
		sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Option<UserWithManagerRecord>, Error> {
		let attributes = UserWithManagerRecord::attributes();
		let entry =
			self.user_search_result_by_sam_account_name(sam_account_name, &attributes, limits)?;
		self.with_manager(entry)
	}

	/// The user with the given SMTP address, and their manager.
	pub fn user_manager_by_email(
		&self,
		email_address: &str,
		limits: SearchLimits,
	) -> Result<Option<UserWithManagerRecord>, Error> {
		let email_address = checked_email(email_address)?;
		let attributes = UserWithManagerRecord::attributes();
		let entry = self.search(&filter::user_by_email(email_address), &attributes, limits)?;
		self.with_manager(entry)
	}

	/// Build a [`UserWithManagerRecord`], looking the manager up if the entry
	/// names one.
	fn with_manager(
		&self,
		entry: Option<SearchEntry>,
	) -> Result<Option<UserWithManagerRecord>, Error> {
		let Some(entry) = entry else {
			return Ok(None);
		};
		let mut record = UserWithManagerRecord::from_search(&entry)?;
		if !record.manager_distinguished_name.is_empty() {
			debug!("Looking up manager {}", record.manager_distinguished_name);
			record.manager = self.user_by_distinguished_name(
				&record.manager_distinguished_name,
				SearchLimits::default(),
			)?;
		}
		Ok(Some(record))
	}

	/// The group with the given distinguished name.
	pub fn group_by_distinguished_name(
		&self,
		distinguished_name: &str,
		limits: SearchLimits,
	) -> Result<Option<GroupRecord>, Error> {
		let distinguished_name = identifier(distinguished_name, "distinguished_name")?;
		self.find(
			&filter::group_by_distinguished_name(distinguished_name),
			GroupRecord::ATTRIBUTES,
			limits,
			GroupRecord::from_search,
		)
	}

	/// The group with the given common name.
	pub fn group_by_name(
		&self,
		group_name: &str,
		limits: SearchLimits,
	) -> Result<Option<GroupRecord>, Error> {
		self.group_search_result_by_name(group_name, GroupRecord::ATTRIBUTES, limits)?
			.map(|entry| GroupRecord::from_search(&entry))
			.transpose()
	}

	/// The group with the given logon name.
	pub fn group_by_sam_account_name(
		&self,
		group_sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Option<GroupRecord>, Error> {
		self.group_search_result_by_sam_account_name(
			group_sam_account_name,
			GroupRecord::ATTRIBUTES,
			limits,
		)?
		.map(|entry| GroupRecord::from_search(&entry))
		.transpose()
	}

	/// Common names of the groups the user with the given logon name is a
	/// direct member of.
	///
	/// `memberOf` values without a `CN=` component are left out, so the result
	/// can be shorter than [`DirectorySearcher::group_memberships_of`].
	pub fn group_membership_names_of(
		&self,
		sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<String>, Error> {
		Ok(self
			.group_memberships_of(sam_account_name, limits)?
			.iter()
			.filter_map(|group| dn::common_name(group))
			.collect())
	}

	/// Distinguished names of the groups the account with the given logon name
	/// is a direct member of.
	pub fn group_memberships_of(
		&self,
		sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<String>, Error> {
		Ok(self
			.user_search_result_by_sam_account_name(sam_account_name, &[attr::MEMBER_OF], limits)?
			.map(|entry| entry.attr_values(attr::MEMBER_OF))
			.unwrap_or_default())
	}

	/// Distinguished names of the direct members of the group with the given
	/// common name.
	pub fn group_members(
		&self,
		group_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<String>, Error> {
		Ok(self
			.group_search_result_by_name(group_name, &[attr::MEMBER], limits)?
			.map(|entry| entry.attr_values(attr::MEMBER))
			.unwrap_or_default())
	}

	/// `LastName, FirstName` labels of the direct members of the group with
	/// the given common name, see [`dn::name_from_dn`].
	pub fn group_members_names(
		&self,
		group_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<String>, Error> {
		let members = self.group_members(group_name, limits)?;
		members.iter().map(|member| dn::name_from_dn(member)).collect()
	}

	/// The users that are direct members of the group with the given common
	/// name. Looks every member up separately; members that are not users are
	/// skipped.
	pub fn group_user_members(
		&self,
		group_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<UserRecord>, Error> {
		let members = self.group_members(group_name, limits)?;
		debug!("Looking up {} members of {group_name}", members.len());
		let mut users = Vec::with_capacity(members.len());
		for member in &members {
			if let Some(user) = self.user_by_distinguished_name(member, SearchLimits::default())? {
				users.push(user);
			}
		}
		Ok(users)
	}

	/// Whether the user is a direct or nested member of the group. `false` if
	/// the group does not exist.
	pub fn is_user_in_group(
		&self,
		group_sam_account_name: &str,
		user_sam_account_name: &str,
	) -> Result<bool, Error> {
		let group_sam_account_name = identifier(group_sam_account_name, "group_sam_account_name")?;
		let user_sam_account_name = identifier(user_sam_account_name, "user_sam_account_name")?;

		let Some(group) = self.search(
			&filter::group_by_sam_account_name(group_sam_account_name),
			&[attr::DISTINGUISHED_NAME],
			SearchLimits::default(),
		)?
		else {
			return Ok(false);
		};
		let group_dn = group.attr_first(attr::DISTINGUISHED_NAME).unwrap_or(&group.dn);

		let members = self.search_all(
			&filter::user_in_group(group_dn, user_sam_account_name),
			&[attr::DISTINGUISHED_NAME],
			SearchLimits::default(),
		)?;
		Ok(members.is_some_and(|members| !members.is_empty()))
	}

	/// The computer with the given common name.
	pub fn computer_by_common_name(
		&self,
		common_name: &str,
	) -> Result<Option<ComputerRecord>, Error> {
		let common_name = identifier(common_name, "common_name")?;
		self.locate_computer(&filter::computer_by_common_name(common_name), attr::COMMON_NAME)
	}

	/// The computer with the given `objectGUID`.
	pub fn computer_by_object_guid(
		&self,
		object_guid: &str,
	) -> Result<Option<ComputerRecord>, Error> {
		let octets = object_guid_octets(object_guid)?;
		self.locate_computer(&filter::computer_by_object_guid(&octets), attr::OBJECT_GUID)
	}

	/// Find a computer with a narrow search, then read it again from the
	/// domain it was found in.
	fn locate_computer(
		&self,
		filter: &str,
		locate_attribute: &str,
	) -> Result<Option<ComputerRecord>, Error> {
		let Some(located) = self.search(filter, &[locate_attribute], SearchLimits::default())?
		else {
			return Ok(None);
		};
		let base = dn::domain_components(&located.dn)?;
		let base = (!base.is_empty()).then_some(base.as_str());
		debug!("Reading {} from {}", located.dn, base.unwrap_or("the default base"));

		self.search_one_in(base, filter, ComputerRecord::ATTRIBUTES, SearchLimits::default())?
			.map(|entry| ComputerRecord::from_search(&entry, self.resolver.as_ref()))
			.transpose()
	}
}

/// Validate an `objectGUID` argument and encode it for a filter.
fn object_guid_octets(object_guid: &str) -> Result<String, Error> {
	if object_guid.trim().is_empty() {
		return Err(Error::argument("object_guid", "must not be empty"));
	}
	dn::guid_to_octet_string(object_guid)
}

/// Copy borrowed attribute names so they can move to a worker.
fn owned_attributes(attributes: &[&str]) -> Vec<String> {
	attributes.iter().map(|attribute| (*attribute).to_owned()).collect()
}

/// Borrow attribute names copied by [`owned_attributes`].
fn borrowed_attributes(attributes: &[String]) -> Vec<&str> {
	attributes.iter().map(String::as_str).collect()
}

impl<C: DirectoryClient + 'static> DirectorySearcher<C> {
	/// Run a blocking lookup on Tokio's blocking pool.
	///
	/// The lookup runs to completion even if the returned future is dropped.
	async fn offload<T, F>(self: &Arc<Self>, lookup: F) -> Result<T, Error>
	where
		T: Send + 'static,
		F: FnOnce(&Self) -> Result<T, Error> + Send + 'static,
	{
		let searcher = Arc::clone(self);
		tokio::task::spawn_blocking(move || lookup(&searcher)).await?
	}

	/// Async variant of [`DirectorySearcher::search`].
	pub async fn search_async(
		self: &Arc<Self>,
		filter: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let (filter, attributes) = (filter.to_owned(), owned_attributes(attributes));
		self.offload(move |searcher| {
			searcher.search(&filter, &borrowed_attributes(&attributes), limits)
		})
		.await
	}

	/// Async variant of [`DirectorySearcher::search_all`].
	pub async fn search_all_async(
		self: &Arc<Self>,
		filter: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<Vec<SearchEntry>>, Error> {
		let (filter, attributes) = (filter.to_owned(), owned_attributes(attributes));
		self.offload(move |searcher| {
			searcher.search_all(&filter, &borrowed_attributes(&attributes), limits)
		})
		.await
	}

	/// Async variant of
	/// [`DirectorySearcher::user_search_result_by_sam_account_name`].
	pub async fn user_search_result_by_sam_account_name_async(
		self: &Arc<Self>,
		sam_account_name: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let (sam_account_name, attributes) =
			(sam_account_name.to_owned(), owned_attributes(attributes));
		self.offload(move |searcher| {
			searcher.user_search_result_by_sam_account_name(
				&sam_account_name,
				&borrowed_attributes(&attributes),
				limits,
			)
		})
		.await
	}

	/// Async variant of [`DirectorySearcher::group_search_result_by_name`].
	pub async fn group_search_result_by_name_async(
		self: &Arc<Self>,
		group_name: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let (group_name, attributes) = (group_name.to_owned(), owned_attributes(attributes));
		self.offload(move |searcher| {
			searcher.group_search_result_by_name(
				&group_name,
				&borrowed_attributes(&attributes),
				limits,
			)
		})
		.await
	}

	/// Async variant of
	/// [`DirectorySearcher::group_search_result_by_sam_account_name`].
	pub async fn group_search_result_by_sam_account_name_async(
		self: &Arc<Self>,
		group_sam_account_name: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let (group_sam_account_name, attributes) =
			(group_sam_account_name.to_owned(), owned_attributes(attributes));
		self.offload(move |searcher| {
			searcher.group_search_result_by_sam_account_name(
				&group_sam_account_name,
				&borrowed_attributes(&attributes),
				limits,
			)
		})
		.await
	}

	/// Async variant of
	/// [`DirectorySearcher::computer_search_result_by_common_name`].
	pub async fn computer_search_result_by_common_name_async(
		self: &Arc<Self>,
		common_name: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let (common_name, attributes) = (common_name.to_owned(), owned_attributes(attributes));
		self.offload(move |searcher| {
			searcher.computer_search_result_by_common_name(
				&common_name,
				&borrowed_attributes(&attributes),
				limits,
			)
		})
		.await
	}

	/// Async variant of
	/// [`DirectorySearcher::computer_search_result_by_object_guid`].
	pub async fn computer_search_result_by_object_guid_async(
		self: &Arc<Self>,
		object_guid: &str,
		attributes: &[&str],
		limits: SearchLimits,
	) -> Result<Option<SearchEntry>, Error> {
		let (object_guid, attributes) = (object_guid.to_owned(), owned_attributes(attributes));
		self.offload(move |searcher| {
			searcher.computer_search_result_by_object_guid(
				&object_guid,
				&borrowed_attributes(&attributes),
				limits,
			)
		})
		.await
	}

	/// Async variant of [`DirectorySearcher::user_by_sam_account_name`].
	pub async fn user_by_sam_account_name_async(
		self: &Arc<Self>,
		sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Option<UserRecord>, Error> {
		let sam_account_name = sam_account_name.to_owned();
		self.offload(move |searcher| searcher.user_by_sam_account_name(&sam_account_name, limits))
			.await
	}

	/// Async variant of [`DirectorySearcher::user_by_email`].
	pub async fn user_by_email_async(
		self: &Arc<Self>,
		email_address: &str,
		limits: SearchLimits,
	) -> Result<Option<UserRecord>, Error> {
		let email_address = email_address.to_owned();
		self.offload(move |searcher| searcher.user_by_email(&email_address, limits)).await
	}

	/// Async variant of [`DirectorySearcher::user_by_distinguished_name`].
	pub async fn user_by_distinguished_name_async(
		self: &Arc<Self>,
		distinguished_name: &str,
		limits: SearchLimits,
	) -> Result<Option<UserRecord>, Error> {
		let distinguished_name = distinguished_name.to_owned();
		self.offload(move |searcher| {
			searcher.user_by_distinguished_name(&distinguished_name, limits)
		})
		.await
	}

	/// Async variant of [`DirectorySearcher::users_by_first_last_name`].
	pub async fn users_by_first_last_name_async(
		self: &Arc<Self>,
		first_name: &str,
		last_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<UserRecord>, Error> {
		let (first_name, last_name) = (first_name.to_owned(), last_name.to_owned());
		self.offload(move |searcher| {
			searcher.users_by_first_last_name(&first_name, &last_name, limits)
		})
		.await
	}

	/// Async variant of [`DirectorySearcher::user_manager_by_sam_account_name`].
	pub async fn user_manager_by_sam_account_name_async(
		self: &Arc<Self>,
		sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Option<UserWithManagerRecord>, Error> {
		let sam_account_name = sam_account_name.to_owned();
		self.offload(move |searcher| {
			searcher.user_manager_by_sam_account_name(&sam_account_name, limits)
		})
		.await
	}

	/// Async variant of [`DirectorySearcher::user_manager_by_email`].
	pub async fn user_manager_by_email_async(
		self: &Arc<Self>,
		email_address: &str,
		limits: SearchLimits,
	) -> Result<Option<UserWithManagerRecord>, Error> {
		let email_address = email_address.to_owned();
		self.offload(move |searcher| searcher.user_manager_by_email(&email_address, limits)).await
	}

	/// Async variant of [`DirectorySearcher::group_by_distinguished_name`].
	pub async fn group_by_distinguished_name_async(
		self: &Arc<Self>,
		distinguished_name: &str,
		limits: SearchLimits,
	) -> Result<Option<GroupRecord>, Error> {
		let distinguished_name = distinguished_name.to_owned();
		self.offload(move |searcher| {
			searcher.group_by_distinguished_name(&distinguished_name, limits)
		})
		.await
	}

	/// Async variant of [`DirectorySearcher::group_by_name`].
	pub async fn group_by_name_async(
		self: &Arc<Self>,
		group_name: &str,
		limits: SearchLimits,
	) -> Result<Option<GroupRecord>, Error> {
		let group_name = group_name.to_owned();
		self.offload(move |searcher| searcher.group_by_name(&group_name, limits)).await
	}

	/// Async variant of [`DirectorySearcher::group_by_sam_account_name`].
	pub async fn group_by_sam_account_name_async(
		self: &Arc<Self>,
		group_sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Option<GroupRecord>, Error> {
		let group_sam_account_name = group_sam_account_name.to_owned();
		self.offload(move |searcher| {
			searcher.group_by_sam_account_name(&group_sam_account_name, limits)
		})
		.await
	}

	/// Async variant of [`DirectorySearcher::group_membership_names_of`].
	pub async fn group_membership_names_of_async(
		self: &Arc<Self>,
		sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<String>, Error> {
		let sam_account_name = sam_account_name.to_owned();
		self.offload(move |searcher| searcher.group_membership_names_of(&sam_account_name, limits))
			.await
	}

	/// Async variant of [`DirectorySearcher::group_memberships_of`].
	pub async fn group_memberships_of_async(
		self: &Arc<Self>,
		sam_account_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<String>, Error> {
		let sam_account_name = sam_account_name.to_owned();
		self.offload(move |searcher| searcher.group_memberships_of(&sam_account_name, limits))
			.await
	}

	/// Async variant of [`DirectorySearcher::group_members`].
	pub async fn group_members_async(
		self: &Arc<Self>,
		group_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<String>, Error> {
		let group_name = group_name.to_owned();
		self.offload(move |searcher| searcher.group_members(&group_name, limits)).await
	}

	/// Async variant of [`DirectorySearcher::group_members_names`].
	pub async fn group_members_names_async(
		self: &Arc<Self>,
		group_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<String>, Error> {
		let group_name = group_name.to_owned();
		self.offload(move |searcher| searcher.group_members_names(&group_name, limits)).await
	}

	/// Async variant of [`DirectorySearcher::group_user_members`].
	pub async fn group_user_members_async(
		self: &Arc<Self>,
		group_name: &str,
		limits: SearchLimits,
	) -> Result<Vec<UserRecord>, Error> {
		let group_name = group_name.to_owned();
		self.offload(move |searcher| searcher.group_user_members(&group_name, limits)).await
	}

	/// Async variant of [`DirectorySearcher::is_user_in_group`].
	pub async fn is_user_in_group_async(
		self: &Arc<Self>,
		group_sam_account_name: &str,
		user_sam_account_name: &str,
	) -> Result<bool, Error> {
		let (group_sam_account_name, user_sam_account_name) =
			(group_sam_account_name.to_owned(), user_sam_account_name.to_owned());
		self.offload(move |searcher| {
			searcher.is_user_in_group(&group_sam_account_name, &user_sam_account_name)
		})
		.await
	}

	/// Async variant of [`DirectorySearcher::computer_by_common_name`].
	pub async fn computer_by_common_name_async(
		self: &Arc<Self>,
		common_name: &str,
	) -> Result<Option<ComputerRecord>, Error> {
		let common_name = common_name.to_owned();
		self.offload(move |searcher| searcher.computer_by_common_name(&common_name)).await
	}

	/// Async variant of [`DirectorySearcher::computer_by_object_guid`].
	pub async fn computer_by_object_guid_async(
		self: &Arc<Self>,
		object_guid: &str,
	) -> Result<Option<ComputerRecord>, Error> {
		let object_guid = object_guid.to_owned();
		self.offload(move |searcher| searcher.computer_by_object_guid(&object_guid)).await
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use super::{checked_email, checked_filter, identifier, object_guid_octets};
	use crate::error::Error;

	#[test]
	fn identifiers_are_trimmed() {
		assert_eq!(identifier("  jpublic ", "sam_account_name").unwrap(), "jpublic");
		assert!(matches!(
			identifier("   ", "sam_account_name"),
			Err(Error::InvalidArgument { parameter: "sam_account_name", .. })
		));
		assert!(identifier("***", "sam_account_name").is_err());
	}

	#[test]
	fn email_addresses_must_look_like_one() {
		assert_eq!(checked_email(" joe.public@example.com").unwrap(), "joe.public@example.com");
		assert!(checked_email("jpublic").is_err());
		assert!(checked_email("").is_err());
	}

	#[test]
	fn free_form_filters() {
		assert_eq!(checked_filter(" (cn=x) "), Some("(cn=x)"));
		assert_eq!(checked_filter(""), None);
		assert_eq!(checked_filter("(=*)"), None);
	}

	#[test]
	fn object_guids() {
		assert!(object_guid_octets(" ").is_err());
		assert!(object_guid_octets("not a guid").is_err());
		let octets = object_guid_octets("00112233-4455-6677-8899-aabbccddeeff").unwrap();
		assert!(octets.starts_with("\\33"));
	}
}
