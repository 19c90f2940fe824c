//! Typed snapshots of directory objects.
//!
//! Each record lists the attributes it needs, and is built from one search
//! entry that was fetched with (at least) those attributes. Missing attributes
//! become empty strings or empty lists.
use std::net::IpAddr;

use ldap3::SearchEntry;
use serde::{Deserialize, Serialize};

use crate::{attributes as attr, entry::SearchEntryExt, error::Error, resolve::HostResolver};

/// Data about a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
	/// `objectGUID` in its string form.
	pub object_guid: String,
	/// `objectSid` in its string form.
	pub object_sid: String,
	/// `employeeID`
	pub employee_id: String,
	/// `employeeNumber`
	pub employee_number: String,
	/// `userAccountControl` flags, as sent by the server.
	pub user_account_control: String,
	/// NetBIOS domain name, upper-cased.
	pub domain: String,
	/// `DOMAIN\ACCOUNT`, upper-cased.
	pub full_sam_account_name: String,
	/// Logon name, upper-cased.
	pub sam_account_name: String,
	/// `displayName`
	pub display_name: String,
	/// `distinguishedName`
	pub distinguished_name: String,
	/// `cn`
	pub full_name: String,
	/// `givenName`
	pub first_name: String,
	/// `initials`
	pub middle_name: String,
	/// `sn`
	pub last_name: String,
	/// `mail`
	pub email: String,
	/// `telephoneNumber`
	pub work_phone: String,
	/// `mobile`
	pub mobile_phone: String,
	/// `title`
	pub title: String,
	/// `physicalDeliveryOfficeName`
	pub office: String,
	/// `department`
	pub department: String,
	/// `company`
	pub company: String,
	/// `l`
	pub city: String,
	/// `st`
	pub state: String,
}

impl UserRecord {
	/// Attributes to request for [`UserRecord::from_search`].
	pub const ATTRIBUTES: &'static [&'static str] = &[
		attr::COMMON_NAME,
		attr::DISPLAY_NAME,
		attr::DISTINGUISHED_NAME,
		attr::OBJECT_GUID,
		attr::OBJECT_SID,
		attr::EMPLOYEE_ID,
		attr::EMPLOYEE_NUMBER,
		attr::USER_ACCOUNT_CONTROL,
		attr::USER_PRINCIPAL_NAME,
		attr::MSDS_PRINCIPAL_NAME,
		attr::EMAIL_ADDRESS,
		attr::FIRST_NAME,
		attr::LAST_NAME,
		attr::MIDDLE_NAME,
		attr::LOGIN_NAME,
		attr::TELEPHONE_NUMBER,
		attr::MOBILE_PHONE,
		attr::TITLE,
		attr::OFFICE,
		attr::DEPARTMENT,
		attr::COMPANY,
		attr::CITY,
		attr::STATE,
	];

	/// Converts a [`SearchEntry`] to a [`UserRecord`].
	pub fn from_search(entry: &SearchEntry) -> Result<Self, Error> {
		Ok(Self {
			object_guid: entry.attr_as_guid(attr::OBJECT_GUID)?,
			object_sid: entry.attr_as_sid(attr::OBJECT_SID)?,
			employee_id: entry.attr(attr::EMPLOYEE_ID),
			employee_number: entry.attr(attr::EMPLOYEE_NUMBER),
			user_account_control: entry.attr(attr::USER_ACCOUNT_CONTROL),
			domain: entry.domain(),
			full_sam_account_name: entry.attr(attr::MSDS_PRINCIPAL_NAME).to_uppercase(),
			sam_account_name: entry.attr(attr::LOGIN_NAME).to_uppercase(),
			display_name: entry.attr(attr::DISPLAY_NAME),
			distinguished_name: entry.attr(attr::DISTINGUISHED_NAME),
			full_name: entry.attr(attr::COMMON_NAME),
			first_name: entry.attr(attr::FIRST_NAME),
			middle_name: entry.attr(attr::MIDDLE_NAME),
			last_name: entry.attr(attr::LAST_NAME),
			title: entry.attr(attr::TITLE),
			email: entry.attr(attr::EMAIL_ADDRESS),
			work_phone: entry.attr(attr::TELEPHONE_NUMBER),
			mobile_phone: entry.attr(attr::MOBILE_PHONE),
			office: entry.attr(attr::OFFICE),
			department: entry.attr(attr::DEPARTMENT),
			company: entry.attr(attr::COMPANY),
			city: entry.attr(attr::CITY),
			state: entry.attr(attr::STATE),
		})
	}
}

/// A user together with their manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithManagerRecord {
	/// The user themselves.
	pub user: UserRecord,
	/// Distinguished name from the user's `manager` attribute, or empty.
	pub manager_distinguished_name: String,
	/// The manager's record. Only looked up when
	/// `manager_distinguished_name` is set, and still `None` if nothing was
	/// found under it.
	pub manager: Option<UserRecord>,
}

impl UserWithManagerRecord {
	/// Attributes to request for [`UserWithManagerRecord::from_search`]: the
	/// user attributes and `manager`.
	#[must_use]
	pub fn attributes() -> Vec<&'static str> {
		[UserRecord::ATTRIBUTES, &[attr::MANAGER]].concat()
	}

	/// Converts a [`SearchEntry`] to a record without a resolved manager.
	pub fn from_search(entry: &SearchEntry) -> Result<Self, Error> {
		Ok(Self {
			user: UserRecord::from_search(entry)?,
			manager_distinguished_name: entry.attr(attr::MANAGER),
			manager: None,
		})
	}
}

/// Data about a group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
	/// `canonicalName`, e.g. `example.com/Groups/IT Web Team`.
	pub canonical_name: String,
	/// `cn`
	pub common_name: String,
	/// `description`
	pub description: String,
	/// `displayName`
	pub display_name: String,
	/// `distinguishedName`
	pub distinguished_name: String,
	/// `groupCategory`
	pub group_category: String,
	/// `groupScope`
	pub group_scope: String,
	/// `managedBy`
	pub managed_by: String,
	/// Distinguished names of the direct members, in server order.
	pub members: Vec<String>,
	/// `objectGUID` in its string form.
	pub object_guid: String,
	/// `objectSid` in its string form.
	pub object_sid: String,
	/// Logon name, upper-cased.
	pub sam_account_name: String,
}

impl GroupRecord {
	/// Attributes to request for [`GroupRecord::from_search`].
	pub const ATTRIBUTES: &'static [&'static str] = &[
		attr::CANONICAL_NAME,
		attr::COMMON_NAME,
		attr::DESCRIPTION,
		attr::DISPLAY_NAME,
		attr::DISTINGUISHED_NAME,
		attr::GROUP_CATEGORY,
		attr::GROUP_SCOPE,
		attr::MANAGED_BY,
		attr::MEMBER,
		attr::OBJECT_GUID,
		attr::OBJECT_SID,
		attr::LOGIN_NAME,
	];

	/// Converts a [`SearchEntry`] to a [`GroupRecord`].
	pub fn from_search(entry: &SearchEntry) -> Result<Self, Error> {
		Ok(Self {
			canonical_name: entry.attr(attr::CANONICAL_NAME),
			common_name: entry.attr(attr::COMMON_NAME),
			description: entry.attr(attr::DESCRIPTION),
			display_name: entry.attr(attr::DISPLAY_NAME),
			distinguished_name: entry.attr(attr::DISTINGUISHED_NAME),
			group_category: entry.attr(attr::GROUP_CATEGORY),
			group_scope: entry.attr(attr::GROUP_SCOPE),
			managed_by: entry.attr(attr::MANAGED_BY),
			members: entry.attr_values(attr::MEMBER),
			object_guid: entry.attr_as_guid(attr::OBJECT_GUID)?,
			object_sid: entry.attr_as_sid(attr::OBJECT_SID)?,
			sam_account_name: entry.attr(attr::LOGIN_NAME).to_uppercase(),
		})
	}
}

/// Data about a computer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerRecord {
	/// `cn`
	pub common_name: String,
	/// `dNSHostName`
	pub dns_host_name: String,
	/// `distinguishedName`
	pub distinguished_name: String,
	/// `objectGUID` in its string form.
	pub object_guid: String,
	/// `description`
	pub description: String,
	/// `operatingSystem`
	pub operating_system: String,
	/// `operatingSystemVersion`
	pub operating_system_version: String,
	/// First address `dns_host_name` resolved to when the record was built.
	pub ip_address: IpAddr,
}

impl ComputerRecord {
	/// Attributes to request for [`ComputerRecord::from_search`].
	pub const ATTRIBUTES: &'static [&'static str] = &[
		attr::COMMON_NAME,
		attr::DNS_HOST_NAME,
		attr::DISTINGUISHED_NAME,
		attr::OBJECT_GUID,
		attr::DESCRIPTION,
		attr::OPERATING_SYSTEM,
		attr::OPERATING_SYSTEM_VERSION,
	];

	/// Converts a [`SearchEntry`] to a [`ComputerRecord`], resolving the host
	/// name with `resolver`. Fails if the name does not resolve.
	pub fn from_search(entry: &SearchEntry, resolver: &dyn HostResolver) -> Result<Self, Error> {
		let dns_host_name = entry.attr(attr::DNS_HOST_NAME);
		let ip_address = resolver
			.resolve(&dns_host_name)
			.map_err(|source| Error::Resolve { host: dns_host_name.clone(), source })?;
		Ok(Self {
			common_name: entry.attr(attr::COMMON_NAME),
			dns_host_name,
			distinguished_name: entry.attr(attr::DISTINGUISHED_NAME),
			object_guid: entry.attr_as_guid(attr::OBJECT_GUID)?,
			description: entry.attr(attr::DESCRIPTION),
			operating_system: entry.attr(attr::OPERATING_SYSTEM),
			operating_system_version: entry.attr(attr::OPERATING_SYSTEM_VERSION),
			ip_address,
		})
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use std::{
		collections::HashMap,
		io,
		net::{IpAddr, Ipv4Addr},
	};

	use ldap3::SearchEntry;
	use pretty_assertions::assert_eq;

	use super::{ComputerRecord, GroupRecord, UserRecord, UserWithManagerRecord};
	use crate::{error::Error, resolve::HostResolver};

	#[derive(Debug)]
	struct FixedResolver(Option<IpAddr>);

	impl HostResolver for FixedResolver {
		fn resolve(&self, _host: &str) -> io::Result<IpAddr> {
			self.0.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such host"))
		}
	}

	fn search_entry(attrs: &[(&str, &str)]) -> SearchEntry {
		SearchEntry {
			dn: String::new(),
			attrs: attrs
				.iter()
				.map(|(name, value)| ((*name).to_owned(), vec![(*value).to_owned()]))
				.collect(),
			bin_attrs: HashMap::new(),
		}
	}

	#[test]
	fn empty_entry_gives_empty_fields() {
		let entry = search_entry(&[]);
		assert_eq!(UserRecord::from_search(&entry).unwrap(), UserRecord::default());
		assert_eq!(GroupRecord::from_search(&entry).unwrap(), GroupRecord::default());
		assert_eq!(
			UserWithManagerRecord::from_search(&entry).unwrap(),
			UserWithManagerRecord::default()
		);
	}

	#[test]
	fn user_fields() {
		let entry = search_entry(&[
			("cn", "Joe Public"),
			("distinguishedName", "CN=Public\\, Joe,OU=Partners,DC=oit,DC=example,DC=com"),
			("msDS-PrincipalName", "oit\\jpublic"),
			("sAMAccountName", "jpublic"),
			("givenName", "Joe"),
			("sn", "Public"),
			("mail", "joe.public@example.com"),
		]);
		let user = UserRecord::from_search(&entry).unwrap();
		assert_eq!(user.full_name, "Joe Public");
		assert_eq!(
			user.distinguished_name,
			"CN=Public\\, Joe,OU=Partners,DC=oit,DC=example,DC=com"
		);
		assert_eq!(user.domain, "OIT");
		assert_eq!(user.full_sam_account_name, "OIT\\JPUBLIC");
		assert_eq!(user.sam_account_name, "JPUBLIC");
		assert_eq!(user.first_name, "Joe");
		assert_eq!(user.last_name, "Public");
		assert_eq!(user.email, "joe.public@example.com");
		assert_eq!(user.title, "");
	}

	#[test]
	fn manager_attributes_extend_user_attributes() {
		let attributes = UserWithManagerRecord::attributes();
		assert_eq!(attributes.len(), UserRecord::ATTRIBUTES.len() + 1);
		assert_eq!(attributes.last(), Some(&"manager"));
	}

	#[test]
	fn group_members_keep_order() {
		let mut entry = search_entry(&[("cn", "IT Web Team"), ("sAMAccountName", "it-web")]);
		entry.attrs.insert(
			"member".to_owned(),
			vec!["CN=B,DC=example,DC=com".to_owned(), "CN=A,DC=example,DC=com".to_owned()],
		);
		let group = GroupRecord::from_search(&entry).unwrap();
		assert_eq!(group.members, ["CN=B,DC=example,DC=com", "CN=A,DC=example,DC=com"]);
		assert_eq!(group.sam_account_name, "IT-WEB");
	}

	#[test]
	fn computer_address_is_resolved() {
		let entry = search_entry(&[("cn", "WEB01"), ("dNSHostName", "web01.oit.example.com")]);
		let address = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7));
		let computer = ComputerRecord::from_search(&entry, &FixedResolver(Some(address))).unwrap();
		assert_eq!(computer.ip_address, address);
		assert_eq!(computer.operating_system, "");

		let err = ComputerRecord::from_search(&entry, &FixedResolver(None)).unwrap_err();
		assert!(matches!(err, Error::Resolve { host, .. } if host == "web01.oit.example.com"));
	}
}
