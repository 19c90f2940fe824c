//! Helpers for picking apart distinguished names such as
//! `CN=Public\, Joe,OU=Partners,DC=oit,DC=example,DC=com`.
use uuid::Uuid;

use crate::error::Error;

/// Split a distinguished name at every comma that is not escaped with a
/// backslash.
fn components(dn: &str) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut start = 0;
	let mut escaped = false;
	for (index, ch) in dn.char_indices() {
		match ch {
			_ if escaped => escaped = false,
			'\\' => escaped = true,
			',' => {
				parts.push(&dn[start..index]);
				start = index + 1;
			}
			_ => {}
		}
	}
	parts.push(&dn[start..]);
	parts
}

/// Strip the `KEY=` prefix of a component if the key matches, ignoring case.
fn value_of<'a>(component: &'a str, key: &str) -> Option<&'a str> {
	let (name, value) = component.trim_start().split_once('=')?;
	name.eq_ignore_ascii_case(key).then_some(value)
}

/// The value of the first `CN=` component, with escaped characters unescaped.
///
/// `CN=IT Web Team,OU=Groups,DC=oit,DC=example,DC=com` gives `IT Web Team`.
#[must_use]
pub fn common_name(dn: &str) -> Option<String> {
	let value = components(dn).into_iter().find_map(|component| value_of(component, "CN"))?;
	let mut unescaped = String::with_capacity(value.len());
	let mut chars = value.chars();
	while let Some(ch) = chars.next() {
		match ch {
			'\\' => unescaped.extend(chars.next()),
			_ => unescaped.push(ch),
		}
	}
	Some(unescaped)
}

/// All `DC=` components of a distinguished name, joined with commas, e.g.
/// `DC=oit,DC=example,DC=com`. Empty if there are none.
pub fn domain_components(dn: &str) -> Result<String, Error> {
	if dn.trim().is_empty() {
		return Err(Error::argument("distinguished_name", "must not be empty"));
	}
	let dcs: Vec<&str> = components(dn)
		.into_iter()
		.map(str::trim)
		.filter(|component| value_of(component, "DC").is_some())
		.collect();
	Ok(dcs.join(","))
}

/// Turn a dotted domain name into its distinguished name:
/// `oit.example.com` gives `DC=oit,DC=example,DC=com`.
pub fn dn_from_domain(domain: &str) -> Result<String, Error> {
	if domain.trim().is_empty() {
		return Err(Error::argument("domain", "must not be empty"));
	}
	let dcs: Vec<String> = domain.trim().split('.').map(|label| format!("DC={label}")).collect();
	Ok(dcs.join(","))
}

/// The inverse of [`dn_from_domain`], used to find a server for serverless
/// paths: `DC=oit,DC=example,DC=com` gives `oit.example.com`.
#[must_use]
pub fn domain_from_dn(dn: &str) -> String {
	let labels: Vec<&str> =
		components(dn).into_iter().filter_map(|component| value_of(component, "DC")).collect();
	labels.join(".")
}

/// An ADSI style path to the domain an object lives in:
/// `CN=Public\, Joe,OU=Partners,DC=oit,DC=example,DC=com` gives
/// `LDAP://DC=oit,DC=example,DC=com`.
pub fn ldap_path(dn: &str) -> Result<String, Error> {
	Ok(format!("LDAP://{}", domain_components(dn)?))
}

/// Build a `LastName, FirstName` label from a user's distinguished name.
///
/// This only works for directories where user objects are named
/// `CN=LastName\, FirstName`: the label is the first two comma separated
/// parts with the escapes and the `CN=` prefix removed.
pub fn name_from_dn(dn: &str) -> Result<String, Error> {
	if dn.trim().is_empty() {
		return Err(Error::argument("distinguished_name", "must not be empty"));
	}
	let mut parts = dn.split(',');
	let last = parts.next().unwrap_or_default().replace("CN=", "").replace('\\', "");
	let first =
		parts.next().ok_or(Error::argument("distinguished_name", "must have two components"))?;
	Ok(format!("{}, {}", last.trim(), first.trim()))
}

/// Encode a GUID string as the escaped byte sequence `objectGUID` filters
/// expect, e.g. `\33\22\11\00...`.
pub fn guid_to_octet_string(guid: &str) -> Result<String, Error> {
	let guid =
		Uuid::parse_str(guid.trim()).map_err(|_| Error::argument("object_guid", "must be a GUID"))?;
	Ok(guid.to_bytes_le().iter().map(|byte| format!("\\{byte:02x}")).collect())
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use super::{
		common_name, domain_components, domain_from_dn, dn_from_domain, guid_to_octet_string,
		ldap_path, name_from_dn,
	};

	const USER_DN: &str = "CN=Public\\, Joe,OU=Partners,DC=oit,DC=example,DC=com";

	#[test]
	fn common_names() {
		assert_eq!(
			common_name("CN=IT Web Team,OU=Groups,DC=oit,DC=example,DC=com").as_deref(),
			Some("IT Web Team")
		);
		assert_eq!(common_name(USER_DN).as_deref(), Some("Public, Joe"));
		assert_eq!(common_name("cn=lower,DC=example").as_deref(), Some("lower"));
		assert_eq!(common_name("OU=Groups,DC=example,DC=com"), None);
	}

	#[test]
	fn domain_component_extraction() {
		assert_eq!(domain_components(USER_DN).unwrap(), "DC=oit,DC=example,DC=com");
		assert_eq!(domain_components("CN=nobody").unwrap(), "");
		assert!(domain_components("").is_err());
		assert_eq!(ldap_path(USER_DN).unwrap(), "LDAP://DC=oit,DC=example,DC=com");
	}

	#[test]
	fn domains_and_dns() {
		assert_eq!(dn_from_domain("oit.example.com").unwrap(), "DC=oit,DC=example,DC=com");
		assert!(dn_from_domain("  ").is_err());
		assert_eq!(domain_from_dn("DC=oit,DC=example,DC=com"), "oit.example.com");
		assert_eq!(domain_from_dn("CN=x"), "");
	}

	#[test]
	fn last_first_label() {
		assert_eq!(name_from_dn(USER_DN).unwrap(), "Public, Joe");
		assert!(name_from_dn("CN=alone").is_err());
	}

	#[test]
	fn guid_octets() {
		assert_eq!(
			guid_to_octet_string("00112233-4455-6677-8899-aabbccddeeff").unwrap(),
			"\\33\\22\\11\\00\\55\\44\\77\\66\\88\\99\\aa\\bb\\cc\\dd\\ee\\ff"
		);
		assert!(guid_to_octet_string("not a guid").is_err());
	}
}
