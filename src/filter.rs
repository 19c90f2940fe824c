//! Search filter templates. Identifiers are substituted verbatim, so callers
//! validate and trim them first.

/// Matching rule OID that makes `memberOf` comparisons walk nested groups.
pub const LDAP_MATCHING_RULE_IN_CHAIN: &str = "1.2.840.113556.1.4.1941";

/// A user by logon name.
#[must_use]
pub fn user_by_sam_account_name(sam_account_name: &str) -> String {
	format!("(&(objectClass=user)(sAMAccountName={sam_account_name}))")
}

/// A user by any of their SMTP addresses.
#[must_use]
pub fn user_by_email(email: &str) -> String {
	format!("(&(objectClass=user)(proxyAddresses=smtp:{email}))")
}

/// A user by distinguished name.
#[must_use]
pub fn user_by_distinguished_name(dn: &str) -> String {
	format!("(&(objectClass=user)(distinguishedName={dn}))")
}

/// Users whose surname and given name start with the given prefixes.
#[must_use]
pub fn users_by_first_last_name(first_name: &str, last_name: &str) -> String {
	format!("(&(objectClass=user)(sn={last_name}*)(givenName={first_name}*))")
}

/// A group by distinguished name.
#[must_use]
pub fn group_by_distinguished_name(dn: &str) -> String {
	format!("(&(objectClass=group)(distinguishedName={dn}))")
}

/// A group by common name.
#[must_use]
pub fn group_by_name(name: &str) -> String {
	format!("(&(objectClass=group)(cn={name}))")
}

/// A group by logon name.
#[must_use]
pub fn group_by_sam_account_name(sam_account_name: &str) -> String {
	format!("(&(objectClass=group)(sAMAccountName={sam_account_name}))")
}

/// The user with the given logon name, if they are a direct or nested member
/// of the group.
#[must_use]
pub fn user_in_group(group_dn: &str, user_sam_account_name: &str) -> String {
	format!(
		"(&(memberOf:{LDAP_MATCHING_RULE_IN_CHAIN}:={group_dn})(objectCategory=person)(objectClass=user)(sAMAccountName={user_sam_account_name}))"
	)
}

/// A computer by common name.
#[must_use]
pub fn computer_by_common_name(name: &str) -> String {
	format!("(&(objectClass=computer)(cn={name}))")
}

/// A computer by `objectGUID`, given as an escaped octet string.
#[must_use]
pub fn computer_by_object_guid(octets: &str) -> String {
	format!("(&(objectClass=computer)(objectGUID={octets}))")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identifiers_are_substituted_verbatim() {
		assert_eq!(
			user_by_sam_account_name("jpublic"),
			"(&(objectClass=user)(sAMAccountName=jpublic))"
		);
		assert_eq!(
			user_by_email("joe@example.com"),
			"(&(objectClass=user)(proxyAddresses=smtp:joe@example.com))"
		);
		assert_eq!(
			users_by_first_last_name("Jo", "Pub"),
			"(&(objectClass=user)(sn=Pub*)(givenName=Jo*))"
		);
		assert_eq!(group_by_name("IT Web Team"), "(&(objectClass=group)(cn=IT Web Team))");
		assert_eq!(
			computer_by_object_guid("\\33\\22"),
			"(&(objectClass=computer)(objectGUID=\\33\\22))"
		);
	}

	#[test]
	fn nested_membership_filter() {
		assert_eq!(
			user_in_group("CN=IT Web Team,DC=example,DC=com", "jpublic"),
			"(&(memberOf:1.2.840.113556.1.4.1941:=CN=IT Web Team,DC=example,DC=com)\
			 (objectCategory=person)(objectClass=user)(sAMAccountName=jpublic))"
		);
	}
}
