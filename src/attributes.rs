//! Names of the Active Directory attributes requested and read by this crate.

/// `canonicalName`
pub const CANONICAL_NAME: &str = "canonicalName";
/// `l` (locality)
pub const CITY: &str = "l";
/// `company`
pub const COMPANY: &str = "company";
/// `cn`
pub const COMMON_NAME: &str = "cn";
/// `department`
pub const DEPARTMENT: &str = "department";
/// `description`
pub const DESCRIPTION: &str = "description";
/// `displayName`
pub const DISPLAY_NAME: &str = "displayName";
/// `distinguishedName`
pub const DISTINGUISHED_NAME: &str = "distinguishedName";
/// `dNSHostName`
pub const DNS_HOST_NAME: &str = "dNSHostName";
/// `employeeID`
pub const EMPLOYEE_ID: &str = "employeeID";
/// `employeeNumber`
pub const EMPLOYEE_NUMBER: &str = "employeeNumber";
/// `mail`
pub const EMAIL_ADDRESS: &str = "mail";
/// `givenName`
pub const FIRST_NAME: &str = "givenName";
/// `groupCategory`
pub const GROUP_CATEGORY: &str = "groupCategory";
/// `groupScope`
pub const GROUP_SCOPE: &str = "groupScope";
/// `lastLogonTimestamp`, a file time
pub const LAST_LOGON_TIMESTAMP: &str = "lastLogonTimestamp";
/// `sn`
pub const LAST_NAME: &str = "sn";
/// `sAMAccountName`
pub const LOGIN_NAME: &str = "sAMAccountName";
/// `managedBy`
pub const MANAGED_BY: &str = "managedBy";
/// `manager`
pub const MANAGER: &str = "manager";
/// `member`
pub const MEMBER: &str = "member";
/// `memberOf`
pub const MEMBER_OF: &str = "memberOf";
/// `initials`
pub const MIDDLE_NAME: &str = "initials";
/// `mobile`
pub const MOBILE_PHONE: &str = "mobile";
/// `msDS-PrincipalName`, shaped like `DOMAIN\account`
pub const MSDS_PRINCIPAL_NAME: &str = "msDS-PrincipalName";
/// `objectGUID`, a 16 byte binary value
pub const OBJECT_GUID: &str = "objectGUID";
/// `objectSid`, a binary security identifier
pub const OBJECT_SID: &str = "objectSid";
/// `physicalDeliveryOfficeName`
pub const OFFICE: &str = "physicalDeliveryOfficeName";
/// `operatingSystem`
pub const OPERATING_SYSTEM: &str = "operatingSystem";
/// `operatingSystemVersion`
pub const OPERATING_SYSTEM_VERSION: &str = "operatingSystemVersion";
/// `proxyAddresses`
pub const PROXY_ADDRESSES: &str = "proxyAddresses";
/// `pwdLastSet`, a file time
pub const PWD_LAST_SET: &str = "pwdLastSet";
/// `st`
pub const STATE: &str = "st";
/// `telephoneNumber`
pub const TELEPHONE_NUMBER: &str = "telephoneNumber";
/// `title`
pub const TITLE: &str = "title";
/// `userAccountControl`
pub const USER_ACCOUNT_CONTROL: &str = "userAccountControl";
/// `userPrincipalName`
pub const USER_PRINCIPAL_NAME: &str = "userPrincipalName";
