//! Config for the directory connection.
use std::{fmt, ops::BitOr, time::Duration};

use ldap3::LdapConnSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::{dn, error::Error};

/// Default LDAP port
const LDAP_PORT: u16 = 389;
/// Default LDAP over TLS port
const LDAPS_PORT: u16 = 636;
/// Global catalog port
const GC_PORT: u16 = 3268;
/// Global catalog over TLS port
const GC_TLS_PORT: u16 = 3269;

/// Directory connection configuration.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
	/// Directory path, e.g. `LDAP://dc1.example.com/DC=example,DC=com`. See
	/// [`DirectoryPath`] for the accepted forms.
	pub path: String,
	/// Account to bind as. Binds anonymously if unset.
	#[serde(default)]
	pub credentials: Option<Credentials>,
	/// Port overriding the one implied by the path.
	#[serde(default)]
	pub port: Option<u16>,
	/// How to authenticate and protect the connection.
	#[serde(default)]
	pub authentication: AuthenticationTypes,
	/// Connection settings.
	#[serde(default)]
	pub connection: ConnectionConfig,
}

/// Account used to bind to the directory.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Credentials {
	/// Bind name, e.g. `OIT\svc-lookup` or a distinguished name.
	pub username: String,
	/// Bind password
	pub password: String,
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Configuration for how to connect to the directory server
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionConfig {
	/// Timeout to establish a connection in seconds.
	pub timeout: u64,

	/// LDAP operation timeout, applied to every search. Operations wait
	/// indefinitely if unset.
	#[serde(default)]
	pub operation_timeout: Option<Duration>,

	/// TLS config
	#[serde(default)]
	pub tls: TLSConfig,
}

impl Default for ConnectionConfig {
	fn default() -> Self {
		Self { timeout: 30, operation_timeout: None, tls: TLSConfig::default() }
	}
}

/// TLS Configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TLSConfig {
	/// Use StartTLS extended operation for establishing a secure connection,
	/// rather than TLS on a dedicated port.
	pub starttls: bool,

	/// Disable verification of TLS certificates
	pub no_tls_verify: bool,
}

/// Options for binding to the directory, using the values of the ADSI
/// `AuthenticationTypes` enumeration so existing configuration can be carried
/// over.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthenticationTypes(u32);

impl AuthenticationTypes {
	/// No options.
	pub const NONE: Self = Self(0);
	/// Authenticate with the supplied credentials.
	pub const SECURE: Self = Self(0x1);
	/// Connect over TLS.
	pub const ENCRYPTION: Self = Self(0x2);
	/// A read-only replica is acceptable.
	pub const READONLY_SERVER: Self = Self(0x4);
	/// Bind anonymously even if credentials are supplied.
	pub const NO_AUTHENTICATION: Self = Self(0x10);
	/// Skip reading the object class of the bound object.
	pub const FAST_BIND: Self = Self(0x20);
	/// Integrity protect the connection.
	pub const SIGNING: Self = Self(0x40);
	/// Encrypt the connection.
	pub const SEALING: Self = Self(0x80);
	/// The path names a specific server.
	pub const SERVER_BIND: Self = Self(0x200);

	/// Options used by searchers that are not given any.
	pub const DEFAULT: Self =
		Self(Self::READONLY_SERVER.0 | Self::SEALING.0 | Self::SIGNING.0 | Self::SECURE.0);

	/// Flags from their raw ADSI value.
	#[must_use]
	pub const fn from_bits(bits: u32) -> Self {
		Self(bits)
	}

	/// The raw ADSI value.
	#[must_use]
	pub const fn bits(self) -> u32 {
		self.0
	}

	/// Whether every flag in `other` is set.
	#[must_use]
	pub const fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}
}

impl Default for AuthenticationTypes {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl BitOr for AuthenticationTypes {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		Self(self.0 | rhs.0)
	}
}

impl fmt::Debug for AuthenticationTypes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		const NAMES: &[(AuthenticationTypes, &str)] = &[
			(AuthenticationTypes::SECURE, "SECURE"),
			(AuthenticationTypes::ENCRYPTION, "ENCRYPTION"),
			(AuthenticationTypes::READONLY_SERVER, "READONLY_SERVER"),
			(AuthenticationTypes::NO_AUTHENTICATION, "NO_AUTHENTICATION"),
			(AuthenticationTypes::FAST_BIND, "FAST_BIND"),
			(AuthenticationTypes::SIGNING, "SIGNING"),
			(AuthenticationTypes::SEALING, "SEALING"),
			(AuthenticationTypes::SERVER_BIND, "SERVER_BIND"),
		];
		let names: Vec<&str> =
			NAMES.iter().filter(|(flag, _)| self.contains(*flag)).map(|(_, name)| *name).collect();
		if names.is_empty() {
			write!(f, "AuthenticationTypes(NONE)")
		} else {
			write!(f, "AuthenticationTypes({})", names.join(" | "))
		}
	}
}

/// Where to connect and which subtree to search, parsed from an ADSI style
/// path.
///
/// Accepted forms, with scheme names matched case-insensitively:
/// * `LDAP://host[:port]/DN`, `LDAP://DN` (server found from the DN's `DC=`
///   components), `LDAP://host`
/// * `GC://...`, the same against the global catalog
/// * `LDAPS://...`, and `ldap://` or `ldaps://` URLs in the same shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPath {
	/// URL of the server, without a path.
	pub url: Url,
	/// Search base. Empty if the path only named a server.
	pub base: String,
}

impl DirectoryPath {
	/// Parse `path`. `port` overrides any port the path implies, and the
	/// [`AuthenticationTypes::ENCRYPTION`] flag switches plain `LDAP://` and
	/// `GC://` paths to TLS.
	pub fn parse(
		path: &str,
		port: Option<u16>,
		authentication: AuthenticationTypes,
	) -> Result<Self, Error> {
		let path = path.trim();
		if path.is_empty() {
			return Err(Error::argument("path", "must not be empty"));
		}
		let (scheme, rest) = path
			.split_once("://")
			.ok_or(Error::argument("path", "must start with LDAP://, LDAPS:// or GC://"))?;

		let encrypted = authentication.contains(AuthenticationTypes::ENCRYPTION);
		let (scheme, default_port) = match scheme.to_ascii_uppercase().as_str() {
			"LDAP" if encrypted => ("ldaps", LDAPS_PORT),
			"LDAP" => ("ldap", LDAP_PORT),
			"LDAPS" => ("ldaps", LDAPS_PORT),
			"GC" if encrypted => ("ldaps", GC_TLS_PORT),
			"GC" => ("ldap", GC_PORT),
			_ => return Err(Error::argument("path", "must start with LDAP://, LDAPS:// or GC://")),
		};

		let (server, base) = match rest.split_once('/') {
			Some((server, base)) if !server.contains('=') => (server, base),
			_ if rest.contains('=') => ("", rest),
			_ => (rest, ""),
		};
		let (host, path_port) = split_host_port(server)?;
		let host = if host.is_empty() { dn::domain_from_dn(base) } else { host.to_owned() };
		if host.is_empty() {
			return Err(Error::argument("path", "must name a server or a domain"));
		}
		let port = port.or(path_port).unwrap_or(default_port);
		if port == 0 {
			return Err(Error::argument("port", "must not be zero"));
		}

		let url = Url::parse(&format!("{scheme}://{host}:{port}"))?;
		Ok(Self { url, base: base.to_owned() })
	}
}

/// Split `host:port`, leaving bracketed IPv6 literals intact.
fn split_host_port(server: &str) -> Result<(&str, Option<u16>), Error> {
	let port_separator = match server.rfind(':') {
		Some(index) if !server[index..].contains(']') => index,
		_ => return Ok((server, None)),
	};
	let port = server[port_separator + 1..]
		.parse::<u16>()
		.map_err(|_| Error::argument("path", "has an invalid port"))?;
	Ok((&server[..port_separator], Some(port)))
}

impl Config {
	/// A configuration for `path` with default options and no credentials.
	#[must_use]
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			credentials: None,
			port: None,
			authentication: AuthenticationTypes::DEFAULT,
			connection: ConnectionConfig::default(),
		}
	}

	/// Bind as the given account.
	#[must_use]
	pub fn with_credentials(
		mut self,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		self.credentials =
			Some(Credentials { username: username.into(), password: password.into() });
		self
	}

	/// Check the configuration for empty or out of range values.
	pub fn validate(&self) -> Result<(), Error> {
		if self.path.trim().is_empty() {
			return Err(Error::argument("path", "must not be empty"));
		}
		if let Some(credentials) = &self.credentials {
			if credentials.username.trim().is_empty() {
				return Err(Error::argument("username", "must not be empty"));
			}
			if credentials.password.is_empty() {
				return Err(Error::argument("password", "must not be empty"));
			}
		}
		if self.port == Some(0) {
			return Err(Error::argument("port", "must not be zero"));
		}
		Ok(())
	}

	/// Where to connect, see [`DirectoryPath`].
	pub fn directory_path(&self) -> Result<DirectoryPath, Error> {
		DirectoryPath::parse(&self.path, self.port, self.authentication)
	}

	/// Credentials to perform a simple bind with, if any.
	pub(crate) fn bind_credentials(&self) -> Option<&Credentials> {
		if self.authentication.contains(AuthenticationTypes::NO_AUTHENTICATION) {
			return None;
		}
		self.credentials.as_ref()
	}

	/// Create a [`LdapConnSettings`] for connecting to `path`
	pub(crate) fn to_settings(&self, path: &DirectoryPath) -> LdapConnSettings {
		let protect = self.authentication.contains(AuthenticationTypes::SIGNING)
			|| self.authentication.contains(AuthenticationTypes::SEALING);
		let starttls = self.connection.tls.starttls || (protect && path.url.scheme() == "ldap");
		if self.authentication.contains(AuthenticationTypes::READONLY_SERVER) {
			debug!("Read-only replicas are acceptable for {}", path.url);
		}

		let mut settings = LdapConnSettings::new();
		settings = settings.set_conn_timeout(Duration::from_secs(self.connection.timeout));
		settings = settings.set_starttls(starttls);
		settings = settings.set_no_tls_verify(self.connection.tls.no_tls_verify);
		settings
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use super::{AuthenticationTypes, Config, DirectoryPath};
	use crate::error::Error;

	fn parse(path: &str) -> (String, String) {
		let path = DirectoryPath::parse(path, None, AuthenticationTypes::DEFAULT).unwrap();
		(path.url.to_string(), path.base)
	}

	#[test]
	fn serverless_paths_use_the_domain() {
		assert_eq!(
			parse("LDAP://DC=oit,DC=example,DC=com"),
			("ldap://oit.example.com:389".to_owned(), "DC=oit,DC=example,DC=com".to_owned())
		);
		assert_eq!(
			parse("GC://DC=example,DC=com"),
			("ldap://example.com:3268".to_owned(), "DC=example,DC=com".to_owned())
		);
	}

	#[test]
	fn server_paths() {
		assert_eq!(
			parse("LDAP://dc1.example.com:1389/OU=Partners,DC=example,DC=com"),
			("ldap://dc1.example.com:1389".to_owned(), "OU=Partners,DC=example,DC=com".to_owned())
		);
		assert_eq!(
			parse("ldaps://dc1.example.com"),
			("ldaps://dc1.example.com:636".to_owned(), String::new())
		);
		assert_eq!(
			parse("LDAP://[::1]:1389/DC=example"),
			("ldap://[::1]:1389".to_owned(), "DC=example".to_owned())
		);
	}

	#[test]
	fn encryption_and_port_override() {
		let path = DirectoryPath::parse(
			"GC://DC=example,DC=com",
			None,
			AuthenticationTypes::SECURE | AuthenticationTypes::ENCRYPTION,
		)
		.unwrap();
		assert_eq!(path.url.as_str(), "ldaps://example.com:3269");

		let path = DirectoryPath::parse(
			"LDAP://dc1:1389/DC=example",
			Some(10389),
			AuthenticationTypes::NONE,
		)
		.unwrap();
		assert_eq!(path.url.port(), Some(10389));
	}

	#[test]
	fn invalid_paths() {
		let paths =
			["", "dc1.example.com", "HTTP://dc1/DC=example", "LDAP://", "LDAP://dc1:x/DC=a"];
		for path in paths {
			assert!(
				matches!(
					DirectoryPath::parse(path, None, AuthenticationTypes::DEFAULT),
					Err(Error::InvalidArgument { .. })
				),
				"{path}"
			);
		}
	}

	#[test]
	fn validation() {
		assert!(Config::new("LDAP://DC=example,DC=com").validate().is_ok());
		assert!(Config::new(" ").validate().is_err());
		let config = Config::new("LDAP://DC=example");
		assert!(config.clone().with_credentials("", "secret").validate().is_err());
		assert!(config.with_credentials("svc", "").validate().is_err());
		let mut config = Config::new("LDAP://DC=example");
		config.port = Some(0);
		assert!(config.validate().is_err());
	}

	#[test]
	fn anonymous_bind_overrides_credentials() {
		let mut config = Config::new("LDAP://DC=example").with_credentials("svc", "secret");
		assert!(config.bind_credentials().is_some());
		config.authentication = AuthenticationTypes::NO_AUTHENTICATION;
		assert!(config.bind_credentials().is_none());
	}

	#[test]
	fn flags() {
		let flags = AuthenticationTypes::DEFAULT;
		assert_eq!(flags.bits(), 0xc5);
		assert!(flags.contains(AuthenticationTypes::SEALING | AuthenticationTypes::SIGNING));
		assert!(!flags.contains(AuthenticationTypes::ENCRYPTION));
		assert_eq!(
			format!("{flags:?}"),
			"AuthenticationTypes(SECURE | READONLY_SERVER | SIGNING | SEALING)"
		);
		let config = Config::new("LDAP://DC=example").with_credentials("svc", "hunter2");
		assert!(!format!("{config:?}").contains("hunter2"));
	}

	#[test]
	fn deserializes_with_defaults() {
		let config: Config =
			serde_json::from_str(r#"{"path": "LDAP://DC=example,DC=com"}"#).unwrap();
		assert_eq!(config, Config::new("LDAP://DC=example,DC=com"));
	}
}
