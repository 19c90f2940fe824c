//! Forward name resolution for computer records.
use std::{
	fmt::Debug,
	io,
	net::{IpAddr, ToSocketAddrs},
};

/// Resolves a host name to a network address.
pub trait HostResolver: Debug + Send + Sync {
	/// Look up the first address of `host`.
	fn resolve(&self, host: &str) -> io::Result<IpAddr>;
}

/// Resolves through the operating system, like any other socket connection
/// would.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
	fn resolve(&self, host: &str) -> io::Result<IpAddr> {
		if host.is_empty() {
			return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty host name"));
		}
		(host, 0)
			.to_socket_addrs()?
			.next()
			.map(|addr| addr.ip())
			.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "host has no addresses"))
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use std::net::{IpAddr, Ipv4Addr};

	use super::{HostResolver, SystemResolver};

	#[test]
	fn resolves_literal_addresses() {
		assert_eq!(
			SystemResolver.resolve("127.0.0.1").unwrap(),
			IpAddr::V4(Ipv4Addr::LOCALHOST)
		);
	}

	#[test]
	fn empty_host_fails() {
		assert!(SystemResolver.resolve("").is_err());
	}
}
