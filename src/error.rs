//! Error codes

/// Message prepended to every failure reported by the directory client.
pub const DIRECTORY_ERROR_MESSAGE: &str = "Active Directory connection error";

/// Errors that can occur when using this library
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// An argument was empty or did not have the expected shape. Raised before
	/// anything is sent to the directory.
	#[error("Invalid argument `{parameter}`: {reason}")]
	InvalidArgument {
		/// Name of the offending parameter
		parameter: &'static str,
		/// What was expected of it
		reason: &'static str,
	},
	/// The contents of an attribute did not conform to the expected syntax.
	#[error("Malformed data in attribute `{0}`")]
	Invalid(String),
	/// The directory client failed. Never retried.
	#[error("{}\n\n{0}", DIRECTORY_ERROR_MESSAGE)]
	Directory(#[source] Box<dyn std::error::Error + Send + Sync>),
	/// The DNS host name of a computer could not be resolved to an address.
	#[error("Could not resolve host `{host}`")]
	Resolve {
		/// The host name that was looked up
		host: String,
		/// The underlying resolver error
		#[source]
		source: std::io::Error,
	},
	/// The directory path could not be turned into a URL.
	#[error(transparent)]
	Url(#[from] url::ParseError),
	/// Setting up the runtime driving the connection failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),
	/// The background worker running a blocking lookup panicked or was
	/// cancelled.
	#[error("Background worker failed: {0}")]
	Worker(#[from] tokio::task::JoinError),
}

impl Error {
	/// Wrap a directory client failure.
	pub(crate) fn directory<E>(err: E) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		Self::Directory(Box::new(err))
	}

	/// Shorthand for [`Error::InvalidArgument`].
	pub(crate) const fn argument(parameter: &'static str, reason: &'static str) -> Self {
		Self::InvalidArgument { parameter, reason }
	}
}

#[cfg(test)]
mod tests {
	use super::Error;

	#[test]
	fn directory_errors_carry_prefix() {
		let err = Error::directory(std::io::Error::other("server unavailable"));
		assert_eq!(err.to_string(), "Active Directory connection error\n\nserver unavailable");
	}

	#[test]
	fn argument_errors_name_parameter() {
		let err = Error::argument("sam_account_name", "must be a non-empty account name");
		assert!(err.to_string().contains("`sam_account_name`"));
	}
}
