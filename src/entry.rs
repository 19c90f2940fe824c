//! Helper methods for extracting data from search results.
//!
//! Directory attributes are multi-valued and may be missing entirely. The
//! accessors here collapse that into the shapes the record types want: the first
//! value or an empty string, all values or an empty list, and the binary and
//! timestamp conversions Active Directory needs.
use std::collections::HashMap;

use ldap3::SearchEntry;
use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::{attributes, error::Error};

/// Format used for timestamps converted from file times, e.g.
/// `1/1/2020 2:40:00 AM`.
pub const DATE_FORMAT: &[time::format_description::FormatItem] = time::macros::format_description!(
	"[month padding:none]/[day padding:none]/[year] [hour repr:12 padding:none]:[minute]:[second] [period]"
);

/// File time of the Unix epoch, in 100 ns ticks since 1601-01-01 UTC.
pub const FILETIME_UNIX_EPOCH: i64 = 116_444_736_000_000_000;

/// Security identifiers never carry more sub-authorities than this.
const SID_MAX_SUB_AUTHORITIES: usize = 15;

/// An extension trait for [`SearchEntry`] that provides convenience methods for
/// extracting data.
///
/// Attribute names are compared case-insensitively, since servers do not always
/// echo them back in the case they were requested in.
pub trait SearchEntryExt {
	/// Get the first value of an attribute. Will return `None` if attribute
	/// value is not valid UTF-8.
	fn attr_first(&self, attr: &str) -> Option<&str>;

	/// Get the first value of an attribute, in binary form
	fn bin_attr_first(&self, attr: &str) -> Option<&[u8]>;

	/// Get every value of an attribute. Values that are not valid UTF-8 are
	/// converted lossily.
	fn attr_values(&self, attr: &str) -> Vec<String>;

	/// Get the first value of an attribute, or an empty string.
	fn attr(&self, attr: &str) -> String {
		self.attr_first(attr).map(str::to_owned).unwrap_or_default()
	}

	/// Get the first value of an attribute interpreted as a GUID in the
	/// mixed-endian layout Active Directory stores `objectGUID` in, formatted
	/// like `00112233-4455-6677-8899-aabbccddeeff`. Missing attributes give an
	/// empty string.
	fn attr_as_guid(&self, attr: &str) -> Result<String, Error> {
		let Some(bytes) = self.bin_attr_first(attr) else {
			return Ok(String::new());
		};
		let guid = Uuid::from_slice_le(bytes).map_err(|_| Error::Invalid(attr.to_owned()))?;
		Ok(guid.to_string())
	}

	/// Get the first value of an attribute interpreted as a binary security
	/// identifier, formatted like `S-1-5-21-...`. Missing attributes give an
	/// empty string.
	fn attr_as_sid(&self, attr: &str) -> Result<String, Error> {
		match self.bin_attr_first(attr) {
			Some(bytes) => format_sid(bytes).ok_or_else(|| Error::Invalid(attr.to_owned())),
			None => Ok(String::new()),
		}
	}

	/// Get the first value of an attribute interpreted as a file time and
	/// formatted with [`DATE_FORMAT`] in the local time zone, using the offset
	/// in effect at that instant. Falls back to UTC when the local offset cannot
	/// be determined.
	///
	/// Returns `None` if the attribute is missing or not a valid file time.
	fn attr_as_date(&self, attr: &str) -> Option<String> {
		let utc = filetime_to_utc(self.attr_first(attr)?.trim().parse::<i64>().ok()?)?;
		let offset = UtcOffset::local_offset_at(utc).unwrap_or(UtcOffset::UTC);
		utc.to_offset(offset).format(&DATE_FORMAT).ok()
	}

	/// Like [`SearchEntryExt::attr_as_date`], with an explicit offset.
	fn attr_as_date_with_offset(&self, attr: &str, offset: UtcOffset) -> Option<String> {
		let ticks = self.attr_first(attr)?.trim().parse::<i64>().ok()?;
		filetime_to_utc(ticks)?.to_offset(offset).format(&DATE_FORMAT).ok()
	}

	/// The upper-cased domain part of `msDS-PrincipalName`, or an empty string.
	fn domain(&self) -> String {
		self.attr_first(attributes::MSDS_PRINCIPAL_NAME)
			.and_then(|name| name.split('\\').next())
			.map(str::to_uppercase)
			.unwrap_or_default()
	}

	/// All SMTP addresses in `proxyAddresses`, lower-cased and without the
	/// `smtp:` prefix.
	fn proxy_emails(&self) -> Vec<String> {
		self.attr_values(attributes::PROXY_ADDRESSES)
			.into_iter()
			.map(|address| address.to_lowercase())
			.filter(|address| address.contains("smtp:"))
			.map(|address| address.replace("smtp:", ""))
			.collect()
	}
}

impl SearchEntryExt for SearchEntry {
	fn attr_first(&self, attr: &str) -> Option<&str> {
		let attr = lookup(&self.attrs, attr)?;
		attr.first().map(String::as_str)
	}

	fn bin_attr_first(&self, attr: &str) -> Option<&[u8]> {
		if let Some(attr) = lookup(&self.attrs, attr) {
			return attr.first().map(String::as_bytes);
		}

		if let Some(attr) = lookup(&self.bin_attrs, attr) {
			return attr.first().map(Vec::as_slice);
		}
		None
	}

	fn attr_values(&self, attr: &str) -> Vec<String> {
		if let Some(values) = lookup(&self.attrs, attr) {
			return values.clone();
		}

		lookup(&self.bin_attrs, attr)
			.map(|values| {
				values.iter().map(|value| String::from_utf8_lossy(value).into_owned()).collect()
			})
			.unwrap_or_default()
	}
}

/// Find an attribute by exact name first, then ignoring ASCII case.
fn lookup<'a, V>(map: &'a HashMap<String, Vec<V>>, attr: &str) -> Option<&'a Vec<V>> {
	map.get(attr).or_else(|| {
		map.iter().find(|(name, _)| name.eq_ignore_ascii_case(attr)).map(|(_, values)| values)
	})
}

/// Convert a file time to a UTC timestamp. `None` for negative values and for
/// values beyond the representable range, such as the `i64::MAX` Active
/// Directory uses for "never".
#[must_use]
pub fn filetime_to_utc(ticks: i64) -> Option<OffsetDateTime> {
	if ticks < 0 {
		return None;
	}
	let nanos = (i128::from(ticks) - i128::from(FILETIME_UNIX_EPOCH)) * 100;
	OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}

/// Format a binary security identifier in its string form.
///
/// The binary layout is a revision byte, a sub-authority count, a 48 bit
/// big-endian identifier authority and that many 32 bit little-endian
/// sub-authorities.
#[must_use]
pub fn format_sid(bytes: &[u8]) -> Option<String> {
	let (&revision, rest) = bytes.split_first()?;
	let (&count, rest) = rest.split_first()?;
	let count = usize::from(count);
	if revision != 1 || count > SID_MAX_SUB_AUTHORITIES || rest.len() < 6 + 4 * count {
		return None;
	}

	let (authority, sub_authorities) = rest.split_at(6);
	let authority = authority.iter().fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte));
	let mut sid = if authority < 1 << 32 {
		format!("S-{revision}-{authority}")
	} else {
		format!("S-{revision}-0x{authority:012X}")
	};
	for chunk in sub_authorities.chunks_exact(4).take(count) {
		let sub_authority = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
		sid.push('-');
		sid.push_str(&sub_authority.to_string());
	}
	Some(sid)
}
