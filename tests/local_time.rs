#![allow(clippy::unwrap_used)]
use std::collections::HashMap;

use ad_searcher::{attributes, entry::filetime_to_utc, SearchEntry, SearchEntryExt};
use time::{macros::offset, UtcOffset};

/// 2020-01-01 02:40:00 UTC
const WINTER: i64 = 132_223_200_000_000_000;
/// 2019-07-01 02:40:00 UTC
const SUMMER: i64 = 132_064_224_000_000_000;

#[test]
fn dates_use_the_local_offset_of_their_instant() {
	std::env::set_var("TZ", "America/New_York");

	let winter = UtcOffset::local_offset_at(filetime_to_utc(WINTER).unwrap());
	let summer = UtcOffset::local_offset_at(filetime_to_utc(SUMMER).unwrap());
	let (Ok(winter), Ok(summer)) = (winter, summer) else {
		// The local offset is unavailable once the process is multi-threaded.
		return;
	};
	if winter == summer {
		// No zone database.
		return;
	}
	assert_eq!(winter, offset!(-5));
	assert_eq!(summer, offset!(-4));

	let entry = SearchEntry {
		dn: "CN=Public\\, Joe,OU=Partners,DC=oit,DC=example,DC=com".to_owned(),
		attrs: HashMap::from([
			(attributes::PWD_LAST_SET.to_owned(), vec![WINTER.to_string()]),
			(attributes::LAST_LOGON_TIMESTAMP.to_owned(), vec![SUMMER.to_string()]),
		]),
		bin_attrs: HashMap::new(),
	};
	assert_eq!(
		entry.attr_as_date(attributes::PWD_LAST_SET).as_deref(),
		Some("12/31/2019 9:40:00 PM")
	);
	assert_eq!(
		entry.attr_as_date(attributes::LAST_LOGON_TIMESTAMP).as_deref(),
		Some("6/30/2019 10:40:00 PM")
	);
}
