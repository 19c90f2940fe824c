//! Input guards applied to identifiers before they are interpolated into search
//! filters.
//!
//! Every predicate rejects empty input and otherwise reports whether its
//! character class matches *anywhere* in the value. The match is not anchored,
//! so `"jpublic!"` still passes [`is_valid_alpha_numeric`]. Callers that need
//! full-string validation have to check that themselves.
use std::sync::LazyLock;

use regex::Regex;

/// Accented Latin letters accepted in addition to ASCII letters.
const EXTENDED_LATIN: &str = "\
	áÁàÀȧȦâäǎăāãåąⱥấầắằǡǻǟẫẵảȁȃẩẳạḁậặÂÄǍĂĀÃÅ\
	ĄȺẤẦẮẰǠǺǞẪẴẢȀȂẨẲẠḀẬẶæÆǽǼǣǢḃƀɓḅḇƃḂɃƁḄḆƂćċ\
	ĉčçȼḉƈĆĊĈČÇȻḈƇḋďḑđƌɗḍḓḏðǳǆḊĎḐĐƋƊḌḒḎÐǱǲǄǅ\
	éèėêëěĕēẽęȩɇếềḗḕễḝẻȅȇểẹḙḛệÉÈĖÊËĚĔĒẼĘȨɆẾỀ\
	ḖḔỄḜẺȄȆỂẸḘḚỆḟƒƑḞǵġĝǧğḡģǥɠǴĠĜǦĞḠĢǤƓḣĥḧȟḩħ\
	ḥḫⱨḢĤḦȞḨĦḤḪⱧíìıîïǐĭīĩįɨḯỉȉȋịḭĳÍÌİÎÏǏĬĪĨĮ\
	ƗḮỈȈȊỊḬĲĵǰɉĴɈḱǩķƙḳḵⱪḰǨĶƘḲḴⱩĺŀľⱡļƚłḷḽḻḹǉĹ\
	ĿĽⱠĻȽŁḶḼḺḸǇǈḿṁṃḾṀṂńǹṅňñņɲƞṇṋṉǌŋŃǸṄŇÑŅƝȠṆ\
	ṊṈǊǋŊóòȯôöǒŏōõǫőốồøṓṑȱṍȫỗṏǿȭǭỏȍȏơổọớờỡộƣ\
	ởợœÓÒȮÔÖǑŎŌÕǪŐỐỒØṒṐȰṌȪỖṎǾȬǬỎȌȎƠỔỌỚỜỠỘƢỞỢ\
	ŒṕṗᵽƥṔṖⱣƤɋɊŕṙřŗɍɽȑȓṛṟṝŔṘŘŖɌⱤȐȒṚṞṜśṡŝšşṥṧ\
	ṣșṩßŚṠŜŠŞṤṦṢȘṨẞṫẗťţƭṭʈțṱṯⱦþŧṪŤŢƬṬƮȚṰṮȾÞŦ\
	úùûüǔŭūũůųűʉǘǜǚṹǖṻủȕȗưụṳứừṷṵữửựÚÙÛÜǓŬŪŨŮ\
	ŲŰɄǗǛǙṸǕṺỦȔȖƯỤṲỨỪṶṴỮỬỰṽṿʋṼṾƲẃẁẇŵẅẘẉⱳẂẀẆŴ\
	ẄẈⱲẋẍẊẌýỳẏŷÿȳỹẙɏỷƴỵÝỲẎŶŸȲỸɎỶƳỴźżẑžƶȥẓẕⱬŹ\
	ŻẐŽƵȤẒẔⱫ";

/// At least one letter.
static ALPHA: LazyLock<Regex> = LazyLock::new(|| class_regex(&format!("[a-zA-Z{EXTENDED_LATIN}]")));

/// At least one letter or digit.
static ALPHA_NUMERIC: LazyLock<Regex> =
	LazyLock::new(|| class_regex(&format!("[a-zA-Z0-9{EXTENDED_LATIN}]")));

/// At least one character that may appear in a person's name.
static NAME: LazyLock<Regex> =
	LazyLock::new(|| class_regex(&format!("[a-zA-Z0-9 ,.'{EXTENDED_LATIN}-]")));

/// Something shaped like `local@domain.tld`.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
	class_regex(&format!(
		"[a-zA-Z0-9'_.{EXTENDED_LATIN}-]+@[a-zA-Z0-9'_.{EXTENDED_LATIN}-]+\\.[a-zA-Z0-9{EXTENDED_LATIN}]{{2,4}}"
	))
});

/// Compile one of the patterns above. They are constant, so failure is a bug.
#[allow(clippy::expect_used)]
fn class_regex(pattern: &str) -> Regex {
	Regex::new(pattern).expect("validation patterns are valid regular expressions")
}

/// Whether the value contains a letter.
#[must_use]
pub fn is_valid_alpha(value: &str) -> bool {
	!value.is_empty() && ALPHA.is_match(value)
}

/// Whether the value contains a letter or a digit.
#[must_use]
pub fn is_valid_alpha_numeric(value: &str) -> bool {
	!value.is_empty() && ALPHA_NUMERIC.is_match(value)
}

/// Whether the value contains a character allowed in names (letters, digits,
/// space, comma, period, apostrophe, hyphen).
#[must_use]
pub fn is_valid_name(value: &str) -> bool {
	!value.is_empty() && NAME.is_match(value)
}

/// Whether the value contains an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
	!value.is_empty() && EMAIL.is_match(value)
}

#[cfg(test)]
mod tests {
	use super::{is_valid_alpha, is_valid_alpha_numeric, is_valid_email, is_valid_name};

	#[test]
	fn empty_values_are_rejected() {
		assert!(!is_valid_alpha(""));
		assert!(!is_valid_alpha_numeric(""));
		assert!(!is_valid_name(""));
		assert!(!is_valid_email(""));
	}

	#[test]
	fn email_shape() {
		assert!(is_valid_email("a@b.co"));
		assert!(is_valid_email("joe.public@oit.example.com"));
		assert!(is_valid_email("zoë@exämple.org"));
		assert!(!is_valid_email("not-an-email"));
		assert!(!is_valid_email("joe@localhost"));
	}

	#[test]
	fn hyphen_is_literal_in_classes() {
		assert!(is_valid_email("joe-public@oit-example.com"));
		assert!(!is_valid_email("/@example.com"));
		assert!(!is_valid_email("joe@/.com"));
		assert!(is_valid_name("-"));
		assert!(!is_valid_name("/"));
	}

	#[test]
	fn extended_latin_letters() {
		assert!(is_valid_alpha("Ångström"));
		assert!(is_valid_alpha("ß"));
		assert!(is_valid_alpha_numeric("Łukasz"));
		assert!(!is_valid_alpha("1234"));
		assert!(is_valid_alpha_numeric("1234"));
	}

	#[test]
	fn names() {
		assert!(is_valid_name("O'Brien-Smith, Jr."));
		assert!(is_valid_name("---"));
		assert!(!is_valid_name("@@@"));
	}

	#[test]
	fn match_is_not_anchored() {
		assert!(is_valid_alpha_numeric("jpublic)(cn=*"));
		assert!(is_valid_alpha_numeric("(&(objectClass=user)(sAMAccountName=jpublic))"));
		assert!(!is_valid_alpha_numeric("()=*&|"));
	}
}
