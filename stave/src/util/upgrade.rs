//! Utilities for upgrading old ID3v2 frame IDs

use std::collections::HashMap;

/// Upgrade an ID3v2.2 key to its ID3v2.3 equivalent
///
/// Decoded frames keep the identifier they arrived with, so this mapping is
/// used for description reuse and for the fallback accessors on
/// [`Id3v2Tag`](crate::Id3v2Tag), not to rewrite identifiers during a parse.
///
/// # Examples
///
/// ```rust
/// use stave::upgrade_v2;
///
/// let old_title = "TT2";
/// let new_title = upgrade_v2(old_title);
///
/// assert_eq!(new_title, Some("TIT2"));
/// ```
pub fn upgrade_v2(key: &str) -> Option<&'static str> {
	v2keys().get(key).copied()
}

/// Upgrade an ID3v2.3 key to its ID3v2.4 successor
///
/// Only the identifiers that were actually renamed between the two revisions
/// appear here; everything else carried over unchanged.
///
/// # Examples
///
/// ```rust
/// use stave::upgrade_v3;
///
/// let old_involved_people_list = "IPLS";
/// let new_involved_people_list = upgrade_v3(old_involved_people_list);
///
/// assert_eq!(new_involved_people_list, Some("TIPL"));
/// ```
pub fn upgrade_v3(key: &str) -> Option<&'static str> {
	v3keys().get(key).copied()
}

macro_rules! gen_upgrades {
    (V2 => [$($($v2_key:literal)|* => $id3v23_from_v2:literal),+]; V3 => [$($($v3_key:literal)|* => $id3v24_from_v3:literal),+]) => {
		use std::sync::OnceLock;

		fn v2keys() -> &'static HashMap<&'static str, &'static str> {
			static INSTANCE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
			INSTANCE.get_or_init(|| {
				let mut map = HashMap::new();
				$(
					$(
						map.insert($v2_key, $id3v23_from_v2);
					)+
				)+
				map
			})
		}

		fn v3keys() -> &'static HashMap<&'static str, &'static str> {
			static INSTANCE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
			INSTANCE.get_or_init(|| {
				let mut map = HashMap::new();
				$(
					$(
						map.insert($v3_key, $id3v24_from_v3);
					)+
				)+
				map
			})
		}
	};
}

gen_upgrades!(
	// ID3v2.2 => ID3v2.3
	//
	// CRM has no later counterpart and is absent on purpose.
	V2 => [
		"BUF" => "RBUF",
		"CNT" => "PCNT",
		"COM" => "COMM",
		"CRA" => "AENC",
		"EQU" => "EQUA",
		"ETC" => "ETCO",
		"GEO" => "GEOB",
		"IPL" => "IPLS",
		"LNK" => "LINK",
		"MCI" => "MCDI",
		"MLL" => "MLLT",
		"PIC" => "APIC",
		"POP" => "POPM",
		"REV" => "RVRB",
		"RVA" => "RVAD",
		"SLT" => "SYLT",
		"STC" => "SYTC",
		"TAL" => "TALB",
		"TBP" => "TBPM",
		"TCM" => "TCOM",
		"TCO" => "TCON",
		"TCR" => "TCOP",
		"TDA" => "TDAT",
		"TDY" => "TDLY",
		"TEN" => "TENC",
		"TFT" => "TFLT",
		"TIM" => "TIME",
		"TKE" => "TKEY",
		"TLA" => "TLAN",
		"TLE" => "TLEN",
		"TMT" => "TMED",
		"TOA" => "TOPE",
		"TOF" => "TOFN",
		"TOL" => "TOLY",
		"TOR" => "TORY",
		"TOT" => "TOAL",
		"TP1" => "TPE1",
		"TP2" => "TPE2",
		"TP3" => "TPE3",
		"TP4" => "TPE4",
		"TPA" => "TPOS",
		"TPB" => "TPUB",
		"TRC" => "TSRC",
		"TRD" => "TRDA",
		"TRK" => "TRCK",
		"TSI" => "TSIZ",
		"TSS" => "TSSE",
		"TT1" => "TIT1",
		"TT2" => "TIT2",
		"TT3" => "TIT3",
		"TXT" => "TEXT",
		"TXX" => "TXXX",
		"TYE" => "TYER",
		"UFI" => "UFID",
		"ULT" => "USLT",
		"WAF" => "WOAF",
		"WAR" => "WOAR",
		"WAS" => "WOAS",
		"WCM" => "WCOM",
		"WCP" => "WCOP",
		"WPB" => "WPUB",
		"WXX" => "WXXX"
	];
	// ID3v2.3 => ID3v2.4
	V3 => [
		"TORY" => "TDOR",
		"TYER" => "TDRC",
		"IPLS" => "TIPL"
	]
);

#[cfg(test)]
mod tests {
	use super::{upgrade_v2, upgrade_v3};

	#[test_log::test]
	fn upgrade_v2_resolves_legacy_names() {
		assert_eq!(upgrade_v2("TT2"), Some("TIT2"));
		assert_eq!(upgrade_v2("PIC"), Some("APIC"));
		assert_eq!(upgrade_v2("COM"), Some("COMM"));

		// Renamed date/time frames land on their ID3v2.3 names, not the
		// ID3v2.4 replacements.
		assert_eq!(upgrade_v2("TYE"), Some("TYER"));
		assert_eq!(upgrade_v2("TDA"), Some("TDAT"));
		assert_eq!(upgrade_v2("TOR"), Some("TORY"));
		assert_eq!(upgrade_v2("EQU"), Some("EQUA"));
		assert_eq!(upgrade_v2("RVA"), Some("RVAD"));
		assert_eq!(upgrade_v2("IPL"), Some("IPLS"));
	}

	#[test_log::test]
	fn upgrade_v2_original_artist() {
		// TOA is "Original artist(s)/performer(s)", distinct from TOT
		// ("Original album/movie/show title").
		assert_eq!(upgrade_v2("TOA"), Some("TOPE"));
		assert_eq!(upgrade_v2("TOT"), Some("TOAL"));
	}

	#[test_log::test]
	fn upgrade_v2_unknown_keys() {
		assert_eq!(upgrade_v2("CRM"), None);
		assert_eq!(upgrade_v2("ZZZ"), None);
		assert_eq!(upgrade_v2("TIT2"), None);
	}

	#[test_log::test]
	fn upgrade_v3_renamed_frames_only() {
		assert_eq!(upgrade_v3("TORY"), Some("TDOR"));
		assert_eq!(upgrade_v3("TYER"), Some("TDRC"));
		assert_eq!(upgrade_v3("IPLS"), Some("TIPL"));
		assert_eq!(upgrade_v3("TIT2"), None);
	}
}
