use crate::constants::{HEADER_USAGE, INCLUDE_RE};
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

fn header_usage() -> &'static FxHashMap<&'static str, Regex> {
    static MAP: OnceLock<FxHashMap<&'static str, Regex>> = OnceLock::new();
    #[allow(clippy::expect_used)]
    MAP.get_or_init(|| {
        HEADER_USAGE
            .iter()
            .map(|(header, symbols)| {
                let re = Regex::new(symbols).expect("Invalid header usage regex pattern");
                (*header, re)
            })
            .collect()
    })
}

/// Every `#include <...>` target in `code`, in source order.
pub fn include_targets(code: &str) -> Vec<String> {
    INCLUDE_RE()
        .captures_iter(code)
        .map(|caps| caps[1].to_owned())
        .collect()
}

/// Reports included headers that look unused.
///
/// A header outside the known usage table is always reported. A known header
/// is reported when none of its API symbols appear anywhere in `code`.
pub fn detect_unused_includes(code: &str) -> Vec<String> {
    let usage = header_usage();
    include_targets(code)
        .into_iter()
        .filter(|header| {
            let key = header.replacen(".h", "", 1);
            usage.get(key.as_str()).map_or(true, |re| !re.is_match(code))
        })
        .collect()
}
