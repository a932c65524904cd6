use crate::constants::DECLARATION_RE;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// A fixed-type variable declaration such as `int count = 0;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Primitive type keyword (`int`, `float`, `double`, `char`, `bool`).
    pub type_keyword: String,
    /// Declared identifier.
    pub name: String,
}

/// Finds every fixed-type declaration in `code`, in source order.
pub fn find_declarations(code: &str) -> Vec<Declaration> {
    DECLARATION_RE()
        .captures_iter(code)
        .map(|caps| Declaration {
            type_keyword: caps[1].to_owned(),
            name: caps[2].to_owned(),
        })
        .collect()
}

/// Reports declared names with no occurrence left once their assignments
/// (`name = ...;`) are removed from the text.
///
/// A declaration without an initializer is never removed, so it always
/// counts as a use of its own name. Names keep declaration order and are
/// reported once per declaration.
pub fn detect_unused_variables(code: &str) -> Vec<String> {
    let mut verdicts: FxHashMap<String, bool> = FxHashMap::default();
    let mut unused = Vec::new();

    for decl in find_declarations(code) {
        let is_unused = match verdicts.get(&decl.name) {
            Some(&cached) => cached,
            None => {
                let verdict = is_unused_name(code, &decl.name);
                verdicts.insert(decl.name.clone(), verdict);
                verdict
            }
        };
        if is_unused {
            unused.push(decl.name);
        }
    }

    unused
}

fn is_unused_name(code: &str, name: &str) -> bool {
    let escaped = regex::escape(name);
    let (Ok(assignment), Ok(word)) = (
        Regex::new(&format!(r"\b{escaped}\b\s*=.*?;")),
        Regex::new(&format!(r"\b{escaped}\b")),
    ) else {
        return false;
    };
    let remaining = assignment.replace_all(code, "");
    !word.is_match(&remaining)
}
