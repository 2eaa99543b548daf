//! Regex simplifier (C7, §4.7): purely syntactic, iterated to a fixed
//! point. Ported from the source's `simplify`/`simplify_base_case`/
//! `simplify_parentheses`, but S4 is implemented from the spec's prose
//! ("delete that alternative together with exactly one adjacent +") rather
//! than the source's character-scanning version, which double-counts a `+`
//! shared between two sentinel-bearing alternatives — see DESIGN.md.

/// The empty-language sentinel: a single space.
pub const EMPTY_SENTINEL: &str = " ";

/// Every matching `(`/`)` pair in `s`, as `(start_byte, length)`, in the
/// order their `)` closes. Because of how the scan stack works, a pair
/// that closes before another can never contain it, so this order is
/// innermost-group-first.
fn paren_spans(s: &str) -> Vec<(usize, usize)> {
    let mut stack = Vec::new();
    let mut spans = Vec::new();
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'(' => stack.push(i),
            b')' => {
                if let Some(start) = stack.pop() {
                    spans.push((start, i - start + 1));
                }
            }
            _ => {}
        }
    }
    spans
}

/// Splits `s` on top-level `+` (i.e. `+` not nested inside a paren group).
fn split_top_level_alternatives(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b'+' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Drops every top-level alternative of `alternatives` that carries the
/// empty-language sentinel, re-wrapping the survivors in parens unless
/// they collapse to something it is always safe to leave bare (the
/// sentinel itself, or a single remaining one-character alternative: `(x)`
/// and `x` parse identically regardless of context). Returns `None` if
/// there were fewer than two alternatives to begin with, or none of them
/// carried the sentinel -- i.e. "nothing to do."
///
/// The re-wrapping matters even though the caller may re-strip it later:
/// a surviving multi-alternative or multi-character fragment is routinely
/// substituted bare into a larger concatenation elsewhere in state
/// elimination (§4.6's `R_qs`/`R_sp`), and an un-parenthesized top-level
/// `+` there would silently change what binds to what.
fn collapse_sentinel_alternatives(alternatives: &[&str]) -> Option<String> {
    if alternatives.len() < 2 {
        return None;
    }
    let kept: Vec<&str> = alternatives
        .iter()
        .copied()
        .filter(|alt| !alt.contains(' '))
        .collect();
    if kept.len() == alternatives.len() {
        return None;
    }
    Some(match kept.as_slice() {
        [] => EMPTY_SENTINEL.to_string(),
        [only] if only.chars().count() == 1 => only.to_string(),
        _ => format!("({})", kept.join("+")),
    })
}

/// S4, applied to one innermost group including its surrounding parens
/// (e.g. `"(a+b)"`). Returns the replacement text.
///
/// The single-char case always collapses (parens dropped). A longer group
/// only changes when [`collapse_sentinel_alternatives`] finds something to
/// drop; otherwise the group is returned verbatim (parens and all) --
/// unwrapping it unconditionally would be S3's redundant-parenthesis rule
/// applied without S3's adjacency guard, wrongly turning e.g. `(ab)*` into
/// `ab*`.
fn simplify_base_case(group: &str) -> String {
    let inner = &group[1..group.len() - 1];
    if inner.chars().count() == 1 {
        return if inner == "+" {
            EMPTY_SENTINEL.to_string()
        } else {
            inner.to_string()
        };
    }
    let alternatives = split_top_level_alternatives(inner);
    collapse_sentinel_alternatives(&alternatives).unwrap_or_else(|| group.to_string())
}

/// S4's alternative-collapsing rule, applied directly to the top level of
/// `s` (i.e. as if `s` were the content of an outer group, without the
/// group needing actual enclosing parens). Needed so a sentinel-bearing
/// alternative produced by reducing an inner group -- e.g. `"a+( )"` once
/// `"( )"` has reduced to `" "` -- still gets dropped even though the
/// surviving `"a+ "` is not itself wrapped in parens.
fn collapse_top_level_sentinel_alternatives(s: &str) -> Option<String> {
    let alternatives = split_top_level_alternatives(s);
    collapse_sentinel_alternatives(&alternatives)
}

/// S1 + S2 + S4, iterated to a fixed point (P8). S3 (redundant-parenthesis
/// removal) is deliberately not folded in here: it is a separate pass
/// (`simplify_parentheses`) run once at the very end of §4.5, matching the
/// source's two-pass structure.
pub fn simplify(input: &str) -> String {
    let mut s = input.to_string();
    loop {
        if s.starts_with('+') {
            s.remove(0);
        }
        while let Some(pos) = s.find("( )*") {
            s.replace_range(pos..pos + 4, "");
        }
        while let Some(pos) = s.find("()*") {
            s.replace_range(pos..pos + 3, "");
        }

        let spans = paren_spans(&s);
        let mut changed = false;
        for (start, len) in spans {
            let group = &s[start..start + len];
            let replacement = simplify_base_case(group);
            if replacement != group {
                let replacement = replacement.clone();
                s.replace_range(start..start + len, &replacement);
                changed = true;
                break;
            }
        }
        if !changed {
            if let Some(replacement) = collapse_top_level_sentinel_alternatives(&s) {
                s = replacement;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    s
}

/// S3 / §4.7a: unwrap a group `(Y)` to `Y` unless the char immediately
/// before it is `)` or the char immediately after it is `(` or `*`.
pub fn simplify_parentheses(input: &str) -> String {
    let mut s = input.to_string();
    loop {
        let spans = paren_spans(&s);
        let mut done = true;
        for (start, len) in &spans {
            let (start, len) = (*start, *len);
            let left = if start == 0 {
                None
            } else {
                s.as_bytes().get(start - 1).copied()
            };
            let right = s.as_bytes().get(start + len).copied();
            let blocked = left == Some(b')') || right == Some(b'(') || right == Some(b'*');
            if !blocked {
                let unwrapped = s[start + 1..start + len - 1].to_string();
                s.replace_range(start..start + len, &unwrapped);
                done = false;
                break;
            }
        }
        if done {
            break;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_plus() {
        assert_eq!(simplify("+a"), "a");
    }

    #[test]
    fn removes_starred_empty_concat() {
        assert_eq!(simplify("( )*"), "");
        assert_eq!(simplify("()*"), "");
    }

    #[test]
    fn unwraps_single_symbol_group() {
        assert_eq!(simplify("(a)"), "a");
    }

    #[test]
    fn plus_alone_becomes_sentinel() {
        assert_eq!(simplify("(+)"), EMPTY_SENTINEL);
    }

    #[test]
    fn drops_empty_alternative() {
        assert_eq!(simplify("a+( )"), "a");
    }

    #[test]
    fn multi_char_group_keeps_its_parens_before_a_star() {
        // A bare concatenation has nothing to drop, so the group must stay
        // wrapped: unwrapping here would turn "(ab)*" into "ab*", a
        // different language.
        assert_eq!(simplify("(ab)*"), "(ab)*");
    }

    #[test]
    fn dropping_an_alternative_keeps_the_survivor_wrapped_before_a_star() {
        // Once "( )" (the sentinel alternative) is dropped, "ab" is the
        // sole survivor but is multi-character, so it must stay
        // parenthesized rather than leak "ab*" for "(ab+( ))*".
        assert_eq!(simplify("(ab+( ))*"), "(ab)*");
    }

    #[test]
    fn parenthesis_redundancy_respects_adjacency() {
        assert_eq!(simplify_parentheses("(a)"), "a");
        assert_eq!(simplify_parentheses("(a)*"), "(a)*");
        assert_eq!(simplify_parentheses("(a)(b)"), "(a)(b)");
    }
}
