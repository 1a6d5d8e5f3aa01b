//! Checks on a finished chain.

use wc_core::TerminalRule;

/// Each word starts with the terminal letter of the word before it.
///
/// Empty words break the chain.
pub fn is_linked<S: AsRef<str>>(chain: &[S], rule: &TerminalRule) -> bool {
    chain.windows(2).all(|pair| {
        match (
            rule.end_letter(pair[0].as_ref()),
            rule.start_letter(pair[1].as_ref()),
        ) {
            (Ok(end), Ok(start)) => end == start,
            _ => false,
        }
    })
}

/// Linked, non-empty, and the last word leads back to the first.
pub fn is_closed<S: AsRef<str>>(chain: &[S], rule: &TerminalRule) -> bool {
    let (Some(first), Some(last)) = (chain.first(), chain.last()) else {
        return false;
    };
    let closes = matches!(
        (rule.start_letter(first.as_ref()), rule.end_letter(last.as_ref())),
        (Ok(start), Ok(end)) if start == end
    );
    closes && is_linked(chain, rule)
}
