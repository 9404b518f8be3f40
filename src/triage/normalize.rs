use regex::NoExpand;

use super::lexicon::Lexicon;

/// Rewrite clinical jargon and acronyms as plain language.
///
/// Replacements apply sequentially in lexicon order (jargon, then
/// acronyms), each as a whole-word/phrase, case-insensitive match. Text
/// containing no lexicon phrases comes back unchanged. Pure function.
pub fn simplify_jargon(lexicon: &Lexicon, text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, plain) in lexicon.replacements() {
        out = pattern.replace_all(&out, NoExpand(plain)).into_owned();
    }
    out
}
