//! Fixed stopword set for word counting, English and Italian.

use std::{collections::HashSet, sync::OnceLock};

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "also", "am", "an", "and",
    "any", "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "couldn", "d", "did", "didn", "do", "does",
    "doesn", "doing", "don", "down", "during", "each", "either", "else", "even", "ever", "every",
    "few", "for", "from", "further", "get", "got", "had", "hadn", "has", "hasn", "have", "haven",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "however",
    "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m", "ma", "made",
    "make", "many", "may", "me", "might", "mightn", "more", "most", "much", "must", "mustn", "my",
    "myself", "needn", "neither", "never", "no", "nor", "not", "now", "o", "of", "off", "often",
    "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "re",
    "s", "said", "same", "say", "shan", "she", "should", "shouldn", "since", "so", "some", "still",
    "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "though", "through", "to", "too", "under", "until", "up",
    "us", "ve", "very", "was", "wasn", "we", "well", "were", "weren", "what", "when", "where",
    "whether", "which", "while", "who", "whom", "whose", "why", "will", "with", "won", "would",
    "wouldn", "y", "yet", "you", "your", "yours", "yourself", "yourselves",
];

const ITALIAN: &[&str] = &[
    "a", "abbia", "abbiamo", "abbiano", "ad", "agl", "agli", "ai", "al", "alla", "alle", "allo",
    "anche", "avemmo", "avendo", "avere", "avesse", "avete", "aveva", "avevano", "avevo", "avrà",
    "avrebbe", "avuto", "c", "che", "chi", "ci", "coi", "col", "come", "con", "contro", "cui",
    "da", "dagl", "dagli", "dai", "dal", "dall", "dalla", "dalle", "dallo", "degl", "degli", "dei",
    "del", "dell", "della", "delle", "dello", "di", "dove", "e", "è", "ebbe", "ed", "era",
    "erano", "ero", "essere", "fa", "fare", "fatto", "fino", "fu", "furono", "gli", "già", "ha",
    "hai", "hanno", "ho", "i", "il", "in", "io", "l", "la", "le", "lei", "li", "lo", "loro", "lui",
    "ma", "mi", "mia", "mie", "miei", "mio", "molto", "ne", "negli", "nei", "nel", "nell",
    "nella", "nelle", "nello", "noi", "non", "nostra", "nostre", "nostri", "nostro", "o", "ogni",
    "per", "perché", "però", "più", "poco", "poi", "quale", "quando", "quanto", "quella",
    "quelle", "quelli", "quello", "questa", "queste", "questi", "questo", "qui", "se", "sei",
    "senza", "si", "sia", "siamo", "siete", "solo", "sono", "sopra", "sotto", "sta", "stata",
    "stato", "sto", "su", "sua", "sue", "sugl", "sugli", "sui", "sul", "sull", "sulla", "sulle",
    "sullo", "suo", "suoi", "te", "ti", "tra", "tu", "tua", "tue", "tuo", "tuoi", "tutti",
    "tutto", "un", "una", "uno", "vi", "voi", "vostra", "vostro",
];

fn stopwords() -> &'static HashSet<&'static str> {
    static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOPWORDS.get_or_init(|| ENGLISH.iter().chain(ITALIAN).copied().collect())
}

/// Whether a lowercase token is a stopword.
pub fn is_stopword(word: &str) -> bool {
    stopwords().contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_both_languages() {
        assert!(is_stopword("the"));
        assert!(is_stopword("della"));
        assert!(is_stopword("perché"));
        assert!(!is_stopword("refund"));
        assert!(!is_stopword("bolletta"));
    }
}
