//! Keyword cloud extracted from film descriptions.

use super::tally::Tally;
use crate::catalog::Film;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashSet;

/// Tokens need more characters than this to count.
const MIN_KEYWORD_CHARS: usize = 3;

lazy_static! {
    static ref STOP_WORDS: HashSet<&'static str> = [
        // English function words
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
        "need", "must", "it", "its", "he", "she", "they", "them", "their", "his", "her", "him",
        "we", "our", "you", "your", "i", "my", "me", "us", "this", "that", "these", "those",
        "who", "which", "what", "where", "when", "how", "why", "if", "then", "than", "so", "as",
        "not", "no", "nor", "up", "out", "about", "into", "over", "after", "before", "between",
        "under", "again", "further", "once", "here", "there", "all", "each", "every", "both",
        "few", "more", "most", "other", "some", "such", "only", "own", "same", "too", "very",
        "just", "also", "now", "new", "one", "two", "three", "while", "through", "during",
        "against", "himself", "herself", "themselves", "whose", "whom", "however", "yet",
        "upon", "among", "across", "along", "within", "without", "off", "around",
        // Synopsis boilerplate
        "find", "finds", "world", "story", "film", "movie", "get", "gets", "set", "sets",
        "back", "way", "take", "takes", "make", "makes", "goes", "come", "becomes", "begins",
        "turns", "tells", "shows", "following", "features", "includes", "including",
        "involved", "living", "named", "called", "starts", "starting", "meets", "meeting",
        "became", "taken", "made", "seen", "gives", "given", "known", "years", "time", "days",
        "everything", "something", "anything", "another", "others", "discovers", "soon",
        "together", "first", "last", "home", "place", "someone", "everyone", "looking",
        // French, Italian and Portuguese articles and particles
        "de", "le", "la", "les", "un", "une", "des", "et", "en", "du", "que", "qui", "dans",
        "par", "pour", "sur", "au", "aux", "se", "ce", "son", "sa", "ses", "il", "elle", "ils",
        "elles", "est", "sont", "ne", "pas", "di", "da", "del", "della",
    ]
    .into_iter()
    .collect();
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeywordItem {
    pub word: String,
    pub count: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || "áàâãéèêíïóôõúüç'-".contains(c)
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Keywords of one description, in text order, duplicates kept.
pub fn tokenize(description: &str) -> Vec<String> {
    description
        .to_lowercase()
        .split(|c: char| !is_word_char(c))
        .map(|token| token.trim_matches(|c| c == '\'' || c == '-'))
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS && !is_stop_word(token))
        .map(str::to_owned)
        .collect()
}

pub fn extract_keywords(films: &[Film], limit: usize) -> Vec<KeywordItem> {
    let mut tally = Tally::<usize>::new();
    for film in films.iter().filter(|f| !f.description.is_empty()) {
        for word in tokenize(&film.description) {
            *tally.entry(&word) += 1;
        }
    }
    let mut ranked = tally.into_ranked();
    ranked.truncate(limit);
    ranked
        .into_iter()
        .map(|(word, count)| KeywordItem { word, count })
        .collect()
}
