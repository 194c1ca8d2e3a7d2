use crate::constants::TITLE_WORD_PERIOD_MS;

pub const DREAM_WORDS: [&str; 6] = ["Relax", "Breathe", "Peace", "Unwind", "Stillness", "Drift"];

/// Word shown after `elapsed_ms` of the session.
pub fn word_index_at(elapsed_ms: f64) -> usize {
    if !(elapsed_ms > 0.0) {
        return 0;
    }
    (elapsed_ms / TITLE_WORD_PERIOD_MS) as usize % DREAM_WORDS.len()
}

pub fn word_at(elapsed_ms: f64) -> &'static str {
    DREAM_WORDS[word_index_at(elapsed_ms)]
}
