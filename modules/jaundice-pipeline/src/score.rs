use jaundice_common::ChargedVocabulary;

/// Percentage of tokens found in the charged vocabulary, rounded to two
/// decimal places, plus the total token count. An empty token sequence
/// scores 0.0 rather than dividing by zero.
pub fn jaundice_rate(tokens: &[String], vocabulary: &ChargedVocabulary) -> (f64, usize) {
    let total = tokens.len();
    if total == 0 {
        return (0.0, 0);
    }

    let charged = tokens.iter().filter(|t| vocabulary.contains(t)).count();
    let rate = 100.0 * charged as f64 / total as f64;
    ((rate * 100.0).round() / 100.0, total)
}
