/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Words per minute, rounded. `None` while no whole second has elapsed.
pub fn words_per_minute(words: usize, elapsed_secs: u64) -> Option<u32> {
    match elapsed_secs {
        0 => None,
        secs => Some((words as f64 / (secs as f64 / 60.0)).round() as u32),
    }
}

/// Percentage of target positions matched by the input at the same index.
///
/// Rounded to the nearest integer, except that anything short of a perfect
/// match never reports 100.
pub fn accuracy(input: &[char], target: &[char]) -> u32 {
    if target.is_empty() {
        return 0;
    }

    let correct = input
        .iter()
        .zip(target.iter())
        .filter(|(typed, expected)| typed == expected)
        .count();

    if correct == target.len() {
        return 100;
    }

    let pct = (correct as f64 / target.len() as f64 * 100.0).round() as u32;
    pct.min(99)
}
