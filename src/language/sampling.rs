use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use super::core::SnippetPool;

impl SnippetPool {
    /// Pick `count` distinct snippets of `key` uniformly at random and join them
    /// with single spaces. `count` is capped at the number of snippets available.
    pub fn sample<R: Rng + ?Sized>(&self, key: &str, count: usize, rng: &mut R) -> String {
        let mut picked = self
            .snippets(key)
            .choose_multiple(rng, count)
            .collect::<Vec<&String>>();
        // choose_multiple does not promise a random order
        picked.shuffle(rng);
        picked.into_iter().join(" ")
    }
}
