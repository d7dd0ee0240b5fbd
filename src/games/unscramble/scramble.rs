use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a uniform random permutation of `word`'s characters.
///
/// When the word has at least two distinct characters the result is
/// guaranteed to differ from the input; the shuffle is simply redrawn until
/// it does. Words with no distinct rearrangement ("a", "zz") come back as-is.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    if !can_rearrange(&original) {
        return word.to_string();
    }

    let mut letters = original.clone();
    loop {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }
}

/// True when some permutation of `letters` differs from `letters`.
pub fn can_rearrange(letters: &[char]) -> bool {
    letters.windows(2).any(|pair| pair[0] != pair[1])
}

/// True when `a` and `b` use exactly the same letters.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let mut left: Vec<char> = a.chars().collect();
    let mut right: Vec<char> = b.chars().collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}
