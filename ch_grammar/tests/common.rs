
use ch_fsa::Recognizer;

/// Every word over `alphabet` of length at most `max_len`, shortest first.
pub fn words_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        let next: Vec<String> = layer.iter()
            .flat_map(|word| alphabet.iter().map(move |ch| format!("{}{}", word, ch)))
            .collect();
        result.extend(next.iter().cloned());
        layer = next;
    }
    result
}

pub fn assert_same_language<A, B>(a: &A, b: &B, alphabet: &[char], max_len: usize)
    where A : Recognizer<char>, B : Recognizer<char> {
    for word in words_up_to(alphabet, max_len) {
        assert_eq!(a.accepts(word.chars()), b.accepts(word.chars()),
            "the recognizers disagree on {:?}", word);
    }
}
