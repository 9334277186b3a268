
use std::collections::BTreeSet;
use ch_fsa::Recognizer;
use ch_grammar::{rnd, ChomskyType, Derivation, DerivationLimits, Grammar, StringGenStrategy};

/// a* b c+
const TAIL: &str = "
S -> a S | b A
A -> c A | c
";

/// a^n b^n c^n for n ≥ 1
const ABC: &str = "
S -> a B C | a S B C
C B -> C Z
C Z -> W Z
W Z -> W C
W C -> B C
a B -> a b
b B -> b b
b C -> b c
c C -> c c
";

#[test]
fn derived_strings_are_accepted() {
    let grammar: Grammar<char> = TAIL.parse().unwrap();
    assert_eq!(grammar.classify(), ChomskyType::Regular);
    let dfa = grammar.to_dfa().unwrap();
    let words = grammar.generate_n(50, &mut rnd::seeded(2020)).unwrap();

    assert_eq!(words.len(), 50);
    for word in &words {
        assert!(word.len() >= 2);
        assert!(word.iter().all(|c| grammar.terminals().contains(c)));
        assert!(dfa.accepts(word.iter().cloned()), "{:?} was derived but rejected",
            word.iter().collect::<String>());
    }
}

#[test]
fn custom_limits_still_derive() {
    let grammar: Grammar<char> = TAIL.parse().unwrap();
    let limits = DerivationLimits::default().with_step_budget(8).with_max_attempts(10_000);
    let derivation = Derivation::with_limits(&grammar, limits);
    assert_eq!(derivation.limits(), &limits);

    let mut rng = rnd::seeded(5);
    for _ in 0..20 {
        let word = derivation.generate(&mut rng).unwrap();
        // Each rewrite emits exactly one terminal
        assert!(word.len() <= 8);
    }
}

#[test]
fn parsed_context_sensitive_grammar_derives() {
    let grammar: Grammar<char> = ABC.parse().unwrap();
    assert_eq!(grammar.classify(), ChomskyType::ContextSensitive);

    let limits = DerivationLimits::default().with_step_budget(200);
    let derivation = Derivation::with_limits(&grammar, limits);
    let mut rng = rnd::seeded(11);
    let mut sizes = BTreeSet::new();
    for word in derivation.generate_n(100, &mut rng).unwrap() {
        let word: String = word.into_iter().collect();
        let n = word.len() / 3;
        assert_eq!(word, format!("{}{}{}", "a".repeat(n), "b".repeat(n), "c".repeat(n)));
        sizes.insert(n);
    }
    assert!(sizes.contains(&1));
    assert!(sizes.iter().any(|n| *n >= 2), "only derived {:?}", sizes);
}
