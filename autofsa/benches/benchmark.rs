use autofsa::automaton::{Automaton, Kind};
use autofsa::{convert, regex};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// An NFA over a binary alphabet whose `n`-th-from-the-end-symbol-is-`a`
/// language forces the subset construction through close to `2^n`
/// macro-states, the classic worst case for this conversion.
fn nth_from_end_nfa(n: usize) -> Automaton {
    let mut nfa = Automaton::new(Kind::Nfa);
    for i in 0..=n {
        nfa.add_state(&format!("q{i}")).unwrap();
    }
    nfa.add_symbol(b'a').unwrap();
    nfa.add_symbol(b'b').unwrap();
    nfa.set_start_state("q0").unwrap();
    nfa.add_accept_state(&format!("q{n}")).unwrap();
    nfa.add_transition("q0", b'a', "q0").unwrap();
    nfa.add_transition("q0", b'b', "q0").unwrap();
    for i in 0..n {
        nfa.add_transition(&format!("q{i}"), b'a', &format!("q{}", i + 1))
            .unwrap();
    }
    nfa
}

pub fn subset_construction(c: &mut Criterion) {
    let nfa = nth_from_end_nfa(12);
    c.bench_function("subset construction (2^12 worst case)", |b| {
        b.iter(|| convert::to_dfa(black_box(&nfa)).unwrap())
    });
}

pub fn regex_synthesis(c: &mut Criterion) {
    let nfa = nth_from_end_nfa(8);
    let dfa = convert::to_dfa(&nfa).unwrap();
    c.bench_function("state elimination (2^8 state DFA)", |b| {
        b.iter(|| regex::to_regex(black_box(&dfa)).unwrap())
    });
}

criterion_group!(benches, subset_construction, regex_synthesis);
criterion_main!(benches);
