use itertools::Itertools;
use varisat::{Lit, Var};

/// Clauses asserting at most `k` of `vars` are true: for every choice of
/// `k + 1`, at least one is false. Every clause is prefixed with the
/// literals in `guard`, turning the bound into an implication.
///
/// Yields nothing when fewer than `k + 1` vars exist; the bound cannot be
/// exceeded then.
pub(crate) fn at_most_of(vars: &[Var], k: usize, guard: &[Lit]) -> Vec<Vec<Lit>> {
    vars.iter()
        .combinations(k + 1)
        .map(|chosen| guard.iter().copied()
            .chain(chosen.into_iter().map(|v| v.negative()))
            .collect_vec())
        .collect_vec()
}

/// Clauses asserting at least `k` of `vars` are true: every choice of
/// `len - k + 1` contains a true one. Every clause is prefixed with the
/// literals in `guard`, turning the bound into an implication.
pub(crate) fn at_least_of(vars: &[Var], k: usize, guard: &[Lit]) -> Vec<Vec<Lit>> {
    if vars.len() < k {
        // unsatisfiable bound; only the guard can carry the clause
        return vec![guard.to_vec()];
    }

    vars.iter()
        .combinations(vars.len() - k + 1)
        .map(|chosen| guard.iter().copied()
            .chain(chosen.into_iter().map(|v| v.positive()))
            .collect_vec())
        .collect_vec()
}

/// Clauses asserting exactly one of `vars` is true.
pub(crate) fn exactly_one(vars: Vec<Var>) -> Vec<Vec<Lit>> {
    // no two are true; (!A + !B) * (!A + !C) * ...
    let mut clauses = at_most_of(&vars, 1, &[]);
    // at least one var is true; A + B + C + ...
    clauses.push(vars.iter().map(|v| v.positive()).collect_vec());

    clauses
}
