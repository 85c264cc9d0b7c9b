#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::Path;

    use itertools::Itertools;
    use varisat::Var;

    use crate::builder::{BuildError, GridBuilder};
    use crate::grid::Grid;
    use crate::index::VarIndex;
    use crate::location::Location;
    use crate::logic;
    use crate::parse::{self, Format, ParseError};
    use crate::render;
    use crate::solver::GridSolver;

    fn same_label_degree(grid: &Grid, location: Location) -> usize {
        let label = grid.label_at(location).unwrap();
        grid.neighbors(location).filter(|n| grid.label_at(*n) == Some(label)).count()
    }

    /// Assert everything any satisfying model guarantees: every cell
    /// labeled, termini unchanged with exactly one same-labeled neighbor,
    /// free cells with exactly two.
    fn assert_solved_properties(original: &Grid, solved: &Grid) {
        assert_eq!(solved.side(), original.side());

        let termini: HashSet<_> = original.termini().collect();
        for (location, label) in &termini {
            assert_eq!(solved.label_at(*location), Some(*label));
        }

        for location in solved.locations() {
            assert!(solved.label_at(location).is_some(), "cell at {:?} left unresolved", location);

            let expected = match original.label_at(location) {
                Some(_) => 1,
                None => 2,
            };
            assert_eq!(
                same_label_degree(solved, location), expected,
                "wrong same-label degree at {:?}", location,
            );
        }
    }

    /// Assert each label's cells form one connected, non-branching chain
    /// between its two termini.
    fn assert_chains(original: &Grid, solved: &Grid) {
        for label in 1..=solved.num_labels() {
            let members = solved.locations()
                .filter(|l| solved.label_at(*l) == Some(label))
                .count();
            let termini = original.termini()
                .filter(|(_, lab)| *lab == label)
                .map(|(l, _)| l)
                .collect_vec();
            assert_eq!(termini.len(), 2, "label {} should have two termini", label);

            let mut visited = HashSet::from([termini[0]]);
            let mut at = termini[0];
            while let Some(next) = solved.neighbors(at)
                .find(|n| solved.label_at(*n) == Some(label) && !visited.contains(n)) {
                visited.insert(next);
                at = next;
            }

            assert_eq!(at, termini[1], "walk for label {} should end at its other terminus", label);
            assert_eq!(visited.len(), members, "label {} should form a single chain", label);
        }
    }

    #[test]
    fn variable_index_bijection() {
        let index = VarIndex::new(4, 3);

        let mut seen = HashSet::new();
        for row in 0..4 {
            for col in 0..4 {
                for label in 1..=3 {
                    let var = index.var(Location(row, col), label);
                    assert!(seen.insert(var.index()), "duplicate variable {:?}", var);
                    assert_eq!(index.lookup(var), (Location(row, col), label));
                }
            }
        }

        // indices are dense over 0..N²L, i.e. DIMACS ids 1..=N²L
        assert_eq!(seen.len(), index.len());
        assert_eq!(seen.into_iter().sorted().collect_vec(), (0..index.len()).collect_vec());
    }

    #[test]
    fn neighbor_order_and_count() {
        let grid = GridBuilder::with_side(3).build().unwrap();

        // up, right, down, left, minus whatever is out of bounds
        assert_eq!(grid.neighbors(Location(0, 0)).collect_vec(), vec![Location(0, 1), Location(1, 0)]);
        assert_eq!(
            grid.neighbors(Location(1, 0)).collect_vec(),
            vec![Location(0, 0), Location(1, 1), Location(2, 0)],
        );
        assert_eq!(
            grid.neighbors(Location(1, 1)).collect_vec(),
            vec![Location(0, 1), Location(1, 2), Location(2, 1), Location(1, 0)],
        );
    }

    #[test]
    fn domain_clauses_exactly_one_per_cell() {
        let grid = parse::parse("12\n21", Format::Chars).unwrap();
        let clauses = GridSolver::from(&grid).cell_domain();

        // per cell: C(L, 2) binary exclusions plus one at-least-one clause
        assert_eq!(clauses.len(), 4 * 2);

        let (at_least, at_most): (Vec<_>, Vec<_>) = clauses.into_iter()
            .partition(|c| c.iter().all(|lit| lit.is_positive()));
        assert_eq!(at_least.len(), 4);
        assert!(at_least.iter().all(|c| c.len() == 2));
        assert_eq!(at_most.len(), 4);
        assert!(at_most.iter().all(|c| c.len() == 2 && c.iter().all(|lit| lit.is_negative())));
    }

    #[test]
    fn terminus_clauses() {
        let grid = parse::parse("1..\n...\n..1", Format::Chars).unwrap();
        let solver = GridSolver::from(&grid);

        let fixing = solver.terminus_fixing();
        assert_eq!(
            fixing,
            vec![
                vec![VarIndex::new(3, 1).var(Location(0, 0), 1).positive()],
                vec![VarIndex::new(3, 1).var(Location(2, 2), 1).positive()],
            ],
        );

        // each corner terminus has 2 neighbors: one exclusion pair plus one
        // at-least-one clause
        let adjacency = solver.terminus_adjacency();
        assert_eq!(adjacency.len(), 2 * 2);
    }

    #[test]
    fn adjacency_bounds_by_degree() {
        let vars = (0..4).map(Var::from_index).collect_vec();
        let guard = [Var::from_index(9).negative()];

        // at-least-two: degree 2 -> 2 unit implications, degree 3 -> 3
        // pair clauses, degree 4 -> 4 triple clauses
        assert_eq!(logic::at_least_of(&vars[..2], 2, &guard).len(), 2);
        assert_eq!(logic::at_least_of(&vars[..3], 2, &guard).len(), 3);
        let triples = logic::at_least_of(&vars, 2, &guard);
        assert_eq!(triples.len(), 4);
        // clause width counts the guard literal
        assert!(triples.iter().all(|c| c.len() == 4 && c[0] == guard[0]));

        // at-most-two: C(degree, 3) clauses, none below degree 3
        assert!(logic::at_most_of(&vars[..2], 2, &guard).is_empty());
        assert_eq!(logic::at_most_of(&vars[..3], 2, &guard).len(), 1);
        assert_eq!(logic::at_most_of(&vars, 2, &guard).len(), 4);
    }

    #[test]
    fn free_cell_clause_counts() {
        // free cells of degree 2 (corners), 3 (edges), and 4 (center)
        let grid = parse::parse("123\n...\n...", Format::Chars).unwrap();
        let clauses = GridSolver::from(&grid).free_cell_adjacency();

        // per label: corners contribute 0 + 2 clauses each, edges 1 + 3,
        // the center 4 + 4; the top row is all termini
        let per_label = 2 * (0 + 2) + 3 * (1 + 3) + (4 + 4);
        assert_eq!(clauses.len(), 3 * per_label);
    }

    #[test]
    fn fully_terminal_grid_solves_to_itself() {
        // adjacent pairs of termini; satisfiable with no free cells
        let grid = parse::parse("11\n22", Format::Chars).unwrap();
        let solved = grid.clone().solve().unwrap().expect("satisfiable");

        assert_eq!(solved, grid);
    }

    #[test]
    fn single_cell_terminus_has_no_solution() {
        // a lone terminus has no neighbor to leave by
        let grid = parse::parse("1", Format::Chars).unwrap();
        assert!(grid.solve().unwrap().is_none());
    }

    #[test]
    fn crossing_terminals_have_no_solution() {
        // both pairs sit on diagonals; their paths would have to cross
        let grid = parse::parse("12\n21", Format::Chars).unwrap();
        assert!(grid.solve().unwrap().is_none());
    }

    #[test]
    fn solve_most_basic() {
        // flow free classic pack level 1
        let grid = parse::parse("1.2.4\n..3.5\n.....\n.2.4.\n.135.", Format::Chars).unwrap();
        let solved = grid.clone().solve().unwrap().expect("satisfiable");

        assert_solved_properties(&grid, &solved);
        assert_chains(&grid, &solved);
        assert_eq!(format!("{}", solved), "12244
12345
12345
12345
11355
");
    }

    #[test]
    fn solve_large_simple_square() {
        // flow free extreme pack 2 12x12 level 13
        let grid = parse::parse("............
............
..4....6....
.......4....
.....521....
............
......3.....
............
..76........
............
.....7......
3...12.5....", Format::Chars).unwrap();
        let solved = grid.clone().solve().unwrap().expect("satisfiable");

        assert_solved_properties(&grid, &solved);
    }

    #[test]
    fn display_matches_input_format() {
        let text = "1.2.4\n..3.5\n.....\n.2.4.\n.135.\n";
        let grid = parse::parse(text, Format::Chars).unwrap();
        assert_eq!(format!("{}", grid), text);

        // double-digit labels switch the output to delimited form
        let csv = "10,.\n.,10\n";
        let grid = parse::parse(csv, Format::Delimited).unwrap();
        assert_eq!(grid.num_labels(), 10);
        assert_eq!(format!("{}", grid), csv);
    }

    #[test]
    fn format_chosen_by_extension() {
        assert_eq!(Format::from_extension(Path::new("puzzle1.csv")), Format::Delimited);
        assert_eq!(Format::from_extension(Path::new("puzzle1.txt")), Format::Chars);
        assert_eq!(Format::from_extension(Path::new("puzzle1")), Format::Chars);
    }

    #[test]
    fn colored_rendering() {
        let grid = parse::parse("11\n22", Format::Chars).unwrap();
        assert_eq!(
            render::colored(&grid),
            "\x1b[41m  \x1b[0m\x1b[41m  \x1b[0m\n\x1b[42m  \x1b[0m\x1b[42m  \x1b[0m\n",
        );

        // free cells stay uncolored
        let grid = parse::parse("1.\n.1", Format::Chars).unwrap();
        assert!(render::colored(&grid).starts_with("\x1b[41m  \x1b[0m  \n"));

        // the color table wraps past 16 labels
        let grid = parse::parse("16,16\n1,1", Format::Delimited).unwrap();
        assert!(render::colored(&grid).starts_with("\x1b[40m  \x1b[0m"));
        let key = render::color_key(&grid);
        assert!(key.contains("\x1b[41m 1 \x1b[0m"));
        assert!(key.contains("\x1b[40m 16 \x1b[0m"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse::parse("", Format::Chars), Err(ParseError::Empty));
        assert_eq!(parse::parse("\n \n", Format::Chars), Err(ParseError::Empty));
        assert_eq!(
            parse::parse("12\n2", Format::Chars),
            Err(ParseError::NotSquare { rows: 2, row: 1, cols: 1 }),
        );
        assert_eq!(
            parse::parse("1x\n21", Format::Chars),
            Err(ParseError::InvalidToken { token: "x".into(), row: 0, col: 1 }),
        );
        assert_eq!(
            parse::parse("10\n01", Format::Chars),
            Err(ParseError::ZeroLabel { row: 0, col: 1 }),
        );
    }

    #[test]
    fn builder_rejects_bad_termini() {
        assert_eq!(
            GridBuilder::with_side(3).terminus(Location(3, 0), 1).build(),
            Err(BuildError::TerminusOutOfBounds),
        );
        assert_eq!(
            GridBuilder::with_side(3).terminus(Location(0, 0), 0).build(),
            Err(BuildError::ZeroLabel),
        );
    }
}
