use zerosum::*;

fn matrix(s: &str) -> Matrix {
    Matrix::try_from(s).unwrap()
}

fn close(a: Utility, b: Utility) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn iteration_zero_is_the_dual_program() {
    let solver = Solver::from(matrix("2 3 1; 4 1 3"));
    let tableau = solver.current();
    assert_eq!(tableau.cells().len(), 3);
    assert!(tableau.cells().iter().all(|row| row.len() == 6));
    assert_eq!(tableau.row(0), &[2., 3., 1., 1., 0., 1.]);
    assert_eq!(tableau.row(1), &[4., 1., 3., 0., 1., 1.]);
    assert_eq!(tableau.objective(), &[-1., -1., -1., 0., 0., 0.]);
    assert_eq!(solver.basis(), &[Variable::S(0), Variable::S(1)]);
    assert_eq!(solver.info(), (0, 0));
}

#[test]
fn navigation_is_bounded_before_solving() {
    let mut solver = Solver::from(Matrix::from(Preset::Mixed));
    assert!(!solver.advance());
    assert!(!solver.retreat());
    assert_eq!(solver.info(), (0, 0));
}

#[test]
fn navigation_replays_every_pivot() {
    let mut solver = Solver::from(Matrix::from(Preset::Roshambo));
    solver.solve();
    assert_eq!(solver.info(), (3, 3));
    let forward = solver
        .history()
        .steps()
        .iter()
        .map(|step| step.tableau().clone())
        .collect::<Vec<_>>();
    while solver.retreat() {}
    for expected in forward.iter() {
        assert_eq!(solver.current(), expected);
        solver.advance();
    }
    assert!(!solver.advance());
}

#[test]
fn solving_twice_changes_nothing() {
    let mut solver = Solver::from(Matrix::from(Preset::Coverage));
    let first = solver.solve().clone();
    let history = solver.history().clone();
    let second = solver.solve().clone();
    assert_eq!(first, second);
    assert_eq!(&history, solver.history());
}

#[test]
fn presets_solve_to_known_values() {
    let cases = [
        (Preset::Saddle, 2., vec![1., 0.], vec![1., 0.]),
        (Preset::Skewed, 2., vec![0.667, 0.333], vec![0.5, 0.5]),
        (Preset::Inspection, 5. / 3., vec![0.667, 0.333], vec![0.333, 0.667]),
        (Preset::Mixed, 2.5, vec![0.25, 0.75], vec![0.5, 0.5]),
        (Preset::Roshambo, 1., vec![0.333; 3], vec![0.333; 3]),
        (Preset::Coverage, 2., vec![0.5, 0.5], vec![0., 0.5, 0.5]),
        (Preset::Dominated, 3., vec![0., 0., 1.], vec![0.5, 0.5]),
    ];
    for (preset, value, p, q) in cases {
        let mut solver = Solver::from(Matrix::from(preset));
        let solution = solver.solve();
        assert!(solution.outcome().is_optimal(), "{}", preset);
        assert!(close(solution.value(), value), "{} {}", preset, solution.value());
        assert_eq!(solution.row().weights(), p.as_slice(), "{}", preset);
        assert_eq!(solution.col().weights(), q.as_slice(), "{}", preset);
        assert!(Verdict::from(&*solution).is_valid(), "{}", preset);
    }
}

#[test]
fn strategies_match_dimensions() {
    for _ in 0..32 {
        let matrix = Matrix::random();
        let (m, n) = matrix.dimensions();
        let mut solver = Solver::from(matrix);
        let solution = solver.solve();
        assert_eq!(solution.row().len(), m);
        assert_eq!(solution.col().len(), n);
    }
}

#[test]
fn value_lies_within_payoff_range() {
    for _ in 0..32 {
        let matrix = Matrix::random();
        let lo = matrix.payoffs().iter().flatten().copied().fold(f64::MAX, f64::min);
        let hi = matrix.payoffs().iter().flatten().copied().fold(f64::MIN, f64::max);
        let mut solver = Solver::from(matrix.clone());
        let solution = solver.solve();
        if solution.outcome().is_optimal() && lo > 0. {
            assert!(solution.value() >= lo - 1e-9, "{}", matrix);
            assert!(solution.value() <= hi + 1e-9, "{}", matrix);
        }
    }
}

#[test]
fn non_positive_games_fall_back() {
    for s in ["-1 -2; -3 -1", "0 0; 0 0"] {
        let mut solver = Solver::from(matrix(s));
        let solution = solver.solve().clone();
        assert!(solution.outcome().is_unbounded());
        assert_eq!(solution.value(), FALLBACK_VALUE);
        assert!(solution.row().weights().iter().all(|p| *p == 0.));
        assert!(solution.col().weights().iter().all(|q| *q == 0.));
        assert!(!Verdict::from(&solution).is_valid());
        assert_eq!(solver.info(), (0, 0));
    }
}

#[test]
fn capped_solve_is_reported_and_flagged() {
    let mut solver = Solver::from(matrix(
        "3 2 1 0 1 0 0 3; 3 2 0 3 1 1 0 3; 3 0 1 2 2 1 0 2; 3 3 1 3 2 2 1 2; \
         1 1 0 0 0 0 0 2; 1 1 0 1 1 3 0 0; 3 2 0 2 3 2 3 3",
    ));
    let solution = solver.solve().clone();
    assert!(solution.outcome().is_capped());
    assert_eq!(solver.info(), (SIMPLEX_ITERATIONS, SIMPLEX_ITERATIONS));
    let verdict = Verdict::from(&solution);
    assert!(!verdict.is_valid());
    assert!(verdict
        .violations()
        .iter()
        .any(|v| matches!(v, Violation::Negative { player: Player::A, .. })));
}

#[test]
fn reinitializing_starts_over() {
    let mut solver = Solver::from(Matrix::from(Preset::Skewed));
    solver.solve();
    solver.initialize(Matrix::from(Preset::Dominated));
    assert_eq!(solver.info(), (0, 0));
    assert!(solver.solution().is_none());
    assert_eq!(solver.basis().len(), 3);
    assert!(close(solver.solve().value(), 3.));
}

#[test]
fn session_survives_a_restart() {
    let ref path = std::env::temp_dir()
        .join(format!("zerosum-engine-{}", std::process::id()))
        .join("session.json");
    let matrix = Matrix::from(Preset::Coverage);
    Session::from(&matrix).save(path).unwrap();
    assert_eq!(Session::load(path).unwrap(), Some(matrix));
    std::fs::remove_file(path).ok();
}

#[test]
fn reports_render_results() {
    let mut solver = Solver::from(Matrix::from(Preset::Mixed));
    let text = Report::from(&*solver.solve()).to_string();
    assert!(text.contains("2.500"));
    assert!(text.contains("(0.250, 0.750)"));
    assert!(text.contains("(0.500, 0.500)"));
    let frame = Frame::from(&solver).to_string();
    assert!(frame.contains("iteration 2 of 2"));
}
