use icorr::history::PointHistory;
use icorr::mapper::CoordinateMapper;
use icorr::point::Point;
use icorr::query::pca_snapshot;
use icorr::query::regression_snapshot;
use icorr::stats::Moments;
use proptest::collection::vec;
use proptest::prelude::*;

const EXTENT: f64 = 100.0;

fn point() -> impl Strategy<Value = Point> {
    (0..=10000i32, 0..=10000i32).prop_map(|(u, v)| Point::new(u as f64 / 100.0, v as f64 / 100.0))
}

#[derive(Clone, Debug)]
enum Op {
    Place(Point),
    Undo,
    Redo,
    UndoAll,
    RedoAll,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => point().prop_map(Op::Place),
        2 => Just(Op::Undo),
        2 => Just(Op::Redo),
        1 => Just(Op::UndoAll),
        1 => Just(Op::RedoAll),
    ]
}

fn apply(history: &mut PointHistory, op: &Op) {
    let _ = match *op {
        Op::Place(p) => history.place(p),
        Op::Undo => history.undo(),
        Op::Redo => history.redo(),
        Op::UndoAll => history.undo_all(),
        Op::RedoAll => history.redo_all(),
    };
}

proptest! {
    #[test]
    fn placing_appends_in_order(points in vec(point(), 0..40)) {
        let mut history = PointHistory::new();
        for &p in &points {
            let _ = history.place(p);
        }
        prop_assert_eq!(history.active_points(), &points[..]);
    }

    #[test]
    fn place_always_clears_redo(ops in vec(op(), 0..40), p in point()) {
        let mut history = PointHistory::new();
        for op in &ops {
            apply(&mut history, op);
        }
        let _ = history.place(p);
        prop_assert!(!history.can_redo());
        prop_assert_eq!(history.active_points().last(), Some(&p));
    }

    #[test]
    fn undo_then_redo_restores(ops in vec(op(), 0..40)) {
        let mut history = PointHistory::new();
        for op in &ops {
            apply(&mut history, op);
        }
        let before = history.active_points().to_vec();
        if history.undo().changed() {
            prop_assert!(history.redo().changed());
        }
        prop_assert_eq!(history.active_points(), &before[..]);
    }

    #[test]
    fn undo_all_then_redo_all_restores(ops in vec(op(), 0..40)) {
        let mut history = PointHistory::new();
        for op in &ops {
            apply(&mut history, op);
        }
        let before = history.active_points().to_vec();
        let _ = history.undo_all();
        prop_assert!(!history.can_undo());
        let _ = history.redo_all();
        prop_assert!(!history.can_redo());
        prop_assert_eq!(history.active_points(), &before[..]);
    }

    #[test]
    fn correlation_undefined_for_constant_axis(u in 0..=10000i32, vs in vec(0..=10000i32, 0..20)) {
        let u = u as f64 / 100.0;
        let column: Vec<Point> = vs.iter().map(|&v| Point::new(u, v as f64 / 100.0)).collect();
        prop_assert_eq!(regression_snapshot(&column).r, None);
        let row: Vec<Point> = vs.iter().map(|&v| Point::new(v as f64 / 100.0, u)).collect();
        prop_assert_eq!(regression_snapshot(&row).r, None);
    }

    #[test]
    fn correlation_is_bounded(points in vec(point(), 2..30)) {
        if let Some(r) = regression_snapshot(&points).r {
            prop_assert!(r.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn regression_line_passes_through_mean(points in vec(point(), 2..30)) {
        let moments = Moments::of(&points);
        prop_assume!(moments.var_u > 0.0);
        let regression = regression_snapshot(&points);
        let (a, b) = (regression.a.unwrap(), regression.b.unwrap());
        let (mean_u, mean_v) = (moments.mean.x, moments.mean.y);
        let tolerance = 1e-9 * (1.0 + (a * mean_u).abs() + mean_v.abs());
        prop_assert!((a * mean_u + b - mean_v).abs() <= tolerance);
    }

    #[test]
    fn principal_axes_are_ordered_and_orthogonal(points in vec(point(), 2..30)) {
        let [major, minor] = pca_snapshot(&points).axes;
        prop_assert!(major.norm() + 1e-9 >= minor.norm());
        prop_assert!(major.inner(minor).abs() <= 1e-6 * (1.0 + major.norm() * minor.norm()));
    }

    #[test]
    fn principal_axis_length_is_standard_deviation(points in vec(point(), 1..30)) {
        let eigen = Moments::of(&points).covariance_matrix().eigen();
        let axes = pca_snapshot(&points).axes;
        for (pair, axis) in eigen.iter().zip(axes.iter()) {
            let sd = pair.value.max(0.0).sqrt();
            prop_assert!((axis.norm() - sd).abs() <= 1e-6 * (1.0 + sd));
        }
    }

    #[test]
    fn quarter_turn_symmetric_points_have_round_spread(
        center in (2000..=8000i32, 2000..=8000i32),
        offset in (1..=1000i32, 0..=1000i32),
    ) {
        let (cu, cv) = center;
        let (du, dv) = offset;
        let points: Vec<Point> = [(du, dv), (-dv, du), (-du, -dv), (dv, -du)]
            .iter()
            .map(|&(du, dv)| Point::new((cu + du) as f64 / 100.0, (cv + dv) as f64 / 100.0))
            .collect();
        let moments = Moments::of(&points);
        let sd = moments.std_u();
        let [major, minor] = pca_snapshot(&points).axes;
        prop_assert!((major.norm() - sd).abs() <= 1e-6 * (1.0 + sd));
        prop_assert!((minor.norm() - sd).abs() <= 1e-6 * (1.0 + sd));
        prop_assert!(major.inner(minor).abs() <= 1e-6 * (1.0 + sd * sd));
    }

    #[test]
    fn mapping_round_trips(p in point(), scale in 0.1f64..20.0) {
        let mapper = CoordinateMapper::new(EXTENT);
        prop_assert_eq!(mapper.to_data(mapper.to_surface(p, scale), scale), p);
    }
}
