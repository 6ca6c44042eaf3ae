use email_tfidf::*;
use ndarray::array;

#[test]
fn test_shape_and_nnz() {
    let m = WeightedMatrix::from_dense_rows(3, &[[0.0, 0.5, 0.0], [0.1, 0.0, 0.2]]).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.nnz(), 3);
}

#[test]
fn test_get() {
    let m = WeightedMatrix::from_triplets(2, 3, [(0, 2, 0.7), (1, 0, 0.4)]).unwrap();
    assert!((m.get(0, 2).unwrap() - 0.7).abs() < f64::EPSILON);
    assert!(m.get(0, 0).unwrap().abs() < f64::EPSILON);
    assert_eq!(
        m.get(0, 3).unwrap_err(),
        RankError::EntryOutOfBounds {
            row: 0,
            col: 3,
            rows: 2,
            cols: 3
        }
    );
    assert_eq!(
        m.get(2, 0).unwrap_err(),
        RankError::RowOutOfRange { row: 2, rows: 2 }
    );
}

#[test]
fn test_row_dense() {
    let m = WeightedMatrix::from_triplets(2, 4, [(1, 3, 0.25), (1, 1, 0.5)]).unwrap();
    assert_eq!(m.row_dense(1).unwrap(), array![0.0, 0.5, 0.0, 0.25]);
    assert_eq!(m.row_dense(0).unwrap(), array![0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_select_dense_follows_requested_order() {
    let m = WeightedMatrix::from_dense_rows(2, &[[0.1, 0.0], [0.0, 0.2], [0.3, 0.3]]).unwrap();
    let selected = m.select_dense(&[2, 0, 2]).unwrap();
    assert_eq!(selected, array![[0.3, 0.3], [0.1, 0.0], [0.3, 0.3]]);
}

#[test]
fn test_to_dense_round_trips_dense_rows() {
    let rows = [[0.0, 0.9, 0.1], [0.4, 0.0, 0.0]];
    let m = WeightedMatrix::from_dense_rows(3, &rows).unwrap();
    assert_eq!(m.to_dense(), array![[0.0, 0.9, 0.1], [0.4, 0.0, 0.0]]);
}

#[test]
fn test_zeros() {
    let m = WeightedMatrix::zeros(3, 2);
    assert_eq!(m.nnz(), 0);
    assert_eq!(m.to_dense(), ndarray::Array2::<f64>::zeros((3, 2)));
}

#[test]
fn test_ragged_rows_rejected() {
    let rows: Vec<Vec<f64>> = vec![vec![0.1, 0.2], vec![0.3]];
    let err = WeightedMatrix::from_dense_rows(2, &rows).unwrap_err();
    assert_eq!(
        err,
        RankError::RaggedRow {
            row: 1,
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_invalid_weights_rejected() {
    let err = WeightedMatrix::from_dense_rows(2, &[[0.1, -0.5]]).unwrap_err();
    assert!(matches!(err, RankError::InvalidWeight { row: 0, col: 1, .. }));

    let err = WeightedMatrix::from_triplets(1, 1, [(0, 0, f64::NAN)]).unwrap_err();
    assert!(matches!(err, RankError::InvalidWeight { row: 0, col: 0, .. }));
}

#[test]
fn test_triplet_out_of_bounds() {
    let err = WeightedMatrix::from_triplets(2, 2, [(2, 0, 0.1)]).unwrap_err();
    assert_eq!(
        err,
        RankError::EntryOutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2
        }
    );
}
