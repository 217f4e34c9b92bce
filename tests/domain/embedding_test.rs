use docqa::domain::Embedding;

#[test]
fn given_identical_vectors_when_computing_similarity_then_returns_one() {
    let a = Embedding::new(vec![0.3, 0.4, 0.5]);

    assert!((a.cosine_similarity(&a.clone()) - 1.0).abs() < 1e-6);
    assert!(a.cosine_distance(&a.clone()).abs() < 1e-6);
}

#[test]
fn given_orthogonal_vectors_when_computing_distance_then_returns_one() {
    let a = Embedding::new(vec![1.0, 0.0]);
    let b = Embedding::new(vec![0.0, 1.0]);

    assert!((a.cosine_distance(&b) - 1.0).abs() < 1e-6);
}

#[test]
fn given_different_dimensions_when_computing_similarity_then_returns_zero() {
    let a = Embedding::new(vec![1.0, 0.0]);
    let b = Embedding::new(vec![1.0, 0.0, 0.0]);

    assert_eq!(a.cosine_similarity(&b), 0.0);
}

#[test]
fn given_zero_vector_when_computing_similarity_then_returns_zero() {
    let a = Embedding::new(vec![0.0, 0.0]);
    let b = Embedding::new(vec![1.0, 0.0]);

    assert_eq!(a.cosine_similarity(&b), 0.0);
}

#[test]
fn given_vector_when_normalizing_then_has_unit_length() {
    let unit = Embedding::new(vec![3.0, 4.0]).normalized();

    assert!((unit.norm() - 1.0).abs() < 1e-6);
    assert_eq!(Embedding::new(vec![0.0, 0.0]).normalized().values, vec![0.0, 0.0]);
}
