mod common;

use common::{c, from_rows};
use quijy::core::{isbra, isket, isop, qonvert, QType, QuijyError};

#[test]
fn ket_from_list() {
    let k = qonvert([1.0, 0.0], Some(QType::Ket), false, false).unwrap();
    assert_eq!(k.shape(), (2, 1));
    assert_eq!(k, from_rows(&[&[1.0], &[0.0]]));
    assert!(isket(&k));
}

#[test]
fn bra_from_list() {
    let b = qonvert([1.0, 0.0], Some(QType::Bra), false, false).unwrap();
    assert_eq!(b, from_rows(&[&[1.0, 0.0]]));
    assert!(isbra(&b));
}

#[test]
fn dop_from_list() {
    let rho = qonvert([1.0, 0.0], Some("dop".parse().unwrap()), false, false).unwrap();
    assert_eq!(rho, from_rows(&[&[1.0, 0.0], &[0.0, 0.0]]));
    assert!(isop(&rho));
}

#[test]
fn complex_bra_conjugates() {
    let b = qonvert(vec![c(0.0, 1.0), c(2.0, -3.0)], Some(QType::Bra), true, false).unwrap();
    assert!(b.is_sparse());
    assert_eq!(b.get(0, 0), c(0.0, -1.0));
    assert_eq!(b.get(0, 1), c(2.0, 3.0));
}

#[test]
fn normalized_dop_has_unit_trace() {
    let rho = qonvert([1.0, 1.0, 0.0, 0.0], Some(QType::Dop), false, true).unwrap();
    assert_eq!(rho.shape(), (4, 4));
    assert!((quijy::tr(&rho) - 1.0).abs() < 1e-12);
}

#[test]
fn unknown_qtype_names_are_errors() {
    assert_eq!("density".parse::<QType>(), Err(QuijyError::UnknownQType("density".into())));
}
