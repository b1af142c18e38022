use super::*;

use crate::error::{ErrKind, ErrorCategory};


fn int(value: i64) -> Sexp {
    Number::new(value).into()
}

fn ints(values: &[i64]) -> Args {
    values.iter().map(|v| int(*v)).collect()
}

fn parse(s: &str) -> Sexp {
    s.parse().unwrap()
}

fn runtime_err(res: Result<Sexp, Error>) -> ErrKind {
    let err = res.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Runtime);
    err.consume()
}

#[test]
fn table() {
    for name in &["+", "car", "list-tail", "null?"] {
        assert_eq!(lookup(name).unwrap().name(), *name);
    }
    assert!(lookup("define").is_none());
    assert_eq!(names().len(), 25);
}

#[test]
fn arithmetic_identities() {
    assert_eq!(add(vec![]).unwrap(), int(0));
    assert_eq!(mul(vec![]).unwrap(), int(1));
    assert_eq!(add(ints(&[1, 2, 3])).unwrap(), int(6));
    assert_eq!(mul(ints(&[2, 3, 4])).unwrap(), int(24));
}

#[test]
fn left_folds() {
    assert_eq!(sub(ints(&[5])).unwrap(), int(5));
    assert_eq!(sub(ints(&[10, 3, 2])).unwrap(), int(5));
    assert_eq!(div(ints(&[7])).unwrap(), int(7));
    assert_eq!(div(ints(&[100, 5, 2])).unwrap(), int(10));
    assert_eq!(div(ints(&[-7, 2])).unwrap(), int(-3));

    for res in vec![sub(vec![]), div(vec![])] {
        match runtime_err(res) {
            ErrKind::WrongArgumentCount { given, expected } => {
                assert_eq!(given, 0);
                assert_eq!(expected, ExpectedCount::AtLeast(1));
            }
            kind => panic!("Unexpected {:?}", kind),
        }
    }
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(runtime_err(div(ints(&[1, 0]))), ErrKind::DivisionByZero));
    assert!(matches!(
        runtime_err(add(ints(&[i64::MAX, 1]))),
        ErrKind::IntegerOverflow(_)
    ));
    assert!(matches!(
        runtime_err(abs(ints(&[i64::MIN]))),
        ErrKind::IntegerOverflow(_)
    ));
    assert!(matches!(
        runtime_err(add(vec![int(1), parse("a")])),
        ErrKind::InvalidArgument { .. }
    ));
}

#[test]
fn comparisons() {
    assert_eq!(lt(vec![]).unwrap(), parse("#t"));
    assert_eq!(lt(ints(&[1])).unwrap(), parse("#t"));
    assert_eq!(lt(ints(&[1, 2, 3])).unwrap(), parse("#t"));
    assert_eq!(lt(ints(&[1, 3, 2])).unwrap(), parse("#f"));
    assert_eq!(num_eq(ints(&[2, 2, 2])).unwrap(), parse("#t"));
    assert_eq!(ge(ints(&[3, 3, 1])).unwrap(), parse("#t"));
    assert_eq!(gt(ints(&[3, 3])).unwrap(), parse("#f"));
    assert_eq!(le(ints(&[1, 1, 2])).unwrap(), parse("#t"));
}

#[test]
fn min_max_abs() {
    assert_eq!(min(ints(&[4, -2, 7])).unwrap(), int(-2));
    assert_eq!(max(ints(&[4, -2, 7])).unwrap(), int(7));
    assert_eq!(abs(ints(&[-9])).unwrap(), int(9));
    assert!(matches!(
        runtime_err(max(vec![])),
        ErrKind::WrongArgumentCount { .. }
    ));
    assert!(matches!(
        runtime_err(abs(ints(&[1, 2]))),
        ErrKind::WrongArgumentCount { .. }
    ));
}

#[test]
fn predicates() {
    let t = parse("#t");
    let f = parse("#f");
    assert_eq!(is_number(ints(&[1])).unwrap(), t);
    assert_eq!(is_number(vec![parse("a")]).unwrap(), f);
    assert_eq!(is_boolean(vec![f.clone()]).unwrap(), t);
    assert_eq!(is_boolean(vec![parse("a")]).unwrap(), f);
    assert_eq!(is_symbol(vec![t.clone()]).unwrap(), t);
    assert_eq!(is_null(vec![Sexp::Nil]).unwrap(), t);
    assert_eq!(is_null(vec![parse("(1)")]).unwrap(), f);
    assert_eq!(is_pair(vec![parse("(1 . 2)")]).unwrap(), t);
    assert_eq!(is_pair(vec![Sexp::Nil]).unwrap(), f);
    assert_eq!(is_list(vec![Sexp::Nil]).unwrap(), t);
    assert_eq!(is_list(vec![parse("(1 2)")]).unwrap(), t);
    assert_eq!(is_list(vec![parse("(1 . 2)")]).unwrap(), f);
    assert_eq!(not(vec![f.clone()]).unwrap(), t);
    assert_eq!(not(ints(&[0])).unwrap(), f);

    assert!(matches!(
        runtime_err(is_null(vec![])),
        ErrKind::WrongArgumentCount { .. }
    ));
}

#[test]
fn pairs() {
    assert_eq!(cons(ints(&[1, 2])).unwrap().to_string(), "(1 . 2)");
    assert_eq!(cons(vec![int(1), Sexp::Nil]).unwrap().to_string(), "(1)");
    assert_eq!(car(vec![parse("(1 2)")]).unwrap(), int(1));
    assert_eq!(cdr(vec![parse("(1 2)")]).unwrap().to_string(), "(2)");
    assert_eq!(list(ints(&[1, 2, 3])).unwrap().to_string(), "(1 2 3)");
    assert_eq!(list(vec![]).unwrap(), Sexp::Nil);

    for arg in vec![Sexp::Nil, int(1)] {
        assert!(matches!(
            runtime_err(car(vec![arg])),
            ErrKind::InvalidArgument { .. }
        ));
    }
    assert!(matches!(
        runtime_err(cons(ints(&[1]))),
        ErrKind::WrongArgumentCount { .. }
    ));
}

#[test]
fn indexing() {
    let lst = parse("(1 2 3)");
    assert_eq!(list_ref(vec![lst.clone(), int(0)]).unwrap(), int(1));
    assert_eq!(list_ref(vec![lst.clone(), int(2)]).unwrap(), int(3));
    assert_eq!(
        list_tail(vec![lst.clone(), int(1)]).unwrap().to_string(),
        "(2 3)"
    );
    assert_eq!(list_tail(vec![lst.clone(), int(3)]).unwrap(), Sexp::Nil);

    assert!(matches!(
        runtime_err(list_ref(vec![lst.clone(), int(3)])),
        ErrKind::IndexOutOfRange { index: 3, .. }
    ));
    assert!(matches!(
        runtime_err(list_tail(vec![lst.clone(), int(4)])),
        ErrKind::IndexOutOfRange { .. }
    ));
    assert!(matches!(
        runtime_err(list_ref(vec![lst, int(-1)])),
        ErrKind::InvalidArgument { .. }
    ));
}

#[test]
fn indexing_cyclic_lists() {
    // (1 2 3 1 2 3 ...) after a two-element prefix (0 9).
    let lst = parse("(0 9 1 2 3)");
    let cycle_start = list_tail(vec![lst.clone(), int(2)]).unwrap();
    if let Sexp::Cons(last) = list_tail(vec![lst.clone(), int(4)]).unwrap() {
        last.set_cdr(cycle_start.clone());
    }

    assert_eq!(list_ref(vec![lst.clone(), int(1)]).unwrap(), int(9));
    assert_eq!(list_ref(vec![lst.clone(), int(5)]).unwrap(), int(1));
    assert_eq!(list_ref(vec![lst.clone(), int(i64::MAX)]).unwrap(), int(3));
    assert_eq!(
        list_ref(vec![lst.clone(), int(i64::MAX - 1)]).unwrap(),
        int(2)
    );

    // Break the cycle so the cells can be freed.
    if let Sexp::Cons(last) = list_tail(vec![lst, int(4)]).unwrap() {
        last.set_cdr(Sexp::Nil);
    }
}
