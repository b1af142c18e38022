mod common;

use std::str::FromStr;

use cellscheme::error::{ErrKind, ErrorCategory};
use cellscheme::interpreter::MAX_EVAL_DEPTH;
use cellscheme::sexp::Sexp;


#[test]
fn literal_scenarios() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &["(+ 1 2)", "(quote (1 2 3))", "(cons 1 2)"],
    );
    assert_eq!(results, vec!["3", "(1 2 3)", "(1 . 2)"]);

    let results = common::results_with_errors(&mut interpreter, &["(1 2", "(- )", "foo"]);
    let categories = results
        .iter()
        .map(|res| res.as_ref().map_err(|err| err.category()).err())
        .collect::<Vec<_>>();
    assert_eq!(
        categories,
        vec![
            Some(ErrorCategory::Syntax),
            Some(ErrorCategory::Runtime),
            Some(ErrorCategory::Name),
        ]
    );
}

#[test]
fn read_print_round_trip() {
    for text in &[
        "42",
        "-7",
        "foo",
        "()",
        "(1 2 3)",
        "(a (b (c)) d)",
        "(1 . 2)",
        "(1 2 . 3)",
        "(quote x)",
        "(lambda (x) (* x x))",
    ] {
        let sexp = Sexp::from_str(text).unwrap();
        assert_eq!(sexp.to_string(), *text);
        assert_eq!(Sexp::from_str(&sexp.to_string()).unwrap().to_string(), *text);
    }
}

#[test]
fn arithmetic_identities() {
    let mut interpreter = common::setup();

    let results = common::results(&mut interpreter, &["(+)", "(*)", "(+ 5)", "(* 5)"]);
    assert_eq!(results, vec!["0", "1", "5", "5"]);
}

#[test]
fn addition_order_independent() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &["(+ 1 2 3 4)", "(+ 4 3 2 1)", "(+ 3 1 4 2)", "(+ -5 (* 2 3) 10)"],
    );
    assert_eq!(results, vec!["10", "10", "10", "11"]);
}

#[test]
fn subtraction_division_fold_left() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &["(- 5)", "(/ 5)", "(- 10 3 2)", "(/ 100 5 2)", "(/ 7 2)", "(/ -7 2)"],
    );
    assert_eq!(results, vec!["5", "5", "5", "10", "3", "-3"]);

    let err = interpreter.run("(/ 1 0)").unwrap_err();
    assert!(matches!(err.kind(), ErrKind::DivisionByZero));
    let err = interpreter.run("(* 9223372036854775807 2)").unwrap_err();
    assert!(matches!(err.kind(), ErrKind::IntegerOverflow(_)));
}

#[test]
fn comparison_chains() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &[
            "(< 1 2 3)",
            "(< 1 3 2)",
            "(<= 1 1 2)",
            "(> 3 2 1)",
            "(>= 3 3 4)",
            "(= 2 2 2)",
            "(= 2 2 3)",
            "(< 1)",
        ],
    );
    assert_eq!(results, vec!["#t", "#f", "#t", "#t", "#f", "#t", "#f", "#t"]);
}

#[test]
fn session_persistence() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &["(define x 10)", "(define y (+ x 5))", "(set! x 1)", "(+ x y)"],
    );
    assert_eq!(results, vec!["10", "15", "1", "16"]);

    // A fresh session starts empty.
    let mut other = common::setup();
    let err = other.run("x").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Name);
}

#[test]
fn recursive_procedures() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &[
            "(define (fact n) (if (= n 0) 1 (* n (fact (- n 1)))))",
            "(fact 10)",
            "(define fib (lambda (n) (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2))))))",
            "(fib 10)",
            "(define (len l) (if (null? l) 0 (+ 1 (len (cdr l)))))",
            "(len '(a b c d))",
        ],
    );
    assert_eq!(results[1], "3628800");
    assert_eq!(results[3], "55");
    assert_eq!(results[5], "4");
}

#[test]
fn closure_counters() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &[
            "(define (make-counter) (define n 0) (lambda () (set! n (+ n 1)) n))",
            "(define c (make-counter))",
            "(c)",
            "(c)",
            "(define d (make-counter))",
            "(d)",
            "(c)",
        ],
    );
    assert_eq!(results[2..], ["1", "2", "(lambda () (set! n (+ n 1)) n)", "1", "3"]);

    // The counter state is private to its closure.
    let err = interpreter.run("n").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Name);
}

#[test]
fn closures_capture_definition_frame() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &[
            "(define (adder k) (lambda (x) (+ x k)))",
            "(define add5 (adder 5))",
            "(define k 100)",
            "(add5 1)",
            "((adder 2) 3)",
        ],
    );
    assert_eq!(results[3..], ["6", "5"]);
}

#[test]
fn conditionals_and_logic() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &[
            "(if #f 1 2)",
            "(if 0 1 2)",
            "(if '() 1 2)",
            "(if #f 1)",
            "(and)",
            "(or)",
            "(and 1 2 3)",
            "(and 1 #f undefined)",
            "(or #f 2 undefined)",
            "(not #f)",
            "(not 0)",
        ],
    );
    assert_eq!(
        results,
        vec!["2", "1", "1", "()", "#t", "#f", "3", "#f", "2", "#t", "#f"]
    );
}

#[test]
fn list_operations() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &[
            "(define l (list 1 2 3 4))",
            "(car l)",
            "(cdr l)",
            "(car (cdr (cdr l)))",
            "(list-ref l 2)",
            "(list-tail l 2)",
            "(list-tail l 4)",
            "(cons 0 l)",
            "(list? l)",
            "(list? (cons 1 2))",
            "(pair? '())",
            "(null? '())",
        ],
    );
    assert_eq!(
        results,
        vec![
            "(1 2 3 4)",
            "1",
            "(2 3 4)",
            "3",
            "3",
            "(3 4)",
            "()",
            "(0 1 2 3 4)",
            "#t",
            "#f",
            "#f",
            "#t",
        ]
    );

    let results = common::results_with_errors(
        &mut interpreter,
        &["(car 1)", "(cdr '())", "(list-ref l 4)", "(list-tail l 5)", "(list-ref l -1)"],
    );
    for res in results {
        assert_eq!(res.unwrap_err().category(), ErrorCategory::Runtime);
    }
}

#[test]
fn dotted_printing() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &[
            "(cons 1 (cons 2 3))",
            "(cons 1 (cons 2 '()))",
            "'(1 . (2 3))",
            "'(1 . (2 . (3 . ())))",
            "(cons '(1) 2)",
        ],
    );
    assert_eq!(
        results,
        vec!["(1 2 . 3)", "(1 2)", "(1 2 3)", "(1 2 3)", "((1) . 2)"]
    );
}

#[test]
fn lexer_sign_quirks() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &["(+ 12+3)", "(+ 2 -x1)", "(+a 1 2)", "(- -3)", "(define a-b 4)", "a-b"],
    );
    assert_eq!(results, vec!["15", "1", "3", "-3", "4", "4"]);

    let err = interpreter.run("-5-").unwrap_err();
    assert!(matches!(err.kind(), ErrKind::UnboundSymbol(_)));
}

#[test]
fn pair_mutation_visible_through_alias() {
    let mut interpreter = common::setup();

    let results = common::results(
        &mut interpreter,
        &[
            "(define a '(1 2 3))",
            "(define b a)",
            "(set-car! a 10)",
            "b",
            "(set-cdr! (cdr b) '(30))",
            "a",
            "(define p (cons 1 2))",
            "(set-cdr! p p)",
            "(car (cdr (cdr p)))",
        ],
    );
    assert_eq!(results[3], "(10 2 3)");
    assert_eq!(results[5], "(10 2 30)");
    assert_eq!(results[8], "1");

    let err = interpreter.run("(set-car! 5 1)").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Runtime);
}

#[test]
fn recursion_limit_is_runtime_error() {
    let mut interpreter = common::setup();

    common::results(&mut interpreter, &["(define (spin n) (spin (+ n 1)))"]);
    let err = interpreter.run("(spin 0)").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Runtime);
    assert!(matches!(err.kind(), ErrKind::RecursionLimit(depth) if *depth == MAX_EVAL_DEPTH));
    assert!(err.to_string().starts_with("[Runtime Error]"));

    // Bounded recursion still works afterwards.
    common::results(
        &mut interpreter,
        &["(define (down n) (if (= n 0) 'done (down (- n 1))))"],
    );
    assert_eq!(interpreter.run("(down 20)").unwrap(), "done");
}

#[test]
fn recursion_through_if_reaches_limit() {
    let mut interpreter = common::setup();

    common::results(
        &mut interpreter,
        &["(define (down n) (if (= n 0) 'done (down (- n 1))))"],
    );
    // Two levels per call.
    assert_eq!(interpreter.run("(down 4900)").unwrap(), "done");

    let err = interpreter.run("(down 5100)").unwrap_err();
    assert!(matches!(err.kind(), ErrKind::RecursionLimit(_)));
}

#[test]
fn deep_non_tail_recursion() {
    let mut interpreter = common::setup();

    common::results(
        &mut interpreter,
        &["(define (count n) (if (= n 0) 0 (+ 1 (count (- n 1)))))"],
    );
    assert_eq!(interpreter.run("(count 1000)").unwrap(), "1000");
    assert_eq!(interpreter.run("(count 3000)").unwrap(), "3000");

    let err = interpreter.run("(count 4000)").unwrap_err();
    assert!(matches!(err.kind(), ErrKind::RecursionLimit(_)));
    assert_eq!(interpreter.run("(count 10)").unwrap(), "10");
}

#[test]
fn long_lists_are_freed() {
    let mut interpreter = common::setup();

    let elems = vec!["1"; 300_000].join(" ");
    let sexp = interpreter
        .eval_str(&format!("(define l (quote ({})))", elems))
        .unwrap();
    assert_eq!(sexp.list_length(), Some(300_000));
    drop(sexp);

    // Overwriting frees the old value.
    assert_eq!(interpreter.run("(define l 0)").unwrap(), "0");

    interpreter
        .eval_str(&format!("(define l (quote ({})))", elems))
        .unwrap();
    drop(interpreter);
}

#[test]
fn cyclic_list_indexing() {
    let mut interpreter = common::setup();

    common::results(
        &mut interpreter,
        &["(define p (list 1 2 3))", "(set-cdr! (cdr (cdr p)) p)"],
    );
    let results = common::results(
        &mut interpreter,
        &[
            "(list-ref p 4)",
            "(list-ref p 9223372036854775807)",
            "(car (list-tail p 9223372036854775806))",
        ],
    );
    assert_eq!(results, vec!["2", "2", "1"]);

    // Break the cycle so the cells can be freed.
    common::results(&mut interpreter, &["(set-cdr! (cdr (cdr p)) '())"]);
}

#[test]
fn reader_errors() {
    let mut interpreter = common::setup();

    let results = common::results_with_errors(
        &mut interpreter,
        &["", ")", "(1 . 2 3)", "1 2", "(a $b)", "99999999999999999999", "(. 1)"],
    );
    for res in results {
        assert_eq!(res.unwrap_err().category(), ErrorCategory::Syntax);
    }
}
