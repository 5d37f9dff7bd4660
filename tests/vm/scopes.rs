use crate::util::*;

#[test]
fn block_scoping() {
    let result = run(&vec![
        let_("a", int(10)),
        print(var("a")),
        block(vec![
            let_("a", int(20)),
            print(var("a")),
        ]),
        print(var("a")),
    ]);
    assert_eq!(result, vec![ 10, 20, 10 ]);
}

#[test]
fn block_writes_outer() {
    let result = run(&vec![
        let_("a", int(1)),
        block(vec![ assign("a", int(5)), block(vec![ assign("a", bin(var("a"), BO::Mul, int(2))) ]) ]),
        print(var("a")),
    ]);
    assert_eq!(result, vec![ 10 ]);
}

#[test]
fn shadowing_in_same_scope() {
    let result = run(&vec![
        let_("a", int(1)),
        let_("a", int(2)),
        print(var("a")),
    ]);
    assert_eq!(result, vec![ 2 ]);
}

#[test]
fn if_body_scoping() {
    let result = run(&vec![
        let_("a", int(1)),
        if_else(boolean(true), vec![ let_("a", int(2)), print(var("a")) ], Else::block(vec![ ])),
        if_else(boolean(false), vec![ ], Else::block(vec![ let_("a", int(3)), print(var("a")) ])),
        print(var("a")),
    ]);
    assert_eq!(result, vec![ 2, 3, 1 ]);
}

#[test]
fn loop_body_scoping() {
    let result = run(&vec![
        let_("i", int(100)),
        for_range("i", 0, 2, vec![ let_("i", int(7)), print(var("i")) ]),
        print(var("i")),
    ]);
    assert_eq!(result, vec![ 7, 7, 100 ]);
}

#[test]
fn block_inside_function() {
    let result = run(&vec![
        func("f", vec![ "x" ], vec![
            block(vec![ let_("y", bin(var("x"), BO::Mul, int(2))), assign("x", var("y")) ]),
            return_(var("x")),
        ]),
        print(call("f", vec![ int(4) ])),
    ]);
    assert_eq!(result, vec![ 8 ]);
}

#[test]
fn function_scoped_to_block() {
    assert_eq!(
        compile_error(&vec![ block(vec![ func("f", vec![ ], vec![ ]) ]), expr(call("f", vec![ ])) ]),
        CompileErrorKind::Unresolved("f".to_string())
    );
}

#[test]
fn function_declared_in_block() {
    let result = run(&vec![
        block(vec![
            let_("k", int(3)),
            func("g", vec![ "v" ], vec![ return_(bin(var("v"), BO::Mul, var("k"))) ]),
            print(call("g", vec![ int(5) ])),
        ]),
    ]);
    assert_eq!(result, vec![ 15 ]);
}
