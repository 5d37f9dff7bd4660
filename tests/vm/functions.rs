use crate::util::*;

fn fib<'a>() -> Statement<'a> {
    func("fib", vec![ "n" ], vec![
        if_else(bin(var("n"), BO::Less, int(2)), vec![
            return_(var("n")),
        ], Else::block(vec![
            return_(bin(
                call("fib", vec![ bin(var("n"), BO::Sub, int(1)) ]),
                BO::Add,
                call("fib", vec![ bin(var("n"), BO::Sub, int(2)) ]),
            )),
        ])),
    ])
}

#[test]
fn recursion() {
    let result = run(&vec![
        fib(),
        print(call("fib", vec![ int(1) ])),
        print(call("fib", vec![ int(2) ])),
        print(call("fib", vec![ int(5) ])),
        print(call("fib", vec![ int(7) ])),
    ]);
    assert_eq!(result, vec![ 1, 1, 5, 13 ]);
}

#[test]
fn parameters() {
    let result = run(&vec![
        func("sub", vec![ "a", "b" ], vec![ return_(bin(var("a"), BO::Sub, var("b"))) ]),
        print(call("sub", vec![ int(10), int(3) ])),
        print(call("sub", vec![ int(3), int(10) ])),
    ]);
    assert_eq!(result, vec![ 7, -7 ]);
}

#[test]
fn implicit_return_value() {
    let result = run(&vec![
        func("nothing", vec![ ], vec![ ]),
        func("bare", vec![ ], vec![ Statement::ret(None) ]),
        print(call("nothing", vec![ ])),
        print(call("bare", vec![ ])),
        print(call("print", vec![ int(8) ])),
    ]);
    assert_eq!(result, vec![ 0, 0, 8, 0 ]);
}

#[test]
fn declaration_is_skipped() {
    let result = run(&vec![
        print(int(1)),
        func("f", vec![ ], vec![ print(int(2)) ]),
        print(int(3)),
    ]);
    assert_eq!(result, vec![ 1, 3 ]);
}

#[test]
fn locals_and_globals() {
    let result = run(&vec![
        let_("g", int(5)),
        func("f", vec![ "x" ], vec![
            let_("y", bin(var("x"), BO::Mul, int(2))),
            assign("g", bin(var("g"), BO::Add, var("y"))),
            return_(var("y")),
        ]),
        print(call("f", vec![ int(3) ])),
        print(var("g")),
    ]);
    assert_eq!(result, vec![ 6, 11 ]);
}

#[test]
fn assign_parameter() {
    let result = run(&vec![
        func("twice", vec![ "x" ], vec![ assign("x", bin(var("x"), BO::Mul, int(2))), return_(var("x")) ]),
        let_("a", int(21)),
        print(call("twice", vec![ var("a") ])),
        print(var("a")),
    ]);
    assert_eq!(result, vec![ 42, 21 ]);
}

#[test]
fn nested_functions() {
    let result = run(&vec![
        func("outer", vec![ "a" ], vec![
            let_("b", int(2)),
            func("inner", vec![ "c" ], vec![
                return_(bin(bin(var("a"), BO::Add, var("b")), BO::Add, var("c"))),
            ]),
            return_(call("inner", vec![ int(10) ])),
        ]),
        print(call("outer", vec![ int(1) ])),
    ]);
    assert_eq!(result, vec![ 13 ]);
}

#[test]
fn return_from_loop() {
    let result = run(&vec![
        func("find", vec![ "limit" ], vec![
            for_range("i", 0, 10, vec![
                if_(bin(var("i"), BO::Equal, var("limit")), vec![
                    return_(bin(var("i"), BO::Mul, int(10))),
                ]),
            ]),
            return_(unary(UO::Minus, int(1))),
        ]),
        print(call("find", vec![ int(3) ])),
        print(call("find", vec![ int(20) ])),
        print(int(7)),
    ]);
    assert_eq!(result, vec![ 30, -1, 7 ]);
}

#[test]
fn return_from_nested_blocks() {
    let result = run(&vec![
        func("f", vec![ "x" ], vec![
            block(vec![
                let_("y", int(1)),
                block(vec![
                    if_else(var("x"), vec![ return_(bin(var("x"), BO::Add, var("y"))) ], Else::block(vec![ print(int(-1)) ])),
                    print(int(100)),
                ]),
                print(int(200)),
            ]),
            return_(int(300)),
        ]),
        print(call("f", vec![ int(4) ])),
        print(call("f", vec![ int(0) ])),
    ]);
    assert_eq!(result, vec![ 5, -1, 100, 200, 300 ]);
}

#[test]
fn calls_in_arguments() {
    let result = run(&vec![
        func("add", vec![ "x", "y" ], vec![ return_(bin(var("x"), BO::Add, var("y"))) ]),
        print(call("add", vec![ call("add", vec![ int(1), int(2) ]), call("add", vec![ int(3), int(4) ]) ])),
    ]);
    assert_eq!(result, vec![ 10 ]);
}

#[test]
fn bare_return_from_block() {
    let result = run(&vec![
        func("f", vec![ "x" ], vec![
            block(vec![
                if_(var("x"), vec![ Statement::ret(None) ]),
                print(var("x")),
            ]),
            return_(int(5)),
        ]),
        print(call("f", vec![ int(1) ])),
        print(call("f", vec![ int(0) ])),
    ]);
    assert_eq!(result, vec![ 0, 0, 5 ]);
}
