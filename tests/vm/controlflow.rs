use crate::util::*;

#[test]
fn branching() {
    let result = run(&vec![
        let_("x", int(1)),
        let_("y", int(2)),
        for_range("n", 0, 3, vec![
            if_else(bin(var("x"), BO::Less, var("y")), vec![
                print(var("x")),
            ], Else::if_block(bin(var("x"), BO::Greater, var("y")), vec![
                print(var("y")),
            ], Some(Else::block(vec![
                print(bin(var("x"), BO::Add, var("y"))),
            ])))),
            assign("x", bin(var("x"), BO::Add, int(1))),
        ]),
    ]);
    assert_eq!(result, vec![ 1, 4, 2 ]);
}

#[test]
fn if_without_else() {
    let result = run(&vec![
        if_(boolean(true), vec![ print(int(1)) ]),
        if_(boolean(false), vec![ print(int(2)) ]),
        print(int(3)),
    ]);
    assert_eq!(result, vec![ 1, 3 ]);
}

#[test]
fn if_else_branches() {
    let result = run(&vec![
        if_else(int(0), vec![ print(int(1)) ], Else::block(vec![ print(int(2)) ])),
        if_else(int(-4), vec![ print(int(3)) ], Else::block(vec![ print(int(4)) ])),
    ]);
    assert_eq!(result, vec![ 2, 3 ]);
}

#[test]
fn for_loop() {
    let result = run(&vec![
        for_range("i", 0, 10, vec![ print(var("i")) ]),
    ]);
    assert_eq!(result, (0..10).collect::<Vec<Value>>());
}

#[test]
fn for_loop_no_iterations() {
    let result = run(&vec![
        for_range("i", 5, 5, vec![ print(var("i")) ]),
        print(int(99)),
    ]);
    assert_eq!(result, vec![ 99 ]);
}

#[test]
fn for_loop_descending() {
    let result = run(&vec![
        Statement::for_loop(let_("i", int(3)), bin(var("i"), BO::Greater, int(0)), expr(dec("i")), vec![ print(var("i")) ]),
    ]);
    assert_eq!(result, vec![ 3, 2, 1 ]);
}

#[test]
fn for_loop_outer_counter() {
    let result = run(&vec![
        let_("i", int(0)),
        Statement::for_loop(Statement::Empty, bin(var("i"), BO::Less, int(3)), assign("i", bin(var("i"), BO::Add, int(1))), vec![ ]),
        print(var("i")),
    ]);
    assert_eq!(result, vec![ 3 ]);
}

#[test]
fn nested_for_loops() {
    let result = run(&vec![
        let_("sum", int(0)),
        for_range("i", 0, 4, vec![
            for_range("j", 0, 3, vec![
                assign("sum", bin(var("sum"), BO::Add, bin(var("i"), BO::Mul, var("j")))),
            ]),
        ]),
        print(var("sum")),
    ]);
    assert_eq!(result, vec![ 18 ]);
}

#[test]
fn stack_is_balanced() {
    let program = compile(&vec![
        let_("a", int(1)),
        for_range("i", 0, 3, vec![ if_(var("i"), vec![ block(vec![ let_("t", var("i")) ]) ]) ]),
        expr(call("print", vec![ var("a") ])),
    ]);
    let mut vm = VM::new(&program, Vec::new());
    vm.run().unwrap();
    assert_eq!(vm.stack().data(), &[ 1 ]);
    assert_eq!(vm.output(), &vec![ 1 ]);
}
