use ir::{ArithOp, Inst, Loc, NodeId, Program, RelOp};

fn build(code: &str) -> Program {
    match irgen::parse("shape", code) {
        Ok(program) => {
            for line in program.listing() {
                println!("{}", line);
            }
            program
        }
        Err(e) => panic!("{:?}", e),
    }
}

fn next(p: &Program, id: NodeId) -> NodeId {
    p.arena[id].next.unwrap_or_else(|| panic!("{} has no next", id))
}

fn target(p: &Program, id: NodeId) -> NodeId {
    p.arena[id]
        .inst
        .target()
        .unwrap_or_else(|| panic!("{} has no target", id))
}

fn is_noop(p: &Program, id: NodeId) -> bool {
    p.arena[id].inst == Inst::NOOP
}

/// Reachable nodes renumbered in discovery order, for comparing shapes
fn canon(p: &Program) -> Vec<(Inst, Option<usize>)> {
    let order = p.arena.reachable(p.root);
    let rank = |id: NodeId| order.iter().position(|x| *x == id).unwrap();
    order
        .iter()
        .map(|id| {
            let node = &p.arena[*id];
            let mut inst = node.inst.clone();
            if let Inst::CJMP { target, .. } | Inst::JMP { target } = &mut inst {
                *target = target.map(|t| NodeId(rank(t)));
            }
            (inst, node.next.map(&rank))
        })
        .collect()
}

/// Every edge resolves, jumps have targets, the final NOOP is the only open end
/// and nothing in the arena is unreachable.
fn assert_closed(p: &Program) {
    let reachable = p.arena.reachable(p.root);
    let mut open = vec![];
    for id in &reachable {
        let node = &p.arena[*id];
        for succ in node.successors() {
            assert!(p.arena.get(succ).is_some(), "{} -> {} dangles", id, succ);
        }
        if node.inst.is_jump() {
            assert!(node.inst.target().is_some(), "{} has no target", id);
        }
        if node.next.is_none() {
            open.push(*id);
        }
    }
    assert_eq!(open.len(), 1, "open ends: {:?}", open);
    assert!(is_noop(p, open[0]));
    assert_eq!(reachable.len(), p.arena.len());
}

macro_rules! closed {
    ($($name:ident: $code:expr,)*) => {
        $(
            #[test]
            fn $name() {
                assert_closed(&build($code));
            }
        )*
    }
}

closed! {
    closed_straight: "a; { a = 1; output a; input a; } 4",
    closed_while: "i; { while i < 3 { i = i + 1; } }",
    closed_if: "i; { if i > 0 { output i; } output i; }",
    closed_for: "i; { for ( i = 0; i < 3; i = i + 1; ) { output i; } }",
    closed_switch: "x; { switch x { case 1: { output 1; } case 2: { output 2; } } }",
    closed_switch_default: "x; { switch x { case 1: { output 1; } default: { output 9; } } }",
    closed_nested: "a, b; { while a < 3 { if b > 1 { switch a { case 0: { b = 0; } default: { for ( b = 0; b < 2; b = b + 1; ) { output b; } } } } a = a + 1; } output b; }",
    closed_last_is_loop: "i; { i = 0; while i < 3 { i = i + 1; } }",
}

#[test]
fn assign_node() {
    let p = build("a, b; { a = b * 3; }");
    assert_eq!(
        p.arena[p.root].inst,
        Inst::ASSIGN {
            dst: Loc(0),
            lhs: Loc(1),
            op: ArithOp::MULT,
            rhs: Some(Loc(2)),
        }
    );
    assert!(is_noop(&p, next(&p, p.root)));
}

#[test]
fn assign_bare_primary() {
    let p = build("a; { a = 5; }");
    assert_eq!(
        p.arena[p.root].inst,
        Inst::ASSIGN {
            dst: Loc(0),
            lhs: Loc(1),
            op: ArithOp::NONE,
            rhs: None,
        }
    );
}

#[test]
fn while_wiring() {
    let p = build("i; { while i < 3 { i = i + 1; } }");
    let cond = p.root;
    assert!(matches!(
        p.arena[cond].inst,
        Inst::CJMP {
            relop: RelOp::LESS,
            ..
        }
    ));
    let body = next(&p, cond);
    assert!(matches!(p.arena[body].inst, Inst::ASSIGN { .. }));
    let jmp = next(&p, body);
    assert!(matches!(p.arena[jmp].inst, Inst::JMP { .. }));
    assert_eq!(target(&p, jmp), cond);
    let end = target(&p, cond);
    assert!(is_noop(&p, end));
    assert_eq!(next(&p, jmp), end);
    assert!(is_noop(&p, next(&p, end)));
}

#[test]
fn if_wiring() {
    let p = build("i; { if i > 0 { output i; } }");
    let cond = p.root;
    let body = next(&p, cond);
    assert_eq!(p.arena[body].inst, Inst::OUT { src: Loc(0) });
    let end = next(&p, body);
    assert!(is_noop(&p, end));
    assert_eq!(target(&p, cond), end);
}

#[test]
fn for_wiring() {
    let p = build("i; { for ( i = 0; i < 3; i = i + 1; ) { output i; } }");
    let init = p.root;
    assert!(matches!(
        p.arena[init].inst,
        Inst::ASSIGN {
            op: ArithOp::NONE,
            ..
        }
    ));
    let cond = next(&p, init);
    assert!(matches!(p.arena[cond].inst, Inst::CJMP { .. }));
    let body = next(&p, cond);
    assert_eq!(p.arena[body].inst, Inst::OUT { src: Loc(0) });
    let step = next(&p, body);
    assert!(matches!(
        p.arena[step].inst,
        Inst::ASSIGN {
            op: ArithOp::PLUS,
            ..
        }
    ));
    let jmp = next(&p, step);
    assert_eq!(target(&p, jmp), cond);
    let end = target(&p, cond);
    assert_eq!(next(&p, jmp), end);
    assert!(is_noop(&p, end));
}

#[test]
fn for_has_while_shape() {
    let f = build("i; { for ( i = 0; i < 3; i = i + 1; ) { output i; } }");
    let w = build("i; { i = 0; while i < 3 { output i; i = i + 1; } }");
    assert_eq!(canon(&f), canon(&w));
    assert_eq!(f.memory, w.memory);
}

#[test]
fn switch_wiring() {
    let p = build(
        "x; { switch x { case 1: { output 1; } case 2: { output 2; } default: { output 9; } } }",
    );
    let x = p.symbols.var("x").unwrap();
    let one = p.symbols.konst(1).unwrap();
    let two = p.symbols.konst(2).unwrap();
    let nine = p.symbols.konst(9).unwrap();

    let t1 = p.root;
    assert_eq!(
        p.arena[t1].inst,
        Inst::CJMP {
            lhs: x,
            relop: RelOp::NOTEQUAL,
            rhs: one,
            target: p.arena[t1].inst.target(),
        }
    );
    let b1 = target(&p, t1);
    assert_eq!(p.arena[b1].inst, Inst::OUT { src: one });
    let end = next(&p, b1);
    assert!(is_noop(&p, end));

    let t2 = next(&p, t1);
    let b2 = target(&p, t2);
    assert_eq!(p.arena[b2].inst, Inst::OUT { src: two });
    assert_eq!(next(&p, b2), end);

    let default = next(&p, t2);
    assert!(matches!(p.arena[default].inst, Inst::JMP { .. }));
    let b9 = target(&p, default);
    assert_eq!(p.arena[b9].inst, Inst::OUT { src: nine });
    assert_eq!(next(&p, b9), end);
    assert_eq!(next(&p, default), end);
}

#[test]
fn switch_without_default_falls_to_end() {
    let p = build("x; { switch x { case 1: { x = 2; } case 2: { x = 3; } } output x; }");
    let t2 = next(&p, p.root);
    let end = next(&p, t2);
    assert!(is_noop(&p, end));
    assert_eq!(next(&p, target(&p, t2)), end);
    assert_eq!(p.arena[next(&p, end)].inst, Inst::OUT { src: Loc(0) });
}

#[test]
fn loop_exit_links_to_following_statement() {
    let p = build("i, j; { while i < 2 { while j < 2 { j = j + 1; } i = i + 1; } }");
    let outer = p.root;
    let inner = next(&p, outer);
    assert!(matches!(p.arena[inner].inst, Inst::CJMP { .. }));
    let inner_end = target(&p, inner);
    let step = next(&p, inner_end);
    assert!(matches!(p.arena[step].inst, Inst::ASSIGN { dst: Loc(0), .. }));
    let jmp = next(&p, step);
    assert_eq!(target(&p, jmp), outer);
}

#[test]
fn first_occurrence_order() {
    let p = build("b, a; { c = a + 7; output d; if a > 7 { e = 9; } }");
    assert_eq!(p.symbols.var("b"), Some(Loc(0)));
    assert_eq!(p.symbols.var("a"), Some(Loc(1)));
    assert_eq!(p.symbols.var("c"), Some(Loc(2)));
    assert_eq!(p.symbols.konst(7), Some(Loc(3)));
    assert_eq!(p.symbols.var("d"), Some(Loc(4)));
    assert_eq!(p.symbols.var("e"), Some(Loc(5)));
    assert_eq!(p.symbols.konst(9), Some(Loc(6)));
    assert_eq!(p.memory.cells(), &[0, 0, 0, 7, 0, 0, 9]);
}

#[test]
fn resolution_is_idempotent() {
    let p = build("x, x; { x = x + x; x = 1; x = 1 + x; }");
    assert_eq!(p.memory.len(), 2);
    for (_, node) in p.arena.iter() {
        if let Inst::ASSIGN { dst, .. } = node.inst {
            assert_eq!(dst, Loc(0));
        }
    }
}

#[test]
fn input_literals_are_not_allocated() {
    let p = build("a; { input a; input a; } 5 6 7");
    assert_eq!(p.inputs, vec![5, 6, 7]);
    assert_eq!(p.memory.len(), 1);
}

#[test]
fn long_statement_lists() {
    let code = format!("a; {{ {} }}", "a = a + 1; ".repeat(10_000));
    let p = build_quiet(&code);
    assert_eq!(p.arena.reachable(p.root).len(), 10_001);
}

fn build_quiet(code: &str) -> Program {
    irgen::parse("shape", code).unwrap()
}
