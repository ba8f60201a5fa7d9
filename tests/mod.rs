use regasm::{
    assemble,
    builder::Builder,
    config::EngineConfig,
    execute,
    instruction::Register::{self, *},
    interpreter::interpret,
    Argument, AssemblyError, Engine, ExecutionError, Statement,
};

fn label(name: &str) -> Statement {
    Statement::label(name)
}

fn instr(mnemonic: &str, operands: Vec<Argument>) -> Statement {
    Statement::instruction(mnemonic, operands)
}

fn reg(reg: Register) -> Argument {
    reg.into()
}

fn run(statements: &[Statement]) -> (i64, i64, i64, i64) {
    let program = assemble(statements).unwrap();
    execute(&program).unwrap().into()
}

#[test]
fn empty_program() {
    assert_eq!(run(&[]), (0, 0, 0, 0));
}

#[test]
fn execution_is_deterministic() {
    let program = assemble(&[
        instr("mov", vec![reg(Cx), 5.into()]),
        label("top"),
        instr("inc", vec![reg(Ax), reg(Cx)]),
        instr("dec", vec![reg(Cx)]),
        instr("cmp", vec![reg(Cx), 0.into()]),
        instr("jg", vec!["top".into()]),
    ])
    .unwrap();

    let first = execute(&program).unwrap();
    let second = execute(&program).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.as_tuple(), (15, 0, 0, 0));
}

#[test]
fn increment_and_decrement() {
    let repeated: Vec<_> = (0..7).map(|_| instr("inc", vec![reg(Ax)])).collect();
    assert_eq!(run(&repeated).0, 7);

    assert_eq!(
        run(&[
            instr("inc", vec![reg(Ax), 7.into()]),
            instr("dec", vec![reg(Ax), 7.into()]),
        ]),
        (0, 0, 0, 0)
    );
}

#[test]
fn move_semantics() {
    assert_eq!(
        run(&[
            instr("mov", vec![reg(Bx), 5.into()]),
            instr("mov", vec![reg(Ax), reg(Bx)]),
        ]),
        (5, 5, 0, 0)
    );
}

fn conditional_branch(initial: i64) -> (i64, i64, i64, i64) {
    run(&[
        instr("mov", vec![reg(Ax), initial.into()]),
        instr("cmp", vec![reg(Ax), 1.into()]),
        instr("jne", vec!["skip".into()]),
        instr("mov", vec![reg(Bx), 9.into()]),
        label("skip"),
        instr("inc", vec![reg(Cx)]),
    ])
}

#[test]
fn comparison_and_conditional_branch() {
    assert_eq!(conditional_branch(1), (1, 9, 1, 0));
    assert_eq!(conditional_branch(2), (2, 0, 1, 0));
}

#[test]
fn countdown_loop_to_a_label() {
    assert_eq!(
        run(&[
            instr("mov", vec![reg(Cx), 3.into()]),
            label("loop"),
            instr("cmp", vec![reg(Cx), 0.into()]),
            instr("je", vec!["end".into()]),
            instr("dec", vec![reg(Cx)]),
            instr("jmp", vec!["loop".into()]),
            label("end"),
            instr("mov", vec![reg(Ax), 1.into()]),
        ]),
        (1, 0, 0, 0)
    );
}

#[test]
fn forward_jump_skips_instructions() {
    assert_eq!(
        run(&[
            instr("jmp", vec!["skip".into()]),
            instr("mov", vec![reg(Ax), 100.into()]),
            label("skip"),
            instr("mov", vec![reg(Ax), 1.into()]),
        ]),
        (1, 0, 0, 0)
    );
}

#[test]
fn out_of_range_jump() {
    let program = assemble(&[instr("jmp", vec![99.into()])]).unwrap();

    assert_eq!(
        execute(&program),
        Err(ExecutionError::JumpOutOfRange {
            at: 0,
            target: 99,
            len: 1
        })
    );
}

#[test]
fn endless_loop_hits_the_step_limit() {
    let program = assemble(&[label("spin"), instr("jmp", vec!["spin".into()])]).unwrap();
    let engine = Engine::new(EngineConfig::with_step_limit(1_000));

    assert_eq!(
        engine.run(&program),
        Err(ExecutionError::StepLimitExceeded { limit: 1_000 })
    );
}

#[test]
fn redefined_label_uses_last_declaration() {
    assert_eq!(
        run(&[
            label("target"),
            instr("inc", vec![reg(Ax)]),
            label("target"),
            instr("cmp", vec![reg(Bx), 0.into()]),
            instr("inc", vec![reg(Bx)]),
            instr("je", vec!["target".into()]),
        ]),
        (1, 2, 0, 0)
    );
}

#[test]
fn assembly_fails_atomically() {
    let result = assemble(&[
        instr("inc", vec![reg(Ax)]),
        instr("jg", vec!["nowhere".into()]),
    ]);

    assert_eq!(
        result,
        Err(AssemblyError::UndefinedLabel {
            statement: 1,
            label: "nowhere".to_owned()
        })
    );
}

#[test]
fn builder_and_text_agree() {
    let built = Builder::new()
        .mov(Dx, 4)
        .label("again")
        .inc_by(Bx, Dx)
        .dec(Dx)
        .cmp(Dx, 0)
        .jg("again")
        .run()
        .unwrap();

    let parsed = interpret(
        "mov dx, 4\nagain: inc bx, dx\ndec dx\ncmp dx, 0\njg again\n",
        EngineConfig::default(),
    )
    .unwrap();

    assert_eq!(built, parsed);
    assert_eq!(built.as_tuple(), (0, 10, 0, 0));
}
