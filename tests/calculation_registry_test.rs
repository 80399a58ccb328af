use tally::{CalcError, CalculationKind, CalculationRegistry};

#[test]
fn test_builtin_scenario() {
    let mut registry = CalculationRegistry::new();
    registry.register_builtins().unwrap();

    let calc = registry.create("divide", 10.0, 4.0).unwrap();
    assert_eq!(calc.execute().unwrap(), 2.5);

    let calc = registry.create("divide", 10.0, 0.0).unwrap();
    let err = calc.execute().unwrap_err();
    assert_eq!(err, CalcError::DivisionByZero);
    assert_eq!(err.to_string(), "Division by zero is not allowed.");

    let err = registry.create("mod", 1.0, 2.0).unwrap_err();
    match &err {
        CalcError::UnknownOperation { name, available } => {
            assert_eq!(name, "mod");
            assert_eq!(available, &["add", "divide", "multiply", "subtract"]);
        }
        other => panic!("expected UnknownOperation, got {other:?}"),
    }
    assert!(err.to_string().contains("add, divide, multiply, subtract"));
}

#[test]
fn test_reset_then_register_single_operation() {
    let mut registry = CalculationRegistry::with_builtins();
    registry.reset();
    registry.register("add", CalculationKind::Add).unwrap();

    assert_eq!(registry.create("add", 3.0, 4.0).unwrap().execute(), Ok(7.0));

    let err = registry.create("subtract", 3.0, 4.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported calculation type: 'subtract'. Available types: add"
    );
}

#[test]
fn test_case_insensitive_create_matches() {
    let registry = CalculationRegistry::with_builtins();

    for (upper, lower) in [("ADD", "add"), ("Subtract", "subtract"), ("mULTIPLY", "multiply")] {
        let a = registry.create(upper, 2.0, 3.0).unwrap();
        let b = registry.create(lower, 2.0, 3.0).unwrap();
        assert_eq!(a.execute(), b.execute());
        assert_eq!(a.render(), b.render());
    }
}

#[test]
fn test_arithmetic_identities_over_sample_grid() {
    let registry = CalculationRegistry::with_builtins();
    let samples = [-8.7, -5.0, -0.5, 0.0, 0.5, 2.0, 4.0, 1e10];

    for &a in &samples {
        for &b in &samples {
            assert_eq!(registry.create("add", a, b).unwrap().execute(), Ok(a + b));
            assert_eq!(registry.create("subtract", a, b).unwrap().execute(), Ok(a - b));
            assert_eq!(registry.create("multiply", a, b).unwrap().execute(), Ok(a * b));

            let divided = registry.create("divide", a, b).unwrap().execute();
            if b == 0.0 {
                assert_eq!(divided, Err(CalcError::DivisionByZero));
            } else {
                assert_eq!(divided, Ok(a / b));
            }
        }
    }
}

#[test]
fn test_render_and_debug_forms() {
    let registry = CalculationRegistry::with_builtins();
    let calc = registry.create("add", 2.0, 5.0).unwrap();

    assert_eq!(calc.execute(), Ok(7.0));
    assert_eq!(calc.render().unwrap(), "AddCalculation: 2 Add 5 = 7");
    assert_eq!(format!("{calc:?}"), "AddCalculation(a=2, b=5)");

    // Rendering a failing calculation surfaces the error, debug form does not
    let calc = registry.create("divide", 1.0, 0.0).unwrap();
    assert_eq!(calc.render(), Err(CalcError::DivisionByZero));
    assert_eq!(format!("{calc:?}"), "DivideCalculation(a=1, b=0)");
}

#[test]
fn test_independent_registries_do_not_share_state() {
    let mut first = CalculationRegistry::with_builtins();
    let second = CalculationRegistry::with_builtins();

    first.reset();

    assert!(first.is_empty());
    assert_eq!(second.len(), 4);
}
