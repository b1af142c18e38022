use cellscheme::error::Error;
use cellscheme::interpreter::Interpreter;


pub fn setup() -> Interpreter {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Interpreter::new()
}

pub fn results(interpreter: &mut Interpreter, inputs: &[&str]) -> Vec<String> {
    inputs
        .iter()
        .map(|input| match interpreter.run(input) {
            Ok(res) => res,
            Err(err) => panic!("{:?} failed: {}", input, err),
        })
        .collect::<Vec<_>>()
}

pub fn results_with_errors(
    interpreter: &mut Interpreter,
    inputs: &[&str],
) -> Vec<Result<String, Error>> {
    inputs
        .iter()
        .map(|input| interpreter.run(input))
        .collect::<Vec<_>>()
}
