use noze_grammar::{emit, grammar};
use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("grammar failed validation"))]
    Validate { source: grammar::validate::Error },
    #[snafu(display("failed to emit grammar"))]
    Emit { source: emit::Error },
}

#[snafu::report]
fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let grammar = noze_grammar::build();
    grammar.validate().context(ValidateSnafu)?;
    emit::write(&grammar, &emit::Output::default()).context(EmitSnafu)?;

    Ok(())
}
