use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{convert::convert, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the command selected by `args`.
///
/// Without a subcommand both INPUT and OUTPUT are required; if either is
/// missing, help is printed and the run fails.
pub fn run(Arguments { command, convert: convert_args }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => init(),
        None => {
            let (Some(input), Some(output)) = (&convert_args.input, &convert_args.output) else {
                Arguments::print_help();
                return Ok(ExitStatus::Failure);
            };
            convert(input, output, &convert_args)
        }
    }
}
