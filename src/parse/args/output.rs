use crate::output::Output;
use crate::parse::args::consume_if_some;
use rview::RvErr;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RvErr> {
    if let Some(to_cmd) = args.peek()
        && to_cmd.eq_ignore_ascii_case("to")
    {
        args.next(); // 消耗`to`
        if args.peek().is_some_and(|output| output.eq_ignore_ascii_case("out")) {
            parse_std_out(args)
        } else {
            Err(RvErr::MissingArg { cmd: "to", arg: "out" })
        }
    } else {
        Ok(Output::new_std_out(None))
    }
}

fn parse_std_out(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RvErr> {
    args.next(); // 消耗`out`
    let per_line = consume_if_some(args, |s| s.parse::<usize>().ok());
    match per_line {
        Some(0) => Err(RvErr::InvalidArg {
            cmd: "to out",
            arg: "per_line",
            arg_value: "0".to_string(),
            reason: "per_line must be positive",
        }),
        _ => Ok(Output::new_std_out(per_line)),
    }
}
