use crate::input::Input;
use crate::parse::args::{consume_if_some, parse_arg_or_arg1, parse_required, parse_value};
use crate::parse::expr::{parse_range, parse_whole};
use rview::{Integer, RvErr};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RvErr> {
    match args.peek() {
        Some(cmd) => {
            if cmd.eq_ignore_ascii_case("in") {
                args.next(); // 消耗`in`
                Ok(Input::new_std_in())
            } else if cmd.eq_ignore_ascii_case("of") {
                parse_of(args)
            } else if cmd.eq_ignore_ascii_case("gen") {
                parse_gen(args)
            } else if cmd.eq_ignore_ascii_case("repeat") {
                parse_repeat(args)
            } else {
                Ok(Input::new_std_in())
            }
        }
        None => Ok(Input::new_std_in()),
    }
}

fn parse_of(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RvErr> {
    args.next(); // 消耗`of`
    let values = parse_arg_or_arg1(args, "of", "int")?
        .into_iter()
        .map(|value| parse_value::<Integer>(value, "of", "int"))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Input::new_of(values))
}

fn parse_gen(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RvErr> {
    args.next(); // 消耗`gen`
    match args.next() {
        Some(range) => {
            let (start, end, step) = parse_whole(parse_range, &range, "gen", "range")?;
            Ok(Input::new_gen(start, end, step))
        }
        None => Err(RvErr::MissingArg { cmd: "gen", arg: "range" }),
    }
}

fn parse_repeat(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RvErr> {
    args.next(); // 消耗`repeat`
    let value = parse_required::<Integer>(args, "repeat", "int")?;
    let count = consume_if_some(args, |s| s.parse::<usize>().ok());
    Ok(Input::new_repeat(value, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::args::build_args;

    #[test]
    fn test_default_std_in() {
        let mut args = build_args("take even");
        assert_eq!(parse_input(&mut args), Ok(Input::new_std_in()));
        assert_eq!(args.next(), Some("take".to_string()));

        let mut args = build_args("IN take even");
        assert_eq!(parse_input(&mut args), Ok(Input::new_std_in()));
        assert_eq!(args.next(), Some("take".to_string()));
    }

    #[test]
    fn test_parse_of() {
        let mut args = build_args("of 3");
        assert_eq!(parse_input(&mut args), Ok(Input::new_of(vec![3])));
        let mut args = build_args("of [ 1 -2 3 ]");
        assert_eq!(parse_input(&mut args), Ok(Input::new_of(vec![1, -2, 3])));
        assert!(args.next().is_none());

        let mut args = build_args("of [ 1 x ]");
        assert!(matches!(parse_input(&mut args), Err(RvErr::ArgParseErr { cmd: "of", arg: "int", .. })));
        let mut args = build_args("of");
        assert_eq!(parse_input(&mut args), Err(RvErr::MissingArg { cmd: "of", arg: "int" }));
    }

    #[test]
    fn test_parse_gen() {
        let mut args = build_args("gen 1");
        assert_eq!(parse_input(&mut args), Ok(Input::new_gen(1, None, 1)));
        let mut args = build_args("gen 0,10,3 map square");
        assert_eq!(parse_input(&mut args), Ok(Input::new_gen(0, Some(10), 3)));
        assert_eq!(args.next(), Some("map".to_string()));
        let mut args = build_args("gen 10,0,-1");
        assert_eq!(parse_input(&mut args), Ok(Input::new_gen(10, Some(0), -1)));

        let mut args = build_args("gen 0,,0");
        assert!(matches!(parse_input(&mut args), Err(RvErr::ArgParseErr { cmd: "gen", .. })));
        let mut args = build_args("gen");
        assert_eq!(parse_input(&mut args), Err(RvErr::MissingArg { cmd: "gen", arg: "range" }));
    }

    #[test]
    fn test_parse_repeat() {
        let mut args = build_args("repeat 7");
        assert_eq!(parse_input(&mut args), Ok(Input::new_repeat(7, None)));
        let mut args = build_args("repeat 7 3 limit 2");
        assert_eq!(parse_input(&mut args), Ok(Input::new_repeat(7, Some(3))));
        assert_eq!(args.next(), Some("limit".to_string()));
        let mut args = build_args("repeat -7 limit 2");
        assert_eq!(parse_input(&mut args), Ok(Input::new_repeat(-7, None)));
        assert_eq!(args.next(), Some("limit".to_string()));
        let mut args = build_args("repeat");
        assert_eq!(parse_input(&mut args), Err(RvErr::MissingArg { cmd: "repeat", arg: "int" }));
    }
}
