use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::args::input::parse_input;
use crate::parse::args::op::parse_ops;
use crate::parse::args::output::parse_output;
use rview::RvErr;
use std::iter::Peekable;
use std::str::FromStr;

mod config;
mod input;
mod op;
mod output;

pub(crate) use config::parse_configs;

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), RvErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(RvErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

fn parse_arg_or_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, RvErr> {
    match args.next() {
        // 至少有一个值，直接消耗
        Some(value) => {
            if value == "[" {
                // 多值开始
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value == "]" {
                        // 多值结束
                        return if values.is_empty() { Err(RvErr::ArgNotEnough { cmd, arg }) } else { Ok(values) };
                    } else {
                        values.push(value)
                    }
                }
                Err(RvErr::UnclosingMultiArg { cmd, arg })
            } else if value == "]" {
                // 未开启的多值结束
                Err(RvErr::UnexpectedClosingBracket { cmd, arg })
            } else {
                Ok(vec![value])
            }
        }
        None => Err(RvErr::MissingArg { cmd, arg }),
    }
}

/// 消耗一个必选参数并解析为`T`。
fn parse_required<T>(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<T, RvErr>
where
    T: FromStr,
    T::Err: ToString,
{
    match args.next() {
        Some(value) => parse_value(value, cmd, arg),
        None => Err(RvErr::MissingArg { cmd, arg }),
    }
}

fn parse_value<T>(value: String, cmd: &'static str, arg: &'static str) -> Result<T, RvErr>
where
    T: FromStr,
    T::Err: ToString,
{
    value.parse::<T>().map_err(|err| RvErr::ArgParseErr { cmd, arg, arg_value: value, error: err.to_string() })
}

/// 如果下一个参数可以解析为`T`则消耗并返回。
fn consume_if_some<M, U>(args: &mut Peekable<impl Iterator<Item = String>>, m: M) -> Option<U>
where
    M: FnOnce(&String) -> Option<U>,
{
    let option = args.peek().and_then(m);
    if option.is_some() {
        args.next();
    }
    option
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').filter(|arg| !arg.is_empty()).map(String::from).peekable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cond::{Condition, Select};
    use crate::mapping::Mapping;

    #[test]
    fn test_parse_arg_or_arg1() {
        let mut args = build_args("1 rest");
        assert_eq!(parse_arg_or_arg1(&mut args, "of", "int"), Ok(vec!["1".to_string()]));
        assert_eq!(args.next(), Some("rest".to_string()));

        let mut args = build_args("[ 1 2 ] rest");
        assert_eq!(parse_arg_or_arg1(&mut args, "of", "int"), Ok(vec!["1".to_string(), "2".to_string()]));
        assert_eq!(args.next(), Some("rest".to_string()));

        assert_eq!(
            parse_arg_or_arg1(&mut build_args(""), "of", "int"),
            Err(RvErr::MissingArg { cmd: "of", arg: "int" })
        );
        assert_eq!(
            parse_arg_or_arg1(&mut build_args("[ ]"), "of", "int"),
            Err(RvErr::ArgNotEnough { cmd: "of", arg: "int" })
        );
        assert_eq!(
            parse_arg_or_arg1(&mut build_args("[ 1 2"), "of", "int"),
            Err(RvErr::UnclosingMultiArg { cmd: "of", arg: "int" })
        );
        assert_eq!(
            parse_arg_or_arg1(&mut build_args("]"), "of", "int"),
            Err(RvErr::UnexpectedClosingBracket { cmd: "of", arg: "int" })
        );
    }

    #[test]
    fn test_parse() {
        let args = build_args("of [ 1 2 3 4 5 6 ] take even map square to out");
        assert_eq!(
            parse(args),
            Ok((
                Input::new_of(vec![1, 2, 3, 4, 5, 6]),
                vec![Op::new_take(Condition::Yes(Select::Even)), Op::new_map(Mapping::Square)],
                Output::new_std_out(None)
            ))
        );

        let args = build_args("gen 1 limit 21 to out 7");
        assert_eq!(
            parse(args),
            Ok((Input::new_gen(1, None, 1), vec![Op::new_limit(21)], Output::new_std_out(Some(7))))
        );

        assert_eq!(parse(build_args("")), Ok((Input::new_std_in(), vec![], Output::new_std_out(None))));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse(build_args("of 1 take even extra")),
            Err(RvErr::UnknownArgs { args: vec!["extra".to_string()] })
        );
    }
}
