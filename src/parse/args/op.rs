use crate::op::Op;
use crate::parse::args::parse_required;
use crate::parse::expr::{parse_cond, parse_mapping, parse_whole};
use rview::RvErr;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, RvErr> {
    let mut ops = vec![];
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RvErr> {
    match args.peek() {
        Some(cmd) => {
            if cmd.eq_ignore_ascii_case("take") {
                parse_take(args)
            } else if cmd.eq_ignore_ascii_case("drop") {
                parse_drop(args)
            } else if cmd.eq_ignore_ascii_case("while") {
                parse_while(args)
            } else if cmd.eq_ignore_ascii_case("limit") {
                parse_limit(args)
            } else if cmd.eq_ignore_ascii_case("map") {
                parse_map(args)
            } else {
                Ok(None)
            }
        }
        None => Ok(None),
    }
}

fn parse_take(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RvErr> {
    args.next(); // 消耗`take`
    match args.next() {
        Some(cond) => Ok(Some(Op::new_take(parse_whole(parse_cond, &cond, "take", "cond")?))),
        None => Err(RvErr::MissingArg { cmd: "take", arg: "cond" }),
    }
}

fn parse_drop(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RvErr> {
    args.next(); // 消耗`drop`
    match args.next() {
        Some(cond) => Ok(Some(Op::new_drop(parse_whole(parse_cond, &cond, "drop", "cond")?))),
        None => Err(RvErr::MissingArg { cmd: "drop", arg: "cond" }),
    }
}

fn parse_while(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RvErr> {
    args.next(); // 消耗`while`
    match args.next() {
        Some(cond) => Ok(Some(Op::new_while(parse_whole(parse_cond, &cond, "while", "cond")?))),
        None => Err(RvErr::MissingArg { cmd: "while", arg: "cond" }),
    }
}

fn parse_limit(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RvErr> {
    args.next(); // 消耗`limit`
    Ok(Some(Op::new_limit(parse_required(args, "limit", "count")?)))
}

fn parse_map(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RvErr> {
    args.next(); // 消耗`map`
    match args.next() {
        Some(mapping) => Ok(Some(Op::new_map(parse_whole(parse_mapping, &mapping, "map", "mapping")?))),
        None => Err(RvErr::MissingArg { cmd: "map", arg: "mapping" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cond::{Condition, Select};
    use crate::mapping::Mapping;
    use crate::parse::args::build_args;

    #[test]
    fn test_non_match() {
        let mut args = build_args("to out");
        assert_eq!(Ok(None), parse_op(&mut args));
        assert_eq!(Some("to".to_string()), args.next());
        assert_eq!(Ok(None), parse_op(&mut build_args("")));
    }

    #[test]
    fn test_parse_take_drop_while() {
        let mut args = build_args("take even");
        assert_eq!(Ok(Some(Op::new_take(Condition::Yes(Select::Even)))), parse_op(&mut args));
        assert!(args.next().is_none());

        let mut args = build_args("DROP !%3=0");
        assert_eq!(
            Ok(Some(Op::new_drop(Condition::No(Select::Mod { modulus: 3, remainder: 0 })))),
            parse_op(&mut args)
        );

        let mut args = build_args("while <100");
        assert_eq!(Ok(Some(Op::new_while(Condition::Yes(Select::Lt(100))))), parse_op(&mut args));

        let mut args = build_args("take");
        assert_eq!(Err(RvErr::MissingArg { cmd: "take", arg: "cond" }), parse_op(&mut args));
        let mut args = build_args("while");
        assert_eq!(Err(RvErr::MissingArg { cmd: "while", arg: "cond" }), parse_op(&mut args));
        let mut args = build_args("take prime");
        assert!(matches!(parse_op(&mut args), Err(RvErr::ArgParseErr { cmd: "take", arg: "cond", .. })));
    }

    #[test]
    fn test_parse_limit() {
        let mut args = build_args("limit 7");
        assert_eq!(Ok(Some(Op::new_limit(7))), parse_op(&mut args));
        let mut args = build_args("limit -1");
        assert!(matches!(parse_op(&mut args), Err(RvErr::ArgParseErr { cmd: "limit", arg: "count", .. })));
        let mut args = build_args("limit");
        assert_eq!(Err(RvErr::MissingArg { cmd: "limit", arg: "count" }), parse_op(&mut args));
    }

    #[test]
    fn test_parse_map() {
        let mut args = build_args("map square");
        assert_eq!(Ok(Some(Op::new_map(Mapping::Square))), parse_op(&mut args));
        let mut args = build_args("map /0");
        assert_eq!(Ok(Some(Op::new_map(Mapping::Div(0)))), parse_op(&mut args));
        let mut args = build_args("map");
        assert_eq!(Err(RvErr::MissingArg { cmd: "map", arg: "mapping" }), parse_op(&mut args));
    }

    #[test]
    fn test_parse_ops() {
        let mut args = build_args("take even map square limit 2 to out");
        assert_eq!(
            parse_ops(&mut args),
            Ok(vec![Op::new_take(Condition::Yes(Select::Even)), Op::new_map(Mapping::Square), Op::new_limit(2)])
        );
        assert_eq!(args.next(), Some("to".to_string()));
    }
}
