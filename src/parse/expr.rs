use crate::cond::{Condition, Select};
use crate::mapping::Mapping;
use rview::{Integer, RvErr};
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{char, i64};
use nom::combinator::{all_consuming, map, opt, success, value, verify};
use nom::error::context;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use nom_language::error::{VerboseError, convert_error};

pub(in crate::parse) type ParserError<'a> = VerboseError<&'a str>;

/// 解析完整的条件表达式：`[!]<select>`。
pub(in crate::parse) fn parse_cond(input: &str) -> IResult<&str, Condition, ParserError<'_>> {
    context(
        "Cond",
        map((opt(char('!')), parse_select), |(not, select)| Condition::new(select, not.is_some())),
    )
    .parse(input)
}

fn parse_select(input: &str) -> IResult<&str, Select, ParserError<'_>> {
    alt((
        context("Cond::Even", value(Select::Even, tag_no_case("even"))),
        context("Cond::Odd", value(Select::Odd, tag_no_case("odd"))),
        context("Cond::Any", value(Select::Any, tag_no_case("any"))),
        // 先匹配双字符的比较符
        context("Cond::Le", map(preceded(tag("<="), i64), Select::Le)),
        context("Cond::Ge", map(preceded(tag(">="), i64), Select::Ge)),
        context("Cond::Lt", map(preceded(char('<'), i64), Select::Lt)),
        context("Cond::Gt", map(preceded(char('>'), i64), Select::Gt)),
        context("Cond::Eq", map(preceded(char('='), i64), Select::Eq)),
        context(
            "Cond::Mod",
            map(preceded(char('%'), (i64, char('='), i64)), |(modulus, _, remainder)| Select::Mod {
                modulus,
                remainder,
            }),
        ),
    ))
    .parse(input)
}

pub(in crate::parse) fn parse_mapping(input: &str) -> IResult<&str, Mapping, ParserError<'_>> {
    context(
        "Mapping",
        alt((
            value(Mapping::Id, tag_no_case("id")),
            value(Mapping::Square, tag_no_case("square")),
            value(Mapping::Neg, tag_no_case("neg")),
            value(Mapping::Abs, tag_no_case("abs")),
            map(preceded(char('+'), i64), Mapping::Add),
            map(preceded(char('-'), i64), Mapping::Sub),
            map(preceded(char('*'), i64), Mapping::Mul),
            map(preceded(char('/'), i64), Mapping::Div),
            map(preceded(char('%'), i64), Mapping::Rem),
        )),
    )
    .parse(input)
}

/// 解析范围：`<start>[,[<end>][,<step>]]`，步长不能为0。
pub(in crate::parse) fn parse_range(
    input: &str,
) -> IResult<&str, (Integer, Option<Integer>, Integer), ParserError<'_>> {
    context(
        "Range",
        map(
            (
                context("Range::<start>", i64),
                opt(preceded(
                    char(','),
                    (
                        context("Range::[<end>]", opt(i64)),
                        alt((
                            preceded(char(','), context("Range::[<step>]", verify(i64, |step: &Integer| *step != 0))),
                            success(1),
                        )),
                    ),
                )),
            ),
            |(start, rest)| match rest {
                Some((end, step)) => (start, end, step),
                None => (start, None, 1),
            },
        ),
    )
    .parse(input)
}

/// 以`parser`解析完整参数，失败时转为参数解析错误。
pub(in crate::parse) fn parse_whole<'a, O, P>(
    parser: P, arg_value: &'a str, cmd: &'static str, arg: &'static str,
) -> Result<O, RvErr>
where
    P: Parser<&'a str, Output = O, Error = ParserError<'a>>,
{
    match all_consuming(parser).parse(arg_value) {
        Ok((_, res)) => Ok(res),
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => Err(RvErr::ArgParseErr {
            cmd,
            arg,
            arg_value: arg_value.to_owned(),
            error: convert_error(arg_value, err),
        }),
        Err(nom::Err::Incomplete(_)) => Err(RvErr::ArgParseErr {
            cmd,
            arg,
            arg_value: arg_value.to_owned(),
            error: "incomplete input".to_owned(),
        }),
    }
}
