use cmd_help::CmdHelp;
use rview::{Integer, RvErr, Source};
use std::io;
use std::io::BufRead;

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// in          从标准输入读取以空白分隔的整数。
    ///             未指定数据源时的默认输入。
    ///             标准输入只能读取一次，因此会先全部读入再构造流水线。
    StdIn,
    /// of          使用直接字面值作为输入。
    ///             of <int>|[ <int>[ <int>][...] ]
    ///                 <int>   整数字面值，至少指定一个。
    ///             例如：
    ///                 of 3
    ///                 of [ 1 2 3 4 5 6 ]
    Of { values: Vec<Integer> },
    /// gen         生成等差数列作为输入。
    ///             gen <start>[,[<end>][,<step>]]
    ///                 <start> 起始值，包含，必须。
    ///                 <end>   结束值，不包含，可选。
    ///                         未指定时无限生成，直到整数边界。
    ///                 <step>  步长，不能为0，可选，未指定时取步长为1。
    ///                         步长为负值时递减生成。
    ///             例如：
    ///                 gen 1           生成：1 2 3 4 5 6 ...
    ///                 gen 0,10        生成：0 1 2 3 4 5 6 7 8 9
    ///                 gen 0,10,3      生成：0 3 6 9
    ///                 gen 0,,2        生成：0 2 4 6 8 10 ...
    ///                 gen 10,0,-3     生成：10 7 4 1
    ///                 gen 10,0        无数据生成
    Gen { start: Integer, end: Option<Integer>, step: Integer },
    /// repeat      重复一个整数作为输入。
    ///             repeat <int>[ <count>]
    ///                 <int>   需要重复的整数，必选。
    ///                 <count> 重复次数，必须为非负整数，可选，未指定时无限重复。
    Repeat { value: Integer, count: Option<usize> },
}

impl Input {
    pub(crate) fn new_std_in() -> Input {
        Input::StdIn
    }
    pub(crate) fn new_of(values: Vec<Integer>) -> Input {
        Input::Of { values }
    }
    pub(crate) fn new_gen(start: Integer, end: Option<Integer>, step: Integer) -> Input {
        Input::Gen { start, end, step }
    }
    pub(crate) fn new_repeat(value: Integer, count: Option<usize>) -> Input {
        Input::Repeat { value, count }
    }

    pub(crate) fn try_into_source(self) -> Result<Source, RvErr> {
        match self {
            Input::StdIn => read_integers(io::stdin().lock()).map(Source::new_of),
            Input::Of { values } => Ok(Source::new_of(values)),
            Input::Gen { start, end, step } => Source::new_gen(start, end, step),
            Input::Repeat { value, count } => Ok(Source::new_repeat(value, count)),
        }
    }
}

fn read_integers(reader: impl BufRead) -> Result<Vec<Integer>, RvErr> {
    let mut values = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| RvErr::StdInErr { line_no: line_no + 1, err: err.to_string() })?;
        for token in line.split_whitespace() {
            let value = token.parse::<Integer>().map_err(|err| RvErr::StdInErr {
                line_no: line_no + 1,
                err: format!("invalid integer `{token}`: {err}"),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integers() {
        assert_eq!(read_integers("1 2 3\n\n 4\t-5 \n".as_bytes()), Ok(vec![1, 2, 3, 4, -5]));
        assert_eq!(read_integers("".as_bytes()), Ok(vec![]));
    }

    #[test]
    fn test_read_integers_bad_token() {
        let res = read_integers("1 2\n3 x\n".as_bytes());
        assert!(matches!(res, Err(RvErr::StdInErr { line_no: 2, .. })));
    }

    #[test]
    fn test_try_into_source() {
        assert_eq!(Input::new_of(vec![1, 2]).try_into_source(), Ok(Source::new_of(vec![1, 2])));
        assert_eq!(Input::new_gen(1, None, 1).try_into_source(), Ok(Source::iota(1)));
        assert!(Input::new_gen(1, None, 0).try_into_source().is_err());
        assert_eq!(Input::new_repeat(3, Some(2)).try_into_source(), Ok(Source::new_repeat(3, Some(2))));
    }
}
