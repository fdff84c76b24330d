use cmd_help::CmdHelp;
use itertools::Itertools;
use rview::{EvalRes, Integer, RvErr};
use std::io::Write;

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// to out      输出到标准输出，未指定输出时的默认输出。
    ///             边拉取边输出，遇到错误时已输出的数据保留，随后报告错误。
    ///             to out[ <per_line>]
    ///                 <per_line>  每行输出的数据个数，以空格分隔，必须为正整数，可选，
    ///                             未指定时每行输出一个数据。
    ///             例如：
    ///                 to out
    ///                 to out 7
    StdOut { per_line: Option<usize> },
}

impl Output {
    pub(crate) fn new_std_out(per_line: Option<usize>) -> Self {
        Output::StdOut { per_line }
    }

    pub(crate) fn handle(&self, items: impl Iterator<Item = EvalRes<Integer>>) -> Result<(), RvErr> {
        self.write_to(items, &mut std::io::stdout())
    }

    fn write_to(&self, items: impl Iterator<Item = EvalRes<Integer>>, writer: &mut impl Write) -> Result<(), RvErr> {
        match self {
            Output::StdOut { per_line: None } => {
                for item in items {
                    writeln!(writer, "{}", item?).map_err(on_write_failed)?;
                }
                Ok(())
            }
            Output::StdOut { per_line: Some(per_line) } => {
                let mut row = Vec::with_capacity(*per_line);
                for item in items {
                    match item {
                        Ok(value) => {
                            row.push(value);
                            if row.len() == *per_line {
                                writeln!(writer, "{}", row.iter().join(" ")).map_err(on_write_failed)?;
                                row.clear();
                            }
                        }
                        Err(err) => {
                            flush_row(writer, &row)?;
                            return Err(err);
                        }
                    }
                }
                flush_row(writer, &row)
            }
        }
    }
}

fn flush_row(writer: &mut impl Write, row: &[Integer]) -> Result<(), RvErr> {
    if row.is_empty() { Ok(()) } else { writeln!(writer, "{}", row.iter().join(" ")).map_err(on_write_failed) }
}

fn on_write_failed(err: std::io::Error) -> RvErr {
    RvErr::StdOutErr(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(output: Output, items: Vec<EvalRes<Integer>>) -> (String, Result<(), RvErr>) {
        let mut buf = Vec::new();
        let res = output.write_to(items.into_iter(), &mut buf);
        (String::from_utf8(buf).unwrap(), res)
    }

    #[test]
    fn test_one_per_line() {
        let items = vec![Ok(4), Ok(16), Ok(36)];
        assert_eq!(written(Output::new_std_out(None), items), ("4\n16\n36\n".to_string(), Ok(())));
        assert_eq!(written(Output::new_std_out(None), vec![]), (String::new(), Ok(())));
    }

    #[test]
    fn test_per_line() {
        let items = (1..=9).map(Ok).collect();
        assert_eq!(written(Output::new_std_out(Some(7)), items), ("1 2 3 4 5 6 7\n8 9\n".to_string(), Ok(())));
        let items = (1..=4).map(Ok).collect();
        assert_eq!(written(Output::new_std_out(Some(2)), items), ("1 2\n3 4\n".to_string(), Ok(())));
    }

    #[test]
    fn test_fault_keeps_streamed_values() {
        let fault = RvErr::evaluation_fault("square", 4, "refused");
        let items = vec![Ok(4), Err(fault.clone()), Ok(36)];
        assert_eq!(written(Output::new_std_out(None), items.clone()), ("4\n".to_string(), Err(fault.clone())));
        assert_eq!(written(Output::new_std_out(Some(3)), items), ("4\n".to_string(), Err(fault)));
    }
}
