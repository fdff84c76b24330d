use crate::Integer;
use crate::err::RvErr;

/// 数据源：有序的整数序列，可以有限也可以无限。
///
/// 数据源在遍历期间不可变，每次调用[`Source::iter`]都会从头开始产生相同的序列，
/// 多个游标之间互不影响。
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Source {
    /// 直接字面值。
    Of { values: Vec<Integer> },
    /// 等差数列，`end`不包含；`end`为`None`时无上限（到整数边界为止）。
    Gen { start: Integer, end: Option<Integer>, step: Integer },
    /// 重复某个值，`count`为`None`时无限重复。
    Repeat { value: Integer, count: Option<usize> },
}

impl Source {
    pub fn new_of(values: Vec<Integer>) -> Source {
        Source::Of { values }
    }

    /// 步长不能为0。
    pub fn new_gen(start: Integer, end: Option<Integer>, step: Integer) -> Result<Source, RvErr> {
        if step == 0 {
            Err(RvErr::InvalidArg { cmd: "gen", arg: "step", arg_value: step.to_string(), reason: "step can not be 0" })
        } else {
            Ok(Source::Gen { start, end, step })
        }
    }

    /// 从`start`开始逐一递增的无限序列。
    pub fn iota(start: Integer) -> Source {
        Source::Gen { start, end: None, step: 1 }
    }

    pub fn new_repeat(value: Integer, count: Option<usize>) -> Source {
        Source::Repeat { value, count }
    }

    /// 创建一个新的游标，从序列开头读取。
    pub fn iter(&self) -> Box<dyn Iterator<Item = Integer> + '_> {
        match self {
            Source::Of { values } => Box::new(values.iter().copied()),
            Source::Gen { start, end, step } => Box::new(GenIter { next: Some(*start), end: *end, step: *step }),
            Source::Repeat { value, count } => match count {
                Some(count) => Box::new(std::iter::repeat_n(*value, *count)),
                None => Box::new(std::iter::repeat(*value)),
            },
        }
    }
}

impl From<Vec<Integer>> for Source {
    fn from(values: Vec<Integer>) -> Self {
        Source::new_of(values)
    }
}

#[derive(Debug, Eq, PartialEq)]
struct GenIter {
    next: Option<Integer>,
    end: Option<Integer>,
    step: Integer,
}

impl Iterator for GenIter {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let in_range = match self.end {
            Some(end) => {
                if self.step > 0 {
                    current < end
                } else {
                    current > end
                }
            }
            None => true,
        };
        if in_range {
            // 溢出时结束，不回绕
            self.next = current.checked_add(self.step);
            Some(current)
        } else {
            self.next = None;
            None
        }
    }
}
