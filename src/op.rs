use crate::cond::Condition;
use crate::config::{Config, is_trace};
use crate::mapping::Mapping;
use crate::println_notice;
use cmd_help::CmdHelp;
use rview::Pipeline;

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Op {
    /* **************************************** 减少 **************************************** */
    /// take        根据指定条件选择数据保留，其他数据丢弃。
    ///             take <cond>
    ///                 <cond>  条件表达式，参考`-h cond`。
    ///             例如：
    ///                 take even
    ///                 take %3=1
    Take { cond: Condition },
    /// drop        根据指定条件选择数据丢弃，其他数据保留。
    ///             drop <cond>
    ///                 <cond>  条件表达式，参考`-h cond`。
    Drop { cond: Condition },
    /// while       根据指定条件持续保留数据，直到条件首次不满足，之后不再读取上游。
    ///             while <cond>
    ///                 <cond>  条件表达式，参考`-h cond`。
    ///             例如：
    ///                 gen 1 map square while <100
    While { cond: Condition },
    /// limit       保留前N个数据，之后不再读取上游。
    ///             limit <count>
    ///                 <count> 需要保留的数量，必须为非负整数，必选。
    Limit { count: usize },
    /* **************************************** 转换 **************************************** */
    /// map         对每个数据应用映射。
    ///             map <mapping>
    ///                 <mapping>   映射表达式，参考`-h map`。
    ///             例如：
    ///                 map square
    ///                 map +3
    Map { mapping: Mapping },
}

impl Op {
    pub(crate) fn new_take(cond: Condition) -> Op {
        Op::Take { cond }
    }
    pub(crate) fn new_drop(cond: Condition) -> Op {
        Op::Drop { cond }
    }
    pub(crate) fn new_while(cond: Condition) -> Op {
        Op::While { cond }
    }
    pub(crate) fn new_limit(count: usize) -> Op {
        Op::Limit { count }
    }
    pub(crate) fn new_map(mapping: Mapping) -> Op {
        Op::Map { mapping }
    }

    pub(crate) fn wrap(self, pipeline: Pipeline<'static>, configs: &'static [Config]) -> Pipeline<'static> {
        let trace = is_trace(configs);
        match self {
            Op::Take { cond } => pipeline.filter(move |v| {
                if trace {
                    println_notice!("{cond}({v})");
                }
                cond.test(v)
            }),
            Op::Drop { cond } => pipeline.filter(move |v| {
                if trace {
                    println_notice!("{cond}({v})");
                }
                cond.test(v).map(|selected| !selected)
            }),
            Op::While { cond } => pipeline.take_while(move |v| {
                if trace {
                    println_notice!("{cond}({v})");
                }
                cond.test(v)
            }),
            Op::Limit { count } => pipeline.limit(count),
            Op::Map { mapping } => pipeline.transform(move |v| {
                if trace {
                    println_notice!("{mapping}({v})");
                }
                mapping.apply(v)
            }),
        }
    }
}
