use cmd_help::CmdHelp;
use rview::{EvalRes, Integer, RvErr};
use std::fmt::{Display, Formatter};

/// 条件
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Condition {
    Yes(Select),
    No(Select),
}

impl Condition {
    pub(crate) fn new(select: Select, not: bool) -> Condition {
        if not { Condition::No(select) } else { Condition::Yes(select) }
    }

    pub(crate) fn test(&self, input: Integer) -> EvalRes<bool> {
        let selected = match self {
            Condition::Yes(select) => select.select(input),
            Condition::No(select) => select.select(input).map(|selected| !selected),
        };
        selected.map_err(|reason| RvErr::evaluation_fault(self.to_string(), input, reason))
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Yes(select) => write!(f, "{select}"),
            Condition::No(select) => write!(f, "!{select}"),
        }
    }
}

/// 选择
#[derive(Debug, Clone, PartialEq, Eq, CmdHelp)]
pub(crate) enum Select {
    /// [!]even
    ///     选择偶数。
    Even,
    /// [!]odd
    ///     选择奇数。
    Odd,
    /// [!]any
    ///     选择全部数据。
    Any,
    /// [!]<<n>
    ///     选择小于<n>的数据。
    ///     例如：
    ///         <10
    ///         !<-3
    Lt(Integer),
    /// [!]<=<n>
    ///     选择小于等于<n>的数据。
    Le(Integer),
    /// [!]><n>
    ///     选择大于<n>的数据。
    Gt(Integer),
    /// [!]>=<n>
    ///     选择大于等于<n>的数据。
    Ge(Integer),
    /// [!]=<n>
    ///     选择等于<n>的数据，'!=<n>'选择不等于<n>的数据。
    Eq(Integer),
    /// [!]%<m>=<r>
    ///     选择除以<m>的欧几里得余数等于<r>的数据。
    ///     <m>为0时在求值阶段报错，而不是在解析阶段。
    ///     例如：
    ///         %3=0
    ///         !%7=1
    Mod { modulus: Integer, remainder: Integer },
}

impl Select {
    fn select(&self, input: Integer) -> Result<bool, &'static str> {
        Ok(match self {
            Select::Even => input % 2 == 0,
            Select::Odd => input % 2 != 0,
            Select::Any => true,
            Select::Lt(n) => input < *n,
            Select::Le(n) => input <= *n,
            Select::Gt(n) => input > *n,
            Select::Ge(n) => input >= *n,
            Select::Eq(n) => input == *n,
            Select::Mod { modulus, remainder } => {
                if *modulus == 0 {
                    return Err("division by zero");
                }
                // MIN % -1 在欧几里得取余时为0，不会溢出
                input.checked_rem_euclid(*modulus).unwrap_or(0) == *remainder
            }
        })
    }
}

impl Display for Select {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Select::Even => write!(f, "even"),
            Select::Odd => write!(f, "odd"),
            Select::Any => write!(f, "any"),
            Select::Lt(n) => write!(f, "<{n}"),
            Select::Le(n) => write!(f, "<={n}"),
            Select::Gt(n) => write!(f, ">{n}"),
            Select::Ge(n) => write!(f, ">={n}"),
            Select::Eq(n) => write!(f, "={n}"),
            Select::Mod { modulus, remainder } => write!(f, "%{modulus}={remainder}"),
        }
    }
}
