use cmd_help::CmdHelp;
use rview::{EvalRes, Integer, RvErr};
use std::fmt::{Display, Formatter};

/// 映射，全部使用受检算术，溢出或除零时在求值阶段报错。
#[derive(Debug, Clone, Copy, Eq, PartialEq, CmdHelp)]
pub(crate) enum Mapping {
    /// id
    ///     原样输出。
    Id,
    /// square
    ///     平方。
    Square,
    /// neg
    ///     取相反数。
    Neg,
    /// abs
    ///     取绝对值。
    Abs,
    /// +<n>
    ///     加上<n>。
    Add(Integer),
    /// -<n>
    ///     减去<n>。
    Sub(Integer),
    /// *<n>
    ///     乘以<n>。
    Mul(Integer),
    /// /<n>
    ///     除以<n>，向零取整。<n>为0时报错。
    Div(Integer),
    /// %<n>
    ///     对<n>取欧几里得余数。<n>为0时报错。
    ///     例如：
    ///         %3
    Rem(Integer),
}

impl Mapping {
    pub(crate) fn apply(&self, input: Integer) -> EvalRes<Integer> {
        let res = match self {
            Mapping::Id => Some(input),
            Mapping::Square => input.checked_mul(input),
            Mapping::Neg => input.checked_neg(),
            Mapping::Abs => input.checked_abs(),
            Mapping::Add(n) => input.checked_add(*n),
            Mapping::Sub(n) => input.checked_sub(*n),
            Mapping::Mul(n) => input.checked_mul(*n),
            Mapping::Div(0) | Mapping::Rem(0) => {
                return Err(RvErr::evaluation_fault(self.to_string(), input, "division by zero"));
            }
            Mapping::Div(n) => input.checked_div(*n),
            Mapping::Rem(n) => input.checked_rem_euclid(*n),
        };
        res.ok_or_else(|| RvErr::evaluation_fault(self.to_string(), input, "integer overflow"))
    }
}

impl Display for Mapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mapping::Id => write!(f, "id"),
            Mapping::Square => write!(f, "square"),
            Mapping::Neg => write!(f, "neg"),
            Mapping::Abs => write!(f, "abs"),
            Mapping::Add(n) => write!(f, "+{n}"),
            Mapping::Sub(n) => write!(f, "-{n}"),
            Mapping::Mul(n) => write!(f, "*{n}"),
            Mapping::Div(n) => write!(f, "/{n}"),
            Mapping::Rem(n) => write!(f, "%{n}"),
        }
    }
}
