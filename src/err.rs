use crate::Integer;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RvErr {
    /// 谓词或映射在某个元素上求值失败，当前遍历随即终止。
    #[error("[Evaluation Fault] Stage `{stage}` failed on element `{value}`: {reason}")]
    EvaluationFault { stage: String, value: Integer, reason: String },

    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Bad Arg] Invalid value `{arg_value}` in argument `{arg}` of cmd `{cmd}`: {reason}")]
    InvalidArg { cmd: &'static str, arg: &'static str, arg_value: String, reason: &'static str },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Closing bracket (`]`) for argument `{arg}` is required for cmd `{cmd}`")]
    UnclosingMultiArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unexpected closing bracket of argument `{arg}` for cmd `{cmd}`")]
    UnexpectedClosingBracket { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Input] Read line `{line_no}` from stdin error: {err}")]
    StdInErr { line_no: usize, err: String },

    #[error("[Output] Write to stdout error: {0}")]
    StdOutErr(String),
}

impl RvErr {
    pub fn evaluation_fault(stage: impl Into<String>, value: Integer, reason: impl Into<String>) -> RvErr {
        RvErr::EvaluationFault { stage: stage.into(), value, reason: reason.into() }
    }

    pub fn is_evaluation_fault(&self) -> bool {
        matches!(self, RvErr::EvaluationFault { .. })
    }

    /// 每种错误对应唯一的非零退出码。
    pub fn exit_code(&self) -> u8 {
        match self {
            RvErr::EvaluationFault { .. } => 1,
            RvErr::ArgParseErr { .. } => 2,
            RvErr::InvalidArg { .. } => 3,
            RvErr::MissingArg { .. } => 4,
            RvErr::ArgNotEnough { .. } => 5,
            RvErr::UnclosingMultiArg { .. } => 6,
            RvErr::UnexpectedClosingBracket { .. } => 7,
            RvErr::UnknownArgs { .. } => 8,
            RvErr::StdInErr { .. } => 9,
            RvErr::StdOutErr(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_fault_message() {
        let err = RvErr::evaluation_fault("map square", 4, "integer overflow");
        assert!(err.is_evaluation_fault());
        assert_eq!(err.to_string(), "[Evaluation Fault] Stage `map square` failed on element `4`: integer overflow");
    }

    #[test]
    fn test_exit_code_distinct() {
        let errs = [
            RvErr::evaluation_fault("s", 0, "r"),
            RvErr::ArgParseErr { cmd: "c", arg: "a", arg_value: String::new(), error: String::new() },
            RvErr::InvalidArg { cmd: "c", arg: "a", arg_value: String::new(), reason: "r" },
            RvErr::MissingArg { cmd: "c", arg: "a" },
            RvErr::ArgNotEnough { cmd: "c", arg: "a" },
            RvErr::UnclosingMultiArg { cmd: "c", arg: "a" },
            RvErr::UnexpectedClosingBracket { cmd: "c", arg: "a" },
            RvErr::UnknownArgs { args: vec![] },
            RvErr::StdInErr { line_no: 0, err: String::new() },
            RvErr::StdOutErr(String::new()),
        ];
        let mut codes = errs.iter().map(RvErr::exit_code).collect::<Vec<_>>();
        assert!(codes.iter().all(|code| *code != 0));
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
    }
}
