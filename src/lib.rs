//! 惰性、可重复遍历的整数视图流水线。
//!
//! ```
//! use rview::{make_pipeline, traverse, Source};
//!
//! let pipeline = make_pipeline(Source::new_of(vec![1, 2, 3, 4, 5, 6]), |v| Ok(v % 2 == 0), |v| Ok(v * v));
//! let squares = traverse(&pipeline).collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(squares, vec![4, 16, 36]);
//! // 再次遍历会重新执行全部计算
//! assert_eq!(pipeline.collect().unwrap(), squares);
//! ```

pub mod err;
pub mod pipeline;
pub mod source;
pub mod view;

pub use err::RvErr;
pub use pipeline::{Cursor, Pipeline, Stage, make_pipeline, traverse};
pub use source::Source;
pub use view::EvalRes;

/// 整数类型
pub type Integer = i64;
