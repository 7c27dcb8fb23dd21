//! Converts arithmetic infix expressions into postfix (Reverse Polish) notation
//! and evaluates them.
//!
//! ```
//! use postfix_evaluator::interpreter::calculate;
//!
//! let evaluation = calculate("3*(4-2)").unwrap();
//! assert_eq!(evaluation.postfix.to_string(), "3 4 2 - *");
//! assert_eq!(evaluation.value.as_f64(), 6.0);
//! ```

pub mod interpreter;
