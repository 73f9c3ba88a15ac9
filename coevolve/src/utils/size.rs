#[cfg(test)]
#[path = "../../tests/unit/utils/size_test.rs"]
mod size_test;

use super::{SolverError, SolverResult};
use std::any::{Any, type_name};

/// Returns the size of a value which type is known only at runtime: length of a vector, count of
/// characters in a string, or the sum of sizes of nested vectors.
pub fn size_of<T: Any>(value: &T) -> SolverResult<usize> {
    let value = value as &dyn Any;

    macro_rules! try_len {
        ($($type_: ty),*) => {
            $(
                if let Some(value) = value.downcast_ref::<$type_>() {
                    return Ok(value.len());
                }
            )*
        };
    }

    try_len!(Vec<f64>, Vec<f32>, Vec<i32>, Vec<i64>, Vec<u8>, Vec<usize>, Vec<bool>);

    if let Some(value) = value.downcast_ref::<String>() {
        return Ok(value.chars().count());
    }

    if let Some(value) = value.downcast_ref::<&str>() {
        return Ok(value.chars().count());
    }

    if let Some(values) = value.downcast_ref::<Vec<Vec<f64>>>() {
        return Ok(values.iter().map(|v| v.len()).sum());
    }

    Err(SolverError::UnsupportedType { type_name: type_name::<T>().to_string() })
}
