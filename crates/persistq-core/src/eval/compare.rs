use crate::value::{Float64, Value};
use std::cmp::Ordering;

// 2^63 as f64; every finite float below it and at or above its negation
// truncates to an in-range i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

///
/// Equality under numeric widening.
///
/// Returns `None` when the two values are not comparable (different kinds,
/// other than `Int` against `Float64`).
///
pub(crate) fn compare_eq(left: &Value, right: &Value) -> Option<bool> {
    if left.is_numeric() && right.is_numeric() {
        return compare_order(left, right).map(Ordering::is_eq);
    }

    (left.kind() == right.kind()).then(|| left == right)
}

///
/// Natural order within a kind, with `Int`/`Float64` widening.
///
/// Returns `None` for incomparable pairs, including lists, maps, and null.
///
pub(crate) fn compare_order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Float64(a), Value::Float64(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Float64(b)) => Some(cmp_int_float(*a, *b)),
        (Value::Float64(a), Value::Int(b)) => Some(cmp_int_float(*b, *a).reverse()),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Blob(a), Value::Blob(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

///
/// Total order used for sorting rows.
///
/// Missing sorts before null, null before every value; incomparable kinds
/// fall back to their stable kind tag. `Float64` and `Int` have adjacent
/// tags, so the fallback never splits the numeric range.
///
pub(crate) fn sort_cmp(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Null), Some(Value::Null)) => Ordering::Equal,
        (Some(Value::Null), Some(_)) => Ordering::Less,
        (Some(_), Some(Value::Null)) => Ordering::Greater,
        (Some(a), Some(b)) => {
            compare_order(a, b).unwrap_or_else(|| a.kind().tag().cmp(&b.kind().tag()))
        }
    }
}

///
/// Exact order of an integer against a finite float.
///
/// No `as f64` widening: `2^53 + 1` stays greater than `2^53` even though
/// both round to the same float.
///
#[expect(clippy::cast_possible_truncation)]
fn cmp_int_float(int: i64, float: Float64) -> Ordering {
    let float = float.get();
    if float >= I64_BOUND {
        return Ordering::Less;
    }
    if float < -I64_BOUND {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    int.cmp(&(whole as i64)).then_with(|| {
        let fract = float - whole;
        if fract > 0.0 {
            Ordering::Less
        } else if fract < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}
