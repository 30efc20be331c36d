//! Extensions for [serde_json::Value].
use serde_json::{Number, Value};

pub trait ValueExt {
    /// Arithmetic negation of a JSON number, keeping integers as integers.
    ///
    /// Returns `None` if the value is not a number.
    fn negated(&self) -> Option<Value>;
}

impl ValueExt for Value {
    fn negated(&self) -> Option<Value> {
        let n = match self {
            Value::Number(n) => n,
            _ => return None,
        };
        if let Some(i) = n.as_i64() {
            return Some(Value::Number(match i.checked_neg() {
                Some(neg) => neg.into(),
                // -i64::MIN only fits in u64
                None => i.unsigned_abs().into(),
            }));
        }
        if let Some(u) = n.as_u64() {
            let neg = -(u as i128);
            if let Ok(i) = i64::try_from(neg) {
                return Some(Value::Number(i.into()));
            }
            return Number::from_f64(-(u as f64)).map(Value::Number);
        }
        n.as_f64()
            .and_then(|f| Number::from_f64(-f))
            .map(Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_negate_float() {
        assert_eq!(json!(0.5).negated(), Some(json!(-0.5)));
        assert_eq!(json!(-12.25).negated(), Some(json!(12.25)));
    }

    #[test]
    fn test_negate_integer_stays_integer() {
        assert_eq!(json!(90).negated(), Some(json!(-90)));
        assert!(json!(90).negated().unwrap().is_i64());
        assert_eq!(json!(i64::MIN).negated(), Some(json!(9223372036854775808u64)));
        assert_eq!(json!(9223372036854775808u64).negated(), Some(json!(i64::MIN)));
    }

    #[test]
    fn test_negate_non_number() {
        assert_eq!(json!("90").negated(), None);
        assert_eq!(json!(null).negated(), None);
        assert_eq!(json!({}).negated(), None);
    }

    #[test]
    fn test_negate_twice_is_identity() {
        for v in [json!(0.5), json!(-3), json!(0), json!(1e10)] {
            assert_eq!(v.negated().unwrap().negated().unwrap(), v);
        }
    }
}
