//! Advisory validation of dynamically-typed configuration values.

use config::{Value, ValueKind};
use thiserror::Error;

pub const OPACITY_MIN: f64 = 0.0;
pub const OPACITY_MAX: f64 = 10.0;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid type for `{prop}` on {component}: expected a number")]
    Type {
        component: &'static str,
        prop: &'static str,
    },
    #[error("Invalid range for `{prop}` on {component}: {value} is outside 0..=10")]
    Range {
        component: &'static str,
        prop: &'static str,
        value: f64,
    },
}

/// Checks an opacity taken from raw configuration before deserialization.
///
/// Absent values are fine. Findings are advisory; callers log them and
/// carry on with defaults rather than aborting.
pub fn validate_opacity(
    component: &'static str,
    prop: &'static str,
    value: Option<&Value>,
) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };
    let number = match &value.kind {
        ValueKind::Nil => return Ok(()),
        ValueKind::I64(n) => *n as f64,
        ValueKind::I128(n) => *n as f64,
        ValueKind::U64(n) => *n as f64,
        ValueKind::U128(n) => *n as f64,
        ValueKind::Float(n) => *n,
        _ => return Err(ValidationError::Type { component, prop }),
    };
    if (OPACITY_MIN..=OPACITY_MAX).contains(&number) {
        Ok(())
    } else {
        Err(ValidationError::Range {
            component,
            prop,
            value: number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(kind: ValueKind) -> Value {
        Value::new(None, kind)
    }

    #[test]
    fn test_absent_is_valid() {
        assert_eq!(validate_opacity("dial", "opacity", None), Ok(()));
        let nil = value(ValueKind::Nil);
        assert_eq!(validate_opacity("dial", "opacity", Some(&nil)), Ok(()));
    }

    #[test]
    fn test_numbers_in_range_are_valid() {
        for kind in [
            ValueKind::I64(5),
            ValueKind::U64(10),
            ValueKind::Float(0.0),
            ValueKind::Float(0.2),
        ] {
            let v = value(kind);
            assert_eq!(validate_opacity("ring", "opacity", Some(&v)), Ok(()));
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let v = value(ValueKind::I64(11));
        assert_eq!(
            validate_opacity("dial", "opacity", Some(&v)),
            Err(ValidationError::Range {
                component: "dial",
                prop: "opacity",
                value: 11.0,
            })
        );
        let v = value(ValueKind::Float(-0.1));
        assert!(matches!(
            validate_opacity("dial", "opacity", Some(&v)),
            Err(ValidationError::Range { .. })
        ));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        for kind in [
            ValueKind::String("x".into()),
            ValueKind::Boolean(true),
            ValueKind::Array(Vec::new()),
        ] {
            let v = value(kind);
            assert_eq!(
                validate_opacity("dial", "opacity", Some(&v)),
                Err(ValidationError::Type {
                    component: "dial",
                    prop: "opacity",
                })
            );
        }
    }

    #[test]
    fn test_message_names_component_and_prop() {
        let v = value(ValueKind::String("x".into()));
        let err = validate_opacity("ring", "opacity", Some(&v)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ring") && msg.contains("opacity"));
    }
}
