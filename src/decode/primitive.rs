// Scalar kinds eligible for baseline defaults; one extraction rule per kind.
use serde_json::Value;

/// A primitive scalar kind. Extraction is strict: a kind only accepts the
/// JSON shape serde_json itself would accept for it, and integer narrowing
/// is range-checked rather than wrapped.
pub trait Primitive: Clone + Send + Sync + 'static {
    /// Kind name used in error context, e.g. "u16".
    const NAME: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl Primitive for bool {
    const NAME: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Primitive for String {
    const NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Primitive for f64 {
    const NAME: &'static str = "f64";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Primitive for f32 {
    const NAME: &'static str = "f32";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64().map(|number| number as f32)
    }
}

macro_rules! signed_primitive {
    ($($kind:ty => $name:literal),* $(,)?) => {$(
        impl Primitive for $kind {
            const NAME: &'static str = $name;

            fn from_value(value: &Value) -> Option<Self> {
                value.as_i64().and_then(|number| Self::try_from(number).ok())
            }
        }
    )*};
}

macro_rules! unsigned_primitive {
    ($($kind:ty => $name:literal),* $(,)?) => {$(
        impl Primitive for $kind {
            const NAME: &'static str = $name;

            fn from_value(value: &Value) -> Option<Self> {
                value.as_u64().and_then(|number| Self::try_from(number).ok())
            }
        }
    )*};
}

signed_primitive! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
}

unsigned_primitive! {
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
}

#[cfg(test)]
mod tests {
    use super::Primitive;
    use serde_json::json;

    #[test]
    fn extraction_is_shape_strict() {
        assert_eq!(bool::from_value(&json!(true)), Some(true));
        assert_eq!(bool::from_value(&json!(1)), None);
        assert_eq!(String::from_value(&json!("x")), Some("x".to_string()));
        assert_eq!(String::from_value(&json!(1)), None);
        assert_eq!(i64::from_value(&json!("1")), None);
    }

    #[test]
    fn integer_narrowing_is_range_checked() {
        assert_eq!(u8::from_value(&json!(255)), Some(255));
        assert_eq!(u8::from_value(&json!(256)), None);
        assert_eq!(i8::from_value(&json!(-128)), Some(-128));
        assert_eq!(i8::from_value(&json!(-129)), None);
        assert_eq!(u32::from_value(&json!(-1)), None);
    }

    #[test]
    fn floats_accept_integral_numbers() {
        assert_eq!(f64::from_value(&json!(2)), Some(2.0));
        assert_eq!(f32::from_value(&json!(1.5)), Some(1.5));
        assert_eq!(f64::from_value(&json!("2.0")), None);
    }

    #[test]
    fn fractional_numbers_are_not_integers() {
        assert_eq!(i64::from_value(&json!(1.5)), None);
        assert_eq!(u64::from_value(&json!(2.0)), None);
    }

    #[test]
    fn null_never_extracts() {
        assert_eq!(bool::from_value(&json!(null)), None);
        assert_eq!(String::from_value(&json!(null)), None);
        assert_eq!(i32::from_value(&json!(null)), None);
        assert_eq!(f64::from_value(&json!(null)), None);
    }
}
