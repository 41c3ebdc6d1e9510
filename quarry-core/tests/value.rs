#[cfg(test)]
mod tests {
    use quarry_core::{AsValue, Value, ValueKind};

    #[test]
    fn kinds() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(42i16.as_value().kind(), ValueKind::Int16);
        assert_eq!(String::as_empty_value().kind(), ValueKind::Varchar);
        assert_eq!(Option::<f32>::as_empty_value().kind(), ValueKind::Float32);
        assert_eq!(Vec::<u8>::as_empty_value().kind(), ValueKind::Blob);
        assert_eq!(ValueKind::Int32.to_string(), "INTEGER");
        assert!(Value::Int64(None).same_type(&Value::Int64(Some(1))));
        assert!(!Value::Int64(None).same_type(&Value::Int32(None)));
    }

    #[test]
    fn nulls() {
        assert!(Value::Null.is_null());
        assert!(Value::Varchar(None).is_null());
        assert!(!Value::Varchar(Some(String::new())).is_null());
        assert_eq!(Value::Int32(None), Value::Int32(None));
        assert_ne!(Value::Int32(None), Value::Int64(None));
        assert_eq!(None::<bool>.as_value(), Value::Boolean(None));
    }

    #[test]
    fn integer_coercion() {
        assert_eq!(i16::try_from_value(Value::Int16(Some(i16::MIN))).unwrap(), i16::MIN);
        assert_eq!(i64::try_from_value(Value::Int64(Some(i64::MAX))).unwrap(), i64::MAX);
        assert_eq!(i32::try_from_value(Value::Int64(Some(77))).unwrap(), 77);
        assert_eq!(i64::try_from_value(Value::Int16(Some(-3))).unwrap(), -3);
        assert_eq!(i16::try_from_value(Value::Varchar(Some(" 12 ".into()))).unwrap(), 12);
        assert_eq!(i32::try_from_value(Value::Boolean(Some(true))).unwrap(), 1);
        assert!(i16::try_from_value(Value::Int64(Some(100_000))).is_err());
        assert!(i32::try_from_value(Value::Varchar(Some("twelve".into()))).is_err());
        assert!(i32::try_from_value(Value::Int32(None)).is_err());
        assert_eq!(i32::try_from_value(Value::Float64(Some(18.9))).unwrap(), 18);
        assert_eq!(i64::try_from_value(Value::Float64(Some(-2.7))).unwrap(), -2);
        assert_eq!(i16::try_from_value(Value::Float32(Some(97.0))).unwrap(), 97);
        assert_eq!(Option::<i32>::try_from_value(Value::Float64(Some(0.4))).unwrap(), Some(0));
        assert!(i16::try_from_value(Value::Float64(Some(40_000.0))).is_err());
        assert!(i64::try_from_value(Value::Float64(Some(1e19))).is_err());
        assert!(i32::try_from_value(Value::Float64(Some(f64::NAN))).is_err());
        assert!(i32::try_from_value(Value::Float32(Some(f32::INFINITY))).is_err());
    }

    #[test]
    fn float_coercion() {
        assert_eq!(f64::try_from_value(Value::Float32(Some(0.5))).unwrap(), 0.5);
        assert_eq!(f64::try_from_value(Value::Int64(Some(18))).unwrap(), 18.0);
        assert_eq!(f32::try_from_value(Value::Varchar(Some("21.35".into()))).unwrap(), 21.35);
        assert!(f64::try_from_value(Value::Blob(Some([1u8].into()))).is_err());
    }

    #[test]
    fn text_and_bool_coercion() {
        assert_eq!(String::try_from_value(Value::Int32(Some(5))).unwrap(), "5");
        assert_eq!(String::try_from_value(Value::Float64(Some(18.5))).unwrap(), "18.5");
        assert!(String::try_from_value(Value::Blob(Some([1u8].into()))).is_err());
        assert!(bool::try_from_value(Value::Int64(Some(2))).unwrap());
        assert!(!bool::try_from_value(Value::Varchar(Some("0".into()))).unwrap());
        assert!(bool::try_from_value(Value::Varchar(Some("TRUE".into()))).unwrap());
        assert!(bool::try_from_value(Value::Varchar(Some("yes".into()))).is_err());
    }

    #[test]
    fn blobs() {
        let blob = Vec::<u8>::try_from_value(Value::Blob(Some([0xDE, 0xAD].into()))).unwrap();
        assert_eq!(blob, [0xDE, 0xAD]);
        let from_text = Box::<[u8]>::try_from_value(Value::Varchar(Some("ab".into()))).unwrap();
        assert_eq!(&*from_text, b"ab");
    }

    #[test]
    fn options() {
        assert_eq!(Option::<i32>::try_from_value(Value::Null).unwrap(), None);
        assert_eq!(Option::<i32>::try_from_value(Value::Int64(None)).unwrap(), None);
        assert_eq!(
            Option::<i32>::try_from_value(Value::Int64(Some(9))).unwrap(),
            Some(9)
        );
        assert!(Option::<i32>::try_from_value(Value::Varchar(Some("x".into()))).is_err());
    }

    #[test]
    fn into_value() {
        assert_eq!(Value::from("Chais"), Value::Varchar(Some("Chais".into())));
        assert_eq!(Value::from(18.0), Value::Float64(Some(18.0)));
        assert_eq!(Value::from(Some(3i64)), Value::Int64(Some(3)));
    }
}
