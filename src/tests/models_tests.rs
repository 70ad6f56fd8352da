#[cfg(test)]
mod tests {
    use crate::models::{display_optional, display_value};
    use mongodb::bson::{oid::ObjectId, Bson};

    #[test]
    fn test_strings_print_without_quotes() {
        assert_eq!(display_value(&Bson::String("abc123".to_string())), "abc123");
    }

    #[test]
    fn test_object_id_prints_as_hex() {
        let oid = ObjectId::parse_str("65f1a2b3c4d5e6f708192a3b").unwrap();
        assert_eq!(display_value(&Bson::ObjectId(oid)), "65f1a2b3c4d5e6f708192a3b");
    }

    #[test]
    fn test_null_and_missing_print_none() {
        assert_eq!(display_value(&Bson::Null), "None");
        assert_eq!(display_optional(None), "None");
        assert_eq!(display_optional(Some(&Bson::Null)), "None");
    }

    #[test]
    fn test_numbers_print_plainly() {
        assert_eq!(display_value(&Bson::Int32(42)), "42");
        assert_eq!(display_value(&Bson::Int64(7)), "7");
    }
}
