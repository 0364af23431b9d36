/// Prefixed text identifier (`h_0190...`), minted from a time-ordered UUID v7
pub trait AggregateId: Sized {
    /// Prefix that marks the aggregate kind, e.g. `"h"` for habits
    const PREFIX: &'static str;

    fn from_raw(raw: String) -> Self;

    fn as_str(&self) -> &str;

    /// Mint a fresh identifier
    fn generate() -> Self {
        Self::from_raw(format!("{}_{}", Self::PREFIX, uuid::Uuid::now_v7()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestId(String);

    impl AggregateId for TestId {
        const PREFIX: &'static str = "x";

        fn from_raw(raw: String) -> Self {
            Self(raw)
        }

        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn test_generate_is_prefixed_and_unique() {
        let a = TestId::generate();
        let b = TestId::generate();
        assert!(a.as_str().starts_with("x_"));
        assert_eq!(a.as_str().len(), 2 + 36);
        assert_ne!(a.as_str(), b.as_str());
    }
}
