/// `Display` and `FromStr` over an enum's `key()` and `ALL`.
///
/// Parsing is case-insensitive and treats `-` and spaces as `_`, so both
/// `tough-love` and `Tough Love` name `tough_love`.
macro_rules! snake_key_text {
    ($ty:ty, $field:literal) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
                Self::ALL
                    .into_iter()
                    .find(|v| v.key() == wanted)
                    .ok_or_else(|| $crate::error::ValidationError::InvalidValue {
                        field: $field.into(),
                        message: format!("unknown value: {s}"),
                    })
            }
        }
    };
}
