use crate::error::{CollationError, Result};
use rust_icu_sys as sys;
use smallvec::SmallVec;

/// UTF-16 buffer; short strings stay on the stack
pub(crate) type UCharBuf = SmallVec<[sys::UChar; 64]>;

pub(crate) fn to_uchars(text: &str) -> UCharBuf {
    text.encode_utf16().collect()
}

/// Length of a UTF-16 string as the engine's `i32`
pub(crate) fn engine_len(units: usize) -> Result<i32> {
    i32::try_from(units).map_err(|_| {
        CollationError::InvalidArgument(format!(
            "string of {units} UTF-16 code units exceeds the engine limit of {} units",
            i32::MAX
        ))
    })
}

/// UTF-16 text whose length fits the engine's `i32` lengths
#[derive(Debug, Clone, Copy)]
pub(crate) struct EngineText<'a> {
    units: &'a [sys::UChar],
    len: i32,
}

impl<'a> EngineText<'a> {
    pub(crate) fn new(units: &'a [sys::UChar]) -> Result<Self> {
        Ok(Self {
            units,
            len: engine_len(units.len())?,
        })
    }

    pub(crate) fn as_ptr(&self) -> *const sys::UChar {
        self.units.as_ptr()
    }

    pub(crate) fn len(&self) -> i32 {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_uchars_bmp() {
        assert_eq!(to_uchars("æøå").as_slice(), &[0x00E6, 0x00F8, 0x00E5]);
    }

    #[test]
    fn test_to_uchars_supplementary() {
        // NEWA LETTER KA is outside the BMP and needs a surrogate pair
        let units = to_uchars("\u{1140E}");
        assert_eq!(units.as_slice(), &[0xD805, 0xDC0E]);
    }

    #[test]
    fn test_engine_text_length() {
        let units = to_uchars("blah");
        let text = EngineText::new(&units).unwrap();
        assert_eq!(text.len(), 4);
        assert_eq!(text.as_ptr(), units.as_ptr());
    }

    #[test]
    fn test_engine_len_limit() {
        assert_eq!(engine_len(0).unwrap(), 0);
        assert_eq!(engine_len(i32::MAX as usize).unwrap(), i32::MAX);
    }

    #[test]
    fn test_over_long_text_is_invalid_argument() {
        let err = engine_len(i32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, CollationError::InvalidArgument(_)));
        assert!(err.to_string().contains("2147483648 UTF-16 code units"));
    }

    #[test]
    fn test_short_text_stays_inline() {
        assert!(!to_uchars("short").spilled());
        assert!(to_uchars(&"x".repeat(200)).spilled());
    }
}
