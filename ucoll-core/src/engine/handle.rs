use super::status::{check, engine_status, is_default_fallback, is_failure, ok_status};
use super::text::EngineText;
use super::{engine_attribute, engine_value};
use crate::attributes::{Attribute, AttributeValue};
use crate::error::{CollationError, Result};
use rust_icu_sys as sys;
use rust_icu_sys::versioned_function;
#[allow(unused_imports)]
use rust_icu_sys::*;
use std::cmp::Ordering;
use std::ffi::{CStr, CString};
use std::ptr::{self, NonNull};

/// Which locale of a collator to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LocaleKind {
    /// Most specific locale for which any data exists
    Valid,
    /// Locale the collation data actually came from
    Actual,
}

impl LocaleKind {
    fn engine_kind(self) -> sys::ULocDataLocaleType {
        match self {
            LocaleKind::Valid => sys::ULocDataLocaleType::ULOC_VALID_LOCALE,
            LocaleKind::Actual => sys::ULocDataLocaleType::ULOC_ACTUAL_LOCALE,
        }
    }
}

/// Exclusively owned engine collator, closed on drop
#[derive(Debug)]
pub(crate) struct CollatorHandle {
    rep: NonNull<sys::UCollator>,
}

// SAFETY: an ICU collator has no thread affinity; it only must not be used
// from two threads at once, which the missing `Sync` impl rules out.
unsafe impl Send for CollatorHandle {}

impl CollatorHandle {
    /// Open the engine's native collator for `locale`
    pub(crate) fn open(locale: &str) -> Result<Self> {
        let c_locale = CString::new(locale).map_err(|_| {
            CollationError::InvalidArgument(format!("locale {locale:?} contains a NUL byte"))
        })?;

        let mut status = ok_status();
        // SAFETY: c_locale is NUL-terminated and outlives the call.
        let raw = unsafe { versioned_function!(ucol_open)(c_locale.as_ptr(), &mut status) };

        if is_failure(status) {
            return Err(CollationError::LocaleUnsupported {
                locale: locale.to_string(),
                status: engine_status(status),
            });
        }
        if is_default_fallback(status) {
            log::warn!("no collation data for locale '{locale}', using the root collation");
        }
        Self::from_raw(raw, "ucol_open")
    }

    /// Open a collator from tailoring rules
    pub(crate) fn open_rules(
        rules: &[sys::UChar],
        normalization: AttributeValue,
        strength: AttributeValue,
    ) -> Result<Self> {
        let rules = EngineText::new(rules)?;
        let mut status = ok_status();
        // SAFETY: UParseError is a plain C struct; all-zero is its initial state.
        let mut parse_error: sys::UParseError = unsafe { std::mem::zeroed() };

        // SAFETY: the rule buffer is valid for its length for the duration of the call.
        let raw = unsafe {
            versioned_function!(ucol_openRules)(
                rules.as_ptr(),
                rules.len(),
                engine_value(normalization),
                engine_value(strength),
                &mut parse_error,
                &mut status,
            )
        };

        if is_failure(status) {
            return Err(CollationError::InvalidRules {
                line: parse_error.line,
                offset: parse_error.offset,
                status: engine_status(status),
            });
        }
        Self::from_raw(raw, "ucol_openRules")
    }

    fn from_raw(raw: *mut sys::UCollator, operation: &'static str) -> Result<Self> {
        NonNull::new(raw)
            .map(|rep| Self { rep })
            .ok_or_else(|| CollationError::Engine {
                operation,
                status: engine_status(sys::UErrorCode::U_MEMORY_ALLOCATION_ERROR),
            })
    }

    fn as_ptr(&self) -> *const sys::UCollator {
        self.rep.as_ptr()
    }

    pub(crate) fn strcoll(&self, a: EngineText<'_>, b: EngineText<'_>) -> Ordering {
        // SAFETY: both buffers are valid for their reported lengths.
        let result = unsafe {
            versioned_function!(ucol_strcoll)(self.as_ptr(), a.as_ptr(), a.len(), b.as_ptr(), b.len())
        };

        match result {
            sys::UCollationResult::UCOL_LESS => Ordering::Less,
            sys::UCollationResult::UCOL_EQUAL => Ordering::Equal,
            sys::UCollationResult::UCOL_GREATER => Ordering::Greater,
        }
    }

    pub(crate) fn greater(&self, a: EngineText<'_>, b: EngineText<'_>) -> bool {
        // SAFETY: both buffers are valid for their reported lengths.
        let result = unsafe {
            versioned_function!(ucol_greater)(self.as_ptr(), a.as_ptr(), a.len(), b.as_ptr(), b.len())
        };
        result != 0
    }

    pub(crate) fn greater_or_equal(&self, a: EngineText<'_>, b: EngineText<'_>) -> bool {
        // SAFETY: both buffers are valid for their reported lengths.
        let result = unsafe {
            versioned_function!(ucol_greaterOrEqual)(
                self.as_ptr(),
                a.as_ptr(),
                a.len(),
                b.as_ptr(),
                b.len(),
            )
        };
        result != 0
    }

    pub(crate) fn equal(&self, a: EngineText<'_>, b: EngineText<'_>) -> bool {
        // SAFETY: both buffers are valid for their reported lengths.
        let result = unsafe {
            versioned_function!(ucol_equal)(self.as_ptr(), a.as_ptr(), a.len(), b.as_ptr(), b.len())
        };
        result != 0
    }

    /// Sort key without the trailing NUL terminator
    pub(crate) fn sort_key(&self, text: EngineText<'_>) -> Result<Vec<u8>> {

        // SAFETY: a null result buffer with length 0 only queries the size.
        let required = unsafe {
            versioned_function!(ucol_getSortKey)(
                self.as_ptr(),
                text.as_ptr(),
                text.len(),
                ptr::null_mut(),
                0,
            )
        };
        if required <= 0 {
            return Err(CollationError::Engine {
                operation: "ucol_getSortKey",
                status: engine_status(sys::UErrorCode::U_INTERNAL_PROGRAM_ERROR),
            });
        }

        let mut key = vec![0u8; required as usize];
        // SAFETY: key holds exactly `required` writable bytes.
        let written = unsafe {
            versioned_function!(ucol_getSortKey)(
                self.as_ptr(),
                text.as_ptr(),
                text.len(),
                key.as_mut_ptr(),
                required,
            )
        };
        if written != required {
            return Err(CollationError::Engine {
                operation: "ucol_getSortKey",
                status: engine_status(sys::UErrorCode::U_BUFFER_OVERFLOW_ERROR),
            });
        }

        if key.last() == Some(&0) {
            key.pop();
        }
        Ok(key)
    }

    /// Tailoring rules of the collator (empty for the root collation)
    pub(crate) fn rules(&self) -> String {
        let mut len: i32 = 0;
        // SAFETY: the returned buffer is owned by the collator and valid for `len` units.
        unsafe {
            let ptr = versioned_function!(ucol_getRules)(self.as_ptr(), &mut len);
            if ptr.is_null() || len <= 0 {
                return String::new();
            }
            String::from_utf16_lossy(std::slice::from_raw_parts(ptr, len as usize))
        }
    }

    pub(crate) fn locale(&self, kind: LocaleKind) -> Result<String> {
        let mut status = ok_status();
        // SAFETY: the returned name is owned by the collator (or static) and NUL-terminated.
        let name = unsafe {
            let ptr = versioned_function!(ucol_getLocaleByType)(
                self.as_ptr(),
                kind.engine_kind(),
                &mut status,
            );
            check(status, "ucol_getLocaleByType")?;
            if ptr.is_null() {
                String::new()
            } else {
                CStr::from_ptr(ptr).to_string_lossy().into_owned()
            }
        };
        Ok(name)
    }

    pub(crate) fn get_attribute(&self, attribute: Attribute) -> Result<AttributeValue> {
        let mut status = ok_status();
        // SAFETY: the handle is live for the duration of the call.
        let raw = unsafe {
            versioned_function!(ucol_getAttribute)(
                self.as_ptr(),
                engine_attribute(attribute),
                &mut status,
            )
        };
        check(status, "ucol_getAttribute")?;

        AttributeValue::from_code(raw as i32).map_err(|err| {
            log::warn!("engine returned unregistered value {} for {attribute}", raw as i32);
            err
        })
    }

    pub(crate) fn set_attribute(&mut self, attribute: Attribute, value: AttributeValue) -> Result<()> {
        let mut status = ok_status();
        // SAFETY: the handle is live and exclusively borrowed.
        unsafe {
            versioned_function!(ucol_setAttribute)(
                self.rep.as_ptr(),
                engine_attribute(attribute),
                engine_value(value),
                &mut status,
            )
        };
        check(status, "ucol_setAttribute")
    }

    pub(crate) fn version(&self) -> [u8; 4] {
        let mut info = [0u8; 4];
        // SAFETY: ucol_getVersion writes exactly 4 bytes.
        unsafe { versioned_function!(ucol_getVersion)(self.as_ptr(), info.as_mut_ptr()) };
        info
    }

    /// Identity of the underlying engine object
    pub(crate) fn same_handle(&self, other: &CollatorHandle) -> bool {
        self.rep == other.rep
    }
}

impl Drop for CollatorHandle {
    fn drop(&mut self) {
        // SAFETY: the pointer came from ucol_open/ucol_openRules and is closed exactly once.
        unsafe { versioned_function!(ucol_close)(self.rep.as_ptr()) };
    }
}
