use super::status::{check, ok_status};
use crate::error::{CollationError, Result};
use rust_icu_sys as sys;
use rust_icu_sys::versioned_function;
#[allow(unused_imports)]
use rust_icu_sys::*;
use std::ffi::{CStr, CString};
use std::ptr::NonNull;

/// Owned engine string enumeration, closed on drop
#[derive(Debug)]
pub(crate) struct Enumeration {
    rep: NonNull<sys::UEnumeration>,
}

impl Enumeration {
    /// Collation keywords known to the engine (e.g. `collation`)
    pub(crate) fn collation_keywords() -> Result<Self> {
        let mut status = ok_status();
        // SAFETY: no inputs besides the status out-parameter.
        let raw = unsafe { versioned_function!(ucol_getKeywords)(&mut status) };
        check(status, "ucol_getKeywords")?;
        Self::from_raw(raw, "ucol_getKeywords")
    }

    /// Legal values of one collation keyword
    pub(crate) fn keyword_values(keyword: &str) -> Result<Self> {
        let c_keyword = CString::new(keyword).map_err(|_| {
            CollationError::InvalidArgument(format!("keyword {keyword:?} contains a NUL byte"))
        })?;

        let mut status = ok_status();
        // SAFETY: c_keyword is NUL-terminated and outlives the call.
        let raw =
            unsafe { versioned_function!(ucol_getKeywordValues)(c_keyword.as_ptr(), &mut status) };
        check(status, "ucol_getKeywordValues")?;
        Self::from_raw(raw, "ucol_getKeywordValues")
    }

    fn from_raw(raw: *mut sys::UEnumeration, operation: &'static str) -> Result<Self> {
        NonNull::new(raw)
            .map(|rep| Self { rep })
            .ok_or_else(|| CollationError::Engine {
                operation,
                status: super::status::engine_status(sys::UErrorCode::U_MEMORY_ALLOCATION_ERROR),
            })
    }

    /// Drain the remaining entries into owned strings
    pub(crate) fn collect_strings(&mut self) -> Result<Vec<String>> {
        let mut items = Vec::new();
        loop {
            let mut len: i32 = 0;
            let mut status = ok_status();
            // SAFETY: the enumeration is live; the returned string stays valid
            // until the next call on it and is copied before that.
            let item = unsafe {
                let ptr = versioned_function!(uenum_next)(self.rep.as_ptr(), &mut len, &mut status);
                check(status, "uenum_next")?;
                if ptr.is_null() {
                    break;
                }
                CStr::from_ptr(ptr).to_string_lossy().into_owned()
            };
            items.push(item);
        }
        Ok(items)
    }
}

impl Drop for Enumeration {
    fn drop(&mut self) {
        // SAFETY: the pointer came from an engine enumerator constructor and is closed once.
        unsafe { versioned_function!(uenum_close)(self.rep.as_ptr()) };
    }
}
