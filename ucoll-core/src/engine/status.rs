use crate::error::{CollationError, EngineStatus, Result};
use rust_icu_sys as sys;
use rust_icu_sys::versioned_function;
#[allow(unused_imports)]
use rust_icu_sys::*;
use std::ffi::CStr;

/// Fresh status for an engine call
pub(crate) fn ok_status() -> sys::UErrorCode {
    sys::UErrorCode::U_ZERO_ERROR
}

/// ICU treats every code above `U_ZERO_ERROR` as a failure; negative codes are warnings
pub(crate) fn is_failure(status: sys::UErrorCode) -> bool {
    (status as i32) > (sys::UErrorCode::U_ZERO_ERROR as i32)
}

/// The engine had no data for the requested locale and opened the root collation
pub(crate) fn is_default_fallback(status: sys::UErrorCode) -> bool {
    status == sys::UErrorCode::U_USING_DEFAULT_WARNING
}

pub(crate) fn engine_status(status: sys::UErrorCode) -> EngineStatus {
    // SAFETY: u_errorName returns a pointer to a static, NUL-terminated name.
    let name = unsafe {
        let ptr = versioned_function!(u_errorName)(status);
        if ptr.is_null() {
            String::from("<unknown>")
        } else {
            CStr::from_ptr(ptr).to_string_lossy().into_owned()
        }
    };

    EngineStatus {
        code: status as i32,
        name,
    }
}

/// Turn a failed status into a typed error for `operation`
pub(crate) fn check(status: sys::UErrorCode, operation: &'static str) -> Result<()> {
    if is_failure(status) {
        log::debug!("{operation} reported {status:?}");
        return Err(CollationError::Engine {
            operation,
            status: engine_status(status),
        });
    }
    Ok(())
}

/// Version of the linked ICU library
pub(crate) fn engine_version() -> [u8; 4] {
    let mut info = [0u8; 4];
    // SAFETY: u_getVersion writes exactly U_MAX_VERSION_LENGTH (4) bytes.
    unsafe { versioned_function!(u_getVersion)(info.as_mut_ptr()) };
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_success() {
        assert!(!is_failure(ok_status()));
        assert!(check(ok_status(), "noop").is_ok());
    }

    #[test]
    fn test_warning_is_not_failure() {
        assert!(!is_failure(sys::UErrorCode::U_USING_DEFAULT_WARNING));
    }

    #[test]
    fn test_default_fallback_detected() {
        assert!(is_default_fallback(sys::UErrorCode::U_USING_DEFAULT_WARNING));
        assert!(!is_default_fallback(sys::UErrorCode::U_USING_FALLBACK_WARNING));
        assert!(!is_default_fallback(ok_status()));
    }

    #[test]
    fn test_failure_carries_code_and_name() {
        let err = check(sys::UErrorCode::U_ILLEGAL_ARGUMENT_ERROR, "ucol_open").unwrap_err();
        match err {
            CollationError::Engine { operation, status } => {
                assert_eq!(operation, "ucol_open");
                assert_eq!(status.code, 1);
                assert_eq!(status.name, "U_ILLEGAL_ARGUMENT_ERROR");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_engine_version_is_set() {
        assert!(engine_version()[0] > 0);
    }
}
