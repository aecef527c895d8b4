//! Locale and keyword catalog

use crate::engine::Enumeration;
use crate::error::Result;
use rust_icu_sys::versioned_function;
#[allow(unused_imports)]
use rust_icu_sys::*;
use std::collections::BTreeMap;
use std::ffi::CStr;

/// Locales the engine has collation data for, in engine order
pub fn available_locales() -> Vec<String> {
    // SAFETY: no inputs.
    let count = unsafe { versioned_function!(ucol_countAvailable)() };

    (0..count)
        .filter_map(|index| {
            // SAFETY: index is within [0, count); the name is static engine data.
            unsafe {
                let ptr = versioned_function!(ucol_getAvailable)(index);
                (!ptr.is_null()).then(|| CStr::from_ptr(ptr).to_string_lossy().into_owned())
            }
        })
        .collect()
}

/// Collation keywords and their legal values, e.g. `collation → [phonebk, pinyin, …]`
pub fn keywords() -> Result<BTreeMap<String, Vec<String>>> {
    let names = Enumeration::collation_keywords()?.collect_strings()?;

    let mut catalog = BTreeMap::new();
    for keyword in names {
        let values = Enumeration::keyword_values(&keyword)?.collect_strings()?;
        log::debug!("keyword '{keyword}' has {} values", values.len());
        catalog.insert(keyword, values);
    }
    Ok(catalog)
}
