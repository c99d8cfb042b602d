//! Resolve the path of the `vc_property` crate as seen from the caller.
//!
//! The generated code must name `vc_property` through whatever the calling
//! crate depends on, so the caller's `Cargo.toml` is scanned:
//!
//! 1. `vc_property` in `dependencies` → `::vc_property`.
//! 2. `vc_props` in `dependencies` → `::vc_props::property`.
//! 3. Repeat 1-2 in `dev-dependencies`.
//! 4. Otherwise, fall back to `::vc_property`.
//!
//! The crate itself has `extern crate self as vc_property;`, so rule 4 also
//! covers its own tests and doctests.

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

const CRATE_NAME: &str = "vc_property";
const FACADE_NAME: &str = "vc_props";
const FACADE_MODULE: &str = "property";

// Resolved paths are cached per manifest and invalidated by its modified time.
// `syn::Path` is not `Send`, so the textual form is cached.
static RESOLVED: RwLock<BTreeMap<PathBuf, (SystemTime, String)>> = RwLock::new(BTreeMap::new());

fn manifest_path() -> Option<PathBuf> {
    let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
    path.push("Cargo.toml");
    Some(path)
}

fn find_in_deps(deps: &Table) -> Option<String> {
    if deps.contains_key(CRATE_NAME) {
        Some(format!("::{CRATE_NAME}"))
    } else if deps.contains_key(FACADE_NAME) {
        Some(format!("::{FACADE_NAME}::{FACADE_MODULE}"))
    } else {
        None
    }
}

fn resolve(manifest: &str) -> String {
    let fallback = format!("::{CRATE_NAME}");
    let Ok(document) = Document::parse(manifest) else {
        return fallback;
    };

    ["dependencies", "dev-dependencies"]
        .into_iter()
        .find_map(|key| match document.get(key) {
            Some(Item::Table(deps)) => find_in_deps(deps),
            _ => None,
        })
        .unwrap_or(fallback)
}

fn resolve_cached() -> String {
    let Some(manifest_path) = manifest_path() else {
        return format!("::{CRATE_NAME}");
    };
    let Ok(modified_time) = std::fs::metadata(&manifest_path).and_then(|meta| meta.modified()) else {
        return format!("::{CRATE_NAME}");
    };

    let cache = RESOLVED.read().unwrap_or_else(PoisonError::into_inner);
    if let Some((time, path)) = cache.get(&manifest_path)
        && *time == modified_time
    {
        return path.clone();
    }
    drop(cache);

    let resolved = match std::fs::read_to_string(&manifest_path) {
        Ok(manifest) => resolve(&manifest),
        Err(_) => format!("::{CRATE_NAME}"),
    };

    RESOLVED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(manifest_path, (modified_time, resolved.clone()));

    resolved
}

/// Get the correct access path to the `vc_property` crate.
///
/// Reading the manifest is not cheap, call it once per macro invocation and
/// pass the result around.
pub(crate) fn vc_property() -> syn::Path {
    syn::parse_str(&resolve_cached()).unwrap_or_else(|_| syn::parse_quote!(::vc_property))
}

// -----------------------------------------------------------------------------
// Tests
